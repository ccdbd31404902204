#![no_main]
use libfuzzer_sys::fuzz_target;
use parinfer_core::{indent_mode, paren_mode, Options};

fuzz_target!(|data: &[u8]| {
    // Basic fuzzing for panic freedom.
    // The engine expects &str, so we convert.
    // We use lossy conversion to maximize coverage of inputs that are "almost" text.
    let s = String::from_utf8_lossy(data);
    let _ = indent_mode(&s, &Options::default());
    let _ = paren_mode(&s, &Options::default());
});
