use serde::{Deserialize, Serialize};

/// Caller-supplied cursor hints.
///
/// All fields are optional: a caller with no editor cursor to report (e.g.
/// a batch formatter) simply passes `Options::default()`. Unknown keys in a
/// deserialized JSON payload are ignored, matching the external interface
/// contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Zero-based column of the cursor on `cursor_line`, if known.
    #[serde(default)]
    pub cursor_x: Option<usize>,
    /// Zero-based line the cursor is on, if known.
    #[serde(default)]
    pub cursor_line: Option<usize>,
    /// Signed shift applied to text at/after the cursor column on its line,
    /// used by editors to report an in-flight insertion or deletion.
    #[serde(default)]
    pub cursor_dx: Option<isize>,
}

impl Options {
    pub fn has_cursor(&self) -> bool {
        self.cursor_line.is_some() && self.cursor_x.is_some()
    }
}
