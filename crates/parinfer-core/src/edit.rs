//! Pure string-edit primitives the driver composes to rewrite a line.
//!
//! Positions are code-point offsets, not byte offsets: a line is indexed the
//! way the reference implementation's native strings are, and for the ASCII
//! source text Lisp-family code overwhelmingly is, code points and bytes
//! coincide anyway. See `DESIGN.md` for the policy write-up required by the
//! spec's string-indexing open question.

/// Insert `insert` into `line` at code-point offset `start`.
pub fn insert_within_line(line: &str, start: usize, insert: &str) -> String {
    let mut out = String::with_capacity(line.len() + insert.len());
    let mut chars = line.chars();
    out.extend(chars.by_ref().take(start));
    out.push_str(insert);
    out.extend(chars);
    out
}

/// Replace the code-point range `[start, end)` of `line` with `replace`.
pub fn replace_within_line(line: &str, start: usize, end: usize, replace: &str) -> String {
    debug_assert!(start <= end);
    let mut out = String::with_capacity(line.len() + replace.len());
    let mut chars = line.chars();
    out.extend(chars.by_ref().take(start));
    out.push_str(replace);
    out.extend(chars.skip(end - start));
    out
}

/// Remove the code-point range `[start, end)` from `line`.
pub fn remove_within_line(line: &str, start: usize, end: usize) -> String {
    replace_within_line(line, start, end, "")
}

/// Repeat `text` `n` times, or the empty string if `n == 0`.
pub fn repeat_string(text: &str, n: usize) -> String {
    text.repeat(n)
}

/// Number of code points in `line`, the unit all positions in this crate are
/// expressed in.
pub fn line_len(line: &str) -> usize {
    line.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_at_start_middle_end() {
        assert_eq!(insert_within_line("foo", 0, "("), "(foo");
        assert_eq!(insert_within_line("foo", 1, "X"), "fXoo");
        assert_eq!(insert_within_line("foo", 3, ")"), "foo)");
    }

    #[test]
    fn replace_range() {
        assert_eq!(replace_within_line("(foo bar)", 5, 8, "baz"), "(foo baz)");
        assert_eq!(replace_within_line("\tfoo", 0, 1, "  "), "  foo");
    }

    #[test]
    fn remove_range() {
        assert_eq!(remove_within_line("(foo))", 5, 6), "(foo)");
        assert_eq!(remove_within_line("(foo))", 4, 6), "(foo");
    }

    #[test]
    fn repeat_and_len_count_code_points() {
        assert_eq!(repeat_string(")", 3), ")))");
        assert_eq!(repeat_string("x", 0), "");
        assert_eq!(line_len("(foo)"), 5);
    }
}
