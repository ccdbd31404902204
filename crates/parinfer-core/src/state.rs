//! The single mutable value a run threads through the driver (spec §3 DATA MODEL).

use crate::edit;
use crate::error::{ErrorKind, ErrorPosCache, ParinferError};
use crate::options::Options;
use crate::paren_stack::Opener;
use crate::paren_trail::ParenTrail;
use crate::Mode;

pub(crate) struct State {
    pub(crate) mode: Mode,
    pub(crate) orig_text: String,
    pub(crate) orig_lines: Vec<String>,
    pub(crate) lines: Vec<String>,

    /// -1 before the first line has been initialized, matching the
    /// reference's sentinel; always `>= 0` once `init_line` has run.
    pub(crate) line_no: isize,
    pub(crate) x: usize,
    pub(crate) ch: String,

    pub(crate) paren_stack: Vec<Opener>,
    pub(crate) paren_trail: ParenTrail,

    pub(crate) cursor_x: Option<usize>,
    pub(crate) cursor_line: Option<usize>,
    pub(crate) cursor_dx: Option<isize>,

    pub(crate) is_in_code: bool,
    pub(crate) is_escaping: bool,
    pub(crate) is_in_str: bool,
    pub(crate) is_in_comment: bool,
    pub(crate) comment_x: Option<usize>,
    pub(crate) quote_danger: bool,
    pub(crate) tracking_indent: bool,
    pub(crate) skip_char: bool,
    pub(crate) max_indent: Option<usize>,
    pub(crate) indent_delta: isize,

    pub(crate) error_pos_cache: ErrorPosCache,
    pub(crate) error: Option<ParinferError>,
    pub(crate) success: bool,
}

impl State {
    pub(crate) fn new(text: &str, options: &Options, mode: Mode) -> Self {
        let orig_lines: Vec<String> = text.split('\n').map(str::to_owned).collect();
        State {
            mode,
            orig_text: text.to_owned(),
            orig_lines,
            lines: Vec::new(),
            line_no: -1,
            x: 0,
            ch: String::new(),
            paren_stack: Vec::new(),
            paren_trail: ParenTrail::default(),
            cursor_x: options.cursor_x,
            cursor_line: options.cursor_line,
            cursor_dx: options.cursor_dx,
            is_in_code: true,
            is_escaping: false,
            is_in_str: false,
            is_in_comment: false,
            comment_x: None,
            quote_danger: false,
            tracking_indent: false,
            skip_char: false,
            max_indent: None,
            indent_delta: 0,
            error_pos_cache: ErrorPosCache::new(),
            error: None,
            success: false,
        }
    }

    pub(crate) fn line_no_usize(&self) -> usize {
        debug_assert!(self.line_no >= 0);
        self.line_no as usize
    }

    pub(crate) fn cache_error_pos(&mut self, kind: ErrorKind, line_no: usize, x: usize) {
        match kind {
            ErrorKind::QuoteDanger => self.error_pos_cache.record_quote_danger(line_no, x),
            ErrorKind::UnclosedQuote => self.error_pos_cache.record_unclosed_quote(line_no, x),
            _ => {}
        }
    }

    /// Build an error, pulling its position from the cache when `pos` is
    /// absent. Only `QuoteDanger`/`UnclosedQuote` are ever confirmed without
    /// an explicit position, and both are always cached before the flag
    /// that gates this lookup can go true (see `error::ErrorPosCache`).
    pub(crate) fn new_error(&self, kind: ErrorKind, pos: Option<(usize, usize)>) -> ParinferError {
        let (line_no, x) = match pos {
            Some(p) => p,
            None => match kind {
                ErrorKind::QuoteDanger => self
                    .error_pos_cache
                    .quote_danger()
                    .expect("quote-danger position is cached at the moment it becomes true"),
                ErrorKind::UnclosedQuote => self
                    .error_pos_cache
                    .unclosed_quote()
                    .expect("unclosed-quote position is cached when the string is entered"),
                _ => unreachable!("only deferred error kinds look up the position cache"),
            },
        };
        ParinferError::new(kind, line_no, x)
    }

    // -- Line operations (spec §4.1, applied only to `lines`, never `origLines`) --

    pub(crate) fn insert_within_line(&mut self, line_no: usize, idx: usize, insert: &str) {
        self.lines[line_no] = edit::insert_within_line(&self.lines[line_no], idx, insert);
    }

    pub(crate) fn replace_within_line(&mut self, line_no: usize, start: usize, end: usize, replace: &str) {
        self.lines[line_no] = edit::replace_within_line(&self.lines[line_no], start, end, replace);
    }

    pub(crate) fn remove_within_line(&mut self, line_no: usize, start: usize, end: usize) {
        self.lines[line_no] = edit::remove_within_line(&self.lines[line_no], start, end);
    }

    pub(crate) fn init_line(&mut self, line: String) {
        self.x = 0;
        self.line_no += 1;
        self.lines.push(line);
        self.comment_x = None;
        self.indent_delta = 0;
    }

    pub(crate) fn commit_char(&mut self, orig_ch: &str) {
        let ch = self.ch.clone();
        if orig_ch != ch {
            let line_no = self.line_no_usize();
            let orig_len = orig_ch.chars().count();
            self.replace_within_line(line_no, self.x, self.x + orig_len, &ch);
        }
        self.x += ch.chars().count();
    }

    pub(crate) fn process_error(&mut self, e: ParinferError) {
        self.success = false;
        self.error = Some(e);
    }

    pub(crate) fn get_changed_lines(&self) -> Vec<crate::ChangedLine> {
        self.lines
            .iter()
            .zip(self.orig_lines.iter())
            .enumerate()
            .filter(|(_, (line, orig))| line != orig)
            .map(|(i, (line, _))| crate::ChangedLine {
                line_no: i,
                line: line.clone(),
            })
            .collect()
    }
}
