//! PO entry assembler
//!
//! Lines are fed one at a time. `msgid`/`msgstr` lines set the field being
//! built, lines starting with `"` continue it, and an entry is emitted when
//! the next `msgid` starts or when input ends. Problems on a single line are
//! recorded as [`LineWarning`]s and logged; they never stop the run.

use tracing::{trace, warn};

use crate::buffer::FieldBuffer;
use crate::error::{Field, LineWarning, WarningKind};
use crate::extract::{extract_quoted, ExtractError};

const MSGID_KEYWORD: &str = "msgid ";
const MSGSTR_KEYWORD: &str = "msgstr ";

/// One `msgid`/`msgstr` pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub msgid: String,
    pub msgstr: String,
}

/// Which field continuation lines extend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParserState {
    #[default]
    None,
    InMsgid,
    InMsgstr,
}

impl ParserState {
    fn field(self) -> Option<Field> {
        match self {
            ParserState::None => None,
            ParserState::InMsgid => Some(Field::Msgid),
            ParserState::InMsgstr => Some(Field::Msgstr),
        }
    }
}

/// Strip one trailing LF, CRLF or CR.
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Blank lines and `#` comments never affect the assembler.
pub fn is_ignored(line: &str) -> bool {
    let line = strip_line_ending(line);
    line.is_empty() || line.starts_with('#')
}

/// Line-driven state machine that turns PO lines into [`Entry`] values
#[derive(Debug)]
pub struct Assembler {
    state: ParserState,
    msgid: FieldBuffer,
    msgstr: FieldBuffer,
    warnings: Vec<LineWarning>,
}

impl Assembler {
    /// Create an assembler whose fields hold at most `capacity` bytes each.
    pub fn new(capacity: usize) -> Self {
        Self {
            state: ParserState::None,
            msgid: FieldBuffer::new(capacity),
            msgstr: FieldBuffer::new(capacity),
            warnings: Vec::new(),
        }
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Process one input line. Returns the previous entry when this line
    /// starts a new `msgid` and one was pending.
    pub fn feed_line(&mut self, line_no: usize, line: &str) -> Option<Entry> {
        if is_ignored(line) {
            return None;
        }
        let line = strip_line_ending(line);

        if line.starts_with(MSGID_KEYWORD) {
            let completed = self.flush();
            self.state = ParserState::InMsgid;
            self.set_field(line_no, Field::Msgid, line);
            completed
        } else if line.starts_with(MSGSTR_KEYWORD) {
            self.state = ParserState::InMsgstr;
            self.set_field(line_no, Field::Msgstr, line);
            None
        } else if line.starts_with('"') {
            self.continue_field(line_no, line);
            None
        } else {
            trace!(line = line_no, "unrecognized line ignored");
            None
        }
    }

    /// End of input: emit the pending entry, if any, and hand back the warnings.
    pub fn finish(mut self) -> (Option<Entry>, Vec<LineWarning>) {
        let last = self.flush();
        (last, self.warnings)
    }

    /// Record a warning for `line_no` and log it.
    pub fn warn(&mut self, line_no: usize, kind: WarningKind) {
        warn!(line = line_no, "{}", kind);
        self.warnings.push(LineWarning::new(line_no, kind));
    }

    fn flush(&mut self) -> Option<Entry> {
        if self.msgid.is_empty() {
            return None;
        }
        Some(Entry {
            msgid: self.msgid.take(),
            msgstr: self.msgstr.take(),
        })
    }

    fn buffer_mut(&mut self, field: Field) -> &mut FieldBuffer {
        match field {
            Field::Msgid => &mut self.msgid,
            Field::Msgstr => &mut self.msgstr,
        }
    }

    fn set_field(&mut self, line_no: usize, field: Field, line: &str) {
        let value = match extract_quoted(line) {
            Ok(value) => value,
            Err(reason) => {
                self.buffer_mut(field).clear();
                self.report_extract_error(line_no, reason);
                return;
            }
        };

        let buffer = self.buffer_mut(field);
        let capacity = buffer.capacity();
        if buffer.replace(value) {
            self.warn(line_no, WarningKind::Truncated { field, capacity });
        }
    }

    fn continue_field(&mut self, line_no: usize, line: &str) {
        let Some(field) = self.state.field() else {
            self.warn(line_no, WarningKind::NoActiveField);
            return;
        };

        let value = match extract_quoted(line) {
            Ok(value) => value,
            Err(reason) => {
                self.report_extract_error(line_no, reason);
                return;
            }
        };

        if let Err(exceeded) = self.buffer_mut(field).append(value) {
            self.warn(
                line_no,
                WarningKind::Overflow {
                    field,
                    capacity: exceeded.capacity,
                },
            );
        }
    }

    fn report_extract_error(&mut self, line_no: usize, reason: ExtractError) {
        // `""` is how PO spells an empty string
        if reason == ExtractError::EmptySpan {
            trace!(line = line_no, "empty quoted value");
            return;
        }
        self.warn(line_no, WarningKind::Malformed { reason });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (Vec<Entry>, Vec<LineWarning>) {
        run_with_capacity(input, 4096)
    }

    fn run_with_capacity(input: &str, capacity: usize) -> (Vec<Entry>, Vec<LineWarning>) {
        let mut assembler = Assembler::new(capacity);
        let mut entries = Vec::new();
        for (idx, line) in input.split_inclusive('\n').enumerate() {
            entries.extend(assembler.feed_line(idx + 1, line));
        }
        let (last, warnings) = assembler.finish();
        entries.extend(last);
        (entries, warnings)
    }

    fn entry(msgid: &str, msgstr: &str) -> Entry {
        Entry {
            msgid: msgid.to_string(),
            msgstr: msgstr.to_string(),
        }
    }

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("abc\n"), "abc");
        assert_eq!(strip_line_ending("abc\r\n"), "abc");
        assert_eq!(strip_line_ending("abc\r"), "abc");
        assert_eq!(strip_line_ending("abc"), "abc");
    }

    #[test]
    fn test_single_entry() {
        let (entries, warnings) = run("msgid \"Hello\"\nmsgstr \"Bonjour\"\n");
        assert_eq!(entries, vec![entry("Hello", "Bonjour")]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_continuation_lines() {
        let (entries, _) = run("msgid \"Hello, \"\n\"world\"\nmsgstr \"Bon\"\n\"jour\"\n");
        assert_eq!(entries, vec![entry("Hello, world", "Bonjour")]);
    }

    #[test]
    fn test_crlf_input() {
        let (entries, _) = run("msgid \"Hello\"\r\nmsgstr \"Bonjour\"\r\n");
        assert_eq!(entries, vec![entry("Hello", "Bonjour")]);
    }

    #[test]
    fn test_flush_happens_on_next_msgid() {
        let mut assembler = Assembler::new(64);
        assert_eq!(assembler.feed_line(1, "msgid \"one\""), None);
        assert_eq!(assembler.feed_line(2, "msgstr \"un\""), None);
        assert_eq!(
            assembler.feed_line(3, "msgid \"two\""),
            Some(entry("one", "un"))
        );
        assert_eq!(assembler.state(), ParserState::InMsgid);
        assert_eq!(assembler.feed_line(4, "msgstr \"deux\""), None);
        let (last, warnings) = assembler.finish();
        assert_eq!(last, Some(entry("two", "deux")));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_comments_and_blank_lines_keep_state() {
        let mut assembler = Assembler::new(64);
        assembler.feed_line(1, "msgid \"a\"");
        assembler.feed_line(2, "# translator comment");
        assembler.feed_line(3, "");
        assert_eq!(assembler.state(), ParserState::InMsgid);
        assembler.feed_line(4, "\"b\"");
        let (last, _) = assembler.finish();
        assert_eq!(last, Some(entry("ab", "")));
    }

    #[test]
    fn test_empty_msgid_is_never_emitted() {
        let input = "msgid \"\"\nmsgstr \"\"\n\"Content-Type: text/plain\\n\"\n";
        let (entries, warnings) = run(input);
        assert!(entries.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_msgstr_without_msgid_is_not_emitted() {
        let (entries, _) = run("msgstr \"orphan\"\n");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_is_ignored() {
        assert!(is_ignored("\n"));
        assert!(is_ignored("\r\n"));
        assert!(is_ignored("# caf\u{fffd}\n"));
        assert!(is_ignored("#, fuzzy"));
        assert!(!is_ignored("msgid \"a\"\n"));
        assert!(!is_ignored(" # indented"));
    }

    #[test]
    fn test_non_flushing_msgid_keeps_previous_msgstr() {
        // Buffers reset only after an entry is emitted
        let (entries, warnings) = run("msgstr \"orphan\"\nmsgid \"a\"\n");
        assert_eq!(entries, vec![entry("a", "orphan")]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_msgid_without_msgstr() {
        let (entries, _) = run("msgid \"untranslated\"\n");
        assert_eq!(entries, vec![entry("untranslated", "")]);
    }

    #[test]
    fn test_continuation_without_target_warns() {
        let (entries, warnings) = run("\"stray\"\nmsgid \"a\"\nmsgstr \"b\"\n");
        assert_eq!(entries, vec![entry("a", "b")]);
        assert_eq!(warnings, vec![LineWarning::new(1, WarningKind::NoActiveField)]);
    }

    #[test]
    fn test_malformed_keyword_line_leaves_field_empty() {
        let (entries, warnings) = run("msgid \"a\"\nmsgstr \"unterminated\n");
        assert_eq!(entries, vec![entry("a", "")]);
        assert_eq!(
            warnings,
            vec![LineWarning::new(
                2,
                WarningKind::Malformed {
                    reason: ExtractError::MissingClosingQuote
                }
            )]
        );
    }

    #[test]
    fn test_malformed_msgid_line_is_not_emitted() {
        let (entries, warnings) = run("msgid broken\nmsgstr \"x\"\n");
        assert!(entries.is_empty());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].line, 1);
    }

    #[test]
    fn test_continuation_overflow_is_dropped_and_reported() {
        let (entries, warnings) =
            run_with_capacity("msgid \"abc\"\n\"def\"\n\"ghi\"\nmsgstr \"x\"\n", 7);
        assert_eq!(entries, vec![entry("abcdef", "x")]);
        assert_eq!(
            warnings,
            vec![LineWarning::new(
                3,
                WarningKind::Overflow {
                    field: Field::Msgid,
                    capacity: 7
                }
            )]
        );
    }

    #[test]
    fn test_long_value_is_truncated_and_reported() {
        let (entries, warnings) = run_with_capacity("msgid \"abcdefgh\"\n", 4);
        assert_eq!(entries, vec![entry("abcd", "")]);
        assert_eq!(
            warnings,
            vec![LineWarning::new(
                1,
                WarningKind::Truncated {
                    field: Field::Msgid,
                    capacity: 4
                }
            )]
        );
    }

    #[test]
    fn test_unsupported_directives_are_ignored() {
        let input = "msgctxt \"menu\"\nmsgid \"File\"\nmsgid_plural \"Files\"\nmsgstr[0] \"Fichier\"\nmsgstr \"Fichier\"\n";
        let (entries, warnings) = run(input);
        assert_eq!(entries, vec![entry("File", "Fichier")]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_keyword_requires_single_space() {
        let (entries, _) = run("msgid\t\"tab\"\nmsgid \"ok\"\n");
        assert_eq!(entries, vec![entry("ok", "")]);
    }

    #[test]
    fn test_record_count_matches_msgid_blocks() {
        let mut input = String::new();
        for i in 0..25 {
            input.push_str(&format!("# entry {i}\nmsgid \"id {i}\"\n\"cont\"\nmsgstr \"str {i}\"\n\n"));
        }
        let (entries, warnings) = run(&input);
        assert_eq!(entries.len(), 25);
        assert_eq!(entries[24], entry("id 24cont", "str 24"));
        assert!(warnings.is_empty());
    }
}
