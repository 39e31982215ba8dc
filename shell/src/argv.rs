//! Splitting a single command line string into an argument vector.
//!
//! Follows the rules the Microsoft C runtime applies when a process is
//! created from one command line string, so a line behaves the same on every
//! platform. Words are separated by spaces and tabs only. Only double quotes
//! and the backslashes in front of them are special; no other shell syntax is
//! recognised.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplitState {
    /// Between words.
    Start,
    ReadingWord,
    ReadingQuoted,
}

struct SplitFSM {
    input: Vec<char>,
    pos: usize,
    state: SplitState,
    buffer: String,
}

impl SplitFSM {
    fn new(line: &str) -> Self {
        SplitFSM {
            input: line.chars().collect(),
            pos: 0,
            state: SplitState::Start,
            buffer: String::new(),
        }
    }

    fn make_words(&mut self) -> Vec<String> {
        let mut out = Vec::new();

        while let Some(ch) = self.read_char() {
            match (self.state, ch) {
                (_, '\\') => self.handle_backslashes(),
                (SplitState::ReadingQuoted, '"') => {
                    if self.peek_char() == Some('"') {
                        self.pos += 1;
                        self.buffer.push('"');
                    } else {
                        self.state = SplitState::ReadingWord;
                    }
                }
                (_, '"') => self.state = SplitState::ReadingQuoted,
                (SplitState::ReadingQuoted, ch) => self.buffer.push(ch),
                (SplitState::Start, ' ' | '\t') => {}
                (SplitState::ReadingWord, ' ' | '\t') => {
                    out.push(std::mem::take(&mut self.buffer));
                    self.state = SplitState::Start;
                }
                (_, ch) => {
                    self.buffer.push(ch);
                    self.state = SplitState::ReadingWord;
                }
            }
        }

        // An unterminated quote simply runs to the end of the line.
        if self.state != SplitState::Start {
            out.push(std::mem::take(&mut self.buffer));
        }
        out
    }

    /// Called after the first backslash of a run has been consumed.
    fn handle_backslashes(&mut self) {
        let mut count = 1;
        while self.peek_char() == Some('\\') {
            self.pos += 1;
            count += 1;
        }
        if self.state == SplitState::Start {
            self.state = SplitState::ReadingWord;
        }

        if self.peek_char() == Some('"') {
            self.push_backslashes(count / 2);
            if count % 2 == 1 {
                self.pos += 1;
                self.buffer.push('"');
            }
        } else {
            self.push_backslashes(count);
        }
    }

    fn push_backslashes(&mut self, n: usize) {
        self.buffer.extend(std::iter::repeat_n('\\', n));
    }

    fn read_char(&mut self) -> Option<char> {
        let ch = self.input.get(self.pos).copied();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn peek_char(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }
}

/// Split `line` into words.
///
/// ```
/// use simple_shell::split_command_line;
/// assert_eq!(
///     split_command_line(r#"sh -c "exit 3""#),
///     vec!["sh", "-c", "exit 3"]
/// );
/// ```
pub fn split_command_line(line: &str) -> Vec<String> {
    SplitFSM::new(line).make_words()
}
