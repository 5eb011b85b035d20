//! Line sources
//!
//! The planner never reads the terminal directly; it pulls lines from a
//! [`LineSource`], so tests and piped input drive it the same way a user does.

use std::io::BufRead;

use crate::error::PlannerResult;

/// Something that yields one line of user input at a time
pub trait LineSource {
    /// The next line without its terminator, or `None` at end of input
    fn next_line(&mut self) -> PlannerResult<Option<String>>;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn next_line(&mut self) -> PlannerResult<Option<String>> {
        (**self).next_line()
    }
}

/// Adapts any buffered reader (stdin, a file, a byte slice) into a line source
#[derive(Debug)]
pub struct ReaderLines<R> {
    reader: R,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn next_line(&mut self) -> PlannerResult<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_then_none() {
        let mut source = ReaderLines::new(Cursor::new("100\r\nproduce\n30"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("100"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("produce"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("30"));
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn test_keeps_inner_whitespace() {
        let mut source = ReaderLines::new(Cursor::new("  fresh fruit \n"));
        assert_eq!(
            source.next_line().unwrap().as_deref(),
            Some("  fresh fruit ")
        );
    }

    #[test]
    fn test_blank_line_is_not_end_of_input() {
        let mut source = ReaderLines::new(Cursor::new("\n"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some(""));
        assert_eq!(source.next_line().unwrap(), None);
    }
}
