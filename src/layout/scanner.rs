//! Scanner for `$...$` token candidates.
//!
//! A candidate is a `$`, at least one character of text, and a closing `$`.
//! The text may not contain a newline and its last character may not be
//! ASCII whitespace, so `$a $` is never a candidate while `$a $b$` is one
//! (the inner `$` is just text). Scanning is leftmost-first and the shortest
//! closing delimiter wins; after a candidate the scan resumes past its end.
//!
//! The scanner knows nothing about the token catalog. Candidates that are not
//! catalog tokens are left for the caller to pass through.

/// A candidate with its byte span in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// A scanner over layout text.
pub struct Scanner<'a> {
    /// The layout being scanned.
    input: &'a str,
    /// Byte position of the next byte to examine.
    position: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given layout.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Byte index just past the `$` closing a candidate opened at `start`.
    ///
    /// Works on bytes: `$`, `\n` and ASCII whitespace never occur inside a
    /// multi-byte UTF-8 sequence, so every returned span is on char boundaries.
    fn closing_delimiter(&self, start: usize) -> Option<usize> {
        let bytes = self.input.as_bytes();
        let mut i = start + 2;
        while i < bytes.len() {
            let last = bytes[i - 1];
            if last == b'\n' {
                return None;
            }
            if bytes[i] == b'$' && !last.is_ascii_whitespace() {
                return Some(i + 1);
            }
            i += 1;
        }
        None
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Candidate<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.input.as_bytes();
        while self.position < bytes.len() {
            let start = self.position;
            if bytes[start] != b'$' {
                self.position += 1;
                continue;
            }
            match self.closing_delimiter(start) {
                Some(end) => {
                    self.position = end;
                    return Some(Candidate {
                        text: &self.input[start..end],
                        start,
                        end,
                    });
                }
                None => self.position += 1,
            }
        }
        None
    }
}

/// Collect the text of every candidate in a layout.
pub fn candidates(input: &str) -> Vec<&str> {
    Scanner::new(input).map(|c| c.text).collect()
}
