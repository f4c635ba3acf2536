//! Candidate block splitter.
//!
//! A selection holding several declarations is cut wherever two or more
//! consecutive line breaks appear, i.e. at every fully empty line:
//!
//! ```text
//! public int A { get; set; }      <- block 0
//!                                 <- separator ("\n\n" or "\r\n\r\n")
//! public int B { get; set; }      <- block 1
//! ```
//!
//! The split is purely line based. A line holding only spaces is not a
//! separator and no brace balancing is attempted.
//!
//! ## Usage
//!
//! ```
//! use propkit_core::text::splitter::split;
//!
//! let blocks: Vec<&str> = split("public int A { get; set; }\n\n  public int B { get; set; }\n").collect();
//! assert_eq!(blocks, ["public int A { get; set; }", "public int B { get; set; }"]);
//! ```

use memchr::memchr_iter;

/// One candidate block together with the indentation it started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Block text with surrounding whitespace removed.
    pub text: &'a str,
    /// Horizontal whitespace in front of the first non-blank character.
    pub indent: &'a str,
}

/// Lazy iterator over the candidate blocks of a selection.
///
/// Cloning the iterator restarts nothing; it forks the current position.
/// Calling [`split`] again restarts from the beginning.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Blocks<'a> {
    /// Creates an iterator positioned at the start of `text`.
    #[inline]
    pub const fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Returns the next block with its indentation.
    pub fn next_block(&mut self) -> Option<Block<'a>> {
        let bytes = self.text.as_bytes();

        while self.pos < bytes.len() {
            let start = self.pos;
            let (end, next) = match find_separator(bytes, start) {
                Some(sep) => sep,
                None => (bytes.len(), bytes.len()),
            };
            self.pos = next;

            // Separators consist of ASCII bytes only, so both bounds fall on
            // char boundaries.
            let chunk = &self.text[start..end];
            let text = chunk.trim();
            if text.is_empty() {
                continue;
            }

            let lead = &chunk[..chunk.len() - chunk.trim_start().len()];
            let indent = match lead.rfind('\n') {
                Some(nl) => &lead[nl + 1..],
                None => lead,
            };

            return Some(Block {
                text,
                indent: indent.trim_start_matches('\r'),
            });
        }

        None
    }

    /// Adapts this iterator to yield [`Block`]s instead of bare text.
    pub fn with_indent(self) -> WithIndent<'a> {
        WithIndent(self)
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        self.next_block().map(|b| b.text)
    }
}

/// Iterator over [`Block`]s, see [`Blocks::with_indent`].
#[derive(Debug, Clone)]
pub struct WithIndent<'a>(Blocks<'a>);

impl<'a> Iterator for WithIndent<'a> {
    type Item = Block<'a>;

    #[inline]
    fn next(&mut self) -> Option<Block<'a>> {
        self.0.next_block()
    }
}

/// Splits a selection into trimmed candidate blocks.
#[inline]
pub fn split(text: &str) -> Blocks<'_> {
    Blocks::new(text)
}

/// Splits a selection into candidate blocks that remember their indentation.
#[inline]
pub fn blocks(text: &str) -> WithIndent<'_> {
    Blocks::new(text).with_indent()
}

/// Finds the first separator at or after `from`.
///
/// Returns `(separator_start, separator_end)`.
fn find_separator(bytes: &[u8], from: usize) -> Option<(usize, usize)> {
    let mut skip_until = from;

    for nl in memchr_iter(b'\n', &bytes[from..]) {
        let nl = from + nl;
        if nl < skip_until {
            continue;
        }

        let mut end = nl + 1;
        let mut breaks = 1usize;
        loop {
            match bytes.get(end) {
                Some(b'\n') => end += 1,
                Some(b'\r') if bytes.get(end + 1) == Some(&b'\n') => end += 2,
                _ => break,
            }
            breaks += 1;
        }

        if breaks >= 2 {
            let start = if nl > from && bytes[nl - 1] == b'\r' {
                nl - 1
            } else {
                nl
            };
            return Some((start, end));
        }

        skip_until = end;
    }

    None
}
