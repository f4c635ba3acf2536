//! Comment stripping.
//!
//! Removes `// line` comments (up to, not including, the line break) and
//! `/* block */` comments, which may span lines. Whichever comment opens first
//! wins, so `/* a // b */` is removed whole. String literals are not tracked:
//! a `//` inside quotes is treated as a comment.

use std::borrow::Cow;
use std::sync::LazyLock;

use memchr::memchr;
use regex::Regex;

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/|//[^\n]*").expect("comment pattern"));

/// Returns `text` with all comments removed.
///
/// Borrows the input when it contains no `/` at all.
pub fn strip_comments(text: &str) -> Cow<'_, str> {
    if memchr(b'/', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }
    COMMENT.replace_all(text, "")
}
