//! Identifier scanning
//!
//! An identifier is a maximal run of `[A-Za-z_][A-Za-z0-9_]*`. Scanning is
//! purely lexical: a run may start right after a digit, so `2x` yields `x` and
//! `1e5` yields `e5`.

use std::collections::BTreeSet;
use std::ops::Range;

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Iterator over identifier byte ranges in a formula
pub struct IdentifierSpans<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> IdentifierSpans<'a> {
    /// Scan `text` from the start
    pub fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }
}

impl Iterator for IdentifierSpans<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        while self.pos < self.bytes.len() {
            if is_ident_start(self.bytes[self.pos]) {
                let start = self.pos;
                self.pos += 1;
                while self.pos < self.bytes.len() && is_ident_continue(self.bytes[self.pos]) {
                    self.pos += 1;
                }
                return Some(start..self.pos);
            }
            self.pos += 1;
        }
        None
    }
}

/// Collect the distinct identifiers of a formula
pub fn identifiers(text: &str) -> BTreeSet<&str> {
    // Spans only cover ASCII bytes, so they always fall on char boundaries.
    IdentifierSpans::new(text).map(|span| &text[span]).collect()
}

/// Replace every whole identifier accepted by `should_replace` with `replacement`
///
/// Replacement is span based, so substituting `ab` never touches `abc`.
pub fn substitute<F>(text: &str, mut should_replace: F, replacement: &str) -> String
where
    F: FnMut(&str) -> bool,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for span in IdentifierSpans::new(text) {
        if should_replace(&text[span.clone()]) {
            out.push_str(&text[last..span.start]);
            out.push_str(replacement);
            last = span.end;
        }
    }

    out.push_str(&text[last..]);
    out
}
