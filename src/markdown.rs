//! Escaping of `|` inside markdown math.
//!
//! Kramdown-style renderers treat a bare `|` as a table cell separator even
//! inside `$...$`, so every pipe in a math span is rewritten to `\vert`.
//! Code is left alone: the scanner tries fenced and inline code before math
//! at every position, and a code match consumes its text so no math span can
//! start inside it.
//!
//! The scan is a single leftmost-first regex pass, not a markdown parser.
//! Unterminated or nested delimiters resolve however the pattern resolves
//! them.

use crate::constants::{PIPES_FIXED_MESSAGE, PIPES_UNCHANGED_MESSAGE, PIPE_ESCAPE};
use crate::error::Result;
use crate::fsio::write_atomically;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::fs;
use std::ops::Range;
use std::path::Path;

// Alternatives are tried in this order at every position.
static SPAN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?P<fenced>```[\s\S]*?```)",
        r"|(?P<code>`[^`\n]*`)",
        r"|(?P<display>\$\$[\s\S]*?\$\$)",
        r"|(?P<inline>\$[^$\n]*\$)",
    ))
    .expect("span pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    FencedCode,
    InlineCode,
    DisplayMath,
    InlineMath,
}

impl SpanKind {
    fn from_captures(caps: &Captures<'_>) -> SpanKind {
        if caps.name("fenced").is_some() {
            SpanKind::FencedCode
        } else if caps.name("code").is_some() {
            SpanKind::InlineCode
        } else if caps.name("display").is_some() {
            SpanKind::DisplayMath
        } else {
            SpanKind::InlineMath
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, SpanKind::FencedCode | SpanKind::InlineCode)
    }

    pub fn is_math(&self) -> bool {
        !self.is_code()
    }
}

/// A classified region of a document, as a byte range into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    pub range: Range<usize>,
}

impl Span {
    pub fn text<'a>(&self, document: &'a str) -> &'a str {
        &document[self.range.clone()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixOutcome {
    Fixed,
    /// Nothing to rewrite, which includes documents with no math at all.
    Unchanged,
}

impl FixOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            FixOutcome::Fixed => PIPES_FIXED_MESSAGE,
            FixOutcome::Unchanged => PIPES_UNCHANGED_MESSAGE,
        }
    }
}

/// Lists code and math spans left to right, without overlaps.
pub fn scan_spans(document: &str) -> Vec<Span> {
    SPAN_PATTERN
        .captures_iter(document)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(Span {
                kind: SpanKind::from_captures(&caps),
                range: whole.range(),
            })
        })
        .collect()
}

/// Replaces every `|` in a math span with `\vert`.
///
/// A space follows the control word when the next character is a letter,
/// otherwise `a|b` would turn into the unknown command `\vertb`.
pub fn escape_pipes(math: &str) -> String {
    let mut escaped = String::with_capacity(math.len());
    let mut chars = math.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '|' {
            escaped.push(c);
            continue;
        }
        escaped.push_str(PIPE_ESCAPE);
        if chars.peek().is_some_and(|next| next.is_ascii_alphabetic()) {
            escaped.push(' ');
        }
    }

    escaped
}

/// Rewrites pipes inside every math span of `document`; code spans and plain
/// text come back byte for byte.
pub fn fix_math_pipes(document: &str) -> Cow<'_, str> {
    SPAN_PATTERN.replace_all(document, |caps: &Captures<'_>| {
        let text = &caps[0];
        if SpanKind::from_captures(caps).is_math() {
            escape_pipes(text)
        } else {
            text.to_string()
        }
    })
}

/// Applies [`fix_math_pipes`] to a file and writes it back only if it changed.
///
/// Read, decode and write errors are returned as is; there is no partial
/// recovery.
pub fn fix_pipes_in_file(path: &Path) -> Result<FixOutcome> {
    let content = fs::read_to_string(path)?;
    let fixed = fix_math_pipes(&content);

    if fixed == content {
        crate::verbose!("{}: {} math spans, nothing to escape", path.display(), count_math(&content));
        return Ok(FixOutcome::Unchanged);
    }

    write_atomically(path, fixed.as_bytes())?;
    Ok(FixOutcome::Fixed)
}

fn count_math(document: &str) -> usize {
    scan_spans(document)
        .iter()
        .filter(|span| span.kind.is_math())
        .count()
}
