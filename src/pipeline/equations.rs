//! Display-equation normalisation: flatten multi-line `\[ … \]` segments.
//!
//! ## Why does this run first?
//!
//! The section splitter is line-oriented in spirit: a `\section*{[…]}` marker
//! is expected to sit on its own line. A display equation that spans several
//! source lines puts raw newlines between the delimiters, and those newlines
//! can make a following marker look like equation content (or split the
//! equation across two cells). Collapsing every display segment to a single
//! line up front removes that whole class of breakage before any splitting
//! happens.
//!
//! The transformation is purely lexical: every whitespace run inside the
//! delimiters (newlines included) becomes a single space, the ends are
//! trimmed, and the equation is re-wrapped with exactly one space of padding
//! inside each delimiter. Operates on the full input, never per line.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// A display-math segment: lazily matched, spanning newlines.
static RE_DISPLAY_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\\\[\s*(.*?)\s*\\\]").unwrap());

/// Collapses every `\[ … \]` display-math segment onto one line.
///
/// `\[\n  \frac{a}{b}\n   + c\n\]` becomes `\[ \frac{a}{b} + c \]`.
pub fn normalize_display_equations(text: &str) -> String {
    RE_DISPLAY_SEGMENT
        .replace_all(text, |caps: &Captures<'_>| {
            let equation = caps[1].split_whitespace().collect::<Vec<_>>().join(" ");
            format!(r"\[ {equation} \]")
        })
        .into_owned()
}
