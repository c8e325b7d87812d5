//! Math-delimiter handling: the per-cell guard hook and the standalone
//! `$`-normalisation entry point.
//!
//! Two unrelated jobs share this module because they care about the same
//! four tokens (`\(`, `\)`, `\[`, `\]`):
//!
//! * [`guard_delimiters`] — the last pass of the structuring pipeline,
//!   applied to every source line of every assembled cell. Today each of the
//!   four rules maps its delimiter to itself, so the pass changes nothing.
//!   The hook point is kept deliberately: each delimiter has its own rule and
//!   can be retargeted independently without touching the other three.
//!   Whether the hook should ever do real escaping is an open product
//!   question — do not assign it behaviour without confirming the intended
//!   semantics downstream.
//! * [`convert_delimiters`] — an independent entry point that rewrites the
//!   zoo of LaTeX math-delimiter conventions (`\[…\]`, `\(…\)`, display
//!   environments, `\ensuremath`) into canonical `$…$` / `$$…$$` form and
//!   reports how many segments it converted.
//!
//! Both evaluate their rules strictly in the listed order over one evolving
//! buffer; later rules see earlier rules' output.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// ── Guard hook ───────────────────────────────────────────────────────────

/// One rule per delimiter, applied in order. The replacement strings are
/// literals (no `$` expansion), currently the identity mapping.
static GUARD_RULES: Lazy<[(Regex, &'static str); 4]> = Lazy::new(|| {
    [
        (Regex::new(r"\\\(").unwrap(), r"\("),
        (Regex::new(r"\\\)").unwrap(), r"\)"),
        (Regex::new(r"\\\[").unwrap(), r"\["),
        (Regex::new(r"\\\]").unwrap(), r"\]"),
    ]
});

/// Runs the four delimiter rules over one line of cell text.
pub fn guard_delimiters(text: &str) -> String {
    GUARD_RULES
        .iter()
        .fold(text.to_owned(), |buffer, (re, rewrite)| {
            re.replace_all(&buffer, *rewrite).into_owned()
        })
}

// ── $-normalisation ──────────────────────────────────────────────────────

/// Display math `\[ … \]`, spanning newlines.
static RE_BRACKET_DISPLAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\\\[(.*?)\\\]").unwrap());

/// Inline math `\( … \)`, single line.
static RE_PAREN_INLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\\((.*?)\\\)").unwrap());

/// `\ensuremath{ … }`, single line, lazy (stops at the first `}`).
static RE_ENSUREMATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\ensuremath\{(.*?)\}").unwrap());

/// Display environments rewritten to `$$…$$`, in conversion order. Starred
/// variants come first so `\begin{align*}` is consumed before the unstarred
/// `align` pass could bite into it.
const DISPLAY_ENVIRONMENTS: [&str; 8] = [
    "equation*",
    "equation",
    "align*",
    "align",
    "gather*",
    "gather",
    "multline*",
    "multline",
];

static RE_ENVIRONMENTS: Lazy<Vec<Regex>> = Lazy::new(|| {
    DISPLAY_ENVIRONMENTS
        .iter()
        .map(|env| {
            let env = regex::escape(env);
            Regex::new(&format!(r"(?s)\\begin\{{{env}\}}(.*?)\\end\{{{env}\}}")).unwrap()
        })
        .collect()
});

/// Replaces every match, wrapping capture group 1 in `wrap` on both sides,
/// and reports how many matches were rewritten.
fn rewrite_counting(re: &Regex, text: &str, wrap: &str) -> (String, usize) {
    let mut count = 0usize;
    let rewritten = re
        .replace_all(text, |caps: &Captures<'_>| {
            count += 1;
            format!("{wrap}{}{wrap}", &caps[1])
        })
        .into_owned();
    (rewritten, count)
}

/// Rewrites every recognised math segment to `$…$` / `$$…$$` form.
///
/// Passes run in fixed order — bracket display math, then each entry of
/// [`DISPLAY_ENVIRONMENTS`], then inline parens, then `\ensuremath` — each
/// over the cumulative result of the previous ones. The returned count is
/// the total number of individual segments converted across all passes.
///
/// `Text \[ x+y \] more \(a\) end` becomes
/// (`Text $$ x+y $$ more $a$ end`, 2).
pub fn convert_delimiters(text: &str) -> (String, usize) {
    let (mut current, mut converted) = rewrite_counting(&RE_BRACKET_DISPLAY, text, "$$");

    for re in RE_ENVIRONMENTS.iter() {
        let (next, count) = rewrite_counting(re, &current, "$$");
        current = next;
        converted += count;
    }

    let (next, count) = rewrite_counting(&RE_PAREN_INLINE, &current, "$");
    current = next;
    converted += count;

    let (next, count) = rewrite_counting(&RE_ENSUREMATH, &current, "$");
    current = next;
    converted += count;

    (current, converted)
}
