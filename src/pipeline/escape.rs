//! Macro re-escaping: the fixed, ordered substitution table.
//!
//! Embedding LaTeX in a markdown cell eats one level of backslashes, so a
//! handful of math macros have to arrive double-escaped to survive. This is
//! deliberately NOT a general escaping rule: it is a closed list of exactly
//! seven literal rewrites, applied in a guaranteed order over one evolving
//! buffer, and nothing else is touched.
//!
//! ## Rule order is load-bearing
//!
//! Rule 1 rewrites every literal `\\` into the `\newline` token. It must run
//! first: rules 2–6 *introduce* doubled backslashes (`\frac` → `\\frac`), and
//! if rule 1 ran after them it would destroy their output. Conversely, once
//! rule 1 has consumed the input's doubled backslashes, rules 2–6 can only
//! ever see the single-backslash macros they are meant to double. Never
//! reorder or parallelise these for "efficiency" — evaluate strictly in
//! sequence.

/// The substitution table, applied top to bottom. Each entry is a literal
/// match and a literal replacement; no pattern syntax is involved.
const SUBSTITUTIONS: [(&str, &str); 7] = [
    (r"\\", r"\newline"),
    (r"\frac", r"\\frac"),
    (r"\right", r"\\right"),
    (r"\rfloor", r"\\rfloor"),
    (r"\begin", r"\\begin"),
    (r"\theta", r"\\theta"),
    (r"\_", "_"),
];

/// Applies the seven-rule table once, in order, over one evolving buffer.
///
/// `\frac{1}{2} \\ \theta` becomes `\\frac{1}{2} \newline \\theta`.
pub fn escape_macros(text: &str) -> String {
    SUBSTITUTIONS
        .iter()
        .fold(text.to_owned(), |buffer, (from, to)| buffer.replace(from, to))
}
