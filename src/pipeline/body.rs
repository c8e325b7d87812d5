//! Document-wrapper handling: body extraction and document-end truncation.
//!
//! LaTeX worksheets usually arrive wrapped in `\begin{document}` /
//! `\end{document}`, often with preamble junk before the wrapper and stray
//! editor output after it. Two independent operations deal with that:
//!
//! * [`extract_body`] — the standalone "give me just the body" utility. Not
//!   part of the structuring pipeline's data flow; exposed as a public API
//!   and a CLI mode for callers that want the raw body text.
//! * [`truncate_at_end`] — keeps everything before the first
//!   `\end{document}`. The structuring pipeline applies it several times
//!   (whole input, per section, per atomic part, final cleanup); it is
//!   idempotent, so the repeated applications are harmless safety nets.
//!
//! Both are plain substring scans. The markers are fixed literals, so a regex
//! would buy nothing here.

/// Opening document-wrapper marker.
pub const DOC_BEGIN: &str = r"\begin{document}";

/// Closing document-wrapper marker.
pub const DOC_END: &str = r"\end{document}";

/// Returns the trimmed text between `\begin{document}` and `\end{document}`.
///
/// Either marker may be missing: a missing begin keeps the start of the text,
/// a missing end keeps the tail, and input without any wrapper comes back
/// trimmed but otherwise unchanged. Never fails.
pub fn extract_body(text: &str) -> &str {
    let mut body = text;
    if let Some(pos) = body.find(DOC_BEGIN) {
        body = &body[pos + DOC_BEGIN.len()..];
    }
    if let Some(pos) = body.find(DOC_END) {
        body = &body[..pos];
    }
    body.trim()
}

/// Keeps the text before the first `\end{document}`; the marker itself and
/// everything after it are dropped. Idempotent.
pub fn truncate_at_end(text: &str) -> &str {
    match text.find(DOC_END) {
        Some(pos) => &text[..pos],
        None => text,
    }
}
