//! Labeled-marker splitting: sections and their nested atomic parts.
//!
//! Both nesting levels use the same marker grammar — a starred section
//! command whose argument is a bracketed label:
//!
//! ```text
//! \section*{[SECTION_01]}      top-level section
//! \section*{[atomic_part1]}    atomic part, nested inside a section
//! ```
//!
//! Rather than duplicating the walk, one splitter ([`split_labeled_blocks`])
//! runs at both levels with a different label filter:
//!
//! * section level ([`split_sections`]) — every marker is a boundary EXCEPT
//!   `[atomic_…]` labels, which stay embedded in the enclosing section's
//!   content so the atomic pass can find them;
//! * atomic level ([`split_atomic_parts`]) — only `[atomic_…]` labels are
//!   boundaries.
//!
//! ## Pairing invariant
//!
//! A matched marker always yields exactly one (label, content) pair: content
//! runs from the marker to the next accepted marker or the end of the text,
//! so a marker that ends the input gets empty content. The "odd alternation
//! list" failure mode of naive split-with-captures is unrepresentable here —
//! there is no trailing unpaired entry to decide about. The preamble before
//! the first accepted marker is carried separately and discarded by callers
//! (at the atomic level that drops any stray text between the section marker
//! and its first atomic part).

use once_cell::sync::Lazy;
use regex::Regex;

/// The marker grammar shared by both levels: `\section*{[…]}` with a
/// single-line, lazily matched label (brackets included in the capture).
static RE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\section\*\{(\[.*?\])\}").unwrap());

/// `[SECTION_<number>]`, any case.
static RE_SECTION_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\[SECTION_\d+\]").unwrap());

/// PROMPT or RESPONSE as a whole word, any case.
static RE_PROMPT_RESPONSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:PROMPT|RESPONSE)\b").unwrap());

/// One (label, content) pair produced by the splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledBlock<'a> {
    /// The bracketed label, e.g. `[SECTION_01]`.
    pub label: &'a str,
    /// Raw text from this marker to the next accepted marker (or end of
    /// input). Untrimmed; callers decide how much whitespace matters.
    pub content: &'a str,
    /// Position in the alternation list: `2k + 1` for the k-th pair. Cell
    /// ids embed this number, so it is part of the output contract.
    pub ordinal: usize,
}

/// Result of one splitter pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledSplit<'a> {
    /// Text before the first accepted marker. Always discarded by callers;
    /// kept explicit so the contract is visible and testable.
    pub preamble: &'a str,
    /// The (label, content) pairs, in input order.
    pub blocks: Vec<LabeledBlock<'a>>,
}

/// Whether the label names an atomic part. Case-sensitive by design — the
/// nested grammar uses a literal `atomic_` prefix.
pub fn is_atomic_label(label: &str) -> bool {
    label.starts_with("[atomic_")
}

/// Splits on every marker whose label passes `accept`; rejected markers stay
/// embedded in the surrounding content.
fn split_labeled_blocks<'a>(text: &'a str, accept: impl Fn(&str) -> bool) -> LabeledSplit<'a> {
    let markers: Vec<(usize, usize, &str)> = RE_MARKER
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0).unwrap();
            let label = caps.get(1).unwrap().as_str();
            accept(label).then(|| (whole.start(), whole.end(), label))
        })
        .collect();

    let preamble = match markers.first() {
        Some(&(start, _, _)) => &text[..start],
        None => text,
    };

    let blocks = markers
        .iter()
        .enumerate()
        .map(|(k, &(_, end, label))| {
            let content_end = markers
                .get(k + 1)
                .map_or(text.len(), |&(next_start, _, _)| next_start);
            LabeledBlock {
                label,
                content: &text[end..content_end],
                ordinal: 2 * k + 1,
            }
        })
        .collect();

    LabeledSplit { preamble, blocks }
}

/// Splits a document into top-level sections. Atomic markers are not
/// boundaries here; they remain inside their section's content.
pub fn split_sections(text: &str) -> LabeledSplit<'_> {
    split_labeled_blocks(text, |label| !is_atomic_label(label))
}

/// Splits one section's content into its atomic parts. An empty `blocks`
/// list means the section has no atomic markers and its content is used
/// whole.
pub fn split_atomic_parts(content: &str) -> LabeledSplit<'_> {
    split_labeled_blocks(content, is_atomic_label)
}

/// Which divider (if any) precedes a section's content cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividerKind {
    /// `[SECTION_<n>]` labels: divider id is derived from the label text.
    Section,
    /// Labels containing PROMPT or RESPONSE as a whole word: divider id is
    /// derived from the pair's ordinal.
    PromptResponse,
    /// Anything else: no divider, content cell only.
    None,
}

/// Classifies a label into its divider kind. Matching is case-insensitive.
/// The rules cannot overlap: the section shape requires `]` right after the
/// digits, and a label ends at its first `]`, so a label that fails the
/// section shape can only fall through to the keyword rule.
pub fn classify_divider(label: &str) -> DividerKind {
    if RE_SECTION_LABEL.is_match(label) {
        DividerKind::Section
    } else if RE_PROMPT_RESPONSE.is_match(label) {
        DividerKind::PromptResponse
    } else {
        DividerKind::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_yields_label_content_pairs_in_order() {
        let text = "intro\n\\section*{[A]}\nalpha\n\\section*{[B]}\nbeta";
        let split = split_sections(text);
        assert_eq!(split.preamble, "intro\n");
        assert_eq!(split.blocks.len(), 2);
        assert_eq!(split.blocks[0].label, "[A]");
        assert_eq!(split.blocks[0].content, "\nalpha\n");
        assert_eq!(split.blocks[0].ordinal, 1);
        assert_eq!(split.blocks[1].label, "[B]");
        assert_eq!(split.blocks[1].content, "\nbeta");
        assert_eq!(split.blocks[1].ordinal, 3);
    }

    #[test]
    fn test_marker_at_end_of_input_gets_empty_content() {
        let split = split_sections("x\\section*{[LAST]}");
        assert_eq!(split.blocks.len(), 1);
        assert_eq!(split.blocks[0].content, "");
    }

    #[test]
    fn test_no_markers_means_everything_is_preamble() {
        let split = split_sections("no markers at all");
        assert_eq!(split.preamble, "no markers at all");
        assert!(split.blocks.is_empty());
    }

    #[test]
    fn test_atomic_markers_are_not_section_boundaries() {
        let text = "\\section*{[SECTION_01]}\nhead\n\\section*{[atomic_a]}\ntail";
        let split = split_sections(text);
        assert_eq!(split.blocks.len(), 1);
        assert!(split.blocks[0].content.contains("\\section*{[atomic_a]}"));
    }

    #[test]
    fn test_atomic_level_accepts_only_atomic_labels() {
        let text = "head\n\\section*{[atomic_a]}\nfoo\n\\section*{[SECTION_02]}\nbar";
        let split = split_atomic_parts(text);
        assert_eq!(split.blocks.len(), 1);
        assert_eq!(split.blocks[0].label, "[atomic_a]");
        // The non-atomic marker is not a boundary at this level.
        assert!(split.blocks[0].content.contains("\\section*{[SECTION_02]}"));
    }

    #[test]
    fn test_atomic_preamble_is_separated() {
        let text = "stray text\n\\section*{[atomic_a]}\nbody";
        let split = split_atomic_parts(text);
        assert_eq!(split.preamble, "stray text\n");
        assert_eq!(split.blocks[0].content, "\nbody");
    }

    #[test]
    fn test_atomic_prefix_is_case_sensitive() {
        assert!(is_atomic_label("[atomic_part1]"));
        assert!(!is_atomic_label("[Atomic_part1]"));
        assert!(!is_atomic_label("[ATOMIC_part1]"));
    }

    #[test]
    fn test_label_must_stay_on_one_line() {
        // A bracket pair broken across lines is not a marker.
        let split = split_sections("\\section*{[SPLIT\nLABEL]}\ntext");
        assert!(split.blocks.is_empty());
    }

    #[test]
    fn test_ordinals_count_accepted_pairs_only() {
        let text = "\\section*{[SECTION_01]}\na\n\\section*{[atomic_x]}\nb\n\\section*{[SECTION_02]}\nc";
        let split = split_sections(text);
        assert_eq!(split.blocks.len(), 2);
        assert_eq!(split.blocks[0].ordinal, 1);
        assert_eq!(split.blocks[1].ordinal, 3);
    }

    // ── Divider classification ───────────────────────────────────────────

    #[test]
    fn test_classify_section_labels() {
        assert_eq!(classify_divider("[SECTION_01]"), DividerKind::Section);
        assert_eq!(classify_divider("[section_7]"), DividerKind::Section);
        assert_eq!(classify_divider("[Section_123]"), DividerKind::Section);
    }

    #[test]
    fn test_classify_prompt_and_response_labels() {
        assert_eq!(classify_divider("[PROMPT]"), DividerKind::PromptResponse);
        assert_eq!(classify_divider("[response]"), DividerKind::PromptResponse);
        assert_eq!(
            classify_divider("[FINAL RESPONSE]"),
            DividerKind::PromptResponse
        );
    }

    #[test]
    fn test_prompt_must_match_as_whole_word() {
        // PROMPTING contains PROMPT but not as a whole word; an underscore
        // is a word character, so [MY_PROMPT] does not match either.
        assert_eq!(classify_divider("[PROMPTING]"), DividerKind::None);
        assert_eq!(classify_divider("[MY_PROMPT]"), DividerKind::None);
    }

    #[test]
    fn test_unrecognised_labels_get_no_divider() {
        assert_eq!(classify_divider("[atomic_a]"), DividerKind::None);
        assert_eq!(classify_divider("[NOTES]"), DividerKind::None);
        assert_eq!(classify_divider("[SECTION_]"), DividerKind::None);
    }

    #[test]
    fn test_section_shape_requires_bracket_after_digits() {
        // Extra text after the number breaks the section shape, so this
        // label falls through to the keyword rule.
        assert_eq!(
            classify_divider("[SECTION_01 PROMPT]"),
            DividerKind::PromptResponse
        );
    }
}
