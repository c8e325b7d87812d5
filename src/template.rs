//! Fixed text fragments shared across the pipeline.
//!
//! Centralising the metadata-cell template, the divider text, and the fixed
//! cell ids here serves two purposes:
//!
//! 1. **Single source of truth** — the downstream review tooling keys on these
//!    exact strings (the `metadata_cell` id, the `**Topic:**` lines, the `---`
//!    dividers), so changing one of them must be a deliberate, reviewed edit
//!    in exactly one place.
//!
//! 2. **Testability** — conformance tests compare against these constants
//!    directly instead of duplicating the literal bytes.
//!
//! The non-fixed placeholder values come from
//! [`crate::config::ConvertOptions`]; [`metadata_source`] splices them in.

use crate::config::ConvertOptions;

/// Text of every divider cell: a markdown horizontal rule.
pub const DIVIDER: &str = "---";

/// Id of the leading metadata cell.
pub const METADATA_CELL_ID: &str = "metadata_cell";

/// Id of the trailing divider cell.
pub const FINAL_SEPARATOR_ID: &str = "final_separator";

/// Builds the leading metadata cell's text from the placeholder values.
///
/// The layout is fixed down to the whitespace: reviewers' tooling expects the
/// double space after `**Explanation:** -` and the tab after `**Prompt:** -`,
/// so those survive even when the slot value is empty.
pub fn metadata_source(options: &ConvertOptions) -> String {
    format!(
        "# Metadata\n\n\
         **Topic:** - {topic}\n\n\
         **Subtopic:** - {subtopic}\n\n\
         **Difficulty:** - {difficulty}\n\n\
         **Explanation:** -  {explanation}\n\n\
         **Sections:** - {sections}\n\n\
         **Prompt:** - \t{prompt}\n",
        topic = options.topic,
        subtopic = options.subtopic,
        difficulty = options.difficulty,
        explanation = options.explanation,
        sections = options.sections,
        prompt = options.prompt,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metadata_matches_stock_template() {
        let source = metadata_source(&ConvertOptions::default());
        assert_eq!(
            source,
            "# Metadata\n\n**Topic:** - Mathematics\n\n**Subtopic:** - \n\n**Difficulty:** - \n\n**Explanation:** -  \n\n**Sections:** - \n\n**Prompt:** - \t\n"
        );
    }

    #[test]
    fn placeholder_values_fill_their_slots() {
        let options = ConvertOptions {
            topic: "Number Theory".into(),
            difficulty: "Hard".into(),
            ..ConvertOptions::default()
        };
        let source = metadata_source(&options);
        assert!(source.contains("**Topic:** - Number Theory\n"));
        assert!(source.contains("**Difficulty:** - Hard\n"));
        // Untouched slots keep their stock spacing.
        assert!(source.contains("**Explanation:** -  \n"));
        assert!(source.contains("**Prompt:** - \t\n"));
    }
}
