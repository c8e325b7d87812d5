//! Notebook assembly: from escaped text to the ordered cell sequence.
//!
//! The assembler owns the cell layout contract: one metadata cell first, then
//! for each section (in input order) an optional divider followed by the
//! section cell and its atomic cells, then one trailing divider. It also owns
//! id allocation and the final cleanup pass — the last code to touch cell
//! text before the guard hook runs.
//!
//! The input arrives already equation-normalised and macro-escaped; this
//! module never applies those passes itself.

use crate::config::ConvertOptions;
use crate::notebook::{Cell, Notebook};
use crate::pipeline::body::truncate_at_end;
use crate::pipeline::split::{self, DividerKind, LabeledBlock};
use crate::template;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashSet;
use tracing::debug;

/// Single-line display math inside an atomic part. No `(?s)`: a segment that
/// already spans lines is left for the hard-break pass to deal with.
static RE_INLINE_DISPLAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\\[\s*(.*?)\s*\\\]").unwrap());

/// Deterministic id allocation with collision suffixes.
///
/// Ids derive from label text and pair indices, so a document that repeats a
/// label (two `[SECTION_01]` markers, say) would produce duplicate divider
/// ids. The registry claims every id; a collision gets a `_2`, `_3`, …
/// suffix in claim order. Same input, same ids — no wall clock, no
/// randomness.
#[derive(Debug, Default)]
struct IdRegistry {
    used: HashSet<String>,
}

impl IdRegistry {
    fn claim(&mut self, id: String) -> String {
        if self.used.insert(id.clone()) {
            return id;
        }
        let mut n = 2usize;
        loop {
            let candidate = format!("{id}_{n}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Builds the full cell sequence from escaped input text.
///
/// Empty and marker-free input are not errors: they produce the minimal
/// notebook (metadata cell plus trailing divider).
pub fn assemble_notebook(text: &str, options: &ConvertOptions) -> Notebook {
    let mut notebook = Notebook::new();
    let mut ids = IdRegistry::default();

    notebook.cells.push(Cell::markdown(
        ids.claim(template::METADATA_CELL_ID.to_string()),
        template::metadata_source(options),
    ));

    // Content after the first \end{document} is unreachable.
    let body = truncate_at_end(text);
    let sections = split::split_sections(body);
    debug!(sections = sections.blocks.len(), "split into sections");

    for section in &sections.blocks {
        push_section_cells(&mut notebook, &mut ids, section);
    }

    notebook
        .cells
        .push(Cell::divider(ids.claim(template::FINAL_SEPARATOR_ID.to_string())));

    cleanup_cells(&mut notebook);
    notebook
}

/// Emits one section's divider (when its label calls for one), its content
/// cell, and its atomic cells.
fn push_section_cells(notebook: &mut Notebook, ids: &mut IdRegistry, section: &LabeledBlock<'_>) {
    let label = section.label;
    let content = section.content.trim();

    match split::classify_divider(label) {
        DividerKind::Section => {
            notebook
                .cells
                .push(Cell::divider(ids.claim(format!("separator_before_{label}"))));
        }
        DividerKind::PromptResponse => {
            notebook
                .cells
                .push(Cell::divider(ids.claim(format!("separator_{}", section.ordinal))));
        }
        DividerKind::None => {}
    }

    // Safety net; the whole input was already truncated.
    let content = truncate_at_end(content);

    let atomic = split::split_atomic_parts(content);
    if atomic.blocks.is_empty() {
        notebook.cells.push(Cell::markdown(
            ids.claim(format!("section_{}", section.ordinal)),
            format!("**{label}**\n\n{content}"),
        ));
        return;
    }

    // Atomic parts carry the content: the section cell keeps only its title,
    // and the preamble before the first atomic marker is discarded.
    debug!(label, parts = atomic.blocks.len(), "section has atomic parts");
    notebook.cells.push(Cell::markdown(
        ids.claim(format!("section_{}", section.ordinal)),
        format!("**{label}**\n\n"),
    ));

    for part in &atomic.blocks {
        let body = transform_atomic_content(truncate_at_end(part.content.trim()));
        notebook.cells.push(Cell::markdown(
            ids.claim(format!("{}_{}_{}", part.label, section.ordinal, part.ordinal)),
            format!("**{}**\n\n{body}", part.label),
        ));
    }
}

/// Gives atomic content its block-friendly shape: single-line display math is
/// re-wrapped onto three lines (delimiter, content, delimiter), then every
/// line gets a markdown hard break (two trailing spaces) so the line breaks
/// survive cell rendering.
fn transform_atomic_content(content: &str) -> String {
    let rewrapped = RE_INLINE_DISPLAY.replace_all(content, |caps: &Captures<'_>| {
        format!("\\[\n{}\n\\]", &caps[1])
    });
    rewrapped.lines().map(|line| format!("{line}  \n")).collect()
}

/// Last-chance safety net over every assembled cell: collapse literal `\\`
/// to `\`, then re-truncate at `\end{document}`. Idempotent; runs whether or
/// not the earlier per-stage truncations fired.
fn cleanup_cells(notebook: &mut Notebook) {
    for cell in &mut notebook.cells {
        for text in &mut cell.source {
            let collapsed = text.replace(r"\\", r"\");
            *text = truncate_at_end(&collapsed).to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assemble(text: &str) -> Notebook {
        assemble_notebook(text, &ConvertOptions::default())
    }

    fn cell_ids(nb: &Notebook) -> Vec<&str> {
        nb.cells.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_empty_input_yields_minimal_notebook() {
        let nb = assemble("");
        assert_eq!(cell_ids(&nb), ["metadata_cell", "final_separator"]);
        assert!(nb.cells[0].text().starts_with("# Metadata"));
        assert_eq!(nb.cells[1].text(), "---");
    }

    #[test]
    fn test_marker_free_input_is_the_minimal_notebook_too() {
        let nb = assemble("plain prose, nothing labeled");
        assert_eq!(cell_ids(&nb), ["metadata_cell", "final_separator"]);
    }

    #[test]
    fn test_section_with_atomic_parts() {
        let text =
            "\\section*{[SECTION_01]}\nHello\n\\section*{[atomic_a]}\nfoo\nbar\n\\end{document}";
        let nb = assemble(text);
        assert_eq!(
            cell_ids(&nb),
            [
                "metadata_cell",
                "separator_before_[SECTION_01]",
                "section_1",
                "[atomic_a]_1_1",
                "final_separator"
            ]
        );
        // The atomic cells carry the content; the section cell keeps only
        // its title, and the "Hello" preamble is discarded.
        assert_eq!(nb.cells[2].text(), "**[SECTION_01]**\n\n");
        assert_eq!(nb.cells[3].text(), "**[atomic_a]**\n\nfoo  \nbar  \n");
    }

    #[test]
    fn test_plain_section_keeps_content_whole() {
        let nb = assemble("\\section*{[SECTION_02]}\nline one\nline two");
        assert_eq!(nb.cells[1].id, "separator_before_[SECTION_02]");
        assert_eq!(nb.cells[2].text(), "**[SECTION_02]**\n\nline one\nline two");
    }

    #[test]
    fn test_prompt_and_response_dividers_use_ordinal_ids() {
        let nb = assemble("\\section*{[PROMPT]}\nask\n\\section*{[RESPONSE]}\nanswer");
        assert_eq!(
            cell_ids(&nb),
            [
                "metadata_cell",
                "separator_1",
                "section_1",
                "separator_3",
                "section_3",
                "final_separator"
            ]
        );
    }

    #[test]
    fn test_unrecognised_label_gets_content_cell_without_divider() {
        let nb = assemble("\\section*{[NOTES]}\nfree-form text");
        assert_eq!(cell_ids(&nb), ["metadata_cell", "section_1", "final_separator"]);
        assert_eq!(nb.cells[1].text(), "**[NOTES]**\n\nfree-form text");
    }

    #[test]
    fn test_content_after_document_end_is_unreachable() {
        let text = "\\section*{[SECTION_01]}\nkeep\n\\end{document}\n\\section*{[SECTION_02]}\ndrop";
        let nb = assemble(text);
        assert_eq!(
            cell_ids(&nb),
            [
                "metadata_cell",
                "separator_before_[SECTION_01]",
                "section_1",
                "final_separator"
            ]
        );
        assert_eq!(nb.cells[2].text(), "**[SECTION_01]**\n\nkeep");
    }

    #[test]
    fn test_duplicate_labels_get_deterministic_id_suffixes() {
        let nb = assemble("\\section*{[SECTION_01]}\na\n\\section*{[SECTION_01]}\nb");
        assert_eq!(
            cell_ids(&nb),
            [
                "metadata_cell",
                "separator_before_[SECTION_01]",
                "section_1",
                "separator_before_[SECTION_01]_2",
                "section_3",
                "final_separator"
            ]
        );
    }

    #[test]
    fn test_cleanup_collapses_doubled_backslashes() {
        // Escaped macros arrive doubled; the cleanup pass collapses them
        // back for the rendered cell.
        let nb = assemble("\\section*{[A]}\n\\\\frac{1}{2}");
        assert_eq!(nb.cells[1].text(), "**[A]**\n\n\\frac{1}{2}");
    }

    #[test]
    fn test_single_line_display_math_in_atomic_is_rewrapped() {
        let nb = assemble("\\section*{[S]}\n\\section*{[atomic_eq]}\n\\[ x+y \\]");
        let atomic = &nb.cells[2];
        assert_eq!(atomic.id, "[atomic_eq]_1_1");
        assert_eq!(atomic.text(), "**[atomic_eq]**\n\n\\[  \nx+y  \n\\]  \n");
    }

    #[test]
    fn test_atomic_content_truncates_at_document_end() {
        let text = "\\section*{[S]}\n\\section*{[atomic_a]}\nkeep\\end{document}drop";
        let nb = assemble(text);
        assert_eq!(nb.cells[2].text(), "**[atomic_a]**\n\nkeep  \n");
    }

    #[test]
    fn test_all_ids_unique_even_with_repeated_atomic_labels() {
        let text = "\\section*{[S1]}\n\\section*{[atomic_x]}\na\n\
                    \\section*{[S2]}\n\\section*{[atomic_x]}\nb";
        let nb = assemble(text);
        let ids = cell_ids(&nb);
        let unique: HashSet<&&str> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len(), "duplicate cell id in {ids:?}");
        // Parent ordinals differ, so the atomic ids differ without suffixes.
        assert!(ids.contains(&"[atomic_x]_1_1"));
        assert!(ids.contains(&"[atomic_x]_3_1"));
    }
}
