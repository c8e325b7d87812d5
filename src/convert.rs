//! Conversion entry points.
//!
//! ## The two pipelines
//!
//! [`convert`] is the structuring pipeline: free-form LaTeX in, an ordered
//! notebook out. It is a pure function of its input — no I/O, no shared
//! state, no failure mode (empty or marker-free input yields the minimal
//! notebook, not an error). [`convert_delimiters`] is the independent
//! delimiter pipeline, re-exported here so both entry points live at the
//! crate root.
//!
//! The file-based conveniences ([`convert_file`], [`convert_to_file`]) wrap
//! the pure core with the only fallible pieces: reading UTF-8 input and
//! writing the serialised notebook (atomically, temp file then rename, so a
//! crashed run never leaves a partial `.ipynb` behind).

use crate::config::ConvertOptions;
use crate::error::Tex2NbError;
use crate::notebook::Notebook;
use crate::pipeline::{assemble, delimiters, equations, escape};
use std::path::Path;
use tracing::{debug, info};

pub use crate::pipeline::body::extract_body;
pub use crate::pipeline::delimiters::convert_delimiters;

/// Convert sectioned LaTeX text to a notebook.
///
/// This is the primary entry point for the library. Stages run in fixed
/// order: display equations are flattened onto single lines, the macro
/// escape table is applied, the cell sequence is assembled, and the
/// delimiter guard hook runs over every cell source line.
///
/// # Example
/// ```rust
/// use tex2nb::{convert, ConvertOptions};
///
/// let text = "\\section*{[SECTION_01]}\nSolve $x^2 = 4$.";
/// let notebook = convert(text, &ConvertOptions::default());
/// assert_eq!(notebook.cells.len(), 4); // metadata, divider, section, trailer
/// ```
pub fn convert(text: &str, options: &ConvertOptions) -> Notebook {
    info!(bytes = text.len(), "starting conversion");

    // ── Step 1: Flatten multi-line display equations ─────────────────────
    let normalized = equations::normalize_display_equations(text);
    debug!("display equations normalised");

    // ── Step 2: Re-escape math macros ────────────────────────────────────
    let escaped = escape::escape_macros(&normalized);
    debug!("macro escape table applied");

    // ── Step 3: Split and assemble cells ─────────────────────────────────
    let mut notebook = assemble::assemble_notebook(&escaped, options);

    // ── Step 4: Delimiter guard hook, per cell, per source line ──────────
    for cell in &mut notebook.cells {
        for line in &mut cell.source {
            *line = delimiters::guard_delimiters(line);
        }
    }

    info!(cells = notebook.cells.len(), "conversion complete");
    notebook
}

/// Read a UTF-8 LaTeX file and convert it.
pub fn convert_file(
    path: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<Notebook, Tex2NbError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| Tex2NbError::InputReadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(convert(&text, options))
}

/// Convert text and write the notebook as pretty JSON to a file.
///
/// Uses atomic write (temp file + rename) to prevent partial files.
pub fn convert_to_file(
    text: &str,
    output_path: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<Notebook, Tex2NbError> {
    let notebook = convert(text, options);
    let json = notebook.to_json_pretty()?;
    let path = output_path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| Tex2NbError::OutputWriteFailed {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
    }

    let tmp_path = path.with_extension("ipynb.tmp");
    std::fs::write(&tmp_path, &json).map_err(|e| Tex2NbError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    std::fs::rename(&tmp_path, path).map_err(|e| Tex2NbError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!(path = %path.display(), "notebook written");
    Ok(notebook)
}
