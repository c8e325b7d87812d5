//! Notebook data model.
//!
//! Mirrors the subset of the Jupyter/Colab `.ipynb` schema the converter
//! emits: markdown cells only, an empty per-cell metadata mapping, and a
//! fixed `colab.provenance` document metadata block. Field declaration order
//! matches the serialised key order (`cells`, `metadata`, `nbformat`,
//! `nbformat_minor`; `cell_type`, `source`, `metadata`, `id`), so the JSON
//! shape is stable across releases and byte-comparable in tests.
//!
//! Cells are created by the assembler and mutated only by the final cleanup
//! pass — text rewriting, never structural change.

use crate::error::Tex2NbError;
use crate::template;
use serde::{Deserialize, Serialize};

/// Notebook format major version carried by every emitted document.
pub const NBFORMAT: u32 = 4;
/// Notebook format minor version carried by every emitted document.
pub const NBFORMAT_MINOR: u32 = 5;

/// The structured output document: an ordered cell list plus fixed format
/// metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    /// Ordered content blocks. Every `id` is unique within the notebook.
    pub cells: Vec<Cell>,
    /// Fixed provenance structure, carried unchanged through conversion.
    pub metadata: NotebookMetadata,
    /// Always [`NBFORMAT`].
    pub nbformat: u32,
    /// Always [`NBFORMAT_MINOR`].
    pub nbformat_minor: u32,
}

impl Notebook {
    /// Creates an empty notebook carrying the fixed format metadata.
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            metadata: NotebookMetadata::default(),
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        }
    }

    /// Serialises to pretty-printed JSON (two-space indent), the form the
    /// downstream renderer ingests.
    pub fn to_json_pretty(&self) -> Result<String, Tex2NbError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialises to compact single-line JSON.
    pub fn to_json(&self) -> Result<String, Tex2NbError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level notebook metadata: `{ "colab": { "provenance": [] } }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NotebookMetadata {
    pub colab: ColabMetadata,
}

/// Colab provenance list. Entries are opaque and carried unchanged; the
/// converter always emits an empty list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColabMetadata {
    pub provenance: Vec<serde_json::Value>,
}

/// The only cell kind the converter produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Markdown,
}

/// One content block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub cell_type: CellType,
    /// Cell text. The converter emits one string per cell; the type stays a
    /// list because the `.ipynb` schema allows line-split sources and the
    /// cleanup passes operate per element.
    pub source: Vec<String>,
    /// Always empty; present because the schema requires the key.
    pub metadata: serde_json::Map<String, serde_json::Value>,
    /// Unique within the notebook; deterministic from label text and pair
    /// indices.
    pub id: String,
}

impl Cell {
    /// Creates a markdown cell holding a single source string.
    pub fn markdown(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            cell_type: CellType::Markdown,
            source: vec![text.into()],
            metadata: serde_json::Map::new(),
            id: id.into(),
        }
    }

    /// Creates a horizontal-rule divider cell.
    pub fn divider(id: impl Into<String>) -> Self {
        Self::markdown(id, template::DIVIDER)
    }

    /// The cell's full text (source elements joined).
    pub fn text(&self) -> String {
        self.source.concat()
    }
}
