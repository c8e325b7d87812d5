//! # tex2nb
//!
//! Convert sectioned LaTeX worksheets into Jupyter/Colab notebooks.
//!
//! ## Why this crate?
//!
//! Math worksheets authored in LaTeX arrive as one free-form blob: labeled
//! sections, nested atomic sub-parts, display equations spanning several
//! source lines, and a zoo of math-delimiter conventions. Downstream review
//! tooling wants none of that — it expects an ordered list of typed markdown
//! cells with stable ids. This crate is the deterministic bridge: it splits
//! on the labeled markers, re-escapes the math macros that would otherwise
//! lose a backslash inside a cell, and emits a well-formed `.ipynb` document.
//!
//! A second, independent entry point normalises delimiter conventions
//! (`\[..\]`, `\(..\)`, display environments, `\ensuremath`) into canonical
//! `$…$` / `$$…$$` form and reports how many segments it converted.
//!
//! ## Pipeline Overview
//!
//! ```text
//! LaTeX text
//!  │
//!  ├─ 1. Equations  collapse multi-line \[…\] onto single lines
//!  ├─ 2. Escape     fixed seven-rule macro re-escaping table
//!  ├─ 3. Split      \section*{[…]} markers, sections then atomic parts
//!  ├─ 4. Assemble   metadata cell + dividers + content cells + trailer
//!  └─ 5. Guard      per-line delimiter hook, then final notebook
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use tex2nb::{convert, convert_delimiters, ConvertOptions};
//!
//! let notebook = convert(
//!     "\\section*{[SECTION_01]}\nProve that \\( a^2 + b^2 = c^2 \\).",
//!     &ConvertOptions::default(),
//! );
//! println!("{}", notebook.to_json_pretty()?);
//!
//! let (text, count) = convert_delimiters(r"Area: \[ \pi r^2 \]");
//! assert_eq!(text, "Area: $$ \\pi r^2 $$");
//! assert_eq!(count, 1);
//! # Ok::<(), tex2nb::Tex2NbError>(())
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `tex2nb` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! tex2nb = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod notebook;
pub mod pipeline;
pub mod template;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::ConvertOptions;
pub use convert::{convert, convert_delimiters, convert_file, convert_to_file, extract_body};
pub use error::Tex2NbError;
pub use notebook::{Cell, CellType, Notebook};
