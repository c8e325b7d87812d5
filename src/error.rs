//! Error types for the tex2nb library.
//!
//! The conversion core is a pure function of its input text and cannot fail:
//! empty input, marker-free input, and stray document-end markers all produce
//! a well-formed (if minimal) notebook. Everything that *can* fail lives at
//! the edges — reading a source file, serialising the notebook, writing the
//! output artifact — and is reported through [`Tex2NbError`].
//!
//! The CLI is the single failure boundary: any `Err` surfaces once as a
//! user-facing message, with no partial output and no retry.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the tex2nb library.
#[derive(Debug, Error)]
pub enum Tex2NbError {
    /// The input file could not be read (missing, unreadable, or not UTF-8).
    #[error("Failed to read LaTeX input '{path}': {source}\nCheck the path exists and contains UTF-8 text.")]
    InputReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not create or write the output notebook file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The assembled notebook could not be serialised to JSON.
    #[error("Failed to serialise notebook: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_read_display_names_path() {
        let e = Tex2NbError::InputReadFailed {
            path: PathBuf::from("exam.tex"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = e.to_string();
        assert!(msg.contains("exam.tex"), "got: {msg}");
        assert!(msg.contains("UTF-8"), "got: {msg}");
    }

    #[test]
    fn output_write_display_names_path() {
        let e = Tex2NbError::OutputWriteFailed {
            path: PathBuf::from("out/notebook.ipynb"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.to_string().contains("out/notebook.ipynb"));
    }
}
