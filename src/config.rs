//! Conversion options.
//!
//! The pipeline itself has no knobs — the marker grammar, the substitution
//! tables, and the cell layout are fixed. What *is* caller-specific is the
//! set of placeholder values written into the leading metadata cell, which a
//! reviewer fills in by hand otherwise. Every field defaults to the template
//! placeholder, so `ConvertOptions::default()` reproduces the stock metadata
//! cell byte-for-byte.

/// Placeholder values for the notebook's leading metadata cell.
///
/// # Example
/// ```rust
/// use tex2nb::ConvertOptions;
///
/// let options = ConvertOptions {
///     topic: "Number Theory".into(),
///     difficulty: "Hard".into(),
///     ..ConvertOptions::default()
/// };
/// let notebook = tex2nb::convert("", &options);
/// assert!(notebook.cells[0].source[0].contains("Number Theory"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Value for the `**Topic:**` line. Default: `"Mathematics"`.
    pub topic: String,
    /// Value for the `**Subtopic:**` line. Default: empty (left for review).
    pub subtopic: String,
    /// Value for the `**Difficulty:**` line. Default: empty.
    pub difficulty: String,
    /// Value for the `**Explanation:**` line. Default: empty.
    pub explanation: String,
    /// Value for the `**Sections:**` line. Default: empty.
    pub sections: String,
    /// Value for the `**Prompt:**` line. Default: empty.
    pub prompt: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            topic: "Mathematics".to_string(),
            subtopic: String::new(),
            difficulty: String::new(),
            explanation: String::new(),
            sections: String::new(),
            prompt: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_topic_is_mathematics() {
        let options = ConvertOptions::default();
        assert_eq!(options.topic, "Mathematics");
        assert!(options.subtopic.is_empty());
        assert!(options.prompt.is_empty());
    }
}
