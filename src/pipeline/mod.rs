//! Pipeline stages for LaTeX-to-notebook conversion.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and keeps the
//! order-sensitive rewrite tables (escape, delimiters) in one place each.
//!
//! ## Data Flow
//!
//! ```text
//! raw text ──▶ equations ──▶ escape ──▶ split ──▶ assemble ──▶ delimiters
//!              (flatten \[\])  (7 rules)  (markers)  (cells)     (guard hook)
//! ```
//!
//! 1. [`equations`] — collapse multi-line `\[ … \]` display math onto one
//!    line so a following section marker cannot get glued into an equation
//! 2. [`escape`]    — the fixed seven-rule macro re-escaping table
//! 3. [`split`]     — one labeled-block splitter, run at the section level
//!    and again inside each section for its atomic parts
//! 4. [`assemble`]  — build the cell sequence and run the final cleanup pass
//! 5. [`delimiters`] — the per-line guard hook, plus the standalone
//!    `$`-normalisation entry point (its own data flow, no splitting)
//!
//! [`body`] sits outside the flow: document-end truncation is called from
//! several stages, and body extraction is a standalone public utility.

pub mod assemble;
pub mod body;
pub mod delimiters;
pub mod equations;
pub mod escape;
pub mod split;
