//! codeshift-core: Core abstractions for rule-based code conversion
//!
//! This crate provides:
//! - `Language`: The supported source/target languages
//! - `Edit`: A span-based text modification
//! - `apply_edits()`: Function to apply non-overlapping edits in one pass
//! - `templates`: Sample snippets for each language

mod edit;
mod language;
pub mod templates;

pub use edit::{apply_edits, Edit, EditError, Span};
pub use language::{Language, LanguageParseError};
