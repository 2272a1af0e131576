//! codeshift-rules: Rule-based source-to-source conversion
//!
//! - `Rule` / `Phase`: a single data-described rewrite step and its phase
//! - `Pipeline`: the ordered rules for one directed language pair
//! - `RuleSetLibrary`: the built-in pipelines plus any custom YAML rules
//! - `Converter`: picks identity, a direct pipeline, or a hub composition
//!
//! # Example
//!
//! ```
//! use codeshift_core::Language;
//!
//! let out = codeshift_rules::convert("console.log(true)", Language::JavaScript, Language::Python);
//! assert_eq!(out, "print(True)");
//! ```

mod builtin;
mod library;
mod pipeline;
mod router;
mod rule;
mod scan;
pub mod yaml_rules;

pub use library::{PipelineInfo, RuleInfo, RuleSetLibrary};
pub use pipeline::Pipeline;
pub use router::{ConversionPath, Converter, HubPolicy};
pub use rule::{Guard, Phase, Rule, RuleAction, TransformFn};

use codeshift_core::Language;

/// Convert `code` with the built-in rule library and the default hub
pub fn convert(code: &str, source: Language, target: Language) -> String {
    Converter::new(RuleSetLibrary::shared()).convert(code, source, target)
}
