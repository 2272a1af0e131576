//! Custom rules declared in YAML
//!
//! A custom rule is a regex and a replacement template bound to one directly
//! authored pipeline and phase. It runs after the built-in rules of that
//! phase. Inline tests are checked when the file is loaded, so a broken rule
//! never reaches a pipeline.
//!
//! # Example YAML Rule
//!
//! ```yaml
//! name: math_floor
//! description: Math.floor is math.floor in Python
//! source: javascript
//! target: python
//! phase: library_calls
//! pattern: 'Math\.floor\('
//! replace: 'math.floor('
//!
//! tests:
//!   - input: "Math.floor(x)"
//!     output: "math.floor(x)"
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_rules_from_file, load_rules_from_string, LoadError};
pub use schema::{TestCase, YamlRule};
