//! `readgen_core` turns a structured reading-comprehension test (parts,
//! passages, question groups and answers) into a self-contained interactive
//! HTML page.
//!
//! ## Processing Pipeline
//!
//! ```text
//! TestData (parsed JSON / YAML / TOML)
//!   → Validator (collects structural violations, fails fast as one error)
//!   → Metadata builder (per-part ranges, total count, answer key)
//!   → Renderers (part headers, passages, one fragment per question group, footer)
//!   → Assembler (splices fragments between template markers, embeds the metadata)
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading from `readgen.toml`.
//! - [`render`] - One renderer per question type and the type dispatch.
//! - [`template`] - Section markers, marker splicing and the bundled template.
//!
//! ## Key Types
//!
//! - [`TestData`] - The raw test as written by the author.
//! - [`QuestionGroup`] - A group resolved into its typed, per-type payload.
//! - [`TestMeta`] - Derived ranges and answer key, embedded as `window.testMeta`.
//! - [`RenderOutput`] - The finished page plus its metadata.
//!
//! ## Template Contract
//!
//! The template holds each of these marker pairs once:
//!
//! ```html
//! <!-- PART_HEADERS_START --><!-- PART_HEADERS_END -->
//! <!-- PASSAGES_START --><!-- PASSAGES_END -->
//! <!-- QUESTIONS_START --><!-- QUESTIONS_END -->
//! <!-- FOOTER_NAV_START --><!-- FOOTER_NAV_END -->
//! <!-- TEST_META_SCRIPT -->
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use readgen_core::DEFAULT_TEMPLATE;
//! use readgen_core::parse_test_data;
//! use readgen_core::render_from_json;
//!
//! let data = r#"{
//!   "test_id": "demo",
//!   "parts": [{
//!     "part": 1,
//!     "passage": { "paragraphs": ["Bees live in hives."] },
//!     "question_groups": [{
//!       "type": "TFNG",
//!       "questions": [{ "number": 1, "statement": "Bees live alone.", "answer": "FALSE" }]
//!     }]
//!   }]
//! }"#;
//!
//! let test = parse_test_data(data, "json").unwrap();
//! let output = render_from_json(&test, DEFAULT_TEMPLATE).unwrap();
//! assert_eq!(output.meta.total_questions, 1);
//! assert!(output.html.contains("window.testMeta"));
//! ```

pub use assemble::*;
pub use config::*;
pub use data::*;
pub use error::*;
pub use escape::*;
pub use group::*;
pub use instructions::*;
pub use meta::*;
pub use render::fill_blanks;
pub use render::render_question_group;
pub use render::render_typed_group;
pub use template::*;
pub use validate::*;

mod assemble;
pub mod config;
mod data;
#[allow(unused_assignments)]
mod error;
mod escape;
mod group;
mod instructions;
mod meta;
pub mod render;
pub mod template;
mod validate;

#[cfg(test)]
mod __fixtures;
