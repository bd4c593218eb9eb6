//! Markdown resolution, frontmatter extraction, and metadata inference.
//!
//! Turns a directory of markdown documents into [`Document`] values carrying
//! rendered HTML plus metadata, where every field missing from the
//! frontmatter is inferred from the slug and body.
//!
//! # Modules
//!
//! - [`resolver`]: slug lookup, listing, priority ordering, search entry point
//! - [`document`]: the resolved document type
//! - [`metadata`]: the metadata record and its synthesis from frontmatter
//! - [`frontmatter`]: `---` fenced YAML splitting and typed field access
//! - [`infer`]: title, description, energy, tag and complexity heuristics
//! - [`markdown`]: HTML rendering
//! - [`search`]: relevance scoring
//! - [`tables`]: fixed slug and keyword tables

#![doc = include_str!("../README.md")]

pub mod document;
pub mod frontmatter;
pub mod infer;
pub mod markdown;
pub mod metadata;
pub mod resolver;
pub mod search;
pub mod tables;

pub use document::Document;
pub use frontmatter::FrontMatter;
pub use metadata::{Metadata, MysticalLevel};
pub use resolver::ContentResolver;
pub use search::ScoredDocument;
