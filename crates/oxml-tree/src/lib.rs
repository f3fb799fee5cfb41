#![cfg_attr(docsrs, feature(doc_cfg))]
//! Generic OOXML element tree loaded with quick-xml.
//!
//! The tree is an owned, read-only value: parse once, then hand out borrows.
//! Element and attribute names are stored in Clark notation (`{uri}local`),
//! so lookups never depend on which prefix a producer happened to choose.
//! Concurrent reads of the same tree are safe because nothing mutates it
//! after [`parse`] returns.

use thiserror::Error;

mod node;
mod parse;

pub use node::{XmlElement, XmlNode};
pub use parse::parse;

/// Error type produced while loading an element tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The underlying XML reader reported a syntax error.
    #[error("xml: {0}")]
    Xml(String),
    /// The document is well-formed XML but not a usable tree.
    #[error("invalid document: {0}")]
    Invalid(String),
    /// A name uses a prefix neither declared in the document nor registered
    /// in the static prefix table.
    #[error("unknown namespace prefix: {0}")]
    UnknownPrefix(String),
}
