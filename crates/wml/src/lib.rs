#![cfg_attr(docsrs, feature(doc_cfg))]
//! High level WordprocessingML facade that re-exports the workspace crates
//! and provides convenience wrappers.
//!
//! ```rust
//! use wml::Document;
//!
//! # fn run() -> Result<(), wml::WmlError> {
//! let xml = r#"
//!     <w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
//!         <w:body>
//!             <w:p><w:r><w:t>Hello, Word.</w:t></w:r></w:p>
//!         </w:body>
//!     </w:document>
//! "#;
//! let doc = Document::from_xml(xml)?;
//! assert_eq!(doc.plain_text()?, "Hello, Word.\n");
//! for paragraph in doc.body()?.paragraphs() {
//!     println!("{}", paragraph.text());
//! }
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```

pub use oxml_ns as ns;
pub use oxml_tree as tree;
pub use wml_types as types;

pub use oxml_tree::{XmlElement, XmlNode};
pub use wml_core::*;

/// An owned `word/document.xml` part exposing the typed object graph.
///
/// The document owns the parsed tree; every typed view borrows from it.
/// Extracting the part from the zip package and resolving relationships
/// are caller concerns.
#[derive(Debug, Clone)]
pub struct Document {
    root: XmlElement,
}

impl Document {
    /// Parse the XML text of a document part.
    ///
    /// The root element must be `w:document`.
    pub fn from_xml(xml: &str) -> Result<Self, WmlError> {
        let root = oxml_tree::parse(xml)?;
        let expected = oxml_ns::qn("w:document")?;
        if root.tag() != expected {
            return Err(WmlError::UnexpectedElement {
                expected: "w:document",
                found: root.tag().to_string(),
            });
        }
        Ok(Document { root })
    }

    /// Borrow the root element.
    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// The `w:body` story. A document part without a body is
    /// non-conformant.
    pub fn body(&self) -> Result<Body<'_>, WmlError> {
        let tag = oxml_ns::qn("w:body")?;
        self.root
            .find_first(&tag)
            .ok_or_else(|| WmlError::MissingChild {
                tag: self.root.tag().to_string(),
                expected: "w:body",
            })
            .and_then(Body::from_element)
    }

    /// All paragraphs of the body, tables not descended into.
    pub fn paragraphs(&self) -> Result<Vec<Paragraph<'_>>, WmlError> {
        Ok(self.body()?.paragraphs())
    }

    /// Plain text of the whole story: one line per paragraph, table cell
    /// paragraphs included, in document order.
    pub fn plain_text(&self) -> Result<String, WmlError> {
        let mut out = String::new();
        collect_text(&self.body()?.content(), &mut out);
        Ok(out)
    }
}

fn collect_text(blocks: &[BlockContent<'_>], out: &mut String) {
    for block in blocks {
        match block {
            BlockContent::Paragraph(p) => {
                out.push_str(&p.text());
                out.push('\n');
            }
            BlockContent::Table(t) => {
                for row in t.rows() {
                    for cell in row.cells() {
                        collect_text(&cell.content(), out);
                    }
                }
            }
        }
    }
}
