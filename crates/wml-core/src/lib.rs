#![cfg_attr(docsrs, feature(doc_cfg))]
//! Typed WordprocessingML accessor views.
//!
//! Every view is a stateless borrow of an [`oxml_tree::XmlElement`]; a
//! property access re-resolves and re-coerces the underlying raw value on
//! every call. Required values come back as `Result<T, WmlError>` and
//! optional ones as `Result<Option<T>, WmlError>`: `Ok(None)` always means
//! "genuinely absent" (for style-cascaded properties: consult the style
//! hierarchy, which is never resolved here), while an error always means
//! the document broke a schema rule. The two never mix.

use oxml_ns::NsError;
use oxml_tree::{TreeError, XmlElement};
use thiserror::Error;
use wml_types::TypeError;

mod body;
mod choice;
mod drawing;
mod paragraph;
mod run;
mod section;
mod support;
mod table;
pub(crate) mod tags;

pub use body::{Body, BlockContent};
pub use choice::{choice_and_more, choice_one_child, choice_require_one_child};
pub use drawing::{Anchor, DocProps, Drawing, DrawingContent, Extent, Inline};
pub use paragraph::{
    BookmarkEnd, BookmarkStart, Del, Hyperlink, Indentation, Ins, NumberFormatElement,
    NumberingProperties, Paragraph, ParagraphContent, ParagraphProperties, Spacing, TabStop,
};
pub use run::{Border, Break, Run, RunContent, RunContentHost, RunFonts, RunProperties, Text};
pub use section::{PageMargins, PageSize, SectionProperties};
pub use table::{
    GridColumn, RowHeight, Table, TableCell, TableGrid, TableProperties, TableRow, TableWidth,
};

/// Error type produced by typed accessors.
#[derive(Debug, Error)]
pub enum WmlError {
    /// A prefixed name could not be resolved against the static registry.
    #[error(transparent)]
    Ns(#[from] NsError),
    /// Simple-type coercion of a present raw value failed.
    #[error(transparent)]
    Type(#[from] TypeError),
    /// Loading the underlying element tree failed.
    #[error(transparent)]
    Tree(#[from] TreeError),
    /// A schema-required attribute is absent.
    #[error("{tag} is missing required attribute {attr}")]
    MissingAttribute {
        /// Tag of the element missing the attribute.
        tag: String,
        /// Clark-notation attribute key.
        attr: &'static str,
    },
    /// A schema-required child (or required-exactly-one choice) is absent.
    #[error("{tag} is missing required child {expected}")]
    MissingChild {
        /// Tag of the parent element.
        tag: String,
        /// Description of the expected child or choice group.
        expected: &'static str,
    },
    /// A required-exactly-one choice group matched more than one child.
    #[error("{tag} has more than one {expected} child")]
    AmbiguousChoice {
        /// Tag of the parent element.
        tag: String,
        /// Description of the choice group.
        expected: &'static str,
    },
    /// A view was constructed over an element of the wrong kind.
    #[error("expected {expected} element, found {found}")]
    UnexpectedElement {
        /// Tag the view requires.
        expected: &'static str,
        /// Tag actually present.
        found: String,
    },
}

/// A typed view borrowing one underlying element.
///
/// Views are `Copy` borrows: many views may alias the same node, none of
/// them copies or mutates it.
pub trait ElementView<'a> {
    /// Borrow the underlying element.
    fn element(&self) -> &'a XmlElement;

    /// Clark-notation tag of the underlying element.
    fn tag(&self) -> &'a str {
        self.element().tag()
    }
}
