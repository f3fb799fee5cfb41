//! Block-level content: the `w:body` view and the paragraph-or-table
//! choice shared with table cells.

use oxml_tree::XmlElement;

use crate::choice::choice_and_more;
use crate::paragraph::Paragraph;
use crate::section::SectionProperties;
use crate::table::Table;
use crate::tags;
use crate::{ElementView, WmlError};

/// One block-level item. The same choice group appears under `w:body`
/// and `w:tc`; membership belongs to the call site.
#[derive(Debug, Clone, Copy)]
pub enum BlockContent<'a> {
    /// `w:p`.
    Paragraph(Paragraph<'a>),
    /// `w:tbl`.
    Table(Table<'a>),
}

/// Decode the block-level children of `parent`, in document order.
pub(crate) fn block_content(parent: &XmlElement) -> Vec<BlockContent<'_>> {
    choice_and_more(parent, &[tags::W_P, tags::W_TBL])
        .into_iter()
        .map(|el| match el.tag() {
            tags::W_P => BlockContent::Paragraph(Paragraph::new(el)),
            _ => BlockContent::Table(Table::new(el)),
        })
        .collect()
}

/// `<w:body>`: the main document story.
#[derive(Debug, Clone, Copy)]
pub struct Body<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for Body<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> Body<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        Body { el }
    }

    /// View an element as a document body, checking its tag.
    pub fn from_element(el: &'a XmlElement) -> Result<Self, WmlError> {
        if el.tag() != tags::W_BODY {
            return Err(WmlError::UnexpectedElement {
                expected: "w:body",
                found: el.tag().to_string(),
            });
        }
        Ok(Body { el })
    }

    /// Block-level content in document order.
    pub fn content(&self) -> Vec<BlockContent<'a>> {
        block_content(self.el)
    }

    /// Paragraphs only, in document order.
    pub fn paragraphs(&self) -> Vec<Paragraph<'a>> {
        self.content()
            .into_iter()
            .filter_map(|block| match block {
                BlockContent::Paragraph(p) => Some(p),
                BlockContent::Table(_) => None,
            })
            .collect()
    }

    /// Tables only, in document order.
    pub fn tables(&self) -> Vec<Table<'a>> {
        self.content()
            .into_iter()
            .filter_map(|block| match block {
                BlockContent::Table(t) => Some(t),
                BlockContent::Paragraph(_) => None,
            })
            .collect()
    }

    /// The trailing `w:sectPr` carrying the last section's properties.
    pub fn section_properties(&self) -> Option<SectionProperties<'a>> {
        self.el
            .find_first(tags::W_SECT_PR)
            .map(SectionProperties::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#;

    #[test]
    fn body_interleaves_paragraphs_and_tables() {
        let xml = format!(
            r#"<w:body {NS}>
                <w:p><w:r><w:t>intro</w:t></w:r></w:p>
                <w:tbl><w:tr><w:tc><w:p/></w:tc></w:tr></w:tbl>
                <w:p><w:r><w:t>outro</w:t></w:r></w:p>
                <w:sectPr><w:pgSz w:w="12240" w:h="15840"/></w:sectPr>
            </w:body>"#
        );
        let el = oxml_tree::parse(&xml).expect("fixture parses");
        let body = Body::from_element(&el).unwrap();
        let kinds: Vec<&str> = body
            .content()
            .iter()
            .map(|block| match block {
                BlockContent::Paragraph(_) => "p",
                BlockContent::Table(_) => "tbl",
            })
            .collect();
        assert_eq!(kinds, ["p", "tbl", "p"]);
        assert_eq!(body.paragraphs().len(), 2);
        assert_eq!(body.tables().len(), 1);
        assert!(body.section_properties().is_some());
    }
}
