//! Section-level views: `w:sectPr`, page size, and page margins.

use oxml_tree::XmlElement;
use wml_types::{parse_signed_twips, parse_twips, PageOrientation, SectionMark, Twips};

use crate::support::required_attr;
use crate::tags;
use crate::{ElementView, WmlError};

/// `<w:sectPr>`: properties of one document section.
#[derive(Debug, Clone, Copy)]
pub struct SectionProperties<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for SectionProperties<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> SectionProperties<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        SectionProperties { el }
    }

    /// `w:pgSz`, if present.
    pub fn page_size(&self) -> Option<PageSize<'a>> {
        self.el.find_first(tags::W_PG_SZ).map(PageSize::new)
    }

    /// `w:pgMar`, if present.
    pub fn margins(&self) -> Option<PageMargins<'a>> {
        self.el.find_first(tags::W_PG_MAR).map(PageMargins::new)
    }

    /// `w:type`: how the section begins. The schema default for an
    /// absent element (or absent `w:val`) is `nextPage`.
    pub fn start_type(&self) -> Result<SectionMark, WmlError> {
        match self
            .el
            .find_first(tags::W_TYPE)
            .and_then(|el| el.attr(tags::W_VAL))
        {
            None => Ok(SectionMark::NextPage),
            Some(raw) => Ok(SectionMark::from_token(raw)?),
        }
    }
}

/// `<w:pgSz>`: page dimensions of a section.
#[derive(Debug, Clone, Copy)]
pub struct PageSize<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for PageSize<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> PageSize<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        PageSize { el }
    }

    /// `w:w`: page width.
    pub fn width(&self) -> Result<Option<Twips>, WmlError> {
        match self.el.attr(tags::W_W) {
            None => Ok(None),
            Some(raw) => Ok(Some(parse_twips(raw)?)),
        }
    }

    /// `w:h`: page height.
    pub fn height(&self) -> Result<Option<Twips>, WmlError> {
        match self.el.attr(tags::W_H) {
            None => Ok(None),
            Some(raw) => Ok(Some(parse_twips(raw)?)),
        }
    }

    /// `w:orient`: page orientation. The schema default for an absent
    /// attribute is `portrait`.
    pub fn orientation(&self) -> Result<PageOrientation, WmlError> {
        match self.el.attr(tags::W_ORIENT) {
            None => Ok(PageOrientation::Portrait),
            Some(raw) => Ok(PageOrientation::from_token(raw)?),
        }
    }
}

/// `<w:pgMar>`: page margins of a section. All seven attributes are
/// schema-required; top and bottom may be negative (text over header).
#[derive(Debug, Clone, Copy)]
pub struct PageMargins<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for PageMargins<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> PageMargins<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        PageMargins { el }
    }

    /// `w:top` margin.
    pub fn top(&self) -> Result<Twips, WmlError> {
        Ok(parse_signed_twips(required_attr(self.el, tags::W_TOP)?)?)
    }

    /// `w:bottom` margin.
    pub fn bottom(&self) -> Result<Twips, WmlError> {
        Ok(parse_signed_twips(required_attr(self.el, tags::W_BOTTOM)?)?)
    }

    /// `w:left` margin.
    pub fn left(&self) -> Result<Twips, WmlError> {
        Ok(parse_twips(required_attr(self.el, tags::W_LEFT)?)?)
    }

    /// `w:right` margin.
    pub fn right(&self) -> Result<Twips, WmlError> {
        Ok(parse_twips(required_attr(self.el, tags::W_RIGHT)?)?)
    }

    /// `w:header`: edge-to-header distance.
    pub fn header(&self) -> Result<Twips, WmlError> {
        Ok(parse_twips(required_attr(self.el, tags::W_HEADER)?)?)
    }

    /// `w:footer`: edge-to-footer distance.
    pub fn footer(&self) -> Result<Twips, WmlError> {
        Ok(parse_twips(required_attr(self.el, tags::W_FOOTER)?)?)
    }

    /// `w:gutter`: binding-edge allowance.
    pub fn gutter(&self) -> Result<Twips, WmlError> {
        Ok(parse_twips(required_attr(self.el, tags::W_GUTTER)?)?)
    }
}
