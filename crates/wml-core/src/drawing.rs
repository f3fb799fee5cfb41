//! Drawing object views: `w:drawing` and its exactly-one positioning
//! choice between `wp:inline` and `wp:anchor`.

use oxml_tree::XmlElement;
use wml_types::{parse_decimal, parse_on_off, parse_unsigned_decimal, Emu};

use crate::choice::choice_require_one_child;
use crate::support::required_attr;
use crate::tags;
use crate::{ElementView, WmlError};

/// `<w:drawing>`: a DrawingML object hosted in run content.
#[derive(Debug, Clone, Copy)]
pub struct Drawing<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for Drawing<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> Drawing<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        Drawing { el }
    }

    /// View an element as a drawing, checking its tag.
    pub fn from_element(el: &'a XmlElement) -> Result<Self, WmlError> {
        if el.tag() != tags::W_DRAWING {
            return Err(WmlError::UnexpectedElement {
                expected: "w:drawing",
                found: el.tag().to_string(),
            });
        }
        Ok(Drawing { el })
    }

    /// The positioning child. The schema requires exactly one of
    /// `wp:inline` or `wp:anchor`; absence and duplication are both
    /// conformance violations.
    pub fn content(&self) -> Result<DrawingContent<'a>, WmlError> {
        let child = choice_require_one_child(
            self.el,
            &[tags::WP_INLINE, tags::WP_ANCHOR],
            "wp:inline or wp:anchor",
        )?;
        Ok(match child.tag() {
            tags::WP_INLINE => DrawingContent::Inline(Inline::new(child)),
            _ => DrawingContent::Anchor(Anchor::new(child)),
        })
    }
}

/// The resolved positioning of a drawing.
#[derive(Debug, Clone, Copy)]
pub enum DrawingContent<'a> {
    /// `wp:inline`: flows with the run content.
    Inline(Inline<'a>),
    /// `wp:anchor`: floats relative to the page or text.
    Anchor(Anchor<'a>),
}

/// `<wp:inline>`: inline drawing positioning.
#[derive(Debug, Clone, Copy)]
pub struct Inline<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for Inline<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> Inline<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        Inline { el }
    }

    /// `wp:extent`: display size of the object.
    pub fn extent(&self) -> Result<Extent<'a>, WmlError> {
        self.el
            .find_first(tags::WP_EXTENT)
            .map(Extent::new)
            .ok_or_else(|| WmlError::MissingChild {
                tag: self.el.tag().to_string(),
                expected: "wp:extent",
            })
    }

    /// `wp:docPr`: non-visual properties of the object.
    pub fn doc_properties(&self) -> Result<DocProps<'a>, WmlError> {
        self.el
            .find_first(tags::WP_DOC_PR)
            .map(DocProps::new)
            .ok_or_else(|| WmlError::MissingChild {
                tag: self.el.tag().to_string(),
                expected: "wp:docPr",
            })
    }

    /// `distT`: clearance above the object. Absent means 0.
    pub fn dist_top(&self) -> Result<Emu, WmlError> {
        self.dist("distT")
    }

    /// `distB`: clearance below the object. Absent means 0.
    pub fn dist_bottom(&self) -> Result<Emu, WmlError> {
        self.dist("distB")
    }

    /// `distL`: clearance left of the object. Absent means 0.
    pub fn dist_left(&self) -> Result<Emu, WmlError> {
        self.dist("distL")
    }

    /// `distR`: clearance right of the object. Absent means 0.
    pub fn dist_right(&self) -> Result<Emu, WmlError> {
        self.dist("distR")
    }

    fn dist(&self, attr: &'static str) -> Result<Emu, WmlError> {
        match self.el.attr(attr) {
            None => Ok(Emu(0)),
            Some(raw) => Ok(Emu(parse_unsigned_decimal(raw)? as i64)),
        }
    }
}

/// `<wp:anchor>`: floating drawing positioning.
#[derive(Debug, Clone, Copy)]
pub struct Anchor<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for Anchor<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> Anchor<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        Anchor { el }
    }

    /// `wp:extent`: display size of the object.
    pub fn extent(&self) -> Result<Extent<'a>, WmlError> {
        self.el
            .find_first(tags::WP_EXTENT)
            .map(Extent::new)
            .ok_or_else(|| WmlError::MissingChild {
                tag: self.el.tag().to_string(),
                expected: "wp:extent",
            })
    }

    /// `wp:docPr`: non-visual properties of the object.
    pub fn doc_properties(&self) -> Result<DocProps<'a>, WmlError> {
        self.el
            .find_first(tags::WP_DOC_PR)
            .map(DocProps::new)
            .ok_or_else(|| WmlError::MissingChild {
                tag: self.el.tag().to_string(),
                expected: "wp:docPr",
            })
    }

    /// `relativeHeight`: z-order among overlapping objects.
    pub fn relative_height(&self) -> Result<u64, WmlError> {
        Ok(parse_unsigned_decimal(required_attr(
            self.el,
            "relativeHeight",
        )?)?)
    }

    /// `behindDoc`: whether the object renders behind the text.
    pub fn behind_text(&self) -> Result<bool, WmlError> {
        Ok(parse_on_off(required_attr(self.el, "behindDoc")?)?)
    }

    /// `allowOverlap`: whether other anchors may overlap this one.
    pub fn allow_overlap(&self) -> Result<bool, WmlError> {
        Ok(parse_on_off(required_attr(self.el, "allowOverlap")?)?)
    }
}

/// `<wp:extent>`: object display size in EMU.
#[derive(Debug, Clone, Copy)]
pub struct Extent<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for Extent<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> Extent<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        Extent { el }
    }

    /// `cx`: width.
    pub fn width(&self) -> Result<Emu, WmlError> {
        Ok(Emu(parse_decimal(required_attr(self.el, "cx")?)?))
    }

    /// `cy`: height.
    pub fn height(&self) -> Result<Emu, WmlError> {
        Ok(Emu(parse_decimal(required_attr(self.el, "cy")?)?))
    }
}

/// `<wp:docPr>`: non-visual drawing properties.
#[derive(Debug, Clone, Copy)]
pub struct DocProps<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for DocProps<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> DocProps<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        DocProps { el }
    }

    /// `id`: unique identifier within the document.
    pub fn id(&self) -> Result<u64, WmlError> {
        Ok(parse_unsigned_decimal(required_attr(self.el, "id")?)?)
    }

    /// `name`: display name of the object.
    pub fn name(&self) -> Result<&'a str, WmlError> {
        required_attr(self.el, "name")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"
        xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing""#;

    fn parse(xml: &str) -> XmlElement {
        oxml_tree::parse(xml).expect("fixture parses")
    }

    #[test]
    fn inline_positioning_resolves() {
        let d = parse(&format!(
            r#"<w:drawing {NS}>
                <wp:inline distT="0" distB="0" distL="114300" distR="114300">
                    <wp:extent cx="2286000" cy="1714500"/>
                    <wp:docPr id="1" name="Picture 1"/>
                </wp:inline>
            </w:drawing>"#
        ));
        let drawing = Drawing::from_element(&d).unwrap();
        match drawing.content().unwrap() {
            DrawingContent::Inline(inline) => {
                let extent = inline.extent().unwrap();
                assert_eq!(extent.width().unwrap(), Emu(2_286_000));
                assert_eq!(extent.height().unwrap(), Emu(1_714_500));
                assert_eq!(inline.dist_left().unwrap(), Emu(114_300));
                // Absent distance attributes fall back to the schema's 0.
                assert_eq!(inline.dist_top().unwrap(), Emu(0));
                let props = inline.doc_properties().unwrap();
                assert_eq!(props.id().unwrap(), 1);
                assert_eq!(props.name().unwrap(), "Picture 1");
            }
            DrawingContent::Anchor(_) => panic!("expected inline"),
        }
    }

    #[test]
    fn anchor_positioning_resolves() {
        let d = parse(&format!(
            r#"<w:drawing {NS}>
                <wp:anchor behindDoc="1" relativeHeight="251658240" allowOverlap="1">
                    <wp:extent cx="914400" cy="914400"/>
                    <wp:docPr id="2" name="Shape 2"/>
                </wp:anchor>
            </w:drawing>"#
        ));
        match Drawing::from_element(&d).unwrap().content().unwrap() {
            DrawingContent::Anchor(anchor) => {
                assert!(anchor.behind_text().unwrap());
                assert!(anchor.allow_overlap().unwrap());
                assert_eq!(anchor.relative_height().unwrap(), 251_658_240);
            }
            DrawingContent::Inline(_) => panic!("expected anchor"),
        }
    }

    #[test]
    fn missing_positioning_child_raises() {
        let d = parse(&format!(r#"<w:drawing {NS}/>"#));
        let err = Drawing::from_element(&d).unwrap().content().unwrap_err();
        assert!(matches!(err, WmlError::MissingChild { .. }));
    }

    #[test]
    fn missing_extent_raises() {
        let d = parse(&format!(
            r#"<w:drawing {NS}><wp:inline><wp:docPr id="1" name="x"/></wp:inline></w:drawing>"#
        ));
        match Drawing::from_element(&d).unwrap().content().unwrap() {
            DrawingContent::Inline(inline) => {
                assert!(matches!(
                    inline.extent().unwrap_err(),
                    WmlError::MissingChild { .. }
                ));
            }
            DrawingContent::Anchor(_) => panic!("expected inline"),
        }
    }
}
