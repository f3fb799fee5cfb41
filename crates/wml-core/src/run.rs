//! Run-level views: `w:r`, its properties, and its inner content.

use oxml_tree::XmlElement;
use wml_types::{
    parse_eighth_points, parse_half_points, parse_signed_twips, parse_unsigned_decimal,
    BorderStyle, BreakClear, BreakType, Color, EighthPoints, HalfPoints, HighlightColor,
    ThemeColor, Twips, Underline, VerticalAlignRun,
};

use crate::choice::choice_and_more;
use crate::support::{child_val, on_off_child, required_val};
use crate::tags;
use crate::{ElementView, WmlError};

/// Anything whose content model hosts `w:r`-level content: paragraphs,
/// hyperlinks, tracked-change ranges. One content-model fragment, composed
/// by the element kinds that carry it.
pub trait RunContentHost<'a>: ElementView<'a> {
    /// Direct `w:r` children, in document order.
    fn runs(&self) -> Vec<Run<'a>> {
        self.element()
            .find_all(&[tags::W_R])
            .into_iter()
            .map(Run::new)
            .collect()
    }

    /// Concatenated text of the direct runs.
    fn text_content(&self) -> String {
        self.runs().iter().map(Run::text).collect()
    }
}

/// `<w:r>`: a run of uniformly formatted content.
#[derive(Debug, Clone, Copy)]
pub struct Run<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for Run<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> Run<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        Run { el }
    }

    /// View an element as a run, checking its tag.
    pub fn from_element(el: &'a XmlElement) -> Result<Self, WmlError> {
        if el.tag() != tags::W_R {
            return Err(WmlError::UnexpectedElement {
                expected: "w:r",
                found: el.tag().to_string(),
            });
        }
        Ok(Run { el })
    }

    /// The `w:rPr` child, if present.
    pub fn properties(&self) -> Option<RunProperties<'a>> {
        self.el.find_first(tags::W_RPR).map(RunProperties::new)
    }

    /// Inner content in document order: the repeatable choice over text,
    /// breaks, tabs, and drawings.
    pub fn content(&self) -> Vec<RunContent<'a>> {
        choice_and_more(
            self.el,
            &[
                tags::W_T,
                tags::W_BR,
                tags::W_TAB,
                tags::W_CR,
                tags::W_NO_BREAK_HYPHEN,
                tags::W_DEL_TEXT,
                tags::W_DRAWING,
            ],
        )
        .into_iter()
        .map(|el| match el.tag() {
            tags::W_T => RunContent::Text(Text::new(el)),
            tags::W_BR => RunContent::Break(Break::new(el)),
            tags::W_TAB => RunContent::Tab,
            tags::W_CR => RunContent::CarriageReturn,
            tags::W_NO_BREAK_HYPHEN => RunContent::NoBreakHyphen,
            tags::W_DEL_TEXT => RunContent::DeletedText(Text::new(el)),
            _ => RunContent::Drawing(crate::Drawing::new(el)),
        })
        .collect()
    }

    /// Visible text of the run: `w:t` content with tabs and breaks folded
    /// to `\t` and `\n`. Deleted text is not visible.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for item in self.content() {
            match item {
                RunContent::Text(t) => out.push_str(&t.content()),
                RunContent::Tab => out.push('\t'),
                RunContent::Break(_) | RunContent::CarriageReturn => out.push('\n'),
                RunContent::NoBreakHyphen => out.push('-'),
                RunContent::DeletedText(_) | RunContent::Drawing(_) => {}
            }
        }
        out
    }
}

/// One item of a run's inner content. Positions may carry different
/// concrete kinds; document order is preserved.
#[derive(Debug, Clone, Copy)]
pub enum RunContent<'a> {
    /// `w:t` literal text.
    Text(Text<'a>),
    /// `w:br` break.
    Break(Break<'a>),
    /// `w:tab` tab character.
    Tab,
    /// `w:cr` carriage return.
    CarriageReturn,
    /// `w:noBreakHyphen`.
    NoBreakHyphen,
    /// `w:delText` content removed under tracked changes.
    DeletedText(Text<'a>),
    /// `w:drawing` anchored or inline drawing object.
    Drawing(crate::Drawing<'a>),
}

/// `<w:t>` (or `<w:delText>`) literal text.
#[derive(Debug, Clone, Copy)]
pub struct Text<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for Text<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> Text<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        Text { el }
    }

    /// The character data, verbatim.
    pub fn content(&self) -> String {
        self.el.text()
    }

    /// Whether `xml:space="preserve"` is declared.
    pub fn preserves_space(&self) -> bool {
        self.el.attr(tags::XML_SPACE) == Some("preserve")
    }
}

/// `<w:br>`: a text-wrapping, column, or page break.
#[derive(Debug, Clone, Copy)]
pub struct Break<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for Break<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> Break<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        Break { el }
    }

    /// Break kind. The schema default for an absent `w:type` is
    /// `textWrapping`.
    pub fn break_type(&self) -> Result<BreakType, WmlError> {
        match self.el.attr(tags::W_TYPE) {
            None => Ok(BreakType::TextWrapping),
            Some(raw) => Ok(BreakType::from_token(raw)?),
        }
    }

    /// Restart location for text-wrapping breaks. The schema default for
    /// an absent `w:clear` is `none`.
    pub fn clear(&self) -> Result<BreakClear, WmlError> {
        match self.el.attr(tags::W_CLEAR) {
            None => Ok(BreakClear::None),
            Some(raw) => Ok(BreakClear::from_token(raw)?),
        }
    }
}

/// `<w:rPr>`: run properties.
///
/// All of these cascade from the style hierarchy when absent, so every
/// accessor returns `Ok(None)` for "not directly formatted"; resolving
/// the cascade is a caller concern.
#[derive(Debug, Clone, Copy)]
pub struct RunProperties<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for RunProperties<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> RunProperties<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        RunProperties { el }
    }

    /// `w:b` toggle.
    pub fn bold(&self) -> Result<Option<bool>, WmlError> {
        on_off_child(self.el, tags::W_B)
    }

    /// `w:i` toggle.
    pub fn italic(&self) -> Result<Option<bool>, WmlError> {
        on_off_child(self.el, tags::W_I)
    }

    /// `w:caps` toggle.
    pub fn all_caps(&self) -> Result<Option<bool>, WmlError> {
        on_off_child(self.el, tags::W_CAPS)
    }

    /// `w:smallCaps` toggle.
    pub fn small_caps(&self) -> Result<Option<bool>, WmlError> {
        on_off_child(self.el, tags::W_SMALL_CAPS)
    }

    /// `w:strike` toggle.
    pub fn strike(&self) -> Result<Option<bool>, WmlError> {
        on_off_child(self.el, tags::W_STRIKE)
    }

    /// `w:dstrike` toggle.
    pub fn double_strike(&self) -> Result<Option<bool>, WmlError> {
        on_off_child(self.el, tags::W_DSTRIKE)
    }

    /// `w:vanish` (hidden text) toggle.
    pub fn hidden(&self) -> Result<Option<bool>, WmlError> {
        on_off_child(self.el, tags::W_VANISH)
    }

    /// `w:sz`: font size in half-points.
    pub fn size(&self) -> Result<Option<HalfPoints>, WmlError> {
        match child_val(self.el, tags::W_SZ)? {
            None => Ok(None),
            Some(raw) => Ok(Some(parse_half_points(raw)?)),
        }
    }

    /// `w:szCs`: complex-script font size in half-points.
    pub fn size_cs(&self) -> Result<Option<HalfPoints>, WmlError> {
        match child_val(self.el, tags::W_SZ_CS)? {
            None => Ok(None),
            Some(raw) => Ok(Some(parse_half_points(raw)?)),
        }
    }

    /// `w:color`: text color.
    pub fn color(&self) -> Result<Option<Color>, WmlError> {
        match child_val(self.el, tags::W_COLOR)? {
            None => Ok(None),
            Some(raw) => Ok(Some(Color::parse(raw)?)),
        }
    }

    /// `w:color/@w:themeColor`: theme palette slot, if referenced.
    pub fn theme_color(&self) -> Result<Option<ThemeColor>, WmlError> {
        match self
            .el
            .find_first(tags::W_COLOR)
            .and_then(|el| el.attr(tags::W_THEME_COLOR))
        {
            None => Ok(None),
            Some(raw) => Ok(Some(ThemeColor::from_token(raw)?)),
        }
    }

    /// `w:u`: underline pattern. `w:u` without `w:val` carries no
    /// pattern and reads as absent.
    pub fn underline(&self) -> Result<Option<Underline>, WmlError> {
        match self.el.find_first(tags::W_U).and_then(|el| el.attr(tags::W_VAL)) {
            None => Ok(None),
            Some(raw) => Ok(Some(Underline::from_token(raw)?)),
        }
    }

    /// `w:u/@w:color`: underline color.
    pub fn underline_color(&self) -> Result<Option<Color>, WmlError> {
        match self
            .el
            .find_first(tags::W_U)
            .and_then(|el| el.attr(tags::W_COLOR))
        {
            None => Ok(None),
            Some(raw) => Ok(Some(Color::parse(raw)?)),
        }
    }

    /// `w:highlight`: highlighting color.
    pub fn highlight(&self) -> Result<Option<HighlightColor>, WmlError> {
        match child_val(self.el, tags::W_HIGHLIGHT)? {
            None => Ok(None),
            Some(raw) => Ok(Some(HighlightColor::from_token(raw)?)),
        }
    }

    /// `w:vertAlign`: subscript/superscript.
    pub fn vertical_align(&self) -> Result<Option<VerticalAlignRun>, WmlError> {
        match child_val(self.el, tags::W_VERT_ALIGN)? {
            None => Ok(None),
            Some(raw) => Ok(Some(VerticalAlignRun::from_token(raw)?)),
        }
    }

    /// `w:rStyle`: referenced character style id. The reference itself
    /// requires `w:val`.
    pub fn style(&self) -> Result<Option<&'a str>, WmlError> {
        child_val(self.el, tags::W_R_STYLE)
    }

    /// `w:spacing`: expanded/condensed character spacing.
    pub fn character_spacing(&self) -> Result<Option<Twips>, WmlError> {
        match child_val(self.el, tags::W_SPACING)? {
            None => Ok(None),
            Some(raw) => Ok(Some(parse_signed_twips(raw)?)),
        }
    }

    /// `w:rFonts`, if present.
    pub fn fonts(&self) -> Option<RunFonts<'a>> {
        self.el.find_first(tags::W_R_FONTS).map(RunFonts::new)
    }

    /// `w:bdr`: border drawn around the run, if present.
    pub fn border(&self) -> Option<Border<'a>> {
        self.el.find_first(tags::W_BDR).map(Border::new)
    }
}

/// A border edge (`w:bdr` and friends): line style plus width, color,
/// and clearance.
#[derive(Debug, Clone, Copy)]
pub struct Border<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for Border<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> Border<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        Border { el }
    }

    /// `w:val`: line style.
    pub fn style(&self) -> Result<BorderStyle, WmlError> {
        Ok(BorderStyle::from_token(required_val(self.el)?)?)
    }

    /// `w:sz`: line width in eighths of a point.
    pub fn size(&self) -> Result<Option<EighthPoints>, WmlError> {
        match self.el.attr(tags::W_SZ) {
            None => Ok(None),
            Some(raw) => Ok(Some(parse_eighth_points(raw)?)),
        }
    }

    /// `w:color`: line color.
    pub fn color(&self) -> Result<Option<Color>, WmlError> {
        match self.el.attr(tags::W_COLOR) {
            None => Ok(None),
            Some(raw) => Ok(Some(Color::parse(raw)?)),
        }
    }

    /// `w:space`: clearance between border and content, in points.
    pub fn space(&self) -> Result<Option<u64>, WmlError> {
        match self.el.attr(tags::W_SPACE) {
            None => Ok(None),
            Some(raw) => Ok(Some(parse_unsigned_decimal(raw)?)),
        }
    }
}

/// `<w:rFonts>`: per-script font assignments.
#[derive(Debug, Clone, Copy)]
pub struct RunFonts<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for RunFonts<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> RunFonts<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        RunFonts { el }
    }

    /// Font for ASCII-range characters.
    pub fn ascii(&self) -> Option<&'a str> {
        self.el.attr(tags::W_ASCII)
    }

    /// Font for high-ANSI characters.
    pub fn h_ansi(&self) -> Option<&'a str> {
        self.el.attr(tags::W_H_ANSI)
    }

    /// Font for East Asian characters.
    pub fn east_asia(&self) -> Option<&'a str> {
        self.el.attr(tags::W_EAST_ASIA)
    }

    /// Font for complex-script characters.
    pub fn complex_script(&self) -> Option<&'a str> {
        self.el.attr(tags::W_CS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#;

    fn parse(xml: &str) -> XmlElement {
        oxml_tree::parse(xml).expect("fixture parses")
    }

    #[test]
    fn toggle_without_val_means_true() {
        let r = parse(&format!(r#"<w:r {NS}><w:rPr><w:b/></w:rPr></w:r>"#));
        let run = Run::from_element(&r).unwrap();
        let props = run.properties().expect("rPr");
        assert_eq!(props.bold().unwrap(), Some(true));
        assert_eq!(props.italic().unwrap(), None);
    }

    #[test]
    fn toggle_val_false_turns_off() {
        let r = parse(&format!(
            r#"<w:r {NS}><w:rPr><w:b w:val="0"/><w:i w:val="true"/></w:rPr></w:r>"#
        ));
        let props = Run::from_element(&r).unwrap().properties().unwrap();
        assert_eq!(props.bold().unwrap(), Some(false));
        assert_eq!(props.italic().unwrap(), Some(true));
    }

    #[test]
    fn font_size_halves_to_points() {
        let r = parse(&format!(
            r#"<w:r {NS}><w:rPr><w:sz w:val="24"/></w:rPr></w:r>"#
        ));
        let props = Run::from_element(&r).unwrap().properties().unwrap();
        let size = props.size().unwrap().expect("size set");
        assert_eq!(size.points(), 12.0);
    }

    #[test]
    fn size_zero_is_zero_not_absent() {
        let r = parse(&format!(
            r#"<w:r {NS}><w:rPr><w:sz w:val="0"/></w:rPr></w:r>"#
        ));
        let props = Run::from_element(&r).unwrap().properties().unwrap();
        assert_eq!(props.size().unwrap(), Some(HalfPoints(0)));
    }

    #[test]
    fn color_auto_and_hex() {
        let r = parse(&format!(
            r#"<w:r {NS}><w:rPr><w:color w:val="auto" w:themeColor="accent1"/></w:rPr></w:r>"#
        ));
        let props = Run::from_element(&r).unwrap().properties().unwrap();
        assert_eq!(props.color().unwrap(), Some(Color::Auto));
        assert_eq!(props.theme_color().unwrap(), Some(ThemeColor::Accent1));
    }

    #[test]
    fn style_reference_requires_val() {
        let r = parse(&format!(r#"<w:r {NS}><w:rPr><w:rStyle/></w:rPr></w:r>"#));
        let props = Run::from_element(&r).unwrap().properties().unwrap();
        let err = props.style().unwrap_err();
        assert!(matches!(err, WmlError::MissingAttribute { .. }));
    }

    #[test]
    fn content_interleaves_in_document_order() {
        let r = parse(&format!(
            r#"<w:r {NS}><w:t>one</w:t><w:br/><w:t>two</w:t><w:tab/><w:cr/></w:r>"#
        ));
        let run = Run::from_element(&r).unwrap();
        let kinds: Vec<&str> = run
            .content()
            .iter()
            .map(|item| match item {
                RunContent::Text(_) => "t",
                RunContent::Break(_) => "br",
                RunContent::Tab => "tab",
                RunContent::CarriageReturn => "cr",
                RunContent::NoBreakHyphen => "hyphen",
                RunContent::DeletedText(_) => "delText",
                RunContent::Drawing(_) => "drawing",
            })
            .collect();
        assert_eq!(kinds, ["t", "br", "t", "tab", "cr"]);
        assert_eq!(run.text(), "one\ntwo\t\n");
    }

    #[test]
    fn break_defaults_are_schema_literals() {
        let r = parse(&format!(r#"<w:r {NS}><w:br/></w:r>"#));
        let run = Run::from_element(&r).unwrap();
        match &run.content()[0] {
            RunContent::Break(br) => {
                assert_eq!(br.break_type().unwrap(), BreakType::TextWrapping);
                assert_eq!(br.clear().unwrap(), BreakClear::None);
            }
            other => panic!("expected break, got {other:?}"),
        }
    }

    #[test]
    fn page_break_type_decodes() {
        let r = parse(&format!(r#"<w:r {NS}><w:br w:type="page"/></w:r>"#));
        match &Run::from_element(&r).unwrap().content()[0] {
            RunContent::Break(br) => assert_eq!(br.break_type().unwrap(), BreakType::Page),
            other => panic!("expected break, got {other:?}"),
        }
    }

    #[test]
    fn preserved_space_is_kept() {
        let r = parse(&format!(
            r#"<w:r {NS}><w:t xml:space="preserve">  gap  </w:t></w:r>"#
        ));
        let run = Run::from_element(&r).unwrap();
        match &run.content()[0] {
            RunContent::Text(t) => {
                assert!(t.preserves_space());
                assert_eq!(t.content(), "  gap  ");
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn run_border_decodes() {
        let r = parse(&format!(
            r#"<w:r {NS}><w:rPr>
                <w:bdr w:val="single" w:sz="4" w:space="0" w:color="auto"/>
            </w:rPr></w:r>"#
        ));
        let props = Run::from_element(&r).unwrap().properties().unwrap();
        let border = props.border().expect("bdr");
        assert_eq!(border.style().unwrap(), BorderStyle::Single);
        let size = border.size().unwrap().expect("sz set");
        assert_eq!(size.points(), 0.5);
        assert_eq!(border.color().unwrap(), Some(Color::Auto));
        assert_eq!(border.space().unwrap(), Some(0));
    }

    #[test]
    fn wrong_element_kind_is_rejected() {
        let p = parse(&format!(r#"<w:p {NS}/>"#));
        assert!(matches!(
            Run::from_element(&p),
            Err(WmlError::UnexpectedElement { .. })
        ));
    }
}
