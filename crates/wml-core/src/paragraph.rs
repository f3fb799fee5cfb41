//! Paragraph-level views: `w:p`, its properties, and its content model.

use chrono::NaiveDateTime;
use oxml_tree::XmlElement;
use wml_types::{
    parse_datetime, parse_decimal, parse_signed_twips, parse_twips, Justification,
    LineSpacingRule, NumberFormat, TabAlignment, TabLeader, Twips,
};

use crate::choice::choice_and_more;
use crate::run::{Run, RunContentHost};
use crate::section::SectionProperties;
use crate::support::{child_val, on_off_child, required_attr, required_val};
use crate::tags;
use crate::{ElementView, WmlError};

/// `<w:p>`: a paragraph.
#[derive(Debug, Clone, Copy)]
pub struct Paragraph<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for Paragraph<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> RunContentHost<'a> for Paragraph<'a> {}

impl<'a> Paragraph<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        Paragraph { el }
    }

    /// View an element as a paragraph, checking its tag.
    pub fn from_element(el: &'a XmlElement) -> Result<Self, WmlError> {
        if el.tag() != tags::W_P {
            return Err(WmlError::UnexpectedElement {
                expected: "w:p",
                found: el.tag().to_string(),
            });
        }
        Ok(Paragraph { el })
    }

    /// The `w:pPr` child, if present.
    pub fn properties(&self) -> Option<ParagraphProperties<'a>> {
        self.el
            .find_first(tags::W_PPR)
            .map(ParagraphProperties::new)
    }

    /// Paragraph content in document order: the repeatable choice over
    /// runs, hyperlinks, tracked-change ranges, and range markup.
    pub fn content(&self) -> Vec<ParagraphContent<'a>> {
        choice_and_more(
            self.el,
            &[
                tags::W_R,
                tags::W_HYPERLINK,
                tags::W_INS,
                tags::W_DEL,
                tags::W_BOOKMARK_START,
                tags::W_BOOKMARK_END,
            ],
        )
        .into_iter()
        .map(|el| match el.tag() {
            tags::W_R => ParagraphContent::Run(Run::new(el)),
            tags::W_HYPERLINK => ParagraphContent::Hyperlink(Hyperlink::new(el)),
            tags::W_INS => ParagraphContent::Inserted(Ins::new(el)),
            tags::W_DEL => ParagraphContent::Deleted(Del::new(el)),
            tags::W_BOOKMARK_START => ParagraphContent::BookmarkStart(BookmarkStart::new(el)),
            _ => ParagraphContent::BookmarkEnd(BookmarkEnd::new(el)),
        })
        .collect()
    }

    /// Visible paragraph text: run text plus hyperlink and inserted-range
    /// text, in document order. Deleted ranges contribute nothing.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for item in self.content() {
            match item {
                ParagraphContent::Run(run) => out.push_str(&run.text()),
                ParagraphContent::Hyperlink(link) => out.push_str(&link.text_content()),
                ParagraphContent::Inserted(ins) => out.push_str(&ins.text_content()),
                ParagraphContent::Deleted(_)
                | ParagraphContent::BookmarkStart(_)
                | ParagraphContent::BookmarkEnd(_) => {}
            }
        }
        out
    }
}

/// One item of a paragraph's content. Different positions may carry
/// different concrete kinds; document order is preserved.
#[derive(Debug, Clone, Copy)]
pub enum ParagraphContent<'a> {
    /// `w:r`.
    Run(Run<'a>),
    /// `w:hyperlink`.
    Hyperlink(Hyperlink<'a>),
    /// `w:ins` tracked insertion range.
    Inserted(Ins<'a>),
    /// `w:del` tracked deletion range.
    Deleted(Del<'a>),
    /// `w:bookmarkStart`.
    BookmarkStart(BookmarkStart<'a>),
    /// `w:bookmarkEnd`.
    BookmarkEnd(BookmarkEnd<'a>),
}

/// `<w:hyperlink>`: a link wrapping run content.
#[derive(Debug, Clone, Copy)]
pub struct Hyperlink<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for Hyperlink<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> RunContentHost<'a> for Hyperlink<'a> {}

impl<'a> Hyperlink<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        Hyperlink { el }
    }

    /// `r:id`: relationship to the link target, for external links.
    pub fn rel_id(&self) -> Option<&'a str> {
        self.el.attr(tags::R_ID)
    }

    /// `w:anchor`: bookmark name, for internal links.
    pub fn anchor(&self) -> Option<&'a str> {
        self.el.attr(tags::W_ANCHOR_ATTR)
    }

    /// `w:history`: whether the target joins the visited-link history.
    pub fn history(&self) -> Result<Option<bool>, WmlError> {
        match self.el.attr(tags::W_HISTORY) {
            None => Ok(None),
            Some(raw) => Ok(Some(wml_types::parse_on_off(raw)?)),
        }
    }
}

/// `<w:ins>`: a tracked insertion range.
#[derive(Debug, Clone, Copy)]
pub struct Ins<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for Ins<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> RunContentHost<'a> for Ins<'a> {}

impl<'a> Ins<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        Ins { el }
    }

    /// `w:id`: revision identifier.
    pub fn revision_id(&self) -> Result<i64, WmlError> {
        Ok(parse_decimal(required_attr(self.el, tags::W_ID)?)?)
    }

    /// `w:author`: who made the change.
    pub fn author(&self) -> Result<&'a str, WmlError> {
        required_attr(self.el, tags::W_AUTHOR)
    }

    /// `w:date`: when the change was made.
    pub fn date(&self) -> Result<Option<NaiveDateTime>, WmlError> {
        match self.el.attr(tags::W_DATE) {
            None => Ok(None),
            Some(raw) => Ok(Some(parse_datetime(raw)?)),
        }
    }
}

/// `<w:del>`: a tracked deletion range.
#[derive(Debug, Clone, Copy)]
pub struct Del<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for Del<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> Del<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        Del { el }
    }

    /// `w:id`: revision identifier.
    pub fn revision_id(&self) -> Result<i64, WmlError> {
        Ok(parse_decimal(required_attr(self.el, tags::W_ID)?)?)
    }

    /// `w:author`: who made the change.
    pub fn author(&self) -> Result<&'a str, WmlError> {
        required_attr(self.el, tags::W_AUTHOR)
    }

    /// `w:date`: when the change was made.
    pub fn date(&self) -> Result<Option<NaiveDateTime>, WmlError> {
        match self.el.attr(tags::W_DATE) {
            None => Ok(None),
            Some(raw) => Ok(Some(parse_datetime(raw)?)),
        }
    }

    /// Runs inside the deleted range (their text lives in `w:delText`).
    pub fn runs(&self) -> Vec<Run<'a>> {
        self.el
            .find_all(&[tags::W_R])
            .into_iter()
            .map(Run::new)
            .collect()
    }
}

/// `<w:bookmarkStart>`: opening edge of a bookmark range.
#[derive(Debug, Clone, Copy)]
pub struct BookmarkStart<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for BookmarkStart<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> BookmarkStart<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        BookmarkStart { el }
    }

    /// `w:id`: range identifier, paired with the matching end marker.
    pub fn id(&self) -> Result<i64, WmlError> {
        Ok(parse_decimal(required_attr(self.el, tags::W_ID)?)?)
    }

    /// `w:name`: bookmark name.
    pub fn name(&self) -> Result<&'a str, WmlError> {
        required_attr(self.el, tags::W_NAME)
    }
}

/// `<w:bookmarkEnd>`: closing edge of a bookmark range.
#[derive(Debug, Clone, Copy)]
pub struct BookmarkEnd<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for BookmarkEnd<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> BookmarkEnd<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        BookmarkEnd { el }
    }

    /// `w:id`: range identifier.
    pub fn id(&self) -> Result<i64, WmlError> {
        Ok(parse_decimal(required_attr(self.el, tags::W_ID)?)?)
    }
}

/// `<w:pPr>`: paragraph properties.
///
/// Like run properties, these cascade from the style hierarchy when
/// absent; `Ok(None)` means "not directly formatted".
#[derive(Debug, Clone, Copy)]
pub struct ParagraphProperties<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for ParagraphProperties<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> ParagraphProperties<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        ParagraphProperties { el }
    }

    /// `w:jc`: paragraph alignment.
    pub fn alignment(&self) -> Result<Option<Justification>, WmlError> {
        match child_val(self.el, tags::W_JC)? {
            None => Ok(None),
            Some(raw) => Ok(Some(Justification::from_token(raw)?)),
        }
    }

    /// `w:pStyle`: referenced paragraph style id.
    pub fn style(&self) -> Result<Option<&'a str>, WmlError> {
        child_val(self.el, tags::W_P_STYLE)
    }

    /// `w:numPr`, if present.
    pub fn numbering(&self) -> Option<NumberingProperties<'a>> {
        self.el
            .find_first(tags::W_NUM_PR)
            .map(NumberingProperties::new)
    }

    /// `w:ind`, if present.
    pub fn indentation(&self) -> Option<Indentation<'a>> {
        self.el.find_first(tags::W_IND).map(Indentation::new)
    }

    /// `w:spacing`, if present.
    pub fn spacing(&self) -> Option<Spacing<'a>> {
        self.el.find_first(tags::W_SPACING).map(Spacing::new)
    }

    /// `w:keepNext` toggle.
    pub fn keep_with_next(&self) -> Result<Option<bool>, WmlError> {
        on_off_child(self.el, tags::W_KEEP_NEXT)
    }

    /// `w:keepLines` toggle.
    pub fn keep_together(&self) -> Result<Option<bool>, WmlError> {
        on_off_child(self.el, tags::W_KEEP_LINES)
    }

    /// `w:pageBreakBefore` toggle.
    pub fn page_break_before(&self) -> Result<Option<bool>, WmlError> {
        on_off_child(self.el, tags::W_PAGE_BREAK_BEFORE)
    }

    /// `w:widowControl` toggle.
    pub fn widow_control(&self) -> Result<Option<bool>, WmlError> {
        on_off_child(self.el, tags::W_WIDOW_CONTROL)
    }

    /// `w:tabs`: custom tab stops, in document order.
    pub fn tabs(&self) -> Vec<TabStop<'a>> {
        self.el
            .find_first(tags::W_TABS)
            .map(|tabs| {
                tabs.find_all(&[tags::W_TAB])
                    .into_iter()
                    .map(TabStop::new)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// `w:sectPr`: section properties ending at this paragraph.
    pub fn section_properties(&self) -> Option<SectionProperties<'a>> {
        self.el
            .find_first(tags::W_SECT_PR)
            .map(SectionProperties::new)
    }
}

/// `<w:numPr>`: numbering reference of a paragraph.
#[derive(Debug, Clone, Copy)]
pub struct NumberingProperties<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for NumberingProperties<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> NumberingProperties<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        NumberingProperties { el }
    }

    /// `w:ilvl`: referenced level within the numbering definition.
    pub fn level(&self) -> Result<Option<i64>, WmlError> {
        match child_val(self.el, tags::W_ILVL)? {
            None => Ok(None),
            Some(raw) => Ok(Some(parse_decimal(raw)?)),
        }
    }

    /// `w:numId`: referenced numbering definition instance.
    pub fn num_id(&self) -> Result<Option<i64>, WmlError> {
        match child_val(self.el, tags::W_NUM_ID)? {
            None => Ok(None),
            Some(raw) => Ok(Some(parse_decimal(raw)?)),
        }
    }
}

/// `<w:numFmt>`: number format of a list level (numbering part).
#[derive(Debug, Clone, Copy)]
pub struct NumberFormatElement<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for NumberFormatElement<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> NumberFormatElement<'a> {
    /// View an element as a number-format declaration, checking its tag.
    pub fn from_element(el: &'a XmlElement) -> Result<Self, WmlError> {
        if el.tag() != tags::W_NUM_FMT {
            return Err(WmlError::UnexpectedElement {
                expected: "w:numFmt",
                found: el.tag().to_string(),
            });
        }
        Ok(NumberFormatElement { el })
    }

    /// `w:val`: the declared format.
    pub fn format(&self) -> Result<NumberFormat, WmlError> {
        Ok(NumberFormat::from_token(required_val(self.el)?)?)
    }
}

/// `<w:ind>`: paragraph indentation. Strict token names (`start`/`end`)
/// are read first, with the transitional names (`left`/`right`) as the
/// fallback spelling of the same property.
#[derive(Debug, Clone, Copy)]
pub struct Indentation<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for Indentation<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> Indentation<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        Indentation { el }
    }

    fn signed(&self, primary: &'static str, fallback: &'static str) -> Result<Option<Twips>, WmlError> {
        match self.el.attr(primary).or_else(|| self.el.attr(fallback)) {
            None => Ok(None),
            Some(raw) => Ok(Some(parse_signed_twips(raw)?)),
        }
    }

    /// Leading-edge indent (`w:start`, transitional `w:left`).
    pub fn start(&self) -> Result<Option<Twips>, WmlError> {
        self.signed(tags::W_START, tags::W_LEFT)
    }

    /// Trailing-edge indent (`w:end`, transitional `w:right`).
    pub fn end(&self) -> Result<Option<Twips>, WmlError> {
        self.signed(tags::W_END, tags::W_RIGHT)
    }

    /// `w:firstLine`: additional first-line indent.
    pub fn first_line(&self) -> Result<Option<Twips>, WmlError> {
        match self.el.attr(tags::W_FIRST_LINE) {
            None => Ok(None),
            Some(raw) => Ok(Some(parse_twips(raw)?)),
        }
    }

    /// `w:hanging`: hanging indent; mutually exclusive with first-line.
    pub fn hanging(&self) -> Result<Option<Twips>, WmlError> {
        match self.el.attr(tags::W_HANGING) {
            None => Ok(None),
            Some(raw) => Ok(Some(parse_twips(raw)?)),
        }
    }
}

/// `<w:spacing>` inside `w:pPr`: inter-paragraph and line spacing.
#[derive(Debug, Clone, Copy)]
pub struct Spacing<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for Spacing<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> Spacing<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        Spacing { el }
    }

    /// `w:before`: space above the paragraph.
    pub fn before(&self) -> Result<Option<Twips>, WmlError> {
        match self.el.attr(tags::W_BEFORE) {
            None => Ok(None),
            Some(raw) => Ok(Some(parse_twips(raw)?)),
        }
    }

    /// `w:after`: space below the paragraph.
    pub fn after(&self) -> Result<Option<Twips>, WmlError> {
        match self.el.attr(tags::W_AFTER) {
            None => Ok(None),
            Some(raw) => Ok(Some(parse_twips(raw)?)),
        }
    }

    /// `w:line`: line spacing, interpreted per [`Spacing::line_rule`].
    pub fn line(&self) -> Result<Option<Twips>, WmlError> {
        match self.el.attr(tags::W_LINE) {
            None => Ok(None),
            Some(raw) => Ok(Some(parse_signed_twips(raw)?)),
        }
    }

    /// `w:lineRule`: how the `w:line` value is applied.
    pub fn line_rule(&self) -> Result<Option<LineSpacingRule>, WmlError> {
        match self.el.attr(tags::W_LINE_RULE) {
            None => Ok(None),
            Some(raw) => Ok(Some(LineSpacingRule::from_token(raw)?)),
        }
    }
}

/// `<w:tab>` inside `w:tabs`: one custom tab stop.
#[derive(Debug, Clone, Copy)]
pub struct TabStop<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for TabStop<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> TabStop<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        TabStop { el }
    }

    /// `w:val`: stop alignment.
    pub fn alignment(&self) -> Result<TabAlignment, WmlError> {
        Ok(TabAlignment::from_token(required_val(self.el)?)?)
    }

    /// `w:pos`: stop position.
    pub fn position(&self) -> Result<Twips, WmlError> {
        Ok(parse_signed_twips(required_attr(self.el, tags::W_POS)?)?)
    }

    /// `w:leader`: leader character, if any.
    pub fn leader(&self) -> Result<Option<TabLeader>, WmlError> {
        match self.el.attr(tags::W_LEADER) {
            None => Ok(None),
            Some(raw) => Ok(Some(TabLeader::from_token(raw)?)),
        }
    }
}
