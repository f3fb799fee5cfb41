//! Shared accessor plumbing: required/optional lookups and common
//! attribute shapes.

use oxml_tree::XmlElement;
use wml_types::parse_on_off;

use crate::tags;
use crate::WmlError;

/// Look up a schema-required attribute.
pub(crate) fn required_attr<'a>(
    el: &'a XmlElement,
    attr: &'static str,
) -> Result<&'a str, WmlError> {
    el.attr(attr).ok_or_else(|| WmlError::MissingAttribute {
        tag: el.tag().to_string(),
        attr,
    })
}

/// Required `w:val` attribute, the most common shape.
pub(crate) fn required_val(el: &XmlElement) -> Result<&str, WmlError> {
    required_attr(el, tags::W_VAL)
}

/// Decode a toggle child (`w:b`, `w:keepNext`, …): absent element means
/// "inherit" (`None`), a present element without `w:val` means `true`
/// (the schema default for toggles), and a present `w:val` is decoded as
/// `ST_OnOff`.
pub(crate) fn on_off_child(
    parent: &XmlElement,
    tag: &'static str,
) -> Result<Option<bool>, WmlError> {
    match parent.find_first(tag) {
        None => Ok(None),
        Some(el) => match el.attr(tags::W_VAL) {
            None => Ok(Some(true)),
            Some(raw) => Ok(Some(parse_on_off(raw)?)),
        },
    }
}

/// The `w:val` of an optional child element, if both are present.
/// The child being present without `w:val` is a conformance violation for
/// the call sites using this helper.
pub(crate) fn child_val<'a>(
    parent: &'a XmlElement,
    tag: &'static str,
) -> Result<Option<&'a str>, WmlError> {
    match parent.find_first(tag) {
        None => Ok(None),
        Some(el) => required_val(el).map(Some),
    }
}
