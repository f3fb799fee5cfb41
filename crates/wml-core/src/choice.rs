//! Choice-group dispatch over fixed candidate tag lists.
//!
//! Group membership is a property of the call site, not of the tag: the
//! same qualified name may legally appear as a candidate in several
//! unrelated parent content models, so the candidate list is always passed
//! in by the caller. Scanning is in document order; nothing is re-sorted.

use oxml_tree::XmlElement;
use tracing::debug;

use crate::WmlError;

/// Resolve a zero-or-one choice: the first child whose tag is in `tags`,
/// in document order, or `None`.
pub fn choice_one_child<'a>(parent: &'a XmlElement, tags: &[&str]) -> Option<&'a XmlElement> {
    parent
        .child_elements()
        .find(|el| tags.contains(&el.tag()))
}

/// Resolve a repeatable choice: every child whose tag is in `tags`, in
/// document order. Children of different tags interleave exactly as they
/// appear in the document.
pub fn choice_and_more<'a>(parent: &'a XmlElement, tags: &[&str]) -> Vec<&'a XmlElement> {
    parent.find_all(tags)
}

/// Resolve an exactly-one choice. Absence is a conformance violation, and
/// so is a second structural match: call sites declared as cardinality
/// exactly-1 reject ambiguity instead of masking malformed input by
/// silently taking the first candidate.
pub fn choice_require_one_child<'a>(
    parent: &'a XmlElement,
    tags: &[&str],
    expected: &'static str,
) -> Result<&'a XmlElement, WmlError> {
    let mut matches = parent.child_elements().filter(|el| tags.contains(&el.tag()));
    let first = matches.next().ok_or_else(|| WmlError::MissingChild {
        tag: parent.tag().to_string(),
        expected,
    })?;
    if matches.next().is_some() {
        debug!(parent = %parent.tag(), expected, "duplicate exactly-one choice match");
        return Err(WmlError::AmbiguousChoice {
            tag: parent.tag().to_string(),
            expected,
        });
    }
    Ok(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags;

    fn parse(xml: &str) -> XmlElement {
        oxml_tree::parse(xml).expect("fixture parses")
    }

    #[test]
    fn repeatable_choice_preserves_document_order() {
        let run = parse(
            r#"<w:r xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
                <w:t>a</w:t><w:br/><w:t>b</w:t>
            </w:r>"#,
        );
        let found = choice_and_more(&run, &[tags::W_T, tags::W_BR]);
        let locals: Vec<&str> = found.iter().map(|el| el.local_name()).collect();
        assert_eq!(locals, ["t", "br", "t"]);
    }

    #[test]
    fn single_choice_takes_first_match() {
        let run = parse(
            r#"<w:r xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
                <w:rPr/><w:br/><w:t>x</w:t>
            </w:r>"#,
        );
        let hit = choice_one_child(&run, &[tags::W_T, tags::W_BR]).expect("match");
        assert_eq!(hit.local_name(), "br");
        assert!(choice_one_child(&run, &[tags::W_DRAWING]).is_none());
    }

    #[test]
    fn required_choice_rejects_absence_and_ambiguity() {
        let empty = parse(
            r#"<w:drawing xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"/>"#,
        );
        let err = choice_require_one_child(&empty, &[tags::WP_INLINE, tags::WP_ANCHOR], "inline or anchor")
            .unwrap_err();
        assert!(matches!(err, WmlError::MissingChild { .. }));

        let doubled = parse(
            r#"<w:drawing
                xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"
                xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing">
                <wp:inline/><wp:anchor/>
            </w:drawing>"#,
        );
        let err =
            choice_require_one_child(&doubled, &[tags::WP_INLINE, tags::WP_ANCHOR], "inline or anchor")
                .unwrap_err();
        assert!(matches!(err, WmlError::AmbiguousChoice { .. }));
    }

    #[test]
    fn shared_tags_belong_to_the_call_site() {
        // The same child satisfies two different groups.
        let p = parse(
            r#"<w:p xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
                <w:r/><w:bookmarkStart w:id="0" w:name="here"/>
            </w:p>"#,
        );
        assert_eq!(choice_and_more(&p, &[tags::W_R]).len(), 1);
        assert_eq!(
            choice_and_more(&p, &[tags::W_R, tags::W_BOOKMARK_START]).len(),
            2
        );
    }
}
