#![cfg_attr(docsrs, feature(doc_cfg))]
//! OOXML namespace prefix registry and qualified-name resolution.

use thiserror::Error;

/// Error type produced by namespace resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NsError {
    /// The prefixed name references a prefix absent from the registry.
    #[error("unknown namespace prefix: {0}")]
    UnknownPrefix(String),
}

/// Well-known namespace URIs grouped by prefix.
pub mod uri {
    /// WordprocessingML main namespace (`w`).
    pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    /// Office document relationships (`r`).
    pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    /// WordprocessingDrawing (`wp`).
    pub const WP: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
    /// DrawingML main (`a`).
    pub const A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
    /// DrawingML picture (`pic`).
    pub const PIC: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";
    /// Office math (`m`).
    pub const M: &str = "http://schemas.openxmlformats.org/officeDocument/2006/math";
    /// Built-in XML namespace (`xml`).
    pub const XML: &str = "http://www.w3.org/XML/1998/namespace";
    /// Package core properties (`cp`).
    pub const CP: &str = "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
    /// Dublin Core elements (`dc`).
    pub const DC: &str = "http://purl.org/dc/elements/1.1/";
    /// Dublin Core terms (`dcterms`).
    pub const DCTERMS: &str = "http://purl.org/dc/terms/";
    /// Markup compatibility (`mc`).
    pub const MC: &str = "http://schemas.openxmlformats.org/markup-compatibility/2006";
    /// Word 2010 extensions (`w14`).
    pub const W14: &str = "http://schemas.microsoft.com/office/word/2010/wordml";
    /// Word 2012 extensions (`w15`).
    pub const W15: &str = "http://schemas.microsoft.com/office/word/2012/wordml";
    /// Word 2006 extensions (`wne`).
    pub const WNE: &str = "http://schemas.microsoft.com/office/word/2006/wordml";
    /// WordprocessingDrawing 2010 (`wp14`).
    pub const WP14: &str = "http://schemas.microsoft.com/office/word/2010/wordprocessingDrawing";
    /// WordprocessingShape (`wps`).
    pub const WPS: &str = "http://schemas.microsoft.com/office/word/2010/wordprocessingShape";
    /// Legacy VML (`v`).
    pub const V: &str = "urn:schemas-microsoft-com:vml";
    /// Schema library (`sl`).
    pub const SL: &str = "http://schemas.openxmlformats.org/schemaLibrary/2006/main";
}

/// Registered prefix→URI pairs, process-wide constant data.
///
/// The table is the single source of truth for resolution; prefixes not
/// listed here are rejected rather than passed through so a typo surfaces
/// as an error instead of a silent "attribute absent".
const PREFIXES: &[(&str, &str)] = &[
    ("w", uri::W),
    ("r", uri::R),
    ("wp", uri::WP),
    ("a", uri::A),
    ("pic", uri::PIC),
    ("m", uri::M),
    ("xml", uri::XML),
    ("cp", uri::CP),
    ("dc", uri::DC),
    ("dcterms", uri::DCTERMS),
    ("mc", uri::MC),
    ("w14", uri::W14),
    ("w15", uri::W15),
    ("wne", uri::WNE),
    ("wp14", uri::WP14),
    ("wps", uri::WPS),
    ("v", uri::V),
    ("sl", uri::SL),
];

/// Look up the namespace URI registered for `prefix`.
pub fn uri_for(prefix: &str) -> Option<&'static str> {
    PREFIXES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, uri)| *uri)
}

/// Look up the canonical prefix registered for `uri`.
pub fn prefix_for(uri: &str) -> Option<&'static str> {
    PREFIXES.iter().find(|(_, u)| *u == uri).map(|(p, _)| *p)
}

/// Resolve a `prefix:local` name to Clark notation (`{uri}local`).
///
/// A name without a colon is returned unchanged. An unregistered prefix is
/// an error, never a fall-through.
pub fn qn(name: &str) -> Result<String, NsError> {
    match name.split_once(':') {
        None => Ok(name.to_string()),
        Some((prefix, local)) => {
            let uri =
                uri_for(prefix).ok_or_else(|| NsError::UnknownPrefix(prefix.to_string()))?;
            Ok(format!("{{{uri}}}{local}"))
        }
    }
}

/// Render a URI/local pair in Clark notation.
pub fn clark(uri: &str, local: &str) -> String {
    format!("{{{uri}}}{local}")
}

/// Split a Clark-notation tag into its URI and local parts.
///
/// A tag without a namespace returns `(None, tag)`.
pub fn split_clark(tag: &str) -> (Option<&str>, &str) {
    match tag.strip_prefix('{') {
        Some(rest) => match rest.split_once('}') {
            Some((uri, local)) => (Some(uri), local),
            None => (None, tag),
        },
        None => (None, tag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_registered_prefixes() {
        for (prefix, uri) in PREFIXES {
            let resolved = qn(&format!("{prefix}:val")).expect("registered prefix");
            assert_eq!(resolved, format!("{{{uri}}}val"));
        }
    }

    #[test]
    fn wordprocessingml_value_attribute() {
        assert_eq!(
            qn("w:val").unwrap(),
            "{http://schemas.openxmlformats.org/wordprocessingml/2006/main}val"
        );
    }

    #[test]
    fn unknown_prefix_is_an_error() {
        let err = qn("bogus:val").unwrap_err();
        assert_eq!(err, NsError::UnknownPrefix("bogus".to_string()));
    }

    #[test]
    fn bare_name_passes_through() {
        assert_eq!(qn("val").unwrap(), "val");
    }

    #[test]
    fn prefix_uri_lookup_roundtrip() {
        for (prefix, uri) in PREFIXES {
            assert_eq!(uri_for(prefix), Some(*uri));
            assert_eq!(prefix_for(uri), Some(*prefix));
        }
        assert_eq!(uri_for("nope"), None);
    }

    #[test]
    fn clark_split_roundtrip() {
        let tag = clark(uri::W, "p");
        let (ns, local) = split_clark(&tag);
        assert_eq!(ns, Some(uri::W));
        assert_eq!(local, "p");
        assert_eq!(split_clark("plain"), (None, "plain"));
    }
}
