//! Owned element tree nodes and the indexed child/attribute access API.

/// A node in the parsed tree: a child element or a run of character data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// Nested element.
    Element(XmlElement),
    /// Character data (text or CDATA), entity references already resolved.
    Text(String),
}

/// An element with Clark-notation tag, attributes, and ordered children.
///
/// Attribute keys use Clark notation for prefixed attributes and the bare
/// local name for unprefixed ones (unprefixed attributes carry no
/// namespace). Children keep document order; nothing re-sorts them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    pub(crate) fn new(tag: String) -> Self {
        XmlElement {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub(crate) fn push_attr(&mut self, key: String, value: String) {
        self.attrs.push((key, value));
    }

    pub(crate) fn push_child(&mut self, node: XmlNode) {
        self.children.push(node);
    }

    /// Clark-notation tag, e.g. `{…/wordprocessingml/2006/main}p`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Local part of the tag without the namespace.
    pub fn local_name(&self) -> &str {
        oxml_ns::split_clark(&self.tag).1
    }

    /// Look up an attribute value by its Clark-notation (or bare) key.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All attributes in document order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All child nodes (elements and text) in document order.
    pub fn nodes(&self) -> &[XmlNode] {
        &self.children
    }

    /// Child elements in document order, text nodes skipped.
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(el) => Some(el),
            XmlNode::Text(_) => None,
        })
    }

    /// First child element with the given tag, or `None`.
    pub fn find_first(&self, tag: &str) -> Option<&XmlElement> {
        self.child_elements().find(|el| el.tag() == tag)
    }

    /// All child elements whose tag is in `tags`, in document order.
    ///
    /// A single scan with set-membership matching: children of different
    /// tags interleave exactly as they appear in the document.
    pub fn find_all<'a>(&'a self, tags: &[&str]) -> Vec<&'a XmlElement> {
        self.child_elements()
            .filter(|el| tags.contains(&el.tag()))
            .collect()
    }

    /// Concatenated character data of the direct text children.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            if let XmlNode::Text(text) = node {
                out.push_str(text);
            }
        }
        out
    }
}
