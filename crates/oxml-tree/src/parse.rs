//! quick-xml event loop building an owned element tree.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use crate::node::{XmlElement, XmlNode};
use crate::TreeError;

/// One element's worth of `xmlns` declarations. The empty prefix is the
/// default namespace; `None` re-unbinds it (`xmlns=""`).
type Scope = Vec<(String, Option<String>)>;

/// Stack of in-scope namespace declarations, innermost last.
///
/// Seeded empty: document declarations take priority, the static registry
/// in `oxml-ns` backs prefixes the producer relied on being well known.
#[derive(Debug, Default)]
struct ScopeStack {
    scopes: Vec<Scope>,
}

impl ScopeStack {
    fn push(&mut self, scope: Scope) {
        self.scopes.push(scope);
    }

    fn pop(&mut self) {
        self.scopes.pop();
    }

    fn resolve_prefix(&self, prefix: &str) -> Result<String, TreeError> {
        for scope in self.scopes.iter().rev() {
            for (p, uri) in scope.iter().rev() {
                if p == prefix {
                    return uri
                        .clone()
                        .ok_or_else(|| TreeError::UnknownPrefix(prefix.to_string()));
                }
            }
        }
        oxml_ns::uri_for(prefix)
            .map(str::to_string)
            .ok_or_else(|| TreeError::UnknownPrefix(prefix.to_string()))
    }

    fn default_ns(&self) -> Option<&str> {
        for scope in self.scopes.iter().rev() {
            for (p, uri) in scope.iter().rev() {
                if p.is_empty() {
                    return uri.as_deref();
                }
            }
        }
        None
    }
}

/// Parse an XML document into its root element.
///
/// Element and prefixed-attribute names are resolved to Clark notation at
/// parse time; an undeclared, unregistered prefix is an error. The returned
/// tree is immutable; see the crate docs for the concurrency precondition.
pub fn parse(xml: &str) -> Result<XmlElement, TreeError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut scopes = ScopeStack::default();
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(TreeError::Invalid("multiple root elements".into()));
                }
                let element = open_element(&e, &mut scopes)?;
                stack.push(element);
            }
            Ok(Event::Empty(e)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(TreeError::Invalid("multiple root elements".into()));
                }
                let element = open_element(&e, &mut scopes)?;
                scopes.pop();
                attach(&mut stack, &mut root, element);
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| TreeError::Invalid("unbalanced end tag".into()))?;
                scopes.pop();
                attach(&mut stack, &mut root, element);
            }
            Ok(Event::Text(e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| TreeError::Xml(err.to_string()))?;
                if let Some(parent) = stack.last_mut() {
                    parent.push_child(XmlNode::Text(text.into_owned()));
                }
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                if let Some(parent) = stack.last_mut() {
                    parent.push_child(XmlNode::Text(text));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(TreeError::Xml(err.to_string())),
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(TreeError::Invalid("unclosed element".into()));
    }
    let root = root.ok_or_else(|| TreeError::Invalid("no root element".into()))?;
    debug!(root = %root.tag(), "parsed element tree");
    Ok(root)
}

fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) {
    match stack.last_mut() {
        Some(parent) => parent.push_child(XmlNode::Element(element)),
        None => *root = Some(element),
    }
}

/// Decode one start/empty tag: collect its `xmlns` declarations, push them
/// as a scope, then resolve the element and attribute names against the
/// now-current scopes.
fn open_element(e: &BytesStart<'_>, scopes: &mut ScopeStack) -> Result<XmlElement, TreeError> {
    let mut scope: Scope = Vec::new();
    let mut plain_attrs: Vec<(String, String)> = Vec::new();

    for attr in e.attributes() {
        let attr = attr.map_err(|err| TreeError::Xml(err.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| TreeError::Xml(err.to_string()))?
            .into_owned();
        if key == "xmlns" {
            let uri = if value.is_empty() { None } else { Some(value) };
            scope.push((String::new(), uri));
        } else if let Some(prefix) = key.strip_prefix("xmlns:") {
            scope.push((prefix.to_string(), Some(value)));
        } else {
            plain_attrs.push((key, value));
        }
    }
    scopes.push(scope);

    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let tag = match name.split_once(':') {
        Some((prefix, local)) => {
            let uri = scopes.resolve_prefix(prefix)?;
            oxml_ns::clark(&uri, local)
        }
        None => match scopes.default_ns() {
            Some(uri) => oxml_ns::clark(uri, &name),
            None => name,
        },
    };

    let mut element = XmlElement::new(tag);
    for (key, value) in plain_attrs {
        // Unprefixed attributes carry no namespace, so the bare name is
        // already the lookup key.
        let key = match key.split_once(':') {
            Some((prefix, local)) => {
                let uri = scopes.resolve_prefix(prefix)?;
                oxml_ns::clark(&uri, local)
            }
            None => key,
        };
        element.push_attr(key, value);
    }
    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxml_ns::qn;

    #[test]
    fn parses_nested_elements_in_document_order() {
        let xml = r#"
            <w:p xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
                <w:r><w:t>one</w:t></w:r>
                <w:br/>
                <w:r><w:t>two</w:t></w:r>
            </w:p>
        "#;
        let p = parse(xml).expect("parse paragraph");
        assert_eq!(p.tag(), qn("w:p").unwrap());
        let tags: Vec<&str> = p.child_elements().map(|el| el.local_name()).collect();
        assert_eq!(tags, ["r", "br", "r"]);
    }

    #[test]
    fn attributes_resolve_to_clark_keys() {
        let xml = r#"
            <w:document
                xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"
                xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
                <w:hyperlink r:id="rId4" history="1"/>
            </w:document>
        "#;
        let doc = parse(xml).expect("parse document");
        let link = doc.find_first(&qn("w:hyperlink").unwrap()).expect("hyperlink");
        assert_eq!(link.attr(&qn("r:id").unwrap()), Some("rId4"));
        assert_eq!(link.attr("history"), Some("1"));
        assert_eq!(link.attr(&qn("w:id").unwrap()), None);
    }

    #[test]
    fn find_all_preserves_interleaved_order() {
        let xml = r#"
            <w:r xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
                <w:t>a</w:t>
                <w:br/>
                <w:t>b</w:t>
            </w:r>
        "#;
        let r = parse(xml).expect("parse run");
        let t = qn("w:t").unwrap();
        let br = qn("w:br").unwrap();
        let found = r.find_all(&[t.as_str(), br.as_str()]);
        let locals: Vec<&str> = found.iter().map(|el| el.local_name()).collect();
        assert_eq!(locals, ["t", "br", "t"]);
    }

    #[test]
    fn inner_declaration_shadows_outer() {
        let xml = r#"
            <outer xmlns:x="urn:one">
                <x:a/>
                <inner xmlns:x="urn:two"><x:a/></inner>
            </outer>
        "#;
        let outer = parse(xml).expect("parse");
        let first = outer.find_first("{urn:one}a");
        assert!(first.is_some());
        let inner = outer.find_first("inner").expect("inner");
        assert!(inner.find_first("{urn:two}a").is_some());
        assert!(inner.find_first("{urn:one}a").is_none());
    }

    #[test]
    fn registry_backs_undeclared_well_known_prefixes() {
        // No xmlns:w declaration; the static table resolves it.
        let xml = "<w:p><w:r><w:t>x</w:t></w:r></w:p>";
        let p = parse(xml).expect("parse");
        assert_eq!(p.tag(), qn("w:p").unwrap());
    }

    #[test]
    fn undeclared_unknown_prefix_fails() {
        let err = parse("<zz:p/>").unwrap_err();
        assert!(matches!(err, TreeError::UnknownPrefix(prefix) if prefix == "zz"));
    }

    #[test]
    fn text_content_is_preserved_verbatim() {
        let xml = r#"<w:t xml:space="preserve">  spaced  </w:t>"#;
        let t = parse(xml).expect("parse text");
        assert_eq!(t.text(), "  spaced  ");
        assert_eq!(t.attr(&qn("xml:space").unwrap()), Some("preserve"));
    }

    #[test]
    fn empty_input_has_no_root() {
        assert!(matches!(parse("  "), Err(TreeError::Invalid(_))));
    }
}
