//! Parsed XML node tree
//!
//! This is the tree the deserializer walks; parser adaptors build it through
//! [`parser::ElementState`](crate::parser::ElementState).

/// Prefix bound to the XML namespace implicitly; never reported as declaration
pub const XML_PREFIX: &str = "xml";

/// A parsed document: exactly one root element
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
	/// Root element
	pub root: Element,
}

/// Namespace declaration (`xmlns="..."` or `xmlns:prefix="..."`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Namespace {
	/// Declared prefix; `None` for the default namespace
	pub prefix: Option<String>,
	/// Namespace URI
	pub uri: String,
}

impl Namespace {
	/// Name under which the declaration is lifted into data: the prefix, or `xmlns` for the
	/// default namespace
	pub fn name(&self) -> &str {
		self.prefix.as_deref().unwrap_or("xmlns")
	}

	/// Split an attribute into a namespace declaration if it is one
	pub fn from_attribute(key: &str, value: &str) -> Option<Self> {
		if key == "xmlns" {
			return Some(Self { prefix: None, uri: value.into() });
		}
		key.strip_prefix("xmlns:").map(|prefix| Self {
			prefix: Some(prefix.into()),
			uri: value.into(),
		})
	}
}

/// An element with its attributes, namespace declarations and content
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Element {
	/// Tag name (qualified, as written)
	pub name: String,
	/// Attributes in document order; namespace declarations are not included
	pub attributes: Vec<(String, String)>,
	/// Namespace declarations made on this element
	pub namespaces: Vec<Namespace>,
	/// Content in document order
	pub children: Vec<Node>,
}

/// Content of an element
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
	/// Nested element
	Element(Element),
	/// Text (unescaped)
	Text(String),
	/// CDATA section content
	CData(String),
}

impl Element {
	/// Create an empty element
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Self::default()
		}
	}

	/// Child elements in document order (text and CDATA skipped)
	pub fn elements(&self) -> impl Iterator<Item = &Self> {
		self.children.iter().filter_map(|node| match node {
			Node::Element(e) => Some(e),
			_ => None,
		})
	}

	/// Whether there is at least one child element
	pub fn has_elements(&self) -> bool {
		self.elements().next().is_some()
	}

	/// Concatenated text nodes, if any
	pub fn text(&self) -> Option<String> {
		collect_text(&self.children, |node| match node {
			Node::Text(t) => Some(t),
			_ => None,
		})
	}

	/// Concatenated CDATA sections, if any
	pub fn cdata(&self) -> Option<String> {
		collect_text(&self.children, |node| match node {
			Node::CData(t) => Some(t),
			_ => None,
		})
	}
}

fn collect_text<'a, F>(nodes: &'a [Node], select: F) -> Option<String>
where
	F: Fn(&'a Node) -> Option<&'a String>,
{
	let mut parts = nodes.iter().filter_map(select).peekable();
	parts.peek()?;
	Some(parts.map(String::as_str).collect())
}

impl Document {
	/// Namespace axis over the whole document
	///
	/// Every namespace declared anywhere in the document, in document order; the first
	/// declaration of a prefix wins. The `xml` prefix is never reported.
	pub fn namespaces(&self) -> Vec<Namespace> {
		let mut found: Vec<Namespace> = Vec::new();
		let mut stack = vec![&self.root];
		while let Some(element) = stack.pop() {
			for ns in &element.namespaces {
				if ns.prefix.as_deref() == Some(XML_PREFIX) {
					continue;
				}
				if found.iter().all(|known| known.prefix != ns.prefix) {
					found.push(ns.clone());
				}
			}
			// reversed so children pop in document order
			stack.extend(element.elements().collect::<Vec<_>>().into_iter().rev());
		}
		found
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn ns(prefix: Option<&str>, uri: &str) -> Namespace {
		Namespace {
			prefix: prefix.map(Into::into),
			uri: uri.into(),
		}
	}

	#[test]
	fn split_declarations() {
		assert_eq!(Namespace::from_attribute("xmlns", "urn:d"), Some(ns(None, "urn:d")));
		assert_eq!(Namespace::from_attribute("xmlns:a", "urn:a"), Some(ns(Some("a"), "urn:a")));
		assert_eq!(Namespace::from_attribute("xmlnsx", "urn:a"), None);
		assert_eq!(ns(None, "urn:d").name(), "xmlns");
	}

	#[test]
	fn text_and_cdata_are_collected_separately() {
		let mut e = Element::new("x");
		e.children.push(Node::Text("a".into()));
		e.children.push(Node::CData("<b>".into()));
		e.children.push(Node::Text("c".into()));
		assert_eq!(e.text().as_deref(), Some("ac"));
		assert_eq!(e.cdata().as_deref(), Some("<b>"));
		assert_eq!(Element::new("y").text(), None);
	}

	#[test]
	fn namespace_axis() {
		let mut inner = Element::new("c");
		inner.namespaces.push(ns(Some("b"), "urn:b"));
		inner.namespaces.push(ns(Some("a"), "urn:other"));
		let mut root = Element::new("r");
		root.namespaces.push(ns(Some("a"), "urn:a"));
		root.namespaces.push(ns(Some("xml"), "http://www.w3.org/XML/1998/namespace"));
		root.children.push(Node::Element(inner));
		let doc = Document { root };
		assert_eq!(doc.namespaces(), vec![ns(Some("a"), "urn:a"), ns(Some("b"), "urn:b")]);
	}
}
