use crate::{
	dom::{
		Element,
		Namespace,
		Node,
	},
	errors::DeserializeError,
	parser::{
		ElementParser,
		ElementParserExt,
		ElementState,
	},
};
use std::borrow::Cow;

/// Builds a [`dom::Element`](crate::dom::Element) from parser callbacks
///
/// `xmlns` and `xmlns:*` attributes are split off as namespace declarations.
#[derive(Debug)]
pub struct TreeBuilder {
	element: Element,
}

impl ElementState for TreeBuilder {
	type Output = Element;

	fn parse_element_start(tag: &str) -> Self {
		Self { element: Element::new(tag) }
	}

	fn parse_element_attribute(&mut self, key: &str, value: Cow<'_, str>) -> Result<(), DeserializeError> {
		match Namespace::from_attribute(key, &value) {
			Some(ns) => self.element.namespaces.push(ns),
			None => self.element.attributes.push((key.into(), value.into_owned())),
		}
		Ok(())
	}

	fn parse_element_inner_text(&mut self, text: Cow<'_, str>) -> Result<(), DeserializeError> {
		// merge adjacent text (split by comments)
		if let Some(Node::Text(last)) = self.element.children.last_mut() {
			last.push_str(&text);
		} else {
			self.element.children.push(Node::Text(text.into_owned()));
		}
		Ok(())
	}

	fn parse_element_inner_cdata(&mut self, text: Cow<'_, str>) -> Result<(), DeserializeError> {
		self.element.children.push(Node::CData(text.into_owned()));
		Ok(())
	}

	fn parse_element_inner_node<P: ElementParser>(&mut self, tag: &str, parser: P) -> Result<(), DeserializeError> {
		let child = parser.parse_element::<Self>(tag)?;
		self.element.children.push(Node::Element(child));
		Ok(())
	}

	fn parse_element_finish(self) -> Result<Element, DeserializeError> {
		log::trace!(
			"parsed <{}> with {} attributes and {} child nodes",
			self.element.name,
			self.element.attributes.len(),
			self.element.children.len(),
		);
		Ok(self.element)
	}
}
