use crate::errors::DeserializeError;
use std::borrow::Cow;

/// A state to parse exactly one element
///
/// The parser creates the state with `parse_element_start` when it hits a start tag, then calls
/// `parse_element_attribute` for all attributes on the element, then `parse_element_inner_text`,
/// `parse_element_inner_cdata` and `parse_element_inner_node` in document order until the
/// closing tag of the element is hit, upon which it needs to call `parse_element_finish`.
pub trait ElementState: Sized {
	/// Once fully parsed this is the resulting output type.
	type Output: Sized;

	/// Create state to parse an element with the passed `tag`.
	fn parse_element_start(tag: &str) -> Self;

	/// Parse attribute (namespace declarations included) into state
	fn parse_element_attribute(&mut self, key: &str, value: Cow<'_, str>) -> Result<(), DeserializeError>;

	/// Parse (unescaped) text into state.
	///
	/// An element with separate start and end tags and nothing in between reports empty text, so
	/// `<a></a>` can be told apart from `<a/>`.
	fn parse_element_inner_text(&mut self, text: Cow<'_, str>) -> Result<(), DeserializeError>;

	/// Parse CDATA content into state.
	///
	/// The default implementation treats it like text.
	fn parse_element_inner_cdata(&mut self, text: Cow<'_, str>) -> Result<(), DeserializeError> {
		self.parse_element_inner_text(text)
	}

	/// Parse inner elements.
	fn parse_element_inner_node<P: ElementParser>(&mut self, tag: &str, parser: P) -> Result<(), DeserializeError>;

	/// Finish parsing an element.
	fn parse_element_finish(self) -> Result<Self::Output, DeserializeError>;
}

/// A parser that is ready to parse exactly one element (and nested data).
pub trait ElementParser: Sized {
	/// Start parsing an element with the prepared state
	///
	/// A parser will call the various `ElementState` methods to parse the element.
	///
	/// Users of this method will create the state using `ElementState::parse_element_start` and
	/// produce the final result using `ElementState::parse_element_finish` after calling this
	/// method.
	fn parse_element_state<E: ElementState>(self, state: &mut E) -> Result<(), DeserializeError>;
}
