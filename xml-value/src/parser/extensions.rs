use crate::{
	errors::DeserializeError,
	parser::{
		ElementParser,
		ElementState,
	},
};

/// extend `ElementParser` trait with convenience methods
pub trait ElementParserExt: ElementParser {
	/// Full parsing of an element: start, feed and finish the state
	fn parse_element<E: ElementState>(self, tag: &str) -> Result<E::Output, DeserializeError> {
		let mut state = E::parse_element_start(tag);
		self.parse_element_state(&mut state)?;
		state.parse_element_finish()
	}
}

impl<P: ElementParser> ElementParserExt for P {}
