use crate::{
	config::{
		self,
		Config,
	},
	dom::Document,
	errors::{
		self,
		DeserializeError,
	},
	parser::{
		ElementParser,
		ElementParserExt,
		ElementState,
		TreeBuilder,
	},
};
use quick_xml::events::Event;
use std::borrow::Cow;

/// Parse a full document held in memory
pub fn parse_document(input: &str, config: &Config) -> Result<Document, DeserializeError> {
	Parser::new(input, config).parse_document()
}

/// Parser adaptor for an in-memory `quick_xml::Reader`
pub struct Parser<'a> {
	inner: quick_xml::Reader<&'a [u8]>,
	pending: Option<Event<'a>>,
	max_depth: usize,
}

impl<'a> Parser<'a> {
	/// Create a new adaptor reading `input`
	///
	/// Whitespace is reported as is; the deserializer decides what to drop.
	pub fn new(input: &'a str, config: &Config) -> Self {
		Self {
			inner: quick_xml::Reader::from_str(input),
			pending: None,
			max_depth: config.max_depth,
		}
	}

	fn peek(&mut self) -> Result<Event<'a>, DeserializeError> {
		if let Some(event) = &self.pending {
			return Ok(event.clone());
		}
		let event = self.inner.read_event().map_err(errors::xml)?;
		self.pending = Some(event.clone());
		Ok(event)
	}

	fn clear(&mut self) {
		self.pending = None;
	}

	/// Parse the single root element (and everything in it) from reading a document
	pub fn parse_document(&mut self) -> Result<Document, DeserializeError> {
		let mut root = None;
		loop {
			match self.peek()? {
				Event::Eof => {
					return match root {
						Some(root) => Ok(Document { root }),
						None => Err(errors::unexpected_eof("empty document")),
					};
				},
				Event::End(_) => {
					return Err(errors::unexpected_end());
				},
				Event::Start(s)|Event::Empty(s) => {
					let tag = decode_name(s.name().as_ref())?;
					if root.is_some() {
						return Err(errors::unexpected_element(&tag));
					}
					let mut finished_inner = false;
					let p = PRef { parser: self, finished_element: &mut finished_inner, depth: 1 };
					root = Some(p.parse_element::<TreeBuilder>(&tag)?);
					if !finished_inner {
						return Err(errors::inner_element_not_parsed(&tag));
					}
					continue;
				},
				// not supported
				Event::PI(_) => return Err(errors::unexpected_pi()),
				// ignore those at document level before the root element
				Event::Decl(_) => {
					if root.is_some() {
						return Err(errors::unexpected_decl());
					}
				},
				Event::DocType(_) => {
					if root.is_some() {
						return Err(errors::unexpected_doctype());
					}
				},
				// ignore comments
				Event::Comment(_) => (),
				Event::Text(t) => {
					let t = t.unescape().map_err(errors::xml)?;
					if !t.trim().is_empty() {
						return Err(errors::unexpected_text());
					}
				},
				Event::CData(_) => return Err(errors::unexpected_text()),
			}
			// Start+Empty continue directly; everything else needs to be cleared so we don't read it again
			self.clear();
		}
	}
}

fn decode_name(name: &[u8]) -> Result<String, DeserializeError> {
	std::str::from_utf8(name)
		.map(str::to_owned)
		.map_err(|_| errors::invalid_name())
}

fn decode_text(content: Cow<'_, [u8]>) -> Result<Cow<'_, str>, DeserializeError> {
	match content {
		Cow::Borrowed(b) => std::str::from_utf8(b).map(Cow::Borrowed).map_err(errors::xml),
		Cow::Owned(b) => String::from_utf8(b).map(Cow::Owned).map_err(errors::xml),
	}
}

struct PRef<'x, 'a> {
	parser: &'x mut Parser<'a>,
	finished_element: &'x mut bool,
	depth: usize,
}

impl ElementParser for PRef<'_, '_> {
	fn parse_element_state<E: ElementState>(self, state: &mut E) -> Result<(), DeserializeError> {
		if config::depth_exceeded(self.parser.max_depth, self.depth) {
			return Err(errors::parse_depth_exceeded(self.parser.max_depth));
		}

		let (start, closed) = match self.parser.peek()? {
			Event::Start(s) => (s, false),
			Event::Empty(s) => (s, true),
			_ => return Err(errors::expected_start()),
		};

		for attr in start.attributes() {
			let attr = attr.map_err(errors::xml)?;
			let attr_key = decode_name(attr.key.as_ref())?;
			let attr_value = attr.unescape_value().map_err(errors::xml)?;
			state.parse_element_attribute(&attr_key, attr_value)?;
		}

		self.parser.clear(); // consume start tag

		// read inner (unless there is no inner)
		if closed {
			*self.finished_element = true;
			return Ok(());
		}

		let mut has_content = false;
		loop {
			match self.parser.peek()? {
				Event::Eof => return Err(errors::unexpected_eof("unclosed element")),
				Event::End(_) => {
					if !has_content {
						// `<a></a>` is an empty string, `<a/>` has no content at all
						state.parse_element_inner_text(Cow::Borrowed(""))?;
					}
					self.parser.clear();
					*self.finished_element = true;
					return Ok(());
				},
				Event::Start(s)|Event::Empty(s) => {
					has_content = true;
					let tag = decode_name(s.name().as_ref())?;
					let mut finished_inner = false;
					let p = PRef {
						parser: &mut *self.parser,
						finished_element: &mut finished_inner,
						depth: self.depth + 1,
					};
					state.parse_element_inner_node(&tag, p)?;
					if !finished_inner {
						return Err(errors::inner_element_not_parsed(&tag));
					}
					continue;
				},
				// not supported
				Event::PI(_) => return Err(errors::unexpected_pi()),
				// within elements those shouldn't be there
				Event::Decl(_) => return Err(errors::unexpected_decl()),
				Event::DocType(_) => return Err(errors::unexpected_doctype()),
				// ignore comments
				Event::Comment(_) => (),
				Event::Text(t) => {
					has_content = true;
					let t = t.unescape().map_err(errors::xml)?;
					state.parse_element_inner_text(t)?;
				},
				Event::CData(c) => {
					has_content = true;
					let t = decode_text(c.into_inner())?;
					state.parse_element_inner_cdata(t)?;
				},
			}
			// Start+Empty continue directly; everything else needs to be cleared so we don't read it again
			self.parser.clear();
		}
	}
}
