use crate::{
	config::Config,
	errors::{
		self,
		InvalidXmlName,
		SerializeError,
	},
	serializer::{
		self,
		Element,
	},
};
use quick_xml::events::{
	BytesCData,
	BytesDecl,
	BytesEnd,
	BytesStart,
	BytesText,
	Event,
};
use std::{
	borrow::Cow,
	io,
};

/// Serialize element into full document in memory
pub fn serialize_document<E: Element>(element: &E, config: &Config) -> Result<String, SerializeError> {
	let mut writer = quick_xml::Writer::new(Vec::new());
	let mut serializer = Serializer::new(&mut writer);
	serializer.serialize_document(element, config)?;
	String::from_utf8(writer.into_inner()).map_err(errors::writer)
}

/// Serializer adaptor for `quick_xml::Writer`
pub struct Serializer<'w, W: io::Write> {
	writer: &'w mut quick_xml::Writer<W>,
}

impl<'w, W: io::Write> Serializer<'w, W> {
	/// New adaptor using the writer
	pub fn new(writer: &'w mut quick_xml::Writer<W>) -> Self {
		Self { writer }
	}

	/// Serialize full document (declaration from `config`) from root element
	pub fn serialize_document<E: Element>(&mut self, element: &E, config: &Config) -> Result<(), SerializeError> {
		self.write(Event::Decl(BytesDecl::new(&config.version, Some(config.encoding.as_str()), None)))?;
		self.serialize_element(element)
	}

	/// Serialize single element
	pub fn serialize_element<E: Element>(&mut self, element: &E) -> Result<(), SerializeError> {
		let tag = element.tag();
		check_name(&tag)?;
		let mut ser = SRef {
			serializer: self,
			end: Some(BytesEnd::new(tag.clone().into_owned())),
			start: Some(BytesStart::new(tag.into_owned())),
		};
		element.serialize(&mut ser)?;
		ser.close()?;
		Ok(())
	}

	fn write(&mut self, event: Event<'_>) -> Result<(), SerializeError> {
		self.writer.write_event(event).map_err(errors::writer)
	}
}

/// Element and attribute names must be XML names
fn check_name(name: &str) -> Result<(), SerializeError> {
	let mut chars = name.chars();
	let valid = match chars.next() {
		Some(first) => is_name_start(first) && chars.all(is_name_char),
		None => false,
	};
	if valid {
		Ok(())
	} else {
		Err(errors::writer(InvalidXmlName { name: name.into() }))
	}
}

/// `NameStartChar` of XML 1.0 (fifth edition)
fn is_name_start(c: char) -> bool {
	matches!(c,
		':' | 'A'..='Z' | '_' | 'a'..='z'
		| '\u{c0}'..='\u{d6}'
		| '\u{d8}'..='\u{f6}'
		| '\u{f8}'..='\u{2ff}'
		| '\u{370}'..='\u{37d}'
		| '\u{37f}'..='\u{1fff}'
		| '\u{200c}'..='\u{200d}'
		| '\u{2070}'..='\u{218f}'
		| '\u{2c00}'..='\u{2fef}'
		| '\u{3001}'..='\u{d7ff}'
		| '\u{f900}'..='\u{fdcf}'
		| '\u{fdf0}'..='\u{fffd}'
		| '\u{10000}'..='\u{effff}'
	)
}

/// `NameChar` of XML 1.0 (fifth edition)
fn is_name_char(c: char) -> bool {
	is_name_start(c)
		|| matches!(c,
			'-' | '.' | '0'..='9' | '\u{b7}'
			| '\u{300}'..='\u{36f}'
			| '\u{203f}'..='\u{2040}'
		)
}

/// Split text so that no section contains `]]>`
fn cdata_sections(text: &str) -> Vec<&str> {
	let mut sections = Vec::new();
	let mut rest = text;
	while let Some(pos) = rest.find("]]>") {
		sections.push(&rest[..pos + 2]);
		rest = &rest[pos + 2..];
	}
	sections.push(rest);
	sections
}

struct SRef<'a, 'w, W: io::Write> {
	serializer: &'a mut Serializer<'w, W>,
	start: Option<BytesStart<'static>>,
	end: Option<BytesEnd<'static>>,
}

impl<'a, 'w, W: io::Write> SRef<'a, 'w, W> {
	fn start(&mut self) -> Result<(), SerializeError> {
		if let Some(s) = self.start.take() {
			self.serializer.write(Event::Start(s))?;
		}
		Ok(())
	}

	fn close(&mut self) -> Result<(), SerializeError> {
		if let Some(s) = self.start.take() {
			self.serializer.write(Event::Empty(s))?;
			self.end = None;
		} else if let Some(e) = self.end.take() {
			self.serializer.write(Event::End(e))?;
		}
		Ok(())
	}
}

impl<'a, 'w, W: io::Write> serializer::Serializer for &'_ mut SRef<'a, 'w, W> {
	fn serialize_attribute(&mut self, key: &str, value: Cow<'_, str>) -> Result<(), SerializeError> {
		check_name(key)?;
		match self.start.as_mut() {
			Some(start) => {
				start.push_attribute((key, &*value));
				Ok(())
			},
			None => Err(errors::writer("attribute after element content")),
		}
	}

	fn serialize_text(&mut self, text: Cow<'_, str>) -> Result<(), SerializeError> {
		self.start()?;
		self.serializer.write(Event::Text(BytesText::new(&text)))
	}

	fn serialize_cdata(&mut self, text: Cow<'_, str>) -> Result<(), SerializeError> {
		self.start()?;
		for section in cdata_sections(&text) {
			self.serializer.write(Event::CData(BytesCData::new(section)))?;
		}
		Ok(())
	}

	fn serialize_element<E: Element>(&mut self, element: &E) -> Result<(), SerializeError> {
		self.start()?;
		self.serializer.serialize_element(element)
	}
}
