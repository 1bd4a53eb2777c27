#![allow(missing_docs)] // names should be good enough
//! Error types and helper functions to generate common errors

use thiserror::Error;

/// Underlying cause reported by a parser or writer backend
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure to turn a [`Value`](crate::Value) into an XML document
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SerializeError {
	#[error("collections are not valid at document root")]
	RootCollection,
	#[error("no data structure to serialize")]
	NoData,
	#[error("document root must be a single element, found {count}")]
	MultipleRoots { count: usize },
	#[error("sequence item in <{parent}> is not a record and has no element name")]
	UnnamedItem { parent: String },
	#[error("maximum nesting depth {max} exceeded")]
	DepthExceeded { max: usize },
	#[error("xml writer failed: {0}")]
	Writer(#[source] Cause),
}

/// Failure to turn an XML document into a [`Value`](crate::Value)
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeserializeError {
	#[error("malformed xml: {0}")]
	Xml(#[source] Cause),
	#[error("malformed xml: {0}")]
	Malformed(#[from] ParseError),
	#[error("maximum nesting depth {max} exceeded")]
	DepthExceeded { max: usize },
}

/// Structural problems found by a parser adaptor
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
	#[error("unexpected eof: {msg}")]
	UnexpectedEof { msg: String },
	#[error("unexpected end tag")]
	UnexpectedEnd,
	#[error("unexpected decl <?xml ... ?>")]
	UnexpectedDecl,
	#[error("unexpected <!DOCTYPE ...>")]
	UnexpectedDocType,
	#[error("unexpected processing instruction <?...?>")]
	UnexpectedPI,
	#[error("unexpected (non-whitespace) text/CDATA outside the root element")]
	UnexpectedText,
	#[error("unexpected second root element: {tag}")]
	UnexpectedElement { tag: String },
	#[error("inner element {tag:?} wasn't fully parsed")]
	InnerElementNotParsed { tag: String },
	#[error("name is not valid utf-8")]
	InvalidName,
	#[error("expected start tag")]
	ExpectedStart,
}

pub(crate) fn unexpected_eof(msg: &str) -> DeserializeError {
	ParseError::UnexpectedEof { msg: msg.into() }.into()
}

pub(crate) fn unexpected_end() -> DeserializeError {
	ParseError::UnexpectedEnd.into()
}

pub(crate) fn unexpected_decl() -> DeserializeError {
	ParseError::UnexpectedDecl.into()
}

pub(crate) fn unexpected_doctype() -> DeserializeError {
	ParseError::UnexpectedDocType.into()
}

pub(crate) fn unexpected_pi() -> DeserializeError {
	ParseError::UnexpectedPI.into()
}

pub(crate) fn unexpected_text() -> DeserializeError {
	ParseError::UnexpectedText.into()
}

pub(crate) fn unexpected_element(tag: &str) -> DeserializeError {
	ParseError::UnexpectedElement { tag: tag.into() }.into()
}

pub(crate) fn inner_element_not_parsed(tag: &str) -> DeserializeError {
	ParseError::InnerElementNotParsed { tag: tag.into() }.into()
}

pub(crate) fn invalid_name() -> DeserializeError {
	ParseError::InvalidName.into()
}

pub(crate) fn expected_start() -> DeserializeError {
	ParseError::ExpectedStart.into()
}

pub(crate) fn parse_depth_exceeded(max: usize) -> DeserializeError {
	DeserializeError::DepthExceeded { max }
}

pub(crate) fn xml<E: Into<Cause>>(err: E) -> DeserializeError {
	DeserializeError::Xml(err.into())
}

pub(crate) fn writer<E: Into<Cause>>(err: E) -> SerializeError {
	SerializeError::Writer(err.into())
}

pub(crate) fn unnamed_item(parent: &str) -> SerializeError {
	SerializeError::UnnamedItem { parent: parent.into() }
}

pub(crate) fn serialize_depth_exceeded(max: usize) -> SerializeError {
	SerializeError::DepthExceeded { max }
}

/// Invalid element or attribute name rejected by a writer adaptor
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid xml name: {name:?}")]
pub struct InvalidXmlName {
	pub name: String,
}
