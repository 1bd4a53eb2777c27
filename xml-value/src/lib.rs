#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/xml-value/0.1.0")]
//! This library maps XML documents to generic nested data ([`Value`]) and back, following a
//! fixed set of conventions instead of a schema.
//!
//! A document becomes a record with a single key, the root element name. Inside an element:
//! - attributes are collected in a record under `@attributes`,
//! - text goes to `@data` and CDATA sections to `@cdata`; an element with nothing but text
//!   becomes a bare scalar,
//! - child elements are keyed by their name, unless they form a collection (see
//!   [`deserializer::CollectionShape`]): then the element becomes a sequence of single-key
//!   records `[{item: ..}, {item: ..}]`,
//! - namespace declarations anywhere in the document are lifted into the attributes of the root.
//!
//! Serializing reverses this. Scalars are written as text, so data only round-trips modulo
//! scalar-to-string coercion.
//!
//! ```
//! use xml_value::{Record, Value};
//!
//! let data = xml_value::deserialize_xml_to_data(r#"<x id="1">hi</x>"#).unwrap();
//! let x = Record::new()
//! 	.with("@attributes", Record::new().with("id", "1"))
//! 	.with("@data", "hi");
//! assert_eq!(data, Value::from(Record::new().with("x", x)));
//! assert!(xml_value::serialize(&data).unwrap().ends_with(r#"<x id="1">hi</x>"#));
//! ```
//!
//! For the following XML handling crates adaptors are included if enabled through the equally
//! named features:
//! - [`quick-xml`](https://crates.io/crates/quick-xml) (enabled by default; the converter and the
//!   free functions below need it)

pub mod config;
pub mod deserializer;
pub mod dom;
pub mod errors;
pub mod mapper;
pub mod parser;
pub mod serializer;
pub mod value;

#[cfg(feature = "quick-xml")]
mod convert;

#[cfg(feature = "quick-xml")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "quick-xml")))]
pub mod quick_xml;

#[cfg(test)]
mod test_data;

pub use self::{
	config::Config,
	errors::{
		DeserializeError,
		SerializeError,
	},
	mapper::Mapper,
	value::{
		NodeField,
		Record,
		Scalar,
		Sequence,
		Value,
		ATTRIBUTES_KEY,
		CDATA_KEY,
		DATA_KEY,
	},
};

#[cfg(feature = "quick-xml")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "quick-xml")))]
pub use self::convert::XmlConverter;

/// Serialize `data` (a record with a single root key) into a document
#[cfg(feature = "quick-xml")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "quick-xml")))]
pub fn serialize(data: &Value) -> Result<String, SerializeError> {
	XmlConverter::new().serialize(data)
}

/// Serialize `data` into a document using `config`
#[cfg(feature = "quick-xml")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "quick-xml")))]
pub fn serialize_with_config(data: &Value, config: &Config) -> Result<String, SerializeError> {
	XmlConverter::new().with_config(config.clone()).serialize(data)
}

/// Map `item` with `mapper` and serialize the result
#[cfg(feature = "quick-xml")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "quick-xml")))]
pub fn serialize_item<T, M>(item: T, mapper: &M) -> Result<String, SerializeError>
where
	M: Mapper<T, Value> + ?Sized,
{
	XmlConverter::new().serialize_item(item, mapper)
}

/// Always fails with [`SerializeError::RootCollection`]: a document needs a single root
#[cfg(feature = "quick-xml")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "quick-xml")))]
pub fn serialize_collection<T, M>(items: &[T], mapper: &M) -> Result<String, SerializeError>
where
	M: Mapper<T, Value> + ?Sized,
{
	XmlConverter::new().serialize_collection(items, mapper)
}

/// Always fails with [`SerializeError::RootCollection`]: a document needs a single root
#[cfg(feature = "quick-xml")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "quick-xml")))]
pub fn serialize_collection_with<T, F>(items: &[T], f: F) -> Result<String, SerializeError>
where
	F: Fn(T) -> Value,
{
	XmlConverter::new().serialize_collection_with(items, f)
}

/// Parse `xml` into generic data
#[cfg(feature = "quick-xml")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "quick-xml")))]
pub fn deserialize_xml_to_data(xml: &str) -> Result<Value, DeserializeError> {
	XmlConverter::new().deserialize_xml_to_data(xml)
}

/// Parse `xml` and convert the data with `mapper`
#[cfg(feature = "quick-xml")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "quick-xml")))]
pub fn deserialize_xml<T, M>(xml: &str, mapper: &M) -> Result<T, DeserializeError>
where
	M: Mapper<Value, T> + ?Sized,
{
	XmlConverter::new().deserialize_xml(xml, mapper)
}

/// Parse `xml` and convert the data with `f`
#[cfg(feature = "quick-xml")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "quick-xml")))]
pub fn deserialize_xml_with<T, F>(xml: &str, f: F) -> Result<T, DeserializeError>
where
	F: FnOnce(Value) -> T,
{
	XmlConverter::new().deserialize_xml_with(xml, f)
}
