use crate::{
	config::Config,
	deserializer::{
		self,
		CollectionShape,
		NameRepetition,
	},
	errors::{
		DeserializeError,
		SerializeError,
	},
	mapper::Mapper,
	quick_xml,
	serializer,
	value::Value,
};

/// Serializer and deserializer sharing one configuration and collection strategy
///
/// A converter holds no state besides its settings; one instance can be shared between threads
/// if the strategy allows it.
#[derive(Clone, Debug, Default)]
pub struct XmlConverter<S = NameRepetition> {
	config: Config,
	shape: S,
}

impl XmlConverter {
	/// Converter with default settings
	pub fn new() -> Self {
		Self::default()
	}
}

impl<S: CollectionShape> XmlConverter<S> {
	/// Replace the configuration
	pub fn with_config(mut self, config: Config) -> Self {
		self.config = config;
		self
	}

	/// Replace the collection strategy
	pub fn with_shape<T: CollectionShape>(self, shape: T) -> XmlConverter<T> {
		XmlConverter {
			config: self.config,
			shape,
		}
	}

	/// Configuration in use
	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Serialize `data` into a full document
	///
	/// `data` must be a record with exactly one named key: the root element.
	pub fn serialize(&self, data: &Value) -> Result<String, SerializeError> {
		let root = serializer::resolve_root(data, &self.config)?;
		log::debug!("serializing document with root <{}>", root.name);
		quick_xml::serialize_document(&root, &self.config)
	}

	/// Map a single item to data with `mapper`, then serialize it
	pub fn serialize_item<T, M>(&self, item: T, mapper: &M) -> Result<String, SerializeError>
	where
		M: Mapper<T, Value> + ?Sized,
	{
		self.serialize(&mapper.map(item))
	}

	/// A collection has no single root element; this always fails
	///
	/// Neither the items nor the mapper are touched.
	pub fn serialize_collection<T, M>(&self, _items: &[T], _mapper: &M) -> Result<String, SerializeError>
	where
		M: Mapper<T, Value> + ?Sized,
	{
		Err(SerializeError::RootCollection)
	}

	/// Like [`serialize_collection`](Self::serialize_collection), taking a closure
	pub fn serialize_collection_with<T, F>(&self, _items: &[T], _f: F) -> Result<String, SerializeError>
	where
		F: Fn(T) -> Value,
	{
		Err(SerializeError::RootCollection)
	}

	/// Parse `xml` into `{rootName: rootValue}`, with namespace declarations lifted into the root
	/// attributes
	pub fn deserialize_xml_to_data(&self, xml: &str) -> Result<Value, DeserializeError> {
		let document = quick_xml::parse_document(xml, &self.config)?;
		log::debug!("parsed document with root <{}>", document.root.name);
		let mut data = deserializer::document_to_value(&document, &self.shape, &self.config)?;
		deserializer::lift_namespaces(&document, &mut data);
		Ok(data)
	}

	/// Parse `xml` and convert the data with `mapper`
	pub fn deserialize_xml<T, M>(&self, xml: &str, mapper: &M) -> Result<T, DeserializeError>
	where
		M: Mapper<Value, T> + ?Sized,
	{
		Ok(mapper.map(self.deserialize_xml_to_data(xml)?))
	}

	/// Parse `xml` and convert the data with `f`
	pub fn deserialize_xml_with<T, F>(&self, xml: &str, f: F) -> Result<T, DeserializeError>
	where
		F: FnOnce(Value) -> T,
	{
		Ok(f(self.deserialize_xml_to_data(xml)?))
	}
}
