use crate::{
	serializer::{
		engine,
		Element,
		Serializer,
	},
	errors::SerializeError,
	value::{
		Record,
		Value,
		CDATA_KEY,
		DATA_KEY,
	},
};
use std::borrow::Cow;

/// Nested content of a descriptor
#[derive(Clone, Debug, PartialEq)]
pub enum Children<'a> {
	/// Nothing to nest
	None,
	/// Named fields of a record (reserved keys already removed)
	Fields(Vec<(&'a str, &'a Value)>),
	/// Positional items; each item contributes its own fields as siblings
	Items(&'a [Value]),
}

impl Children<'_> {
	/// Whether there is nothing to serialize
	pub fn is_empty(&self) -> bool {
		match self {
			Self::None => true,
			Self::Fields(fields) => fields.is_empty(),
			Self::Items(items) => items.is_empty(),
		}
	}
}

/// How one `(key, value)` pair of a record maps to XML
///
/// Descriptors borrow from the value they were resolved from and implement
/// [`serializer::Element`](Element), so they can be passed straight to a `Serializer`.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeDescriptor<'a> {
	/// Element tag
	pub name: &'a str,
	/// Text content (from a scalar, `@data` or `@cdata`)
	pub value: Option<Cow<'a, str>>,
	/// Whether `value` must be written as CDATA section
	pub is_cdata: bool,
	/// Attributes in order
	pub attributes: Vec<(&'a str, Cow<'a, str>)>,
	/// Nested content
	pub children: Children<'a>,
	/// The items are siblings of this node's parent; no element is written for `name`
	pub is_collection: bool,
	depth: usize,
	max_depth: usize,
}

impl<'a> NodeDescriptor<'a> {
	/// Resolve a top level pair (depth 1, no nesting limit)
	pub fn resolve(name: &'a str, value: &'a Value) -> Self {
		Self::nested(name, value, 1, 0)
	}

	/// Resolve a pair at the given element depth
	pub(crate) fn nested(name: &'a str, value: &'a Value, depth: usize, max_depth: usize) -> Self {
		let mut node = Self {
			name,
			value: None,
			is_cdata: false,
			attributes: Vec::new(),
			children: Children::None,
			is_collection: false,
			depth,
			max_depth,
		};
		match value {
			Value::Scalar(scalar) => node.value = scalar.to_text(),
			Value::Record(record) => node.resolve_record(record),
			Value::Sequence(items) => {
				node.is_collection = !items.is_empty() && items.iter().all(|item| single_key(item) == Some(name));
				if !items.is_empty() {
					node.children = Children::Items(items);
				}
			},
		}
		log::trace!(
			"resolved <{}>: value={:?} cdata={} attributes={} collection={}",
			node.name,
			node.value,
			node.is_cdata,
			node.attributes.len(),
			node.is_collection,
		);
		node
	}

	fn resolve_record(&mut self, record: &'a Record) {
		if let Some(attributes) = record.attributes() {
			for (key, value) in attributes {
				match value {
					Value::Scalar(scalar) => self
						.attributes
						.push((key.as_str(), scalar.to_text().unwrap_or_default())),
					_ => log::warn!("<{}>: attribute {:?} is not a scalar, skipped", self.name, key.as_str()),
				}
			}
		}

		// @cdata wins over @data
		if let Some(text) = record.get(CDATA_KEY).and_then(|v| self.text_of(CDATA_KEY, v)) {
			self.value = Some(text);
			self.is_cdata = true;
		} else if let Some(text) = record.get(DATA_KEY).and_then(|v| self.text_of(DATA_KEY, v)) {
			self.value = Some(text);
		}

		let fields: Vec<_> = record.named().collect();
		if !fields.is_empty() {
			self.children = Children::Fields(fields);
		}
	}

	fn text_of(&self, key: &str, value: &'a Value) -> Option<Cow<'a, str>> {
		match value {
			Value::Scalar(scalar) => scalar.to_text(),
			_ => {
				log::warn!("<{}>: {} is not a scalar, skipped", self.name, key);
				None
			},
		}
	}

	/// Element depth (the root element has depth 1)
	pub fn depth(&self) -> usize {
		self.depth
	}

	pub(crate) fn max_depth(&self) -> usize {
		self.max_depth
	}
}

/// The only named key of a record, if it has exactly one entry
fn single_key(item: &Value) -> Option<&str> {
	let record = item.as_record()?;
	if record.len() != 1 {
		return None;
	}
	record.named().next().map(|(name, _)| name)
}

impl Element for NodeDescriptor<'_> {
	fn tag(&self) -> Cow<'_, str> {
		Cow::Borrowed(self.name)
	}

	fn serialize<S: Serializer>(&self, mut serializer: S) -> Result<(), SerializeError> {
		for (key, value) in &self.attributes {
			serializer.serialize_attribute(key, Cow::Borrowed(&**value))?;
		}
		if let Some(value) = &self.value {
			if self.is_cdata {
				serializer.serialize_cdata(Cow::Borrowed(&**value))?;
			} else {
				serializer.serialize_text(Cow::Borrowed(&**value))?;
			}
		}
		engine::serialize_children(&mut serializer, self.name, &self.children, self.depth + 1, self.max_depth)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::value::Scalar;

	#[test]
	fn scalar() {
		let v = Value::from(42);
		let d = NodeDescriptor::resolve("n", &v);
		assert_eq!(d.name, "n");
		assert_eq!(d.value.as_deref(), Some("42"));
		assert!(!d.is_cdata && !d.is_collection);
		assert!(d.children.is_empty());
	}

	#[test]
	fn null_has_no_value() {
		let v = Value::Scalar(Scalar::Null);
		assert_eq!(NodeDescriptor::resolve("n", &v).value, None);
	}

	#[test]
	fn record_with_reserved_keys() {
		let v = Value::from(
			Record::new()
				.with("@attributes", Record::new().with("id", 1).with("flag", true))
				.with("@data", "text")
				.with("child", "c"),
		);
		let d = NodeDescriptor::resolve("x", &v);
		assert_eq!(
			d.attributes,
			vec![("id", Cow::from("1")), ("flag", Cow::from("true"))]
		);
		assert_eq!(d.value.as_deref(), Some("text"));
		assert!(!d.is_cdata);
		assert_eq!(d.children, Children::Fields(vec![("child", &Value::from("c"))]));
	}

	#[test]
	fn cdata_wins_over_data() {
		let v = Value::from(Record::new().with("@data", "plain").with("@cdata", "<raw>"));
		let d = NodeDescriptor::resolve("x", &v);
		assert_eq!(d.value.as_deref(), Some("<raw>"));
		assert!(d.is_cdata);
		assert!(d.children.is_empty());
	}

	#[test]
	fn non_scalar_attribute_is_skipped() {
		let v = Value::from(Record::new().with(
			"@attributes",
			Record::new().with("bad", Record::new()).with("good", "y"),
		));
		let d = NodeDescriptor::resolve("x", &v);
		assert_eq!(d.attributes, vec![("good", Cow::from("y"))]);
	}

	#[test]
	fn sequence_keyed_by_own_name_is_collection() {
		let v = Value::from(vec![
			Value::from(Record::new().with("item", "a")),
			Value::from(Record::new().with("item", "b")),
		]);
		assert!(NodeDescriptor::resolve("item", &v).is_collection);
		let d = NodeDescriptor::resolve("items", &v);
		assert!(!d.is_collection);
		assert!(matches!(d.children, Children::Items(items) if items.len() == 2));
	}

	#[test]
	fn empty_sequence_is_empty_element() {
		let v = Value::Sequence(Vec::new());
		let d = NodeDescriptor::resolve("items", &v);
		assert!(!d.is_collection);
		assert!(d.children.is_empty());
	}
}
