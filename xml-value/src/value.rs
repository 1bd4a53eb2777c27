//! Generic nested data exchanged with callers
//!
//! A [`Value`] is either a scalar, an ordered sequence of values, or an insertion-ordered record.
//! Records are keyed by [`NodeField`], which separates the three reserved keys (`@attributes`,
//! `@data` and `@cdata`) from ordinary element names.

use indexmap::IndexMap;
use std::{
	borrow::{
		Borrow,
		Cow,
	},
	fmt,
	hash::{
		Hash,
		Hasher,
	},
	iter::FromIterator,
};

/// Key holding the attributes of an element (a record of name -> scalar)
pub const ATTRIBUTES_KEY: &str = "@attributes";
/// Key holding the text of an element that also carries attributes
pub const DATA_KEY: &str = "@data";
/// Key holding text to be written as CDATA section
pub const CDATA_KEY: &str = "@cdata";

/// Key of a [`Record`] entry
///
/// Hashing and equality only look at the spelling ([`NodeField::as_str`]), so a `Named` key
/// spelled like a reserved key is the same key as the reserved variant.
#[derive(Clone, Debug)]
pub enum NodeField {
	/// `@attributes`
	Attributes,
	/// `@data`
	Data,
	/// `@cdata`
	Cdata,
	/// Element name
	Named(String),
}

impl NodeField {
	/// Spelling of the key
	pub fn as_str(&self) -> &str {
		match self {
			Self::Attributes => ATTRIBUTES_KEY,
			Self::Data => DATA_KEY,
			Self::Cdata => CDATA_KEY,
			Self::Named(name) => name,
		}
	}

	/// Whether this is one of the reserved keys
	pub fn is_reserved(&self) -> bool {
		!matches!(self, Self::Named(_))
	}

	/// Element name for non-reserved keys
	pub fn name(&self) -> Option<&str> {
		match self {
			Self::Named(name) => Some(name),
			_ => None,
		}
	}
}

impl From<&str> for NodeField {
	fn from(key: &str) -> Self {
		match key {
			ATTRIBUTES_KEY => Self::Attributes,
			DATA_KEY => Self::Data,
			CDATA_KEY => Self::Cdata,
			_ => Self::Named(key.to_owned()),
		}
	}
}

impl From<String> for NodeField {
	fn from(key: String) -> Self {
		match key.as_str() {
			ATTRIBUTES_KEY => Self::Attributes,
			DATA_KEY => Self::Data,
			CDATA_KEY => Self::Cdata,
			_ => Self::Named(key),
		}
	}
}

impl PartialEq for NodeField {
	fn eq(&self, other: &Self) -> bool {
		self.as_str() == other.as_str()
	}
}

impl Eq for NodeField {}

impl Hash for NodeField {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.as_str().hash(state)
	}
}

impl Borrow<str> for NodeField {
	fn borrow(&self) -> &str {
		self.as_str()
	}
}

impl fmt::Display for NodeField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Leaf value
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Scalar {
	/// No value; serializes as an empty element
	#[default]
	Null,
	/// Boolean
	Bool(bool),
	/// Integer
	Integer(i64),
	/// Floating point number
	Float(f64),
	/// Text
	String(String),
}

impl Scalar {
	/// Text for XML output; `None` for `Null`
	pub fn to_text(&self) -> Option<Cow<'_, str>> {
		match self {
			Self::Null => None,
			Self::String(s) => Some(Cow::Borrowed(s)),
			other => Some(Cow::Owned(other.to_string())),
		}
	}

	/// Returns the string if this is a string scalar
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(s) => Some(s),
			_ => None,
		}
	}
}

impl fmt::Display for Scalar {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => Ok(()),
			Self::Bool(b) => write!(f, "{}", b),
			Self::Integer(i) => write!(f, "{}", i),
			Self::Float(n) => write!(f, "{}", n),
			Self::String(s) => f.write_str(s),
		}
	}
}

/// Ordered list of values
pub type Sequence = Vec<Value>;

/// Generic nested data
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
	/// Leaf
	Scalar(Scalar),
	/// Positional collection
	Sequence(Sequence),
	/// Keyed record
	Record(Record),
}

impl Default for Value {
	fn default() -> Self {
		Self::Scalar(Scalar::Null)
	}
}

impl Value {
	/// Returns the scalar if this is a scalar
	pub fn as_scalar(&self) -> Option<&Scalar> {
		match self {
			Self::Scalar(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the text if this is a string scalar
	pub fn as_str(&self) -> Option<&str> {
		self.as_scalar().and_then(Scalar::as_str)
	}

	/// Returns the sequence if this is a sequence
	pub fn as_sequence(&self) -> Option<&Sequence> {
		match self {
			Self::Sequence(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the record if this is a record
	pub fn as_record(&self) -> Option<&Record> {
		match self {
			Self::Record(r) => Some(r),
			_ => None,
		}
	}

	/// Returns the record mutably if this is a record
	pub fn as_record_mut(&mut self) -> Option<&mut Record> {
		match self {
			Self::Record(r) => Some(r),
			_ => None,
		}
	}

	/// Look up a key if this is a record
	pub fn get(&self, key: &str) -> Option<&Self> {
		self.as_record().and_then(|r| r.get(key))
	}
}

impl From<Scalar> for Value {
	fn from(value: Scalar) -> Self {
		Self::Scalar(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Scalar(Scalar::Bool(value))
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Self::Scalar(Scalar::Integer(i64::from(value)))
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Scalar(Scalar::Integer(value))
	}
}

impl From<u32> for Value {
	fn from(value: u32) -> Self {
		Self::Scalar(Scalar::Integer(i64::from(value)))
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Scalar(Scalar::Float(value))
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::Scalar(Scalar::String(value))
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::Scalar(Scalar::String(value.to_owned()))
	}
}

impl From<Sequence> for Value {
	fn from(value: Sequence) -> Self {
		Self::Sequence(value)
	}
}

impl From<Record> for Value {
	fn from(value: Record) -> Self {
		Self::Record(value)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or_else(Self::default, Into::into)
	}
}

/// Insertion-ordered record of values
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Record(IndexMap<NodeField, Value>);

impl Record {
	/// Create an empty record
	pub fn new() -> Self {
		Self(IndexMap::new())
	}

	/// Number of entries (reserved keys included)
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether the record has no entries
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Insert a value, returning the previous one
	///
	/// Replacing an existing key keeps its position.
	pub fn insert(&mut self, key: impl Into<NodeField>, value: impl Into<Value>) -> Option<Value> {
		self.0.insert(key.into(), value.into())
	}

	/// Builder style `insert`
	pub fn with(mut self, key: impl Into<NodeField>, value: impl Into<Value>) -> Self {
		self.insert(key, value);
		self
	}

	/// Look up a value by spelling
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Look up a value mutably by spelling
	pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
		self.0.get_mut(key)
	}

	/// Remove a value, keeping the order of the remaining entries
	pub fn remove(&mut self, key: &str) -> Option<Value> {
		self.0.shift_remove(key)
	}

	/// Whether the key exists
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Entry API on the underlying map
	pub fn entry(&mut self, key: impl Into<NodeField>) -> indexmap::map::Entry<'_, NodeField, Value> {
		self.0.entry(key.into())
	}

	/// Iterate over all entries in insertion order
	pub fn iter(&self) -> indexmap::map::Iter<'_, NodeField, Value> {
		self.0.iter()
	}

	/// Iterate over entries with element names, skipping reserved keys
	pub fn named(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.0.iter().filter_map(|(k, v)| k.name().map(|name| (name, v)))
	}

	/// The `@attributes` record, if present
	pub fn attributes(&self) -> Option<&Self> {
		self.get(ATTRIBUTES_KEY).and_then(Value::as_record)
	}

	/// The `@attributes` record, if present
	pub fn attributes_mut(&mut self) -> Option<&mut Self> {
		self.0.get_mut(ATTRIBUTES_KEY).and_then(Value::as_record_mut)
	}

	/// Insert into the `@attributes` record, creating it if missing
	///
	/// A non-record value stored under `@attributes` is replaced.
	pub fn insert_attribute(&mut self, key: impl Into<NodeField>, value: impl Into<Value>) -> Option<Value> {
		let slot = self.0.entry(NodeField::Attributes).or_insert_with(|| Value::Record(Self::new()));
		match slot {
			Value::Record(attributes) => attributes.insert(key, value),
			other => {
				*other = Value::Record(Self::new().with(key, value));
				None
			},
		}
	}
}

impl<K: Into<NodeField>, V: Into<Value>> FromIterator<(K, V)> for Record {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}

impl IntoIterator for Record {
	type Item = (NodeField, Value);
	type IntoIter = indexmap::map::IntoIter<NodeField, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a Record {
	type Item = (&'a NodeField, &'a Value);
	type IntoIter = indexmap::map::Iter<'a, NodeField, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn reserved_spellings_become_variants() {
		assert!(matches!(NodeField::from("@attributes"), NodeField::Attributes));
		assert!(matches!(NodeField::from("@data".to_string()), NodeField::Data));
		assert!(matches!(NodeField::from("@cdata"), NodeField::Cdata));
		assert_eq!(NodeField::from("item").name(), Some("item"));
	}

	#[test]
	fn named_spelled_like_reserved_is_the_same_key() {
		let mut r = Record::new();
		r.insert(NodeField::Named(DATA_KEY.into()), "a");
		r.insert(NodeField::Data, "b");
		assert_eq!(r.len(), 1);
		assert_eq!(r.get("@data"), Some(&Value::from("b")));
	}

	#[test]
	fn named_skips_reserved() {
		let r = Record::new()
			.with("@attributes", Record::new().with("id", 1))
			.with("a", "x")
			.with("@data", "y")
			.with("b", "z");
		let names: Vec<&str> = r.named().map(|(k, _)| k).collect();
		assert_eq!(names, ["a", "b"]);
	}

	#[test]
	fn insert_attribute_creates_and_replaces() {
		let mut r = Record::new().with("@attributes", "oops");
		assert!(r.attributes_mut().is_none());
		assert_eq!(r.insert_attribute("id", "1"), None);
		assert_eq!(r.insert_attribute("id", "2"), Some(Value::from("1")));
		assert_eq!(r.attributes(), Some(&Record::new().with("id", "2")));

		let mut empty = Record::new();
		empty.insert_attribute("a", "x");
		if let Some(attributes) = empty.attributes_mut() {
			attributes.insert("b", "y");
		}
		assert_eq!(empty.attributes(), Some(&Record::new().with("a", "x").with("b", "y")));
	}

	#[test]
	fn scalar_text() {
		assert_eq!(Scalar::Null.to_text(), None);
		assert_eq!(Scalar::Bool(true).to_text().as_deref(), Some("true"));
		assert_eq!(Scalar::Integer(-4).to_text().as_deref(), Some("-4"));
		assert_eq!(Scalar::Float(1.5).to_text().as_deref(), Some("1.5"));
	}
}
