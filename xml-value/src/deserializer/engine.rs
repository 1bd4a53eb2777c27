//! Builds values from a parsed document tree

use crate::{
	config::{
		self,
		Config,
	},
	deserializer::CollectionShape,
	dom::{
		Document,
		Element,
	},
	errors::{
		self,
		DeserializeError,
	},
	value::{
		NodeField,
		Record,
		Sequence,
		Value,
	},
};

/// Convert a document into `{rootName: rootValue}`
///
/// Namespace declarations are not part of the result; see
/// [`lift_namespaces`](crate::deserializer::lift_namespaces).
pub fn document_to_value<S>(document: &Document, shape: &S, config: &Config) -> Result<Value, DeserializeError>
where
	S: CollectionShape + ?Sized,
{
	let builder = Builder { shape, max_depth: config.max_depth };
	let root = builder.element(&document.root, 1)?;
	Ok(Value::Record(Record::new().with(document.root.name.as_str(), root)))
}

struct Builder<'s, S: ?Sized> {
	shape: &'s S,
	max_depth: usize,
}

impl<S: CollectionShape + ?Sized> Builder<'_, S> {
	fn element(&self, element: &Element, depth: usize) -> Result<Value, DeserializeError> {
		if config::depth_exceeded(self.max_depth, depth) {
			return Err(errors::parse_depth_exceeded(self.max_depth));
		}

		let mut record = Record::new();
		if !element.attributes.is_empty() {
			let attributes: Record = element
				.attributes
				.iter()
				.map(|(key, value)| (key.as_str(), value.as_str()))
				.collect();
			record.insert(NodeField::Attributes, attributes);
		}

		let has_elements = element.has_elements();
		let cdata = element.cdata();
		// whitespace between elements (or around CDATA) is formatting, not content
		let text = element
			.text()
			.filter(|text| !(text.trim().is_empty() && (has_elements || cdata.is_some())));

		if record.is_empty() && !has_elements && cdata.is_none() {
			if let Some(text) = text {
				log::trace!("<{}>: text only", element.name);
				return Ok(Value::from(text));
			}
		}
		if let Some(cdata) = cdata {
			record.insert(NodeField::Cdata, cdata);
		}
		if let Some(text) = text {
			record.insert(NodeField::Data, text);
		}
		if !has_elements {
			return Ok(Value::Record(record));
		}

		if self.shape.is_collection(element) {
			log::trace!("<{}>: collection", element.name);
			let mut items = Sequence::new();
			for child in element.elements() {
				let value = self.element(child, depth + 1)?;
				items.push(Value::Record(Record::new().with(child.name.as_str(), value)));
			}
			if record.is_empty() {
				return Ok(Value::Sequence(items));
			}
			store_items(&mut record, items);
		} else {
			log::trace!("<{}>: record", element.name);
			for child in element.elements() {
				let value = self.element(child, depth + 1)?;
				record.insert(child.name.as_str(), value);
			}
		}
		Ok(Value::Record(record))
	}
}

/// Store single-key items in a record that also has other content
///
/// Items are grouped under their own key, so `{item: [{item: ..}, ..]}`; the serializer writes
/// such a sequence back as siblings without a wrapping element.
pub(crate) fn store_items(record: &mut Record, items: Sequence) {
	for item in items {
		let name = match item.as_record().and_then(|r| r.named().next()) {
			Some((name, _)) => name.to_owned(),
			None => {
				log::warn!("collection item without element name dropped: {:?}", item);
				continue;
			},
		};
		let slot = record.entry(name).or_insert_with(|| Value::Sequence(Sequence::new()));
		match slot {
			Value::Sequence(group) => group.push(item),
			other => *other = Value::Sequence(vec![item]),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		deserializer::{
			NameRepetition,
			SchemaHints,
		},
		dom::Node,
	};

	fn leaf(name: &str, text: &str) -> Node {
		let mut e = Element::new(name);
		e.children.push(Node::Text(text.into()));
		Node::Element(e)
	}

	fn build(root: Element) -> Value {
		document_to_value(&Document { root }, &NameRepetition, &Config::default()).unwrap()
	}

	#[test]
	fn text_only_is_scalar() {
		let mut root = Element::new("r");
		root.children = vec![leaf("a", "1"), leaf("b", " ")];
		assert_eq!(
			build(root),
			Value::from(Record::new().with("r", Record::new().with("a", "1").with("b", " ")))
		);
	}

	#[test]
	fn attributes_push_text_to_data() {
		let mut root = Element::new("x");
		root.attributes.push(("id".into(), "1".into()));
		root.children.push(Node::Text("hi".into()));
		let expected = Record::new()
			.with("@attributes", Record::new().with("id", "1"))
			.with("@data", "hi");
		assert_eq!(build(root), Value::from(Record::new().with("x", expected)));
	}

	#[test]
	fn empty_element_is_empty_record() {
		assert_eq!(
			build(Element::new("e")),
			Value::from(Record::new().with("e", Record::new()))
		);
	}

	#[test]
	fn cdata_and_formatting_whitespace() {
		let mut root = Element::new("x");
		root.children = vec![
			Node::Text("\n  ".into()),
			Node::CData("<raw>".into()),
			Node::Text("\n".into()),
		];
		assert_eq!(
			build(root),
			Value::from(Record::new().with("x", Record::new().with("@cdata", "<raw>")))
		);
	}

	#[test]
	fn repeated_children_become_sequence() {
		let mut root = Element::new("items");
		root.children = vec![
			Node::Text("\n".into()),
			leaf("item", "a"),
			Node::Text("\n".into()),
			leaf("item", "a2"),
		];
		let expected = vec![
			Value::from(Record::new().with("item", "a")),
			Value::from(Record::new().with("item", "a2")),
		];
		assert_eq!(build(root), Value::from(Record::new().with("items", expected)));
	}

	#[test]
	fn collection_with_attributes_is_grouped() {
		let mut root = Element::new("items");
		root.attributes.push(("n".into(), "2".into()));
		root.children = vec![leaf("item", "a"), leaf("item", "b")];
		let expected = Record::new()
			.with("@attributes", Record::new().with("n", "2"))
			.with(
				"item",
				vec![
					Value::from(Record::new().with("item", "a")),
					Value::from(Record::new().with("item", "b")),
				],
			);
		assert_eq!(build(root), Value::from(Record::new().with("items", expected)));
	}

	#[test]
	fn mixed_content_keeps_text() {
		let mut root = Element::new("p");
		root.children = vec![Node::Text("hello ".into()), leaf("b", "x")];
		let expected = Record::new().with("@data", "hello ").with("b", "x");
		assert_eq!(build(root), Value::from(Record::new().with("p", expected)));
	}

	#[test]
	fn hints_force_single_item_collection() {
		let mut root = Element::new("list");
		root.children = vec![leaf("item", "only")];
		let shape = SchemaHints::new().collection("list");
		let value = document_to_value(&Document { root }, &shape, &Config::default()).unwrap();
		let expected = vec![Value::from(Record::new().with("item", "only"))];
		assert_eq!(value, Value::from(Record::new().with("list", expected)));
	}

	#[test]
	fn depth_limit() {
		let mut root = Element::new("a");
		root.children = vec![leaf("b", "x")];
		let config = Config::default().with_max_depth(1);
		assert!(matches!(
			document_to_value(&Document { root }, &NameRepetition, &config),
			Err(DeserializeError::DepthExceeded { max: 1 })
		));
	}
}
