use crate::{
	deserializer::engine::store_items,
	dom::Document,
	value::{
		NodeField,
		Record,
		Scalar,
		Value,
	},
};

/// Copy the namespace declarations of `document` into the root attributes of `data`
///
/// `data` is the `{rootName: rootValue}` record built from the same document. The root value is
/// turned into a record first if needed: text moves to `@data`, a collection is stored under its
/// item name.
pub fn lift_namespaces(document: &Document, data: &mut Value) {
	let namespaces = document.namespaces();
	if namespaces.is_empty() {
		return;
	}
	let slot = match data.as_record_mut().and_then(|r| r.get_mut(&document.root.name)) {
		Some(slot) => slot,
		None => {
			log::warn!("no <{}> entry to lift namespaces into", document.root.name);
			return;
		},
	};
	let mut root = into_record(std::mem::take(slot));
	for ns in namespaces {
		let name = ns.name().to_owned();
		log::debug!("lifting namespace {}={:?} into <{}>", name, ns.uri, document.root.name);
		root.insert_attribute(name, ns.uri);
	}
	*slot = Value::Record(root);
}

fn into_record(value: Value) -> Record {
	match value {
		Value::Record(record) => record,
		Value::Scalar(Scalar::Null) => Record::new(),
		Value::Scalar(scalar) => Record::new().with(NodeField::Data, scalar),
		Value::Sequence(items) => {
			let mut record = Record::new();
			store_items(&mut record, items);
			record
		},
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::dom::{
		Element,
		Namespace,
		Node,
	};

	fn document(children: Vec<Node>) -> Document {
		let mut root = Element::new("r");
		root.namespaces.push(Namespace { prefix: Some("a".into()), uri: "urn:x".into() });
		root.namespaces.push(Namespace { prefix: None, uri: "urn:d".into() });
		root.children = children;
		Document { root }
	}

	#[test]
	fn merges_with_existing_attributes() {
		let doc = document(Vec::new());
		let mut data = Value::from(Record::new().with(
			"r",
			Record::new().with("@attributes", Record::new().with("id", "1")),
		));
		lift_namespaces(&doc, &mut data);
		let attributes = data.get("r").and_then(|r| r.get("@attributes")).cloned();
		assert_eq!(
			attributes,
			Some(Value::from(
				Record::new().with("id", "1").with("a", "urn:x").with("xmlns", "urn:d")
			))
		);
	}

	#[test]
	fn text_root_becomes_record() {
		let doc = document(Vec::new());
		let mut data = Value::from(Record::new().with("r", "text"));
		lift_namespaces(&doc, &mut data);
		assert_eq!(data.get("r").and_then(|r| r.get("@data")), Some(&Value::from("text")));
	}

	#[test]
	fn collection_root_is_grouped() {
		let doc = document(Vec::new());
		let items = vec![
			Value::from(Record::new().with("c", "1")),
			Value::from(Record::new().with("c", "2")),
		];
		let mut data = Value::from(Record::new().with("r", items.clone()));
		lift_namespaces(&doc, &mut data);
		assert_eq!(data.get("r").and_then(|r| r.get("c")), Some(&Value::from(items)));
		assert!(data.get("r").and_then(|r| r.get("@attributes")).is_some());
	}

	#[test]
	fn nothing_declared_leaves_data_alone() {
		let doc = Document { root: Element::new("r") };
		let mut data = Value::from(Record::new().with("r", "text"));
		lift_namespaces(&doc, &mut data);
		assert_eq!(data, Value::from(Record::new().with("r", "text")));
	}
}
