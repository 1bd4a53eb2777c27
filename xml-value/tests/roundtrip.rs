//! Property-based round-trip of records through XML
//!
//! Generated records only use shapes the conventions map back unambiguously: text leaves (empty text
//! included), text next to at least one attribute, and records with at least two distinct child names.

use proptest::prelude::*;
use std::collections::HashMap;
use xml_value::{
	Record,
	Value,
};

fn element_name() -> impl Strategy<Value = String> {
	"e[a-z0-9_]{0,6}"
}

fn text() -> impl Strategy<Value = String> {
	"([a-zA-Z0-9&<>'\"][a-zA-Z0-9 &<>'\"]{0,10})?"
}

fn attributes(size: std::ops::Range<usize>) -> impl Strategy<Value = HashMap<String, String>> {
	prop::collection::hash_map("a[a-z0-9]{0,5}", "[a-zA-Z0-9 &<>]{0,8}", size)
}

fn with_attributes(mut record: Record, attributes: HashMap<String, String>) -> Record {
	if !attributes.is_empty() {
		record.insert("@attributes", attributes.into_iter().collect::<Record>());
	}
	record
}

fn arb_element() -> impl Strategy<Value = Value> {
	let leaf = prop_oneof![
		text().prop_map(Value::from),
		(attributes(1..3), text())
			.prop_map(|(attrs, text)| Value::from(with_attributes(Record::new(), attrs).with("@data", text))),
		attributes(0..3).prop_map(|attrs| Value::from(with_attributes(Record::new(), attrs))),
	];
	leaf.prop_recursive(4, 64, 4, |inner| {
		(attributes(0..3), prop::collection::hash_map(element_name(), inner, 2..5)).prop_map(|(attrs, children)| {
			let record = children.into_iter().collect::<Record>();
			Value::from(with_attributes(record, attrs))
		})
	})
}

proptest! {
	#[test]
	fn record_round_trip(name in element_name(), root in arb_element()) {
		let data = Value::from(Record::new().with(name, root));
		let xml = xml_value::serialize(&data).unwrap();
		let parsed = xml_value::deserialize_xml_to_data(&xml).unwrap();
		prop_assert_eq!(parsed, data);
	}

	#[test]
	fn garbage_never_panics(input in "[<>/a-z =\"&;!\\[\\]-]{0,40}") {
		let _ = xml_value::deserialize_xml_to_data(&input);
	}
}
