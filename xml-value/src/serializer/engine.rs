//! Walks resolved descriptors into a `Serializer`

use crate::{
	config::{
		self,
		Config,
	},
	errors::{
		self,
		SerializeError,
	},
	serializer::{
		Children,
		NodeDescriptor,
		Serializer,
	},
	value::Value,
};

/// Resolve the single root element of a document
///
/// The root must be a record with exactly one named key, and that key must not describe a
/// collection (a document has exactly one root element).
pub fn resolve_root<'a>(root: &'a Value, config: &Config) -> Result<NodeDescriptor<'a>, SerializeError> {
	let record = match root {
		Value::Sequence(_) => return Err(SerializeError::RootCollection),
		Value::Scalar(_) => return Err(SerializeError::NoData),
		Value::Record(record) => record,
	};
	let mut named = record.named();
	let (name, value) = named.next().ok_or(SerializeError::NoData)?;
	let others = named.count();
	if others > 0 {
		return Err(SerializeError::MultipleRoots { count: others + 1 });
	}
	let root = NodeDescriptor::nested(name, value, 1, config.max_depth);
	if root.is_collection {
		return Err(SerializeError::RootCollection);
	}
	if config.exceeds_depth(root.depth()) {
		return Err(errors::serialize_depth_exceeded(config.max_depth));
	}
	Ok(root)
}

/// Serialize nested content into the element currently open in `serializer`
///
/// `depth` is the depth of the elements created for `children`.
pub(crate) fn serialize_children<S: Serializer>(
	serializer: &mut S,
	parent: &str,
	children: &Children<'_>,
	depth: usize,
	max_depth: usize,
) -> Result<(), SerializeError> {
	match children {
		Children::None => Ok(()),
		Children::Fields(fields) => {
			for (name, value) in fields {
				serialize_field(serializer, name, value, depth, max_depth)?;
			}
			Ok(())
		},
		Children::Items(items) => {
			for item in items.iter() {
				serialize_item(serializer, parent, item, depth, max_depth)?;
			}
			Ok(())
		},
	}
}

fn serialize_field<S: Serializer>(
	serializer: &mut S,
	name: &str,
	value: &Value,
	depth: usize,
	max_depth: usize,
) -> Result<(), SerializeError> {
	let node = NodeDescriptor::nested(name, value, depth, max_depth);
	if node.is_collection {
		// no wrapping element: the items become siblings right here
		return serialize_children(serializer, name, &node.children, depth, node.max_depth());
	}
	if config::depth_exceeded(max_depth, depth) {
		return Err(errors::serialize_depth_exceeded(max_depth));
	}
	serializer.serialize_element(&node)
}

fn serialize_item<S: Serializer>(
	serializer: &mut S,
	parent: &str,
	item: &Value,
	depth: usize,
	max_depth: usize,
) -> Result<(), SerializeError> {
	match item {
		Value::Record(record) => {
			for (key, _) in record.iter().filter(|(key, _)| key.is_reserved()) {
				log::warn!("<{}>: {} on a sequence item has no element, skipped", parent, key);
			}
			for (name, value) in record.named() {
				serialize_field(serializer, name, value, depth, max_depth)?;
			}
			Ok(())
		},
		Value::Sequence(items) => {
			for item in items {
				serialize_item(serializer, parent, item, depth, max_depth)?;
			}
			Ok(())
		},
		Value::Scalar(_) => Err(errors::unnamed_item(parent)),
	}
}
