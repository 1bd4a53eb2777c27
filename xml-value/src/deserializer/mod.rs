//! Mapping of parsed XML documents to values
//!
//! [`document_to_value`] walks a [`dom::Document`](crate::dom::Document) and asks a
//! [`CollectionShape`] strategy whether the children of an element form a positional collection;
//! [`lift_namespaces`] afterwards copies namespace declarations into the root attributes.

mod engine;
mod namespace;
mod shape;

pub use self::{
	engine::document_to_value,
	namespace::lift_namespaces,
	shape::{
		CollectionShape,
		NameRepetition,
		SchemaHints,
		SingleName,
	},
};
