//! Mapping of values to XML elements, and the traits serializer adaptors implement
//!
//! [`NodeDescriptor::resolve`] decides what a `(key, value)` pair of a record becomes in XML;
//! descriptors implement `Element`, so any `Serializer` can write them.
//!
//! To implement serialize adaptors for an XML library you need to implement `Serializer`.

mod core;
mod descriptor;
pub(crate) mod engine;

pub use self::{
	core::{
		Element,
		Serializer,
	},
	descriptor::{
		Children,
		NodeDescriptor,
	},
	engine::resolve_root,
};
