//! Traits to drive an XML parser into a document tree
//!
//! Parser adaptors for an XML library implement `ElementParser`: they feed attributes, text,
//! CDATA and nested elements of one element into an `ElementState`. `TreeBuilder` is the state
//! that collects everything into a [`dom::Element`](crate::dom::Element).

mod core;
mod extensions;
mod tree;

pub use self::{
	core::{
		ElementParser,
		ElementState,
	},
	extensions::ElementParserExt,
	tree::TreeBuilder,
};
