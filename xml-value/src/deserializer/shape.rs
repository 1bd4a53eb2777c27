use crate::dom::Element;
use std::collections::HashSet;

/// Decides whether the element children of an element form a positional collection
///
/// A collection deserializes into a sequence of single-key records; anything else into a
/// record keyed by child name.
pub trait CollectionShape {
	/// Whether the element children of `element` are collection-shaped
	fn is_collection(&self, element: &Element) -> bool;
}

impl<S: CollectionShape + ?Sized> CollectionShape for &S {
	fn is_collection(&self, element: &Element) -> bool {
		(**self).is_collection(element)
	}
}

impl<S: CollectionShape + ?Sized> CollectionShape for Box<S> {
	fn is_collection(&self, element: &Element) -> bool {
		(**self).is_collection(element)
	}
}

/// Default heuristic: two or more element children, all with the same tag name
///
/// Text and CDATA are ignored. This can't tell a one-item list from a single-field record; the
/// latter wins. Use [`SingleName`] to read single children as collections, or [`SchemaHints`]
/// when the document schema is known.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NameRepetition;

impl CollectionShape for NameRepetition {
	fn is_collection(&self, element: &Element) -> bool {
		uniform_children(element) > 1
	}
}

/// One or more element children, all with the same tag name
///
/// A single child always makes a collection, so a record whose only field is an element
/// (`<r><c>1</c></r>`) reads as `[{c: ..}]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SingleName;

impl CollectionShape for SingleName {
	fn is_collection(&self, element: &Element) -> bool {
		uniform_children(element) > 0
	}
}

/// Number of element children if they all share one tag name, otherwise 0
fn uniform_children(element: &Element) -> usize {
	let mut children = element.elements();
	let first = match children.next() {
		Some(first) => first,
		None => return 0,
	};
	let mut count = 1;
	for child in children {
		if child.name != first.name {
			return 0;
		}
		count += 1;
	}
	count
}

/// Explicit per-element decisions, falling back to another strategy
#[derive(Clone, Debug, Default)]
pub struct SchemaHints<S = NameRepetition> {
	collections: HashSet<String>,
	records: HashSet<String>,
	fallback: S,
}

impl SchemaHints {
	/// Hints on top of [`NameRepetition`]
	pub fn new() -> Self {
		Self::default()
	}
}

impl<S> SchemaHints<S> {
	/// Hints on top of a custom strategy
	pub fn with_fallback(fallback: S) -> Self {
		Self {
			collections: HashSet::new(),
			records: HashSet::new(),
			fallback,
		}
	}

	/// Children of elements named `name` always form a collection (even a single child)
	pub fn collection(mut self, name: impl Into<String>) -> Self {
		let name = name.into();
		self.records.remove(&name);
		self.collections.insert(name);
		self
	}

	/// Children of elements named `name` always form a record
	pub fn record(mut self, name: impl Into<String>) -> Self {
		let name = name.into();
		self.collections.remove(&name);
		self.records.insert(name);
		self
	}
}

impl<S: CollectionShape> CollectionShape for SchemaHints<S> {
	fn is_collection(&self, element: &Element) -> bool {
		if self.collections.contains(&element.name) {
			element.has_elements()
		} else if self.records.contains(&element.name) {
			false
		} else {
			self.fallback.is_collection(element)
		}
	}
}
