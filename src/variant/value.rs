use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::variant::types::Vector3;
use crate::variant::{Result, VariantError};

/// Decoded, self-describing value tree node.
///
/// This is the output of the decoder's first phase: it carries no knowledge
/// of any destination type and exists purely between the wire and the
/// structural mapper. Serializes as plain JSON values for inspection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Variant {
	/// 32-bit signed integer scalar.
	Int(i32),
	/// 32-bit float scalar.
	Float(f32),
	/// UTF-8 text.
	Str(String),
	/// Fixed 3-component float record.
	Vector3(Vector3),
	/// Homogeneous 32-bit integer sequence.
	IntArray(Vec<i32>),
	/// Homogeneous 32-bit float sequence.
	FloatArray(Vec<f32>),
	/// Heterogeneous sequence.
	Array(Vec<Variant>),
	/// Keyed record with text keys.
	Dict(Dictionary),
}

impl Variant {
	/// Render the node kind as a stable lowercase label.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Int(_) => "int",
			Self::Float(_) => "float",
			Self::Str(_) => "string",
			Self::Vector3(_) => "vector3",
			Self::IntArray(_) => "int_array",
			Self::FloatArray(_) => "float_array",
			Self::Array(_) => "array",
			Self::Dict(_) => "dictionary",
		}
	}

	/// Coerce this node to dictionary key text.
	///
	/// Only text nodes are key-coercible; every other kind fails with
	/// [`VariantError::KeyNotText`].
	pub fn key_text(&self) -> Result<&str> {
		match self {
			Self::Str(text) => Ok(text),
			other => Err(VariantError::KeyNotText { kind: other.kind() }),
		}
	}
}

/// Insertion-ordered mapping from text keys to variant nodes.
///
/// Iteration follows insertion order, which is also the pair order the
/// encoder emits. The wire format itself guarantees no key order, so decoded
/// order is whatever the producer wrote. Inserting an existing key replaces
/// its value in place: last write wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
	entries: Vec<(String, Variant)>,
}

impl Dictionary {
	/// Create an empty dictionary.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of key/value pairs.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True when no pairs are present.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Insert a pair; an existing key keeps its slot and takes the new value.
	pub fn insert(&mut self, key: impl Into<String>, value: Variant) {
		let key = key.into();
		if let Some(slot) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
			slot.1 = value;
		} else {
			self.entries.push((key, value));
		}
	}

	/// Look up a value by key.
	pub fn get(&self, key: &str) -> Option<&Variant> {
		self.entries.iter().find(|(existing, _)| existing == key).map(|(_, value)| value)
	}

	/// Iterate pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Variant)> {
		self.entries.iter().map(|(key, value)| (key.as_str(), value))
	}
}

impl FromIterator<(String, Variant)> for Dictionary {
	fn from_iter<I: IntoIterator<Item = (String, Variant)>>(iter: I) -> Self {
		let mut dict = Self::new();
		for (key, value) in iter {
			dict.insert(key, value);
		}
		dict
	}
}

impl Serialize for Dictionary {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.len()))?;
		for (key, value) in self.iter() {
			map.serialize_entry(key, value)?;
		}
		map.end()
	}
}
