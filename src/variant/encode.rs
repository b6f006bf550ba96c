use std::collections::{BTreeMap, HashMap};
use std::io::Write;

use crate::variant::marshal::VariantMarshal;
use crate::variant::types::{Float, Integer, Vector3};
use crate::variant::value::{Dictionary, Variant};
use crate::variant::{Result, Tag, wire};

/// Classify a native value into its wire-shape verdict.
///
/// Implementing this trait is the classification step: scalars of any width
/// alias to the 32-bit wire scalars (truncating, by contract), sequences pick
/// their homogeneous or heterogeneous form from the element type, and record
/// types build a [`Dictionary`] in field declaration order. Shapes without an
/// impl have no wire representation and are rejected at compile time.
///
/// Types carrying a [`VariantMarshal`] impl take priority over every rule
/// here: their `to_variant` yields the node the encoder routes back through
/// the custom wire image.
pub trait ToVariant {
	/// Build the dynamic node this value encodes as.
	fn to_variant(&self) -> Variant;
}

macro_rules! int_to_variant {
	($($ty:ty),* $(,)?) => {
		$(
			impl ToVariant for $ty {
				fn to_variant(&self) -> Variant {
					Variant::Int(*self as i32)
				}
			}

			impl ToVariant for [$ty] {
				fn to_variant(&self) -> Variant {
					Variant::IntArray(self.iter().map(|elem| *elem as i32).collect())
				}
			}

			impl ToVariant for Vec<$ty> {
				fn to_variant(&self) -> Variant {
					self.as_slice().to_variant()
				}
			}
		)*
	};
}

int_to_variant!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! float_to_variant {
	($($ty:ty),* $(,)?) => {
		$(
			impl ToVariant for $ty {
				fn to_variant(&self) -> Variant {
					Variant::Float(*self as f32)
				}
			}

			impl ToVariant for [$ty] {
				fn to_variant(&self) -> Variant {
					Variant::FloatArray(self.iter().map(|elem| *elem as f32).collect())
				}
			}

			impl ToVariant for Vec<$ty> {
				fn to_variant(&self) -> Variant {
					self.as_slice().to_variant()
				}
			}
		)*
	};
}

float_to_variant!(f32, f64);

impl ToVariant for str {
	fn to_variant(&self) -> Variant {
		Variant::Str(self.to_owned())
	}
}

impl ToVariant for String {
	fn to_variant(&self) -> Variant {
		Variant::Str(self.clone())
	}
}

impl ToVariant for [String] {
	fn to_variant(&self) -> Variant {
		Variant::Array(self.iter().map(|elem| elem.to_variant()).collect())
	}
}

impl ToVariant for Vec<String> {
	fn to_variant(&self) -> Variant {
		self.as_slice().to_variant()
	}
}

impl ToVariant for [Variant] {
	fn to_variant(&self) -> Variant {
		Variant::Array(self.to_vec())
	}
}

impl ToVariant for Vec<Variant> {
	fn to_variant(&self) -> Variant {
		Variant::Array(self.clone())
	}
}

impl ToVariant for Variant {
	fn to_variant(&self) -> Variant {
		self.clone()
	}
}

impl ToVariant for Dictionary {
	fn to_variant(&self) -> Variant {
		Variant::Dict(self.clone())
	}
}

impl<V: ToVariant> ToVariant for HashMap<String, V> {
	fn to_variant(&self) -> Variant {
		let mut dict = Dictionary::new();
		for (key, value) in self {
			dict.insert(key.clone(), value.to_variant());
		}
		Variant::Dict(dict)
	}
}

impl<V: ToVariant> ToVariant for BTreeMap<String, V> {
	fn to_variant(&self) -> Variant {
		let mut dict = Dictionary::new();
		for (key, value) in self {
			dict.insert(key.clone(), value.to_variant());
		}
		Variant::Dict(dict)
	}
}

impl ToVariant for Integer {
	fn to_variant(&self) -> Variant {
		Variant::Int(self.0)
	}
}

impl ToVariant for Float {
	fn to_variant(&self) -> Variant {
		Variant::Float(self.0)
	}
}

impl ToVariant for Vector3 {
	fn to_variant(&self) -> Variant {
		Variant::Vector3(*self)
	}
}

/// Streaming encoder writing tagged variant values to an output stream.
///
/// Writes are strictly sequential; a stream error mid-value leaves the output
/// truncated, with no rollback.
pub struct Encoder<W> {
	w: W,
}

impl<W: Write> Encoder<W> {
	/// Wrap an output stream.
	pub fn new(w: W) -> Self {
		Self { w }
	}

	/// Consume the encoder and return the underlying stream.
	pub fn into_inner(self) -> W {
		self.w
	}

	/// Classify and encode one value.
	pub fn encode<T: ToVariant + ?Sized>(&mut self, value: &T) -> Result<()> {
		self.encode_variant(&value.to_variant())
	}

	/// Write a value through its custom wire image, bypassing classification.
	pub fn encode_custom<T: VariantMarshal + ?Sized>(&mut self, value: &T) -> Result<()> {
		let data = value.marshal_variant()?;
		self.write_padded(&data)
	}

	/// Encode one dynamic node, recursing through nested values.
	pub fn encode_variant(&mut self, value: &Variant) -> Result<()> {
		match value {
			Variant::Int(v) => {
				wire::write_u32(&mut self.w, Tag::Int.code())?;
				wire::write_i32(&mut self.w, *v)
			}
			Variant::Float(v) => {
				wire::write_u32(&mut self.w, Tag::Float.code())?;
				wire::write_f32(&mut self.w, *v)
			}
			Variant::Str(text) => self.encode_str(text),
			Variant::Vector3(v) => self.encode_custom(v),
			Variant::IntArray(elems) => {
				wire::write_u32(&mut self.w, Tag::IntArray.code())?;
				wire::write_u32(&mut self.w, elems.len() as u32)?;
				for elem in elems {
					wire::write_i32(&mut self.w, *elem)?;
				}
				Ok(())
			}
			Variant::FloatArray(elems) => {
				wire::write_u32(&mut self.w, Tag::FloatArray.code())?;
				wire::write_u32(&mut self.w, elems.len() as u32)?;
				for elem in elems {
					wire::write_f32(&mut self.w, *elem)?;
				}
				Ok(())
			}
			Variant::Array(elems) => {
				wire::write_u32(&mut self.w, Tag::Array.code())?;
				self.write_counted_header(elems.len())?;
				for elem in elems {
					self.encode_variant(elem)?;
				}
				Ok(())
			}
			Variant::Dict(dict) => {
				wire::write_u32(&mut self.w, Tag::Dictionary.code())?;
				self.write_counted_header(dict.len())?;
				for (key, value) in dict.iter() {
					self.encode_str(key)?;
					self.encode_variant(value)?;
				}
				Ok(())
			}
		}
	}

	fn encode_str(&mut self, text: &str) -> Result<()> {
		wire::write_u32(&mut self.w, Tag::Str.code())?;
		wire::write_u32(&mut self.w, text.len() as u32)?;
		self.w.write_all(text.as_bytes())?;
		wire::write_padding(&mut self.w, text.len())
	}

	fn write_counted_header(&mut self, count: usize) -> Result<()> {
		let header = wire::SHARED_BIT | (count as u32 & wire::COUNT_MASK);
		wire::write_u32(&mut self.w, header)
	}

	fn write_padded(&mut self, data: &[u8]) -> Result<()> {
		self.w.write_all(data)?;
		wire::write_padding(&mut self.w, data.len())
	}
}

/// Encode one value into a fresh byte buffer.
pub fn encode_to_vec<T: ToVariant + ?Sized>(value: &T) -> Result<Vec<u8>> {
	let mut enc = Encoder::new(Vec::new());
	enc.encode(value)?;
	Ok(enc.into_inner())
}
