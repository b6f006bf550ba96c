use std::collections::{BTreeMap, HashMap};

use crate::variant::types::{Float, Integer, Vector3};
use crate::variant::value::{Dictionary, Variant};
use crate::variant::{Result, VariantError};

/// Populate a caller-allocated destination from a decoded dynamic tree.
///
/// This is the second phase of decoding. Matching is structural: scalars
/// coerce by ordinary widening and narrowing rules, sequences map
/// element-wise, and record destinations look their fields up by key,
/// leaving unmatched fields at their prior value and ignoring unmatched
/// keys. A fundamentally incompatible shape fails with
/// [`VariantError::Mapping`].
pub trait FromVariant {
	/// Assign this destination from a dynamic node.
	fn assign_variant(&mut self, value: &Variant) -> Result<()>;
}

fn mismatch(expected: &'static str, value: &Variant) -> VariantError {
	VariantError::Mapping {
		expected,
		got: value.kind(),
	}
}

macro_rules! signed_from_variant {
	($($ty:ty),* $(,)?) => {
		$(
			impl FromVariant for $ty {
				fn assign_variant(&mut self, value: &Variant) -> Result<()> {
					match value {
						// Sign-extend or truncate per the destination width.
						Variant::Int(v) => *self = *v as $ty,
						Variant::Float(v) => *self = *v as $ty,
						other => return Err(mismatch(stringify!($ty), other)),
					}
					Ok(())
				}
			}
		)*
	};
}

signed_from_variant!(i8, i16, i32, i64);

macro_rules! unsigned_from_variant {
	($($ty:ty),* $(,)?) => {
		$(
			impl FromVariant for $ty {
				fn assign_variant(&mut self, value: &Variant) -> Result<()> {
					match value {
						// Zero-extend the raw 32-bit wire pattern.
						Variant::Int(v) => *self = (*v as u32) as $ty,
						Variant::Float(v) => *self = *v as $ty,
						other => return Err(mismatch(stringify!($ty), other)),
					}
					Ok(())
				}
			}
		)*
	};
}

unsigned_from_variant!(u8, u16, u32, u64);

macro_rules! float_from_variant {
	($($ty:ty),* $(,)?) => {
		$(
			impl FromVariant for $ty {
				fn assign_variant(&mut self, value: &Variant) -> Result<()> {
					match value {
						Variant::Float(v) => *self = *v as $ty,
						Variant::Int(v) => *self = *v as $ty,
						other => return Err(mismatch(stringify!($ty), other)),
					}
					Ok(())
				}
			}
		)*
	};
}

float_from_variant!(f32, f64);

impl FromVariant for String {
	fn assign_variant(&mut self, value: &Variant) -> Result<()> {
		let Variant::Str(text) = value else {
			return Err(mismatch("string", value));
		};

		self.clear();
		self.push_str(text);
		Ok(())
	}
}

impl FromVariant for Integer {
	fn assign_variant(&mut self, value: &Variant) -> Result<()> {
		match value {
			Variant::Int(v) => self.0 = *v,
			Variant::Float(v) => self.0 = *v as i32,
			other => return Err(mismatch("int", other)),
		}
		Ok(())
	}
}

impl FromVariant for Float {
	fn assign_variant(&mut self, value: &Variant) -> Result<()> {
		match value {
			Variant::Float(v) => self.0 = *v,
			Variant::Int(v) => self.0 = *v as f32,
			other => return Err(mismatch("float", other)),
		}
		Ok(())
	}
}

impl FromVariant for Vector3 {
	fn assign_variant(&mut self, value: &Variant) -> Result<()> {
		let Variant::Vector3(v) = value else {
			return Err(mismatch("vector3", value));
		};

		*self = *v;
		Ok(())
	}
}

impl FromVariant for Variant {
	fn assign_variant(&mut self, value: &Variant) -> Result<()> {
		*self = value.clone();
		Ok(())
	}
}

impl FromVariant for Dictionary {
	fn assign_variant(&mut self, value: &Variant) -> Result<()> {
		let Variant::Dict(dict) = value else {
			return Err(mismatch("dictionary", value));
		};

		*self = dict.clone();
		Ok(())
	}
}

impl<T: FromVariant + Default> FromVariant for Vec<T> {
	fn assign_variant(&mut self, value: &Variant) -> Result<()> {
		self.clear();
		match value {
			Variant::Array(elems) => {
				for elem in elems {
					let mut slot = T::default();
					slot.assign_variant(elem)?;
					self.push(slot);
				}
			}
			Variant::IntArray(elems) => {
				for elem in elems {
					let mut slot = T::default();
					slot.assign_variant(&Variant::Int(*elem))?;
					self.push(slot);
				}
			}
			Variant::FloatArray(elems) => {
				for elem in elems {
					let mut slot = T::default();
					slot.assign_variant(&Variant::Float(*elem))?;
					self.push(slot);
				}
			}
			other => return Err(mismatch("sequence", other)),
		}
		Ok(())
	}
}

impl<T: FromVariant + Default> FromVariant for HashMap<String, T> {
	fn assign_variant(&mut self, value: &Variant) -> Result<()> {
		let Variant::Dict(dict) = value else {
			return Err(mismatch("dictionary", value));
		};

		self.clear();
		for (key, node) in dict.iter() {
			let mut slot = T::default();
			slot.assign_variant(node)?;
			self.insert(key.to_owned(), slot);
		}
		Ok(())
	}
}

impl<T: FromVariant + Default> FromVariant for BTreeMap<String, T> {
	fn assign_variant(&mut self, value: &Variant) -> Result<()> {
		let Variant::Dict(dict) = value else {
			return Err(mismatch("dictionary", value));
		};

		self.clear();
		for (key, node) in dict.iter() {
			let mut slot = T::default();
			slot.assign_variant(node)?;
			self.insert(key.to_owned(), slot);
		}
		Ok(())
	}
}
