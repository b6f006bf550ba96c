use serde::Serialize;

use crate::variant::marshal::{VariantMarshal, VariantUnmarshal};
use crate::variant::{Result, Tag, VariantError, wire};

/// Explicit 32-bit signed integer scalar.
///
/// Numeric alias carrying its own wire image so a field can be pinned to the
/// scalar-integer encoding regardless of the native width it came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Integer(pub i32);

impl VariantMarshal for Integer {
	fn marshal_variant(&self) -> Result<Vec<u8>> {
		let mut out = Vec::with_capacity(8);
		out.extend_from_slice(&wire::u32_to_bytes(Tag::Int.code()));
		out.extend_from_slice(&wire::i32_to_bytes(self.0));
		Ok(out)
	}
}

impl VariantUnmarshal for Integer {
	const WIRE_SIZE: usize = 4;

	fn unmarshal_variant(&mut self, data: &[u8]) -> Result<()> {
		self.0 = wire::i32_from_bytes(data)?;
		Ok(())
	}
}

/// Explicit 32-bit IEEE-754 float scalar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Float(pub f32);

impl VariantMarshal for Float {
	fn marshal_variant(&self) -> Result<Vec<u8>> {
		let mut out = Vec::with_capacity(8);
		out.extend_from_slice(&wire::u32_to_bytes(Tag::Float.code()));
		out.extend_from_slice(&wire::f32_to_bytes(self.0));
		Ok(out)
	}
}

impl VariantUnmarshal for Float {
	const WIRE_SIZE: usize = 4;

	fn unmarshal_variant(&mut self, data: &[u8]) -> Result<()> {
		self.0 = wire::f32_from_bytes(data)?;
		Ok(())
	}
}

/// Fixed 3-component float record.
///
/// Encodes through the custom wire image as tag plus three raw `f32` words.
/// Without that override it would classify as a keyed record of its fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vector3 {
	/// X component.
	pub x: f32,
	/// Y component.
	pub y: f32,
	/// Z component.
	pub z: f32,
}

impl Vector3 {
	/// Build a vector from its components.
	pub fn new(x: f32, y: f32, z: f32) -> Self {
		Self { x, y, z }
	}
}

impl VariantMarshal for Vector3 {
	fn marshal_variant(&self) -> Result<Vec<u8>> {
		let mut out = Vec::with_capacity(16);
		out.extend_from_slice(&wire::u32_to_bytes(Tag::Vector3.code()));
		out.extend_from_slice(&wire::f32_to_bytes(self.x));
		out.extend_from_slice(&wire::f32_to_bytes(self.y));
		out.extend_from_slice(&wire::f32_to_bytes(self.z));
		Ok(out)
	}
}

impl VariantUnmarshal for Vector3 {
	const WIRE_SIZE: usize = 12;

	fn unmarshal_variant(&mut self, data: &[u8]) -> Result<()> {
		if data.len() < Self::WIRE_SIZE {
			return Err(VariantError::PayloadTooSmall {
				need: Self::WIRE_SIZE,
				have: data.len(),
			});
		}

		self.x = wire::f32_from_bytes(&data[0..4])?;
		self.y = wire::f32_from_bytes(&data[4..8])?;
		self.z = wire::f32_from_bytes(&data[8..12])?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::{Float, Integer, Vector3};
	use crate::variant::marshal::{VariantMarshal, VariantUnmarshal};
	use crate::variant::{VariantError, codes};

	#[test]
	fn integer_wire_image_is_tag_plus_payload() {
		let data = Integer(-3).marshal_variant().expect("integer marshals");
		assert_eq!(data.len(), 8);
		assert_eq!(&data[0..4], &codes::INTEGER.to_le_bytes());
		assert_eq!(&data[4..8], &(-3_i32).to_le_bytes());

		let mut back = Integer::default();
		back.unmarshal_variant(&data[4..]).expect("integer unmarshals");
		assert_eq!(back, Integer(-3));
	}

	#[test]
	fn float_wire_image_is_tag_plus_payload() {
		let data = Float(-5.0).marshal_variant().expect("float marshals");
		assert_eq!(data.len(), 8);
		assert_eq!(&data[0..4], &codes::FLOAT.to_le_bytes());
		assert_eq!(&data[4..8], &(-5.0_f32).to_le_bytes());
	}

	#[test]
	fn vector3_wire_image_is_twelve_byte_payload() {
		let v = Vector3::new(42.0, 4.2, 0.42);
		let data = v.marshal_variant().expect("vector marshals");
		assert_eq!(data.len(), 16);
		assert_eq!(&data[0..4], &codes::VECTOR3.to_le_bytes());

		let mut back = Vector3::default();
		back.unmarshal_variant(&data[4..]).expect("vector unmarshals");
		assert_eq!(back, v);
	}

	#[test]
	fn short_vector3_payload_is_rejected() {
		let mut v = Vector3::default();
		let err = v.unmarshal_variant(&[0_u8; 8]).expect_err("eight bytes should fail");
		assert!(matches!(err, VariantError::PayloadTooSmall { need: 12, have: 8 }));
	}
}
