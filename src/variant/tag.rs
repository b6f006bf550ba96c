/// Wire codes for every value kind defined by the variant format.
///
/// Only the codes mirrored in [`Tag`] are implemented by this crate. The rest
/// are reserved: decoding a stream that starts with one fails with
/// [`VariantError::UnsupportedTag`](crate::variant::VariantError::UnsupportedTag)
/// rather than coercing to a default value.
pub mod codes {
	/// Null value (reserved).
	pub const NULL: u32 = 0;
	/// Boolean (reserved).
	pub const BOOL: u32 = 1;
	/// 32-bit signed integer scalar.
	pub const INTEGER: u32 = 2;
	/// 32-bit float scalar.
	pub const FLOAT: u32 = 3;
	/// UTF-8 text.
	pub const STRING: u32 = 4;
	/// 2-component float record (reserved).
	pub const VECTOR2: u32 = 5;
	/// 2D rectangle (reserved).
	pub const RECT2: u32 = 6;
	/// 3-component float record.
	pub const VECTOR3: u32 = 7;
	/// 2D transform matrix (reserved).
	pub const MATRIX32: u32 = 8;
	/// Plane (reserved).
	pub const PLANE: u32 = 9;
	/// Quaternion (reserved).
	pub const QUATERNION: u32 = 10;
	/// Axis-aligned bounding box (reserved).
	pub const AABB: u32 = 11;
	/// 3x3 matrix (reserved).
	pub const MATRIX3X3: u32 = 12;
	/// 4x3 transform matrix (reserved).
	pub const TRANSFORM: u32 = 13;
	/// Color (reserved).
	pub const COLOR: u32 = 14;
	/// Image (reserved).
	pub const IMAGE: u32 = 15;
	/// Node path (reserved).
	pub const NODE_PATH: u32 = 16;
	/// Resource id (reserved).
	pub const RID: u32 = 17;
	/// Object reference (reserved).
	pub const OBJECT: u32 = 18;
	/// Input event (reserved).
	pub const INPUT_EVENT: u32 = 19;
	/// Keyed record with text keys.
	pub const DICTIONARY: u32 = 20;
	/// Heterogeneous sequence.
	pub const ARRAY: u32 = 21;
	/// Raw byte sequence (reserved).
	pub const BYTE_ARRAY: u32 = 22;
	/// Homogeneous 32-bit integer sequence.
	pub const INTEGER_ARRAY: u32 = 23;
	/// Homogeneous 32-bit float sequence.
	pub const FLOAT_ARRAY: u32 = 24;
	/// Text sequence (reserved).
	pub const STRING_ARRAY: u32 = 25;
	/// Vector2 sequence (reserved).
	pub const VECTOR2_ARRAY: u32 = 26;
	/// Vector3 sequence (reserved).
	pub const VECTOR3_ARRAY: u32 = 27;
	/// Color sequence (reserved).
	pub const COLOR_ARRAY: u32 = 28;
}

/// Tag subset implemented by this codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
	/// 32-bit signed integer scalar.
	Int,
	/// 32-bit float scalar.
	Float,
	/// UTF-8 text.
	Str,
	/// Fixed 3-component float record.
	Vector3,
	/// Keyed record with text keys.
	Dictionary,
	/// Heterogeneous sequence.
	Array,
	/// Homogeneous 32-bit integer sequence.
	IntArray,
	/// Homogeneous 32-bit float sequence.
	FloatArray,
}

impl Tag {
	/// Map a wire code to an implemented tag.
	pub fn from_code(code: u32) -> Option<Self> {
		match code {
			codes::INTEGER => Some(Self::Int),
			codes::FLOAT => Some(Self::Float),
			codes::STRING => Some(Self::Str),
			codes::VECTOR3 => Some(Self::Vector3),
			codes::DICTIONARY => Some(Self::Dictionary),
			codes::ARRAY => Some(Self::Array),
			codes::INTEGER_ARRAY => Some(Self::IntArray),
			codes::FLOAT_ARRAY => Some(Self::FloatArray),
			_ => None,
		}
	}

	/// Wire code written for this tag.
	pub fn code(self) -> u32 {
		match self {
			Self::Int => codes::INTEGER,
			Self::Float => codes::FLOAT,
			Self::Str => codes::STRING,
			Self::Vector3 => codes::VECTOR3,
			Self::Dictionary => codes::DICTIONARY,
			Self::Array => codes::ARRAY,
			Self::IntArray => codes::INTEGER_ARRAY,
			Self::FloatArray => codes::FLOAT_ARRAY,
		}
	}

	/// Render the tag as a stable lowercase label.
	pub fn name(self) -> &'static str {
		match self {
			Self::Int => "int",
			Self::Float => "float",
			Self::Str => "string",
			Self::Vector3 => "vector3",
			Self::Dictionary => "dictionary",
			Self::Array => "array",
			Self::IntArray => "int_array",
			Self::FloatArray => "float_array",
		}
	}
}
