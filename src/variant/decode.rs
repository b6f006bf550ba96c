use std::io::Read;

use crate::variant::map::FromVariant;
use crate::variant::marshal::VariantUnmarshal;
use crate::variant::types::{Float, Integer, Vector3};
use crate::variant::value::{Dictionary, Variant};
use crate::variant::{Result, Tag, VariantError, wire};

/// Element counts come from the wire; speculative preallocation is capped so
/// a hostile header cannot reserve arbitrary memory up front.
const PREALLOC_LIMIT: usize = 4096;

/// Streaming decoder reading tagged variant values from an input stream.
///
/// Each call starts by reading exactly one tag word; no state survives
/// between calls beyond the stream position.
pub struct Decoder<R> {
	r: R,
}

impl<R: Read> Decoder<R> {
	/// Wrap an input stream.
	pub fn new(r: R) -> Self {
		Self { r }
	}

	/// Consume the decoder and return the underlying stream.
	pub fn into_inner(self) -> R {
		self.r
	}

	/// Decode one value into a caller-allocated destination.
	///
	/// Phase one parses the stream into a dynamic [`Variant`] tree; phase two
	/// structurally maps that tree onto `dest` by field and key name.
	pub fn decode<T: FromVariant>(&mut self, dest: &mut T) -> Result<()> {
		let value = self.decode_variant()?;
		dest.assign_variant(&value)
	}

	/// Decode one value into its dynamic tree form.
	pub fn decode_variant(&mut self) -> Result<Variant> {
		let code = wire::read_u32(&mut self.r)?;
		let Some(tag) = Tag::from_code(code) else {
			return Err(VariantError::UnsupportedTag {
				code,
				raw: code.to_le_bytes(),
			});
		};

		match tag {
			Tag::Int => {
				let mut value = Integer::default();
				self.unmarshal_fixed(&mut value)?;
				Ok(Variant::Int(value.0))
			}
			Tag::Float => {
				let mut value = Float::default();
				self.unmarshal_fixed(&mut value)?;
				Ok(Variant::Float(value.0))
			}
			Tag::Str => self.decode_str().map(Variant::Str),
			Tag::Vector3 => {
				let mut value = Vector3::default();
				self.unmarshal_fixed(&mut value)?;
				Ok(Variant::Vector3(value))
			}
			Tag::IntArray => {
				let count = wire::read_u32(&mut self.r)? as usize;
				let mut elems = Vec::with_capacity(count.min(PREALLOC_LIMIT));
				for _ in 0..count {
					elems.push(wire::read_i32(&mut self.r)?);
				}
				Ok(Variant::IntArray(elems))
			}
			Tag::FloatArray => {
				let count = wire::read_u32(&mut self.r)? as usize;
				let mut elems = Vec::with_capacity(count.min(PREALLOC_LIMIT));
				for _ in 0..count {
					elems.push(wire::read_f32(&mut self.r)?);
				}
				Ok(Variant::FloatArray(elems))
			}
			Tag::Array => {
				let count = self.read_counted_header()?;
				let mut elems = Vec::with_capacity(count.min(PREALLOC_LIMIT));
				for _ in 0..count {
					elems.push(self.decode_variant()?);
				}
				Ok(Variant::Array(elems))
			}
			Tag::Dictionary => {
				let count = self.read_counted_header()?;
				let mut dict = Dictionary::new();
				for _ in 0..count {
					let key_node = self.decode_variant()?;
					let key = key_node.key_text()?.to_owned();
					let value = self.decode_variant()?;
					dict.insert(key, value);
				}
				Ok(Variant::Dict(dict))
			}
		}
	}

	fn read_counted_header(&mut self) -> Result<usize> {
		// Bit 31 is the shared flag; accept it in any state.
		let header = wire::read_u32(&mut self.r)?;
		Ok((header & wire::COUNT_MASK) as usize)
	}

	fn decode_str(&mut self) -> Result<String> {
		let len = wire::read_u32(&mut self.r)? as usize;
		let mut raw = vec![0_u8; len];
		self.r.read_exact(&mut raw)?;
		wire::discard_padding(&mut self.r, len)?;
		Ok(String::from_utf8(raw)?)
	}

	fn unmarshal_fixed<T: VariantUnmarshal>(&mut self, dest: &mut T) -> Result<()> {
		let mut buf = vec![0_u8; T::WIRE_SIZE];
		self.r.read_exact(&mut buf)?;
		dest.unmarshal_variant(&buf)
	}
}

/// Decode one value from an in-memory wire image.
pub fn decode_from_slice<T: FromVariant>(bytes: &[u8], dest: &mut T) -> Result<()> {
	Decoder::new(bytes).decode(dest)
}

#[cfg(test)]
mod tests {
	use super::Decoder;
	use crate::variant::encode::encode_to_vec;
	use crate::variant::value::Variant;
	use crate::variant::{VariantError, codes, wire};

	#[test]
	fn reserved_tags_fail_with_the_offending_code() {
		for code in [codes::NULL, codes::BOOL, codes::RID, codes::OBJECT, codes::BYTE_ARRAY, 4321] {
			let mut stream = Vec::new();
			stream.extend_from_slice(&code.to_le_bytes());
			stream.extend_from_slice(&0_u32.to_le_bytes());

			let err = Decoder::new(stream.as_slice()).decode_variant().expect_err("reserved tag should fail");
			match err {
				VariantError::UnsupportedTag { code: got, raw } => {
					assert_eq!(got, code);
					assert_eq!(raw, code.to_le_bytes());
				}
				other => panic!("unexpected error: {other}"),
			}
		}
	}

	#[test]
	fn shared_bit_is_accepted_in_either_state() {
		for header in [3_u32, wire::SHARED_BIT | 3] {
			let mut stream = Vec::new();
			stream.extend_from_slice(&codes::ARRAY.to_le_bytes());
			stream.extend_from_slice(&header.to_le_bytes());
			for elem in 0..3_i32 {
				stream.extend_from_slice(&codes::INTEGER.to_le_bytes());
				stream.extend_from_slice(&elem.to_le_bytes());
			}

			let value = Decoder::new(stream.as_slice()).decode_variant().expect("array decodes");
			let Variant::Array(elems) = value else {
				panic!("expected array node");
			};
			assert_eq!(elems.len(), 3, "masked count should ignore the flag");
		}
	}

	#[test]
	fn text_padding_is_consumed_from_the_stream() {
		let stream = encode_to_vec("abcde").expect("text encodes");
		let mut dec = Decoder::new(stream.as_slice());
		let value = dec.decode_variant().expect("text decodes");
		assert_eq!(value, Variant::Str("abcde".to_owned()));
		assert!(dec.into_inner().is_empty(), "padding bytes must be consumed");
	}

	#[test]
	fn truncated_text_padding_surfaces_io_error() {
		let mut stream = encode_to_vec("abcde").expect("text encodes");
		stream.pop();

		let err = Decoder::new(stream.as_slice()).decode_variant().expect_err("missing pad byte should fail");
		assert!(matches!(err, VariantError::Io(_)));
	}

	#[test]
	fn non_text_dictionary_key_is_rejected() {
		let mut stream = Vec::new();
		stream.extend_from_slice(&codes::DICTIONARY.to_le_bytes());
		stream.extend_from_slice(&(wire::SHARED_BIT | 1).to_le_bytes());
		stream.extend_from_slice(&codes::INTEGER.to_le_bytes());
		stream.extend_from_slice(&7_i32.to_le_bytes());

		let err = Decoder::new(stream.as_slice()).decode_variant().expect_err("int key should fail");
		assert!(matches!(err, VariantError::KeyNotText { kind: "int" }));
	}

	#[test]
	fn duplicate_dictionary_keys_keep_the_last_value() {
		let mut stream = Vec::new();
		stream.extend_from_slice(&codes::DICTIONARY.to_le_bytes());
		stream.extend_from_slice(&(wire::SHARED_BIT | 2).to_le_bytes());
		for value in [1_i32, 2] {
			stream.extend_from_slice(&encode_to_vec("dup").expect("key encodes"));
			stream.extend_from_slice(&codes::INTEGER.to_le_bytes());
			stream.extend_from_slice(&value.to_le_bytes());
		}

		let value = Decoder::new(stream.as_slice()).decode_variant().expect("dictionary decodes");
		let Variant::Dict(dict) = value else {
			panic!("expected dictionary node");
		};
		assert_eq!(dict.len(), 1);
		assert_eq!(dict.get("dup"), Some(&Variant::Int(2)));
	}

	#[test]
	fn invalid_utf8_text_is_rejected() {
		let mut stream = Vec::new();
		stream.extend_from_slice(&codes::STRING.to_le_bytes());
		stream.extend_from_slice(&2_u32.to_le_bytes());
		stream.extend_from_slice(&[0xFF, 0xFE, 0, 0]);

		let err = Decoder::new(stream.as_slice()).decode_variant().expect_err("invalid utf-8 should fail");
		assert!(matches!(err, VariantError::InvalidText(_)));
	}

	#[test]
	fn truncated_scalar_payload_surfaces_io_error() {
		let stream = codes::INTEGER.to_le_bytes();
		let err = Decoder::new(&stream[..]).decode_variant().expect_err("missing payload should fail");
		assert!(matches!(err, VariantError::Io(_)));
	}
}
