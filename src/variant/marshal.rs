use crate::variant::Result;

/// Capability to supply the exact wire image for a value.
///
/// The returned buffer holds the tag word followed by the payload. The
/// encoder writes it verbatim and pads it to a 4-byte boundary, bypassing
/// classification entirely; an implementation of this trait takes priority
/// over every built-in encoding rule.
pub trait VariantMarshal {
	/// Produce the full wire image: tag word plus payload.
	fn marshal_variant(&self) -> Result<Vec<u8>>;
}

/// Capability to rebuild a value from its fixed-size wire payload.
///
/// The decoder reads the tag itself, then hands exactly [`WIRE_SIZE`] payload
/// bytes to the implementation.
///
/// [`WIRE_SIZE`]: VariantUnmarshal::WIRE_SIZE
pub trait VariantUnmarshal {
	/// Exact payload size in bytes, tag word excluded.
	const WIRE_SIZE: usize;

	/// Populate `self` from a payload of at least [`Self::WIRE_SIZE`] bytes.
	///
	/// A shorter buffer fails with
	/// [`VariantError::PayloadTooSmall`](crate::variant::VariantError::PayloadTooSmall).
	fn unmarshal_variant(&mut self, data: &[u8]) -> Result<()>;
}
