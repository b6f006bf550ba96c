use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, VariantError>;

/// Errors produced while encoding, decoding, and mapping variant data.
#[derive(Debug, Error)]
pub enum VariantError {
	/// Stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Reserved or unknown tag code at the start of a value.
	#[error("unsupported variant tag {code} {raw:?}")]
	UnsupportedTag {
		/// Parsed 32-bit tag code.
		code: u32,
		/// Raw little-endian tag bytes, kept for diagnostics.
		raw: [u8; 4],
	},
	/// Fixed-size wire buffer was shorter than the type's layout.
	#[error("payload too small: need={need}, have={have}")]
	PayloadTooSmall {
		/// Required number of bytes.
		need: usize,
		/// Available bytes.
		have: usize,
	},
	/// Decoded dictionary key node cannot be rendered as text.
	#[error("dictionary key is not text: got {kind}")]
	KeyNotText {
		/// Kind label of the offending key node.
		kind: &'static str,
	},
	/// Text payload was not valid UTF-8.
	#[error("invalid text payload: {0}")]
	InvalidText(#[from] std::string::FromUtf8Error),
	/// Dynamic tree shape is incompatible with the destination shape.
	#[error("cannot map {got} into {expected}")]
	Mapping {
		/// Destination shape label.
		expected: &'static str,
		/// Kind label of the node that was found instead.
		got: &'static str,
	},
}
