//! Tagged variant wire codec.
//!
//! Encoding classifies a native value into one of the format's wire shapes
//! and walks it recursively; decoding runs in two phases, first parsing the
//! stream into a dynamic [`Variant`] tree, then structurally mapping that
//! tree onto a caller-supplied destination. Types can bypass classification
//! entirely by carrying their own wire image via [`VariantMarshal`].

mod decode;
mod encode;
mod error;
mod map;
mod marshal;
mod tag;
mod types;
mod value;
pub mod wire;

/// Stream decoder and slice entry point.
pub use decode::{Decoder, decode_from_slice};
/// Classification trait, stream encoder, and buffer entry point.
pub use encode::{Encoder, ToVariant, encode_to_vec};
/// Error and result aliases.
pub use error::{Result, VariantError};
/// Structural mapping trait.
pub use map::FromVariant;
/// Custom wire-image capability traits.
pub use marshal::{VariantMarshal, VariantUnmarshal};
/// Implemented tag subset and the full wire-code catalog.
pub use tag::{Tag, codes};
/// Fixed-layout scalar aliases and the 3-component float record.
pub use types::{Float, Integer, Vector3};
/// Dynamic value tree node and keyed record container.
pub use value::{Dictionary, Variant};
