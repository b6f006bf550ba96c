//! Codec for the Godot variant binary value format.
//!
//! Values are serialized as a flat little-endian byte stream of tagged,
//! self-describing payloads: scalars, text, a fixed 3-component float
//! record, homogeneous numeric sequences, heterogeneous sequences, and
//! keyed records. See [`variant`] for the full API.

/// Variant classification, encoding, two-phase decoding, and structural
/// mapping.
pub mod variant;
