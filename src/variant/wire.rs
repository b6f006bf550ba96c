//! Little-endian 32-bit primitive reads and writes.
//!
//! These helpers are the whole of the format's primitive layer and are public
//! so that [`VariantMarshal`](crate::variant::VariantMarshal) implementors can
//! build their wire images from the same parts the codec uses.

use std::io::{Read, Write};

use crate::variant::{Result, VariantError};

/// Shared flag carried in bit 31 of dictionary and array headers.
///
/// Always set on encode; never interpreted on decode. The bit is an artifact
/// of the source format's object-sharing machinery.
pub const SHARED_BIT: u32 = 0x8000_0000;

/// Mask selecting the element count from a shared-flagged header word.
pub const COUNT_MASK: u32 = 0x7FFF_FFFF;

/// Read a little-endian `u32` word.
pub fn read_u32<R: Read + ?Sized>(r: &mut R) -> Result<u32> {
	let mut buf = [0_u8; 4];
	r.read_exact(&mut buf)?;
	Ok(u32::from_le_bytes(buf))
}

/// Read a little-endian `i32`.
pub fn read_i32<R: Read + ?Sized>(r: &mut R) -> Result<i32> {
	let mut buf = [0_u8; 4];
	r.read_exact(&mut buf)?;
	Ok(i32::from_le_bytes(buf))
}

/// Read a little-endian IEEE-754 `f32`.
pub fn read_f32<R: Read + ?Sized>(r: &mut R) -> Result<f32> {
	let mut buf = [0_u8; 4];
	r.read_exact(&mut buf)?;
	Ok(f32::from_le_bytes(buf))
}

/// Write a little-endian `u32` word.
pub fn write_u32<W: Write + ?Sized>(w: &mut W, value: u32) -> Result<()> {
	w.write_all(&value.to_le_bytes())?;
	Ok(())
}

/// Write a little-endian `i32`.
pub fn write_i32<W: Write + ?Sized>(w: &mut W, value: i32) -> Result<()> {
	w.write_all(&value.to_le_bytes())?;
	Ok(())
}

/// Write a little-endian IEEE-754 `f32`.
pub fn write_f32<W: Write + ?Sized>(w: &mut W, value: f32) -> Result<()> {
	w.write_all(&value.to_le_bytes())?;
	Ok(())
}

/// Parse a little-endian `u32` from the front of a byte slice.
pub fn u32_from_bytes(bytes: &[u8]) -> Result<u32> {
	Ok(u32::from_le_bytes(prefix4(bytes)?))
}

/// Parse a little-endian `i32` from the front of a byte slice.
pub fn i32_from_bytes(bytes: &[u8]) -> Result<i32> {
	Ok(i32::from_le_bytes(prefix4(bytes)?))
}

/// Parse a little-endian `f32` from the front of a byte slice.
pub fn f32_from_bytes(bytes: &[u8]) -> Result<f32> {
	Ok(f32::from_le_bytes(prefix4(bytes)?))
}

/// Render a `u32` as little-endian wire bytes.
pub fn u32_to_bytes(value: u32) -> [u8; 4] {
	value.to_le_bytes()
}

/// Render an `i32` as little-endian wire bytes.
pub fn i32_to_bytes(value: i32) -> [u8; 4] {
	value.to_le_bytes()
}

/// Render an `f32` as little-endian wire bytes.
pub fn f32_to_bytes(value: f32) -> [u8; 4] {
	value.to_le_bytes()
}

/// Number of zero bytes needed to advance a payload of `len` bytes to the
/// next 4-byte boundary.
pub fn padding_for(len: usize) -> usize {
	let pad = 4 - (len % 4);
	if pad < 4 { pad } else { 0 }
}

/// Write alignment padding for a payload of `len` bytes.
pub fn write_padding<W: Write + ?Sized>(w: &mut W, len: usize) -> Result<()> {
	let pad = padding_for(len);
	if pad > 0 {
		let zeros = [0_u8; 3];
		w.write_all(&zeros[..pad])?;
	}
	Ok(())
}

/// Read and discard alignment padding for a payload of `len` bytes.
///
/// The pad width is computed from `len`, never from the stream; a stream that
/// ends inside the padding surfaces the underlying read error.
pub fn discard_padding<R: Read + ?Sized>(r: &mut R, len: usize) -> Result<()> {
	let pad = padding_for(len);
	if pad > 0 {
		let mut buf = [0_u8; 3];
		r.read_exact(&mut buf[..pad])?;
	}
	Ok(())
}

fn prefix4(bytes: &[u8]) -> Result<[u8; 4]> {
	let Some(raw) = bytes.get(0..4) else {
		return Err(VariantError::PayloadTooSmall {
			need: 4,
			have: bytes.len(),
		});
	};

	let mut out = [0_u8; 4];
	out.copy_from_slice(raw);
	Ok(out)
}
