//! The frame header: a 4-byte little-endian original-size prefix that
//! precedes the chunk records.

use crate::constants::{CHUNK_BYTES, FRAME_PREFIX_BYTES};
use crate::errors::{FlitBitError, FlitBitResult};

/// Writes the 4-byte little-endian size prefix into `out[..4]`.
#[inline]
pub fn write_prefix(original_size: u32, out: &mut [u8]) {
  out[..FRAME_PREFIX_BYTES].copy_from_slice(&original_size.to_le_bytes());
}

/// Reads the 4-byte frame prefix and returns `(original_size,
/// decoded_buffer_size)`, where `decoded_buffer_size` is the number of
/// bytes a `decompress` call into this frame will write
/// (`ceil(original_size / 32) * 32`).
///
/// Does not look past the prefix, so this never touches the chunk
/// records and never mutates `compressed`.
pub fn peek_decoded_size(compressed: &[u8]) -> FlitBitResult<(u32, usize)> {
  if compressed.len() < FRAME_PREFIX_BYTES {
    return Err(FlitBitError::corrupt_stream(format!(
      "frame of {} bytes is shorter than the {}-byte size prefix",
      compressed.len(),
      FRAME_PREFIX_BYTES
    )));
  }
  let original_size = u32::from_le_bytes(compressed[..FRAME_PREFIX_BYTES].try_into().unwrap());
  let buffer_size = decoded_buffer_size(original_size);
  Ok((original_size, buffer_size))
}

/// `ceil(n / CHUNK_BYTES) * CHUNK_BYTES`, computed without overflow
/// for any `n` that fits in `u32`.
#[inline]
pub fn decoded_buffer_size(original_size: u32) -> usize {
  let n = original_size as usize;
  n.div_ceil(CHUNK_BYTES) * CHUNK_BYTES
}
