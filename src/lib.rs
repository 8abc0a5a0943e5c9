//! `flitbit` is a chunk-wise compression codec tuned for bitmaps that
//! are mostly zero, mostly one, or genuinely mixed, not for the broad
//! middle ground a general-purpose compressor already handles well.
//!
//! The input is partitioned into fixed 32-byte (256-bit) chunks. Each
//! chunk is independently classified by its popcount and encoded as
//! one of three forms: a list of set-bit positions (sparse), a list
//! of clear-bit positions (dense/inverted), or a verbatim copy (raw).
//! There is no entropy coding, no cross-chunk state, and no streaming
//! interface: a whole buffer goes in, a whole compressed frame comes
//! out.
//!
//! The primary entry points are [`Context`] for compression and
//! [`decompress`] / [`peek_decoded_size`] for decompression.

pub use chunk::Category;
pub use context::Context;
pub use errors::{ErrorKind, FlitBitError, FlitBitResult};
pub use frame::peek_decoded_size;

pub mod bits;
pub mod errors;

mod chunk;
mod constants;
mod context;
mod frame;
mod lookup;

use constants::CHUNK_BYTES;

/// Decodes a compressed frame into `out`, which must be at least as
/// large as the `buffer_size` reported by [`peek_decoded_size`] for
/// the same `compressed` bytes.
///
/// Writes exactly that many bytes: the original data followed by
/// zero padding up to the next chunk boundary.
pub fn decompress(compressed: &[u8], out: &mut [u8]) -> FlitBitResult<()> {
  let (_original_size, buffer_size) = frame::peek_decoded_size(compressed)?;
  if out.len() < buffer_size {
    return Err(FlitBitError::output_too_small(format!(
      "destination of {} bytes is smaller than the required {buffer_size} bytes",
      out.len()
    )));
  }

  let mut cursor = 4usize;
  let n_chunks = buffer_size / CHUNK_BYTES;
  for chunk_idx in 0..n_chunks {
    if cursor >= compressed.len() {
      return Err(FlitBitError::corrupt_stream(format!(
        "frame ended before chunk {chunk_idx} of {n_chunks}"
      )));
    }
    let header = compressed[cursor];
    cursor += 1;

    let dst_start = chunk_idx * CHUNK_BYTES;
    let dst: &mut [u8; CHUNK_BYTES] = (&mut out[dst_start..dst_start + CHUNK_BYTES])
      .try_into()
      .unwrap();
    let consumed = chunk::decode_chunk(header, &compressed[cursor..], dst)?;
    cursor += consumed;
  }

  Ok(())
}

#[cfg(test)]
mod tests;
