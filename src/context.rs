//! The compression context: owns the `input`, `output`, and `scratch`
//! buffers with the sizing rules required by the compaction primitive,
//! and drives the per-chunk encode loop.

use crate::chunk::encode_chunk;
use crate::constants::{CHUNK_BYTES, FRAME_PREFIX_BYTES, MAX_CHUNK_RECORD_BYTES, OUTPUT_SLACK_BYTES};
use crate::errors::{FlitBitError, FlitBitResult};
use crate::frame::write_prefix;

fn try_zeroed_vec(len: usize) -> FlitBitResult<Vec<u8>> {
  let mut v: Vec<u8> = Vec::new();
  v.try_reserve_exact(len)
    .map_err(|e| FlitBitError::allocation_failed(format!("failed to reserve {len} bytes: {e}")))?;
  v.resize(len, 0);
  Ok(v)
}

/// A reusable compression context sized for inputs up to `max_size`
/// bytes, owning its own input, output, and scratch buffers.
///
/// There is no explicit `destroy`: dropping a `Context` releases all
/// three buffers, since it owns them outright.
pub struct Context {
  max_size: usize,
  chunks: usize,
  input: Vec<u8>,
  output: Vec<u8>,
  scratch: [u8; CHUNK_BYTES],
}

impl Context {
  /// Allocates a context sized for inputs up to `max_size` bytes.
  ///
  /// Fails with `ErrorKind::AllocationFailed` rather than aborting the
  /// process if the buffers cannot be reserved.
  pub fn new(max_size: usize) -> FlitBitResult<Self> {
    let chunks = max_size.div_ceil(CHUNK_BYTES);
    let input = try_zeroed_vec(chunks * CHUNK_BYTES)?;
    let output_capacity = FRAME_PREFIX_BYTES + chunks * MAX_CHUNK_RECORD_BYTES + OUTPUT_SLACK_BYTES;
    let output = try_zeroed_vec(output_capacity)?;

    Ok(Context {
      max_size,
      chunks,
      input,
      output,
      scratch: [0u8; CHUNK_BYTES],
    })
  }

  /// A writable view of the context's input buffer.
  pub fn input_mut(&mut self) -> &mut [u8] {
    &mut self.input
  }

  /// Encodes the first `actual_size` bytes of the input buffer (padded
  /// with zeros up to the next 32-byte boundary) into the output
  /// buffer, and returns the length of the valid compressed prefix.
  ///
  /// Bytes in `output()` beyond the returned length are trailing slack
  /// and are not part of the frame; callers must not read them as
  /// compressed data.
  pub fn compress(&mut self, actual_size: usize) -> FlitBitResult<usize> {
    if actual_size > self.max_size {
      return Err(FlitBitError::input_too_large(format!(
        "actual_size {actual_size} exceeds context max_size {}",
        self.max_size
      )));
    }
    if actual_size > u32::MAX as usize {
      return Err(FlitBitError::input_too_large(format!(
        "actual_size {actual_size} does not fit the 4-byte frame prefix"
      )));
    }

    let n_chunks = actual_size.div_ceil(CHUNK_BYTES);
    let padded_len = n_chunks * CHUNK_BYTES;
    self.input[actual_size..padded_len].fill(0);

    write_prefix(actual_size as u32, &mut self.output);
    let mut cursor = FRAME_PREFIX_BYTES;
    for chunk_idx in 0..n_chunks {
      let start = chunk_idx * CHUNK_BYTES;
      let src: &[u8; CHUNK_BYTES] = self.input[start..start + CHUNK_BYTES].try_into().unwrap();
      let written = encode_chunk(src, &mut self.scratch, &mut self.output[cursor..]);
      cursor += written;
    }

    Ok(cursor)
  }

  /// The valid compressed prefix of the output buffer, given the
  /// length returned by the most recent [`Context::compress`] call.
  pub fn compressed(&self, compressed_size: usize) -> &[u8] {
    &self.output[..compressed_size]
  }
}
