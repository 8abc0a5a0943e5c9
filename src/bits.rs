//! Data-parallel bit primitives operating on a single 32-byte chunk:
//! population count, selective byte-compaction (compress side),
//! bit-scatter (decompress side), and bitwise inversion.
//!
//! None of these allocate. The compaction primitive is written to
//! model the wide-SIMD-store behavior described by the wire format's
//! buffer sizing contract (a store can write a full 32-byte group
//! even when only a few of those bytes are logically valid); see
//! `compact_group` below.

use crate::constants::{CHUNK_BYTES, GROUPS_PER_CHUNK, GROUP_INPUT_BITS, GROUP_STORE_BYTES};
use crate::lookup::BIT_TABLE;

/// Population count over a 256-bit chunk, in [0, 256].
#[inline]
pub fn popcount_chunk(chunk: &[u8; CHUNK_BYTES]) -> u32 {
  let mut words = [0u64; CHUNK_BYTES / 8];
  for (word, bytes) in words.iter_mut().zip(chunk.chunks_exact(8)) {
    *word = u64::from_le_bytes(bytes.try_into().unwrap());
  }
  words.iter().map(|w| w.count_ones()).sum()
}

/// Bitwise complement of a 32-byte chunk.
#[inline]
pub fn invert_chunk(chunk: &[u8; CHUNK_BYTES], out: &mut [u8; CHUNK_BYTES]) {
  for (o, b) in out.iter_mut().zip(chunk.iter()) {
    *o = !b;
  }
}

// Writes a full GROUP_STORE_BYTES-wide store regardless of popcount,
// mirroring a wide SIMD compaction instruction. The caller advances
// its cursor by only the returned popcount, so the next group's store
// overwrites the trailing zero slots written here; this is the tail
// over-write the buffer manager's slack exists for.
#[inline]
fn compact_group(mask: u32, base: u8, out: &mut [u8]) -> usize {
  debug_assert!(out.len() >= GROUP_STORE_BYTES);
  let mut k = 0usize;
  for bit in 0..GROUP_INPUT_BITS {
    if (mask >> bit) & 1 == 1 {
      out[k] = base.wrapping_add(bit as u8);
      k += 1;
    }
  }
  for slot in out.iter_mut().take(GROUP_STORE_BYTES).skip(k) {
    *slot = 0;
  }
  k
}

/// Selective byte-compaction over a full 256-bit chunk: writes the
/// ascending positions of every set bit into `out` and returns how
/// many of those bytes are valid payload.
///
/// `out` needs `GROUP_STORE_BYTES` bytes of slack past the true worst
/// case to absorb the final group's tail over-write; the context's
/// output buffer sizing rule guarantees this.
pub fn compact_into(chunk: &[u8; CHUNK_BYTES], out: &mut [u8]) -> usize {
  let mut total = 0usize;
  for group in 0..GROUPS_PER_CHUNK {
    let base = (group * GROUP_INPUT_BITS as usize) as u8;
    let word_idx = group * 4;
    let mask = u32::from_le_bytes(chunk[word_idx..word_idx + 4].try_into().unwrap());
    let written = compact_group(mask, base, &mut out[total..]);
    total += written;
  }
  total
}

/// Bit-expansion (scatter): reconstructs a 32-byte chunk with exactly
/// the bits at `positions` set, via wide OR-accumulation against the
/// precomputed single-bit lookup table.
pub fn scatter_into(positions: &[u8], out: &mut [u8; CHUNK_BYTES]) {
  out.fill(0);
  for &p in positions {
    let entry = &BIT_TABLE[p as usize];
    for (o, e) in out.iter_mut().zip(entry.iter()) {
      *o |= e;
    }
  }
}
