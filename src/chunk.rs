//! Per-chunk classification, header byte encoding, and the chunk-level
//! encode/decode routines built on top of the bit primitives in
//! [`crate::bits`].

use crate::bits::{compact_into, invert_chunk, popcount_chunk, scatter_into};
use crate::constants::{
  CHUNK_BYTES, DENSE_MIN_POPCOUNT, HEADER_CATEGORY_SHIFT, HEADER_LENGTH_MASK, RAW_PAYLOAD_LEN,
  SPARSE_MAX_POPCOUNT,
};
use crate::errors::{FlitBitError, FlitBitResult};

/// The three encodings a chunk can take, selected purely from its
/// popcount. There is no fourth, reserved category: a decoder
/// that sees category 3 rejects the stream as corrupt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
  Sparse,
  Dense,
  Raw,
}

impl Category {
  #[inline]
  fn tag(self) -> u8 {
    match self {
      Category::Sparse => 0b00,
      Category::Dense => 0b01,
      Category::Raw => 0b10,
    }
  }

  #[inline]
  fn from_tag(tag: u8) -> Option<Self> {
    match tag {
      0b00 => Some(Category::Sparse),
      0b01 => Some(Category::Dense),
      0b10 => Some(Category::Raw),
      _ => None,
    }
  }
}

/// Selects the encoding for a chunk with the given popcount.
#[inline]
pub fn classify(popcount: u32) -> Category {
  if popcount < SPARSE_MAX_POPCOUNT {
    Category::Sparse
  } else if popcount > DENSE_MIN_POPCOUNT {
    Category::Dense
  } else {
    Category::Raw
  }
}

#[inline]
fn header_byte(category: Category, length: u8) -> u8 {
  (category.tag() << HEADER_CATEGORY_SHIFT) | (length & HEADER_LENGTH_MASK)
}

/// Encodes one chunk into `out` (header byte plus payload) and returns
/// the number of bytes written, at most 33.
pub fn encode_chunk(src: &[u8; CHUNK_BYTES], scratch: &mut [u8; CHUNK_BYTES], out: &mut [u8]) -> usize {
  let popcount = popcount_chunk(src);
  let category = classify(popcount);
  match category {
    Category::Sparse => {
      let len = compact_into(src, &mut out[1..]);
      out[0] = header_byte(category, len as u8);
      1 + len
    }
    Category::Dense => {
      invert_chunk(src, scratch);
      let len = compact_into(scratch, &mut out[1..]);
      out[0] = header_byte(category, len as u8);
      1 + len
    }
    Category::Raw => {
      out[0] = header_byte(category, RAW_PAYLOAD_LEN);
      out[1..1 + CHUNK_BYTES].copy_from_slice(src);
      1 + CHUNK_BYTES
    }
  }
}

/// Decodes one chunk record, header byte already consumed by the
/// caller. Returns the number of payload bytes of `src` consumed.
pub fn decode_chunk(
  header: u8,
  src: &[u8],
  out: &mut [u8; CHUNK_BYTES],
) -> FlitBitResult<usize> {
  let length = (header & HEADER_LENGTH_MASK) as usize;
  let tag = header >> HEADER_CATEGORY_SHIFT;
  let category = Category::from_tag(tag)
    .ok_or_else(|| FlitBitError::corrupt_stream(format!("reserved chunk category {tag}")))?;

  if src.len() < length {
    return Err(FlitBitError::corrupt_stream(format!(
      "chunk payload of {length} bytes truncated to {}",
      src.len()
    )));
  }
  let payload = &src[..length];

  match category {
    Category::Sparse => {
      validate_positions(payload)?;
      scatter_into(payload, out);
    }
    Category::Dense => {
      validate_positions(payload)?;
      scatter_into(payload, out);
      let mut inverted = [0u8; CHUNK_BYTES];
      invert_chunk(out, &mut inverted);
      *out = inverted;
    }
    Category::Raw => {
      if length != CHUNK_BYTES {
        return Err(FlitBitError::corrupt_stream(format!(
          "raw chunk length {length} is not {CHUNK_BYTES}"
        )));
      }
      out.copy_from_slice(payload);
    }
  }

  Ok(length)
}

// A conforming encoder always emits ascending, deduplicated positions.
fn validate_positions(positions: &[u8]) -> FlitBitResult<()> {
  for pair in positions.windows(2) {
    if pair[0] >= pair[1] {
      return Err(FlitBitError::corrupt_stream(
        "chunk payload positions are not strictly ascending",
      ));
    }
  }
  Ok(())
}
