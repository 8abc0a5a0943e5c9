/// Size of a chunk in bytes (256 bits).
pub const CHUNK_BYTES: usize = 32;
/// Size of a chunk in bits.
pub const CHUNK_BITS: u32 = (CHUNK_BYTES * 8) as u32;

/// Number of source bits a single compaction group evaluates. Each of
/// the 32 candidate positions in a group maps to one output byte, so a
/// fully dense group performs a 32-byte wide store.
pub const GROUP_INPUT_BITS: u32 = 32;
/// Width, in bytes, of a single compaction group's wide store. Fixed
/// at one chunk's width so that the compaction primitive's tail
/// over-write (see `bits::compact_group`) never exceeds the trailing
/// slack reserved in the output buffer.
pub const GROUP_STORE_BYTES: usize = CHUNK_BYTES;
/// Number of groups needed to cover one chunk.
pub const GROUPS_PER_CHUNK: usize = CHUNK_BITS as usize / GROUP_INPUT_BITS as usize;

/// Threshold below which a chunk is encoded as sparse (list of set
/// bits). Chosen so the encoded form (1 header byte + popcount payload
/// bytes) never loses to the 33-byte raw form.
pub const SPARSE_MAX_POPCOUNT: u32 = CHUNK_BYTES as u32;
/// Threshold above which a chunk is encoded as dense/inverted-sparse.
pub const DENSE_MIN_POPCOUNT: u32 = CHUNK_BITS - CHUNK_BYTES as u32;

/// Low 6 bits of the header byte hold the payload length, 0..=32.
pub const HEADER_LENGTH_MASK: u8 = 0x3F;
/// High 2 bits of the header byte hold the category tag.
pub const HEADER_CATEGORY_SHIFT: u32 = 6;
/// Literal length value stored in the header for a raw-encoded chunk.
pub const RAW_PAYLOAD_LEN: u8 = CHUNK_BYTES as u8;

/// Size of the frame's leading original-size field, in bytes.
pub const FRAME_PREFIX_BYTES: usize = 4;

/// Trailing slack the output buffer must carry beyond the logical end
/// of the frame, to absorb the compaction primitive's tail over-write.
pub const OUTPUT_SLACK_BYTES: usize = CHUNK_BYTES;

/// Worst case a single chunk record can occupy: 1 header byte + 32
/// payload bytes (the raw encoding).
pub const MAX_CHUNK_RECORD_BYTES: usize = 1 + CHUNK_BYTES;
