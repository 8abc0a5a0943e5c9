//! Fixed input/output pairs for each chunk category and boundary
//! condition, exercised end to end through `Context::compress` and
//! `crate::decompress`.

use crate::{decompress, peek_decoded_size, Context};

fn compress_all(input: &[u8]) -> Vec<u8> {
  let mut ctx = Context::new(input.len()).unwrap();
  ctx.input_mut()[..input.len()].copy_from_slice(input);
  let size = ctx.compress(input.len()).unwrap();
  ctx.compressed(size).to_vec()
}

#[test]
fn s1_all_zeros() {
  let input = vec![0u8; 32];
  let compressed = compress_all(&input);
  assert_eq!(compressed, vec![0x20, 0x00, 0x00, 0x00, 0x00]);

  let (n, buf_size) = peek_decoded_size(&compressed).unwrap();
  assert_eq!((n, buf_size), (32, 32));
  let mut decoded = vec![0u8; buf_size];
  decompress(&compressed, &mut decoded).unwrap();
  assert_eq!(decoded, input);
}

#[test]
fn s2_all_ones() {
  let input = vec![0xFFu8; 32];
  let compressed = compress_all(&input);
  assert_eq!(compressed, vec![0x20, 0x00, 0x00, 0x00, 0x40]);

  let (_, buf_size) = peek_decoded_size(&compressed).unwrap();
  let mut decoded = vec![0u8; buf_size];
  decompress(&compressed, &mut decoded).unwrap();
  assert_eq!(decoded, input);
}

#[test]
fn s3_single_set_bit() {
  let mut input = vec![0u8; 32];
  input[15] = 0x10;
  let compressed = compress_all(&input);
  assert_eq!(
    compressed,
    vec![0x20, 0x00, 0x00, 0x00, 0x01, 0x7C]
  );

  let (_, buf_size) = peek_decoded_size(&compressed).unwrap();
  let mut decoded = vec![0u8; buf_size];
  decompress(&compressed, &mut decoded).unwrap();
  assert_eq!(decoded, input);
}

#[test]
fn s4_raw_density_chunk() {
  let input = vec![0xAAu8; 32];
  let compressed = compress_all(&input);
  assert_eq!(compressed.len(), 37);
  // Raw (0b10) with the literal length 32 (0b100000) packs to
  // 0xA0 = 0b10_100000.
  assert_eq!(&compressed[..5], &[0x20, 0x00, 0x00, 0x00, 0xA0]);
  assert_eq!(&compressed[5..], &input[..]);
}

#[test]
fn s5_multi_chunk() {
  let input: Vec<u8> = (0..100u32).map(|i| i as u8).collect();
  let compressed = compress_all(&input);
  assert_eq!(&compressed[..4], &[0x64, 0x00, 0x00, 0x00]);

  let (n, buf_size) = peek_decoded_size(&compressed).unwrap();
  assert_eq!(n, 100);
  assert_eq!(buf_size, 128);
  let mut decoded = vec![0u8; buf_size];
  decompress(&compressed, &mut decoded).unwrap();
  assert_eq!(&decoded[..100], &input[..]);
  assert_eq!(&decoded[100..], &[0u8; 28]);
}

#[test]
fn s6_dense_chunk_inverted_form() {
  let mut input = vec![0xFFu8; 32];
  input[0] = 0x7F;
  input[31] = 0xFE;
  let compressed = compress_all(&input);
  assert_eq!(&compressed[4..], &[0x42, 0x07, 0xF8]);

  let (_, buf_size) = peek_decoded_size(&compressed).unwrap();
  let mut decoded = vec![0u8; buf_size];
  decompress(&compressed, &mut decoded).unwrap();
  assert_eq!(decoded, input);
}

#[test]
fn per_chunk_size_never_exceeds_33_bytes() {
  for popcount in [0u32, 1, 31, 32, 128, 224, 225, 255, 256] {
    let mut input = vec![0u8; 32];
    let mut remaining = popcount;
    for byte in input.iter_mut() {
      let bits = remaining.min(8);
      *byte = if bits == 8 { 0xFF } else { (1u16 << bits) as u8 - 1 };
      remaining -= bits;
    }
    let compressed = compress_all(&input);
    assert!(compressed.len() - 4 <= 33, "popcount {popcount} exceeded 33 bytes");
  }
}
