use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use flitbit::Context;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
  /// Compress `input_path` into `output_path`.
  #[value(name = "c")]
  Compress,
  /// Decompress `input_path` into `output_path`.
  #[value(name = "d")]
  Decompress,
}

/// A thin file-based front end for the `flitbit` compression library.
#[derive(Parser, Debug)]
#[command(name = "flitbit")]
struct Opt {
  input_path: PathBuf,
  output_path: PathBuf,
  mode: Mode,
}

fn compress_file(opt: &Opt) -> Result<()> {
  let data = fs::read(&opt.input_path)?;
  let mut ctx = Context::new(data.len())?;
  ctx.input_mut()[..data.len()].copy_from_slice(&data);
  let compressed_size = ctx.compress(data.len())?;
  fs::write(&opt.output_path, ctx.compressed(compressed_size))?;
  Ok(())
}

fn decompress_file(opt: &Opt) -> Result<()> {
  let compressed = fs::read(&opt.input_path)?;
  let (_original_size, buffer_size) = flitbit::peek_decoded_size(&compressed)?;
  let mut decoded = vec![0u8; buffer_size];
  flitbit::decompress(&compressed, &mut decoded)?;
  fs::write(&opt.output_path, &decoded)?;
  Ok(())
}

fn main() -> Result<()> {
  let opt = Opt::parse();
  if !opt.input_path.is_file() {
    bail!("input path {:?} is not a file", opt.input_path);
  }
  match opt.mode {
    Mode::Compress => compress_file(&opt),
    Mode::Decompress => decompress_file(&opt),
  }
}
