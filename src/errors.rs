use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

/// The different kinds of errors the library can return.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
  /// The context could not allocate its buffers.
  AllocationFailed,
  /// The declared input size exceeds the context's upper bound, or
  /// cannot be represented in the 4-byte frame prefix.
  InputTooLarge,
  /// The caller's decode destination is smaller than the size
  /// `peek_decoded_size` reports.
  OutputTooSmall,
  /// The compressed stream is inconsistent with the wire format: a
  /// reserved category tag, a truncated payload, or a frame shorter
  /// than the size prefix.
  CorruptStream,
}

/// The error type used in results for all `flitbit` functionality.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlitBitError {
  pub kind: ErrorKind,
  pub message: String,
}

impl FlitBitError {
  pub(crate) fn new<S: AsRef<str>>(kind: ErrorKind, message: S) -> Self {
    FlitBitError {
      kind,
      message: message.as_ref().to_string(),
    }
  }

  pub(crate) fn allocation_failed<S: AsRef<str>>(message: S) -> Self {
    Self::new(ErrorKind::AllocationFailed, message)
  }

  pub(crate) fn input_too_large<S: AsRef<str>>(message: S) -> Self {
    Self::new(ErrorKind::InputTooLarge, message)
  }

  pub(crate) fn output_too_small<S: AsRef<str>>(message: S) -> Self {
    Self::new(ErrorKind::OutputTooSmall, message)
  }

  pub(crate) fn corrupt_stream<S: AsRef<str>>(message: S) -> Self {
    Self::new(ErrorKind::CorruptStream, message)
  }
}

impl Display for FlitBitError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "flitbit {:?} error: {}", self.kind, &self.message)
  }
}

impl Error for FlitBitError {}

pub type FlitBitResult<T> = Result<T, FlitBitError>;
