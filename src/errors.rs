use thiserror::Error;

/// Everything that can go wrong while decoding or encoding a SZSE V5 frame
/// or one of its constituent fields.
///
/// Every variant here corresponds to one `ErrorKind` of the wire codec; the
/// struct fields carry enough context (offsets, counts, the offending code)
/// to build a useful `Display` message without the caller re-deriving it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
  /// The input buffer held fewer bytes than the element being decoded needs.
  #[error("truncated input: needed {needed} bytes, only {available} available")]
  Truncated { needed: usize, available: usize },

  /// The output buffer is too small to hold the element being encoded.
  #[error("buffer too small: needed {needed} bytes, only {available} available")]
  BufferTooSmall { needed: usize, available: usize },

  /// The frame's trailing checksum does not match the computed value.
  #[error("checksum mismatch: expected {expected}, computed {computed}")]
  ChecksumMismatch { expected: u32, computed: u32 },

  /// `decode_message::<M>` was called against a frame whose `msg_type`
  /// does not equal `M::MSG_TYPE`.
  #[error("msg_type mismatch: frame carries {actual}, expected {expected}")]
  MsgTypeMismatch { expected: u32, actual: u32 },

  /// Strict dispatch saw a `msg_type` with no matching message variant.
  #[error("unknown msg_type {msg_type}")]
  UnknownMsgType { msg_type: u32 },

  /// `Group::get`/`BorrowedGroup::get` indexed past the element count.
  #[error("group index {index} out of bounds (len {len})")]
  IndexOutOfBounds { index: usize, len: usize },

  /// A write was attempted through a borrowed (read-only) view.
  #[error("write attempted on an immutable borrowed view")]
  Immutable,

  /// A `Number` field was given a non-finite `f64` to encode.
  #[error("non-finite value cannot be encoded as a Number field")]
  InvalidNumber,

  /// A message body held more bytes than the message's declared wire size;
  /// recoverable, the caller may choose to ignore it.
  #[error("body has {extra} trailing bytes beyond the message's declared size")]
  TrailingBytes { extra: usize },

  /// `frame_parse` did not yet see a complete frame; `hint` is the total
  /// byte count the caller should wait for before retrying.
  #[error("incomplete frame, need at least {hint} bytes")]
  NeedMore { hint: usize },
}

pub type Result<T> = std::result::Result<T, CodecError>;
