//! Caller-controlled decode knobs.
//!
//! The wire schema itself is fixed by the protocol, with no negotiation, so
//! this is deliberately small: a couple of booleans and a size cap, passed
//! by value into the functions that need them rather than read from a file
//! or environment.

/// Options governing `frame_parse`/`decode_by_type`'s tolerance for
/// malformed or adversarial input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
  /// When `true`, `decode_by_type` returns `UnknownMsgType` for a
  /// `msg_type` with no catalog match instead of producing
  /// `AnyMessage::Unknown`.
  pub strict_dispatch: bool,

  /// Upper bound on a single repeating group's declared element count, or
  /// `Announcement`'s declared `RawDataLength`. Guards against a corrupt or
  /// adversarial count field driving an oversized allocation before the
  /// truncation check on the underlying bytes would otherwise catch it.
  pub max_group_or_blob_len: usize,
}

impl Default for DecodeOptions {
  fn default() -> Self {
    Self {
      strict_dispatch: false,
      max_group_or_blob_len: 1 << 20,
    }
  }
}
