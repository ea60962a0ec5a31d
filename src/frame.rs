//! The packet framer: header + body + trailing checksum.
//!
//! ```text
//! +----------------+------------------+ ... body ... +-----------------+
//! | MsgType u32 BE | BodyLength u32 BE |              | CheckSum u32 BE |
//! +----------------+------------------+---------------+-----------------+
//! ```

use crate::config::DecodeOptions;
use crate::cursor::WriteCursor;
use crate::errors::CodecError;
use crate::message::Message;

const HEADER_SIZE: usize = 8;
const CHECKSUM_SIZE: usize = 4;

/// Sum every byte of `bytes`, each reinterpreted as a *signed* 8-bit value
/// and widened, then take the low 8 bits. This matches accumulating
/// `(uint32_t)(char)byte` on a platform with a signed `char` (the
/// overwhelming majority): a byte with the high bit set contributes a
/// sign-extended negative term before the final `mod 256`.
pub fn checksum(bytes: &[u8]) -> u32 {
  let mut sum: u32 = 0;
  for &b in bytes {
    sum = sum.wrapping_add((b as i8) as i32 as u32);
  }
  sum & 0xff
}

/// A decoded, still-borrowed view over one complete frame: header fields
/// plus the body slice, with no field values parsed out yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameView<'a> {
  pub msg_type: u32,
  pub body_length: u32,
  pub body: &'a [u8],
  /// Total bytes consumed from the input buffer (header + body + checksum).
  pub frame_len: usize,
}

/// Decode one frame off the front of `buf` using default `DecodeOptions`.
pub fn frame_parse(buf: &[u8]) -> Result<FrameView<'_>, CodecError> {
  frame_parse_with_options(buf, DecodeOptions::default())
}

/// Decode one frame off the front of `buf`, subject to `options`.
///
/// Returns `Err(CodecError::NeedMore { hint })` — not a true error, just a
/// "come back with at least `hint` bytes" signal — when `buf` does not yet
/// hold a complete frame; this is the one streaming-aware accommodation the
/// codec makes without performing I/O itself.
pub fn frame_parse_with_options(
  buf: &[u8],
  options: DecodeOptions,
) -> Result<FrameView<'_>, CodecError> {
  if buf.len() < HEADER_SIZE {
    return Err(CodecError::NeedMore { hint: HEADER_SIZE });
  }
  let msg_type = u32::from_be_bytes(buf[0..4].try_into().unwrap());
  let body_length = u32::from_be_bytes(buf[4..8].try_into().unwrap());

  if body_length as usize > options.max_group_or_blob_len {
    log::warn!(
      "frame_parse: msg_type {msg_type} declares body_length {body_length}, \
       exceeding the configured cap of {}",
      options.max_group_or_blob_len
    );
    return Err(CodecError::Truncated {
      needed: body_length as usize,
      available: options.max_group_or_blob_len,
    });
  }

  let total = HEADER_SIZE + body_length as usize + CHECKSUM_SIZE;
  if buf.len() < total {
    return Err(CodecError::NeedMore { hint: total });
  }

  let computed = checksum(&buf[0..total - CHECKSUM_SIZE]);
  let parsed = u32::from_be_bytes(buf[total - CHECKSUM_SIZE..total].try_into().unwrap());
  if computed != parsed {
    log::warn!(
      "frame_parse: checksum mismatch for msg_type {msg_type}: expected {parsed}, computed {computed}"
    );
    return Err(CodecError::ChecksumMismatch {
      expected: parsed,
      computed,
    });
  }

  Ok(FrameView {
    msg_type,
    body_length,
    body: &buf[HEADER_SIZE..HEADER_SIZE + body_length as usize],
    frame_len: total,
  })
}

impl<'a> FrameView<'a> {
  /// Wrap this view's body as a [`crate::message::Borrowed`] view over `M`,
  /// without decoding it. Checks `msg_type` up front since that much is
  /// already in hand; does not otherwise inspect the body.
  pub fn as_borrowed<M: Message>(&self) -> Result<crate::message::Borrowed<'a, M>, CodecError> {
    if self.msg_type != M::MSG_TYPE {
      return Err(CodecError::MsgTypeMismatch {
        expected: M::MSG_TYPE,
        actual: self.msg_type,
      });
    }
    Ok(crate::message::Borrowed::new(self.body))
  }
}

/// Decode a typed message `M` out of `view`'s body, checking that
/// `view.msg_type == M::MSG_TYPE` first.
///
/// `TrailingBytes` is reported (not silently dropped) when the body holds
/// more than `M` consumes — the caller may choose `.ok()` or explicit
/// matching to ignore it, since it is recoverable rather than fatal.
pub fn decode_message<M: Message>(view: &FrameView<'_>) -> Result<M, CodecError> {
  if view.msg_type != M::MSG_TYPE {
    return Err(CodecError::MsgTypeMismatch {
      expected: M::MSG_TYPE,
      actual: view.msg_type,
    });
  }
  let mut cur = crate::cursor::Cursor::new(view.body);
  let msg = M::decode_body(&mut cur)?;
  let consumed = view.body.len() - cur.remaining();
  if consumed < view.body.len() {
    let extra = view.body.len() - consumed;
    log::warn!(
      "decode_message: msg_type {} body has {extra} trailing bytes beyond its declared size",
      M::MSG_TYPE
    );
    return Err(CodecError::TrailingBytes { extra });
  }
  Ok(msg)
}

/// `8 (header) + msg.wire_size() + 4 (checksum)`.
pub fn size_of_frame<M: Message>(msg: &M) -> usize {
  HEADER_SIZE + msg.wire_size() + CHECKSUM_SIZE
}

/// Build a complete, self-describing frame for `msg`: header + body +
/// checksum, freshly allocated.
pub fn encode_message<M: Message>(msg: &M) -> Result<Vec<u8>, CodecError> {
  let mut buf = vec![0u8; size_of_frame(msg)];
  write_frame(msg, &mut buf)?;
  Ok(buf)
}

fn write_frame<M: Message>(msg: &M, buf: &mut [u8]) -> Result<(), CodecError> {
  let body_size = msg.wire_size();
  let total = HEADER_SIZE + body_size + CHECKSUM_SIZE;
  debug_assert_eq!(buf.len(), total);

  buf[0..4].copy_from_slice(&M::MSG_TYPE.to_be_bytes());
  buf[4..8].copy_from_slice(&(body_size as u32).to_be_bytes());
  {
    let mut out = WriteCursor::new(&mut buf[HEADER_SIZE..HEADER_SIZE + body_size]);
    msg.encode_body(&mut out)?;
  }
  let sum = checksum(&buf[0..total - CHECKSUM_SIZE]);
  buf[total - CHECKSUM_SIZE..total].copy_from_slice(&sum.to_be_bytes());
  Ok(())
}

/// Round `needed` up to the next multiple of 64, so repeated `encode` calls
/// on a growing message size don't reallocate on every single byte of
/// growth.
fn round_up_64(needed: usize) -> usize {
  (needed + 63) & !63
}

/// A reusable frame encoder, avoiding a fresh allocation per message.
///
/// Growth rounds up to the next multiple of 64 bytes; growth only ever
/// happens via `Vec::resize`, which preserves prior contents, but any slice
/// or pointer obtained from a previous `encode` call must be re-acquired
/// afterward since the backing allocation may have moved.
#[derive(Debug, Default)]
pub struct FrameEncoder {
  buf: Vec<u8>,
}

impl FrameEncoder {
  pub fn new() -> Self {
    Self { buf: Vec::new() }
  }

  /// Encode `msg` into the internal buffer, growing it if needed, and
  /// return the frame as a slice valid until the next call to `encode`.
  pub fn encode<M: Message>(&mut self, msg: &M) -> Result<&[u8], CodecError> {
    let needed = size_of_frame(msg);
    if self.buf.len() < needed {
      let grown = round_up_64(needed);
      log::trace!(
        "FrameEncoder: growing buffer from {} to {grown} bytes",
        self.buf.len()
      );
      self.buf.resize(grown, 0);
    }
    write_frame(msg, &mut self.buf[..needed])?;
    Ok(&self.buf[..needed])
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::messages::channel::ChannelHeartbeat;
  use crate::messages::session::Heartbeat;
  use crate::primitives::Boolean;

  #[test]
  fn heartbeat_matches_scenario_1() {
    let frame = encode_message(&Heartbeat {}).unwrap();
    assert_eq!(
      frame,
      vec![0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03]
    );
  }

  #[test]
  fn channel_heartbeat_matches_scenario_2() {
    let msg = ChannelHeartbeat {
      channel_no: 2001,
      appl_last_seq_num: 1,
      end_of_channel: Boolean(false),
    };
    let frame = encode_message(&msg).unwrap();
    assert_eq!(&frame[0..4], &[0x00, 0x05, 0xF3, 0x6F]);
    assert_eq!(&frame[4..8], &[0x00, 0x00, 0x00, 0x0D]);
    assert_eq!(
      &frame[8..21],
      &[0x07, 0xD1, 0, 0, 0, 0, 0, 0, 0, 0, 0x01, 0, 0]
    );
    let expected_sum = checksum(&frame[0..frame.len() - 4]);
    let parsed_sum = u32::from_be_bytes(frame[frame.len() - 4..].try_into().unwrap());
    assert_eq!(parsed_sum, expected_sum);
  }

  #[test]
  fn frame_round_trips() {
    let msg = ChannelHeartbeat {
      channel_no: 7,
      appl_last_seq_num: 99,
      end_of_channel: Boolean(true),
    };
    let frame = encode_message(&msg).unwrap();
    assert_eq!(frame.len(), size_of_frame(&msg));
    let view = frame_parse(&frame).unwrap();
    assert_eq!(view.frame_len, frame.len());
    let decoded: ChannelHeartbeat = decode_message(&view).unwrap();
    assert_eq!(decoded, msg);
  }

  #[test]
  fn borrowed_view_defers_decode_until_materialized() {
    let msg = ChannelHeartbeat {
      channel_no: 11,
      appl_last_seq_num: 4,
      end_of_channel: Boolean(false),
    };
    let frame = encode_message(&msg).unwrap();
    let view = frame_parse(&frame).unwrap();
    let borrowed = view.as_borrowed::<ChannelHeartbeat>().unwrap();
    assert_eq!(borrowed.body(), view.body);
    assert_eq!(borrowed.materialize().unwrap(), msg);

    let err = view.as_borrowed::<Heartbeat>().unwrap_err();
    assert!(matches!(err, CodecError::MsgTypeMismatch { .. }));
  }

  #[test]
  fn need_more_on_short_header() {
    let err = frame_parse(&[0, 0, 0, 3]).unwrap_err();
    assert_eq!(err, CodecError::NeedMore { hint: 8 });
  }

  #[test]
  fn need_more_on_short_body() {
    let frame = encode_message(&Heartbeat {}).unwrap();
    let err = frame_parse(&frame[0..10]).unwrap_err();
    assert!(matches!(err, CodecError::NeedMore { .. }));
  }

  #[test]
  fn checksum_failure_matches_scenario_6() {
    let mut frame = encode_message(&Heartbeat {}).unwrap();
    *frame.last_mut().unwrap() = 0x04;
    let err = frame_parse(&frame).unwrap_err();
    assert!(matches!(err, CodecError::ChecksumMismatch { .. }));
  }

  #[test]
  fn msg_type_mismatch_is_detected() {
    let frame = encode_message(&Heartbeat {}).unwrap();
    let view = frame_parse(&frame).unwrap();
    let err = decode_message::<ChannelHeartbeat>(&view).unwrap_err();
    assert!(matches!(err, CodecError::MsgTypeMismatch { .. }));
  }

  #[test]
  fn frame_encoder_reuses_and_grows_buffer() {
    let mut encoder = FrameEncoder::new();
    let small = encoder.encode(&Heartbeat {}).unwrap().to_vec();
    assert_eq!(small.len(), 12);

    let msg = ChannelHeartbeat {
      channel_no: 1,
      appl_last_seq_num: 1,
      end_of_channel: Boolean(false),
    };
    let bigger = encoder.encode(&msg).unwrap().to_vec();
    assert_eq!(bigger.len(), size_of_frame(&msg));
    let view = frame_parse(&bigger).unwrap();
    let decoded: ChannelHeartbeat = decode_message(&view).unwrap();
    assert_eq!(decoded, msg);
  }

  #[test]
  fn oversized_body_length_is_rejected_before_buffering() {
    let options = DecodeOptions {
      max_group_or_blob_len: 16,
      ..DecodeOptions::default()
    };
    let mut header = vec![0x00, 0x00, 0x00, 0x03];
    header.extend_from_slice(&1_000_000u32.to_be_bytes());
    let err = frame_parse_with_options(&header, options).unwrap_err();
    assert!(matches!(err, CodecError::Truncated { .. }));
  }
}
