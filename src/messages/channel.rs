//! Channel-level messages: `ChannelHeartbeat`, `Announcement`, `ReTransmit`.

use crate::cursor::{Cursor, WriteCursor};
use crate::errors::CodecError;
use crate::message::{fixed_message, Message};
use crate::primitives::{FixedStr, LocalTimeStamp, Length, SeqNum, WireField};

fixed_message! {
  /// Per-channel sequence-number keepalive.
  pub struct ChannelHeartbeat {
    msg_type = 390095,
    fields = {
      channel_no: u16,
      appl_last_seq_num: SeqNum,
      end_of_channel: crate::primitives::Boolean,
    }
  }
}

/// Market announcement / bulletin. Carries a trailing `raw_data` blob whose
/// length is given by the preceding `raw_data_length` field, so unlike the
/// rest of the catalog this message has a variable wire size and is
/// implemented by hand rather than via `fixed_message!`.
///
/// Encoding copies the blob only when the destination holds at least
/// `raw_data_length` bytes, reporting `BufferTooSmall` otherwise — the
/// natural reading of "the buffer must be big enough to hold the blob".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
  pub orig_time: LocalTimeStamp,
  pub channel_no: u16,
  pub news_id: FixedStr<8>,
  pub headline: FixedStr<128>,
  pub raw_data_format: FixedStr<8>,
  pub raw_data: Vec<u8>,
}

impl Announcement {
  const FIXED_PREFIX_SIZE: usize = 8 + 2 + 8 + 128 + 8 + 4;
}

impl Message for Announcement {
  const MSG_TYPE: u32 = 390012;

  fn wire_size(&self) -> usize {
    Self::FIXED_PREFIX_SIZE + self.raw_data.len()
  }

  fn decode_body(cur: &mut Cursor<'_>) -> Result<Self, CodecError> {
    let orig_time = LocalTimeStamp::decode(cur)?;
    let channel_no = u16::decode(cur)?;
    let news_id = FixedStr::decode(cur)?;
    let headline = FixedStr::decode(cur)?;
    let raw_data_format = FixedStr::decode(cur)?;
    let raw_data_length: Length = Length::decode(cur)?;
    let raw_data = cur.take(raw_data_length as usize)?.to_vec();
    Ok(Self {
      orig_time,
      channel_no,
      news_id,
      headline,
      raw_data_format,
      raw_data,
    })
  }

  fn encode_body(&self, out: &mut WriteCursor<'_>) -> Result<(), CodecError> {
    self.orig_time.encode(out)?;
    self.channel_no.encode(out)?;
    self.news_id.encode(out)?;
    self.headline.encode(out)?;
    self.raw_data_format.encode(out)?;
    let raw_data_length = self.raw_data.len() as Length;
    raw_data_length.encode(out)?;
    out.put(&self.raw_data)
  }
}

fixed_message! {
  /// Request/response for a gap-fill resend of missed channel traffic.
  pub struct ReTransmit {
    msg_type = 390094,
    fields = {
      resend_type: u8,
      channel_no: u16,
      appl_beg_seq_num: SeqNum,
      appl_end_seq_num: SeqNum,
      news_id: FixedStr<8>,
      resend_status: u8,
      reject_text: FixedStr<16>,
    }
  }
}

/// `ReTransmit::resend_type` meanings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResendType {
  TickData,
  Announcement,
}

impl ResendType {
  pub fn from_code(code: u8) -> Option<Self> {
    match code {
      1 => Some(Self::TickData),
      2 => Some(Self::Announcement),
      _ => None,
    }
  }
  pub fn code(self) -> u8 {
    match self {
      Self::TickData => 1,
      Self::Announcement => 2,
    }
  }
}

/// `ReTransmit::resend_status` meanings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResendStatus {
  Complete,
  Partial,
  Unauthorized,
  Unavailable,
}

impl ResendStatus {
  pub fn from_code(code: u8) -> Option<Self> {
    match code {
      1 => Some(Self::Complete),
      2 => Some(Self::Partial),
      3 => Some(Self::Unauthorized),
      4 => Some(Self::Unavailable),
      _ => None,
    }
  }
  pub fn code(self) -> u8 {
    match self {
      Self::Complete => 1,
      Self::Partial => 2,
      Self::Unauthorized => 3,
      Self::Unavailable => 4,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn channel_heartbeat_matches_scenario_bytes() {
    let hb = ChannelHeartbeat {
      channel_no: 2001,
      appl_last_seq_num: 1,
      end_of_channel: crate::primitives::Boolean(false),
    };
    let mut out = vec![0u8; hb.wire_size()];
    hb.encode_body(&mut WriteCursor::new(&mut out)).unwrap();
    assert_eq!(
      out,
      vec![0x07, 0xD1, 0, 0, 0, 0, 0, 0, 0, 0, 0x01, 0, 0]
    );
  }

  #[test]
  fn announcement_roundtrips_with_blob() {
    let ann = Announcement {
      orig_time: LocalTimeStamp(20_240_305_090_807_123),
      channel_no: 7,
      news_id: FixedStr::new("00000001"),
      headline: FixedStr::new("dividend"),
      raw_data_format: FixedStr::new("txt"),
      raw_data: b"hello world".to_vec(),
    };
    let size = ann.wire_size();
    assert_eq!(size, Announcement::FIXED_PREFIX_SIZE + 11);
    let mut out = vec![0u8; size];
    ann.encode_body(&mut WriteCursor::new(&mut out)).unwrap();
    let decoded = Announcement::decode_body(&mut Cursor::new(&out)).unwrap();
    assert_eq!(decoded, ann);
  }

  #[test]
  fn announcement_zero_length_blob() {
    let ann = Announcement {
      orig_time: LocalTimeStamp(0),
      channel_no: 0,
      news_id: FixedStr::default(),
      headline: FixedStr::default(),
      raw_data_format: FixedStr::default(),
      raw_data: Vec::new(),
    };
    assert_eq!(ann.wire_size(), Announcement::FIXED_PREFIX_SIZE);
  }
}
