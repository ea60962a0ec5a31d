//! Market-wide and security-level status: `MarketStatus`, `SecurityStatus`,
//! `MarketSnapshotStatistic`.

use crate::cursor::{Cursor, WriteCursor};
use crate::errors::CodecError;
use crate::group::Group;
use crate::message::{fixed_message, group_element, Message};
use crate::primitives::{
  Amt, Boolean, FixedStr, LocalTimeStamp, NumInGroup, SecurityId, WireField,
};

fixed_message! {
  /// Trading-session status for a market/board as a whole.
  pub struct MarketStatus {
    msg_type = 390019,
    fields = {
      orig_time: LocalTimeStamp,
      channel_no: u16,
      market_id: FixedStr<8>,
      market_segment_id: FixedStr<8>,
      trading_session_id: FixedStr<4>,
      trading_session_sub_id: FixedStr<4>,
      trad_ses_status: u16,
      trad_ses_start_time: LocalTimeStamp,
      trad_ses_end_time: LocalTimeStamp,
      threshold_amount: Amt,
      pos_amt: Amt,
      amount_status: FixedStr<1>,
    }
  }
}

group_element! {
  /// One halt/resume switch entry inside `SecurityStatus::switches`.
  pub struct SecuritySwitch {
    switch_type: u16,
    switch_status: Boolean,
  }
}

/// Per-security trading status, carrying a variable number of halt/resume
/// switches. Unlike `MarketStatus` this has a repeating group, so its wire
/// size depends on content and it is implemented by hand rather than via
/// `fixed_message!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityStatus {
  pub orig_time: LocalTimeStamp,
  pub channel_no: u16,
  pub security_id: SecurityId,
  pub security_id_source: FixedStr<4>,
  pub financial_status: FixedStr<8>,
  pub switches: Group<SecuritySwitch>,
}

impl SecurityStatus {
  const FIXED_PREFIX_SIZE: usize = 8 + 2 + 8 + 4 + 8 + 4;
}

impl Message for SecurityStatus {
  const MSG_TYPE: u32 = 390013;

  fn wire_size(&self) -> usize {
    Self::FIXED_PREFIX_SIZE + self.switches.wire_size()
  }

  fn decode_body(cur: &mut Cursor<'_>) -> Result<Self, CodecError> {
    let orig_time = LocalTimeStamp::decode(cur)?;
    let channel_no = u16::decode(cur)?;
    let security_id = SecurityId::decode(cur)?;
    let security_id_source = FixedStr::decode(cur)?;
    let financial_status = FixedStr::decode(cur)?;
    let no_switch: NumInGroup = NumInGroup::decode(cur)?;
    let switches = Group::decode(cur, no_switch as usize)?;
    Ok(Self {
      orig_time,
      channel_no,
      security_id,
      security_id_source,
      financial_status,
      switches,
    })
  }

  fn encode_body(&self, out: &mut WriteCursor<'_>) -> Result<(), CodecError> {
    self.orig_time.encode(out)?;
    self.channel_no.encode(out)?;
    self.security_id.encode(out)?;
    self.security_id_source.encode(out)?;
    self.financial_status.encode(out)?;
    (self.switches.len() as NumInGroup).encode(out)?;
    self.switches.encode(out)
  }
}

group_element! {
  /// Per-stream security count and closing status inside
  /// `MarketSnapshotStatistic`.
  pub struct StreamStat {
    md_stream_id: FixedStr<3>,
    stock_num: u32,
    trading_phase_code: FixedStr<8>,
  }
}

/// Periodic per-`MDStreamID` accounting of how many securities are carried
/// on a stream and its closing status, used by a subscriber to detect a
/// stalled or misconfigured stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketSnapshotStatistic {
  pub orig_time: LocalTimeStamp,
  pub channel_no: u16,
  pub streams: Group<StreamStat>,
}

impl MarketSnapshotStatistic {
  const FIXED_PREFIX_SIZE: usize = 8 + 2 + 4;
}

impl Message for MarketSnapshotStatistic {
  const MSG_TYPE: u32 = 390090;

  fn wire_size(&self) -> usize {
    Self::FIXED_PREFIX_SIZE + self.streams.wire_size()
  }

  fn decode_body(cur: &mut Cursor<'_>) -> Result<Self, CodecError> {
    let orig_time = LocalTimeStamp::decode(cur)?;
    let channel_no = u16::decode(cur)?;
    let no_md_stream_id: NumInGroup = NumInGroup::decode(cur)?;
    let streams = Group::decode(cur, no_md_stream_id as usize)?;
    Ok(Self {
      orig_time,
      channel_no,
      streams,
    })
  }

  fn encode_body(&self, out: &mut WriteCursor<'_>) -> Result<(), CodecError> {
    self.orig_time.encode(out)?;
    self.channel_no.encode(out)?;
    (self.streams.len() as NumInGroup).encode(out)?;
    self.streams.encode(out)
  }
}
