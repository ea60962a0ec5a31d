//! Maps a frame's `msg_type` to the matching message variant.
//!
//! A sealed tagged enum stands in for the usual runtime-polymorphism class
//! hierarchy a message catalog like this tends to grow; matching on it is
//! exhaustiveness-checked by the compiler and costs no vtable indirection
//! on the decode hot path.

use crate::config::DecodeOptions;
use crate::cursor::Cursor;
use crate::errors::CodecError;
use crate::message::Message;
use crate::messages::channel::{Announcement, ChannelHeartbeat, ReTransmit};
use crate::messages::market_snapshot::{
  MarketSnapshot300111, MarketSnapshot300611, MarketSnapshot306311, MarketSnapshot309011,
  MarketSnapshot309111,
};
use crate::messages::market_status::{MarketSnapshotStatistic, MarketStatus, SecurityStatus};
use crate::messages::order_snapshot::{
  OrderSnapshot300192, OrderSnapshot300592, OrderSnapshot300792,
};
use crate::messages::session::{BusinessReject, Heartbeat, Logon, Logout};
use crate::messages::transaction_snapshot::{
  TransactionSnapshot300191, TransactionSnapshot300591, TransactionSnapshot300791,
};

/// Every message shape in the catalog, tagged by its wire `msg_type`, plus
/// an `Unknown` case so a `msg_type` the catalog doesn't (yet) cover is a
/// value the caller can inspect rather than a hard decode failure.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyMessage {
  Logon(Logon),
  Logout(Logout),
  Heartbeat(Heartbeat),
  BusinessReject(BusinessReject),
  ChannelHeartbeat(ChannelHeartbeat),
  Announcement(Announcement),
  ReTransmit(ReTransmit),
  MarketStatus(MarketStatus),
  SecurityStatus(SecurityStatus),
  MarketSnapshotStatistic(MarketSnapshotStatistic),
  MarketSnapshot300111(MarketSnapshot300111),
  MarketSnapshot300611(MarketSnapshot300611),
  MarketSnapshot306311(MarketSnapshot306311),
  MarketSnapshot309011(MarketSnapshot309011),
  MarketSnapshot309111(MarketSnapshot309111),
  OrderSnapshot300192(OrderSnapshot300192),
  OrderSnapshot300592(OrderSnapshot300592),
  OrderSnapshot300792(OrderSnapshot300792),
  TransactionSnapshot300191(TransactionSnapshot300191),
  TransactionSnapshot300591(TransactionSnapshot300591),
  TransactionSnapshot300791(TransactionSnapshot300791),
  /// A `msg_type` with no catalog match. Kept as `(msg_type, body)` rather
  /// than dropped, so a forward-compatible caller can still log or forward
  /// the raw bytes.
  Unknown { msg_type: u32, body: Vec<u8> },
}

impl AnyMessage {
  pub fn msg_type(&self) -> u32 {
    match self {
      Self::Logon(_) => Logon::MSG_TYPE,
      Self::Logout(_) => Logout::MSG_TYPE,
      Self::Heartbeat(_) => Heartbeat::MSG_TYPE,
      Self::BusinessReject(_) => BusinessReject::MSG_TYPE,
      Self::ChannelHeartbeat(_) => ChannelHeartbeat::MSG_TYPE,
      Self::Announcement(_) => Announcement::MSG_TYPE,
      Self::ReTransmit(_) => ReTransmit::MSG_TYPE,
      Self::MarketStatus(_) => MarketStatus::MSG_TYPE,
      Self::SecurityStatus(_) => SecurityStatus::MSG_TYPE,
      Self::MarketSnapshotStatistic(_) => MarketSnapshotStatistic::MSG_TYPE,
      Self::MarketSnapshot300111(_) => MarketSnapshot300111::MSG_TYPE,
      Self::MarketSnapshot300611(_) => MarketSnapshot300611::MSG_TYPE,
      Self::MarketSnapshot306311(_) => MarketSnapshot306311::MSG_TYPE,
      Self::MarketSnapshot309011(_) => MarketSnapshot309011::MSG_TYPE,
      Self::MarketSnapshot309111(_) => MarketSnapshot309111::MSG_TYPE,
      Self::OrderSnapshot300192(_) => OrderSnapshot300192::MSG_TYPE,
      Self::OrderSnapshot300592(_) => OrderSnapshot300592::MSG_TYPE,
      Self::OrderSnapshot300792(_) => OrderSnapshot300792::MSG_TYPE,
      Self::TransactionSnapshot300191(_) => TransactionSnapshot300191::MSG_TYPE,
      Self::TransactionSnapshot300591(_) => TransactionSnapshot300591::MSG_TYPE,
      Self::TransactionSnapshot300791(_) => TransactionSnapshot300791::MSG_TYPE,
      Self::Unknown { msg_type, .. } => *msg_type,
    }
  }
}

/// Decode `body` as whichever catalog member `msg_type` names, using
/// default `DecodeOptions` (lenient: an unrecognized `msg_type` becomes
/// `AnyMessage::Unknown` rather than an error).
pub fn decode_by_type(msg_type: u32, body: &[u8]) -> Result<AnyMessage, CodecError> {
  decode_by_type_with_options(msg_type, body, DecodeOptions::default())
}

/// Decode `body` as whichever catalog member `msg_type` names, subject to
/// `options`. With `options.strict_dispatch` set, an unrecognized
/// `msg_type` fails with `UnknownMsgType` instead of producing `Unknown`.
pub fn decode_by_type_with_options(
  msg_type: u32,
  body: &[u8],
  options: DecodeOptions,
) -> Result<AnyMessage, CodecError> {
  if body.len() > options.max_group_or_blob_len {
    return Err(CodecError::Truncated {
      needed: body.len(),
      available: options.max_group_or_blob_len,
    });
  }

  macro_rules! try_decode {
    ($ty:ty, $variant:ident) => {
      if msg_type == <$ty as Message>::MSG_TYPE {
        let mut cur = Cursor::new(body);
        return Ok(AnyMessage::$variant(<$ty>::decode_body(&mut cur)?));
      }
    };
  }

  try_decode!(Logon, Logon);
  try_decode!(Logout, Logout);
  try_decode!(Heartbeat, Heartbeat);
  try_decode!(BusinessReject, BusinessReject);
  try_decode!(ChannelHeartbeat, ChannelHeartbeat);
  try_decode!(Announcement, Announcement);
  try_decode!(ReTransmit, ReTransmit);
  try_decode!(MarketStatus, MarketStatus);
  try_decode!(SecurityStatus, SecurityStatus);
  try_decode!(MarketSnapshotStatistic, MarketSnapshotStatistic);
  try_decode!(MarketSnapshot300111, MarketSnapshot300111);
  try_decode!(MarketSnapshot300611, MarketSnapshot300611);
  try_decode!(MarketSnapshot306311, MarketSnapshot306311);
  try_decode!(MarketSnapshot309011, MarketSnapshot309011);
  try_decode!(MarketSnapshot309111, MarketSnapshot309111);
  try_decode!(OrderSnapshot300192, OrderSnapshot300192);
  try_decode!(OrderSnapshot300592, OrderSnapshot300592);
  try_decode!(OrderSnapshot300792, OrderSnapshot300792);
  try_decode!(TransactionSnapshot300191, TransactionSnapshot300191);
  try_decode!(TransactionSnapshot300591, TransactionSnapshot300591);
  try_decode!(TransactionSnapshot300791, TransactionSnapshot300791);

  if options.strict_dispatch {
    log::warn!("decode_by_type: unknown msg_type {msg_type} under strict dispatch");
    return Err(CodecError::UnknownMsgType { msg_type });
  }
  log::trace!("decode_by_type: unknown msg_type {msg_type}, carrying body through as-is");
  Ok(AnyMessage::Unknown {
    msg_type,
    body: body.to_vec(),
  })
}
