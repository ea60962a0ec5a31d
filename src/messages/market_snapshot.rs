//! `MarketSnapshot_*` family: full-depth, simplified-depth, and complex-event
//! variants, all sharing the same `MarketSnapshotBase` prefix.

use crate::cursor::{Cursor, WriteCursor};
use crate::errors::CodecError;
use crate::group::Group;
use crate::message::{fixed_message, group_element, Message};
use crate::primitives::{
  Amt, FixedStr, LocalTimeStamp, NumInGroup, Price, Qty, SecurityId, WireField,
};

group_element! {
  /// Fields common to every `MarketSnapshot_*` variant, in wire order.
  pub struct MarketSnapshotBase {
    orig_time: LocalTimeStamp,
    channel_no: u16,
    md_stream_id: FixedStr<3>,
    security_id: SecurityId,
    security_id_source: FixedStr<4>,
    trading_phase_code: FixedStr<8>,
    prev_close_px: Price,
    num_trades: i64,
    total_volume_trade: Qty,
    total_value_trade: Amt,
  }
}

group_element! {
  /// A single resting order's quantity inside a `SecurityEntry`'s order
  /// queue (the order-by-order detail under Level 1 of a `300111` entry).
  pub struct OrderQty {
    qty: Qty,
  }
}

/// One price-level entry of a `MarketSnapshot_300111` (full market-by-price
/// depth with per-level order queues). Its own `NoOrders` group makes its
/// wire size variable, so it cannot be declared via `group_element!` and is
/// implemented by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityEntry {
  pub md_entry_type: FixedStr<2>,
  pub md_entry_px: i64,
  pub md_entry_size: Qty,
  pub md_price_level: u16,
  pub number_of_orders: i64,
  pub orders: Group<OrderQty>,
}

impl SecurityEntry {
  const FIXED_PREFIX_SIZE: usize = 2 + 8 + 8 + 2 + 8 + 4;
}

impl WireField for SecurityEntry {
  fn wire_size(&self) -> usize {
    Self::FIXED_PREFIX_SIZE + self.orders.wire_size()
  }

  fn decode(cur: &mut Cursor<'_>) -> Result<Self, CodecError> {
    let md_entry_type = FixedStr::decode(cur)?;
    let md_entry_px = i64::decode(cur)?;
    let md_entry_size = Qty::decode(cur)?;
    let md_price_level = u16::decode(cur)?;
    let number_of_orders = i64::decode(cur)?;
    let no_orders: NumInGroup = NumInGroup::decode(cur)?;
    let orders = Group::decode(cur, no_orders as usize)?;
    Ok(Self {
      md_entry_type,
      md_entry_px,
      md_entry_size,
      md_price_level,
      number_of_orders,
      orders,
    })
  }

  fn encode(&self, out: &mut WriteCursor<'_>) -> Result<(), CodecError> {
    self.md_entry_type.encode(out)?;
    self.md_entry_px.encode(out)?;
    self.md_entry_size.encode(out)?;
    self.md_price_level.encode(out)?;
    self.number_of_orders.encode(out)?;
    (self.orders.len() as NumInGroup).encode(out)?;
    self.orders.encode(out)
  }
}

/// Generates a `MarketSnapshot_*` message whose body is `base` followed by
/// one repeating group of `$entry`, driven by a `NumInGroup` count. Covers
/// every variant except `300111` (nested order queues, handled above by
/// hand) and `309111` (no group at all, a plain `fixed_message!`).
macro_rules! snapshot_with_one_group {
  ($(#[$meta:meta])* pub struct $name:ident, msg_type = $msg_type:expr, entry = $entry:ty, entries_field = $entries:ident) => {
    $(#[$meta])*
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct $name {
      pub base: MarketSnapshotBase,
      pub $entries: Group<$entry>,
    }

    impl Message for $name {
      const MSG_TYPE: u32 = $msg_type;

      fn wire_size(&self) -> usize {
        use crate::primitives::FixedSize;
        <MarketSnapshotBase as FixedSize>::WIRE_SIZE + 4 + self.$entries.wire_size()
      }

      fn decode_body(cur: &mut Cursor<'_>) -> Result<Self, CodecError> {
        let base = MarketSnapshotBase::decode(cur)?;
        let count: NumInGroup = NumInGroup::decode(cur)?;
        let $entries = Group::decode(cur, count as usize)?;
        Ok(Self { base, $entries })
      }

      fn encode_body(&self, out: &mut WriteCursor<'_>) -> Result<(), CodecError> {
        self.base.encode(out)?;
        (self.$entries.len() as NumInGroup).encode(out)?;
        self.$entries.encode(out)
      }
    }
  };
}

snapshot_with_one_group!(
  /// Full market-by-price depth with per-level order queues.
  pub struct MarketSnapshot300111,
  msg_type = 300111,
  entry = SecurityEntry,
  entries_field = entries
);

group_element! {
  /// One price-level entry of a `MarketSnapshot_300611` (depth without
  /// order-queue detail).
  pub struct SimpleEntry {
    md_entry_type: FixedStr<2>,
    md_entry_px: i64,
    md_entry_size: Qty,
  }
}

snapshot_with_one_group!(
  /// Simplified market-by-price depth (no order-queue detail).
  pub struct MarketSnapshot300611,
  msg_type = 300611,
  entry = SimpleEntry,
  entries_field = entries
);

group_element! {
  /// One price-level entry of a `MarketSnapshot_306311` (options-style
  /// depth with an explicit price-level index).
  pub struct LeveledEntry {
    md_entry_type: FixedStr<2>,
    md_entry_px: i64,
    md_entry_size: Qty,
    md_price_level: u16,
  }
}

group_element! {
  /// A trading-halt window inside `MarketSnapshot_306311`'s complex-event
  /// group (used for options/derivatives instruments with scheduled
  /// call-auction windows).
  pub struct ComplexEventTime {
    start_time: LocalTimeStamp,
    end_time: LocalTimeStamp,
  }
}

/// Depth snapshot carrying both a leveled-entry group and a second,
/// independent repeating group of complex-event time windows. Has two
/// groups in sequence, so it is implemented by hand rather than via
/// `snapshot_with_one_group!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketSnapshot306311 {
  pub base: MarketSnapshotBase,
  pub entries: Group<LeveledEntry>,
  pub complex_event_times: Group<ComplexEventTime>,
}

impl Message for MarketSnapshot306311 {
  const MSG_TYPE: u32 = 306311;

  fn wire_size(&self) -> usize {
    use crate::primitives::FixedSize;
    <MarketSnapshotBase as FixedSize>::WIRE_SIZE
      + 4
      + self.entries.wire_size()
      + 4
      + self.complex_event_times.wire_size()
  }

  fn decode_body(cur: &mut Cursor<'_>) -> Result<Self, CodecError> {
    let base = MarketSnapshotBase::decode(cur)?;
    let no_md_entries: NumInGroup = NumInGroup::decode(cur)?;
    let entries = Group::decode(cur, no_md_entries as usize)?;
    let no_complex_event_times: NumInGroup = NumInGroup::decode(cur)?;
    let complex_event_times = Group::decode(cur, no_complex_event_times as usize)?;
    Ok(Self {
      base,
      entries,
      complex_event_times,
    })
  }

  fn encode_body(&self, out: &mut WriteCursor<'_>) -> Result<(), CodecError> {
    self.base.encode(out)?;
    (self.entries.len() as NumInGroup).encode(out)?;
    self.entries.encode(out)?;
    (self.complex_event_times.len() as NumInGroup).encode(out)?;
    self.complex_event_times.encode(out)
  }
}

group_element! {
  /// One price-level entry of a `MarketSnapshot_309011` (price-only depth,
  /// no size).
  pub struct PriceOnlyEntry {
    md_entry_type: FixedStr<2>,
    md_entry_px: i64,
  }
}

snapshot_with_one_group!(
  /// Price-only depth (e.g. indicative open/close auction levels).
  pub struct MarketSnapshot309011,
  msg_type = 309011,
  entry = PriceOnlyEntry,
  entries_field = entries
);

fixed_message! {
  /// Lightweight snapshot carrying only a constituent-stock count (used for
  /// index-style instruments with no per-level depth).
  pub struct MarketSnapshot309111 {
    msg_type = 309111,
    fields = {
      base: MarketSnapshotBase,
      stock_num: u32,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_base() -> MarketSnapshotBase {
    MarketSnapshotBase {
      orig_time: LocalTimeStamp(20_240_305_093_000_000),
      channel_no: 1,
      md_stream_id: FixedStr::new("010"),
      security_id: SecurityId::new("00000001"),
      security_id_source: FixedStr::new("102"),
      trading_phase_code: FixedStr::new("T0000"),
      prev_close_px: Price::from_f64(10.0).unwrap(),
      num_trades: 0,
      total_volume_trade: Qty::from_f64(0.0).unwrap(),
      total_value_trade: Amt::from_f64(0.0).unwrap(),
    }
  }

  #[test]
  fn snapshot_300111_order_queue_sizing_matches_scenario() {
    let entry = SecurityEntry {
      md_entry_type: FixedStr::new("0"),
      md_entry_px: 123_400,
      md_entry_size: Qty::from_scaled(500),
      md_price_level: 1,
      number_of_orders: 3,
      orders: Group::from_iter([
        OrderQty { qty: Qty::from_scaled(100_000) },
        OrderQty { qty: Qty::from_scaled(200_000) },
        OrderQty { qty: Qty::from_scaled(300_000) },
      ]),
    };
    assert_eq!(entry.wire_size(), SecurityEntry::FIXED_PREFIX_SIZE + 3 * 8);

    let snapshot = MarketSnapshot300111 {
      base: sample_base(),
      entries: Group::from_iter([entry]),
    };
    let mut out = vec![0u8; snapshot.wire_size()];
    snapshot
      .encode_body(&mut WriteCursor::new(&mut out))
      .unwrap();
    let decoded = MarketSnapshot300111::decode_body(&mut Cursor::new(&out)).unwrap();
    assert_eq!(decoded, snapshot);
  }

  #[test]
  fn snapshot_300611_zero_entries_round_trips() {
    let snapshot = MarketSnapshot300611 {
      base: sample_base(),
      entries: Group::new(),
    };
    let mut out = vec![0u8; snapshot.wire_size()];
    snapshot
      .encode_body(&mut WriteCursor::new(&mut out))
      .unwrap();
    let decoded = MarketSnapshot300611::decode_body(&mut Cursor::new(&out)).unwrap();
    assert_eq!(decoded, snapshot);
  }

  #[test]
  fn snapshot_306311_two_independent_groups_round_trip() {
    let snapshot = MarketSnapshot306311 {
      base: sample_base(),
      entries: Group::from_iter([LeveledEntry {
        md_entry_type: FixedStr::new("0"),
        md_entry_px: 1,
        md_entry_size: Qty::from_scaled(1),
        md_price_level: 1,
      }]),
      complex_event_times: Group::from_iter([ComplexEventTime {
        start_time: LocalTimeStamp(20_240_305_093_000_000),
        end_time: LocalTimeStamp(20_240_305_100_000_000),
      }]),
    };
    let mut out = vec![0u8; snapshot.wire_size()];
    snapshot
      .encode_body(&mut WriteCursor::new(&mut out))
      .unwrap();
    let decoded = MarketSnapshot306311::decode_body(&mut Cursor::new(&out)).unwrap();
    assert_eq!(decoded, snapshot);
  }

  #[test]
  fn snapshot_309011_price_only_round_trips() {
    let snapshot = MarketSnapshot309011 {
      base: sample_base(),
      entries: Group::from_iter([PriceOnlyEntry {
        md_entry_type: FixedStr::new("2"),
        md_entry_px: 99_000,
      }]),
    };
    let mut out = vec![0u8; snapshot.wire_size()];
    snapshot
      .encode_body(&mut WriteCursor::new(&mut out))
      .unwrap();
    let decoded = MarketSnapshot309011::decode_body(&mut Cursor::new(&out)).unwrap();
    assert_eq!(decoded, snapshot);
  }

  #[test]
  fn snapshot_309111_is_fixed_size() {
    let snapshot = MarketSnapshot309111 {
      base: sample_base(),
      stock_num: 500,
    };
    use crate::primitives::FixedSize;
    assert_eq!(
      snapshot.wire_size(),
      <MarketSnapshot309111 as FixedSize>::WIRE_SIZE
    );
    let mut out = vec![0u8; snapshot.wire_size()];
    snapshot
      .encode_body(&mut WriteCursor::new(&mut out))
      .unwrap();
    let decoded = MarketSnapshot309111::decode_body(&mut Cursor::new(&out)).unwrap();
    assert_eq!(decoded, snapshot);
  }
}
