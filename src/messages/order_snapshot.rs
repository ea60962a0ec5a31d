//! `OrderSnapshot_*` family: individual order events on the book, sharing a
//! common `OrderSnapshotBase` prefix.

use crate::message::{fixed_message, group_element};
use crate::primitives::{FixedStr, LocalTimeStamp, Price, Qty, SecurityId, SeqNum};

group_element! {
  /// Fields common to every `OrderSnapshot_*` variant, in wire order.
  pub struct OrderSnapshotBase {
    channel_no: u16,
    appl_seq_num: SeqNum,
    md_stream_id: FixedStr<3>,
    security_id: SecurityId,
    security_id_source: FixedStr<4>,
    price: Price,
    order_qty: Qty,
    side: FixedStr<1>,
    order_time: LocalTimeStamp,
  }
}

fixed_message! {
  /// Plain order add/cancel event.
  pub struct OrderSnapshot300192 {
    msg_type = 300192,
    fields = {
      base: OrderSnapshotBase,
      ord_type: FixedStr<2>,
    }
  }
}

fixed_message! {
  /// Order event carrying confirmation/contact metadata (negotiated deals).
  pub struct OrderSnapshot300592 {
    msg_type = 300592,
    fields = {
      base: OrderSnapshotBase,
      confirm_id: FixedStr<8>,
      contactor: FixedStr<12>,
      contact_info: FixedStr<30>,
    }
  }
}

fixed_message! {
  /// Order event carrying expiration terms (fixed-income instruments).
  pub struct OrderSnapshot300792 {
    msg_type = 300792,
    fields = {
      base: OrderSnapshotBase,
      expiration_days: u16,
      expiration_type: u8,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cursor::{Cursor, WriteCursor};
  use crate::message::Message;
  use crate::primitives::WireField;

  fn sample_base() -> OrderSnapshotBase {
    OrderSnapshotBase {
      channel_no: 1,
      appl_seq_num: 42,
      md_stream_id: FixedStr::new("010"),
      security_id: SecurityId::new("00000001"),
      security_id_source: FixedStr::new("102"),
      price: Price::from_f64(10.5).unwrap(),
      order_qty: Qty::from_f64(100.0).unwrap(),
      side: FixedStr::new("1"),
      order_time: LocalTimeStamp(20_240_305_093_000_000),
    }
  }

  #[test]
  fn order_snapshot_300192_round_trips() {
    let msg = OrderSnapshot300192 {
      base: sample_base(),
      ord_type: FixedStr::new("2"),
    };
    let mut out = vec![0u8; msg.wire_size()];
    msg.encode_body(&mut WriteCursor::new(&mut out)).unwrap();
    let decoded = OrderSnapshot300192::decode_body(&mut Cursor::new(&out)).unwrap();
    assert_eq!(decoded, msg);
  }

  #[test]
  fn order_snapshot_300592_round_trips() {
    let msg = OrderSnapshot300592 {
      base: sample_base(),
      confirm_id: FixedStr::new("C1"),
      contactor: FixedStr::new("Li Lei"),
      contact_info: FixedStr::new("138-0000-0000"),
    };
    let mut out = vec![0u8; msg.wire_size()];
    msg.encode_body(&mut WriteCursor::new(&mut out)).unwrap();
    let decoded = OrderSnapshot300592::decode_body(&mut Cursor::new(&out)).unwrap();
    assert_eq!(decoded, msg);
  }

  #[test]
  fn order_snapshot_300792_round_trips() {
    let msg = OrderSnapshot300792 {
      base: sample_base(),
      expiration_days: 30,
      expiration_type: 1,
    };
    let mut out = vec![0u8; msg.wire_size()];
    msg.encode_body(&mut WriteCursor::new(&mut out)).unwrap();
    let decoded = OrderSnapshot300792::decode_body(&mut Cursor::new(&out)).unwrap();
    assert_eq!(decoded, msg);
  }
}
