//! `TransactionSnapshot_*` family: executed-trade events, sharing a common
//! `TransactionSnapshotBase` prefix. All three msg types carry no additional
//! fields beyond the base.

use crate::message::{fixed_message, group_element};
use crate::primitives::{FixedStr, LocalTimeStamp, Price, Qty, SecurityId, SeqNum};

group_element! {
  /// Fields common to every `TransactionSnapshot_*` variant, in wire order.
  pub struct TransactionSnapshotBase {
    channel_no: u16,
    appl_seq_num: SeqNum,
    md_stream_id: FixedStr<3>,
    bid_appl_seq_num: SeqNum,
    offer_appl_seq_num: SeqNum,
    security_id: SecurityId,
    security_id_source: FixedStr<4>,
    last_px: Price,
    last_qty: Qty,
    exec_type: FixedStr<1>,
    transact_time: LocalTimeStamp,
  }
}

fixed_message! {
  /// Equity/fund trade execution.
  pub struct TransactionSnapshot300191 {
    msg_type = 300191,
    fields = { base: TransactionSnapshotBase }
  }
}

fixed_message! {
  /// Negotiated/block trade execution.
  pub struct TransactionSnapshot300591 {
    msg_type = 300591,
    fields = { base: TransactionSnapshotBase }
  }
}

fixed_message! {
  /// Fixed-income trade execution.
  pub struct TransactionSnapshot300791 {
    msg_type = 300791,
    fields = { base: TransactionSnapshotBase }
  }
}
