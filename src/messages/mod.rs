//! The concrete message catalog: one submodule per related group of wire
//! shapes, mirroring how the fields are grouped in the protocol document.

pub mod channel;
pub mod market_snapshot;
pub mod market_status;
pub mod order_snapshot;
pub mod session;
pub mod transaction_snapshot;
