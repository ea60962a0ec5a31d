#![warn(missing_debug_implementations, rust_2018_idioms, unreachable_pub)]
#![doc(test(
  no_crate_inject,
  attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_variables))
))]

//! # szse-v5-codec
//!
//! A wire codec for the Shenzhen Stock Exchange (SZSE) V5 binary
//! market-data protocol: big-endian primitives, fixed-point decimals,
//! space-padded strings, repeating groups, and a packet framer with
//! checksum validation.
//!
//! This crate is a pure, synchronous codec. It has no opinion about
//! transport (TCP session, UDP multicast receiver), session state
//! (logon/logout/heartbeat timing, resend scheduling), or persistence —
//! those are a feed handler's job. What it exposes is two boundary
//! operations and the typed catalog they produce/consume:
//!
//! - [`frame::frame_parse`] decodes one complete frame off the front of a
//!   byte buffer, validating the trailing checksum.
//! - [`frame::decode_message`] interprets a frame's body as a specific
//!   message type `M`.
//! - [`dispatch::decode_by_type`] picks the right catalog member for a
//!   frame's `msg_type` without the caller needing to know it in advance.
//! - [`frame::encode_message`] does the reverse: given a typed message,
//!   produces a complete, checksummed frame.
//!
//! ## Quick start
//!
//! ```rust
//! use szse_v5_codec::frame::{encode_message, frame_parse, decode_message};
//! use szse_v5_codec::messages::channel::ChannelHeartbeat;
//! use szse_v5_codec::primitives::Boolean;
//!
//! let msg = ChannelHeartbeat {
//!     channel_no: 2001,
//!     appl_last_seq_num: 1,
//!     end_of_channel: Boolean(false),
//! };
//! let frame = encode_message(&msg).unwrap();
//!
//! let view = frame_parse(&frame).unwrap();
//! let decoded: ChannelHeartbeat = decode_message(&view).unwrap();
//! assert_eq!(decoded, msg);
//! ```
//!
//! ## Zero-copy repeating groups
//!
//! Fixed-size repeating-group elements can be walked without decoding the
//! whole group up front, via [`group::BorrowedGroup`], which indexes
//! directly into a caller-owned buffer:
//!
//! ```rust
//! use szse_v5_codec::group::BorrowedGroup;
//!
//! let bytes = [0u8, 1, 0, 2, 0, 3]; // three big-endian u16 elements
//! let group: BorrowedGroup<'_, u16> = BorrowedGroup::decode(&bytes, 3).unwrap();
//! assert_eq!(group.get(1).unwrap(), 2);
//! ```
//!
//! ## Dispatch on an unknown `msg_type`
//!
//! ```rust
//! use szse_v5_codec::dispatch::{decode_by_type, AnyMessage};
//!
//! match decode_by_type(3, &[]).unwrap() {
//!     AnyMessage::Heartbeat(_) => {}
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

pub mod config;
pub mod cursor;
pub mod dispatch;
pub mod endian;
pub mod errors;
pub mod frame;
pub mod group;
pub mod message;
pub mod messages;
pub mod primitives;

pub use config::DecodeOptions;
pub use dispatch::{decode_by_type, decode_by_type_with_options, AnyMessage};
pub use errors::{CodecError, Result};
pub use frame::{
  decode_message, encode_message, frame_parse, frame_parse_with_options, size_of_frame,
  FrameEncoder, FrameView,
};
pub use message::{Borrowed, FixedMessage, Message};
