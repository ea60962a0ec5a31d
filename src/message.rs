//! The composite field framework: a `Message` is an ordered tuple of wire
//! fields (primitives and groups) carrying a static `MSG_TYPE` code.

use crate::cursor::{Cursor, WriteCursor};
use crate::errors::CodecError;

/// A decodable, encodable, sized message body, tagged with its wire
/// `MSG_TYPE`. Decode is strict: it consumes exactly `wire_size()` bytes
/// and never looks past them; the framer is responsible for trailing-byte
/// detection against the frame's declared `BodyLength`.
pub trait Message: Sized {
  const MSG_TYPE: u32;

  fn wire_size(&self) -> usize;
  fn decode_body(cur: &mut Cursor<'_>) -> Result<Self, CodecError>;
  fn encode_body(&self, out: &mut WriteCursor<'_>) -> Result<(), CodecError>;
}

/// A zero-copy view over a caller-owned frame body, tagged with the
/// message type `M` it is expected to hold.
///
/// Constructing one does no decoding at all — it is a bare `(slice,
/// phantom type)` pair, valid only as long as the caller's buffer lives
/// unchanged. Call [`Borrowed::materialize`] to actually decode an owned
/// `M` from it. There is exactly one owned struct per message type;
/// borrowing is this single generic wrapper around it rather than a
/// second, parallel borrowed-class hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct Borrowed<'a, M> {
  body: &'a [u8],
  _marker: std::marker::PhantomData<M>,
}

impl<'a, M: Message> Borrowed<'a, M> {
  /// Wrap `body` without inspecting it.
  pub fn new(body: &'a [u8]) -> Self {
    Self {
      body,
      _marker: std::marker::PhantomData,
    }
  }

  /// The unexamined, borrowed body bytes.
  pub fn body(&self) -> &'a [u8] {
    self.body
  }

  /// Decode an owned `M` out of the borrowed body.
  pub fn materialize(&self) -> Result<M, CodecError> {
    let mut cur = Cursor::new(self.body);
    M::decode_body(&mut cur)
  }
}

/// Marker for messages whose wire size is a compile-time constant (no
/// repeating groups, no trailing blob). `fixed_message!` implements this
/// automatically for every message it generates.
pub trait FixedMessage: Message {
  const FIXED_WIRE_SIZE: usize;
}

/// Generates a plain-data message struct plus its `Message` and
/// `FixedMessage` impls, by chaining each field's `WireField::decode`/
/// `encode`/`wire_size` in declared order. Intended for messages with no
/// repeating groups or trailing blobs; those are written by hand (see
/// `src/messages/*.rs`) because their size genuinely depends on their
/// contents.
macro_rules! fixed_message {
  (
    $(#[$meta:meta])*
    pub struct $name:ident {
      msg_type = $msg_type:expr,
      fields = { $($field:ident : $ty:ty),* $(,)? }
    }
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct $name {
      $(pub $field: $ty),*
    }

    impl $crate::message::Message for $name {
      const MSG_TYPE: u32 = $msg_type;

      fn wire_size(&self) -> usize {
        <Self as $crate::message::FixedMessage>::FIXED_WIRE_SIZE
      }

      #[allow(unused_mut, unused_variables)]
      fn decode_body(
        cur: &mut $crate::cursor::Cursor<'_>,
      ) -> Result<Self, $crate::errors::CodecError> {
        $(let $field = <$ty as $crate::primitives::WireField>::decode(cur)?;)*
        Ok(Self { $($field),* })
      }

      #[allow(unused_variables)]
      fn encode_body(
        &self,
        out: &mut $crate::cursor::WriteCursor<'_>,
      ) -> Result<(), $crate::errors::CodecError> {
        $(<$ty as $crate::primitives::WireField>::encode(&self.$field, out)?;)*
        Ok(())
      }
    }

    impl $crate::message::FixedMessage for $name {
      const FIXED_WIRE_SIZE: usize = 0 $(+ fixed_message!(@size $ty))*;
    }
  };

  (@size $ty:ty) => {
    <$ty as $crate::primitives::FixedSize>::WIRE_SIZE
  };
}

pub(crate) use fixed_message;

/// Generates a small fixed-size composite struct used as a repeating-group
/// element (not a top-level message — no `MSG_TYPE`), plus its
/// `WireField` and `FixedSize` impls. Lets `Group<E>` and `BorrowedGroup<E>`
/// treat it exactly like a primitive.
macro_rules! group_element {
  (
    $(#[$meta:meta])*
    pub struct $name:ident {
      $($field:ident : $ty:ty),* $(,)?
    }
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct $name {
      $(pub $field: $ty),*
    }

    impl $crate::primitives::WireField for $name {
      fn wire_size(&self) -> usize {
        <Self as $crate::primitives::FixedSize>::WIRE_SIZE
      }

      #[allow(unused_mut, unused_variables)]
      fn decode(
        cur: &mut $crate::cursor::Cursor<'_>,
      ) -> Result<Self, $crate::errors::CodecError> {
        $(let $field = <$ty as $crate::primitives::WireField>::decode(cur)?;)*
        Ok(Self { $($field),* })
      }

      #[allow(unused_variables)]
      fn encode(
        &self,
        out: &mut $crate::cursor::WriteCursor<'_>,
      ) -> Result<(), $crate::errors::CodecError> {
        $(<$ty as $crate::primitives::WireField>::encode(&self.$field, out)?;)*
        Ok(())
      }
    }

    impl $crate::primitives::FixedSize for $name {
      const WIRE_SIZE: usize = 0 $(+ fixed_message!(@size $ty))*;
    }
  };
}

pub(crate) use group_element;
