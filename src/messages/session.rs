//! Session-level messages: `Logon`, `Logout`, `Heartbeat`, `BusinessReject`.

use crate::message::fixed_message;
use crate::primitives::{CompId, FixedStr};

fixed_message! {
  /// Session logon request/response.
  pub struct Logon {
    msg_type = 1,
    fields = {
      sender_comp_id: CompId,
      target_comp_id: CompId,
      heart_bt_int: i32,
      password: FixedStr<16>,
      default_appl_ver_id: FixedStr<32>,
    }
  }
}

fixed_message! {
  /// Session logout notification. `session_status` is the raw wire code;
  /// see [`SessionStatus`] for the enumerated meaning.
  pub struct Logout {
    msg_type = 2,
    fields = {
      session_status: i32,
      text: FixedStr<200>,
    }
  }
}

fixed_message! {
  /// Empty-bodied keepalive.
  pub struct Heartbeat {
    msg_type = 3,
    fields = {}
  }
}

fixed_message! {
  /// Session-level reject of a malformed or unsupported request.
  pub struct BusinessReject {
    msg_type = 8,
    fields = {
      ref_seq_num: i64,
      ref_msg_type: u32,
      business_reject_ref_id: FixedStr<10>,
      business_reject_reason: u16,
      business_reject_text: FixedStr<50>,
    }
  }
}

/// The enumerated meanings of `Logout::session_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
  Active,
  PasswordChanged,
  PasswordExpiring,
  InvalidNewPassword,
  LogoutComplete,
  BadUserOrPassword,
  AccountLocked,
  TimeNotAllowed,
  PasswordExpired,
  SequenceTooSmall,
  NextExpectedTooLarge,
  Other,
  InvalidMessage,
}

impl SessionStatus {
  pub fn from_code(code: i32) -> Option<Self> {
    Some(match code {
      0 => Self::Active,
      1 => Self::PasswordChanged,
      2 => Self::PasswordExpiring,
      3 => Self::InvalidNewPassword,
      4 => Self::LogoutComplete,
      5 => Self::BadUserOrPassword,
      6 => Self::AccountLocked,
      7 => Self::TimeNotAllowed,
      8 => Self::PasswordExpired,
      9 => Self::SequenceTooSmall,
      10 => Self::NextExpectedTooLarge,
      101 => Self::Other,
      102 => Self::InvalidMessage,
      _ => return None,
    })
  }

  pub fn code(self) -> i32 {
    match self {
      Self::Active => 0,
      Self::PasswordChanged => 1,
      Self::PasswordExpiring => 2,
      Self::InvalidNewPassword => 3,
      Self::LogoutComplete => 4,
      Self::BadUserOrPassword => 5,
      Self::AccountLocked => 6,
      Self::TimeNotAllowed => 7,
      Self::PasswordExpired => 8,
      Self::SequenceTooSmall => 9,
      Self::NextExpectedTooLarge => 10,
      Self::Other => 101,
      Self::InvalidMessage => 102,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cursor::{Cursor, WriteCursor};
  use crate::message::Message;

  #[test]
  fn heartbeat_is_empty() {
    let hb = Heartbeat {};
    assert_eq!(hb.wire_size(), 0);
    let mut out: Vec<u8> = Vec::new();
    hb.encode_body(&mut WriteCursor::new(&mut out)).unwrap();
    assert!(out.is_empty());
  }

  #[test]
  fn logon_pads_strings() {
    let logon = Logon {
      sender_comp_id: FixedStr::new("ABC"),
      target_comp_id: FixedStr::new("XYZ"),
      heart_bt_int: 30,
      password: FixedStr::new("pwd"),
      default_appl_ver_id: FixedStr::new("1.00"),
    };
    assert_eq!(logon.wire_size(), 20 + 20 + 4 + 16 + 32);
    let mut out = vec![0u8; logon.wire_size()];
    logon.encode_body(&mut WriteCursor::new(&mut out)).unwrap();
    assert_eq!(&out[0..3], b"ABC");
    assert_eq!(&out[3..20], &[0x20; 17]);
    assert_eq!(&out[40..44], &30i32.to_be_bytes());

    let decoded = Logon::decode_body(&mut Cursor::new(&out)).unwrap();
    assert_eq!(decoded, logon);
  }

  #[test]
  fn session_status_round_trips() {
    for code in [0, 1, 4, 9, 101, 102] {
      let status = SessionStatus::from_code(code).unwrap();
      assert_eq!(status.code(), code);
    }
    assert!(SessionStatus::from_code(999).is_none());
  }
}
