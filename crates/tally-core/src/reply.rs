//! The uniform status mapping returned by mutating operations.
//!
//! On the wire a reply is a flat JSON object tagged by `status`:
//!
//! ```json
//! {"status": "ok", "id": 7}
//! {"status": "ok", "deleted": 0}
//! {"status": "error", "message": "No fields to update."}
//! ```

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::entry::EntryId;

/// Message returned by a successful `save_salary_summary`.
pub const SUMMARY_SAVED: &str = "Custom summary saved.";

/// Result of a mutating operation.
///
/// `Error` carries user-input problems only; storage faults are surfaced as
/// the store's `Err` type instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Reply {
  Ok(Ack),
  Error { message: String },
}

/// Optional payload of an `ok` reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ack {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id:      Option<EntryId>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub deleted: Option<u64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
}

impl Reply {
  /// A bare `{"status": "ok"}`.
  pub fn ok() -> Self { Self::Ok(Ack::default()) }

  pub fn created(id: EntryId) -> Self {
    Self::Ok(Ack { id: Some(id), ..Ack::default() })
  }

  pub fn deleted(count: u64) -> Self {
    Self::Ok(Ack { deleted: Some(count), ..Ack::default() })
  }

  pub fn message(message: impl Into<String>) -> Self {
    Self::Ok(Ack { message: Some(message.into()), ..Ack::default() })
  }

  pub fn error(message: impl Display) -> Self {
    Self::Error { message: message.to_string() }
  }

  pub fn is_ok(&self) -> bool { matches!(self, Self::Ok(_)) }
}
