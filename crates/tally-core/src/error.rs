//! Error types for `tally-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// An edit named none of the entry's fields.
  #[error("No fields to update.")]
  NoFieldsToUpdate,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
