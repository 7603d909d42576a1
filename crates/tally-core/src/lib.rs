//! Core types and trait definitions for the Tally ledger.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod entry;
pub mod error;
pub mod ledger;
pub mod reply;
pub mod store;
pub mod summary;

pub use error::{Error, Result};
pub use ledger::Ledger;
pub use reply::Reply;
