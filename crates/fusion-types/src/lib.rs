//! Fusion Types
//!
//! This crate defines the value and record types shared by the Fusion crates
//! (`fusion-calculator`, `fusion-core` and `fusion-api`). Rows handed to the
//! allocator are plain records of named values so that callers can pick the
//! field a share is read from and the field a count is written to.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

mod record;
mod types;

pub use record::Record;
pub use types::FieldValue;
