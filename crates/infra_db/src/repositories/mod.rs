//! Repository implementations
//!
//! Repositories own the SQL; adapters translate their results into the
//! domain's backend port contract.

pub mod contact;

pub use contact::{ContactRepository, ContactRow, NewContactRow};
