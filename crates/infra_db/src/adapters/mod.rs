//! Backend port adapters
//!
//! Bridges between `domain_contact`'s backend port and the repositories in
//! this crate.

pub mod contact;

pub use contact::MySqlContactAdapter;
