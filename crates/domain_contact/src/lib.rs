//! Contact Domain
//!
//! This crate owns the contact entity and the backend port used to dispatch
//! contact operations to one of two interchangeable storage systems:
//!
//! - a hosted CRM reached over HTTPS (the [`adapters::CrmContactAdapter`])
//! - a relational `contacts` table (adapter provided by `infra_db`)
//!
//! The caller picks the backend per request via [`BackendSelector`]; both
//! adapters implement the same [`ContactBackend`] trait so the HTTP layer
//! never branches on the selector beyond resolving it to a trait object.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_contact::{BackendSelector, ContactBackend};
//! use std::sync::Arc;
//!
//! let backend: Arc<dyn ContactBackend> = match selector {
//!     BackendSelector::Crm => crm_adapter.clone(),
//!     BackendSelector::Database => db_adapter.clone(),
//! };
//! let created = backend.create_contact(new_contact).await?;
//! ```

pub mod adapters;
pub mod contact;
pub mod error;
pub mod ports;

pub use adapters::{CrmConfig, CrmContactAdapter};
pub use contact::{BackendSelector, Contact, ContactId, ContactUpdate, NewContact};
pub use error::{BackendError, ContactOperation};
pub use ports::ContactBackend;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MemoryContactBackend;
