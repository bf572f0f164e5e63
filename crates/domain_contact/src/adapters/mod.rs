//! Backend adapters owned by the contact domain.
//!
//! The relational adapter lives in `infra_db` next to the repository it
//! wraps; the CRM adapter lives here because the CRM wire format is part of
//! the contact domain's external contract.

pub mod crm;

pub use crm::{CrmConfig, CrmContactAdapter};
