//! MySQL Infrastructure Layer
//!
//! This crate provides the relational side of the contact dispatcher: an
//! explicit, injectable connection pool, a repository with parameterized
//! queries on the `contacts` table, and the adapter exposing it through the
//! `domain_contact::ContactBackend` port.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, ensure_schema, MySqlContactAdapter};
//!
//! let pool = create_pool(DatabaseConfig::new("mysql://localhost/contacts")).await?;
//! ensure_schema(&pool).await?;
//! let backend = MySqlContactAdapter::new(pool);
//! ```

pub mod adapters;
pub mod error;
pub mod pool;
pub mod repositories;

pub use adapters::MySqlContactAdapter;
pub use error::DatabaseError;
pub use pool::{create_pool, ensure_schema, DatabaseConfig, DatabasePool};
pub use repositories::contact::ContactRepository;
