//! Contact backend port
//!
//! The `ContactBackend` trait is the single abstraction both storage systems
//! implement:
//!
//! - **CRM adapter** (this crate): REST calls to the hosted CRM
//! - **Relational adapter** (`infra_db`): parameterized SQL on the
//!   `contacts` table
//! - **Mock adapter** (`mock` module): in-memory store for tests
//!
//! Operations return `serde_json::Value` rather than a normalized entity
//! because the response contract passes CRM bodies through verbatim; each
//! adapter produces its backend-native representation and the HTTP layer
//! wraps it unchanged.

use async_trait::async_trait;
use serde_json::Value;

use crate::contact::{ContactId, ContactUpdate, NewContact};
use crate::error::BackendError;

/// CRUD operations a contact storage backend must support.
///
/// Every method is a single round-trip to exactly one backend; there is no
/// multi-step protocol and no cross-request state behind this trait.
#[async_trait]
pub trait ContactBackend: Send + Sync {
    /// Creates a contact and returns the backend's created-contact
    /// representation.
    async fn create_contact(&self, contact: NewContact) -> Result<Value, BackendError>;

    /// Fetches a contact by id.
    async fn get_contact(&self, id: &ContactId) -> Result<Value, BackendError>;

    /// Applies the mutable fields (email, mobile number) to a contact and
    /// returns the backend's confirmation.
    async fn update_contact(
        &self,
        id: &ContactId,
        changes: ContactUpdate,
    ) -> Result<Value, BackendError>;

    /// Deletes a contact by id.
    async fn delete_contact(&self, id: &ContactId) -> Result<(), BackendError>;
}

/// In-memory mock backend for testing the dispatch layer without a database
/// or a CRM endpoint.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
    use std::sync::Arc;

    use serde_json::json;
    use tokio::sync::RwLock;

    use super::*;
    use crate::contact::Contact;

    /// Mock `ContactBackend` holding contacts in a `HashMap`.
    ///
    /// Tracks how many operations have reached it, so tests can assert that
    /// rejected requests never contact a backend.
    #[derive(Debug, Default)]
    pub struct MemoryContactBackend {
        contacts: Arc<RwLock<HashMap<i64, Contact>>>,
        next_id: AtomicI64,
        calls: AtomicUsize,
    }

    impl MemoryContactBackend {
        pub fn new() -> Self {
            Self {
                contacts: Arc::new(RwLock::new(HashMap::new())),
                next_id: AtomicI64::new(1),
                calls: AtomicUsize::new(0),
            }
        }

        /// Number of operations that reached this backend.
        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::Relaxed)
        }

        /// Snapshot of a stored contact, for asserting on fields the
        /// response contract does not echo.
        pub async fn stored(&self, id: i64) -> Option<Contact> {
            self.contacts.read().await.get(&id).cloned()
        }

        fn record_call(&self) {
            self.calls.fetch_add(1, Ordering::Relaxed);
        }

        fn integer_id(id: &ContactId) -> Result<i64, BackendError> {
            id.as_i64().ok_or_else(|| {
                BackendError::validation(format!("'{}' is not a valid contact id", id))
            })
        }
    }

    #[async_trait]
    impl ContactBackend for MemoryContactBackend {
        async fn create_contact(&self, contact: NewContact) -> Result<Value, BackendError> {
            self.record_call();
            let id = self.next_id.fetch_add(1, Ordering::Relaxed);
            let stored = Contact {
                id,
                first_name: contact.first_name,
                last_name: contact.last_name,
                email: contact.email,
                mobile_number: contact.mobile_number,
            };
            let body = serde_json::to_value(&stored)
                .map_err(|e| BackendError::storage(e.to_string()))?;
            self.contacts.write().await.insert(id, stored);
            Ok(body)
        }

        async fn get_contact(&self, id: &ContactId) -> Result<Value, BackendError> {
            self.record_call();
            let key = Self::integer_id(id)?;
            let contacts = self.contacts.read().await;
            let contact = contacts
                .get(&key)
                .ok_or_else(|| BackendError::not_found("Contact", id))?;
            serde_json::to_value(contact).map_err(|e| BackendError::storage(e.to_string()))
        }

        async fn update_contact(
            &self,
            id: &ContactId,
            changes: ContactUpdate,
        ) -> Result<Value, BackendError> {
            self.record_call();
            let key = Self::integer_id(id)?;
            let mut contacts = self.contacts.write().await;
            if let Some(contact) = contacts.get_mut(&key) {
                contact.email = changes.email.clone();
                contact.mobile_number = changes.mobile_number.clone();
            }
            Ok(json!({
                "message": "Contact updated successfully",
                "new_email": changes.email,
                "new_mobile_number": changes.mobile_number,
            }))
        }

        async fn delete_contact(&self, id: &ContactId) -> Result<(), BackendError> {
            self.record_call();
            let key = Self::integer_id(id)?;
            self.contacts.write().await.remove(&key);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MemoryContactBackend;
    use super::*;

    fn new_contact() -> NewContact {
        NewContact {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.com".to_string(),
            mobile_number: "123".to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_the_same_fields() {
        let backend = MemoryContactBackend::new();

        let created = backend.create_contact(new_contact()).await.unwrap();
        let id = created["id"].as_i64().unwrap();

        let fetched = backend.get_contact(&ContactId::from(id)).await.unwrap();
        assert_eq!(fetched["first_name"], "A");
        assert_eq!(fetched["last_name"], "B");
        assert_eq!(fetched["email"], "a@b.com");
        assert_eq!(fetched["mobile_number"], "123");
    }

    #[tokio::test]
    async fn update_mutates_only_email_and_mobile_number() {
        let backend = MemoryContactBackend::new();
        let created = backend.create_contact(new_contact()).await.unwrap();
        let id = created["id"].as_i64().unwrap();

        let confirmation = backend
            .update_contact(
                &ContactId::from(id),
                ContactUpdate {
                    email: "new@b.com".to_string(),
                    mobile_number: "456".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(confirmation["new_email"], "new@b.com");
        assert_eq!(confirmation["new_mobile_number"], "456");

        let stored = backend.stored(id).await.unwrap();
        assert_eq!(stored.first_name, "A");
        assert_eq!(stored.last_name, "B");
        assert_eq!(stored.email, "new@b.com");
        assert_eq!(stored.mobile_number, "456");
    }

    #[tokio::test]
    async fn get_missing_contact_is_not_found() {
        let backend = MemoryContactBackend::new();
        let err = backend.get_contact(&ContactId::from(999)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_removes_the_contact() {
        let backend = MemoryContactBackend::new();
        let created = backend.create_contact(new_contact()).await.unwrap();
        let id = ContactId::from(created["id"].as_i64().unwrap());

        backend.delete_contact(&id).await.unwrap();
        assert!(backend.get_contact(&id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn backend_counts_operations() {
        let backend = MemoryContactBackend::new();
        assert_eq!(backend.call_count(), 0);
        backend.create_contact(new_contact()).await.unwrap();
        let _ = backend.get_contact(&ContactId::from(1)).await;
        assert_eq!(backend.call_count(), 2);
    }
}
