//! MySQL contact adapter
//!
//! Implements the `ContactBackend` port over the [`ContactRepository`],
//! translating between the caller-facing contact shape (`mobile_number`)
//! and the table's columns (`phone`), and lifting `DatabaseError` into the
//! backend error taxonomy. Every storage fault becomes a structured error;
//! none is allowed to escape as an unhandled fault.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, instrument};

use domain_contact::{BackendError, ContactBackend, ContactId, ContactUpdate, NewContact};

use crate::error::DatabaseError;
use crate::pool::DatabasePool;
use crate::repositories::contact::{ContactRepository, NewContactRow};

/// MySQL-backed implementation of the `ContactBackend` port.
#[derive(Debug, Clone)]
pub struct MySqlContactAdapter {
    repository: ContactRepository,
}

impl MySqlContactAdapter {
    /// Creates a new adapter over the given connection pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            repository: ContactRepository::new(pool),
        }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &ContactRepository {
        &self.repository
    }

    /// The relational backend only addresses rows by integer id.
    fn integer_id(id: &ContactId) -> Result<i64, BackendError> {
        id.as_i64().ok_or_else(|| {
            BackendError::validation(format!(
                "'{}' is not a valid contact id for the DATABASE backend",
                id
            ))
        })
    }
}

#[async_trait]
impl ContactBackend for MySqlContactAdapter {
    #[instrument(skip(self, contact))]
    async fn create_contact(&self, contact: NewContact) -> Result<Value, BackendError> {
        debug!("Inserting contact row");

        let id = self
            .repository
            .insert(NewContactRow {
                first_name: contact.first_name.clone(),
                last_name: contact.last_name.clone(),
                email: contact.email.clone(),
                phone: contact.mobile_number.clone(),
            })
            .await
            .map_err(db_to_backend_error)?;

        // Echo the caller's field names, including mobile_number, alongside
        // the assigned identifier.
        Ok(json!({
            "id": id,
            "first_name": contact.first_name,
            "last_name": contact.last_name,
            "email": contact.email,
            "mobile_number": contact.mobile_number,
        }))
    }

    #[instrument(skip(self), fields(contact_id = %id))]
    async fn get_contact(&self, id: &ContactId) -> Result<Value, BackendError> {
        debug!("Selecting contact row");

        let key = Self::integer_id(id)?;
        let row = self
            .repository
            .find_by_id(key)
            .await
            .map_err(db_to_backend_error)?
            .ok_or_else(|| BackendError::not_found("Contact", id))?;

        serde_json::to_value(row).map_err(|e| BackendError::storage(e.to_string()))
    }

    #[instrument(skip(self, changes), fields(contact_id = %id))]
    async fn update_contact(
        &self,
        id: &ContactId,
        changes: ContactUpdate,
    ) -> Result<Value, BackendError> {
        debug!("Updating contact row");

        let key = Self::integer_id(id)?;
        self.repository
            .update_details(key, &changes.email, &changes.mobile_number)
            .await
            .map_err(db_to_backend_error)?;

        // Confirmation echoes the new values, not the full row. Zero
        // affected rows is still a confirmation: MySQL reports zero for
        // no-op updates as well as for missing ids.
        Ok(json!({
            "message": "Contact updated successfully",
            "new_email": changes.email,
            "new_mobile_number": changes.mobile_number,
        }))
    }

    #[instrument(skip(self), fields(contact_id = %id))]
    async fn delete_contact(&self, id: &ContactId) -> Result<(), BackendError> {
        debug!("Deleting contact row");

        let key = Self::integer_id(id)?;
        self.repository
            .delete(key)
            .await
            .map_err(db_to_backend_error)?;

        // Idempotent: deleting an absent row succeeds.
        Ok(())
    }
}

/// Lifts a database error into the backend error taxonomy.
///
/// Absence is decided from `Option` results above, so not-found never
/// arrives here; everything is either a connection failure or a storage
/// fault.
fn db_to_backend_error(e: DatabaseError) -> BackendError {
    if e.is_connection_error() {
        BackendError::connection(e.to_string())
    } else {
        BackendError::storage(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_errors_stay_connection_errors() {
        let err = db_to_backend_error(DatabaseError::PoolExhausted);
        assert!(matches!(err, BackendError::Connection { .. }));
    }

    #[test]
    fn query_failures_become_storage_errors() {
        let err = db_to_backend_error(DatabaseError::QueryFailed("syntax".to_string()));
        assert!(matches!(err, BackendError::Storage { .. }));
    }

    #[test]
    fn non_integer_id_is_a_validation_error() {
        let err = MySqlContactAdapter::integer_id(&ContactId::from("crm-9f")).unwrap_err();
        assert!(matches!(err, BackendError::Validation { .. }));
    }

    #[test]
    fn numeric_ids_pass_through() {
        assert_eq!(
            MySqlContactAdapter::integer_id(&ContactId::from(12)).unwrap(),
            12
        );
        assert_eq!(
            MySqlContactAdapter::integer_id(&ContactId::from("12")).unwrap(),
            12
        );
    }
}
