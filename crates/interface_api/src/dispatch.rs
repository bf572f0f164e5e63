//! Per-request backend dispatch
//!
//! Both storage backends stay connected for the lifetime of the process; the
//! registry resolves a parsed `data_store` selector to one of them. Routing
//! is the registry's only job — validation of the raw selector happens in
//! `BackendSelector::parse`, before either backend is touched.

use std::sync::Arc;

use domain_contact::{BackendSelector, ContactBackend};

/// Holds the two live contact backends and resolves selectors to them.
#[derive(Clone)]
pub struct BackendRegistry {
    crm: Arc<dyn ContactBackend>,
    database: Arc<dyn ContactBackend>,
}

impl BackendRegistry {
    /// Creates a registry over the two backends.
    pub fn new(crm: Arc<dyn ContactBackend>, database: Arc<dyn ContactBackend>) -> Self {
        Self { crm, database }
    }

    /// Returns the backend the selector names.
    pub fn select(&self, selector: BackendSelector) -> &dyn ContactBackend {
        match selector {
            BackendSelector::Crm => self.crm.as_ref(),
            BackendSelector::Database => self.database.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_contact::{ContactId, MemoryContactBackend, NewContact};

    fn new_contact() -> NewContact {
        NewContact {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.com".to_string(),
            mobile_number: "123".to_string(),
        }
    }

    #[tokio::test]
    async fn each_selector_reaches_only_its_backend() {
        let crm = Arc::new(MemoryContactBackend::new());
        let database = Arc::new(MemoryContactBackend::new());
        let registry = BackendRegistry::new(crm.clone(), database.clone());

        registry
            .select(BackendSelector::Database)
            .create_contact(new_contact())
            .await
            .unwrap();
        assert_eq!(database.call_count(), 1);
        assert_eq!(crm.call_count(), 0);

        let _ = registry
            .select(BackendSelector::Crm)
            .get_contact(&ContactId::from(1))
            .await;
        assert_eq!(database.call_count(), 1);
        assert_eq!(crm.call_count(), 1);
    }

    #[tokio::test]
    async fn backends_do_not_share_state() {
        let crm = Arc::new(MemoryContactBackend::new());
        let database = Arc::new(MemoryContactBackend::new());
        let registry = BackendRegistry::new(crm.clone(), database.clone());

        let created = registry
            .select(BackendSelector::Database)
            .create_contact(new_contact())
            .await
            .unwrap();
        let id = ContactId::from(created["id"].as_i64().unwrap());

        let err = registry
            .select(BackendSelector::Crm)
            .get_contact(&id)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
