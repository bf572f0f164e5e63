//! CRM adapter
//!
//! Implements [`ContactBackend`] against the hosted CRM's REST contact
//! resource. The client is preconfigured with a token-scheme Authorization
//! header and a base URL derived from the tenant domain; request and
//! response JSON nest contact fields under a `contact` key.
//!
//! # Error handling
//!
//! Every failure on this path — connect error, non-2xx status, undecodable
//! body — becomes [`BackendError::Upstream`] labeled with the operation that
//! failed. Causes are not distinguished and nothing is retried.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::contact::{ContactId, ContactUpdate, NewContact};
use crate::error::{BackendError, ContactOperation};
use crate::ports::ContactBackend;
use async_trait::async_trait;

/// Configuration for the CRM adapter.
#[derive(Debug, Clone)]
pub struct CrmConfig {
    /// Base URL of the CRM API, without a trailing slash.
    pub base_url: String,

    /// API key sent as `Authorization: Token token={key}`.
    pub api_key: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl CrmConfig {
    /// Creates a configuration pointing at an explicit base URL.
    ///
    /// Used directly in tests; production callers usually go through
    /// [`CrmConfig::for_tenant`].
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_secs: 30,
        }
    }

    /// Derives the hosted CRM base URL from a tenant domain.
    pub fn for_tenant(tenant_domain: &str, api_key: impl Into<String>) -> Self {
        Self::new(
            format!("https://{}.freshsales.io/api", tenant_domain),
            api_key,
        )
    }
}

/// HTTP-backed implementation of [`ContactBackend`].
#[derive(Debug, Clone)]
pub struct CrmContactAdapter {
    client: Client,
    base_url: String,
}

/// Wire envelope: the CRM nests contact fields under a `contact` key on both
/// create and update.
#[derive(Debug, Serialize)]
struct ContactEnvelope<T: Serialize> {
    contact: T,
}

#[derive(Debug, Serialize)]
struct CrmNewContact<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    mobile_number: &'a str,
}

#[derive(Debug, Serialize)]
struct CrmContactChanges<'a> {
    email: &'a str,
    mobile_number: &'a str,
}

impl CrmContactAdapter {
    /// Builds the adapter with a preconfigured HTTP client.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the API key cannot form a header value,
    /// or an upstream error if the client cannot be constructed.
    pub fn new(config: CrmConfig) -> Result<Self, BackendError> {
        let auth = HeaderValue::from_str(&format!("Token token={}", config.api_key))
            .map_err(|e| BackendError::validation(format!("Invalid CRM API key: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                BackendError::upstream(ContactOperation::Create, format!("client setup: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn contacts_url(&self) -> String {
        format!("{}/contacts", self.base_url)
    }

    fn contact_url(&self, id: &ContactId) -> String {
        format!("{}/contacts/{}", self.base_url, id)
    }

    /// Checks the status and decodes the CRM's JSON body for passthrough.
    async fn passthrough_body(
        operation: ContactOperation,
        response: Response,
    ) -> Result<Value, BackendError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::upstream(
                operation,
                format!("CRM returned {}: {}", status, body),
            ));
        }
        response
            .json::<Value>()
            .await
            .map_err(|e| BackendError::upstream(operation, format!("invalid CRM response: {}", e)))
    }
}

#[async_trait]
impl ContactBackend for CrmContactAdapter {
    async fn create_contact(&self, contact: NewContact) -> Result<Value, BackendError> {
        let operation = ContactOperation::Create;
        debug!(url = %self.contacts_url(), "Creating contact in CRM");

        let payload = ContactEnvelope {
            contact: CrmNewContact {
                first_name: &contact.first_name,
                last_name: &contact.last_name,
                email: &contact.email,
                mobile_number: &contact.mobile_number,
            },
        };

        let response = self
            .client
            .post(self.contacts_url())
            .json(&payload)
            .send()
            .await
            .map_err(|e| BackendError::upstream(operation, e.to_string()))?;

        Self::passthrough_body(operation, response).await
    }

    async fn get_contact(&self, id: &ContactId) -> Result<Value, BackendError> {
        let operation = ContactOperation::Read;
        debug!(contact_id = %id, "Fetching contact from CRM");

        let response = self
            .client
            .get(self.contact_url(id))
            .send()
            .await
            .map_err(|e| BackendError::upstream(operation, e.to_string()))?;

        Self::passthrough_body(operation, response).await
    }

    async fn update_contact(
        &self,
        id: &ContactId,
        changes: ContactUpdate,
    ) -> Result<Value, BackendError> {
        let operation = ContactOperation::Update;
        debug!(contact_id = %id, "Updating contact in CRM");

        let payload = ContactEnvelope {
            contact: CrmContactChanges {
                email: &changes.email,
                mobile_number: &changes.mobile_number,
            },
        };

        let response = self
            .client
            .put(self.contact_url(id))
            .json(&payload)
            .send()
            .await
            .map_err(|e| BackendError::upstream(operation, e.to_string()))?;

        Self::passthrough_body(operation, response).await
    }

    async fn delete_contact(&self, id: &ContactId) -> Result<(), BackendError> {
        let operation = ContactOperation::Delete;
        debug!(contact_id = %id, "Deleting contact in CRM");

        let response = self
            .client
            .delete(self.contact_url(id))
            .send()
            .await
            .map_err(|e| BackendError::upstream(operation, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::upstream(
                operation,
                format!("CRM returned {}: {}", status, body),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenant_config_builds_hosted_url() {
        let config = CrmConfig::for_tenant("acme", "key-123");
        assert_eq!(config.base_url, "https://acme.freshsales.io/api");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let adapter =
            CrmContactAdapter::new(CrmConfig::new("https://crm.example.com/api/", "k")).unwrap();
        assert_eq!(
            adapter.contacts_url(),
            "https://crm.example.com/api/contacts"
        );
        assert_eq!(
            adapter.contact_url(&ContactId::from(7)),
            "https://crm.example.com/api/contacts/7"
        );
    }

    #[test]
    fn api_key_with_control_characters_is_rejected() {
        let err = CrmContactAdapter::new(CrmConfig::new("https://crm.example.com", "bad\nkey"))
            .unwrap_err();
        assert!(matches!(err, BackendError::Validation { .. }));
    }
}
