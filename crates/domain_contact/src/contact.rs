//! Contact entity and request types
//!
//! The contact shape is backend-agnostic: four caller-supplied fields plus a
//! backend-assigned identifier. Identifiers are backend-local — a contact
//! created in the CRM has no relation to any relational row, and nothing here
//! attempts to reconcile the two identifier spaces.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BackendError;

/// A stored contact as the relational backend represents it.
///
/// CRM-held contacts never materialize as this type; their native JSON is
/// passed through to the caller untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
}

/// Fields for creating a contact, identical for both backends.
#[derive(Debug, Clone, Serialize)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
}

/// Mutable fields of a contact.
///
/// Only email and mobile number may change; name fields are immutable by
/// contract.
#[derive(Debug, Clone, Serialize)]
pub struct ContactUpdate {
    pub email: String,
    pub mobile_number: String,
}

/// A backend-local contact identifier.
///
/// The relational backend assigns integer ids; the CRM assigns opaque ids
/// that may arrive as strings. Both are accepted on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContactId {
    Number(i64),
    Text(String),
}

impl ContactId {
    /// Returns the id as an integer if it is one, or parses a numeric string.
    ///
    /// The relational backend requires this to succeed; the CRM path only
    /// ever uses the textual form.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ContactId::Number(n) => Some(*n),
            ContactId::Text(s) => s.parse().ok(),
        }
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactId::Number(n) => write!(f, "{}", n),
            ContactId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ContactId {
    fn from(n: i64) -> Self {
        ContactId::Number(n)
    }
}

impl From<&str> for ContactId {
    fn from(s: &str) -> Self {
        ContactId::Text(s.to_string())
    }
}

/// Per-request choice of storage backend.
///
/// Supplied by the caller on every operation as the `data_store` field; it
/// routes that single request and is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendSelector {
    Crm,
    Database,
}

impl BackendSelector {
    /// Message returned whenever the selector is unrecognized.
    pub const INVALID_MESSAGE: &'static str =
        "Invalid 'data_store' value. Must be 'CRM' or 'DATABASE'.";

    /// Parses the wire value. Matching is exact; anything other than `CRM`
    /// or `DATABASE` is rejected before either backend is contacted.
    pub fn parse(raw: &str) -> Result<Self, BackendError> {
        match raw {
            "CRM" => Ok(BackendSelector::Crm),
            "DATABASE" => Ok(BackendSelector::Database),
            _ => Err(BackendError::validation(Self::INVALID_MESSAGE)),
        }
    }
}

impl fmt::Display for BackendSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendSelector::Crm => f.write_str("CRM"),
            BackendSelector::Database => f.write_str("DATABASE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_parses_known_values() {
        assert_eq!(BackendSelector::parse("CRM").unwrap(), BackendSelector::Crm);
        assert_eq!(
            BackendSelector::parse("DATABASE").unwrap(),
            BackendSelector::Database
        );
    }

    #[test]
    fn selector_rejects_unknown_and_lowercase_values() {
        for raw in ["crm", "database", "Crm", "REDIS", ""] {
            let err = BackendSelector::parse(raw).unwrap_err();
            assert!(err.to_string().contains("'CRM' or 'DATABASE'"), "{raw}");
        }
    }

    #[test]
    fn contact_id_accepts_numbers_and_strings() {
        let from_number: ContactId = serde_json::from_str("42").unwrap();
        assert_eq!(from_number, ContactId::Number(42));
        assert_eq!(from_number.as_i64(), Some(42));

        let from_string: ContactId = serde_json::from_str("\"crm-9f\"").unwrap();
        assert_eq!(from_string, ContactId::Text("crm-9f".to_string()));
        assert_eq!(from_string.as_i64(), None);
    }

    #[test]
    fn numeric_string_id_parses_for_the_relational_path() {
        let id = ContactId::from("17");
        assert_eq!(id.as_i64(), Some(17));
        assert_eq!(id.to_string(), "17");
    }
}
