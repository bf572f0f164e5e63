//! Contact DTOs
//!
//! Every request carries a `data_store` field naming the backend for that
//! single request. It arrives as a raw string and is validated in the
//! handler, so an unknown value produces the contract's 400 message instead
//! of a deserialization rejection.

use serde::Deserialize;

use domain_contact::{ContactId, ContactUpdate, NewContact};

#[derive(Debug, Deserialize)]
pub struct CreateContactRequest {
    pub data_store: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
}

impl CreateContactRequest {
    pub fn into_new_contact(self) -> NewContact {
        NewContact {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            mobile_number: self.mobile_number,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetContactRequest {
    pub data_store: String,
    pub contact_id: ContactId,
}

#[derive(Debug, Deserialize)]
pub struct UpdateContactRequest {
    pub data_store: String,
    pub contact_id: ContactId,
    pub new_email: String,
    pub new_mobile_number: String,
}

impl UpdateContactRequest {
    pub fn changes(&self) -> ContactUpdate {
        ContactUpdate {
            email: self.new_email.clone(),
            mobile_number: self.new_mobile_number.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteContactRequest {
    pub data_store: String,
    pub contact_id: ContactId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_request_accepts_numeric_and_string_ids() {
        let numeric: GetContactRequest =
            serde_json::from_str(r#"{"data_store": "DATABASE", "contact_id": 7}"#).unwrap();
        assert_eq!(numeric.contact_id.as_i64(), Some(7));

        let text: GetContactRequest =
            serde_json::from_str(r#"{"data_store": "CRM", "contact_id": "crm-9f"}"#).unwrap();
        assert_eq!(text.contact_id.to_string(), "crm-9f");
    }

    #[test]
    fn update_request_maps_new_fields_to_changes() {
        let request: UpdateContactRequest = serde_json::from_str(
            r#"{
                "data_store": "DATABASE",
                "contact_id": 7,
                "new_email": "new@b.com",
                "new_mobile_number": "456"
            }"#,
        )
        .unwrap();
        let changes = request.changes();
        assert_eq!(changes.email, "new@b.com");
        assert_eq!(changes.mobile_number, "456");
    }

    #[test]
    fn unknown_data_store_still_deserializes() {
        // Selector validation is the handler's job, not serde's.
        let request: DeleteContactRequest =
            serde_json::from_str(r#"{"data_store": "REDIS", "contact_id": 1}"#).unwrap();
        assert_eq!(request.data_store, "REDIS");
    }
}
