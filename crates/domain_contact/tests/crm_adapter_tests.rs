//! CRM adapter wire-format tests
//!
//! These pin the exact shape the adapter puts on the wire (auth header,
//! nested `contact` envelope, paths) and the passthrough/error contract,
//! against a local mock server.

use httpmock::prelude::*;
use serde_json::json;

use domain_contact::{
    BackendError, ContactBackend, ContactId, ContactUpdate, CrmConfig, CrmContactAdapter,
    NewContact,
};

fn adapter_for(server: &MockServer) -> CrmContactAdapter {
    CrmContactAdapter::new(CrmConfig::new(server.base_url(), "test-key")).unwrap()
}

fn new_contact() -> NewContact {
    NewContact {
        first_name: "A".to_string(),
        last_name: "B".to_string(),
        email: "a@b.com".to_string(),
        mobile_number: "123".to_string(),
    }
}

#[tokio::test]
async fn create_nests_fields_under_contact_key_and_passes_body_through() {
    let server = MockServer::start();
    let crm_body = json!({
        "contact": {
            "id": "crm-77",
            "first_name": "A",
            "last_name": "B",
            "email": "a@b.com",
            "mobile_number": "123",
            "lead_score": 40
        }
    });

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/contacts")
            .header("authorization", "Token token=test-key")
            .json_body(json!({
                "contact": {
                    "first_name": "A",
                    "last_name": "B",
                    "email": "a@b.com",
                    "mobile_number": "123"
                }
            }));
        then.status(201).json_body(crm_body.clone());
    });

    let body = adapter_for(&server)
        .create_contact(new_contact())
        .await
        .unwrap();

    mock.assert();
    // The CRM representation is returned untouched, extra fields included.
    assert_eq!(body, crm_body);
}

#[tokio::test]
async fn get_fetches_by_id_path() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/contacts/crm-77")
            .header("authorization", "Token token=test-key");
        then.status(200)
            .json_body(json!({"contact": {"id": "crm-77", "email": "a@b.com"}}));
    });

    let body = adapter_for(&server)
        .get_contact(&ContactId::from("crm-77"))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(body["contact"]["id"], "crm-77");
}

#[tokio::test]
async fn update_sends_only_the_mutable_fields() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT).path("/contacts/12").json_body(json!({
            "contact": {
                "email": "new@b.com",
                "mobile_number": "456"
            }
        }));
        then.status(200)
            .json_body(json!({"contact": {"id": 12, "email": "new@b.com"}}));
    });

    let body = adapter_for(&server)
        .update_contact(
            &ContactId::from(12),
            ContactUpdate {
                email: "new@b.com".to_string(),
                mobile_number: "456".to_string(),
            },
        )
        .await
        .unwrap();

    mock.assert();
    assert_eq!(body["contact"]["email"], "new@b.com");
}

#[tokio::test]
async fn delete_succeeds_on_2xx_and_ignores_the_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/contacts/12");
        then.status(200).body("deleted");
    });

    adapter_for(&server)
        .delete_contact(&ContactId::from(12))
        .await
        .unwrap();
    mock.assert();
}

#[tokio::test]
async fn non_2xx_response_becomes_an_upstream_error_naming_the_operation() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/contacts/9");
        then.status(503).body("maintenance");
    });

    let err = adapter_for(&server)
        .get_contact(&ContactId::from(9))
        .await
        .unwrap_err();

    assert!(matches!(err, BackendError::Upstream { .. }));
    let text = err.to_string();
    assert!(text.contains("retrieving"), "{text}");
    assert!(text.contains("503"), "{text}");
}

#[tokio::test]
async fn undecodable_body_becomes_an_upstream_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/contacts");
        then.status(201).body("not json");
    });

    let err = adapter_for(&server)
        .create_contact(new_contact())
        .await
        .unwrap_err();
    assert!(matches!(err, BackendError::Upstream { .. }));
    assert!(err.to_string().contains("creating"));
}

#[tokio::test]
async fn unreachable_crm_becomes_an_upstream_error() {
    // Port 1 is never listening.
    let adapter = CrmContactAdapter::new(CrmConfig::new("http://127.0.0.1:1", "k")).unwrap();

    let err = adapter.delete_contact(&ContactId::from(1)).await.unwrap_err();
    assert!(matches!(err, BackendError::Upstream { .. }));
    assert!(err.to_string().contains("deleting"));
}
