use crate::{BackendError, Credentials, HttpBackend, RegistrationRequest};

use std::time::Duration;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let backend = HttpBackend::new("http://localhost:8000/", Duration::from_secs(5)).unwrap();
    assert_eq!(backend.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let backend = HttpBackend::new("http://localhost:8000", Duration::from_secs(5)).unwrap();
    assert_eq!(backend.base_url, "http://localhost:8000");
}

#[test]
fn test_registration_serializes_camel_case() {
    let request = RegistrationRequest {
        email: "ana@loja.com".into(),
        password: "segredo".into(),
        company_name: "Loja".into(),
        company_type: "Moda".into(),
        description: String::new(),
    };

    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json["companyName"], "Loja");
    assert_eq!(json["companyType"], "Moda");
    assert!(json.get("description").is_none());
}

#[test]
fn test_debug_output_hides_passwords() {
    let request = RegistrationRequest {
        email: "ana@loja.com".into(),
        password: "segredo".into(),
        ..Default::default()
    };
    let credentials = Credentials {
        email: "ana@loja.com".into(),
        password: "segredo".into(),
    };

    assert!(!format!("{request:?}").contains("segredo"));
    assert!(!format!("{credentials:?}").contains("segredo"));
}

#[test]
fn test_validation_error_user_message_is_verbatim() {
    let err = BackendError::validation("E-mail já cadastrado.");

    assert_eq!(err.user_message(), "E-mail já cadastrado.");
    assert!(!err.is_network());
}

#[test]
fn test_unauthorized_is_not_network() {
    assert!(!BackendError::unauthorized().is_network());
}
