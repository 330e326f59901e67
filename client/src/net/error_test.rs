use super::*;

#[test]
fn rejected_formats_status_text_and_message() {
    let err = LoginError::Rejected {
        status: 401,
        status_text: "Unauthorized".to_owned(),
        message: "invalid credentials".to_owned(),
    };
    assert_eq!(err.to_string(), "401 - Unauthorized - invalid credentials");
}

#[test]
fn malformed_error_body_uses_fallback_message() {
    let err = LoginError::MalformedErrorBody {
        status: 502,
        status_text: "Bad Gateway".to_owned(),
        detail: "expected value at line 1 column 1".to_owned(),
    };
    assert_eq!(err.to_string(), "502 - Bad Gateway - unexpected error response from server");
}

#[test]
fn network_error_is_generic() {
    let err = LoginError::Network("Failed to fetch".to_owned());
    assert_eq!(err.to_string(), "network error: Failed to fetch");
}
