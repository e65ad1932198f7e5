use super::{AllowedOrigin, ApiError, CorsPolicy};

#[test]
fn default_policy_allows_any_origin() {
    let policy = CorsPolicy::default();

    assert_eq!(policy.allow_origin, AllowedOrigin::Any);
    assert_eq!(policy.allow_methods, vec!["GET", "POST", "OPTIONS"]);
    assert_eq!(policy.allow_headers, vec!["Content-Type", "Authorization"]);
    assert!(policy.to_layer().is_ok());
}

#[test]
fn star_parses_as_any_origin() {
    assert_eq!(AllowedOrigin::from("*"), AllowedOrigin::Any);
    assert_eq!(AllowedOrigin::from(" * "), AllowedOrigin::Any);
}

#[test]
fn other_values_parse_as_exact_origin() {
    assert_eq!(
        AllowedOrigin::from("http://localhost:3000"),
        AllowedOrigin::Exact("http://localhost:3000".to_string())
    );
}

#[test]
fn builder_replaces_lists() {
    let policy = CorsPolicy::default()
        .with_origin("http://localhost:3000")
        .with_methods(["GET"])
        .with_headers(["X-Requested-With"]);

    assert_eq!(
        policy.allow_origin,
        AllowedOrigin::Exact("http://localhost:3000".to_string())
    );
    assert_eq!(policy.allow_methods, vec!["GET"]);
    assert_eq!(policy.allow_headers, vec!["X-Requested-With"]);
    assert!(policy.to_layer().is_ok());
}

#[test]
fn invalid_method_is_rejected() {
    let err = CorsPolicy::default()
        .with_methods(["GET", "BAD METHOD"])
        .to_layer()
        .unwrap_err();

    assert!(matches!(err, ApiError::InvalidCors { kind: "method", .. }));
    assert_eq!(err.to_string(), "Invalid CORS method: 'BAD METHOD'");
}

#[test]
fn invalid_header_is_rejected() {
    let err = CorsPolicy::default()
        .with_headers(["Content Type"])
        .to_layer()
        .unwrap_err();

    assert!(matches!(err, ApiError::InvalidCors { kind: "header", .. }));
}

#[test]
fn empty_origin_is_rejected() {
    let err = CorsPolicy::default()
        .with_origin("")
        .to_layer()
        .unwrap_err();

    assert!(matches!(err, ApiError::InvalidCors { kind: "origin", .. }));
}

#[test]
fn origin_with_control_characters_is_rejected() {
    let err = CorsPolicy::default()
        .with_origin("http://bad\nhost")
        .to_layer()
        .unwrap_err();

    assert!(matches!(err, ApiError::InvalidCors { kind: "origin", .. }));
}
