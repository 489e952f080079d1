use tabscout::config::callback_binding;

#[test]
fn test_callback_binding_derived_from_redirect_uri() {
    let (address, path) = callback_binding("http://localhost:8080/callback", None).unwrap();

    assert_eq!(address, "0.0.0.0:8080");
    assert_eq!(path, "/callback");
}

#[test]
fn test_callback_binding_follows_redirect_port_and_path() {
    let (address, path) = callback_binding("http://localhost:9944/auth/done", None).unwrap();

    assert_eq!(address, "0.0.0.0:9944");
    assert_eq!(path, "/auth/done");
}

#[test]
fn test_callback_binding_accepts_matching_override() {
    let (address, path) = callback_binding(
        "http://localhost:8080/callback",
        Some("127.0.0.1:8080".to_string()),
    )
    .unwrap();

    assert_eq!(address, "127.0.0.1:8080");
    assert_eq!(path, "/callback");
}

#[test]
fn test_callback_binding_rejects_port_mismatch() {
    // A listener on 9090 would never see the redirect aimed at 8080
    let err = callback_binding(
        "http://localhost:8080/callback",
        Some("127.0.0.1:9090".to_string()),
    )
    .unwrap_err();

    assert!(err.contains("9090"));
    assert!(err.contains("8080"));
}

#[test]
fn test_callback_binding_rejects_unparseable_inputs() {
    assert!(callback_binding("not-a-url", None).is_err());
    assert!(
        callback_binding(
            "http://localhost:8080/callback",
            Some("no-port-here".to_string())
        )
        .is_err()
    );
}
