use super::*;

#[test]
fn default_uses_webhook_and_twenty_seconds() {
    let cfg = AuthConfig::default();
    assert_eq!(cfg.endpoint, DEFAULT_AUTH_ENDPOINT);
    assert_eq!(cfg.timeout, Duration::from_secs(20));
}

#[test]
fn overrides_replace_endpoint_and_timeout() {
    let cfg = AuthConfig::from_overrides(Some(" https://auth.example.test/hook "), Some("5"));
    assert_eq!(cfg.endpoint, "https://auth.example.test/hook");
    assert_eq!(cfg.timeout, Duration::from_secs(5));
}

#[test]
fn blank_or_invalid_overrides_fall_back() {
    let cfg = AuthConfig::from_overrides(Some("   "), Some("soon"));
    assert_eq!(cfg, AuthConfig::default());

    let zero = AuthConfig::from_overrides(None, Some("0"));
    assert_eq!(zero.timeout, Duration::from_secs(DEFAULT_AUTH_TIMEOUT_SECS));
}
