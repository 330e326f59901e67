use super::*;

#[test]
fn default_points_at_local_auth_service() {
    assert_eq!(ClientConfig::default().api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn new_trims_trailing_slashes_and_whitespace() {
    assert_eq!(ClientConfig::new(" https://auth.example.test/ ").api_base_url, "https://auth.example.test");
    assert_eq!(ClientConfig::new("https://auth.example.test///").api_base_url, "https://auth.example.test");
}

#[test]
fn new_blank_falls_back_to_default() {
    assert_eq!(ClientConfig::new(""), ClientConfig::default());
    assert_eq!(ClientConfig::new("  / "), ClientConfig::default());
}

#[test]
fn new_keeps_path_prefix() {
    assert_eq!(ClientConfig::new("https://example.test/auth/").api_base_url, "https://example.test/auth");
}
