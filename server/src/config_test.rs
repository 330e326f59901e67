use super::*;

#[test]
fn parse_port_defaults_when_unset() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_defaults_when_blank() {
    assert_eq!(parse_port(Some("   ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_reads_value_with_whitespace() {
    assert_eq!(parse_port(Some(" 8443 ")).unwrap(), 8443);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("http")).unwrap_err();
    assert_eq!(err.to_string(), "config parse failed: invalid PORT: http");
}

#[test]
fn parse_port_rejects_out_of_range() {
    assert!(parse_port(Some("70000")).is_err());
}
