use super::*;

fn site_addr() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

// =============================================================
// parse_port
// =============================================================

#[test]
fn parse_port_accepts_numbers_with_whitespace() {
    assert_eq!(parse_port("8080"), Some(8080));
    assert_eq!(parse_port(" 8080\n"), Some(8080));
}

#[test]
fn parse_port_rejects_garbage() {
    assert_eq!(parse_port(""), None);
    assert_eq!(parse_port("http"), None);
    assert_eq!(parse_port("70000"), None);
    assert_eq!(parse_port("-1"), None);
    assert_eq!(parse_port("0"), None);
}

// =============================================================
// apply_port_override
// =============================================================

#[test]
fn missing_port_keeps_site_addr() {
    assert_eq!(apply_port_override(site_addr(), None), site_addr());
}

#[test]
fn port_override_keeps_ip() {
    let addr = apply_port_override(site_addr(), Some("8080"));
    assert_eq!(addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
}

#[test]
fn invalid_port_falls_back_to_site_addr() {
    assert_eq!(apply_port_override(site_addr(), Some("eighty")), site_addr());
}
