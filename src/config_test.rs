use super::*;

#[test]
fn from_values_defaults_to_all_interfaces_on_5000() {
    let cfg = SiteConfig::from_values(None, None).unwrap();
    assert_eq!(cfg.addr, "0.0.0.0:5000".parse::<SocketAddr>().unwrap());
}

#[test]
fn from_values_parses_overrides() {
    let cfg = SiteConfig::from_values(Some("127.0.0.1"), Some("8080")).unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
}

#[test]
fn from_values_accepts_ipv6_host() {
    let cfg = SiteConfig::from_values(Some("::1"), Some("3000")).unwrap();
    assert!(cfg.addr.is_ipv6());
    assert_eq!(cfg.addr.port(), 3000);
}

#[test]
fn from_values_trims_whitespace() {
    let cfg = SiteConfig::from_values(Some("  127.0.0.1 "), Some(" 9000\n")).unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
}

#[test]
fn from_values_blank_values_fall_back_to_defaults() {
    let cfg = SiteConfig::from_values(Some("   "), Some("")).unwrap();
    assert_eq!(cfg.addr.ip().to_string(), DEFAULT_HOST);
    assert_eq!(cfg.addr.port(), DEFAULT_PORT);
}

#[test]
fn from_values_rejects_bad_port() {
    let err = SiteConfig::from_values(None, Some("http")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == "http"));
    assert!(err.to_string().contains("invalid PORT 'http'"));

    let err = SiteConfig::from_values(None, Some("70000")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(_)));
}

#[test]
fn from_values_rejects_hostname() {
    let err = SiteConfig::from_values(Some("localhost"), None).unwrap_err();
    assert!(err.to_string().contains("invalid HOST 'localhost'"));
}

#[test]
fn from_env_reads_host_and_port() {
    // Only test in the crate that touches HOST / PORT.
    unsafe {
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "5050");
    }

    let cfg = SiteConfig::from_env().unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:5050".parse::<SocketAddr>().unwrap());

    unsafe {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
    }
}
