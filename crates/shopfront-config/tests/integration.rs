use shopfront_config::{
    ConfigError, DEFAULT_UPSTREAM_URL, ENV_BIND_ADDR, ENV_PORT, ENV_UPSTREAM_URL, ProxyConfig,
};

#[test]
fn proxy_config_loads_through_public_lookup() -> Result<(), ConfigError> {
    let config = ProxyConfig::from_lookup(|name| match name {
        ENV_PORT => Some("4000".to_string()),
        ENV_BIND_ADDR => Some("::1".to_string()),
        _ => None,
    })?;

    assert_eq!(config.listen_addr().to_string(), "[::1]:4000");
    assert_eq!(config.upstream_url, DEFAULT_UPSTREAM_URL);
    Ok(())
}

#[test]
fn proxy_config_reports_the_offending_bind_address() {
    let result = ProxyConfig::from_lookup(|name| {
        (name == ENV_BIND_ADDR).then(|| "not-an-ip".to_string())
    });
    assert_eq!(
        result,
        Err(ConfigError::InvalidBindAddr {
            value: "not-an-ip".to_string()
        })
    );
}

#[test]
fn proxy_config_rejects_relative_upstream() {
    let result = ProxyConfig::from_lookup(|name| {
        (name == ENV_UPSTREAM_URL).then(|| "/products".to_string())
    });
    assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
}
