use crate::{env_parse_or_default, ConfigError, FromEnv};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Address the HTTP listener binds to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    pub const DEFAULT_PORT: u16 = 8080;
}

impl FromEnv for ServerConfig {
    /// `HOST` must be an IP literal (default `0.0.0.0`); `PORT` defaults to 8080.
    fn from_env() -> Result<Self, ConfigError> {
        let host: IpAddr = env_parse_or_default("HOST", "0.0.0.0")?;
        let port = env_parse_or_default("PORT", "8080")?;

        Ok(Self {
            addr: SocketAddr::new(host, port),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, Self::DEFAULT_PORT)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_bind_all_interfaces() {
        temp_env::with_vars_unset(["HOST", "PORT"], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config, ServerConfig::default());
            assert_eq!(config.addr.to_string(), "0.0.0.0:8080");
        });
    }

    #[test]
    fn test_ipv6_host() {
        temp_env::with_vars([("HOST", Some("::1")), ("PORT", Some("3000"))], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.addr.to_string(), "[::1]:3000");
        });
    }

    #[test]
    fn test_hostname_is_rejected() {
        temp_env::with_var("HOST", Some("localhost"), || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::ParseError { ref key, .. } if key == "HOST"));
        });
    }

    #[test]
    fn test_port_out_of_range() {
        temp_env::with_var("PORT", Some("99999"), || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("PORT"));
        });
    }
}
