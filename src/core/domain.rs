use std::fmt;
use std::fmt::{Display, Formatter};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::core::errors::{CatalogError, CatalogResult};

// Identifiable defines common traits that can be shared by catalog records
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// ServerRuntime selects how the router is hosted
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum ServerRuntime {
    Local,
    Lambda,
}

impl FromStr for ServerRuntime {
    type Err = CatalogError;

    fn from_str(s: &str) -> CatalogResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(ServerRuntime::Local),
            "lambda" => Ok(ServerRuntime::Lambda),
            other => Err(CatalogError::validation(
                format!("unknown runtime {:?}", other).as_str(), Some(RUNTIME_VAR.to_string()))),
        }
    }
}

impl Display for ServerRuntime {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ServerRuntime::Local => write!(f, "local"),
            ServerRuntime::Lambda => write!(f, "lambda"),
        }
    }
}

pub const HOST_VAR: &str = "ALBUMS_HOST";
pub const PORT_VAR: &str = "ALBUMS_PORT";
pub const RUNTIME_VAR: &str = "ALBUMS_RUNTIME";
pub const SEED_VAR: &str = "ALBUMS_SEED";

// Configuration abstracts config options for the album catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub host: IpAddr,
    pub port: u16,
    pub runtime: ServerRuntime,
    pub seed_catalog: bool,
}

impl Configuration {
    pub fn new(host: IpAddr, port: u16) -> Self {
        Configuration {
            host,
            port,
            runtime: ServerRuntime::Local,
            seed_catalog: true,
        }
    }

    pub fn from_env() -> CatalogResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Builds configuration from any key lookup, unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> CatalogResult<Self>
        where F: Fn(&str) -> Option<String> {
        let mut config = Configuration::default();
        if let Some(host) = lookup(HOST_VAR) {
            config.host = parse_host(host.trim())?;
        }
        if let Some(port) = lookup(PORT_VAR) {
            config.port = port.trim().parse::<u16>().map_err(|err| CatalogError::validation(
                format!("invalid port {:?}: {}", port, err).as_str(), Some(PORT_VAR.to_string())))?;
        }
        if let Some(runtime) = lookup(RUNTIME_VAR) {
            config.runtime = runtime.trim().parse::<ServerRuntime>()?;
        }
        if let Some(seed) = lookup(SEED_VAR) {
            config.seed_catalog = seed.trim().parse::<bool>().map_err(|err| CatalogError::validation(
                format!("invalid seed flag {:?}: {}", seed, err).as_str(), Some(SEED_VAR.to_string())))?;
        }
        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080)
    }
}

fn parse_host(host: &str) -> CatalogResult<IpAddr> {
    if host.eq_ignore_ascii_case("localhost") {
        return Ok(IpAddr::V4(Ipv4Addr::LOCALHOST));
    }
    host.parse::<IpAddr>().map_err(|err| CatalogError::validation(
        format!("invalid host {:?}: {}", host, err).as_str(), Some(HOST_VAR.to_string())))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::net::{IpAddr, Ipv4Addr};
    use crate::core::domain::{Configuration, ServerRuntime};
    use crate::core::errors::CatalogError;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[tokio::test]
    async fn test_should_build_default_config() {
        let config = Configuration::from_lookup(lookup(&[])).expect("should build config");
        assert_eq!(IpAddr::V4(Ipv4Addr::LOCALHOST), config.host);
        assert_eq!(8080, config.port);
        assert_eq!(ServerRuntime::Local, config.runtime);
        assert!(config.seed_catalog);
        assert_eq!("127.0.0.1:8080", config.socket_addr().to_string());
    }

    #[tokio::test]
    async fn test_should_override_config() {
        let config = Configuration::from_lookup(lookup(&[
            ("ALBUMS_HOST", "0.0.0.0"),
            ("ALBUMS_PORT", "9090"),
            ("ALBUMS_RUNTIME", "Lambda"),
            ("ALBUMS_SEED", "false"),
        ])).expect("should build config");
        assert_eq!("0.0.0.0:9090", config.socket_addr().to_string());
        assert_eq!(ServerRuntime::Lambda, config.runtime);
        assert!(!config.seed_catalog);
    }

    #[tokio::test]
    async fn test_should_accept_localhost() {
        let config = Configuration::from_lookup(lookup(&[("ALBUMS_HOST", "localhost")])).expect("should build config");
        assert_eq!(IpAddr::V4(Ipv4Addr::LOCALHOST), config.host);
    }

    #[tokio::test]
    async fn test_should_reject_invalid_config() {
        for vars in [
            [("ALBUMS_PORT", "http")],
            [("ALBUMS_PORT", "70000")],
            [("ALBUMS_HOST", "not a host")],
            [("ALBUMS_RUNTIME", "fargate")],
            [("ALBUMS_SEED", "maybe")],
        ] {
            let res = Configuration::from_lookup(lookup(&vars));
            assert!(matches!(res, Err(CatalogError::Validation { reason_code: Some(_), .. })), "{:?}", vars);
        }
    }

    #[tokio::test]
    async fn test_should_format_runtime() {
        for runtime in [ServerRuntime::Local, ServerRuntime::Lambda] {
            let str = runtime.to_string();
            assert_eq!(runtime, str.parse::<ServerRuntime>().expect("should parse runtime"));
        }
    }
}
