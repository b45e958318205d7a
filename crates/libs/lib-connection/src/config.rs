//! # Connection Configuration
//!
//! Node, faucet and Ocean service endpoints. Every key has a default pointing
//! at the Nile test network so a bare build connects somewhere useful.
//!
//! Values are read through a lookup function; the browser build passes one
//! over keys baked in at compile time.
//!
//! ```rust
//! use lib_connection::config::{Config, NODE_HOST, NODE_PORT};
//!
//! let config = Config::from_lookup(|key| match key {
//!     NODE_HOST => Some("localhost".to_string()),
//!     NODE_PORT => Some("8545".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//!
//! assert_eq!(config.node.uri(), "https://localhost:8545");
//! assert_eq!(config.faucet_url(), "https://faucet.nile.dev-ocean.com:443/faucet");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{ConnectionError, Result};

pub const NODE_SCHEME: &str = "COMMONS_NODE_SCHEME";
pub const NODE_HOST: &str = "COMMONS_NODE_HOST";
pub const NODE_PORT: &str = "COMMONS_NODE_PORT";
pub const FAUCET_SCHEME: &str = "COMMONS_FAUCET_SCHEME";
pub const FAUCET_HOST: &str = "COMMONS_FAUCET_HOST";
pub const FAUCET_PORT: &str = "COMMONS_FAUCET_PORT";
pub const AQUARIUS_URI: &str = "COMMONS_AQUARIUS_URI";
pub const BRIZO_URI: &str = "COMMONS_BRIZO_URI";
pub const SECRET_STORE_URI: &str = "COMMONS_SECRET_STORE_URI";
pub const EXPECTED_NETWORK: &str = "COMMONS_EXPECTED_NETWORK";
pub const VERBOSE: &str = "COMMONS_VERBOSE";

/// Network the app is meant to run against.
pub const DEFAULT_NETWORK: &str = "Nile";

/// `scheme://host:port` triple.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub scheme: String,
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new(scheme: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            port,
        }
    }

    pub fn uri(&self) -> String {
        self.to_string()
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.scheme != "http" && self.scheme != "https" {
            return Err(ConnectionError::Config(format!(
                "{name} scheme must be http or https, got '{}'",
                self.scheme
            )));
        }
        if self.host.trim().is_empty() {
            return Err(ConnectionError::Config(format!("{name} host must not be empty")));
        }
        if self.port == 0 {
            return Err(ConnectionError::Config(format!("{name} port must not be 0")));
        }
        Ok(())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
    }
}

/// Application configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Keeper node used when no wallet is injected
    pub node: Endpoint,
    /// Faucet service
    pub faucet: Endpoint,
    /// Metadata store used by the SDK
    pub aquarius_uri: String,
    /// Access service used by the SDK
    pub brizo_uri: String,
    pub secret_store_uri: String,
    /// Network name that sets the network-match flag
    pub expected_network: String,
    /// Verbose SDK logging
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node: Endpoint::new("https", "nile.dev-ocean.com", 443),
            faucet: Endpoint::new("https", "faucet.nile.dev-ocean.com", 443),
            aquarius_uri: "https://aquarius.commons.nile.dev-ocean.com".to_string(),
            brizo_uri: "https://brizo.commons.nile.dev-ocean.com".to_string(),
            secret_store_uri: "https://secret-store.nile.dev-ocean.com".to_string(),
            expected_network: DEFAULT_NETWORK.to_string(),
            verbose: false,
        }
    }
}

impl Config {
    /// Build a configuration from `lookup`, falling back to defaults for
    /// missing keys, then validate it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let string = |key: &str, default: String| lookup(key).unwrap_or(default);

        let config = Self {
            node: Endpoint {
                scheme: string(NODE_SCHEME, defaults.node.scheme),
                host: string(NODE_HOST, defaults.node.host),
                port: parse_or(&lookup, NODE_PORT, defaults.node.port)?,
            },
            faucet: Endpoint {
                scheme: string(FAUCET_SCHEME, defaults.faucet.scheme),
                host: string(FAUCET_HOST, defaults.faucet.host),
                port: parse_or(&lookup, FAUCET_PORT, defaults.faucet.port)?,
            },
            aquarius_uri: string(AQUARIUS_URI, defaults.aquarius_uri),
            brizo_uri: string(BRIZO_URI, defaults.brizo_uri),
            secret_store_uri: string(SECRET_STORE_URI, defaults.secret_store_uri),
            expected_network: string(EXPECTED_NETWORK, defaults.expected_network),
            verbose: parse_or(&lookup, VERBOSE, defaults.verbose)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate endpoint values.
    pub fn validate(&self) -> Result<()> {
        self.node.validate("node")?;
        self.faucet.validate("faucet")?;
        if self.expected_network.is_empty() {
            return Err(ConnectionError::Config(
                "expected network name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Faucet endpoint: `{scheme}://{host}:{port}/faucet`.
    pub fn faucet_url(&self) -> String {
        format!("{}/faucet", self.faucet)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConnectionError::Config(format!("{key} has an invalid value: '{raw}'"))),
        None => Ok(default),
    }
}
