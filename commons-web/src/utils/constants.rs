//! Application constants and build-time configuration

use lib_connection::config;
use lib_connection::Config;

pub const APP_NAME: &str = "Commons";
pub const APP_TAGLINE: &str =
    "A marketplace to find, share and publish data, powered by Ocean Protocol";

pub const METAMASK_URL: &str = "https://metamask.io/";
pub const OCEAN_DOCS_URL: &str = "https://docs.oceanprotocol.com/";

/// `COMMONS_*` value captured when the wasm binary was built.
pub fn build_env(key: &str) -> Option<String> {
    let value = match key {
        config::NODE_SCHEME => option_env!("COMMONS_NODE_SCHEME"),
        config::NODE_HOST => option_env!("COMMONS_NODE_HOST"),
        config::NODE_PORT => option_env!("COMMONS_NODE_PORT"),
        config::FAUCET_SCHEME => option_env!("COMMONS_FAUCET_SCHEME"),
        config::FAUCET_HOST => option_env!("COMMONS_FAUCET_HOST"),
        config::FAUCET_PORT => option_env!("COMMONS_FAUCET_PORT"),
        config::AQUARIUS_URI => option_env!("COMMONS_AQUARIUS_URI"),
        config::BRIZO_URI => option_env!("COMMONS_BRIZO_URI"),
        config::SECRET_STORE_URI => option_env!("COMMONS_SECRET_STORE_URI"),
        config::EXPECTED_NETWORK => option_env!("COMMONS_EXPECTED_NETWORK"),
        config::VERBOSE => option_env!("COMMONS_VERBOSE"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Configuration baked into this build, or the Nile defaults if it is invalid.
pub fn load_config() -> Config {
    match Config::from_lookup(build_env) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid build configuration, using defaults: {}", e);
            Config::default()
        }
    }
}
