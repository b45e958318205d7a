//! Ocean SDK (squid-js) bindings
//!
//! The SDK is loaded as a browser global (`window.squid`) next to
//! `window.Web3`. Handles stay opaque `JsValue`s; only ids, balances and
//! network names cross into Rust.

use async_trait::async_trait;
use js_sys::Array;
use lib_connection::error::ConnectionError;
use lib_connection::{Account, Config, Connect, Ocean, ProviderSource};
use serde::Serialize;
use shared::Balance;
use wasm_bindgen::prelude::*;

use super::wallet::{injectedProvider, js_error_message};

#[wasm_bindgen(inline_js = "
export function httpProvider(uri) {
    return new window.Web3.providers.HttpProvider(uri);
}

export async function provideOcean(provider, config) {
    const web3 = new window.Web3(provider);
    const { Ocean } = window.squid;
    return await Ocean.getInstance({ ...config, web3Provider: web3 });
}

export async function listAccounts(ocean) {
    return await ocean.accounts.list();
}

export function accountId(account) {
    return account.getId();
}

export async function accountBalance(account) {
    return await account.getBalance();
}

export async function networkName(ocean) {
    return await ocean.keeper.getNetworkName();
}
")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn httpProvider(uri: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn provideOcean(provider: JsValue, config: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn listAccounts(ocean: &JsValue) -> Result<JsValue, JsValue>;

    fn accountId(account: &JsValue) -> String;

    #[wasm_bindgen(catch)]
    async fn accountBalance(account: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn networkName(ocean: &JsValue) -> Result<JsValue, JsValue>;
}

/// Options passed to `Ocean.getInstance`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SdkConfig<'a> {
    node_uri: String,
    aquarius_uri: &'a str,
    brizo_uri: &'a str,
    secret_store_uri: &'a str,
    verbose: bool,
}

impl<'a> SdkConfig<'a> {
    fn new(config: &'a Config) -> Self {
        Self {
            node_uri: config.node.uri(),
            aquarius_uri: &config.aquarius_uri,
            brizo_uri: &config.brizo_uri,
            secret_store_uri: &config.secret_store_uri,
            verbose: config.verbose,
        }
    }
}

fn sdk_error(call: &str, err: JsValue) -> ConnectionError {
    ConnectionError::Sdk(format!("{call}: {}", js_error_message(&err)))
}

/// Account object handed out by `ocean.accounts.list()`.
#[derive(Clone)]
pub struct JsAccount(JsValue);

#[async_trait(?Send)]
impl Account for JsAccount {
    fn id(&self) -> String {
        accountId(&self.0)
    }

    async fn balance(&self) -> lib_connection::Result<Balance> {
        let value = accountBalance(&self.0)
            .await
            .map_err(|e| sdk_error("account.getBalance", e))?;
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| ConnectionError::Sdk(format!("unexpected balance shape: {e}")))
    }
}

/// Connected squid-js `Ocean` instance.
#[derive(Clone)]
pub struct JsOcean(JsValue);

#[async_trait(?Send)]
impl Ocean for JsOcean {
    type Account = JsAccount;

    async fn list_accounts(&self) -> lib_connection::Result<Vec<JsAccount>> {
        let value = listAccounts(&self.0)
            .await
            .map_err(|e| sdk_error("accounts.list", e))?;
        Ok(Array::from(&value).iter().map(JsAccount).collect())
    }

    async fn network_name(&self) -> lib_connection::Result<String> {
        let value = networkName(&self.0)
            .await
            .map_err(|e| sdk_error("keeper.getNetworkName", e))?;
        value
            .as_string()
            .ok_or_else(|| ConnectionError::Sdk("network name is not a string".to_string()))
    }
}

/// Creates [`JsOcean`] instances from the app configuration.
pub struct OceanConnector {
    config: Config,
}

impl OceanConnector {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl Connect for OceanConnector {
    type Ocean = JsOcean;

    async fn connect(&self, source: &ProviderSource) -> lib_connection::Result<JsOcean> {
        let provider = match source {
            ProviderSource::Injected => injectedProvider(),
            ProviderSource::Node(uri) => httpProvider(uri)
                .map_err(|e| ConnectionError::Provider(js_error_message(&e)))?,
        };
        if provider.is_null() || provider.is_undefined() {
            return Err(ConnectionError::Provider("no Web3 provider available".to_string()));
        }

        let options = serde_wasm_bindgen::to_value(&SdkConfig::new(&self.config))
            .map_err(|e| ConnectionError::Provider(format!("invalid SDK options: {e}")))?;

        let ocean = provideOcean(provider, options)
            .await
            .map_err(|e| ConnectionError::Provider(js_error_message(&e)))?;

        log::info!("Ocean SDK ready ({:?})", source);
        Ok(JsOcean(ocean))
    }
}
