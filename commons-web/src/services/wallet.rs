//! Injected Wallet Integration via wasm-bindgen
//!
//! Legacy dapp browsers and MetaMask inject `window.web3` (provider) and
//! `window.ethereum` (EIP-1102 authorization). Presence is re-checked on every
//! call since users can enable or disable the extension at any time.

use async_trait::async_trait;
use lib_connection::error::ConnectionError;
use lib_connection::Wallet;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
export function hasInjectedWeb3() {
    return typeof window.web3 !== 'undefined' && window.web3 !== null;
}

export function hasEthereum() {
    return typeof window.ethereum !== 'undefined' && window.ethereum !== null;
}

export async function enableEthereum() {
    return await window.ethereum.enable();
}

export function injectedProvider() {
    return window.web3 ? window.web3.currentProvider : null;
}
")]
extern "C" {
    /// `window.web3` is present
    fn hasInjectedWeb3() -> bool;

    /// `window.ethereum` is present
    fn hasEthereum() -> bool;

    /// Ask the wallet for account access
    #[wasm_bindgen(catch)]
    async fn enableEthereum() -> Result<JsValue, JsValue>;

    /// Provider of the injected `web3` instance (null when absent)
    pub fn injectedProvider() -> JsValue;
}

/// Wallet injected into the page.
#[derive(Clone, Copy, Debug, Default)]
pub struct InjectedWallet;

#[async_trait(?Send)]
impl Wallet for InjectedWallet {
    fn is_present(&self) -> bool {
        hasInjectedWeb3()
    }

    fn can_authorize(&self) -> bool {
        hasEthereum()
    }

    async fn enable(&self) -> lib_connection::Result<()> {
        enableEthereum()
            .await
            .map(|_| ())
            .map_err(|e| ConnectionError::Authorization(js_error_message(&e)))
    }
}

/// Best-effort message out of a thrown JS value.
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(msg) = err.as_string() {
        return msg;
    }
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
