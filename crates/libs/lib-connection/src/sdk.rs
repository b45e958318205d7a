//! # SDK and Wallet Boundaries
//!
//! Traits for everything this crate consumes but does not implement: the
//! injected wallet, the Ocean SDK and the account objects it hands out.
//! The browser app implements them over JS handles; tests implement them with
//! in-memory mocks.
//!
//! Handles coming from JavaScript are not `Send`, so every async trait here is
//! declared `?Send`.

use async_trait::async_trait;
use shared::Balance;

use crate::error::Result;

/// Where the SDK's Web3 provider comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderSource {
    /// The provider injected by the user's wallet.
    Injected,
    /// Plain HTTP provider against a configured node.
    Node(String),
}

/// Which provider backs the current SDK handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    Injected,
    Node { uri: String },
}

impl From<&ProviderSource> for ProviderKind {
    fn from(source: &ProviderSource) -> Self {
        match source {
            ProviderSource::Injected => ProviderKind::Injected,
            ProviderSource::Node(uri) => ProviderKind::Node { uri: uri.clone() },
        }
    }
}

/// Browser-injected wallet.
#[async_trait(?Send)]
pub trait Wallet {
    /// An injected Web3 provider is present.
    fn is_present(&self) -> bool;

    /// The wallet exposes an authorization (`enable()`) entry point.
    fn can_authorize(&self) -> bool;

    /// Ask the user to authorize account access.
    async fn enable(&self) -> Result<()>;
}

/// Account handle returned by the SDK.
#[async_trait(?Send)]
pub trait Account {
    fn id(&self) -> String;

    async fn balance(&self) -> Result<Balance>;
}

/// Connected SDK instance.
#[async_trait(?Send)]
pub trait Ocean {
    type Account: Account;

    async fn list_accounts(&self) -> Result<Vec<Self::Account>>;

    async fn network_name(&self) -> Result<String>;
}

/// Creates an SDK instance on top of a provider.
#[async_trait(?Send)]
pub trait Connect {
    type Ocean: Ocean;

    async fn connect(&self, source: &ProviderSource) -> Result<Self::Ocean>;
}

/// First account with a non-empty identifier, plus its balance.
///
/// Only the first listed account is ever considered.
pub(crate) async fn first_account<O: Ocean>(ocean: &O) -> Result<Option<(String, Balance)>> {
    let accounts = ocean.list_accounts().await?;
    let Some(account) = accounts.first() else {
        return Ok(None);
    };

    let id = account.id();
    if id.is_empty() {
        return Ok(None);
    }

    let balance = account.balance().await?;
    Ok(Some((id, balance)))
}
