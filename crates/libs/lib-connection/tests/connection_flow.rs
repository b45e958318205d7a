mod common;

use common::{Chain, MockConnector, MockFaucet, MockOcean, MockWallet};
use lib_connection::bootstrap::{bootstrap, into_event};
use lib_connection::faucet::request_from_faucet;
use lib_connection::login::login;
use lib_connection::poll::{poll_accounts, poll_network};
use lib_connection::{
    Config, ConnectionError, ConnectionEvent, ConnectionState, ProviderKind, ProviderSource,
};
use serde_json::json;
use shared::{Balance, FaucetRequest};

const ABC: &str = "0xABC";
const DEF: &str = "0xDEF";

fn balance_abc() -> Balance {
    Balance::new(1.25, 500.0)
}

fn balance_def() -> Balance {
    Balance::new(0.5, 42.0)
}

/// Run bootstrap and apply its event to a fresh state.
async fn settle(
    connector: &MockConnector,
    wallet: &MockWallet,
) -> (Option<MockOcean>, ConnectionState) {
    let config = Config::default();
    let mut state = ConnectionState::new(&config);
    let (ocean, event) = into_event(bootstrap(connector, wallet, &config).await);
    state.apply(event);
    (ocean, state)
}

// region:    --- Bootstrap

#[tokio::test]
async fn test_bootstrap_wallet_with_account() {
    let chain = Chain::new("Nile", &[(ABC, balance_abc())]);
    let connector = MockConnector::new(&chain);
    let wallet = MockWallet::present();

    let (ocean, state) = settle(&connector, &wallet).await;

    assert!(ocean.is_some());
    assert_eq!(connector.sources.borrow().as_slice(), &[ProviderSource::Injected]);
    assert!(!state.is_loading);
    assert!(state.has_wallet);
    assert!(state.is_logged());
    assert_eq!(state.account_id(), ABC);
    assert_eq!(state.balance, balance_abc());
    assert_eq!(state.network, "Nile");
    assert!(state.is_nile);
    assert_eq!(state.provider, ProviderKind::Injected);
}

#[tokio::test]
async fn test_bootstrap_wallet_without_accounts() {
    let chain = Chain::new("Nile", &[]);
    let connector = MockConnector::new(&chain);
    let wallet = MockWallet::present();

    let (_, state) = settle(&connector, &wallet).await;

    assert!(state.has_wallet);
    assert!(!state.is_logged());
    assert_eq!(state.account_id(), "");
    assert_eq!(chain.balance_calls.get(), 0);
}

#[tokio::test]
async fn test_bootstrap_without_wallet_uses_default_node() {
    let chain = Chain::new("Kovan", &[(ABC, balance_abc())]);
    let connector = MockConnector::new(&chain);
    let wallet = MockWallet::absent();

    let (ocean, state) = settle(&connector, &wallet).await;

    let node = Config::default().node.uri();
    assert!(ocean.is_some());
    assert_eq!(connector.sources.borrow().as_slice(), &[ProviderSource::Node(node.clone())]);
    assert_eq!(state.provider, ProviderKind::Node { uri: node });
    assert!(!state.is_loading);
    assert!(!state.has_wallet);
    assert!(!state.is_logged());
    assert_eq!(chain.list_calls.get(), 0);
    assert_eq!(state.network, "Kovan");
    assert!(!state.is_nile);
}

#[tokio::test]
async fn test_bootstrap_provider_failure_clears_loading() {
    let chain = Chain::new("Nile", &[(ABC, balance_abc())]);
    let connector = MockConnector::failing(&chain);
    let wallet = MockWallet::present();

    let (ocean, state) = settle(&connector, &wallet).await;

    assert!(ocean.is_none());
    assert!(!state.is_loading);
    assert!(!state.is_logged());
    assert!(matches!(state.last_error, Some(ConnectionError::Provider(_))));
}

#[tokio::test]
async fn test_bootstrap_sdk_failure_clears_loading() {
    let chain = Chain::new("Nile", &[(ABC, balance_abc())]);
    chain.fail_calls.set(true);
    let connector = MockConnector::new(&chain);
    let wallet = MockWallet::present();

    let (ocean, state) = settle(&connector, &wallet).await;

    assert!(ocean.is_none());
    assert!(!state.is_loading);
    assert!(matches!(state.last_error, Some(ConnectionError::Sdk(_))));
}

// endregion: --- Bootstrap

// region:    --- Account poller

#[tokio::test]
async fn test_account_poll_unchanged_is_noop() {
    let chain = Chain::new("Nile", &[(ABC, balance_abc())]);
    let connector = MockConnector::new(&chain);
    let wallet = MockWallet::present();
    let (ocean, state) = settle(&connector, &wallet).await;
    let ocean = ocean.unwrap();

    for _ in 0..3 {
        let event = poll_accounts(&ocean, &wallet, &state).await.unwrap();
        assert_eq!(event, None);
    }
    // balance is only fetched once, during bootstrap
    assert_eq!(chain.balance_calls.get(), 1);
}

#[tokio::test]
async fn test_account_poll_detects_switch() {
    let chain = Chain::new("Nile", &[(ABC, balance_abc())]);
    let connector = MockConnector::new(&chain);
    let wallet = MockWallet::present();
    let (ocean, mut state) = settle(&connector, &wallet).await;
    let ocean = ocean.unwrap();

    chain.set_accounts(&[(DEF, balance_def())]);
    let event = poll_accounts(&ocean, &wallet, &state).await.unwrap().unwrap();
    assert_eq!(
        event,
        ConnectionEvent::AccountChanged {
            account: DEF.to_string(),
            balance: balance_def(),
        }
    );

    assert!(state.apply(event));
    assert_eq!(state.account_id(), DEF);
    assert_eq!(state.balance, balance_def());
    assert!(state.is_logged());
}

#[tokio::test]
async fn test_account_poll_empty_list_logs_out() {
    let chain = Chain::new("Nile", &[(ABC, balance_abc())]);
    let connector = MockConnector::new(&chain);
    let wallet = MockWallet::present();
    let (ocean, mut state) = settle(&connector, &wallet).await;
    let ocean = ocean.unwrap();

    chain.set_accounts(&[]);
    let event = poll_accounts(&ocean, &wallet, &state).await.unwrap();
    assert_eq!(event, Some(ConnectionEvent::AccountsCleared));

    state.apply(ConnectionEvent::AccountsCleared);
    assert!(!state.is_logged());
    assert_eq!(state.account_id(), "");

    // already logged out: nothing more to do
    assert_eq!(poll_accounts(&ocean, &wallet, &state).await.unwrap(), None);
}

#[tokio::test]
async fn test_account_poll_wallet_removed() {
    let chain = Chain::new("Nile", &[(ABC, balance_abc())]);
    let connector = MockConnector::new(&chain);
    let wallet = MockWallet::present();
    let (ocean, mut state) = settle(&connector, &wallet).await;
    let ocean = ocean.unwrap();

    wallet.present.set(false);
    let event = poll_accounts(&ocean, &wallet, &state).await.unwrap();
    assert_eq!(event, Some(ConnectionEvent::WalletLost));

    state.apply(ConnectionEvent::WalletLost);
    assert!(!state.has_wallet);
    assert!(!state.is_logged());
    assert_eq!(poll_accounts(&ocean, &wallet, &state).await.unwrap(), None);
}

#[tokio::test]
async fn test_account_poll_error_is_returned() {
    let chain = Chain::new("Nile", &[(ABC, balance_abc())]);
    let connector = MockConnector::new(&chain);
    let wallet = MockWallet::present();
    let (ocean, state) = settle(&connector, &wallet).await;
    let ocean = ocean.unwrap();

    chain.fail_calls.set(true);
    let err = poll_accounts(&ocean, &wallet, &state).await.unwrap_err();
    assert!(matches!(err, ConnectionError::Sdk(_)));
}

#[tokio::test]
async fn test_account_poll_outage_is_reported_once() {
    let chain = Chain::new("Nile", &[(ABC, balance_abc())]);
    let connector = MockConnector::new(&chain);
    let wallet = MockWallet::present();
    let (ocean, mut state) = settle(&connector, &wallet).await;
    let ocean = ocean.unwrap();

    chain.fail_calls.set(true);
    let err = poll_accounts(&ocean, &wallet, &state).await.unwrap_err();
    assert!(state.apply(ConnectionEvent::PollFailed(err)));
    assert!(state.apply(ConnectionEvent::ErrorDismissed));

    // Every following tick fails the same way; the banner stays dismissed
    for _ in 0..3 {
        let err = poll_accounts(&ocean, &wallet, &state).await.unwrap_err();
        assert!(!state.apply(ConnectionEvent::PollFailed(err)));
        assert!(state.last_error.is_none());
    }

    chain.fail_calls.set(false);
    assert_eq!(poll_accounts(&ocean, &wallet, &state).await.unwrap(), None);
    assert!(state.has_poll_error());
    state.apply(ConnectionEvent::PollRecovered);
    assert!(!state.has_poll_error());
    assert!(state.is_logged());
}

// endregion: --- Account poller

// region:    --- Network poller

#[tokio::test]
async fn test_network_poll_sets_match_flag() {
    let chain = Chain::new("Nile", &[]);
    let connector = MockConnector::new(&chain);
    let wallet = MockWallet::present();
    let (ocean, mut state) = settle(&connector, &wallet).await;
    let ocean = ocean.unwrap();

    assert_eq!(poll_network(&ocean, &wallet, &state).await.unwrap(), None);

    chain.set_network("Pacific");
    let event = poll_network(&ocean, &wallet, &state).await.unwrap().unwrap();
    assert_eq!(event, ConnectionEvent::NetworkChanged("Pacific".to_string()));
    state.apply(event);
    assert_eq!(state.network, "Pacific");
    assert!(!state.is_nile);

    chain.set_network("Nile");
    let event = poll_network(&ocean, &wallet, &state).await.unwrap().unwrap();
    state.apply(event);
    assert!(state.is_nile);
}

#[tokio::test]
async fn test_network_poll_requires_wallet() {
    let chain = Chain::new("Nile", &[]);
    let connector = MockConnector::new(&chain);
    let wallet = MockWallet::absent();
    let (ocean, state) = settle(&connector, &wallet).await;
    let ocean = ocean.unwrap();

    chain.set_network("Pacific");
    assert_eq!(poll_network(&ocean, &wallet, &state).await.unwrap(), None);
}

// endregion: --- Network poller

// region:    --- Login

#[tokio::test]
async fn test_login_after_unlock() {
    let chain = Chain::new("Nile", &[]);
    let connector = MockConnector::new(&chain);
    let wallet = MockWallet::present();
    let (ocean, mut state) = settle(&connector, &wallet).await;
    let ocean = ocean.unwrap();
    assert!(!state.is_logged());

    chain.set_accounts(&[(ABC, balance_abc())]);
    let event = login(&ocean, &wallet, &state).await.unwrap().unwrap();
    state.apply(event);

    assert_eq!(wallet.enable_calls.get(), 1);
    assert!(state.is_logged());
    assert_eq!(state.account_id(), ABC);
    assert_eq!(state.balance, balance_abc());
}

#[tokio::test]
async fn test_login_still_locked() {
    let chain = Chain::new("Nile", &[]);
    let connector = MockConnector::new(&chain);
    let wallet = MockWallet::present();
    let (ocean, state) = settle(&connector, &wallet).await;

    let event = login(&ocean.unwrap(), &wallet, &state).await.unwrap();
    assert_eq!(event, None);
}

#[tokio::test]
async fn test_login_denied_is_not_retried() {
    let chain = Chain::new("Nile", &[(ABC, balance_abc())]);
    let connector = MockConnector::new(&chain);
    let wallet = MockWallet::present();
    let (ocean, state) = settle(&connector, &wallet).await;
    let ocean = ocean.unwrap();
    let lists_before = chain.list_calls.get();

    wallet.deny.set(true);
    let err = login(&ocean, &wallet, &state).await.unwrap_err();

    assert!(matches!(err, ConnectionError::Authorization(_)));
    assert_eq!(wallet.enable_calls.get(), 1);
    assert_eq!(chain.list_calls.get(), lists_before);
}

#[tokio::test]
async fn test_login_without_wallet() {
    let chain = Chain::new("Nile", &[]);
    let connector = MockConnector::new(&chain);
    let wallet = MockWallet::absent();
    let (ocean, state) = settle(&connector, &wallet).await;

    let err = login(&ocean.unwrap(), &wallet, &state).await.unwrap_err();
    assert!(matches!(err, ConnectionError::NoWallet(_)));
    assert_eq!(wallet.enable_calls.get(), 0);
}

// endregion: --- Login

// region:    --- Faucet

#[tokio::test]
async fn test_faucet_without_account_sends_nothing() {
    let faucet = MockFaucet::answering(json!({ "success": true }));
    let state = ConnectionState::default();

    let response = request_from_faucet(&faucet, &Config::default(), &state).await.unwrap();

    assert_eq!(response, None);
    assert!(faucet.requests.borrow().is_empty());
}

#[tokio::test]
async fn test_faucet_posts_account() {
    let chain = Chain::new("Nile", &[(ABC, balance_abc())]);
    let connector = MockConnector::new(&chain);
    let wallet = MockWallet::present();
    let (_, state) = settle(&connector, &wallet).await;
    let faucet = MockFaucet::answering(json!({ "success": true, "message": "Funded" }));
    let config = Config::default();

    let response = request_from_faucet(&faucet, &config, &state).await.unwrap();

    assert_eq!(response, Some(json!({ "success": true, "message": "Funded" })));
    let requests = faucet.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, config.faucet_url());
    assert_eq!(requests[0].1, FaucetRequest::commons(ABC));
}

#[tokio::test]
async fn test_faucet_failure_is_returned_once() {
    let chain = Chain::new("Nile", &[(ABC, balance_abc())]);
    let connector = MockConnector::new(&chain);
    let wallet = MockWallet::present();
    let (_, state) = settle(&connector, &wallet).await;
    let faucet = MockFaucet::failing();

    let err = request_from_faucet(&faucet, &Config::default(), &state).await.unwrap_err();

    assert!(matches!(err, ConnectionError::Faucet(_)));
    assert_eq!(faucet.requests.borrow().len(), 1);
}

// endregion: --- Faucet

#[tokio::test]
async fn test_login_flag_tracks_account_through_session() {
    let chain = Chain::new("Nile", &[(ABC, balance_abc())]);
    let connector = MockConnector::new(&chain);
    let wallet = MockWallet::present();
    let (ocean, mut state) = settle(&connector, &wallet).await;
    let ocean = ocean.unwrap();

    let steps: [&[(&str, Balance)]; 4] = [
        &[(DEF, balance_def())],
        &[],
        &[(ABC, balance_abc())],
        &[("", Balance::default())],
    ];

    for accounts in steps {
        chain.set_accounts(accounts);
        if let Some(event) = poll_accounts(&ocean, &wallet, &state).await.unwrap() {
            state.apply(event);
        }
        assert_eq!(state.is_logged(), !state.account_id().is_empty());
    }
}
