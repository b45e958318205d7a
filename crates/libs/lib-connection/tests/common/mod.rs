//! In-memory wallet, SDK and faucet used by the integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use lib_connection::error::{ConnectionError, Result};
use lib_connection::faucet::FaucetClient;
use lib_connection::sdk::{Account, Connect, Ocean, ProviderSource, Wallet};
use serde_json::Value;
use shared::{Balance, FaucetRequest};

pub struct MockWallet {
    pub present: Cell<bool>,
    pub can_authorize: Cell<bool>,
    pub deny: Cell<bool>,
    pub enable_calls: Cell<usize>,
}

impl MockWallet {
    pub fn present() -> Self {
        Self {
            present: Cell::new(true),
            can_authorize: Cell::new(true),
            deny: Cell::new(false),
            enable_calls: Cell::new(0),
        }
    }

    pub fn absent() -> Self {
        let wallet = Self::present();
        wallet.present.set(false);
        wallet.can_authorize.set(false);
        wallet
    }
}

#[async_trait(?Send)]
impl Wallet for MockWallet {
    fn is_present(&self) -> bool {
        self.present.get()
    }

    fn can_authorize(&self) -> bool {
        self.can_authorize.get()
    }

    async fn enable(&self) -> Result<()> {
        self.enable_calls.set(self.enable_calls.get() + 1);
        if self.deny.get() {
            return Err(ConnectionError::Authorization("User denied account access".to_string()));
        }
        Ok(())
    }
}

/// Chain state seen through the SDK; tests mutate it between ticks.
#[derive(Default)]
pub struct Chain {
    pub accounts: RefCell<Vec<(String, Balance)>>,
    pub network: RefCell<String>,
    pub fail_calls: Cell<bool>,
    pub list_calls: Cell<usize>,
    pub balance_calls: Cell<usize>,
}

impl Chain {
    pub fn new(network: &str, accounts: &[(&str, Balance)]) -> Rc<Self> {
        let chain = Chain::default();
        *chain.network.borrow_mut() = network.to_string();
        *chain.accounts.borrow_mut() = accounts
            .iter()
            .map(|(id, balance)| (id.to_string(), *balance))
            .collect();
        Rc::new(chain)
    }

    pub fn set_accounts(&self, accounts: &[(&str, Balance)]) {
        *self.accounts.borrow_mut() = accounts
            .iter()
            .map(|(id, balance)| (id.to_string(), *balance))
            .collect();
    }

    pub fn set_network(&self, network: &str) {
        *self.network.borrow_mut() = network.to_string();
    }

    fn check(&self) -> Result<()> {
        if self.fail_calls.get() {
            return Err(ConnectionError::Sdk("keeper unreachable".to_string()));
        }
        Ok(())
    }
}

pub struct MockAccount {
    id: String,
    balance: Balance,
    chain: Rc<Chain>,
}

#[async_trait(?Send)]
impl Account for MockAccount {
    fn id(&self) -> String {
        self.id.clone()
    }

    async fn balance(&self) -> Result<Balance> {
        self.chain.balance_calls.set(self.chain.balance_calls.get() + 1);
        self.chain.check()?;
        Ok(self.balance)
    }
}

#[derive(Clone)]
pub struct MockOcean {
    pub chain: Rc<Chain>,
}

#[async_trait(?Send)]
impl Ocean for MockOcean {
    type Account = MockAccount;

    async fn list_accounts(&self) -> Result<Vec<MockAccount>> {
        self.chain.list_calls.set(self.chain.list_calls.get() + 1);
        self.chain.check()?;
        Ok(self
            .chain
            .accounts
            .borrow()
            .iter()
            .map(|(id, balance)| MockAccount {
                id: id.clone(),
                balance: *balance,
                chain: Rc::clone(&self.chain),
            })
            .collect())
    }

    async fn network_name(&self) -> Result<String> {
        self.chain.check()?;
        Ok(self.chain.network.borrow().clone())
    }
}

pub struct MockConnector {
    pub chain: Rc<Chain>,
    pub fail: bool,
    pub sources: RefCell<Vec<ProviderSource>>,
}

impl MockConnector {
    pub fn new(chain: &Rc<Chain>) -> Self {
        Self {
            chain: Rc::clone(chain),
            fail: false,
            sources: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(chain: &Rc<Chain>) -> Self {
        Self {
            fail: true,
            ..Self::new(chain)
        }
    }
}

#[async_trait(?Send)]
impl Connect for MockConnector {
    type Ocean = MockOcean;

    async fn connect(&self, source: &ProviderSource) -> Result<MockOcean> {
        self.sources.borrow_mut().push(source.clone());
        if self.fail {
            return Err(ConnectionError::Provider("Ocean.getInstance rejected".to_string()));
        }
        Ok(MockOcean {
            chain: Rc::clone(&self.chain),
        })
    }
}

pub struct MockFaucet {
    pub requests: RefCell<Vec<(String, FaucetRequest)>>,
    pub response: Result<Value>,
}

impl MockFaucet {
    pub fn answering(response: Value) -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            response: Ok(response),
        }
    }

    pub fn failing() -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            response: Err(ConnectionError::Faucet("connection refused".to_string())),
        }
    }
}

#[async_trait(?Send)]
impl FaucetClient for MockFaucet {
    async fn post_json(&self, url: &str, body: &FaucetRequest) -> Result<Value> {
        self.requests.borrow_mut().push((url.to_string(), body.clone()));
        self.response.clone()
    }
}
