//! Page modules

pub mod about;
pub mod faucet;
pub mod home;

pub use about::AboutPage;
pub use faucet::FaucetPage;
pub use home::HomePage;
