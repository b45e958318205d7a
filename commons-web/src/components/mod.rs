//! UI Components

pub mod error_banner;
pub mod footer;
pub mod header;
pub mod spinner;

pub use error_banner::ErrorBanner;
pub use footer::Footer;
pub use header::Header;
pub use spinner::Spinner;
