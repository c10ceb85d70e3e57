pub mod config;
pub mod error;
pub mod logger;

// Re-export commonly used types
pub use config::{AppConfig, DEFAULT_UPSTREAM_URL, UPSTREAM_URL_ENV};
pub use error::BandsyncError;
pub type Result<T> = std::result::Result<T, BandsyncError>;
