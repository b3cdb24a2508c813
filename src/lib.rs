pub mod config;
pub mod error;
pub mod logging;
pub mod module;
pub mod service;

pub use config::AppConfig;
pub use error::RequestError;
