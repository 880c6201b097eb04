pub mod message;
pub mod event;
pub mod config;
pub mod error;


pub use error::GatewayError;
pub type Result<T> = std::result::Result<T, GatewayError>;
