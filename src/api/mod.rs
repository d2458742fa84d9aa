pub mod endpoints;
pub mod error;
pub mod gateway;
pub mod wire;

pub use error::{ApiError, ErrorCode};
pub use gateway::{Gateway, HttpGateway};
