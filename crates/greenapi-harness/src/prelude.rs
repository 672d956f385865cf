//! Commonly used imports and re-exports.
pub use crate::api::journals::*;
pub use crate::api::sending::*;
pub use crate::api::types::*;
pub use crate::client::net::ConnectionPool;
pub use crate::client::{Gateway, build_url};
pub use crate::config::GatewayConfig;
pub use crate::error::*;
pub use crate::gateway_api_method;
pub use crate::harness::*;
