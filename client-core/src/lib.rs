//! client-core: Shared infrastructure for PureVote client crates.
pub mod config;
pub mod error;
pub mod observability;

pub use async_trait;
pub use serde;
pub use serde_json;
pub use tracing;
