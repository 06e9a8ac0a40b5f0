//! PureVote client workflow controllers.
//!
//! UI-framework-independent state machines behind the PureVote voting
//! client: credential validation, the session lifecycle against an
//! external identity provider, the browser-wallet connection, and the
//! organization join flow. All external collaborators are abstract
//! contracts under [`providers`]; in-memory implementations ship
//! alongside them for tests and offline use.

pub mod app;
pub mod catalog;
pub mod config;
pub mod models;
pub mod providers;
pub mod services;
pub mod utils;

pub use app::{AppContext, Providers};
pub use config::ClientConfig;
