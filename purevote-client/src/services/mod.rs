//! Workflow controllers. Each owns one piece of client state and talks to
//! its external collaborator through the `providers` contracts.

pub mod join;
pub mod preferences;
pub mod session;
pub mod wallet;

pub use join::JoinWorkflow;
pub use preferences::{Theme, ThemeStore};
pub use session::{AuthBackend, SessionController};
pub use wallet::WalletManager;
