//! Abstract contracts for the external collaborators the client talks to,
//! with in-crate implementations for tests and offline use.

pub mod document;
pub mod identity;
pub mod membership;
pub mod rest;
pub mod wallet;

pub use document::{DocumentStore, MemoryDocumentStore, StoreError};
pub use identity::{AuthStateReceiver, IdentityError, IdentityProvider, MockIdentityProvider};
pub use membership::{MembershipError, MembershipVerifier, StubMembershipVerifier};
pub use rest::{RestIdentityProvider, RestIdentitySettings};
pub use wallet::{MockWalletProvider, WalletError, WalletProvider, CHAIN_NOT_ADDED};
