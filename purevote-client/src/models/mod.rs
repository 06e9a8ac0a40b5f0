pub mod credentials;
pub mod organization;
pub mod profile;
pub mod session;
pub mod wallet;

pub use credentials::SignupForm;
pub use organization::{JoinRequest, JoinStage, MemberRole, OrgKind, Organization, CODE_LENGTH};
pub use profile::{UserProfile, PROVIDER_EMAIL};
pub use session::{AuthPage, AuthStatus, AuthUser, Session, SessionState};
pub use wallet::{WalletConnection, WalletEvent};
