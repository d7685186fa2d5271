pub mod error;
pub mod models;
pub mod services;
pub mod validation;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[cfg(test)]
mod tests;

pub use error::service_error::{Result as ServiceResult, ServiceError};
pub use error::{CoreError, Result};
pub use models::auth_session::AuthSession;
pub use models::ids::{CallerId, ProfileId};
pub use models::new_profile::NewProfile;
pub use models::profile_attributes::ProfileAttributes;
pub use models::profile_patch::ProfilePatch;
pub use models::profile_row::ProfileRow;
pub use models::profile_status::ProfileStatus;
pub use models::recovery_tokens::RecoveryTokens;
pub use models::signed_in::SignedIn;
pub use models::storage_scope::StorageScope;
pub use services::identity_service::IdentityService;
pub use services::profile_store::ProfileStore;
