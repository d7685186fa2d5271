//! HTTP implementations of the identity and profile services.
//!
//! Speaks the GoTrue auth API under `/auth/v1` and the PostgREST data API
//! under `/rest/v1`, both behind one project URL and `apikey`.

pub(crate) mod backend;
pub(crate) mod backend_client;
pub(crate) mod error;
pub(crate) mod identity_client;
pub(crate) mod profile_client;
pub(crate) mod recovery_link;
pub(crate) mod session_handle;
pub(crate) mod session_store;
pub(crate) mod wire;

#[cfg(test)]
mod tests;

pub use backend::Backend;
pub use backend_client::BackendClient;
pub use error::{Api, ClientError, Result as ClientResult};
pub use identity_client::IdentityClient;
pub use profile_client::ProfileClient;
pub use recovery_link::parse_recovery_link;
pub use session_handle::SessionHandle;
pub use session_store::SessionStore;

const AUTH_PREFIX: &str = "/auth/v1";
const REST_PREFIX: &str = "/rest/v1";
const PROFILES_TABLE: &str = "profiles";
