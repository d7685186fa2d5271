pub mod auth_session;
pub mod ids;
pub mod new_profile;
pub mod profile_attributes;
pub mod profile_patch;
pub mod profile_row;
pub mod profile_status;
pub mod recovery_tokens;
pub mod signed_in;
pub mod storage_scope;
