mod auth_session;
mod ids;
mod profile_row;
mod profile_status;
mod recovery_tokens;
