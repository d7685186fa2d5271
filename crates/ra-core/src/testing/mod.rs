//! In-memory stand-ins for the hosted services.
//!
//! Both fakes record every call so tests can assert on what was (and was not)
//! asked of the backend.

mod fake_identity;
mod fake_profile_store;

pub use fake_identity::{FakeIdentity, IdentityCall, IdentityState};
pub use fake_profile_store::{FakeProfileStore, StoreCall, StoreState};

use crate::{CallerId, ProfileId, ProfileRow};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Deterministic id for fixture `n`
pub fn fixture_id(n: u128) -> ProfileId {
    ProfileId(Uuid::from_u128(n))
}

pub fn fixture_caller(n: u128) -> CallerId {
    CallerId(Uuid::from_u128(n))
}

/// A profile whose `created_at` grows with `n`, so higher numbers sort first
pub fn fixture_row(n: u128, is_blocked: bool) -> ProfileRow {
    let epoch = DateTime::<Utc>::from_timestamp(1_704_067_200, 0).unwrap_or_default();
    ProfileRow {
        id: fixture_id(n),
        email: format!("user{n}@example.com"),
        first_name: Some(format!("First{n}")),
        last_name: Some(format!("Last{n}")),
        created_at: epoch + Duration::days(n as i64),
        last_sign_in: None,
        is_blocked,
    }
}
