use crate::{NewProfile, ProfileId, ProfilePatch, ProfileRow, ServiceResult};

use async_trait::async_trait;

/// The `profiles` table in the hosted data store
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Every profile, newest `created_at` first
    async fn select_all(&self) -> ServiceResult<Vec<ProfileRow>>;

    /// One profile by id; `Ok(None)` when no such row exists
    async fn select_one(&self, id: ProfileId) -> ServiceResult<Option<ProfileRow>>;

    /// Only the `is_blocked` column of one profile. `Ok(None)` when no such
    /// row exists; a null flag reads as not blocked.
    async fn select_blocked(&self, id: ProfileId) -> ServiceResult<Option<bool>>;

    async fn insert(&self, row: &NewProfile) -> ServiceResult<()>;

    /// Apply `patch` to every row whose id is in `ids`, in one request
    async fn update_where_id_in(&self, ids: &[ProfileId], patch: &ProfilePatch)
    -> ServiceResult<()>;
}
