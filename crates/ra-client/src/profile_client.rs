use crate::error::{Api, Result as ClientResult};
use crate::{BackendClient, PROFILES_TABLE, REST_PREFIX, SessionHandle};

use ra_core::{
    NewProfile, ProfileId, ProfilePatch, ProfileRow, ProfileStore, ServiceResult,
};

use async_trait::async_trait;
use log::debug;
use reqwest::{Method, RequestBuilder, Url};
use serde::Deserialize;

/// `select=is_blocked` projection
#[derive(Debug, Deserialize)]
struct BlockedFlag {
    #[serde(default)]
    is_blocked: Option<bool>,
}

/// Profile table access over the PostgREST data API.
///
/// Requests run as the signed-in caller so the table's row-level policies
/// apply; without a session they run with the anon key.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    backend: BackendClient,
    session: SessionHandle,
}

impl ProfileClient {
    pub fn new(backend: BackendClient, session: SessionHandle) -> Self {
        Self { backend, session }
    }

    fn table_url(&self) -> ClientResult<Url> {
        self.backend
            .url(&format!("{REST_PREFIX}/{PROFILES_TABLE}"))
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let token = self.session.access_token();
        self.backend.request(method, url, token.as_deref())
    }

    async fn fetch_rows(&self, url: Url) -> ServiceResult<Vec<ProfileRow>> {
        let req = self.request(Method::GET, url);
        self.backend
            .execute(Api::Data, req)
            .await
            .map_err(|e| e.into_service(Api::Data))
    }
}

/// `in.(a,b,c)` filter value
pub(crate) fn id_list(ids: &[ProfileId]) -> String {
    let joined = ids
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("in.({joined})")
}

#[async_trait]
impl ProfileStore for ProfileClient {
    async fn select_all(&self) -> ServiceResult<Vec<ProfileRow>> {
        let mut url = self.table_url().map_err(|e| e.into_service(Api::Data))?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("order", "created_at.desc");

        let rows = self.fetch_rows(url).await?;
        debug!("Fetched {} profiles", rows.len());
        Ok(rows)
    }

    async fn select_one(&self, id: ProfileId) -> ServiceResult<Option<ProfileRow>> {
        let mut url = self.table_url().map_err(|e| e.into_service(Api::Data))?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("id", &format!("eq.{id}"))
            .append_pair("limit", "1");

        let rows = self.fetch_rows(url).await?;
        Ok(rows.into_iter().next())
    }

    async fn select_blocked(&self, id: ProfileId) -> ServiceResult<Option<bool>> {
        let mut url = self.table_url().map_err(|e| e.into_service(Api::Data))?;
        url.query_pairs_mut()
            .append_pair("select", "is_blocked")
            .append_pair("id", &format!("eq.{id}"))
            .append_pair("limit", "1");

        let req = self.request(Method::GET, url);
        let flags: Vec<BlockedFlag> = self
            .backend
            .execute(Api::Data, req)
            .await
            .map_err(|e| e.into_service(Api::Data))?;

        Ok(flags
            .into_iter()
            .next()
            .map(|flag| flag.is_blocked.unwrap_or(false)))
    }

    async fn insert(&self, profile: &NewProfile) -> ServiceResult<()> {
        let url = self.table_url().map_err(|e| e.into_service(Api::Data))?;
        let req = self
            .request(Method::POST, url)
            .header("Prefer", "return=minimal")
            .json(&[profile]);

        self.backend
            .execute_empty(Api::Data, req)
            .await
            .map_err(|e| e.into_service(Api::Data))?;

        debug!("Inserted profile {}", profile.id);
        Ok(())
    }

    async fn update_where_id_in(&self, ids: &[ProfileId], patch: &ProfilePatch) -> ServiceResult<()> {
        if ids.is_empty() || patch.is_empty() {
            return Ok(());
        }

        let mut url = self.table_url().map_err(|e| e.into_service(Api::Data))?;
        url.query_pairs_mut().append_pair("id", &id_list(ids));

        let req = self
            .request(Method::PATCH, url)
            .header("Prefer", "return=minimal")
            .json(patch);

        self.backend
            .execute_empty(Api::Data, req)
            .await
            .map_err(|e| e.into_service(Api::Data))?;

        debug!("Patched {} profiles", ids.len());
        Ok(())
    }
}
