use crate::error::{Api, ClientError, Result as ClientResult};

use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Low-level HTTP access to the hosted backend.
///
/// Adds the `apikey` header to every request and turns non-2xx responses into
/// [`ClientError::Api`] with whatever message the backend put in the body.
#[derive(Debug, Clone)]
pub struct BackendClient {
    pub base_url: String,
    anon_key: String,
    client: ReqwestClient,
}

impl BackendClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Project URL (e.g., "https://abc.supabase.co")
    /// * `anon_key` - Public API key sent as `apikey`
    /// * `timeout` - Transport timeout for every request
    pub fn new(base_url: &str, anon_key: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            client,
        })
    }

    /// Absolute URL for a path on the backend
    #[track_caller]
    pub fn url(&self, path: &str) -> ClientResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| ClientError::url(raw, e))
    }

    /// Build a request. Without a bearer token the anon key doubles as one,
    /// which is what the backend expects from signed-out callers.
    pub fn request(&self, method: Method, url: Url, bearer: Option<&str>) -> RequestBuilder {
        let token = bearer.unwrap_or(&self.anon_key);

        self.client
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
    }

    /// Execute a request and decode the JSON body
    pub async fn execute<T: DeserializeOwned>(
        &self,
        api: Api,
        req: RequestBuilder,
    ) -> ClientResult<T> {
        let body = self.send(api, req).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Execute a request whose body (if any) is irrelevant
    pub async fn execute_empty(&self, api: Api, req: RequestBuilder) -> ClientResult<()> {
        self.send(api, req).await.map(|_| ())
    }

    async fn send(&self, api: Api, req: RequestBuilder) -> ClientResult<String> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::api_error(api, status, &body));
        }

        Ok(body)
    }

    /// Pull code and message out of an error body.
    ///
    /// The auth API uses `msg`/`error_description`/`error_code`, the data API
    /// uses `code`/`message`; anything unparseable falls back to the status.
    #[track_caller]
    fn api_error(api: Api, status: StatusCode, body: &str) -> ClientError {
        let parsed: Value = serde_json::from_str(body).unwrap_or(Value::Null);

        let field = |names: &[&str]| {
            names.iter().find_map(|name| match parsed.get(*name) {
                Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
                Some(Value::Number(n)) => Some(n.to_string()),
                _ => None,
            })
        };

        let code = field(&["error_code", "code", "error"])
            .unwrap_or_else(|| status.as_u16().to_string());

        let message = field(&["msg", "message", "error_description", "error"])
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty() && parsed.is_null()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });

        ClientError::api_error(api, status.as_u16(), code, message)
    }
}
