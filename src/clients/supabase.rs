use anyhow::{Context, anyhow};
use reqwest::{
    Client, Url,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue},
};
use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::{debug, info};

use crate::clients::base::TableClient;
use crate::models::{Credentials, SelectQuery};

const REST_PATH: &str = "rest/v1/";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// PostgREST client for a Supabase project.
pub struct SupabaseClient {
    http: Client,
    rest_url: Url,
}

impl SupabaseClient {
    /// Binds a client to the project in `creds`.
    ///
    /// Fails when the endpoint is not an absolute URL or the key cannot be
    /// sent as a header value.
    pub fn new(creds: &Credentials) -> anyhow::Result<Self> {
        let rest_url = rest_url(&creds.endpoint)?;

        let key = creds.api_key.expose_secret();
        let mut api_key_val =
            HeaderValue::from_str(key).context("API key is not a valid header value")?;
        api_key_val.set_sensitive(true);
        let mut bearer_val = HeaderValue::from_str(&format!("Bearer {}", key))
            .context("API key is not a valid header value")?;
        bearer_val.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", api_key_val);
        headers.insert(AUTHORIZATION, bearer_val);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .build()
            .context("failed to build HTTP client")?;

        debug!(rest_url = rest_url.as_str(), "Supabase client ready");

        Ok(Self { http, rest_url })
    }

    pub fn table_url(&self, table: &str) -> anyhow::Result<Url> {
        self.rest_url
            .join(table)
            .with_context(|| format!("invalid table name '{}'", table))
    }
}

impl TableClient for SupabaseClient {
    async fn select(&self, query: &SelectQuery) -> anyhow::Result<Value> {
        let url = self.table_url(&query.table)?;

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("request to table '{}' failed", query.table))?;

        let status = response.status();
        info!(
            table = query.table.as_str(),
            status_code = status.as_u16(),
            "Select request completed"
        );

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("HTTP {}: {}", status, body.trim()));
        }

        response
            .json::<Value>()
            .await
            .context("response body was not valid JSON")
    }
}

fn rest_url(endpoint: &str) -> anyhow::Result<Url> {
    let base = Url::parse(endpoint.trim())
        .with_context(|| format!("invalid Supabase URL '{}'", endpoint))?;
    if base.cannot_be_a_base() {
        return Err(anyhow!("invalid Supabase URL '{}'", endpoint));
    }

    // Url::join drops the last path segment unless it ends in '/'.
    let mut base = base;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(REST_PATH)
        .with_context(|| format!("invalid Supabase URL '{}'", endpoint))
}
