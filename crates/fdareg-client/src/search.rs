//! Shared search envelope and GET helper for openFDA endpoints.
//!
//! Every openFDA endpoint answers `GET ?search=<expr>&limit=<n>` with
//!
//! ```json
//! { "meta": { "results": { "skip": 0, "limit": 100, "total": 734 } },
//!   "results": [ ... ] }
//! ```
//!
//! and with HTTP 404 plus an error body when the search matches nothing.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::OpenFdaError;

/// Records requested per call. No further pages are fetched.
pub const PAGE_LIMIT: u32 = 100;

/// Paging metadata reported by openFDA. Only the match count is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultsMeta {
    #[serde(default)]
    pub total: u64,
}

/// The `meta` block of a search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchMeta {
    #[serde(default)]
    pub results: Option<ResultsMeta>,
}

/// A decoded search response.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct SearchEnvelope<T> {
    #[serde(default)]
    pub meta: Option<SearchMeta>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> SearchEnvelope<T> {
    /// Total matches reported by the registry, if it said.
    pub fn total(&self) -> Option<u64> {
        self.meta
            .as_ref()
            .and_then(|m| m.results.as_ref())
            .map(|r| r.total)
    }

    /// Whether more records matched than were returned.
    pub fn is_truncated(&self) -> bool {
        self.total()
            .is_some_and(|total| total > self.results.len() as u64)
    }
}

/// Join an endpoint path onto the configured base URL.
pub(crate) fn endpoint_url(base_url: &url::Url, path: &str) -> String {
    format!("{}/{path}", base_url.as_str().trim_end_matches('/'))
}

/// Run one search against an openFDA endpoint.
pub(crate) async fn get_search<T: DeserializeOwned>(
    http: &reqwest::Client,
    url: &str,
    endpoint: &str,
    search: &str,
    max_retries: u32,
) -> Result<SearchEnvelope<T>, OpenFdaError> {
    let limit = PAGE_LIMIT.to_string();
    let params = [("search", search), ("limit", limit.as_str())];

    tracing::debug!(endpoint, search, "querying openFDA");

    let resp = crate::retry::retry_send(max_retries, || http.get(url).query(&params).send())
        .await
        .map_err(|e| OpenFdaError::Http {
            endpoint: endpoint.into(),
            source: e,
        })?;

    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        tracing::debug!(endpoint, search, "openFDA reported no matches");
        return Err(OpenFdaError::NotFound {
            endpoint: endpoint.into(),
        });
    }

    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(OpenFdaError::ApiError {
            endpoint: endpoint.into(),
            status,
            body,
        });
    }

    // A body that cannot be read is a transport failure, not a decode one.
    let body = resp.bytes().await.map_err(|e| OpenFdaError::Http {
        endpoint: endpoint.into(),
        source: e,
    })?;
    let envelope: SearchEnvelope<T> =
        serde_json::from_slice(&body).map_err(|e| OpenFdaError::Deserialization {
            endpoint: endpoint.into(),
            source: e,
        })?;

    tracing::debug!(
        endpoint,
        returned = envelope.results.len(),
        total = envelope.total(),
        "openFDA search complete"
    );

    Ok(envelope)
}
