use crate::error::SourceError;
use model::records::page::PageResponse;
use std::time::Duration;
use tracing::debug;

/// Sort order sent with every page request. Paging is only stable when the
/// source orders records identically across requests, so the sort key must
/// be unique (`id` is its own tie-breaker).
const SORT_ORDER: &str = "id";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin wrapper around `reqwest::Client` for the records endpoint.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(ApiClient {
            client,
            base_url: base_url.into(),
            api_token: api_token.into(),
        })
    }

    /// Issues one bounded page request and decodes the response body.
    pub async fn get_page(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<PageResponse, SourceError> {
        let url = format!("{}/records", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .query(&[
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
                ("sort", SORT_ORDER.to_string()),
                ("api_key", self.api_token.clone()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let reason = response.text().await.unwrap_or_default();
            return Err(SourceError::Fetch {
                status: status.as_u16(),
                reason,
            });
        }

        let body = response.text().await?;
        let page: PageResponse = serde_json::from_str(&body)?;
        debug!(offset, limit, count = page.count, "Fetched page from source");
        Ok(page)
    }
}
