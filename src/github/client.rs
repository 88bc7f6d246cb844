use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use url::Url;

use super::query::query_params;
use super::{RepositorySearch, UpstreamError};
use crate::models::search::{SearchFilter, SearchResponse};

/// Client for the GitHub search API. Built once at startup and shared.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    base_url: Url,
}

impl GithubClient {
    pub fn new(base_url: Url) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = Client::builder()
            .user_agent(concat!("repo-search-api/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn repositories_url(&self) -> String {
        format!(
            "{}/repositories",
            self.base_url.as_str().trim_end_matches('/')
        )
    }
}

#[async_trait]
impl RepositorySearch for GithubClient {
    async fn search_repositories(
        &self,
        filter: &SearchFilter,
    ) -> Result<SearchResponse, UpstreamError> {
        let url = self.repositories_url();

        let response = self
            .client
            .get(&url)
            .query(&query_params(filter))
            .send()
            .await
            .map_err(|e| UpstreamError::new(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, url = %url, "Upstream search failed");
            return Err(UpstreamError::with_status(status.as_u16()));
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| UpstreamError::new(format!("Invalid upstream response: {}", e)))
    }
}
