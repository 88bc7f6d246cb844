//! Upstream repository search.
//!
//! The serving context holds a [`RepositorySearch`] trait object so the HTTP
//! layer never depends on the concrete client.

use async_trait::async_trait;

use crate::models::search::{SearchFilter, SearchResponse};

pub mod client;
pub mod query;

pub use client::GithubClient;

/// Failure of the outbound search call.
///
/// `status` is set when the upstream answered with a non-success status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct UpstreamError {
    pub status: Option<u16>,
    pub message: String,
}

impl UpstreamError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub fn with_status(status: u16) -> Self {
        Self {
            status: Some(status),
            message: format!("Request failed with status code {}", status),
        }
    }
}

#[async_trait]
pub trait RepositorySearch: Send + Sync {
    async fn search_repositories(
        &self,
        filter: &SearchFilter,
    ) -> Result<SearchResponse, UpstreamError>;
}
