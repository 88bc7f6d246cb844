use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::IntoParams;

use crate::error::AppError;

/// A repository as returned by the upstream search. Passed through untouched.
pub type RepositorySummary = Value;

/// Query string exactly as the caller sent it.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Only repositories created after this date
    #[param(example = "2024-01-01")]
    pub date: Option<String>,

    /// Primary language
    #[param(example = "Rust")]
    pub language: Option<String>,

    /// Sort field (default: stars)
    #[param(example = "stars")]
    pub sort: Option<String>,

    /// asc or desc (default: desc)
    #[param(example = "desc")]
    pub order: Option<String>,

    /// Page number, starting at 1
    #[param(value_type = Option<u32>, minimum = 1, example = 1)]
    pub page: Option<String>,

    /// Results per page (default: 10)
    #[param(value_type = Option<u32>, minimum = 1, example = 10)]
    pub limit: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    pub date: Option<String>,
    pub language: Option<String>,
    pub sort: String,
    pub order: SortOrder,
    pub page: u32,
    pub limit: u32,
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            date: None,
            language: None,
            sort: "stars".into(),
            order: SortOrder::Desc,
            page: 1,
            limit: 10,
        }
    }
}

impl TryFrom<SearchParams> for SearchFilter {
    type Error = AppError;

    fn try_from(params: SearchParams) -> Result<Self, Self::Error> {
        let defaults = SearchFilter::default();

        let order = match present(params.order) {
            None => defaults.order,
            Some(v) if v.eq_ignore_ascii_case("asc") => SortOrder::Asc,
            Some(v) if v.eq_ignore_ascii_case("desc") => SortOrder::Desc,
            Some(v) => {
                return Err(AppError::BadRequest(format!(
                    "order must be asc or desc (got {:?})",
                    v
                )))
            }
        };

        Ok(Self {
            date: present(params.date),
            language: present(params.language),
            sort: present(params.sort).unwrap_or(defaults.sort),
            order,
            page: parse_positive("page", params.page, defaults.page)?,
            limit: parse_positive("limit", params.limit, defaults.limit)?,
        })
    }
}

/// Upstream response body of the repository search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default)]
    pub items: Vec<RepositorySummary>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_positive(name: &str, raw: Option<String>, default: u32) -> Result<u32, AppError> {
    let Some(raw) = present(raw) else {
        return Ok(default);
    };

    match raw.trim().parse::<u32>() {
        Ok(0) => Err(AppError::BadRequest(format!(
            "{} must be greater than zero",
            name
        ))),
        Ok(n) => Ok(n),
        Err(_) => Err(AppError::BadRequest(format!(
            "{} must be a positive integer (got {:?})",
            name, raw
        ))),
    }
}
