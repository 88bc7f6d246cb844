use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use http::Request;
use http_body_util::BodyExt;
use repo_search_api::config::{AppConfig, Environment};
use repo_search_api::github::{GithubClient, RepositorySearch};
use repo_search_api::models::search::SearchFilter;
use repo_search_api::routes::build_router;
use repo_search_api::state::AppState;
use serde_json::{json, Value};
use tower::ServiceExt;
use url::Url;

/// Serve `router` on an ephemeral port and return the base search URL.
async fn spawn_upstream(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Url::parse(&format!("http://{}/search", addr)).unwrap()
}

/// Fake upstream echoing the query string and user agent back as a single item.
async fn echo_search(
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Json<Value> {
    let user_agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    Json(json!({
        "total_count": 42,
        "incomplete_results": false,
        "items": [{ "params": params, "user_agent": user_agent }],
    }))
}

fn echo_router() -> Router {
    Router::new().route("/search/repositories", get(echo_search))
}

#[tokio::test]
async fn test_client_sends_translated_query() {
    let base = spawn_upstream(echo_router()).await;
    let client = GithubClient::new(base).unwrap();

    let filter = SearchFilter {
        date: Some("2024-01-01".into()),
        language: Some("JavaScript".into()),
        page: 2,
        limit: 30,
        ..SearchFilter::default()
    };
    let result = client.search_repositories(&filter).await.unwrap();

    assert_eq!(result.total_count, 42);
    assert!(!result.incomplete_results);
    let params = &result.items[0]["params"];
    assert_eq!(params["q"], "created:>2024-01-01 language:JavaScript");
    assert_eq!(params["sort"], "stars");
    assert_eq!(params["order"], "desc");
    assert_eq!(params["page"], "2");
    assert_eq!(params["per_page"], "30");
    assert!(result.items[0]["user_agent"]
        .as_str()
        .unwrap()
        .starts_with("repo-search-api/"));
}

#[tokio::test]
async fn test_client_sends_empty_expression_for_empty_filter() {
    let base = spawn_upstream(echo_router()).await;
    let client = GithubClient::new(base).unwrap();

    let result = client
        .search_repositories(&SearchFilter::default())
        .await
        .unwrap();

    let params = &result.items[0]["params"];
    assert_eq!(params["q"], "");
    assert_eq!(params["per_page"], "10");
}

#[tokio::test]
async fn test_client_tolerates_trailing_slash_in_base_url() {
    let base = spawn_upstream(echo_router()).await;
    let base = Url::parse(&format!("{}/", base)).unwrap();
    let client = GithubClient::new(base).unwrap();

    assert!(client.search_repositories(&SearchFilter::default()).await.is_ok());
}

#[tokio::test]
async fn test_client_reports_upstream_status() {
    let router = Router::new().route(
        "/search/repositories",
        get(|| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "message": "Validation Failed" })),
            )
        }),
    );
    let client = GithubClient::new(spawn_upstream(router).await).unwrap();

    let err = client
        .search_repositories(&SearchFilter::default())
        .await
        .unwrap_err();
    assert_eq!(err.status, Some(422));
    assert_eq!(err.to_string(), "Request failed with status code 422");
}

#[tokio::test]
async fn test_client_reports_undecodable_body() {
    let router = Router::new().route("/search/repositories", get(|| async { "not json" }));
    let client = GithubClient::new(spawn_upstream(router).await).unwrap();

    let err = client
        .search_repositories(&SearchFilter::default())
        .await
        .unwrap_err();
    assert_eq!(err.status, None);
    assert!(err.message.starts_with("Invalid upstream response"));
}

#[tokio::test]
async fn test_client_reports_connection_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base = Url::parse(&format!("http://{}/search", addr)).unwrap();
    let client = GithubClient::new(base).unwrap();

    let err = client
        .search_repositories(&SearchFilter::default())
        .await
        .unwrap_err();
    assert_eq!(err.status, None);
    assert!(!err.message.is_empty());
}

#[tokio::test]
async fn test_router_propagates_upstream_status_end_to_end() {
    let router = Router::new().route(
        "/search/repositories",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let base = spawn_upstream(router).await;

    let config = AppConfig {
        environment: Environment::Test,
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origin: http::HeaderValue::from_static("http://localhost:8081"),
        github_api_url: base.clone(),
        log_level: "error".to_string(),
    };
    let client = GithubClient::new(base).unwrap();
    let app = build_router(AppState::new(config, Arc::new(client)));

    let req = Request::builder()
        .uri("/api/v1/repositories?language=Rust")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "Request failed with status code 503");
}
