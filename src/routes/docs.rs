use axum::extract::State;
use axum::response::Html;
use axum::Json;
use utoipa::openapi::server::Server;
use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::models::page::PageEnvelope;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Repositories API",
        description = "Search public repositories through the GitHub search API"
    ),
    paths(super::repositories::find_many, super::health::health),
    components(schemas(PageEnvelope, ErrorBody)),
    tags(
        (name = "repositories", description = "Repository search"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

pub async fn landing(State(state): State<AppState>) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>API Documentation</title>
</head>
<body>
  <h1>Repositories API</h1>
  <p>Check the <a href="{}/api-docs/">API documentation</a>.</p>
</body>
</html>
"#,
        state.config.public_url()
    ))
}

pub async fn api_docs(State(state): State<AppState>) -> Json<utoipa::openapi::OpenApi> {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![Server::new(state.config.public_url())]);
    Json(doc)
}
