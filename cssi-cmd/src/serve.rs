//! HTTP listener for the built dashboard and its JSON API.
//!
//! The wasm bundle is served as static files with `index.html` as the
//! fallback, so every client-side path (including unknown ones, which render
//! the not-found panel) loads the app.

use crate::report::load_dataset;
use axum::extract::{Path as UrlPath, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use cssi_core::Dataset;
use cssi_view::control::ControlDescriptor;
use cssi_view::panel::{NavEntry, NAVIGATION};
use cssi_view::{build_chart, ChartId, ChartSpec, ControlId, Panel, Selection, ViewError};
use log::{info, warn};
use serde::Deserialize;
use serde_json::json;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8888;

#[derive(Clone)]
struct ServerState {
    dataset: Dataset,
}

#[derive(Debug, Deserialize)]
struct PanelParams {
    path: Option<String>,
}

/// Error body for rejected API requests.
#[derive(Debug)]
struct ApiError(ViewError);

impl From<ViewError> for ApiError {
    fn from(e: ViewError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            ViewError::UnknownChart(_) | ViewError::UnknownControl(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };
        warn!("[CSSI] API request rejected: {}", self.0);
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// Build the router. Static files are served from `dist` when given.
pub fn router(dataset: Dataset, dist: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/api/navigation", get(navigation_handler))
        .route("/api/panels", get(panel_handler))
        .route("/api/controls/:control", get(control_handler))
        .route("/api/charts/:chart", get(chart_handler))
        .with_state(ServerState { dataset });

    match dist {
        Some(dist) => api.fallback_service(
            ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html"))),
        ),
        None => api,
    }
}

async fn navigation_handler() -> Json<&'static [NavEntry]> {
    Json(&NAVIGATION)
}

async fn panel_handler(Query(params): Query<PanelParams>) -> Json<Panel> {
    let path = params.path.as_deref().unwrap_or("/");
    info!("[CSSI] GET panel {}", path);
    Json(Panel::for_path(path))
}

async fn control_handler(
    State(state): State<ServerState>,
    UrlPath(control): UrlPath<String>,
) -> Result<Json<ControlDescriptor>, ApiError> {
    info!("[CSSI] GET control {}", control);
    let control = ControlId::parse_id(&control)?;
    Ok(Json(control.describe(&state.dataset)))
}

async fn chart_handler(
    State(state): State<ServerState>,
    UrlPath(chart): UrlPath<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ChartSpec>, ApiError> {
    info!("[CSSI] GET chart {} {:?}", chart, pairs);
    let chart = ChartId::parse_id(&chart)?;
    let selection = Selection::from_pairs(chart, &pairs, &state.dataset)?;
    Ok(Json(build_chart(chart, &selection, &state.dataset)))
}

pub async fn run_serve(
    dataset: Option<&Path>,
    dist: &Path,
    host: &str,
    port: u16,
) -> anyhow::Result<()> {
    let dataset = load_dataset(dataset)?;
    info!("[CSSI] Loaded {} countries", dataset.row_count());

    let dist = if dist.join("index.html").is_file() {
        Some(dist)
    } else {
        warn!(
            "[CSSI] No index.html under {}; serving the API only (build the dashboard with `dx build --release`)",
            dist.display()
        );
        None
    };

    let app = router(dataset, dist);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("[CSSI] Dashboard listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = router(Dataset::embedded().unwrap(), None);
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn navigation_lists_three_panels() {
        let (status, body) = get_json("/api/navigation").await;
        assert_eq!(status, StatusCode::OK);
        let hrefs: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["href"].as_str().unwrap())
            .collect();
        assert_eq!(hrefs, vec!["/", "/sustainability", "/covidsustainability"]);
    }

    #[tokio::test]
    async fn unknown_panel_path_is_not_found_panel() {
        let (status, body) = get_json("/api/panels?path=/nope").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "404: Not found");
        assert!(body["message"].as_str().unwrap().contains("/nope"));
    }

    #[tokio::test]
    async fn default_covid_bar() {
        let (status, body) = get_json("/api/charts/covid-bar").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kind"], "bar");
        assert_eq!(body["y"], "Cases");
    }

    #[tokio::test]
    async fn compare_countries_from_repeated_params() {
        let (status, body) = get_json(
            "/api/charts/country-compare-bar?compare-countries=Chile&compare-countries=Peru&compare-metric=Deaths",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["x"], json!(["Chile", "Peru"]));
        let countries: Vec<&str> = body["points"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["x"].as_str().unwrap())
            .collect();
        // Table order, not selection order
        assert_eq!(countries, vec!["Peru", "Chile"]);
    }

    #[tokio::test]
    async fn control_descriptor_has_default() {
        let (status, body) = get_json("/api/controls/ssi-y").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["default"], "Safe Sanitation");
        assert_eq!(body["multi"], false);
    }

    #[tokio::test]
    async fn unknown_chart_is_404() {
        let (status, body) = get_json("/api/charts/pie").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("pie"));
    }

    #[tokio::test]
    async fn panel_paths_load_the_app_shell() {
        let dist = tempfile::tempdir().unwrap();
        std::fs::write(dist.path().join("index.html"), "<div id=\"main\"></div>").unwrap();

        for path in ["/", "/sustainability", "/covidsustainability", "/xyz"] {
            let app = router(Dataset::embedded().unwrap(), Some(dist.path()));
            let response = app
                .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{path}");
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            assert!(String::from_utf8_lossy(&bytes).contains("id=\"main\""), "{path}");
        }
    }

    #[tokio::test]
    async fn api_routes_take_precedence_over_static_files() {
        let dist = tempfile::tempdir().unwrap();
        std::fs::write(dist.path().join("index.html"), "<html></html>").unwrap();
        let app = router(Dataset::embedded().unwrap(), Some(dist.path()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/charts/pie")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn invalid_option_is_400() {
        let (status, _) = get_json("/api/charts/ssi-scatter?ssi-x=Cases").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn control_not_feeding_chart_is_400() {
        let (status, _) = get_json("/api/charts/covid-bar?ssi-x=GDP").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
