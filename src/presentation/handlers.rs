// HTTP request handlers
use crate::domain::dashboard::SelectorOptions;
use crate::domain::selection::{year_selector_enabled, ReportType, Selection, SelectionError};
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

const INDEX_HTML: &str = include_str!("index.html");

#[derive(Debug, Deserialize)]
pub struct SelectionQuery {
    pub report: Option<String>,
    pub year: Option<String>,
}

impl SelectionQuery {
    fn report_type(&self) -> Result<Option<ReportType>, SelectionError> {
        match self.report.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }

    /// An empty `year=` means no year chosen.
    fn year(&self) -> Result<Option<i32>, SelectionError> {
        match self.year.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| SelectionError::InvalidYear(raw.to_string())),
        }
    }

    fn selection(&self) -> Result<Selection, SelectionError> {
        Ok(Selection::new(self.report_type()?, self.year()?))
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected request: {}", self);
        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

#[derive(Serialize)]
pub struct YearSelectorResponse {
    pub enabled: bool,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Dashboard page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Dropdown contents
pub async fn options(State(state): State<Arc<AppState>>) -> Json<SelectorOptions> {
    Json(state.dashboard_service.options())
}

/// Whether the year dropdown is usable for the chosen report type
pub async fn year_selector(
    Query(query): Query<SelectionQuery>,
) -> Result<Json<YearSelectorResponse>, ApiError> {
    let enabled = year_selector_enabled(query.report_type()?);
    Ok(Json(YearSelectorResponse { enabled }))
}

/// Recompute the charts for the selection in the query string
pub async fn dashboard(
    Query(query): Query<SelectionQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let selection = query.selection()?;
    let view = state.dashboard_service.render(&selection);

    Ok(
        match json_response(StatusCode::OK, &view, accepts_brotli(&headers)).await {
            Ok(response) => response,
            Err(status) => status.into_response(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use crate::infrastructure::csv_repository::{read_dataset, CsvSalesRepository};
    use crate::presentation::router;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use serde_json::Value;
    use tower::ServiceExt;

    const SAMPLE: &str = "\
Year,Month,Automobile_Sales,Vehicle_Type,Advertising_Expenditure,Unemployment_Rate,Recession
2008,Jan,100,SUV,10,5.0,1
2008,Feb,200,SUV,20,5.0,0
2009,Mar,50,Sports,5,9.1,1
";

    fn app() -> axum::Router {
        let repository = CsvSalesRepository::from_dataset(read_dataset(SAMPLE.as_bytes()).unwrap());
        let state = Arc::new(AppState {
            dashboard_service: DashboardService::new(Arc::new(repository), 1980..=2023),
        });
        router(state)
    }

    async fn get(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_and_index() {
        let response = app()
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("select-year"));
    }

    #[tokio::test]
    async fn test_options() {
        let (status, body) = get("/api/options").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["report_types"][1]["label"], "Recession Period Statistics");
        assert_eq!(body["years"].as_array().unwrap().len(), 44);
    }

    #[tokio::test]
    async fn test_year_selector() {
        let (_, body) = get("/api/year-selector?report=Yearly%20Statistics").await;
        assert_eq!(body["enabled"], true);

        let (_, body) = get("/api/year-selector?report=recession").await;
        assert_eq!(body["enabled"], false);

        let (_, body) = get("/api/year-selector").await;
        assert_eq!(body["enabled"], false);
    }

    #[tokio::test]
    async fn test_dashboard_recession() {
        let (status, body) = get("/api/dashboard?report=recession").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"], "recession_selected");

        let rows = body["grid"]["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 2);

        let by_type = &rows[0][1];
        assert_eq!(by_type["kind"], "bar");
        assert_eq!(
            by_type["table"]["rows"],
            serde_json::json!([
                { "key": "SUV", "value": 100.0 },
                { "key": "Sports", "value": 50.0 }
            ])
        );
    }

    #[tokio::test]
    async fn test_dashboard_yearly_without_year_is_empty() {
        let (status, body) = get("/api/dashboard?report=yearly").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"], "yearly_no_year");
        assert_eq!(body["year_selector_enabled"], true);
        assert!(body["grid"]["rows"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dashboard_yearly() {
        let (_, body) = get("/api/dashboard?report=yearly&year=2008").await;
        assert_eq!(body["state"]["yearly_with_year"], 2008);
        assert_eq!(
            body["grid"]["rows"][0][1]["title"],
            "Total Monthly Automobile Sales in 2008"
        );
        assert_eq!(
            body["grid"]["rows"][0][1]["table"]["rows"],
            serde_json::json!([
                { "key": "Jan", "value": 100.0 },
                { "key": "Feb", "value": 200.0 }
            ])
        );
    }

    #[tokio::test]
    async fn test_retained_year_redraws_after_switching_back() {
        // Yearly 2008, then recession with the year still chosen, then yearly again.
        let (_, body) = get("/api/dashboard?report=recession&year=2008").await;
        assert_eq!(body["state"], "recession_selected");
        assert_eq!(body["year_selector_enabled"], false);

        let (_, body) = get("/api/dashboard?report=yearly&year=2008").await;
        assert_eq!(body["state"]["yearly_with_year"], 2008);
        assert_eq!(body["grid"]["rows"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_page_sends_retained_year() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("if (year.value) params.set('year', year.value);"));
        assert!(!page.contains("!year.disabled && year.value"));
    }

    #[tokio::test]
    async fn test_empty_year_means_no_year() {
        let (status, body) = get("/api/dashboard?report=yearly&year=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"], "yearly_no_year");
        assert!(body["grid"]["rows"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_year() {
        let (status, body) = get("/api/dashboard?report=yearly&year=twenty").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid year 'twenty'");
    }

    #[tokio::test]
    async fn test_unknown_report_type() {
        let (status, body) = get("/api/dashboard?report=weekly").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "unknown report type 'weekly'");
    }

    #[tokio::test]
    async fn test_dashboard_brotli() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/dashboard?report=recession")
                    .header(header::ACCEPT_ENCODING, "br")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_ENCODING], "br");
    }
}
