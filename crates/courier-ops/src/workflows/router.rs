use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use tracing::debug;

use super::rating::{Driver, DriverRatingView};
use super::report::{report_lines, Customer, ReportLine};
use super::roster::{DriverRoster, RatedDriverView};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct RosterRequest {
    pub csv: String,
}

#[derive(Debug, Serialize)]
pub struct RosterResponse {
    pub drivers: Vec<RatedDriverView>,
}

#[derive(Debug, Serialize)]
pub struct ReportLinesResponse {
    pub lines: Vec<ReportLine>,
}

/// Router builder exposing the rating and report-line endpoints.
pub fn courier_router() -> Router {
    Router::new()
        .route("/api/v1/drivers/rating", post(rating_handler))
        .route("/api/v1/drivers/roster", post(roster_handler))
        .route("/api/v1/customers/report-lines", post(report_lines_handler))
}

pub(crate) async fn rating_handler(Json(driver): Json<Driver>) -> Json<DriverRatingView> {
    let view = DriverRatingView::from(&driver);
    debug!(
        late_deliveries = view.late_deliveries,
        rating = view.rating,
        "driver rated"
    );
    Json(view)
}

pub(crate) async fn roster_handler(
    Json(payload): Json<RosterRequest>,
) -> Result<Json<RosterResponse>, AppError> {
    let reader = Cursor::new(payload.csv.into_bytes());
    let drivers = DriverRoster::from_reader(reader)?
        .iter()
        .map(|entry| entry.view())
        .collect();
    Ok(Json(RosterResponse { drivers }))
}

pub(crate) async fn report_lines_handler(
    Json(customer): Json<Customer>,
) -> Json<ReportLinesResponse> {
    debug!(customer = %customer.name, "building report lines");
    Json(ReportLinesResponse {
        lines: report_lines(&customer),
    })
}
