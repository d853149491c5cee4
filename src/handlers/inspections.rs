use axum::{
    extract::{Form, Path, Query, State},
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dates::format_display_date;
use crate::errors::ServiceError;
use crate::models::{InspectionRecord, NewInspection};
use crate::query::{self, SortBy};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub sort_by: Option<String>,
    pub filter_unit_no: Option<String>,
}

/// One record in the list payload, with its display-formatted date.
#[derive(Debug, Serialize)]
pub struct ListedInspection {
    #[serde(flatten)]
    pub record: InspectionRecord,
    pub date_display: String,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub inspections: Vec<ListedInspection>,
    /// Current ISO date, for default-filling a creation form.
    pub today: String,
    /// Effective parameters after defaulting, echoed back.
    pub sort_by: &'static str,
    pub filter_unit_no: String,
}

async fn list_inspections(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ServiceError> {
    let sort_by = SortBy::parse(params.sort_by.as_deref());
    let filter_unit_no = params.filter_unit_no.unwrap_or_default().trim().to_string();

    // Re-read the authoritative store on every request; nothing is cached
    // between calls.
    let records = state.store.list_all().await?;
    let records = query::apply(records, &filter_unit_no, sort_by);

    let inspections = records
        .into_iter()
        .map(|record| ListedInspection {
            date_display: format_display_date(&record.date),
            record,
        })
        .collect();

    Ok(Json(ListResponse {
        inspections,
        today: chrono::Local::now().date_naive().to_string(),
        sort_by: sort_by.as_str(),
        filter_unit_no,
    }))
}

async fn create_inspection(
    State(state): State<AppState>,
    Form(input): Form<NewInspection>,
) -> Result<impl IntoResponse, ServiceError> {
    let draft = input.into_draft()?;
    let id = state.store.create(draft).await?;
    info!(id, "Created inspection record");
    Ok(Redirect::to("/"))
}

async fn delete_inspection(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ServiceError> {
    if !state.store.delete(id).await? {
        return Err(ServiceError::NotFound(format!(
            "inspection record {} not found",
            id
        )));
    }

    info!(id, "Deleted inspection record");
    Ok(Redirect::to("/"))
}

pub fn inspection_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_inspections))
        .route("/add", post(create_inspection))
        .route("/delete/:id", post(delete_inspection))
}
