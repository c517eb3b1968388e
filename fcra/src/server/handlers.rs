// fcra/src/server/handlers.rs

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use fcra_core::application::{ExportTarget, export, update_record};
use fcra_core::domain::record::Record;
use fcra_core::domain::reporting::{
    FilterOptions, PortfolioStats, SummaryRow, SummaryStats, TrendMetric, TrendSeries,
};

use super::error::ApiError;
use super::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Serialize)]
pub struct AsOfResponse {
    pub as_of: String,
}

#[derive(Serialize)]
pub struct CountResponse {
    pub count: u64,
}

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Deserialize)]
pub struct TrendQuery {
    pub metric: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecordQuery {
    pub remediation_status: Option<String>,
    pub remediation_category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub field: String,
    /// Dashboard cells send strings; numbers are accepted too. Missing means null.
    #[serde(default)]
    pub value: Value,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdInput {
    Number(i64),
    Text(String),
}

/// Record ids arrive either as JSON numbers or as numeric strings.
fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match IdInput::deserialize(deserializer)? {
        IdInput::Number(id) => Ok(id),
        IdInput::Text(text) => text.trim().parse().map_err(DeError::custom),
    }
}

/// Text form of a JSON value as the store receives it. `null` clears the field.
fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub async fn summary_stats(State(state): State<AppState>) -> ApiResult<SummaryStats> {
    Ok(Json(state.service.summary_stats().await?))
}

pub async fn summary_table(State(state): State<AppState>) -> ApiResult<Vec<SummaryRow>> {
    Ok(Json(state.service.summary_table().await?))
}

pub async fn as_of_date(State(state): State<AppState>) -> ApiResult<AsOfResponse> {
    Ok(Json(AsOfResponse {
        as_of: state.service.as_of_date().await?,
    }))
}

pub async fn trend(
    State(state): State<AppState>,
    Query(query): Query<TrendQuery>,
) -> ApiResult<TrendSeries> {
    let metric = match query.metric.as_deref() {
        None | Some("") => TrendMetric::default(),
        Some(raw) => raw.parse()?,
    };
    Ok(Json(state.service.trend(metric).await?))
}

pub async fn portfolio_stats(
    State(state): State<AppState>,
    Path(portfolio): Path<String>,
) -> ApiResult<PortfolioStats> {
    Ok(Json(state.service.portfolio_stats(&portfolio).await?))
}

pub async fn portfolio_data(
    State(state): State<AppState>,
    Path(portfolio): Path<String>,
    Query(query): Query<RecordQuery>,
) -> ApiResult<Vec<Record>> {
    let records = state
        .service
        .portfolio_records(
            &portfolio,
            query.remediation_status.as_deref(),
            query.remediation_category.as_deref(),
        )
        .await?;
    Ok(Json(records))
}

pub async fn update(
    State(state): State<AppState>,
    payload: Result<Json<UpdateRequest>, JsonRejection>,
) -> ApiResult<SuccessResponse> {
    let Json(request) = payload?;
    update_record(
        state.service.store().as_ref(),
        request.id,
        &request.field,
        &value_text(&request.value),
    )
    .await?;
    Ok(Json(SuccessResponse { success: true }))
}

pub async fn filter_options(
    State(state): State<AppState>,
    Path(portfolio): Path<String>,
) -> ApiResult<FilterOptions> {
    Ok(Json(state.service.filter_options(&portfolio).await?))
}

pub async fn open_task_count(
    State(state): State<AppState>,
    Path(assignee): Path<String>,
) -> ApiResult<CountResponse> {
    Ok(Json(CountResponse {
        count: state.service.open_task_count(&assignee).await?,
    }))
}

pub async fn export_sheet(
    State(state): State<AppState>,
    Path(target): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let target: ExportTarget = target.parse()?;
    let document = export(&state.service, state.writer.as_ref(), target).await?;

    let disposition = format!("attachment; filename=\"{}\"", document.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, document.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.bytes,
    ))
}
