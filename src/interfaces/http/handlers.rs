use super::dto::{BreakdownResponse, PointsResponse, ProcessResponse, ReceiptRequest};
use super::error::{ApiError, ApiResult};
use crate::application::processor::ReceiptProcessor;
use crate::domain::receipt::Receipt;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use std::any::Any;
use std::sync::Arc;

/// Shared state handed to every handler.
pub type AppState = Arc<ReceiptProcessor>;

/// `POST /receipts/process`
pub async fn process_receipt(
    State(processor): State<AppState>,
    payload: Result<Json<ReceiptRequest>, JsonRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let Json(request) = payload?;
    let receipt = Receipt::try_from(request)?;
    let id = processor.process(receipt).await?;

    Ok(Json(ProcessResponse { id }))
}

/// `GET /receipts/:id/points`
pub async fn get_points(
    State(processor): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = processor.points(&id).await?;

    Ok(Json(PointsResponse { points }))
}

/// `GET /debug/receipts/:id/breakdown`
pub async fn get_breakdown(
    State(processor): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BreakdownResponse>> {
    let breakdown = processor.breakdown(&id).await?;

    Ok(Json(breakdown.into()))
}

/// Turns a handler panic into a 500 response and closes the connection.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = panic.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    let mut response = ApiError::Internal(format!("handler panicked: {detail}")).into_response();
    response
        .headers_mut()
        .insert(header::CONNECTION, HeaderValue::from_static("close"));
    response
}
