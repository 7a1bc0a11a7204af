//! HTTP request handlers for the Receipt Processor API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::{get, post},
};
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::Receipt;
use crate::scoring::evaluate_with_breakdown;
use crate::store::ReceiptStore;

use super::openapi::{OPENAPI_PATH, openapi_document};
use super::request::ReceiptRequest;
use super::response::{
    AllReceiptsResponse, ApiError, ApiErrorResponse, PointsResponse, ProcessResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt_handler))
        .route("/receipts/all", get(all_receipts_handler))
        .route("/receipts/:id/points", get(points_handler))
        .route(OPENAPI_PATH, get(openapi_handler))
        .with_state(state)
}

/// Handler for POST /receipts/process.
///
/// Scores the submitted receipt, stores the points under a new id and
/// returns that id.
async fn process_receipt_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReceiptRequest>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ApiErrorResponse> {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing receipt");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::invalid_receipt(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return Err(ApiErrorResponse::bad_request(error));
        }
    };

    let start_time = Instant::now();
    let scored = Receipt::try_from(request).and_then(|receipt| {
        evaluate_with_breakdown(&receipt).map(|breakdown| (receipt, breakdown))
    });

    let (receipt, breakdown) = match scored {
        Ok(scored) => scored,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Receipt rejected"
            );
            return Err(err.into());
        }
    };

    for contribution in &breakdown.contributions {
        debug!(
            correlation_id = %correlation_id,
            rule_id = %contribution.rule_id,
            points = contribution.points,
            reasoning = %contribution.reasoning,
            "Rule applied"
        );
    }

    let id = next_receipt_id(state.store());
    state.store().insert(id.clone(), breakdown.points);

    info!(
        correlation_id = %correlation_id,
        receipt_id = %id,
        retailer = %receipt.retailer,
        items_count = receipt.items.len(),
        points = breakdown.points,
        duration_us = start_time.elapsed().as_micros(),
        "Receipt scored"
    );

    Ok(Json(ProcessResponse { id }))
}

/// Handler for GET /receipts/{id}/points.
async fn points_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiErrorResponse> {
    match state.store().get(&id) {
        Some(points) => {
            debug!(receipt_id = %id, points, "Points lookup");
            Ok(Json(PointsResponse { points }))
        }
        None => {
            warn!(receipt_id = %id, "Unknown receipt id");
            Err(EngineError::ReceiptNotFound { id }.into())
        }
    }
}

/// Handler for GET /receipts/all.
async fn all_receipts_handler(State(state): State<AppState>) -> Json<AllReceiptsResponse> {
    let receipts = state.store().all();
    debug!(receipts_count = receipts.len(), "Listing all receipts");
    Json(AllReceiptsResponse { receipts })
}

/// Handler for GET /api-docs/openapi.json.
async fn openapi_handler() -> Json<Value> {
    Json(openapi_document())
}

/// Generates a receipt id that is not already in use.
fn next_receipt_id(store: &dyn ReceiptStore) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if store.get(&id).is_none() {
            return id;
        }
    }
}
