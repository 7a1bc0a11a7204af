//! HTTP API module for the Receipt Processor.
//!
//! This module provides the REST API endpoints for submitting receipts and
//! retrieving the points they earned.

mod handlers;
mod openapi;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use openapi::{OPENAPI_PATH, openapi_document};
pub use request::{ItemRequest, ReceiptRequest};
pub use response::{
    AllReceiptsResponse, ApiError, ApiErrorResponse, INVALID_RECEIPT_MESSAGE, PointsResponse,
    ProcessResponse,
};
pub use state::AppState;
