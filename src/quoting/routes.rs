//! Quote API route handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::AppState;

use super::engine::QuoteError;
use super::requests::QuoteParams;
use super::responses::{PriceQuoteResponse, QuoteErrorResponse};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/listings/:listing_id/quote", get(quote))
}

/// Price quote for a stay at a listing
async fn quote(
    State(state): State<AppState>,
    Path(listing_id): Path<Uuid>,
    Query(params): Query<QuoteParams>,
) -> Response {
    match state.engine.quote(listing_id, &params).await {
        Ok(quote) => (StatusCode::OK, Json(PriceQuoteResponse::from(quote))).into_response(),
        Err(err) => {
            if let QuoteError::InternalFault(source) = &err {
                tracing::error!("Quote failed for listing {}: {}", listing_id, source);
            }
            (status_for(&err), Json(QuoteErrorResponse::from(&err))).into_response()
        }
    }
}

/// Transport-level status mapping for the quote error taxonomy
fn status_for(err: &QuoteError) -> StatusCode {
    match err {
        QuoteError::MissingDates
        | QuoteError::InvalidDateFormat
        | QuoteError::InvalidRange
        | QuoteError::ListingUnavailable => StatusCode::BAD_REQUEST,
        QuoteError::ListingNotFound => StatusCode::NOT_FOUND,
        QuoteError::InternalFault(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
