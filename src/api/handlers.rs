//! HTTP request handlers for the Per-Diem Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_per_diem, compute_trip_total, settle_confirmed_trips};
use crate::error::{EngineError, EngineResult};
use crate::models::{TimeInterval, Trip, TripBreakdown};

use super::request::{PerDiemRequest, RatesQuery, SettlementRequest, TripRequest};
use super::response::{ApiError, ApiErrorResponse, RateLookupResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/countries", get(list_countries_handler))
        .route("/countries/:code/variants", get(list_variants_handler))
        .route("/countries/:code/rates", get(rates_handler))
        .route("/per-diem", post(per_diem_handler))
        .route("/trip-total", post(trip_total_handler))
        .route("/settlement", post(settlement_handler))
        .with_state(state)
}

/// Handler for GET /countries.
async fn list_countries_handler(State(state): State<AppState>) -> Response {
    json_ok(&state.rates().list_countries())
}

/// Handler for GET /countries/:code/variants.
async fn list_variants_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Response {
    json_ok(&state.rates().list_variants(&code))
}

/// Handler for GET /countries/:code/rates.
async fn rates_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(query): Query<RatesQuery>,
) -> Response {
    let rates = state.rates();
    let variant = query.variant.as_deref();

    match rates.resolve_daily_rate(&code, variant) {
        Ok(daily_rate) => json_ok(&RateLookupResponse {
            daily_rate,
            lodging_rate: rates.resolve_lodging_rate(&code, variant),
            differential_allowance: rates.resolve_differential_allowance(&code, variant),
            variant: query.variant.clone(),
            country: code,
        }),
        Err(err) => {
            warn!(country = %code, error = %err, "Rate lookup failed");
            error_response(err.into())
        }
    }
}

/// Handler for POST /per-diem.
///
/// Accepts an interval and either an explicit daily rate or a destination,
/// and returns the per-diem breakdown.
async fn per_diem_handler(
    State(state): State<AppState>,
    payload: Result<Json<PerDiemRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing per-diem request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let daily_rate = match (request.daily_rate, request.country.as_deref()) {
        (Some(rate), _) if rate <= Decimal::ZERO => {
            return error_response(ApiErrorResponse::bad_request(ApiError::validation_error(
                "daily_rate must be positive",
            )));
        }
        (Some(rate), _) => rate,
        (None, Some(country)) => {
            match state
                .rates()
                .resolve_daily_rate(country, request.variant.as_deref())
            {
                Ok(rate) => rate,
                Err(err) => return engine_error_response(err, correlation_id),
            }
        }
        (None, None) => {
            return error_response(ApiErrorResponse::bad_request(ApiError::validation_error(
                "either daily_rate or country must be provided",
            )));
        }
    };

    let interval = match TimeInterval::parse(&request.start, &request.end) {
        Ok(interval) => interval,
        Err(err) => return engine_error_response(err, correlation_id),
    };
    if let Err(api_error) = check_trip_span(&interval, state.max_trip_days()) {
        return error_response(api_error);
    }

    let start_time = Instant::now();
    match breakdown_for(&interval, daily_rate) {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                chunks = breakdown.chunks.len(),
                total_per_diem = %breakdown.total_per_diem,
                duration_us = start_time.elapsed().as_micros(),
                "Per-diem computed successfully"
            );
            json_ok(&breakdown)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

fn breakdown_for(interval: &TimeInterval, daily_rate: Decimal) -> EngineResult<TripBreakdown> {
    compute_per_diem(interval.start(), interval.end(), daily_rate)
}

/// Rejects trips longer than `max_days` with `VALIDATION_ERROR`.
///
/// A breakdown holds one chunk and one audit step per started day.
fn check_trip_span(interval: &TimeInterval, max_days: i64) -> Result<(), ApiErrorResponse> {
    let max_millis = max_days.saturating_mul(24 * 3_600_000);
    if interval.duration_millis() > max_millis {
        return Err(ApiErrorResponse::bad_request(ApiError::with_details(
            "VALIDATION_ERROR",
            format!("trip must not span more than {} days", max_days),
            format!("{} to {}", interval.start(), interval.end()),
        )));
    }
    Ok(())
}

/// Applies [`check_trip_span`] to a trip whose bounds parse.
///
/// Unparseable bounds are left to the engine, which reports them as
/// `INVALID_INTERVAL`.
fn check_trip(trip: &Trip, max_days: i64) -> Result<(), ApiErrorResponse> {
    match trip.interval() {
        Ok(interval) => check_trip_span(&interval, max_days),
        Err(_) => Ok(()),
    }
}

/// Handler for POST /trip-total.
async fn trip_total_handler(
    State(state): State<AppState>,
    payload: Result<Json<TripRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing trip total request");

    let trip: Trip = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    if let Err(api_error) = check_trip(&trip, state.max_trip_days()) {
        warn!(correlation_id = %correlation_id, trip_id = %trip.id, "Trip span too long");
        return error_response(api_error);
    }

    match compute_trip_total(&trip, state.rates()) {
        Ok(total) => {
            info!(
                correlation_id = %correlation_id,
                trip_id = %trip.id,
                grand_total = %total.grand_total,
                "Trip total computed successfully"
            );
            json_ok(&total)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /settlement.
async fn settlement_handler(
    State(state): State<AppState>,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing settlement request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    let trips: Vec<Trip> = request.trips.into_iter().map(Into::into).collect();

    let settled = trips.iter().filter(|t| t.user_id == request.user_id && t.is_ok);
    for trip in settled {
        if let Err(api_error) = check_trip(trip, state.max_trip_days()) {
            warn!(correlation_id = %correlation_id, trip_id = %trip.id, "Trip span too long");
            return error_response(api_error);
        }
    }

    match settle_confirmed_trips(&trips, &request.user_id, state.rates()) {
        Ok(settlement) => {
            info!(
                correlation_id = %correlation_id,
                user_id = %settlement.user_id,
                rows = settlement.rows.len(),
                total = %settlement.total,
                "Settlement computed successfully"
            );
            json_ok(&settlement)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

fn json_ok<T: Serialize>(body: &T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

fn engine_error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Computation failed"
    );
    error_response(err.into())
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
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

    error_response(ApiErrorResponse::bad_request(error))
}
