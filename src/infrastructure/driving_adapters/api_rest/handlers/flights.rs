//! Flight Handlers
//!
//! HTTP handlers for flight CRUD operations.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::domain::models::flight::FlightId;
use crate::infrastructure::driving_adapters::api_rest::dto::flight::{
    CreateFlightDto, FlightListQuery, FlightResponseDto, PatchFlightDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for flight endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/flights", get(list_flights).post(create_flight))
        .route(
            "/flights/{id}",
            get(get_flight_by_id)
                .patch(partial_update_flight)
                .delete(delete_flight),
        )
}

/// POST /flights - Create a new flight
///
/// # Responses
///
/// * 201 Created - Flight created successfully
/// * 400 Bad Request - Malformed payload, or the supplied id already exists
#[axum::debug_handler]
async fn create_flight(
    State(state): State<AppState>,
    payload: Result<Json<CreateFlightDto>, JsonRejection>,
) -> Result<(StatusCode, Json<FlightResponseDto>), ApiError> {
    let Json(dto) = payload?;

    let flight = state.create_flight_use_case.execute(dto.into()).await?;

    Ok((StatusCode::CREATED, Json(FlightResponseDto::from(flight))))
}

/// GET /flights - List flights, optionally filtered
///
/// Every supplied query parameter must match exactly.
///
/// # Responses
///
/// * 200 OK - Matching flights, in no particular order
#[axum::debug_handler]
async fn list_flights(
    State(state): State<AppState>,
    query: Result<Query<FlightListQuery>, QueryRejection>,
) -> Result<Json<Vec<FlightResponseDto>>, ApiError> {
    let Query(query) = query?;

    let flights = state.list_flights_use_case.execute(query.into()).await?;

    Ok(Json(flights.into_iter().map(FlightResponseDto::from).collect()))
}

/// GET /flights/{id} - Get a flight by ID
///
/// # Responses
///
/// * 200 OK - Flight found
/// * 400 Bad Request - Id is not a UUID
/// * 404 Not Found - Flight does not exist
#[axum::debug_handler]
async fn get_flight_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FlightResponseDto>, ApiError> {
    let flight_id = FlightId::try_from(id.as_str())?;

    let flight = state.get_flight_by_id_use_case.execute(&flight_id).await?;

    Ok(Json(FlightResponseDto::from(flight)))
}

/// PATCH /flights/{id} - Partial update of a flight
///
/// # Responses
///
/// * 200 OK - Flight updated successfully
/// * 400 Bad Request - Malformed payload or bad id
/// * 404 Not Found - Flight does not exist
#[axum::debug_handler]
async fn partial_update_flight(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<PatchFlightDto>, JsonRejection>,
) -> Result<Json<FlightResponseDto>, ApiError> {
    let flight_id = FlightId::try_from(id.as_str())?;
    let Json(dto) = payload?;

    let flight = state
        .partial_update_flight_use_case
        .execute(&flight_id, dto.into())
        .await?;

    Ok(Json(FlightResponseDto::from(flight)))
}

/// DELETE /flights/{id} - Delete a flight
///
/// # Responses
///
/// * 204 No Content - Flight deleted
/// * 400 Bad Request - Id is not a UUID
/// * 404 Not Found - Flight does not exist
#[axum::debug_handler]
async fn delete_flight(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let flight_id = FlightId::try_from(id.as_str())?;

    state.delete_flight_use_case.execute(&flight_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
