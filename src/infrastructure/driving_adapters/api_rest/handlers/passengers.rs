//! Passenger Handlers
//!
//! HTTP handlers for passenger CRUD operations.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::domain::models::passenger::PassengerId;
use crate::infrastructure::driving_adapters::api_rest::dto::passenger::{
    CreatePassengerDto, PassengerListQuery, PassengerResponseDto, PatchPassengerDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for passenger endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/passengers", get(list_passengers).post(create_passenger))
        .route(
            "/passengers/{id}",
            get(get_passenger_by_id)
                .patch(partial_update_passenger)
                .delete(delete_passenger),
        )
}

/// POST /passengers - Create a new passenger
///
/// # Responses
///
/// * 201 Created - Passenger created successfully
/// * 400 Bad Request - Malformed payload or validation error (e.g. bad email)
#[axum::debug_handler]
async fn create_passenger(
    State(state): State<AppState>,
    payload: Result<Json<CreatePassengerDto>, JsonRejection>,
) -> Result<(StatusCode, Json<PassengerResponseDto>), ApiError> {
    let Json(dto) = payload?;
    dto.validate()?;

    let passenger = state.create_passenger_use_case.execute(dto.into()).await?;

    Ok((StatusCode::CREATED, Json(PassengerResponseDto::from(passenger))))
}

/// GET /passengers - List passengers, optionally filtered
///
/// # Responses
///
/// * 200 OK - Matching passengers, in no particular order
#[axum::debug_handler]
async fn list_passengers(
    State(state): State<AppState>,
    query: Result<Query<PassengerListQuery>, QueryRejection>,
) -> Result<Json<Vec<PassengerResponseDto>>, ApiError> {
    let Query(query) = query?;

    let passengers = state.list_passengers_use_case.execute(query.into()).await?;

    Ok(Json(passengers.into_iter().map(PassengerResponseDto::from).collect()))
}

/// GET /passengers/{id} - Get a passenger by ID
///
/// # Responses
///
/// * 200 OK - Passenger found
/// * 400 Bad Request - Id is not a UUID
/// * 404 Not Found - Passenger does not exist
#[axum::debug_handler]
async fn get_passenger_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PassengerResponseDto>, ApiError> {
    let passenger_id = PassengerId::try_from(id.as_str())?;

    let passenger = state.get_passenger_by_id_use_case.execute(&passenger_id).await?;

    Ok(Json(PassengerResponseDto::from(passenger)))
}

/// PATCH /passengers/{id} - Partial update of a passenger
///
/// # Responses
///
/// * 200 OK - Passenger updated successfully
/// * 400 Bad Request - Malformed payload, validation error, or bad id
/// * 404 Not Found - Passenger does not exist
#[axum::debug_handler]
async fn partial_update_passenger(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<PatchPassengerDto>, JsonRejection>,
) -> Result<Json<PassengerResponseDto>, ApiError> {
    let passenger_id = PassengerId::try_from(id.as_str())?;
    let Json(dto) = payload?;
    dto.validate()?;

    let passenger = state
        .partial_update_passenger_use_case
        .execute(&passenger_id, dto.into())
        .await?;

    Ok(Json(PassengerResponseDto::from(passenger)))
}

/// DELETE /passengers/{id} - Delete a passenger
///
/// # Responses
///
/// * 204 No Content - Passenger deleted
/// * 400 Bad Request - Id is not a UUID
/// * 404 Not Found - Passenger does not exist
#[axum::debug_handler]
async fn delete_passenger(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let passenger_id = PassengerId::try_from(id.as_str())?;

    state.delete_passenger_use_case.execute(&passenger_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
