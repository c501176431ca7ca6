//! Flight DTOs
//!
//! Data transfer objects for flight API endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::flight::{
    CreateFlightData, Flight, FlightFilter, FlightId, UpdateFlightData,
};

/// DTO for creating a new flight
///
/// `id` is optional; when present it must not already exist.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFlightDto {
    pub id: Option<Uuid>,
    pub flight_number: String,
    pub boarding_time: String,
    pub departure_time: String,
    pub arrival_time: Option<String>,
    pub departure_airport: Option<String>,
    pub arrival_airport: String,
}

impl From<CreateFlightDto> for CreateFlightData {
    fn from(dto: CreateFlightDto) -> Self {
        Self {
            id: dto.id.map(FlightId::from_uuid),
            flight_number: dto.flight_number,
            boarding_time: dto.boarding_time,
            departure_time: dto.departure_time,
            arrival_time: dto.arrival_time,
            departure_airport: dto.departure_airport,
            arrival_airport: dto.arrival_airport,
        }
    }
}

/// DTO for partial flight update (PATCH)
///
/// All fields are optional. Only provided fields will be updated; an
/// explicit `null` counts as not provided. The id always comes from the path.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatchFlightDto {
    pub flight_number: Option<String>,
    pub boarding_time: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub departure_airport: Option<String>,
    pub arrival_airport: Option<String>,
}

impl From<PatchFlightDto> for UpdateFlightData {
    fn from(dto: PatchFlightDto) -> Self {
        Self {
            flight_number: dto.flight_number,
            boarding_time: dto.boarding_time,
            departure_time: dto.departure_time,
            arrival_time: dto.arrival_time,
            departure_airport: dto.departure_airport,
            arrival_airport: dto.arrival_airport,
        }
    }
}

/// Query parameters accepted by `GET /flights`
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FlightListQuery {
    pub flight_number: Option<String>,
    pub boarding_time: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub departure_airport: Option<String>,
    pub arrival_airport: Option<String>,
}

impl From<FlightListQuery> for FlightFilter {
    fn from(query: FlightListQuery) -> Self {
        Self {
            flight_number: query.flight_number,
            boarding_time: query.boarding_time,
            departure_time: query.departure_time,
            arrival_time: query.arrival_time,
            departure_airport: query.departure_airport,
            arrival_airport: query.arrival_airport,
        }
    }
}

/// Flight response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightResponseDto {
    pub id: Uuid,
    pub flight_number: String,
    pub boarding_time: String,
    pub departure_time: String,
    pub arrival_time: Option<String>,
    pub departure_airport: Option<String>,
    pub arrival_airport: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Flight> for FlightResponseDto {
    fn from(flight: Flight) -> Self {
        Self {
            id: *flight.id().as_uuid(),
            flight_number: flight.flight_number().to_string(),
            boarding_time: flight.boarding_time().to_string(),
            departure_time: flight.departure_time().to_string(),
            arrival_time: flight.arrival_time().map(str::to_string),
            departure_airport: flight.departure_airport().map(str::to_string),
            arrival_airport: flight.arrival_airport().to_string(),
            created_at: flight.created_at(),
            updated_at: flight.updated_at(),
        }
    }
}
