//! Passenger DTOs
//!
//! Data transfer objects for passenger API endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::flight::FlightId;
use crate::domain::models::passenger::{
    CreatePassengerData, Passenger, PassengerFilter, UpdatePassengerData,
};

fn to_flight_ids(ids: Vec<Uuid>) -> Vec<FlightId> {
    ids.into_iter().map(FlightId::from_uuid).collect()
}

/// DTO for creating a new passenger
///
/// Any `id` in the body is ignored; passenger ids are always generated.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePassengerDto {
    pub first_name: String,
    pub last_name: String,

    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,

    pub phone: String,
    pub birth_date: NaiveDate,
    pub passport_number: String,

    #[serde(default)]
    pub flights: Vec<Uuid>,
}

impl From<CreatePassengerDto> for CreatePassengerData {
    fn from(dto: CreatePassengerDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            birth_date: dto.birth_date,
            passport_number: dto.passport_number,
            flights: to_flight_ids(dto.flights),
        }
    }
}

/// DTO for partial passenger update (PATCH)
#[derive(Debug, Clone, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatchPassengerDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,

    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,

    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub passport_number: Option<String>,
    pub flights: Option<Vec<Uuid>>,
}

impl From<PatchPassengerDto> for UpdatePassengerData {
    fn from(dto: PatchPassengerDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            birth_date: dto.birth_date,
            passport_number: dto.passport_number,
            flights: dto.flights.map(to_flight_ids),
        }
    }
}

/// Query parameters accepted by `GET /passengers`
///
/// `birthDate` stays a string: it is compared textually, so a value that is
/// not a valid date simply matches nothing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PassengerListQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<String>,
}

impl From<PassengerListQuery> for PassengerFilter {
    fn from(query: PassengerListQuery) -> Self {
        Self {
            first_name: query.first_name,
            last_name: query.last_name,
            email: query.email,
            phone: query.phone,
            birth_date: query.birth_date,
        }
    }
}

/// Passenger response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerResponseDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub passport_number: String,
    pub flights: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Passenger> for PassengerResponseDto {
    fn from(passenger: Passenger) -> Self {
        Self {
            id: *passenger.id().as_uuid(),
            first_name: passenger.first_name().to_string(),
            last_name: passenger.last_name().to_string(),
            email: passenger.email().to_string(),
            phone: passenger.phone().to_string(),
            birth_date: passenger.birth_date(),
            passport_number: passenger.passport_number().to_string(),
            flights: passenger.flights().iter().map(|id| *id.as_uuid()).collect(),
            created_at: passenger.created_at(),
            updated_at: passenger.updated_at(),
        }
    }
}
