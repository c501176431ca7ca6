//! Create Flight Use Case
//!
//! Adds a new flight to the store.

use std::sync::Arc;

use crate::domain::gateways::FlightRepository;
use crate::domain::models::flight::{CreateFlightData, Flight};
use crate::shared::errors::{RepositoryError, UseCaseError};

/// Use case for creating a new flight
pub struct CreateFlightUseCase {
    flight_repository: Arc<dyn FlightRepository>,
}

impl CreateFlightUseCase {
    /// Create a new CreateFlightUseCase
    #[must_use]
    pub fn new(flight_repository: Arc<dyn FlightRepository>) -> Self {
        Self { flight_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Conflict` if a caller-supplied id is already taken.
    pub async fn execute(&self, data: CreateFlightData) -> Result<Flight, UseCaseError> {
        tracing::info!(flight_number = %data.flight_number, "Creating new flight");

        let flight = Flight::new(data);
        let created = self
            .flight_repository
            .create(flight)
            .await
            .map_err(|err| match err {
                RepositoryError::AlreadyExists(id) => {
                    tracing::warn!(flight_id = %id, "Flight with this id already exists");
                    UseCaseError::Conflict(format!("Flight with id {id} already exists"))
                }
            })?;

        tracing::info!(
            flight_id = %created.id(),
            flight_number = %created.flight_number(),
            "Flight created successfully"
        );

        Ok(created)
    }
}
