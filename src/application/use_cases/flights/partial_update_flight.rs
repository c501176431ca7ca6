//! Partial Update Flight Use Case (PATCH)
//!
//! Updates only the provided fields of a flight.

use std::sync::Arc;

use crate::domain::gateways::FlightRepository;
use crate::domain::models::flight::{Flight, FlightId, UpdateFlightData};
use crate::shared::errors::UseCaseError;

/// Use case for partial flight update (PATCH)
pub struct PartialUpdateFlightUseCase {
    flight_repository: Arc<dyn FlightRepository>,
}

impl PartialUpdateFlightUseCase {
    /// Create a new PartialUpdateFlightUseCase
    #[must_use]
    pub fn new(flight_repository: Arc<dyn FlightRepository>) -> Self {
        Self { flight_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the flight doesn't exist.
    pub async fn execute(&self, id: &FlightId, data: UpdateFlightData) -> Result<Flight, UseCaseError> {
        tracing::info!(flight_id = %id, "Partially updating flight");

        let updated = self.flight_repository.update(id, data).await?.ok_or_else(|| {
            tracing::warn!(flight_id = %id, "Flight not found for partial update");
            UseCaseError::NotFound {
                resource: "Flight".to_string(),
                id: id.to_string(),
            }
        })?;

        tracing::info!(flight_id = %id, "Flight partially updated successfully");
        Ok(updated)
    }
}
