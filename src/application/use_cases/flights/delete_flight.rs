//! Delete Flight Use Case
//!
//! Removes a flight from the store.

use std::sync::Arc;

use crate::domain::gateways::FlightRepository;
use crate::domain::models::flight::FlightId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a flight
pub struct DeleteFlightUseCase {
    flight_repository: Arc<dyn FlightRepository>,
}

impl DeleteFlightUseCase {
    /// Create a new DeleteFlightUseCase
    #[must_use]
    pub fn new(flight_repository: Arc<dyn FlightRepository>) -> Self {
        Self { flight_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the flight doesn't exist.
    pub async fn execute(&self, id: &FlightId) -> Result<(), UseCaseError> {
        tracing::info!(flight_id = %id, "Deleting flight");

        if !self.flight_repository.delete(id).await? {
            tracing::warn!(flight_id = %id, "Flight not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: "Flight".to_string(),
                id: id.to_string(),
            });
        }

        tracing::info!(flight_id = %id, "Flight deleted successfully");
        Ok(())
    }
}
