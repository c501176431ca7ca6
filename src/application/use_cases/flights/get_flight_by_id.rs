//! Get Flight By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::FlightRepository;
use crate::domain::models::flight::{Flight, FlightId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a flight by ID
pub struct GetFlightByIdUseCase {
    flight_repository: Arc<dyn FlightRepository>,
}

impl GetFlightByIdUseCase {
    /// Create a new GetFlightByIdUseCase
    #[must_use]
    pub fn new(flight_repository: Arc<dyn FlightRepository>) -> Self {
        Self { flight_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the flight doesn't exist.
    pub async fn execute(&self, id: &FlightId) -> Result<Flight, UseCaseError> {
        tracing::debug!(flight_id = %id, "Getting flight by ID");

        let flight = self.flight_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(flight_id = %id, "Flight not found");
            UseCaseError::NotFound {
                resource: "Flight".to_string(),
                id: id.to_string(),
            }
        })?;

        Ok(flight)
    }
}
