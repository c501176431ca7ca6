//! List Flights Use Case
//!
//! Retrieves every flight matching a set of exact-match filters.

use std::sync::Arc;

use crate::domain::gateways::FlightRepository;
use crate::domain::models::flight::{Flight, FlightFilter};
use crate::shared::errors::UseCaseError;

/// Use case for listing flights
pub struct ListFlightsUseCase {
    flight_repository: Arc<dyn FlightRepository>,
}

impl ListFlightsUseCase {
    /// Create a new ListFlightsUseCase
    #[must_use]
    pub fn new(flight_repository: Arc<dyn FlightRepository>) -> Self {
        Self { flight_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if the store fails.
    pub async fn execute(&self, filter: FlightFilter) -> Result<Vec<Flight>, UseCaseError> {
        tracing::debug!(?filter, "Listing flights");

        let flights = self.flight_repository.find_all(&filter).await?;

        tracing::debug!(count = flights.len(), "Found flights");
        Ok(flights)
    }
}
