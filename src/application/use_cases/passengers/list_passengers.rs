//! List Passengers Use Case

use std::sync::Arc;

use crate::domain::gateways::PassengerRepository;
use crate::domain::models::passenger::{Passenger, PassengerFilter};
use crate::shared::errors::UseCaseError;

/// Use case for listing passengers
pub struct ListPassengersUseCase {
    passenger_repository: Arc<dyn PassengerRepository>,
}

impl ListPassengersUseCase {
    /// Create a new ListPassengersUseCase
    #[must_use]
    pub fn new(passenger_repository: Arc<dyn PassengerRepository>) -> Self {
        Self { passenger_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if the store fails.
    pub async fn execute(&self, filter: PassengerFilter) -> Result<Vec<Passenger>, UseCaseError> {
        tracing::debug!(?filter, "Listing passengers");

        let passengers = self.passenger_repository.find_all(&filter).await?;

        tracing::debug!(count = passengers.len(), "Found passengers");
        Ok(passengers)
    }
}
