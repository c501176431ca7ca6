//! Create Passenger Use Case
//!
//! Registers a new passenger under a freshly generated id.

use std::sync::Arc;

use crate::domain::gateways::PassengerRepository;
use crate::domain::models::passenger::{CreatePassengerData, Passenger};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new passenger
pub struct CreatePassengerUseCase {
    passenger_repository: Arc<dyn PassengerRepository>,
}

impl CreatePassengerUseCase {
    /// Create a new CreatePassengerUseCase
    #[must_use]
    pub fn new(passenger_repository: Arc<dyn PassengerRepository>) -> Self {
        Self { passenger_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if the store fails.
    pub async fn execute(&self, data: CreatePassengerData) -> Result<Passenger, UseCaseError> {
        tracing::info!(last_name = %data.last_name, flights = data.flights.len(), "Creating new passenger");

        let created = self.passenger_repository.create(Passenger::new(data)).await?;

        tracing::info!(passenger_id = %created.id(), "Passenger created successfully");
        Ok(created)
    }
}
