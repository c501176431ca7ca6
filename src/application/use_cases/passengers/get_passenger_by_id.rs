//! Get Passenger By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::PassengerRepository;
use crate::domain::models::passenger::{Passenger, PassengerId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a passenger by ID
pub struct GetPassengerByIdUseCase {
    passenger_repository: Arc<dyn PassengerRepository>,
}

impl GetPassengerByIdUseCase {
    /// Create a new GetPassengerByIdUseCase
    #[must_use]
    pub fn new(passenger_repository: Arc<dyn PassengerRepository>) -> Self {
        Self { passenger_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the passenger doesn't exist.
    pub async fn execute(&self, id: &PassengerId) -> Result<Passenger, UseCaseError> {
        tracing::debug!(passenger_id = %id, "Getting passenger by ID");

        self.passenger_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(passenger_id = %id, "Passenger not found");
            UseCaseError::NotFound {
                resource: "Passenger".to_string(),
                id: id.to_string(),
            }
        })
    }
}
