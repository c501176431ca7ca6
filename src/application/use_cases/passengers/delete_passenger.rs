//! Delete Passenger Use Case

use std::sync::Arc;

use crate::domain::gateways::PassengerRepository;
use crate::domain::models::passenger::PassengerId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a passenger
pub struct DeletePassengerUseCase {
    passenger_repository: Arc<dyn PassengerRepository>,
}

impl DeletePassengerUseCase {
    /// Create a new DeletePassengerUseCase
    #[must_use]
    pub fn new(passenger_repository: Arc<dyn PassengerRepository>) -> Self {
        Self { passenger_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the passenger doesn't exist.
    pub async fn execute(&self, id: &PassengerId) -> Result<(), UseCaseError> {
        tracing::info!(passenger_id = %id, "Deleting passenger");

        if !self.passenger_repository.delete(id).await? {
            tracing::warn!(passenger_id = %id, "Passenger not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: "Passenger".to_string(),
                id: id.to_string(),
            });
        }

        tracing::info!(passenger_id = %id, "Passenger deleted successfully");
        Ok(())
    }
}
