//! Partial Update Passenger Use Case (PATCH)
//!
//! Updates only the provided fields of a passenger.

use std::sync::Arc;

use crate::domain::gateways::PassengerRepository;
use crate::domain::models::passenger::{Passenger, PassengerId, UpdatePassengerData};
use crate::shared::errors::UseCaseError;

/// Use case for partial passenger update (PATCH)
pub struct PartialUpdatePassengerUseCase {
    passenger_repository: Arc<dyn PassengerRepository>,
}

impl PartialUpdatePassengerUseCase {
    /// Create a new PartialUpdatePassengerUseCase
    #[must_use]
    pub fn new(passenger_repository: Arc<dyn PassengerRepository>) -> Self {
        Self { passenger_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the passenger doesn't exist.
    pub async fn execute(
        &self,
        id: &PassengerId,
        data: UpdatePassengerData,
    ) -> Result<Passenger, UseCaseError> {
        tracing::info!(passenger_id = %id, "Partially updating passenger");

        let updated = self.passenger_repository.update(id, data).await?.ok_or_else(|| {
            tracing::warn!(passenger_id = %id, "Passenger not found for partial update");
            UseCaseError::NotFound {
                resource: "Passenger".to_string(),
                id: id.to_string(),
            }
        })?;

        tracing::info!(passenger_id = %id, "Passenger partially updated successfully");
        Ok(updated)
    }
}
