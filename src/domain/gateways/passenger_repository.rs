//! Passenger Repository Gateway

use async_trait::async_trait;

use crate::domain::models::passenger::{
    Passenger, PassengerFilter, PassengerId, UpdatePassengerData,
};
use crate::shared::errors::RepositoryError;

/// Repository trait for Passenger storage operations
#[async_trait]
pub trait PassengerRepository: Send + Sync {
    /// Find a passenger by its ID
    async fn find_by_id(&self, id: &PassengerId) -> Result<Option<Passenger>, RepositoryError>;

    /// Find all passengers matching every supplied filter, in no particular order
    async fn find_all(&self, filter: &PassengerFilter) -> Result<Vec<Passenger>, RepositoryError>;

    /// Insert a new passenger
    async fn create(&self, passenger: Passenger) -> Result<Passenger, RepositoryError>;

    /// Patch an existing passenger, returning `None` if it does not exist
    async fn update(
        &self,
        id: &PassengerId,
        data: UpdatePassengerData,
    ) -> Result<Option<Passenger>, RepositoryError>;

    /// Remove a passenger, returning whether it existed
    async fn delete(&self, id: &PassengerId) -> Result<bool, RepositoryError>;
}
