//! Flight Repository Gateway
//!
//! Abstract trait defining the contract for flight storage operations.

use async_trait::async_trait;

use crate::domain::models::flight::{Flight, FlightFilter, FlightId, UpdateFlightData};
use crate::shared::errors::RepositoryError;

/// Repository trait for Flight storage operations
///
/// Mutations must be atomic: `create` checks id uniqueness and inserts in
/// one step, `update` applies the patch to the stored record in one step.
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Find a flight by its ID
    async fn find_by_id(&self, id: &FlightId) -> Result<Option<Flight>, RepositoryError>;

    /// Find all flights matching every supplied filter, in no particular order
    async fn find_all(&self, filter: &FlightFilter) -> Result<Vec<Flight>, RepositoryError>;

    /// Insert a new flight
    ///
    /// Fails with `RepositoryError::AlreadyExists` if the id is taken.
    async fn create(&self, flight: Flight) -> Result<Flight, RepositoryError>;

    /// Patch an existing flight, returning `None` if it does not exist
    async fn update(
        &self,
        id: &FlightId,
        data: UpdateFlightData,
    ) -> Result<Option<Flight>, RepositoryError>;

    /// Remove a flight, returning whether it existed
    async fn delete(&self, id: &FlightId) -> Result<bool, RepositoryError>;
}
