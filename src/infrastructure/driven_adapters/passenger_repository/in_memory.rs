//! In-Memory Passenger Repository Implementation

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::gateways::PassengerRepository;
use crate::domain::models::passenger::{
    Passenger, PassengerFilter, PassengerId, UpdatePassengerData,
};
use crate::shared::errors::RepositoryError;

/// In-memory implementation of PassengerRepository
#[derive(Debug, Default)]
pub struct InMemoryPassengerRepository {
    passengers: RwLock<HashMap<PassengerId, Passenger>>,
}

impl InMemoryPassengerRepository {
    /// Create an empty InMemoryPassengerRepository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PassengerRepository for InMemoryPassengerRepository {
    async fn find_by_id(&self, id: &PassengerId) -> Result<Option<Passenger>, RepositoryError> {
        Ok(self.passengers.read().await.get(id).cloned())
    }

    async fn find_all(&self, filter: &PassengerFilter) -> Result<Vec<Passenger>, RepositoryError> {
        let passengers = self.passengers.read().await;
        Ok(passengers
            .values()
            .filter(|passenger| filter.matches(passenger))
            .cloned()
            .collect())
    }

    // Ids are always freshly generated, so no collision check here.
    async fn create(&self, passenger: Passenger) -> Result<Passenger, RepositoryError> {
        self.passengers
            .write()
            .await
            .insert(*passenger.id(), passenger.clone());
        Ok(passenger)
    }

    async fn update(
        &self,
        id: &PassengerId,
        data: UpdatePassengerData,
    ) -> Result<Option<Passenger>, RepositoryError> {
        let mut passengers = self.passengers.write().await;
        let Some(existing) = passengers.remove(id) else {
            return Ok(None);
        };

        let updated = existing.with_updates(data);
        passengers.insert(*id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: &PassengerId) -> Result<bool, RepositoryError> {
        Ok(self.passengers.write().await.remove(id).is_some())
    }
}
