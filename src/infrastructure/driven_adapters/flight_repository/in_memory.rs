//! In-Memory Flight Repository Implementation
//!
//! Implements the FlightRepository trait over a process-local map. State
//! lives for the lifetime of the process and is lost on restart.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::gateways::FlightRepository;
use crate::domain::models::flight::{Flight, FlightFilter, FlightId, UpdateFlightData};
use crate::shared::errors::RepositoryError;

/// In-memory implementation of FlightRepository
///
/// Reads share the lock; every mutation holds it exclusively for the whole
/// read-modify-write.
#[derive(Debug, Default)]
pub struct InMemoryFlightRepository {
    flights: RwLock<HashMap<FlightId, Flight>>,
}

impl InMemoryFlightRepository {
    /// Create an empty InMemoryFlightRepository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FlightRepository for InMemoryFlightRepository {
    async fn find_by_id(&self, id: &FlightId) -> Result<Option<Flight>, RepositoryError> {
        Ok(self.flights.read().await.get(id).cloned())
    }

    async fn find_all(&self, filter: &FlightFilter) -> Result<Vec<Flight>, RepositoryError> {
        let flights = self.flights.read().await;
        Ok(flights
            .values()
            .filter(|flight| filter.matches(flight))
            .cloned()
            .collect())
    }

    async fn create(&self, flight: Flight) -> Result<Flight, RepositoryError> {
        let mut flights = self.flights.write().await;
        match flights.entry(*flight.id()) {
            Entry::Occupied(entry) => Err(RepositoryError::AlreadyExists(entry.key().to_string())),
            Entry::Vacant(entry) => Ok(entry.insert(flight).clone()),
        }
    }

    async fn update(
        &self,
        id: &FlightId,
        data: UpdateFlightData,
    ) -> Result<Option<Flight>, RepositoryError> {
        let mut flights = self.flights.write().await;
        let Some(existing) = flights.remove(id) else {
            return Ok(None);
        };

        let updated = existing.with_updates(data);
        flights.insert(*id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: &FlightId) -> Result<bool, RepositoryError> {
        Ok(self.flights.write().await.remove(id).is_some())
    }
}
