//! Domain Layer
//!
//! Contains the core business logic, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{FlightRepository, PassengerRepository};
pub use models::flight::{CreateFlightData, Flight, FlightFilter, FlightId, UpdateFlightData};
pub use models::passenger::{
    CreatePassengerData, Passenger, PassengerFilter, PassengerId, UpdatePassengerData,
};
