//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod flight_repository;
pub mod passenger_repository;

pub use flight_repository::FlightRepository;
pub use passenger_repository::PassengerRepository;
