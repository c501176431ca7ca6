//! Driven Adapters
//!
//! Implementations of gateway traits and other outbound concerns:
//! - In-memory repositories (the flight and passenger stores)
//! - Configuration

pub mod config;
pub mod flight_repository;
pub mod passenger_repository;

pub use config::AppConfig;
pub use flight_repository::InMemoryFlightRepository;
pub use passenger_repository::InMemoryPassengerRepository;
