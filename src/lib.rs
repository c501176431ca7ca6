//! Passenger/Flight API
//!
//! A demo microservice for managing passengers and flights, backed by
//! in-memory stores and laid out along Clean/Hexagonal Architecture lines.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
