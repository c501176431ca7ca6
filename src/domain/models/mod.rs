//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod flight;
pub mod passenger;

pub use flight::{CreateFlightData, Flight, FlightFilter, FlightId, UpdateFlightData};
pub use passenger::{
    CreatePassengerData, Passenger, PassengerFilter, PassengerId, UpdatePassengerData,
};
