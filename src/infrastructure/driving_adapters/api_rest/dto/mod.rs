//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod flight;
pub mod passenger;

pub use flight::{CreateFlightDto, FlightListQuery, FlightResponseDto, PatchFlightDto};
pub use passenger::{
    CreatePassengerDto, PassengerListQuery, PassengerResponseDto, PatchPassengerDto,
};
