//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod flights;
pub mod passengers;

pub use flights::{
    CreateFlightUseCase, DeleteFlightUseCase, GetFlightByIdUseCase, ListFlightsUseCase,
    PartialUpdateFlightUseCase,
};
pub use passengers::{
    CreatePassengerUseCase, DeletePassengerUseCase, GetPassengerByIdUseCase,
    ListPassengersUseCase, PartialUpdatePassengerUseCase,
};
