//! Flight Use Cases
//!
//! Business logic for managing flights.

mod create_flight;
mod delete_flight;
mod get_flight_by_id;
mod list_flights;
mod partial_update_flight;

pub use create_flight::CreateFlightUseCase;
pub use delete_flight::DeleteFlightUseCase;
pub use get_flight_by_id::GetFlightByIdUseCase;
pub use list_flights::ListFlightsUseCase;
pub use partial_update_flight::PartialUpdateFlightUseCase;
