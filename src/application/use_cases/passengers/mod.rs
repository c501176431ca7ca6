//! Passenger Use Cases
//!
//! Business logic for managing passengers.

mod create_passenger;
mod delete_passenger;
mod get_passenger_by_id;
mod list_passengers;
mod partial_update_passenger;

pub use create_passenger::CreatePassengerUseCase;
pub use delete_passenger::DeletePassengerUseCase;
pub use get_passenger_by_id::GetPassengerByIdUseCase;
pub use list_passengers::ListPassengersUseCase;
pub use partial_update_passenger::PartialUpdatePassengerUseCase;
