//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::flights::{
    CreateFlightUseCase, DeleteFlightUseCase, GetFlightByIdUseCase, ListFlightsUseCase,
    PartialUpdateFlightUseCase,
};
use crate::application::use_cases::passengers::{
    CreatePassengerUseCase, DeletePassengerUseCase, GetPassengerByIdUseCase,
    ListPassengersUseCase, PartialUpdatePassengerUseCase,
};
use crate::domain::gateways::{FlightRepository, PassengerRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub create_flight_use_case: Arc<CreateFlightUseCase>,
    pub list_flights_use_case: Arc<ListFlightsUseCase>,
    pub get_flight_by_id_use_case: Arc<GetFlightByIdUseCase>,
    pub partial_update_flight_use_case: Arc<PartialUpdateFlightUseCase>,
    pub delete_flight_use_case: Arc<DeleteFlightUseCase>,
    pub create_passenger_use_case: Arc<CreatePassengerUseCase>,
    pub list_passengers_use_case: Arc<ListPassengersUseCase>,
    pub get_passenger_by_id_use_case: Arc<GetPassengerByIdUseCase>,
    pub partial_update_passenger_use_case: Arc<PartialUpdatePassengerUseCase>,
    pub delete_passenger_use_case: Arc<DeletePassengerUseCase>,
}

impl AppState {
    /// Wire every use case to the given stores
    #[must_use]
    pub fn new(
        flight_repository: Arc<dyn FlightRepository>,
        passenger_repository: Arc<dyn PassengerRepository>,
    ) -> Self {
        Self {
            create_flight_use_case: Arc::new(CreateFlightUseCase::new(flight_repository.clone())),
            list_flights_use_case: Arc::new(ListFlightsUseCase::new(flight_repository.clone())),
            get_flight_by_id_use_case: Arc::new(GetFlightByIdUseCase::new(flight_repository.clone())),
            partial_update_flight_use_case: Arc::new(PartialUpdateFlightUseCase::new(
                flight_repository.clone(),
            )),
            delete_flight_use_case: Arc::new(DeleteFlightUseCase::new(flight_repository)),
            create_passenger_use_case: Arc::new(CreatePassengerUseCase::new(
                passenger_repository.clone(),
            )),
            list_passengers_use_case: Arc::new(ListPassengersUseCase::new(
                passenger_repository.clone(),
            )),
            get_passenger_by_id_use_case: Arc::new(GetPassengerByIdUseCase::new(
                passenger_repository.clone(),
            )),
            partial_update_passenger_use_case: Arc::new(PartialUpdatePassengerUseCase::new(
                passenger_repository.clone(),
            )),
            delete_passenger_use_case: Arc::new(DeletePassengerUseCase::new(passenger_repository)),
        }
    }
}

/// Build the full application router with its HTTP layers
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::root::router())
        .merge(handlers::flights::router())
        .merge(handlers::passengers::router())
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
