//! Common test utilities for e2e tests
//!
//! Builds the full application router over fresh in-memory stores and
//! offers helpers for driving it with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tower::util::ServiceExt;

use passenger_flight_api::infrastructure::driven_adapters::{
    InMemoryFlightRepository, InMemoryPassengerRepository,
};
use passenger_flight_api::infrastructure::driving_adapters::api_rest::{self, AppState};

/// Test application context
pub struct TestApp {
    pub router: Router,
}

/// Status, headers and raw body of a test response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Deserialize the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Response body is not the expected JSON")
    }
}

impl TestApp {
    /// Create a new test application with empty stores
    pub fn new() -> Self {
        let state = AppState::new(
            Arc::new(InMemoryFlightRepository::new()),
            Arc::new(InMemoryPassengerRepository::new()),
        );

        Self {
            router: api_rest::router(state),
        }
    }

    /// Send a request with an optional JSON body
    pub async fn send(&self, method: Method, uri: &str, body: Option<String>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        let request = builder
            .body(body.map_or_else(Body::empty, Body::from))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed to respond");

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body")
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn post_json<T: Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        let body = serde_json::to_string(body).expect("Failed to serialize request");
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn patch_json<T: Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        let body = serde_json::to_string(body).expect("Failed to serialize request");
        self.send(Method::PATCH, uri, Some(body)).await
    }

    /// Create a flight and return the stored representation
    pub async fn create_flight(&self, request: &CreateFlightRequest) -> FlightResponse {
        let response = self.post_json("/flights", request).await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.json()
    }

    /// Create a passenger and return the stored representation
    pub async fn create_passenger(&self, request: &CreatePassengerRequest) -> PassengerResponse {
        let response = self.post_json("/passengers", request).await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.json()
    }
}

/// Helper struct for creating flight request bodies
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFlightRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub flight_number: String,
    pub boarding_time: String,
    pub departure_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_airport: Option<String>,
    pub arrival_airport: String,
}

impl Default for CreateFlightRequest {
    fn default() -> Self {
        Self {
            id: None,
            flight_number: "UA1234".to_string(),
            boarding_time: "3:15PM".to_string(),
            departure_time: "3:45PM".to_string(),
            arrival_time: Some("4:53PM".to_string()),
            departure_airport: Some("LGA".to_string()),
            arrival_airport: "ORD".to_string(),
        }
    }
}

impl CreateFlightRequest {
    pub fn with_flight_number(mut self, flight_number: &str) -> Self {
        self.flight_number = flight_number.to_string();
        self
    }

    pub fn with_arrival_airport(mut self, arrival_airport: &str) -> Self {
        self.arrival_airport = arrival_airport.to_string();
        self
    }
}

/// Helper struct for partial flight update request bodies
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchFlightRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boarding_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_airport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_airport: Option<String>,
}

/// Flight response structure for deserialization
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightResponse {
    pub id: String,
    pub flight_number: String,
    pub boarding_time: String,
    pub departure_time: String,
    pub arrival_time: Option<String>,
    pub departure_airport: Option<String>,
    pub arrival_airport: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Helper struct for creating passenger request bodies
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePassengerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub passport_number: String,
    pub flights: Vec<String>,
}

impl Default for CreatePassengerRequest {
    fn default() -> Self {
        Self {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace.hopper@navy.mil".to_string(),
            phone: "+1-202-555-0101".to_string(),
            birth_date: "1906-12-09".to_string(),
            passport_number: "B12345678".to_string(),
            flights: vec![],
        }
    }
}

impl CreatePassengerRequest {
    pub fn ada() -> Self {
        Self {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+1-212-555-0199".to_string(),
            birth_date: "1815-12-10".to_string(),
            passport_number: "A12345678".to_string(),
            flights: vec![],
        }
    }
}

/// Helper struct for partial passenger update request bodies
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchPassengerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flights: Option<Vec<String>>,
}

/// Passenger response structure for deserialization
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub passport_number: String,
    pub flights: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
