//! Driving Adapters
//!
//! The REST API (routes, handlers, DTOs and middleware) that drives the
//! flight and passenger use cases.

pub mod api_rest;
