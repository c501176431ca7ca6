//! HTTP Handlers

pub mod flights;
pub mod passengers;
pub mod root;
