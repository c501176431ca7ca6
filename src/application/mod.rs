//! Application Layer
//!
//! One use case per flight or passenger operation. Use cases talk to the
//! stores only through the domain gateway traits.

pub mod use_cases;
