//! Flight Domain Model
//!
//! Represents a scheduled flight tracked by the API.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Newtype wrapper for Flight ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlightId(Uuid);

impl FlightId {
    /// Create a new random FlightId
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a FlightId from an existing UUID
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for FlightId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FlightId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for FlightId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl TryFrom<&str> for FlightId {
    type Error = uuid::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(Uuid::parse_str(value)?))
    }
}

/// Data required to create a new Flight
///
/// `id` is normally left empty so the store assigns one; a caller-supplied
/// id is honored but must not collide with an existing flight.
#[derive(Debug, Clone)]
pub struct CreateFlightData {
    pub id: Option<FlightId>,
    pub flight_number: String,
    pub boarding_time: String,
    pub departure_time: String,
    pub arrival_time: Option<String>,
    pub departure_airport: Option<String>,
    pub arrival_airport: String,
}

/// Data for patching an existing Flight (all fields optional)
#[derive(Debug, Clone, Default)]
pub struct UpdateFlightData {
    pub flight_number: Option<String>,
    pub boarding_time: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub departure_airport: Option<String>,
    pub arrival_airport: Option<String>,
}

/// Exact-match filters for listing flights; absent filters match everything
#[derive(Debug, Clone, Default)]
pub struct FlightFilter {
    pub flight_number: Option<String>,
    pub boarding_time: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub departure_airport: Option<String>,
    pub arrival_airport: Option<String>,
}

fn matches_required(filter: Option<&String>, value: &str) -> bool {
    filter.map_or(true, |expected| expected == value)
}

fn matches_optional(filter: Option<&String>, value: Option<&str>) -> bool {
    filter.map_or(true, |expected| value == Some(expected.as_str()))
}

impl FlightFilter {
    /// Returns true when every supplied filter equals the flight's field
    #[must_use]
    pub fn matches(&self, flight: &Flight) -> bool {
        matches_required(self.flight_number.as_ref(), flight.flight_number())
            && matches_required(self.boarding_time.as_ref(), flight.boarding_time())
            && matches_required(self.departure_time.as_ref(), flight.departure_time())
            && matches_optional(self.arrival_time.as_ref(), flight.arrival_time())
            && matches_optional(self.departure_airport.as_ref(), flight.departure_airport())
            && matches_required(self.arrival_airport.as_ref(), flight.arrival_airport())
    }
}

/// Flight domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    id: FlightId,
    flight_number: String,
    boarding_time: String,
    departure_time: String,
    arrival_time: Option<String>,
    departure_airport: Option<String>,
    arrival_airport: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Flight {
    /// Create a new Flight from creation data
    #[must_use]
    pub fn new(data: CreateFlightData) -> Self {
        let now = Utc::now();
        Self {
            id: data.id.unwrap_or_default(),
            flight_number: data.flight_number,
            boarding_time: data.boarding_time,
            departure_time: data.departure_time,
            arrival_time: data.arrival_time,
            departure_airport: data.departure_airport,
            arrival_airport: data.arrival_airport,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a patch, returning a new instance with `updated_at` refreshed
    #[must_use]
    pub fn with_updates(self, data: UpdateFlightData) -> Self {
        Self {
            id: self.id,
            flight_number: data.flight_number.unwrap_or(self.flight_number),
            boarding_time: data.boarding_time.unwrap_or(self.boarding_time),
            departure_time: data.departure_time.unwrap_or(self.departure_time),
            arrival_time: data.arrival_time.or(self.arrival_time),
            departure_airport: data.departure_airport.or(self.departure_airport),
            arrival_airport: data.arrival_airport.unwrap_or(self.arrival_airport),
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> &FlightId {
        &self.id
    }

    #[must_use]
    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    #[must_use]
    pub fn boarding_time(&self) -> &str {
        &self.boarding_time
    }

    #[must_use]
    pub fn departure_time(&self) -> &str {
        &self.departure_time
    }

    #[must_use]
    pub fn arrival_time(&self) -> Option<&str> {
        self.arrival_time.as_deref()
    }

    #[must_use]
    pub fn departure_airport(&self) -> Option<&str> {
        self.departure_airport.as_deref()
    }

    #[must_use]
    pub fn arrival_airport(&self) -> &str {
        &self.arrival_airport
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_flight_data() -> CreateFlightData {
        CreateFlightData {
            id: None,
            flight_number: "UA1250".to_string(),
            boarding_time: "7:00AM".to_string(),
            departure_time: "7:32AM".to_string(),
            arrival_time: Some("11:38AM".to_string()),
            departure_airport: Some("JFK".to_string()),
            arrival_airport: "SFO".to_string(),
        }
    }

    #[test]
    fn test_flight_id_new() {
        let id1 = FlightId::new();
        let id2 = FlightId::new();
        assert_ne!(id1, id2);
        assert_eq!(id1.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn test_flight_id_try_from_str() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = FlightId::try_from(uuid_str).unwrap();
        assert_eq!(id.to_string(), uuid_str);
        assert!(FlightId::try_from("UA1250").is_err());
    }

    #[test]
    fn test_flight_new_generates_id_and_timestamps() {
        let data = create_test_flight_data();
        let flight = Flight::new(data.clone());

        assert_eq!(flight.flight_number(), data.flight_number);
        assert_eq!(flight.boarding_time(), data.boarding_time);
        assert_eq!(flight.departure_time(), data.departure_time);
        assert_eq!(flight.arrival_time(), Some("11:38AM"));
        assert_eq!(flight.departure_airport(), Some("JFK"));
        assert_eq!(flight.arrival_airport(), data.arrival_airport);
        assert_eq!(flight.created_at(), flight.updated_at());
    }

    #[test]
    fn test_flight_new_keeps_supplied_id() {
        let id = FlightId::new();
        let flight = Flight::new(CreateFlightData {
            id: Some(id),
            ..create_test_flight_data()
        });
        assert_eq!(flight.id(), &id);
    }

    #[test]
    fn test_flight_with_updates_only_touches_supplied_fields() {
        let flight = Flight::new(create_test_flight_data());
        let original = flight.clone();

        let updated = flight.with_updates(UpdateFlightData {
            arrival_time: Some("4:23AM".to_string()),
            ..Default::default()
        });

        assert_eq!(updated.arrival_time(), Some("4:23AM"));
        assert_eq!(updated.id(), original.id());
        assert_eq!(updated.flight_number(), original.flight_number());
        assert_eq!(updated.boarding_time(), original.boarding_time());
        assert_eq!(updated.departure_time(), original.departure_time());
        assert_eq!(updated.departure_airport(), original.departure_airport());
        assert_eq!(updated.arrival_airport(), original.arrival_airport());
        assert_eq!(updated.created_at(), original.created_at());
        assert!(updated.updated_at() >= original.updated_at());
    }

    #[test]
    fn test_filter_matches() {
        let flight = Flight::new(create_test_flight_data());

        assert!(FlightFilter::default().matches(&flight));

        let by_number = FlightFilter {
            flight_number: Some("UA1250".to_string()),
            arrival_airport: Some("SFO".to_string()),
            ..Default::default()
        };
        assert!(by_number.matches(&flight));

        let wrong_airport = FlightFilter {
            flight_number: Some("UA1250".to_string()),
            arrival_airport: Some("LAX".to_string()),
            ..Default::default()
        };
        assert!(!wrong_airport.matches(&flight));
    }

    #[test]
    fn test_filter_on_absent_optional_field_never_matches() {
        let flight = Flight::new(CreateFlightData {
            arrival_time: None,
            ..create_test_flight_data()
        });
        let filter = FlightFilter {
            arrival_time: Some(String::new()),
            ..Default::default()
        };
        assert!(!filter.matches(&flight));
    }
}
