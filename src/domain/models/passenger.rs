//! Passenger Domain Model
//!
//! Represents a traveller and the flights they are booked on.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::flight::FlightId;

/// Newtype wrapper for Passenger ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PassengerId(Uuid);

impl PassengerId {
    /// Create a new random PassengerId
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a PassengerId from an existing UUID
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

impl Default for PassengerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PassengerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for PassengerId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl TryFrom<&str> for PassengerId {
    type Error = uuid::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(Uuid::parse_str(value)?))
    }
}

/// Data required to create a new Passenger
#[derive(Debug, Clone)]
pub struct CreatePassengerData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub passport_number: String,
    pub flights: Vec<FlightId>,
}

/// Data for patching an existing Passenger (all fields optional)
#[derive(Debug, Clone, Default)]
pub struct UpdatePassengerData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub passport_number: Option<String>,
    pub flights: Option<Vec<FlightId>>,
}

/// Exact-match filters for listing passengers
///
/// `birth_date` is matched against the `YYYY-MM-DD` rendering of the
/// stored date, so an unparseable filter simply matches nothing.
#[derive(Debug, Clone, Default)]
pub struct PassengerFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<String>,
}

impl PassengerFilter {
    /// Returns true when every supplied filter equals the passenger's field
    #[must_use]
    pub fn matches(&self, passenger: &Passenger) -> bool {
        let eq = |filter: &Option<String>, value: &str| filter.as_deref().map_or(true, |f| f == value);

        eq(&self.first_name, passenger.first_name())
            && eq(&self.last_name, passenger.last_name())
            && eq(&self.email, passenger.email())
            && eq(&self.phone, passenger.phone())
            && self
                .birth_date
                .as_deref()
                .map_or(true, |f| passenger.birth_date().to_string() == f)
    }
}

/// Passenger domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    id: PassengerId,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    birth_date: NaiveDate,
    passport_number: String,
    flights: Vec<FlightId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Passenger {
    /// Create a new Passenger with a fresh id
    #[must_use]
    pub fn new(data: CreatePassengerData) -> Self {
        let now = Utc::now();
        Self {
            id: PassengerId::new(),
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            phone: data.phone,
            birth_date: data.birth_date,
            passport_number: data.passport_number,
            flights: data.flights,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a patch, returning a new instance with `updated_at` refreshed
    #[must_use]
    pub fn with_updates(self, data: UpdatePassengerData) -> Self {
        Self {
            id: self.id,
            first_name: data.first_name.unwrap_or(self.first_name),
            last_name: data.last_name.unwrap_or(self.last_name),
            email: data.email.unwrap_or(self.email),
            phone: data.phone.unwrap_or(self.phone),
            birth_date: data.birth_date.unwrap_or(self.birth_date),
            passport_number: data.passport_number.unwrap_or(self.passport_number),
            flights: data.flights.unwrap_or(self.flights),
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> &PassengerId {
        &self.id
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    #[must_use]
    pub fn passport_number(&self) -> &str {
        &self.passport_number
    }

    #[must_use]
    pub fn flights(&self) -> &[FlightId] {
        &self.flights
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
