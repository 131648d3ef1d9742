use crate::utils::error::GuardResult;
use crate::utils::guard;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

pub const DEFAULT_VENUE_ID: i32 = 0;
pub const DEFAULT_VENUE_NAME: &str = "Evento Online";
pub const DEFAULT_VENUE_ADDRESS: &str = "Virtual";
pub const DEFAULT_VENUE_CAPACITY: i32 = 1000;

static DEFAULT_VENUE: OnceLock<Arc<Venue>> = OnceLock::new();

/// A physical or virtual location. Identity is `venue_id`.
#[derive(Debug, Clone)]
pub struct Venue {
    venue_id: i32,
    name: String,
    address: String,
    capacity: i32,
    description: Option<String>,
    parking_info: Option<String>,
}

impl Venue {
    pub fn new(venue_id: i32, name: &str, address: &str, capacity: i32) -> GuardResult<Self> {
        guard::require_positive(venue_id, "venueId")?;
        let name = guard::require_non_blank(Some(name), "name")?;
        let address = guard::require_non_blank(Some(address), "address")?;
        guard::require_positive(capacity, "capacity")?;

        tracing::debug!(venue_id, capacity, "venue created");
        Ok(Self::unchecked(venue_id, name.trim(), address.trim(), capacity))
    }

    // Bypasses the guards; the default venue uses id 0.
    fn unchecked(venue_id: i32, name: &str, address: &str, capacity: i32) -> Self {
        Self {
            venue_id,
            name: name.to_string(),
            address: address.to_string(),
            capacity,
            description: None,
            parking_info: None,
        }
    }

    /// Shared placeholder for online events.
    ///
    /// Built on first call; every call returns a handle to the same instance,
    /// including under concurrent first access.
    pub fn default_venue() -> Arc<Venue> {
        DEFAULT_VENUE
            .get_or_init(|| {
                tracing::trace!("materializing default venue");
                Arc::new(Venue::unchecked(
                    DEFAULT_VENUE_ID,
                    DEFAULT_VENUE_NAME,
                    DEFAULT_VENUE_ADDRESS,
                    DEFAULT_VENUE_CAPACITY,
                ))
            })
            .clone()
    }

    /// True when `venue` is the shared default instance itself.
    pub fn is_default(venue: &Arc<Venue>) -> bool {
        DEFAULT_VENUE
            .get()
            .is_some_and(|default| Arc::ptr_eq(default, venue))
    }

    pub fn venue_id(&self) -> i32 {
        self.venue_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description<'a>(&mut self, description: impl Into<Option<&'a str>>) {
        self.description = guard::try_normalize(description.into());
    }

    pub fn parking_info(&self) -> &str {
        self.parking_info.as_deref().unwrap_or_default()
    }

    pub fn set_parking_info<'a>(&mut self, parking_info: impl Into<Option<&'a str>>) {
        self.parking_info = parking_info.into().map(str::to_string);
    }
}

impl PartialEq for Venue {
    fn eq(&self, other: &Self) -> bool {
        self.venue_id == other.venue_id
    }
}

impl Eq for Venue {}

impl Hash for Venue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.venue_id.hash(state);
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} (Capacidade: {})",
            self.name, self.address, self.capacity
        )
    }
}
