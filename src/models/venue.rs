//! Venue record and its status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a venue.
pub type VenueId = Uuid;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueStatus {
    #[default]
    Active,
    Inactive,
}

impl VenueStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            VenueStatus::Active => "active",
            VenueStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for VenueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VenueStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(VenueStatus::Active),
            "inactive" => Ok(VenueStatus::Inactive),
            other => Err(format!("Unknown venue status: {other}")),
        }
    }
}

/// Validated, typed venue fields (output of the form validator).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VenueFields {
    pub name: String,
    pub city: String,
    /// Always > 0.
    pub capacity: u64,
    pub status: VenueStatus,
}

/// A venue as stored in the catalog.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    pub city: String,
    pub capacity: u64,
    pub status: VenueStatus,
    /// Matches scheduled here. Read-only from the admin forms; a venue with matches cannot be deleted.
    pub match_count: u32,
}

impl Venue {
    /// Create a venue with a fresh id and no matches.
    pub fn new(fields: VenueFields) -> Self {
        Self::with_id(Uuid::new_v4(), fields, 0)
    }

    pub fn with_id(id: VenueId, fields: VenueFields, match_count: u32) -> Self {
        Self {
            id,
            name: fields.name,
            city: fields.city,
            capacity: fields.capacity,
            status: fields.status,
            match_count,
        }
    }

    /// Overwrite editable fields. `id` and `match_count` are kept.
    pub fn apply(&mut self, fields: VenueFields) {
        self.name = fields.name;
        self.city = fields.city;
        self.capacity = fields.capacity;
        self.status = fields.status;
    }

    pub fn can_delete(&self) -> bool {
        self.match_count == 0
    }
}
