//! Form state: raw editable fields of one entity, exactly as typed in the admin pages.

use crate::models::{Tournament, TournamentStatus, Venue, VenueStatus};
use serde::{Deserialize, Serialize};

/// Date format used by the HTML date inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Create/edit tournament form. Dates are `YYYY-MM-DD` text (empty when unset).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub status: TournamentStatus,
}

impl TournamentForm {
    /// Blank create form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an existing tournament into the edit form.
    pub fn from_tournament(t: &Tournament) -> Self {
        Self {
            name: t.name.clone(),
            location: t.location.clone().unwrap_or_default(),
            start_date: t.start_date.format(DATE_FORMAT).to_string(),
            end_date: t.end_date.format(DATE_FORMAT).to_string(),
            status: t.status,
        }
    }
}

/// Create/edit venue form. Capacity is the raw number input text.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub capacity: String,
    #[serde(default)]
    pub status: VenueStatus,
}

impl VenueForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_venue(v: &Venue) -> Self {
        Self {
            name: v.name.clone(),
            city: v.city.clone(),
            capacity: v.capacity.to_string(),
            status: v.status,
        }
    }
}
