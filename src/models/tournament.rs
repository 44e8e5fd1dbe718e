//! Tournament record and its status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Lifecycle label shown on the listing page.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    #[default]
    Upcoming,
    Active,
    Completed,
    Cancelled,
}

impl TournamentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TournamentStatus::Upcoming => "upcoming",
            TournamentStatus::Active => "active",
            TournamentStatus::Completed => "completed",
            TournamentStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TournamentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Ok(TournamentStatus::Upcoming),
            "active" => Ok(TournamentStatus::Active),
            "completed" => Ok(TournamentStatus::Completed),
            "cancelled" => Ok(TournamentStatus::Cancelled),
            other => Err(format!("Unknown tournament status: {other}")),
        }
    }
}

/// Validated, typed tournament fields (output of the form validator).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TournamentFields {
    pub name: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    /// Always strictly after `start_date`.
    pub end_date: NaiveDate,
    pub status: TournamentStatus,
}

/// A tournament as stored in the catalog.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: TournamentStatus,
}

impl Tournament {
    /// Create a tournament with a fresh id from validated fields.
    pub fn new(fields: TournamentFields) -> Self {
        Self::with_id(Uuid::new_v4(), fields)
    }

    pub fn with_id(id: TournamentId, fields: TournamentFields) -> Self {
        Self {
            id,
            name: fields.name,
            location: fields.location,
            start_date: fields.start_date,
            end_date: fields.end_date,
            status: fields.status,
        }
    }

    /// Overwrite editable fields; the id is kept.
    pub fn apply(&mut self, fields: TournamentFields) {
        self.name = fields.name;
        self.location = fields.location;
        self.start_date = fields.start_date;
        self.end_date = fields.end_date;
        self.status = fields.status;
    }
}
