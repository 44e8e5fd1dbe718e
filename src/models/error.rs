//! Errors surfaced by the admin forms and catalog.

use crate::models::{TournamentId, VenueId};
use std::fmt;

/// A single user-visible validation message (first failing field wins).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Errors that can occur during catalog operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AdminError {
    /// Form did not pass validation; nothing was changed.
    Validation(ValidationError),
    TournamentNotFound(TournamentId),
    VenueNotFound(VenueId),
    /// Venue still has matches scheduled.
    VenueInUse { match_count: u32 },
    /// CSV rendering failed.
    Export(String),
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminError::Validation(e) => write!(f, "{}", e),
            AdminError::TournamentNotFound(_) => write!(f, "Tournament not found"),
            AdminError::VenueNotFound(_) => write!(f, "Venue not found"),
            AdminError::VenueInUse { match_count } => write!(
                f,
                "Cannot delete a venue with scheduled matches ({} match(es))",
                match_count
            ),
            AdminError::Export(msg) => write!(f, "Export failed: {}", msg),
        }
    }
}

impl std::error::Error for AdminError {}

impl From<ValidationError> for AdminError {
    fn from(e: ValidationError) -> Self {
        AdminError::Validation(e)
    }
}
