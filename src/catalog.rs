//! In-memory catalog of tournaments and venues, seeded from a hard-coded dummy table.
//! Nothing persists: every process starts from the same seed.

use crate::logic::{filter_by_term, validate_tournament, validate_venue};
use crate::models::{
    AdminError, Tournament, TournamentFields, TournamentForm, TournamentId, TournamentStatus,
    Venue, VenueFields, VenueForm, VenueId, VenueStatus,
};
use chrono::NaiveDate;
use uuid::Uuid;

/// Tournaments and venues in listing (insertion) order.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    tournaments: Vec<Tournament>,
    venues: Vec<Venue>,
}

impl Catalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-filled with the dummy tournaments and venues.
    pub fn seeded() -> Self {
        let mut catalog = Self::new();
        for (name, location, start, end, status) in SEED_TOURNAMENTS {
            if let (Some(start_date), Some(end_date)) = (ymd(*start), ymd(*end)) {
                catalog.tournaments.push(Tournament::new(TournamentFields {
                    name: (*name).to_string(),
                    location: Some((*location).to_string()),
                    start_date,
                    end_date,
                    status: *status,
                }));
            }
        }
        for (name, city, capacity, status, match_count) in SEED_VENUES {
            catalog.venues.push(Venue::with_id(
                Uuid::new_v4(),
                VenueFields {
                    name: (*name).to_string(),
                    city: (*city).to_string(),
                    capacity: *capacity,
                    status: *status,
                },
                *match_count,
            ));
        }
        catalog
    }

    pub fn tournaments(&self) -> &[Tournament] {
        &self.tournaments
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    /// Tournaments whose name or location contains `search` (case-insensitive).
    pub fn list_tournaments(&self, search: &str) -> Vec<&Tournament> {
        filter_by_term(&self.tournaments, search)
    }

    pub fn get_tournament(&self, id: TournamentId) -> Result<&Tournament, AdminError> {
        self.tournaments
            .iter()
            .find(|t| t.id == id)
            .ok_or(AdminError::TournamentNotFound(id))
    }

    /// Validate the form and append a new tournament.
    pub fn create_tournament(&mut self, form: &TournamentForm) -> Result<&Tournament, AdminError> {
        let fields = validate_tournament(form)?;
        self.tournaments.push(Tournament::new(fields));
        let idx = self.tournaments.len() - 1;
        Ok(&self.tournaments[idx])
    }

    /// Validate the form and overwrite the tournament's editable fields in place.
    pub fn update_tournament(
        &mut self,
        id: TournamentId,
        form: &TournamentForm,
    ) -> Result<&Tournament, AdminError> {
        let idx = self
            .tournaments
            .iter()
            .position(|t| t.id == id)
            .ok_or(AdminError::TournamentNotFound(id))?;
        let fields = validate_tournament(form)?;
        self.tournaments[idx].apply(fields);
        Ok(&self.tournaments[idx])
    }

    pub fn delete_tournament(&mut self, id: TournamentId) -> Result<Tournament, AdminError> {
        let idx = self
            .tournaments
            .iter()
            .position(|t| t.id == id)
            .ok_or(AdminError::TournamentNotFound(id))?;
        Ok(self.tournaments.remove(idx))
    }

    /// Venues whose name or city contains `search` (case-insensitive).
    pub fn list_venues(&self, search: &str) -> Vec<&Venue> {
        filter_by_term(&self.venues, search)
    }

    pub fn get_venue(&self, id: VenueId) -> Result<&Venue, AdminError> {
        self.venues
            .iter()
            .find(|v| v.id == id)
            .ok_or(AdminError::VenueNotFound(id))
    }

    /// Validate the form and append a new venue (no matches yet).
    pub fn create_venue(&mut self, form: &VenueForm) -> Result<&Venue, AdminError> {
        let fields = validate_venue(form)?;
        self.venues.push(Venue::new(fields));
        let idx = self.venues.len() - 1;
        Ok(&self.venues[idx])
    }

    /// Validate the form and overwrite the venue's editable fields. Match count is untouched.
    pub fn update_venue(&mut self, id: VenueId, form: &VenueForm) -> Result<&Venue, AdminError> {
        let idx = self
            .venues
            .iter()
            .position(|v| v.id == id)
            .ok_or(AdminError::VenueNotFound(id))?;
        let fields = validate_venue(form)?;
        self.venues[idx].apply(fields);
        Ok(&self.venues[idx])
    }

    /// Remove a venue. Fails with `VenueInUse` while it has matches.
    pub fn delete_venue(&mut self, id: VenueId) -> Result<Venue, AdminError> {
        let idx = self
            .venues
            .iter()
            .position(|v| v.id == id)
            .ok_or(AdminError::VenueNotFound(id))?;
        let venue = &self.venues[idx];
        if !venue.can_delete() {
            return Err(AdminError::VenueInUse {
                match_count: venue.match_count,
            });
        }
        Ok(self.venues.remove(idx))
    }
}

fn ymd(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, crate::models::DATE_FORMAT).ok()
}

/// (name, location, start, end, status)
const SEED_TOURNAMENTS: &[(&str, &str, &str, &str, TournamentStatus)] = &[
    ("Summer Championship", "Central Stadium", "2023-06-15", "2023-07-15", TournamentStatus::Upcoming),
    ("Spring League", "Riverside Park", "2023-03-01", "2023-05-30", TournamentStatus::Active),
    ("Winter Cup", "North Arena", "2022-12-01", "2023-01-15", TournamentStatus::Completed),
    ("Regional Qualifiers", "Harbor Field", "2023-08-05", "2023-08-20", TournamentStatus::Cancelled),
];

/// (name, city, capacity, status, match_count)
const SEED_VENUES: &[(&str, &str, u64, VenueStatus, u32)] = &[
    ("Central Stadium", "Springfield", 25000, VenueStatus::Active, 12),
    ("Riverside Park", "Shelbyville", 8000, VenueStatus::Active, 5),
    ("North Arena", "Capital City", 15000, VenueStatus::Inactive, 0),
    ("Harbor Field", "Ogdenville", 3000, VenueStatus::Active, 0),
];
