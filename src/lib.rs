//! Tournament admin web app: library with models, form validation, search and the in-memory catalog.

pub mod catalog;
pub mod config;
pub mod logic;
pub mod models;

pub use catalog::Catalog;
pub use config::ServerConfig;
pub use logic::{
    filter_by_term, filter_tournaments_by_status, filter_venues_by_status, tournaments_csv,
    validate_tournament, validate_venue, venues_csv, Searchable,
};
pub use models::{
    AdminError, Tournament, TournamentFields, TournamentForm, TournamentId, TournamentStatus,
    ValidationError, Venue, VenueFields, VenueForm, VenueId, VenueStatus, DATE_FORMAT,
};
