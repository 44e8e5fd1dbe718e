//! Data structures for the admin pages: tournaments, venues, their forms and errors.

mod error;
mod form;
mod tournament;
mod venue;

pub use error::{AdminError, ValidationError};
pub use form::{TournamentForm, VenueForm, DATE_FORMAT};
pub use tournament::{Tournament, TournamentFields, TournamentId, TournamentStatus};
pub use venue::{Venue, VenueFields, VenueId, VenueStatus};
