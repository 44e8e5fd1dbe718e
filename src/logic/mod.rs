//! Admin business logic: form validation, listing search, CSV export.

mod export;
mod filter;
mod validation;

pub use export::{tournaments_csv, venues_csv};
pub use filter::{filter_by_term, filter_tournaments_by_status, filter_venues_by_status, Searchable};
pub use validation::{validate_tournament, validate_venue};
