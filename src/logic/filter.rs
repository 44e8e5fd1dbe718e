//! Listing search: case-insensitive substring match on name or location.

use crate::models::{Tournament, TournamentStatus, Venue, VenueStatus};

/// Something a listing page can search by name and location.
pub trait Searchable {
    fn name(&self) -> &str;
    fn location(&self) -> Option<&str>;
}

impl Searchable for Tournament {
    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl Searchable for Venue {
    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> Option<&str> {
        Some(&self.city)
    }
}

/// True when `term` (already lowercased) occurs in the item's name or location.
fn matches_term<T: Searchable>(item: &T, term: &str) -> bool {
    item.name().to_lowercase().contains(term)
        || item
            .location()
            .is_some_and(|loc| loc.to_lowercase().contains(term))
}

/// Items whose name or location contains `term`, ignoring case. Input order is kept.
/// A blank term keeps everything.
pub fn filter_by_term<'a, T: Searchable>(items: &'a [T], term: &str) -> Vec<&'a T> {
    let term = term.trim().to_lowercase();
    items
        .iter()
        .filter(|item| term.is_empty() || matches_term(*item, &term))
        .collect()
}

pub fn filter_tournaments_by_status<'a>(
    items: impl IntoIterator<Item = &'a Tournament>,
    status: TournamentStatus,
) -> Vec<&'a Tournament> {
    items.into_iter().filter(|t| t.status == status).collect()
}

pub fn filter_venues_by_status<'a>(
    items: impl IntoIterator<Item = &'a Venue>,
    status: VenueStatus,
) -> Vec<&'a Venue> {
    items.into_iter().filter(|v| v.status == status).collect()
}
