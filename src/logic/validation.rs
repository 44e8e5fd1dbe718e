//! Form validation: checks fields in a fixed order and reports the first violation.

use crate::models::{
    TournamentFields, TournamentForm, ValidationError, VenueFields, VenueForm, DATE_FORMAT,
};
use chrono::NaiveDate;
use std::num::IntErrorKind;

/// Validate a tournament form: name, then start/end dates, then the date range.
pub fn validate_tournament(form: &TournamentForm) -> Result<TournamentFields, ValidationError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(ValidationError::new("Tournament name is required"));
    }
    let start = form.start_date.trim();
    if start.is_empty() {
        return Err(ValidationError::new("Start date is required"));
    }
    let end = form.end_date.trim();
    if end.is_empty() {
        return Err(ValidationError::new("End date is required"));
    }
    let start_date = parse_date(start, "Start date is not a valid date")?;
    let end_date = parse_date(end, "End date is not a valid date")?;
    if start_date >= end_date {
        return Err(ValidationError::new("End date must be after start date"));
    }
    let location = form.location.trim();
    Ok(TournamentFields {
        name: name.to_string(),
        location: (!location.is_empty()).then(|| location.to_string()),
        start_date,
        end_date,
        status: form.status,
    })
}

/// Validate a venue form: name, city, then capacity (present and > 0).
pub fn validate_venue(form: &VenueForm) -> Result<VenueFields, ValidationError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(ValidationError::new("Venue name is required"));
    }
    let city = form.city.trim();
    if city.is_empty() {
        return Err(ValidationError::new("City is required"));
    }
    let capacity = form.capacity.trim();
    if capacity.is_empty() {
        return Err(ValidationError::new("Capacity is required"));
    }
    let capacity = parse_capacity(capacity)?;
    Ok(VenueFields {
        name: name.to_string(),
        city: city.to_string(),
        capacity,
        status: form.status,
    })
}

fn parse_date(s: &str, message: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| ValidationError::new(message))
}

/// Positive whole number. Overflow is reported separately from "not positive".
fn parse_capacity(s: &str) -> Result<u64, ValidationError> {
    match s.parse::<u64>() {
        Ok(0) => Err(ValidationError::new("Capacity must be a positive number")),
        Ok(n) => Ok(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            Err(ValidationError::new("Capacity is too large"))
        }
        Err(_) => Err(ValidationError::new("Capacity must be a positive number")),
    }
}
