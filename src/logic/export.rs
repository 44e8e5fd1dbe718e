//! CSV export of the listing pages.

use crate::models::{AdminError, Tournament, Venue, DATE_FORMAT};

fn into_string(wtr: csv::Writer<Vec<u8>>) -> Result<String, AdminError> {
    let bytes = wtr
        .into_inner()
        .map_err(|e| AdminError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AdminError::Export(e.to_string()))
}

/// Render tournaments as CSV with a header row.
pub fn tournaments_csv<'a>(
    tournaments: impl IntoIterator<Item = &'a Tournament>,
) -> Result<String, AdminError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["id", "name", "location", "start_date", "end_date", "status"])
        .map_err(|e| AdminError::Export(e.to_string()))?;
    for t in tournaments {
        let id = t.id.to_string();
        let start = t.start_date.format(DATE_FORMAT).to_string();
        let end = t.end_date.format(DATE_FORMAT).to_string();
        wtr.write_record([
            id.as_str(),
            t.name.as_str(),
            t.location.as_deref().unwrap_or(""),
            start.as_str(),
            end.as_str(),
            t.status.as_str(),
        ])
        .map_err(|e| AdminError::Export(e.to_string()))?;
    }
    into_string(wtr)
}

/// Render venues as CSV with a header row.
pub fn venues_csv<'a>(venues: impl IntoIterator<Item = &'a Venue>) -> Result<String, AdminError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["id", "name", "city", "capacity", "status", "match_count"])
        .map_err(|e| AdminError::Export(e.to_string()))?;
    for v in venues {
        let id = v.id.to_string();
        let capacity = v.capacity.to_string();
        let matches = v.match_count.to_string();
        wtr.write_record([
            id.as_str(),
            v.name.as_str(),
            v.city.as_str(),
            capacity.as_str(),
            v.status.as_str(),
            matches.as_str(),
        ])
        .map_err(|e| AdminError::Export(e.to_string()))?;
    }
    into_string(wtr)
}
