//! Batch rating of driver rosters exported as CSV (`Driver,Late Deliveries`).

use super::rating::{rate_driver, Driver, DriverRating};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read driver roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid driver roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("driver roster line {line} is invalid: {source}")]
    InvalidRow { line: u64, source: csv::Error },
    #[error("driver roster line {line} has no driver name")]
    MissingDriver { line: u64 },
}

impl RosterImportError {
    /// CSV line the failure points at, when it is tied to a row.
    pub fn line(&self) -> Option<u64> {
        match self {
            Self::InvalidRow { line, .. } | Self::MissingDriver { line } => Some(*line),
            Self::Csv(err) => err.position().map(|pos| pos.line()),
            Self::Io(_) => None,
        }
    }
}

/// One roster row paired with the rating it earned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatedDriver {
    pub name: String,
    pub driver: Driver,
    pub rating: DriverRating,
}

impl RatedDriver {
    pub fn view(&self) -> RatedDriverView {
        RatedDriverView {
            driver: self.name.clone(),
            late_deliveries: self.driver.number_of_late_deliveries,
            rating: self.rating.value(),
            rating_label: self.rating.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatedDriverView {
    pub driver: String,
    pub late_deliveries: u32,
    pub rating: u8,
    pub rating_label: &'static str,
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Driver")]
    driver: String,
    #[serde(rename = "Late Deliveries")]
    late_deliveries: u32,
}

pub struct DriverRoster;

impl DriverRoster {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RatedDriver>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RatedDriver>, RosterImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut rated = Vec::new();

        for result in csv_reader.records() {
            let record = result?;
            let line = record.position().map(|pos| pos.line()).unwrap_or_default();
            let row: RosterRow = record
                .deserialize(Some(&headers))
                .map_err(|source| RosterImportError::InvalidRow { line, source })?;

            if row.driver.is_empty() {
                return Err(RosterImportError::MissingDriver { line });
            }

            let driver = Driver::new(row.late_deliveries);
            rated.push(RatedDriver {
                name: row.driver,
                rating: rate_driver(&driver),
                driver,
            });
        }

        let elevated = rated
            .iter()
            .filter(|entry| entry.rating == DriverRating::Elevated)
            .count();
        info!(drivers = rated.len(), elevated, "driver roster rated");

        Ok(rated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn columns_may_appear_in_any_order() {
        let rated = DriverRoster::from_reader(Cursor::new(
            "Late Deliveries,Driver\n6,Ana\n",
        ))
        .expect("roster parses");
        assert_eq!(rated.len(), 1);
        assert_eq!(rated[0].name, "Ana");
        assert_eq!(rated[0].rating, DriverRating::Elevated);
    }

    #[test]
    fn cells_are_trimmed() {
        let rated = DriverRoster::from_reader(Cursor::new(
            "Driver , Late Deliveries\n  Rui  ,  5 \n",
        ))
        .expect("roster parses");
        assert_eq!(rated[0].name, "Rui");
        assert_eq!(rated[0].driver.number_of_late_deliveries, 5);
        assert_eq!(rated[0].rating, DriverRating::Standard);
    }

    #[test]
    fn blank_driver_reports_its_line() {
        let err = DriverRoster::from_reader(Cursor::new(
            "Driver,Late Deliveries\nAna,1\n,3\n",
        ))
        .expect_err("blank driver rejected");
        assert!(matches!(err, RosterImportError::MissingDriver { line: 3 }));
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn unparseable_count_reports_its_line() {
        let err = DriverRoster::from_reader(Cursor::new(
            "Driver,Late Deliveries\nAna,1\nRui,2\nIvo,many\n",
        ))
        .expect_err("count must be numeric");
        assert!(matches!(err, RosterImportError::InvalidRow { line: 4, .. }));
        assert!(err.to_string().starts_with("driver roster line 4 is invalid"));
    }

    #[test]
    fn header_only_roster_is_empty() {
        let rated = DriverRoster::from_reader(Cursor::new("Driver,Late Deliveries\n"))
            .expect("roster parses");
        assert!(rated.is_empty());
    }

    #[test]
    fn view_flattens_rating() {
        let rated = RatedDriver {
            name: "Ines".to_string(),
            driver: Driver::new(2),
            rating: DriverRating::Standard,
        };
        let view = rated.view();
        assert_eq!(view.driver, "Ines");
        assert_eq!(view.rating, 1);
        assert_eq!(view.rating_label, "Standard");
    }
}
