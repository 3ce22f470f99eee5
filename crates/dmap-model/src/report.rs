//! The committed incident report record.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::taxonomy::{Category, IncidentKind};

/// A geographic position in IEEE-754 double-precision degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// An immutable, committed incident report.
///
/// Reports are created only through [`Report::new`], which enforces the
/// kind/category pairing; fields are never mutated afterwards. The
/// coordinate is the reporter's observed position at commit time, and the
/// timestamp comes from the committing clock, not from user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    coordinate: Coordinate,
    category: Category,
    kind: IncidentKind,
    description: String,
    recorded_at: NaiveDateTime,
}

impl Report {
    /// Build a report, rejecting a kind outside the category's vocabulary.
    pub fn new(
        coordinate: Coordinate,
        category: Category,
        kind: IncidentKind,
        description: impl Into<String>,
        recorded_at: NaiveDateTime,
    ) -> Result<Self, ModelError> {
        if kind.category() != category {
            return Err(ModelError::KindOutOfVocabulary {
                kind: kind.as_str().to_string(),
                category,
            });
        }
        Ok(Self {
            coordinate,
            category,
            kind,
            description: description.into(),
            recorded_at,
        })
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn kind(&self) -> IncidentKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn recorded_at(&self) -> NaiveDateTime {
        self.recorded_at
    }

    /// Calendar date of the report in ISO form (`YYYY-MM-DD`).
    pub fn date_string(&self) -> String {
        self.recorded_at.format("%Y-%m-%d").to_string()
    }

    /// Clock time of the report (`HH:MM`).
    pub fn time_string(&self) -> String {
        self.recorded_at.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 9)
            .unwrap()
            .and_hms_opt(12, 5, 33)
            .unwrap()
    }

    #[test]
    fn date_and_time_strings() {
        let report = Report::new(
            Coordinate::new(40.0, -75.0),
            Category::Disaster,
            IncidentKind::Flood,
            "river overflow",
            noon(),
        )
        .unwrap();
        assert_eq!(report.date_string(), "2025-03-09");
        assert_eq!(report.time_string(), "12:05");
    }

    #[test]
    fn rejects_kind_from_other_vocabulary() {
        let result = Report::new(
            Coordinate::new(0.0, 0.0),
            Category::Crime,
            IncidentKind::Flood,
            "",
            noon(),
        );
        assert!(matches!(
            result,
            Err(ModelError::KindOutOfVocabulary { .. })
        ));
    }
}
