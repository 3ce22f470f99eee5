//! Incident category and kind taxonomy.
//!
//! Each category owns a closed vocabulary of incident kinds. The first
//! vocabulary entry is the default selection when a report draft opens,
//! and every committed report must pair a kind with its owning category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Top-level incident classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Crime,
    Disaster,
}

const CRIME_KINDS: [IncidentKind; 5] = [
    IncidentKind::Theft,
    IncidentKind::Assault,
    IncidentKind::Vandalism,
    IncidentKind::SuspiciousActivity,
    IncidentKind::OtherCrime,
];

const DISASTER_KINDS: [IncidentKind; 5] = [
    IncidentKind::Flood,
    IncidentKind::Fire,
    IncidentKind::Earthquake,
    IncidentKind::Storm,
    IncidentKind::OtherDisaster,
];

impl Category {
    /// Both categories, in presentation order.
    pub const ALL: [Category; 2] = [Category::Crime, Category::Disaster];

    /// Returns the canonical category name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Crime => "Crime",
            Category::Disaster => "Disaster",
        }
    }

    /// The closed vocabulary of kinds for this category, in presentation order.
    pub fn kinds(&self) -> &'static [IncidentKind] {
        match self {
            Category::Crime => &CRIME_KINDS,
            Category::Disaster => &DISASTER_KINDS,
        }
    }

    /// The kind pre-selected when a draft opens for this category.
    pub fn default_kind(&self) -> IncidentKind {
        self.kinds()[0]
    }

    /// Parse a kind label within this category's vocabulary.
    ///
    /// Parsing is category-scoped because the label "Other" exists in both
    /// vocabularies. Matching is case-insensitive.
    pub fn parse_kind(&self, label: &str) -> Result<IncidentKind, ModelError> {
        let trimmed = label.trim();
        self.kinds()
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::KindOutOfVocabulary {
                kind: label.to_string(),
                category: *self,
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CRIME" => Ok(Category::Crime),
            "DISASTER" => Ok(Category::Disaster),
            _ => Err(ModelError::UnknownCategory(s.to_string())),
        }
    }
}

/// Category-scoped incident sub-classification.
///
/// The `Other*` variants both render as "Other"; they stay distinct so a
/// kind always knows its owning category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncidentKind {
    Theft,
    Assault,
    Vandalism,
    SuspiciousActivity,
    OtherCrime,
    Flood,
    Fire,
    Earthquake,
    Storm,
    OtherDisaster,
}

impl IncidentKind {
    /// Returns the user-facing label.
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentKind::Theft => "Theft",
            IncidentKind::Assault => "Assault",
            IncidentKind::Vandalism => "Vandalism",
            IncidentKind::SuspiciousActivity => "Suspicious Activity",
            IncidentKind::Flood => "Flood",
            IncidentKind::Fire => "Fire",
            IncidentKind::Earthquake => "Earthquake",
            IncidentKind::Storm => "Storm",
            IncidentKind::OtherCrime | IncidentKind::OtherDisaster => "Other",
        }
    }

    /// Returns the category whose vocabulary contains this kind.
    pub fn category(&self) -> Category {
        match self {
            IncidentKind::Theft
            | IncidentKind::Assault
            | IncidentKind::Vandalism
            | IncidentKind::SuspiciousActivity
            | IncidentKind::OtherCrime => Category::Crime,
            IncidentKind::Flood
            | IncidentKind::Fire
            | IncidentKind::Earthquake
            | IncidentKind::Storm
            | IncidentKind::OtherDisaster => Category::Disaster,
        }
    }
}

impl fmt::Display for IncidentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_from_str() {
        assert_eq!("Crime".parse::<Category>().unwrap(), Category::Crime);
        assert_eq!("DISASTER".parse::<Category>().unwrap(), Category::Disaster);
        assert!(" crime ".parse::<Category>().is_ok());
        assert!("Weather".parse::<Category>().is_err());
    }

    #[test]
    fn default_kind_is_first_vocabulary_entry() {
        assert_eq!(Category::Crime.default_kind(), IncidentKind::Theft);
        assert_eq!(Category::Disaster.default_kind(), IncidentKind::Flood);
    }

    #[test]
    fn every_kind_belongs_to_its_vocabulary() {
        for category in Category::ALL {
            for kind in category.kinds() {
                assert_eq!(kind.category(), category);
            }
        }
    }

    #[test]
    fn parse_kind_is_category_scoped() {
        assert_eq!(
            Category::Crime.parse_kind("suspicious activity").unwrap(),
            IncidentKind::SuspiciousActivity
        );
        assert_eq!(
            Category::Crime.parse_kind("Other").unwrap(),
            IncidentKind::OtherCrime
        );
        assert_eq!(
            Category::Disaster.parse_kind("Other").unwrap(),
            IncidentKind::OtherDisaster
        );
        assert!(matches!(
            Category::Disaster.parse_kind("Theft"),
            Err(ModelError::KindOutOfVocabulary { .. })
        ));
    }
}
