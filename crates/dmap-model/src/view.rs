//! The read-side category filter applied when deriving visible reports.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::taxonomy::Category;

/// Which category of reports the map currently shows.
///
/// Purely a read-side selector; it never affects stored data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewSelector {
    #[default]
    All,
    Crime,
    Disaster,
}

impl ViewSelector {
    /// Returns true if a report of `category` is visible under this selector.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            ViewSelector::All => true,
            ViewSelector::Crime => category == Category::Crime,
            ViewSelector::Disaster => category == Category::Disaster,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewSelector::All => "All",
            ViewSelector::Crime => "Crime",
            ViewSelector::Disaster => "Disaster",
        }
    }
}

impl fmt::Display for ViewSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ViewSelector {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ALL" => Ok(ViewSelector::All),
            "CRIME" => Ok(ViewSelector::Crime),
            "DISASTER" => Ok(ViewSelector::Disaster),
            _ => Err(ModelError::UnknownSelector(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_both_categories() {
        assert!(ViewSelector::All.matches(Category::Crime));
        assert!(ViewSelector::All.matches(Category::Disaster));
    }

    #[test]
    fn category_selectors_match_only_their_category() {
        assert!(ViewSelector::Crime.matches(Category::Crime));
        assert!(!ViewSelector::Crime.matches(Category::Disaster));
        assert!(ViewSelector::Disaster.matches(Category::Disaster));
        assert!(!ViewSelector::Disaster.matches(Category::Crime));
    }

    #[test]
    fn default_is_all() {
        assert_eq!(ViewSelector::default(), ViewSelector::All);
        assert_eq!("all".parse::<ViewSelector>().unwrap(), ViewSelector::All);
    }
}
