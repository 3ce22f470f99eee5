//! The mutable in-progress report draft.

use crate::error::ModelError;
use crate::taxonomy::{Category, IncidentKind};

/// The report being composed before commit.
///
/// At most one draft is live per session. The kind is always a member of
/// the current category's vocabulary: switching category resets the kind
/// to the new vocabulary's first entry, and [`Draft::set_kind`] rejects
/// anything outside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    category: Category,
    kind: IncidentKind,
    description: String,
    visible: bool,
}

impl Default for Draft {
    fn default() -> Self {
        Self::closed()
    }
}

impl Draft {
    /// A closed draft with the initial Crime defaults.
    pub fn closed() -> Self {
        Self {
            category: Category::Crime,
            kind: Category::Crime.default_kind(),
            description: String::new(),
            visible: false,
        }
    }

    /// Open a fresh draft for `category`: default kind, empty description.
    pub fn open_for(category: Category) -> Self {
        Self {
            category,
            kind: category.default_kind(),
            description: String::new(),
            visible: true,
        }
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

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Switch category, resetting the kind to the new vocabulary's first entry.
    pub fn set_category(&mut self, category: Category) {
        if self.category != category {
            self.category = category;
            self.kind = category.default_kind();
        }
    }

    /// Replace the kind; the value must belong to the current category's
    /// vocabulary.
    pub fn set_kind(&mut self, kind: IncidentKind) -> Result<(), ModelError> {
        if kind.category() != self.category {
            return Err(ModelError::KindOutOfVocabulary {
                kind: kind.as_str().to_string(),
                category: self.category,
            });
        }
        self.kind = kind;
        Ok(())
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = text.into();
    }

    /// Discard the description and hide the form.
    pub fn close(&mut self) {
        self.description.clear();
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_switch_resets_kind() {
        let mut draft = Draft::open_for(Category::Crime);
        draft.set_kind(IncidentKind::Vandalism).unwrap();
        draft.set_category(Category::Disaster);
        assert_eq!(draft.kind(), IncidentKind::Flood);
    }

    #[test]
    fn same_category_switch_keeps_kind() {
        let mut draft = Draft::open_for(Category::Crime);
        draft.set_kind(IncidentKind::Assault).unwrap();
        draft.set_category(Category::Crime);
        assert_eq!(draft.kind(), IncidentKind::Assault);
    }

    #[test]
    fn rejects_out_of_vocabulary_kind() {
        let mut draft = Draft::open_for(Category::Disaster);
        assert!(draft.set_kind(IncidentKind::Theft).is_err());
        assert_eq!(draft.kind(), IncidentKind::Flood);
    }

    #[test]
    fn close_clears_description() {
        let mut draft = Draft::open_for(Category::Crime);
        draft.set_description("saw something");
        draft.close();
        assert_eq!(draft.description(), "");
        assert!(!draft.is_visible());
    }
}
