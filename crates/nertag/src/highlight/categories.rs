//! # Entity Categories

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// An entity category, in classification priority order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    /// People.
    Person,

    /// Organizations.
    Organization,

    /// Locations.
    Location,

    /// Everything else that is an entity.
    Miscellaneous,
}

/// The labels belonging to a category, and its style class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStyle {
    /// Labels in this category; e.g. ``["B-PER", "I-PER"]``.
    pub labels: Vec<String>,

    /// The markup style class.
    pub class: String,
}

impl CategoryStyle {
    /// Build a style.
    pub fn new<I, S>(
        labels: I,
        class: &str,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            class: class.to_string(),
        }
    }

    /// Does this category contain `label`?
    pub fn contains(
        &self,
        label: &str,
    ) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

/// Partitions labels into [`Category`]s.
///
/// The default is the ``BIO`` ``PER/ORG/LOC/MISC`` taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryMap {
    /// [`Category::Person`].
    pub person: CategoryStyle,

    /// [`Category::Organization`].
    pub organization: CategoryStyle,

    /// [`Category::Location`].
    pub location: CategoryStyle,

    /// [`Category::Miscellaneous`].
    pub miscellaneous: CategoryStyle,
}

impl Default for CategoryMap {
    fn default() -> Self {
        Self {
            person: CategoryStyle::new(["B-PER", "I-PER"], "highlightPer"),
            organization: CategoryStyle::new(["B-ORG", "I-ORG"], "highlightOrg"),
            location: CategoryStyle::new(["B-LOC", "I-LOC"], "highlightLoc"),
            miscellaneous: CategoryStyle::new(["B-MISC", "I-MISC"], "highlightMisc"),
        }
    }
}

impl CategoryMap {
    /// The style for `category`.
    pub fn style(
        &self,
        category: Category,
    ) -> &CategoryStyle {
        match category {
            Category::Person => &self.person,
            Category::Organization => &self.organization,
            Category::Location => &self.location,
            Category::Miscellaneous => &self.miscellaneous,
        }
    }

    /// Classify `label`; the first category (in priority order) containing it wins.
    pub fn classify(
        &self,
        label: &str,
    ) -> Option<Category> {
        Category::iter().find(|&c| self.style(c).contains(label))
    }
}
