//! The species reference table.
//!
//! A [`Catalog`] is built once at startup and shared read-only between handlers.
//! Categories form a closed set ([`Category`]); within a category every scientific
//! name is unique and entries keep their insertion order, which is also the order
//! used by listing and search.

mod dataset;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Habitat reported when a record does not carry one.
pub const DEFAULT_HABITAT: &str = "Various habitats";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Birds,
    Plants,
    Fungi,
}

impl Category {
    /// All categories in table order.
    pub const ALL: [Category; 3] = [Category::Birds, Category::Plants, Category::Fungi];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Birds => "birds",
            Category::Plants => "plants",
            Category::Fungi => "fungi",
        }
    }

    /// Display label for a single specimen of this category.
    pub fn singular_label(self) -> &'static str {
        match self {
            Category::Birds => "Bird",
            Category::Plants => "Plant",
            Category::Fungi => "Fungus",
        }
    }

    fn index(self) -> usize {
        match self {
            Category::Birds => 0,
            Category::Plants => 1,
            Category::Fungi => 2,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Exact, case-sensitive match on the lowercase plural name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Descriptive data for one species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesRecord {
    pub common_name: String,
    pub description: String,
    pub edibility: String,
    pub herbal_benefits: String,
    pub habitat: Option<String>,
    pub warning: Option<String>,
    pub uses: Option<String>,
    pub conservation_status: Option<String>,
}

impl SpeciesRecord {
    pub fn new(
        common_name: impl Into<String>,
        description: impl Into<String>,
        edibility: impl Into<String>,
        herbal_benefits: impl Into<String>,
    ) -> Self {
        Self {
            common_name: common_name.into(),
            description: description.into(),
            edibility: edibility.into(),
            herbal_benefits: herbal_benefits.into(),
            habitat: None,
            warning: None,
            uses: None,
            conservation_status: None,
        }
    }

    pub fn with_habitat(mut self, habitat: impl Into<String>) -> Self {
        self.habitat = Some(habitat.into());
        self
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    pub fn with_uses(mut self, uses: impl Into<String>) -> Self {
        self.uses = Some(uses.into());
        self
    }

    pub fn with_conservation_status(mut self, status: impl Into<String>) -> Self {
        self.conservation_status = Some(status.into());
        self
    }

    pub fn habitat_or_default(&self) -> &str {
        self.habitat.as_deref().unwrap_or(DEFAULT_HABITAT)
    }
}

/// A record keyed by its scientific name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesEntry {
    pub scientific_name: String,
    pub record: SpeciesRecord,
}

impl SpeciesEntry {
    pub fn new(scientific_name: impl Into<String>, record: SpeciesRecord) -> Self {
        Self { scientific_name: scientific_name.into(), record }
    }

    /// Case-insensitive substring match on scientific or common name.
    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        self.scientific_name.to_lowercase().contains(needle)
            || self.record.common_name.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("category {0} has no species")]
    EmptyCategory(Category),
    #[error("category {0} is defined more than once")]
    DuplicateCategory(Category),
    #[error("duplicate species {name} in category {category}")]
    DuplicateSpecies { category: Category, name: String },
}

/// Immutable species table, one ordered list per category.
#[derive(Debug, Clone)]
pub struct Catalog {
    by_category: [Vec<SpeciesEntry>; 3],
}

impl Catalog {
    /// Builds a catalog, rejecting empty categories and duplicate names within a category.
    /// Every category in [`Category::ALL`] must be supplied exactly once.
    pub fn new(
        sections: impl IntoIterator<Item = (Category, Vec<SpeciesEntry>)>,
    ) -> Result<Self, CatalogError> {
        let mut slots: [Option<Vec<SpeciesEntry>>; 3] = [None, None, None];

        for (category, entries) in sections {
            let slot = &mut slots[category.index()];
            if slot.is_some() {
                return Err(CatalogError::DuplicateCategory(category));
            }
            for (i, entry) in entries.iter().enumerate() {
                if entries[..i].iter().any(|e| e.scientific_name == entry.scientific_name) {
                    return Err(CatalogError::DuplicateSpecies {
                        category,
                        name: entry.scientific_name.clone(),
                    });
                }
            }
            *slot = Some(entries);
        }

        let [birds, plants, fungi] = slots;
        let take = |slot: Option<Vec<SpeciesEntry>>, category| match slot {
            Some(entries) if !entries.is_empty() => Ok(entries),
            _ => Err(CatalogError::EmptyCategory(category)),
        };

        Ok(Self {
            by_category: [
                take(birds, Category::Birds)?,
                take(plants, Category::Plants)?,
                take(fungi, Category::Fungi)?,
            ],
        })
    }

    /// The dataset shipped with the service.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(dataset::sections())
    }

    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    pub fn species(&self, category: Category) -> &[SpeciesEntry] {
        &self.by_category[category.index()]
    }

    pub fn find(&self, category: Category, scientific_name: &str) -> Option<&SpeciesEntry> {
        self.species(category).iter().find(|e| e.scientific_name == scientific_name)
    }

    /// All entries in table order: categories first, then insertion order within each.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &SpeciesEntry)> + '_ {
        Category::ALL
            .into_iter()
            .flat_map(move |c| self.species(c).iter().map(move |e| (c, e)))
    }

    /// Linear case-insensitive scan over scientific and common names.
    pub fn search(&self, query: &str) -> Vec<(Category, &SpeciesEntry)> {
        let needle = query.to_lowercase();
        self.iter().filter(|(_, e)| e.matches(&needle)).collect()
    }

    pub fn counts(&self) -> BTreeMap<Category, usize> {
        Category::ALL.into_iter().map(|c| (c, self.species(c).len())).collect()
    }

    pub fn total(&self) -> usize {
        self.by_category.iter().map(Vec::len).sum()
    }
}
