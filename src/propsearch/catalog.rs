//! The read-only property catalog, loaded once per session.

use crate::error::{PropsearchError, Result};
use crate::model::Property;
use serde::Deserialize;
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;
use tracing::info;

/// Sample listings shipped with the binary, used when no catalog is configured.
pub const BUNDLED_CATALOG: &str = include_str!("../../data/properties.json");

/// Accepts both the `{"properties": [...]}` wrapper and a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Wrapped { properties: Vec<Property> },
    Bare(Vec<Property>),
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    pub fn new(properties: Vec<Property>) -> Result<Self> {
        let mut seen = HashSet::new();
        for property in &properties {
            if !seen.insert(property.id.as_str()) {
                return Err(PropsearchError::Catalog(format!(
                    "Duplicate property id '{}'",
                    property.id
                )));
            }
            if property.added_date().is_none() {
                return Err(PropsearchError::Catalog(format!(
                    "Property '{}' has an invalid added date: {} {} {}",
                    property.id, property.added.day, property.added.month, property.added.year
                )));
            }
        }
        Ok(Self { properties })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json).map_err(PropsearchError::Serialization)?;
        let properties = match file {
            CatalogFile::Wrapped { properties } => properties,
            CatalogFile::Bare(properties) => properties,
        };
        Self::new(properties)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(PropsearchError::Io)?;
        let catalog = Self::from_json(&content)?;
        info!(path = %path.display(), count = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn get(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Distinct locations in alphabetical order.
    pub fn locations(&self) -> Vec<String> {
        self.properties
            .iter()
            .map(|p| p.location.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{property, property_at, property_added};
    use crate::model::PropertyType;

    #[test]
    fn bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.get("prop1").is_some());
    }

    #[test]
    fn accepts_wrapped_and_bare_files() {
        let bare = serde_json::to_string(&vec![property("a", PropertyType::Flat, 1, 1)]).unwrap();
        let wrapped = format!(r#"{{"properties": {}}}"#, bare);

        assert_eq!(Catalog::from_json(&bare).unwrap().len(), 1);
        assert_eq!(Catalog::from_json(&wrapped).unwrap().len(), 1);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = Catalog::new(vec![
            property("a", PropertyType::Flat, 1, 1),
            property("a", PropertyType::House, 2, 2),
        ]);
        assert!(matches!(result, Err(PropsearchError::Catalog(_))));
    }

    #[test]
    fn rejects_unreadable_added_dates() {
        let result = Catalog::new(vec![property_added("a", "Octember", 1, 2022)]);
        assert!(matches!(result, Err(PropsearchError::Catalog(_))));
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        let catalog = Catalog::new(vec![property("a", PropertyType::Flat, 1, 1)]).unwrap();
        assert!(catalog.get("zzz").is_none());
    }

    #[test]
    fn locations_are_unique_and_sorted() {
        let catalog = Catalog::new(vec![
            property_at("1", "Orpington"),
            property_at("2", "Bromley"),
            property_at("3", "Orpington"),
        ])
        .unwrap();
        assert_eq!(catalog.locations(), vec!["Bromley", "Orpington"]);
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, BUNDLED_CATALOG).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), Catalog::bundled().unwrap().len());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::load(dir.path().join("nope.json"));
        assert!(matches!(result, Err(PropsearchError::Io(_))));
    }
}
