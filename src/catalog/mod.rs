//! Catalog of candidate vehicles and known make/model names.
//!
//! The catalog is read once at startup and never changes afterwards. Its
//! JSON form is:
//!
//! ```json
//! {
//!   "makes": ["Ford", "Toyota"],
//!   "modelsByMake": { "Ford": ["Mustang GT"], "Toyota": ["RAV4"] },
//!   "vehicles": [
//!     { "make": "Ford", "model": "Mustang GT", "year": "2022", "filename": "ford_mustang_gt_2022.jpg" }
//!   ]
//! }
//! ```
//!
//! `vehicles` may be omitted, in which case the built-in photo set is used.

use crate::core::Vehicle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

pub mod error;
pub mod suggest;

pub use error::CatalogError;
pub use suggest::{suggest, DEFAULT_SUGGESTION_LIMIT};

/// Loaded, validated catalog. Always holds at least one vehicle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    makes: Vec<String>,

    #[serde(default)]
    models_by_make: BTreeMap<String, Vec<String>>,

    #[serde(default = "builtin_vehicles")]
    vehicles: Vec<Vehicle>,
}

/// The photo set shipped with the game.
pub fn builtin_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle::new("Ford", "Mustang GT", "2022", "ford_mustang_gt_2022.jpg"),
        Vehicle::new("Toyota", "RAV4", "2018", "toyota_rav4_2018.jpg"),
        Vehicle::new("Volkswagen", "Golf R", "2019", "volkswagen_golfr_2019.jpg"),
    ]
}

impl Catalog {
    /// Build a catalog directly, rejecting an empty vehicle list.
    pub fn new(
        makes: Vec<String>,
        models_by_make: BTreeMap<String, Vec<String>>,
        vehicles: Vec<Vehicle>,
    ) -> Result<Self, CatalogError> {
        Self {
            makes,
            models_by_make,
            vehicles,
        }
        .validated()
    }

    /// Catalog holding only the built-in vehicles, with names derived from them.
    pub fn builtin() -> Self {
        let vehicles = builtin_vehicles();
        let (makes, models_by_make) = names_of(&vehicles);
        Self {
            makes,
            models_by_make,
            vehicles,
        }
    }

    /// Catalog whose make and model lists are derived from `vehicles`.
    pub fn from_vehicles(vehicles: Vec<Vehicle>) -> Result<Self, CatalogError> {
        let (makes, models_by_make) = names_of(&vehicles);
        Self::new(makes, models_by_make, vehicles)
    }

    /// Parse a catalog document.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validated()
    }

    /// Read and parse the catalog file at `path`.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        debug!(path = %path.display(), "reading catalog");
        let content =
            std::fs::read_to_string(path).map_err(|source| CatalogError::LoadFailure {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::from_json_str(&content)?;
        info!(
            vehicles = catalog.vehicles.len(),
            makes = catalog.makes.len(),
            "car catalog loaded"
        );
        Ok(catalog)
    }

    fn validated(self) -> Result<Self, CatalogError> {
        if self.vehicles.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        Ok(self)
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn makes(&self) -> &[String] {
        &self.makes
    }

    /// Models to offer once `make` has been typed.
    ///
    /// An exactly-known make with models yields its own list; anything else
    /// falls back to every known model.
    pub fn model_options(&self, make: &str) -> Vec<&str> {
        match self.models_by_make.get(make.trim()) {
            Some(models) if !models.is_empty() => models.iter().map(String::as_str).collect(),
            _ => self
                .models_by_make
                .values()
                .flatten()
                .map(String::as_str)
                .collect(),
        }
    }
}

fn names_of(vehicles: &[Vehicle]) -> (Vec<String>, BTreeMap<String, Vec<String>>) {
    let mut models_by_make: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for vehicle in vehicles {
        let models = models_by_make.entry(vehicle.make.clone()).or_default();
        if !models.contains(&vehicle.model) {
            models.push(vehicle.model.clone());
        }
    }
    let makes = models_by_make.keys().cloned().collect();
    (makes, models_by_make)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DOC: &str = r#"{
        "makes": ["Ford", "Toyota"],
        "modelsByMake": {
            "Ford": ["Mustang GT", "Focus"],
            "Toyota": ["RAV4"]
        },
        "vehicles": [
            { "make": "Ford", "model": "Focus", "year": "2015", "filename": "ford_focus_2015.jpg" }
        ]
    }"#;

    #[test]
    fn parses_camel_case_document() {
        let catalog = Catalog::from_json_str(DOC).unwrap();
        assert_eq!(catalog.makes(), ["Ford", "Toyota"]);
        assert_eq!(catalog.vehicles().len(), 1);
        assert_eq!(catalog.vehicles()[0].image_ref, "ford_focus_2015.jpg");
    }

    #[test]
    fn missing_vehicles_fall_back_to_builtin_set() {
        let catalog = Catalog::from_json_str(r#"{"makes": [], "modelsByMake": {}}"#).unwrap();
        assert_eq!(catalog.vehicles(), builtin_vehicles().as_slice());
    }

    #[test]
    fn explicit_empty_vehicle_list_is_rejected() {
        let result = Catalog::from_json_str(r#"{"makes": [], "modelsByMake": {}, "vehicles": []}"#);
        assert!(matches!(result, Err(CatalogError::EmptyCatalog)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = Catalog::from_json_str("{ not json");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn missing_file_is_a_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::load(&dir.path().join("catalog.json"));
        assert!(matches!(result, Err(CatalogError::LoadFailure { .. })));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOC.as_bytes()).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.vehicles()[0].model, "Focus");
    }

    #[test]
    fn model_options_for_known_make() {
        let catalog = Catalog::from_json_str(DOC).unwrap();
        assert_eq!(catalog.model_options("Ford"), vec!["Mustang GT", "Focus"]);
    }

    #[test]
    fn model_options_fall_back_to_all_models() {
        let catalog = Catalog::from_json_str(DOC).unwrap();
        assert_eq!(
            catalog.model_options("Tesla"),
            vec!["Mustang GT", "Focus", "RAV4"]
        );
    }

    #[test]
    fn builtin_catalog_derives_names() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.makes(), ["Ford", "Toyota", "Volkswagen"]);
        assert_eq!(catalog.model_options("Volkswagen"), vec!["Golf R"]);
    }
}
