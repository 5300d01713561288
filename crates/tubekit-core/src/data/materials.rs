//! Bending materials catalog.
//!
//! This module provides:
//! - Material records with springback and minimum-radius data
//! - Material library management with lookup by id
//! - The built-in library of common tube materials

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::spec::MaterialProfile;

/// Material identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct MaterialId(pub String);

impl MaterialId {
    /// Creates an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tube material with its bending behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BendMaterial {
    /// Unique material identifier
    pub id: MaterialId,
    /// Display name
    pub name: String,
    /// Springback compensation coefficient in (0, 1]
    pub springback_coefficient: f64,
    /// Minimum safe bend radius as a multiple of the outer diameter
    pub min_radius_factor: f64,
    /// Brief description of the material and its bending characteristics
    pub description: String,
}

impl BendMaterial {
    /// Creates a new material record.
    pub fn new(
        id: MaterialId,
        name: impl Into<String>,
        springback_coefficient: f64,
        min_radius_factor: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            springback_coefficient,
            min_radius_factor,
            description: description.into(),
        }
    }

    /// The profile record consumed by the bending engine.
    pub fn profile(&self) -> MaterialProfile {
        MaterialProfile::new(self.springback_coefficient, self.min_radius_factor)
    }
}

/// Materials library - manages the collection of bending materials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialLibrary {
    /// Collection of materials by id
    materials: HashMap<MaterialId, BendMaterial>,
}

impl MaterialLibrary {
    /// Creates a new empty library.
    pub fn new() -> Self {
        Self {
            materials: HashMap::new(),
        }
    }

    /// Adds a material to the library, replacing any entry with the same id.
    pub fn add_material(&mut self, material: BendMaterial) {
        self.materials.insert(material.id.clone(), material);
    }

    /// Gets a material by id.
    pub fn get_material(&self, id: &MaterialId) -> Option<&BendMaterial> {
        self.materials.get(id)
    }

    /// Gets a material by its string id.
    pub fn get(&self, id: &str) -> Option<&BendMaterial> {
        self.materials.get(&MaterialId::new(id))
    }

    /// All materials, sorted by id for stable iteration.
    pub fn all_materials(&self) -> Vec<&BendMaterial> {
        let mut all: Vec<&BendMaterial> = self.materials.values().collect();
        all.sort_by(|a, b| a.id.0.cmp(&b.id.0));
        all
    }

    /// The fallback material used when no explicit choice has been made.
    pub fn default_material(&self) -> Option<&BendMaterial> {
        self.get("steel")
    }

    /// Number of materials in the library.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Checks whether the library is empty.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialLibrary {
    fn default() -> Self {
        Self::new()
    }
}

/// Initializes the standard materials library with common tube materials.
///
/// Springback coefficients and minimum-radius factors follow the values
/// commonly published for manual tube benders.
pub fn init_standard_materials() -> MaterialLibrary {
    let mut library = MaterialLibrary::new();

    library.add_material(BendMaterial::new(
        MaterialId::new("steel"),
        "Mild steel",
        0.975,
        20.0,
        "Standard carbon steel, good compromise between strength and ease of bending",
    ));

    library.add_material(BendMaterial::new(
        MaterialId::new("stainless304"),
        "Stainless 304",
        0.965,
        22.0,
        "Austenitic stainless steel, corrosion resistant, harder to bend",
    ));

    library.add_material(BendMaterial::new(
        MaterialId::new("stainless316"),
        "Stainless 316",
        0.960,
        24.0,
        "Molybdenum-bearing stainless steel, excellent corrosion resistance, delicate to bend",
    ));

    library.add_material(BendMaterial::new(
        MaterialId::new("copper"),
        "Copper",
        0.985,
        15.0,
        "Ductile metal, easy to bend, low springback",
    ));

    library.add_material(BendMaterial::new(
        MaterialId::new("aluminum"),
        "Aluminium",
        0.980,
        18.0,
        "Light and ductile, watch for cracking on tight radii",
    ));

    library.add_material(BendMaterial::new(
        MaterialId::new("brass"),
        "Brass",
        0.982,
        16.0,
        "Copper-zinc alloy, good ductility, bends easily",
    ));

    library.add_material(BendMaterial::new(
        MaterialId::new("pex"),
        "PEX",
        0.995,
        10.0,
        "Cross-linked polyethylene tube, very flexible, negligible springback",
    ));

    library.add_material(BendMaterial::new(
        MaterialId::new("galvanized"),
        "Galvanized steel",
        0.970,
        21.0,
        "Zinc-coated steel, corrosion protected",
    ));

    debug!(count = library.len(), "initialized standard material library");
    library
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_library_size() {
        let library = init_standard_materials();
        assert_eq!(library.len(), 8);
        assert!(!library.is_empty());
    }

    #[test]
    fn test_default_material_is_mild_steel() {
        let library = init_standard_materials();
        let steel = library.default_material().unwrap();
        assert_eq!(steel.name, "Mild steel");
        assert_eq!(steel.springback_coefficient, 0.975);
        assert_eq!(steel.min_radius_factor, 20.0);
    }

    #[test]
    fn test_lookup_by_id() {
        let library = init_standard_materials();
        let copper = library.get("copper").unwrap();
        assert_eq!(copper.min_radius_factor, 15.0);
        assert!(library.get("unobtainium").is_none());
    }

    #[test]
    fn test_all_coefficients_in_range() {
        let library = init_standard_materials();
        for material in library.all_materials() {
            assert!(
                material.springback_coefficient > 0.0 && material.springback_coefficient <= 1.0,
                "bad coefficient for {}",
                material.id
            );
            assert!(material.min_radius_factor > 0.0);
        }
    }

    #[test]
    fn test_profile_conversion() {
        let library = init_standard_materials();
        let profile = library.get("stainless316").unwrap().profile();
        assert_eq!(profile.springback_coefficient, 0.960);
        assert_eq!(profile.min_radius_factor, 24.0);
    }
}
