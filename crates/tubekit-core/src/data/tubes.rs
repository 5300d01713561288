//! Standard tube catalog.
//!
//! Commercial tube dimensions with recommended bend radii, as published for
//! manual bending machines: NF gas tubes (medium/heavy and light series),
//! EN 1057 annealed copper, and PEX plumbing tube.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A standard tube size with its recommended bend radius.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardTube {
    /// Commercial designation (e.g. `3/8"`, `Copper 12mm`)
    pub designation: String,
    /// Outer diameter in mm
    pub outer_diameter: f64,
    /// Wall thickness in mm
    pub wall_thickness: f64,
    /// Recommended bend radius in mm for this size
    pub recommended_bend_radius: f64,
    /// Reference standard (e.g. "NF", "EN 1057")
    pub standard: String,
    /// Tube series (e.g. "Medium/Heavy", "Light", "Annealed")
    pub series: String,
}

impl StandardTube {
    /// Creates a new standard tube record.
    pub fn new(
        designation: impl Into<String>,
        outer_diameter: f64,
        wall_thickness: f64,
        recommended_bend_radius: f64,
        standard: impl Into<String>,
        series: impl Into<String>,
    ) -> Self {
        Self {
            designation: designation.into(),
            outer_diameter,
            wall_thickness,
            recommended_bend_radius,
            standard: standard.into(),
            series: series.into(),
        }
    }

    /// Inner (bore) diameter in mm.
    pub fn inner_diameter(&self) -> f64 {
        self.outer_diameter - 2.0 * self.wall_thickness
    }

    /// Full human-readable description of the tube.
    pub fn description(&self) -> String {
        format!(
            "{} - Ø{}mm × {}mm - {} ({})",
            self.designation, self.outer_diameter, self.wall_thickness, self.series, self.standard
        )
    }
}

/// Catalog of standard tube sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TubeLibrary {
    tubes: Vec<StandardTube>,
}

impl TubeLibrary {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self { tubes: Vec::new() }
    }

    /// Adds a tube to the catalog.
    pub fn add_tube(&mut self, tube: StandardTube) {
        self.tubes.push(tube);
    }

    /// All tubes in catalog order.
    pub fn all_tubes(&self) -> &[StandardTube] {
        &self.tubes
    }

    /// Tubes belonging to the given reference standard.
    pub fn tubes_by_standard(&self, standard: &str) -> Vec<&StandardTube> {
        self.tubes.iter().filter(|t| t.standard == standard).collect()
    }

    /// Tubes belonging to the given series.
    pub fn tubes_by_series(&self, series: &str) -> Vec<&StandardTube> {
        self.tubes.iter().filter(|t| t.series == series).collect()
    }

    /// Finds a tube by its commercial designation.
    pub fn find_by_designation(&self, designation: &str) -> Option<&StandardTube> {
        self.tubes.iter().find(|t| t.designation == designation)
    }

    /// Distinct reference standards present in the catalog, in first-seen order.
    pub fn standards(&self) -> Vec<&str> {
        let mut standards: Vec<&str> = Vec::new();
        for tube in &self.tubes {
            if !standards.contains(&tube.standard.as_str()) {
                standards.push(tube.standard.as_str());
            }
        }
        standards
    }

    /// Number of tubes in the catalog.
    pub fn len(&self) -> usize {
        self.tubes.len()
    }

    /// Checks whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.tubes.is_empty()
    }
}

impl Default for TubeLibrary {
    fn default() -> Self {
        Self::new()
    }
}

/// Initializes the catalog with the standard sizes supported by common
/// manual bending machines.
pub fn init_standard_tubes() -> TubeLibrary {
    let mut library = TubeLibrary::new();

    // NF gas tubes, medium/heavy series
    for (designation, od, wall, radius) in [
        ("3/8\"", 17.2, 2.35, 82.0),
        ("1/2\"", 21.3, 2.65, 101.0),
        ("3/4\"", 26.9, 2.65, 128.0),
        ("1\"", 33.7, 3.25, 160.0),
        ("1\"1/4", 42.4, 3.25, 201.0),
        ("1\"1/2", 48.3, 3.25, 229.0),
        ("2\"", 60.3, 3.65, 286.0),
        ("2\"1/2", 76.1, 3.65, 361.0),
        ("3\"", 88.9, 4.05, 422.0),
        ("4\"", 114.3, 4.5, 542.0),
    ] {
        library.add_tube(StandardTube::new(
            designation,
            od,
            wall,
            radius,
            "NF",
            "Medium/Heavy",
        ));
    }

    // NF gas tubes, light series
    for (designation, od, wall, radius) in [
        ("3/8\" light", 17.2, 1.8, 82.0),
        ("1/2\" light", 21.3, 2.0, 101.0),
        ("3/4\" light", 26.9, 2.0, 128.0),
        ("1\" light", 33.7, 2.5, 160.0),
        ("1\"1/4 light", 42.4, 2.5, 201.0),
        ("1\"1/2 light", 48.3, 2.5, 229.0),
    ] {
        library.add_tube(StandardTube::new(designation, od, wall, radius, "NF", "Light"));
    }

    // EN 1057 annealed copper
    for (designation, od, wall, radius) in [
        ("Copper 12mm", 12.0, 1.0, 60.0),
        ("Copper 14mm", 14.0, 1.0, 70.0),
        ("Copper 16mm", 16.0, 1.0, 80.0),
        ("Copper 18mm", 18.0, 1.0, 90.0),
        ("Copper 22mm", 22.0, 1.0, 110.0),
        ("Copper 28mm", 28.0, 1.5, 140.0),
        ("Copper 35mm", 35.0, 1.5, 175.0),
    ] {
        library.add_tube(StandardTube::new(
            designation,
            od,
            wall,
            radius,
            "EN 1057",
            "Annealed",
        ));
    }

    // PEX plumbing tube
    for (designation, od, wall, radius) in [
        ("PEX 12x1.1", 12.0, 1.1, 60.0),
        ("PEX 16x1.5", 16.0, 1.5, 80.0),
        ("PEX 20x1.9", 20.0, 1.9, 100.0),
        ("PEX 25x2.3", 25.0, 2.3, 125.0),
    ] {
        library.add_tube(StandardTube::new(
            designation,
            od,
            wall,
            radius,
            "NF DTU 65.10",
            "Standard",
        ));
    }

    debug!(count = library.len(), "initialized standard tube catalog");
    library
}
