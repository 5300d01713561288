//! Built-in data catalogs.
//!
//! - `materials`: bending materials with springback and minimum-radius data
//! - `tubes`: standard tube dimensions with recommended bend radii

pub mod materials;
pub mod tubes;

pub use materials::{init_standard_materials, BendMaterial, MaterialId, MaterialLibrary};
pub use tubes::{init_standard_tubes, StandardTube, TubeLibrary};
