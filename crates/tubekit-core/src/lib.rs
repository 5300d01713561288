//! # TubeKit Core
//!
//! Core types and data catalogs for TubeKit.
//! Provides the tube, bend, and material records consumed by the bending
//! engine, plus the built-in material and standard-tube libraries.

pub mod data;
pub mod spec;

pub use data::{
    init_standard_materials, init_standard_tubes, BendMaterial, MaterialId, MaterialLibrary,
    StandardTube, TubeLibrary,
};
pub use spec::{BendSpec, MaterialProfile, TubeSpec};
