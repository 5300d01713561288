//! # TubeKit Designer
//!
//! The design layer around the bending engine. Everything here consumes
//! the engine's output as plain data; none of it feeds back into the
//! geometry computation.
//!
//! ## Components
//!
//! - **Templates**: parameterized generators for common bent shapes
//!   (U, Z, S, staircase, elbows, loops)
//! - **Project**: named tube/material/bends bundles persisted as JSON,
//!   with an autosave slot
//! - **History**: bounded snapshot-based undo/redo over the session state
//! - **Export**: SVG and DXF rendering of a computed centerline
//!
//! ## Usage
//!
//! ```no_run
//! use tubekit_bending::compute_path;
//! use tubekit_core::{init_standard_materials, TubeSpec};
//! use tubekit_designer::{export, templates::{BendTemplate, UShape}, Project, ProjectStore};
//!
//! let materials = init_standard_materials();
//! let steel = materials.default_material().unwrap();
//! let tube = TubeSpec::new(21.3, 2.65, 1500.0);
//!
//! let bends = UShape::default().generate();
//! let project = Project::new("handrail", tube, steel.id.clone(), bends);
//!
//! let path = compute_path(&tube, &project.sequence()?, &steel.profile());
//! let svg = export::to_svg(&path, &export::ExportConfig::default());
//!
//! let store = ProjectStore::new("projects");
//! store.save(&project)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod error;
pub mod export;
pub mod history;
pub mod project;
pub mod templates;

pub use error::DesignerError;
pub use export::ExportConfig;
pub use history::{ActionKind, HistoryEntry, SessionSnapshot, UndoRedoManager};
pub use project::{Project, ProjectStore, FILE_FORMAT_VERSION};
pub use templates::{BendTemplate, TemplateLibrary};
