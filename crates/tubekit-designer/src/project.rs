//! Project persistence.
//!
//! A project bundles everything needed to restore a bending session: the
//! tube, the chosen material id, and the bend list. Projects are stored as
//! pretty-printed JSON files under a base directory, one file per project,
//! plus a dedicated autosave slot.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use tubekit_bending::{BendSequence, SequenceError};
use tubekit_core::{BendMaterial, BendSpec, MaterialId, MaterialLibrary, TubeSpec};

use crate::error::DesignerError;

/// Project file format version.
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// File name of the autosave slot.
const AUTOSAVE_FILE: &str = "_autosave.json";

/// A complete bending session, ready to persist or restore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// File format version written alongside the data.
    pub version: String,
    /// Project name, used as the storage key.
    pub name: String,
    /// Tube geometry.
    pub tube: TubeSpec,
    /// Id of the selected material in the material catalog.
    pub material_id: MaterialId,
    /// Bend list, as captured from the session's sequence.
    pub bends: Vec<BendSpec>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub modified_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project stamped with the current time.
    pub fn new(
        name: impl Into<String>,
        tube: TubeSpec,
        material_id: MaterialId,
        bends: Vec<BendSpec>,
    ) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            name: name.into(),
            tube,
            material_id,
            bends,
            created_at: now,
            modified_at: now,
        }
    }

    /// Updates the modification timestamp.
    pub fn touch(&mut self) {
        self.modified_at = Utc::now();
    }

    /// Rebuilds a live bend sequence from the stored bends.
    pub fn sequence(&self) -> Result<BendSequence, SequenceError> {
        BendSequence::from_bends(self.bends.iter().copied())
    }

    /// Resolves the project's material against a catalog.
    pub fn material<'a>(
        &self,
        library: &'a MaterialLibrary,
    ) -> Result<&'a BendMaterial, DesignerError> {
        library
            .get_material(&self.material_id)
            .ok_or_else(|| DesignerError::UnknownMaterial(self.material_id.to_string()))
    }
}

/// Stores projects as JSON files under a base directory.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    base_dir: PathBuf,
}

impl ProjectStore {
    /// Creates a store rooted at `base_dir`. The directory is created on
    /// first save, not here.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The directory this store reads and writes.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Saves a project under its name, overwriting any previous version.
    pub fn save(&self, project: &Project) -> Result<PathBuf> {
        let path = self.project_path(&project.name);
        self.write_project(project, &path)?;
        info!(name = %project.name, path = %path.display(), "saved project");
        Ok(path)
    }

    /// Loads the project saved under `name`.
    pub fn load(&self, name: &str) -> Result<Project> {
        let path = self.project_path(name);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read project '{name}'"))?;
        let project: Project = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse project '{name}'"))?;
        info!(name = %project.name, "loaded project");
        Ok(project)
    }

    /// Names of all saved projects, sorted alphabetically. The autosave
    /// slot is not listed.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.base_dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.base_dir)
            .with_context(|| format!("failed to read {}", self.base_dir.display()))?
        {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == "json")
                && path.file_name().is_some_and(|f| f != AUTOSAVE_FILE)
            {
                let content = std::fs::read_to_string(&path)?;
                if let Ok(project) = serde_json::from_str::<Project>(&content) {
                    names.push(project.name);
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Deletes the project saved under `name`.
    pub fn delete(&self, name: &str) -> Result<()> {
        let path = self.project_path(name);
        std::fs::remove_file(&path)
            .with_context(|| format!("failed to delete project '{name}'"))?;
        info!(name, "deleted project");
        Ok(())
    }

    /// Writes the autosave slot, overwriting the previous autosave.
    pub fn autosave(&self, project: &Project) -> Result<PathBuf> {
        let path = self.base_dir.join(AUTOSAVE_FILE);
        self.write_project(project, &path)?;
        Ok(path)
    }

    /// Reads the autosave slot, if one has been written.
    pub fn load_autosave(&self) -> Result<Option<Project>> {
        let path = self.base_dir.join(AUTOSAVE_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let content =
            std::fs::read_to_string(&path).context("failed to read autosave")?;
        let project = serde_json::from_str(&content).context("failed to parse autosave")?;
        Ok(Some(project))
    }

    fn write_project(&self, project: &Project, path: &Path) -> Result<()> {
        std::fs::create_dir_all(&self.base_dir)
            .with_context(|| format!("failed to create {}", self.base_dir.display()))?;
        let json = serde_json::to_string_pretty(project)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    fn project_path(&self, name: &str) -> PathBuf {
        // Project names become file names; anything outside a conservative
        // character set is flattened to '_'.
        let slug: String = name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_dir.join(format!("{slug}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tubekit_core::init_standard_materials;

    fn sample_project(name: &str) -> Project {
        Project::new(
            name,
            TubeSpec::new(21.3, 2.65, 1500.0),
            MaterialId::new("steel"),
            vec![
                BendSpec::new(90.0, 450.0, 250.0),
                BendSpec::new(-45.0, 450.0, 700.0),
            ],
        )
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProjectStore::new(dir.path());

        let project = sample_project("handrail");
        store.save(&project).unwrap();

        let loaded = store.load("handrail").unwrap();
        assert_eq!(loaded.name, "handrail");
        assert_eq!(loaded.tube, project.tube);
        assert_eq!(loaded.material_id, project.material_id);
        assert_eq!(loaded.bends, project.bends);
        assert_eq!(loaded.version, FILE_FORMAT_VERSION);
    }

    #[test]
    fn test_list_excludes_autosave() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProjectStore::new(dir.path());

        store.save(&sample_project("beta")).unwrap();
        store.save(&sample_project("alpha")).unwrap();
        store.autosave(&sample_project("wip")).unwrap();

        assert_eq!(store.list().unwrap(), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_delete_removes_project() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProjectStore::new(dir.path());

        store.save(&sample_project("scrap")).unwrap();
        store.delete("scrap").unwrap();
        assert!(store.list().unwrap().is_empty());
        assert!(store.load("scrap").is_err());
        assert!(store.delete("scrap").is_err());
    }

    #[test]
    fn test_autosave_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProjectStore::new(dir.path());

        assert!(store.load_autosave().unwrap().is_none());
        store.autosave(&sample_project("wip")).unwrap();
        let restored = store.load_autosave().unwrap().unwrap();
        assert_eq!(restored.name, "wip");
    }

    #[test]
    fn test_sequence_rebuild_and_material_resolution() {
        let project = sample_project("check");
        let sequence = project.sequence().unwrap();
        assert_eq!(sequence.len(), 2);

        let materials = init_standard_materials();
        let material = project.material(&materials).unwrap();
        assert_eq!(material.name, "Mild steel");

        let mut orphan = sample_project("orphan");
        orphan.material_id = MaterialId::new("kryptonite");
        assert!(matches!(
            orphan.material(&materials),
            Err(DesignerError::UnknownMaterial(_))
        ));
    }

    #[test]
    fn test_names_with_slashes_stay_in_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProjectStore::new(dir.path());

        let path = store.save(&sample_project("a/b c")).unwrap();
        assert_eq!(path.parent().unwrap(), dir.path());
        assert!(store.load("a/b c").is_ok());
    }
}
