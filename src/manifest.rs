//! Typed round-trip of a module's `package.json` manifest
//!
//! Only the fields msync rewrites are modeled explicitly; everything else is
//! carried opaquely through `extra` so re-serialization never loses unrelated
//! manifest content.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{MsyncError, Result};

/// Manifest filename at each module root
pub const MANIFEST_FILE: &str = "package.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub dependencies: Map<String, Value>,

    #[serde(
        rename = "devDependencies",
        default,
        skip_serializing_if = "Map::is_empty"
    )]
    pub dev_dependencies: Map<String, Value>,

    #[serde(
        rename = "peerDependencies",
        default,
        skip_serializing_if = "Map::is_empty"
    )]
    pub peer_dependencies: Map<String, Value>,

    /// Unknown fields, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Manifest {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| MsyncError::ManifestParseFailed {
            path: MANIFEST_FILE.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn to_json(&self) -> Result<String> {
        let mut content =
            serde_json::to_string_pretty(self).map_err(|e| MsyncError::ManifestWriteFailed {
                path: MANIFEST_FILE.to_string(),
                reason: e.to_string(),
            })?;
        content.push('\n');
        Ok(content)
    }

    /// Load the manifest from a module directory
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILE);
        let content =
            std::fs::read_to_string(&path).map_err(|e| MsyncError::ManifestReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        serde_json::from_str(&content).map_err(|e| MsyncError::ManifestParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Save the manifest back to a module directory
    pub fn save(&self, dir: &Path) -> Result<()> {
        let path = dir.join(MANIFEST_FILE);
        let content = self.to_json()?;
        std::fs::write(&path, content).map_err(|e| MsyncError::ManifestWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    fn sections(&self) -> [&Map<String, Value>; 3] {
        [
            &self.dependencies,
            &self.dev_dependencies,
            &self.peer_dependencies,
        ]
    }

    fn sections_mut(&mut self) -> [&mut Map<String, Value>; 3] {
        [
            &mut self.dependencies,
            &mut self.dev_dependencies,
            &mut self.peer_dependencies,
        ]
    }

    /// The declared range for a dependency, searched across all dependency
    /// sections in order
    pub fn dependency_range(&self, name: &str) -> Option<&str> {
        self.sections()
            .into_iter()
            .find_map(|section| section.get(name).and_then(Value::as_str))
    }

    /// Whether any dependency section declares `name`
    pub fn declares_dependency(&self, name: &str) -> bool {
        self.sections()
            .into_iter()
            .any(|section| section.contains_key(name))
    }

    /// Rewrite the declared range for `name` in every section that carries it.
    ///
    /// Returns true if at least one section was updated.
    pub fn set_dependency_range(&mut self, name: &str, range: &str) -> bool {
        let mut updated = false;
        for section in self.sections_mut() {
            if let Some(entry) = section.get_mut(name) {
                *entry = Value::String(range.to_string());
                updated = true;
            }
        }
        updated
    }
}
