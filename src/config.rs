//! Workspace settings (`msync.yaml`)
//!
//! The settings file lists glob patterns for module manifests and an
//! optional ignore list. It is searched for upward from the starting
//! directory, so commands work from anywhere inside the workspace.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wax::Glob;

use crate::error::{MsyncError, Result};
use crate::module::{Module, ModuleStore};

/// Settings filename at the workspace root
pub const SETTINGS_FILE: &str = "msync.yaml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Glob patterns (relative to the workspace root) matching module
    /// manifest files, e.g. `./libs/*/package.json`
    #[serde(default)]
    pub modules: Vec<String>,

    /// Module names excluded from default listings and bumps
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Settings {
    /// Walk up from `start` looking for a directory containing msync.yaml
    pub fn find_from(start: &Path) -> Option<PathBuf> {
        let mut current = Some(start);
        while let Some(dir) = current {
            if dir.join(SETTINGS_FILE).is_file() {
                return Some(dir.to_path_buf());
            }
            current = dir.parent();
        }
        None
    }

    /// Load settings from a workspace root directory
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(SETTINGS_FILE);
        if !path.exists() {
            return Err(MsyncError::ConfigNotFound);
        }
        let content = std::fs::read_to_string(&path).map_err(|e| MsyncError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        serde_yaml::from_str(&content).map_err(|e| MsyncError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Expand the module patterns and load every matched manifest into an
    /// ordered snapshot. Matches under an install root (`node_modules`) are
    /// skipped so mirrored copies never shadow workspace modules; duplicate
    /// names keep the first match.
    pub fn load_modules(&self, root: &Path) -> Result<ModuleStore> {
        let mut manifest_paths = Vec::new();

        for pattern in &self.modules {
            let trimmed = pattern.trim_start_matches("./");
            let glob = Glob::new(trimmed).map_err(|e| MsyncError::InvalidPattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })?;

            for entry in glob.walk(root) {
                let entry = entry.map_err(|e| MsyncError::IoError {
                    message: e.to_string(),
                })?;
                let path = entry.path().to_path_buf();
                if !path.is_file() || in_install_root(&path) {
                    continue;
                }
                manifest_paths.push(path);
            }
        }

        // Walk order is filesystem-dependent; sort for a stable snapshot
        manifest_paths.sort();
        manifest_paths.dedup();

        let mut modules: Vec<Module> = Vec::new();
        for path in manifest_paths {
            let module = Module::load(&path, false)?;
            if modules.iter().any(|m| m.name == module.name) {
                continue;
            }
            let ignored = self.ignore.contains(&module.name);
            modules.push(Module { ignored, ..module });
        }

        Ok(ModuleStore::new(modules))
    }
}

fn in_install_root(path: &Path) -> bool {
    path.components()
        .any(|c| c.as_os_str() == crate::mirror::INSTALL_ROOT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_module(root: &Path, rel: &str, name: &str, version: &str) {
        let dir = root.join(rel);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join(crate::manifest::MANIFEST_FILE),
            format!("{{ \"name\": \"{name}\", \"version\": \"{version}\" }}"),
        )
        .unwrap();
    }

    #[test]
    fn test_find_from_walks_upward() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join(SETTINGS_FILE), "modules: []").unwrap();
        let nested = temp.path().join("libs/deep");
        std::fs::create_dir_all(&nested).unwrap();

        let found = Settings::find_from(&nested).unwrap();
        assert_eq!(found, temp.path());
    }

    #[test]
    fn test_find_from_missing() {
        let temp = tempfile::TempDir::new().unwrap();
        assert!(Settings::find_from(temp.path()).is_none());
    }

    #[test]
    fn test_load_missing_settings() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = Settings::load(temp.path());
        assert!(matches!(result, Err(MsyncError::ConfigNotFound)));
    }

    #[test]
    fn test_load_modules_from_patterns() {
        let temp = tempfile::TempDir::new().unwrap();
        write_module(temp.path(), "libs/client", "client", "1.0.2");
        write_module(temp.path(), "libs/server", "server", "1.4.0");
        std::fs::write(
            temp.path().join(SETTINGS_FILE),
            "modules:\n  - ./libs/*/package.json\n",
        )
        .unwrap();

        let settings = Settings::load(temp.path()).unwrap();
        let store = settings.load_modules(temp.path()).unwrap();

        assert_eq!(store.len(), 2);
        assert!(store.contains("client"));
        assert!(store.contains("server"));
    }

    #[test]
    fn test_load_modules_skips_install_root() {
        let temp = tempfile::TempDir::new().unwrap();
        write_module(temp.path(), "libs/client", "client", "1.0.2");
        write_module(
            temp.path(),
            "libs/server/node_modules/client",
            "client",
            "0.9.0",
        );
        std::fs::write(
            temp.path().join(SETTINGS_FILE),
            "modules:\n  - ./libs/**/package.json\n",
        )
        .unwrap();

        let settings = Settings::load(temp.path()).unwrap();
        let store = settings.load_modules(temp.path()).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("client").unwrap().version.to_string(), "1.0.2");
    }

    #[test]
    fn test_load_modules_marks_ignored() {
        let temp = tempfile::TempDir::new().unwrap();
        write_module(temp.path(), "libs/tools", "tools", "0.1.0");
        std::fs::write(
            temp.path().join(SETTINGS_FILE),
            "modules:\n  - ./libs/*/package.json\nignore:\n  - tools\n",
        )
        .unwrap();

        let settings = Settings::load(temp.path()).unwrap();
        let store = settings.load_modules(temp.path()).unwrap();
        assert!(store.get("tools").unwrap().ignored);
        assert!(store.visible_names(false).is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        let temp = tempfile::TempDir::new().unwrap();
        let settings = Settings {
            modules: vec!["libs/[/package.json".to_string()],
            ignore: vec![],
        };
        let result = settings.load_modules(temp.path());
        assert!(matches!(result, Err(MsyncError::InvalidPattern { .. })));
    }
}
