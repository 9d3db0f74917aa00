//! Workspace modules and the name-keyed module snapshot

use std::path::{Path, PathBuf};

use semver::Version;

use crate::error::{MsyncError, Result};
use crate::manifest::Manifest;
use crate::version;

/// Optional per-module build configuration filename
const TSCONFIG_FILE: &str = "tsconfig.json";

/// One independently versioned package in the workspace
#[derive(Debug, Clone)]
pub struct Module {
    /// Unique name within the workspace snapshot
    pub name: String,
    /// Absolute path to the module's working tree
    pub dir: PathBuf,
    /// Current local version
    pub version: Version,
    /// Version to bump from (may reflect a published version when a
    /// registry-aware caller supplies it)
    pub latest: Version,
    /// The full manifest document; mutated only by the bump engine
    pub manifest: Manifest,
    /// Excluded from default listings and bumps
    pub ignored: bool,
    /// Compiled-output directory, when the module has one configured
    pub output_dir: Option<PathBuf>,
}

impl Module {
    /// Load a module from its manifest file path
    pub fn load(manifest_path: &Path, ignored: bool) -> Result<Self> {
        let dir = manifest_path
            .parent()
            .ok_or_else(|| MsyncError::ManifestReadFailed {
                path: manifest_path.display().to_string(),
                reason: "manifest has no parent directory".to_string(),
            })?
            .to_path_buf();

        let manifest = Manifest::load(&dir)?;
        let name = match manifest.name.clone() {
            Some(name) => name,
            None => dir
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string)
                .ok_or_else(|| MsyncError::ManifestParseFailed {
                    path: manifest_path.display().to_string(),
                    reason: "manifest has no name and directory name is unusable".to_string(),
                })?,
        };

        let version = match manifest.version.as_deref() {
            Some(value) => version::parse(value)?,
            None => Version::new(0, 0, 0),
        };

        let output_dir = read_output_dir(&dir);

        Ok(Module {
            name,
            dir,
            latest: version.clone(),
            version,
            manifest,
            ignored,
            output_dir,
        })
    }

    /// The declared range for a dependency, if this module declares one
    pub fn dependency_range(&self, name: &str) -> Option<&str> {
        self.manifest.dependency_range(name)
    }

    /// Whether this module declares a dependency on `name`
    pub fn depends_on(&self, name: &str) -> bool {
        self.manifest.declares_dependency(name)
    }

    /// Persist the in-memory manifest to `<dir>/package.json`
    pub fn save_manifest(&self) -> Result<()> {
        self.manifest.save(&self.dir)
    }
}

/// Resolve the compiled-output directory from an optional tsconfig.json
fn read_output_dir(dir: &Path) -> Option<PathBuf> {
    let content = std::fs::read_to_string(dir.join(TSCONFIG_FILE)).ok()?;
    let tsconfig: serde_json::Value = serde_json::from_str(&content).ok()?;
    let out_dir = tsconfig.get("compilerOptions")?.get("outDir")?.as_str()?;
    Some(dir.join(out_dir))
}

/// Ordered, name-keyed snapshot of all workspace modules.
///
/// The bump engine mutates modules through this store during traversal, so
/// every recursion level observes the current state rather than a stale
/// re-fetched list.
#[derive(Debug, Default)]
pub struct ModuleStore {
    modules: Vec<Module>,
}

impl ModuleStore {
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules }
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Module> {
        self.modules.iter_mut().find(|m| m.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Drop ignored modules from the snapshot unless they are included.
    /// Commands apply this before handing the store to the bump engine or
    /// the mirror, so ignored modules never participate in a cascade.
    pub fn retain_visible(&mut self, include_ignored: bool) {
        if !include_ignored {
            self.modules.retain(|m| !m.ignored);
        }
    }

    /// Module names in store order, optionally filtering out ignored modules
    pub fn visible_names(&self, include_ignored: bool) -> Vec<String> {
        self.modules
            .iter()
            .filter(|m| include_ignored || !m.ignored)
            .map(|m| m.name.clone())
            .collect()
    }
}
