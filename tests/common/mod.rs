//! Common test utilities for msync integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A test workspace with an msync.yaml and module directories
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a workspace whose msync.yaml matches `./libs/*/package.json`
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::write(path.join("msync.yaml"), "modules:\n  - ./libs/*/package.json\n")
            .expect("Failed to write msync.yaml");
        Self { temp, path }
    }

    /// Rewrite msync.yaml with an ignore list
    pub fn set_ignore(&self, names: &[&str]) {
        let mut content = String::from("modules:\n  - ./libs/*/package.json\n\nignore:\n");
        for name in names {
            content.push_str(&format!("  - {name}\n"));
        }
        std::fs::write(self.path.join("msync.yaml"), content)
            .expect("Failed to write msync.yaml");
    }

    /// Create a module directory with a package.json
    pub fn create_module(&self, name: &str, version: &str, deps: &[(&str, &str)]) -> PathBuf {
        let module_dir = self.path.join("libs").join(name);
        std::fs::create_dir_all(&module_dir).expect("Failed to create module directory");

        let deps_json: Vec<String> = deps
            .iter()
            .map(|(dep, range)| format!("    \"{dep}\": \"{range}\""))
            .collect();
        let manifest = format!(
            "{{\n  \"name\": \"{name}\",\n  \"version\": \"{version}\",\n  \"dependencies\": {{\n{}\n  }}\n}}\n",
            deps_json.join(",\n")
        );
        std::fs::write(module_dir.join("package.json"), manifest)
            .expect("Failed to write package.json");
        module_dir
    }

    /// Give a module a tsconfig.json with an outDir, creating the out dir
    pub fn create_output_dir(&self, name: &str, out_dir: &str) -> PathBuf {
        let module_dir = self.path.join("libs").join(name);
        std::fs::write(
            module_dir.join("tsconfig.json"),
            format!("{{ \"compilerOptions\": {{ \"outDir\": \"{out_dir}\" }} }}"),
        )
        .expect("Failed to write tsconfig.json");
        let out_path = module_dir.join(out_dir);
        std::fs::create_dir_all(&out_path).expect("Failed to create output directory");
        out_path
    }

    /// Read a module's package.json as a JSON value
    pub fn read_manifest(&self, name: &str) -> serde_json::Value {
        let path = self.path.join("libs").join(name).join("package.json");
        let content = std::fs::read_to_string(&path).expect("Failed to read package.json");
        serde_json::from_str(&content).expect("Failed to parse package.json")
    }

    /// Load the module snapshot the way commands do
    pub fn load_store(&self) -> msync::module::ModuleStore {
        let settings = msync::config::Settings::load(&self.path).expect("Failed to load settings");
        settings
            .load_modules(&self.path)
            .expect("Failed to load modules")
    }

    /// Write a file under the workspace root
    pub fn write_file(&self, rel: &str, content: &str) {
        let file_path = self.path.join(rel);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Check if a file exists under the workspace root
    pub fn file_exists(&self, rel: &str) -> bool {
        self.path.join(rel).exists()
    }

    /// Path to a module directory
    pub fn module_dir(&self, name: &str) -> PathBuf {
        self.path.join("libs").join(name)
    }
}

/// Snapshot of a directory tree as sorted relative paths (files only)
#[allow(dead_code)]
pub fn tree_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir_files(root);
    files.sort();
    files
}

#[allow(dead_code)]
fn walkdir_files(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let Ok(entries) = std::fs::read_dir(root) else {
        return out;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            for nested in walkdir_files(&path) {
                out.push(PathBuf::from(entry.file_name()).join(nested));
            }
        } else if let Ok(rel) = path.strip_prefix(root) {
            out.push(rel.to_path_buf());
        }
    }
    out
}
