//! Mirror implementation backed by an external `rsync` process

use std::path::Path;
use std::process::Command;

use super::Mirror;
use crate::error::{MsyncError, Result};

/// Mirrors via `rsync -aW --delete`: archive semantics (structure,
/// permissions, timestamps), whole files, stale destination entries removed.
pub struct RsyncMirror;

impl Mirror for RsyncMirror {
    fn sync(&self, from: &Path, to: &Path, exclude: &[String]) -> Result<()> {
        let mut args: Vec<String> = vec!["-aW".to_string(), "--delete".to_string()];
        for pattern in exclude {
            args.push(format!("--exclude={pattern}"));
        }
        // Trailing slashes: copy directory contents, not the directory itself
        args.push(format!("{}/", from.display()));
        args.push(format!("{}/", to.display()));

        let rendered = format!("rsync {}", args.join(" "));

        let output = Command::new("rsync").args(&args).output().map_err(|e| {
            MsyncError::SyncFailed {
                command: rendered.clone(),
                code: None,
                reason: e.to_string(),
            }
        })?;

        if !output.status.success() {
            return Err(MsyncError::SyncFailed {
                command: rendered,
                code: output.status.code(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
