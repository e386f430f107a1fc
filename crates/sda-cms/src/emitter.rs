//! # Config Emitter
//!
//! Renders a [`CmsConfig`] as YAML and writes it to the project's public
//! assets directory.
//!
//! Rendering is pure and deterministic: keys follow struct declaration
//! order and the header carries no timestamp, so regenerating from an
//! unchanged catalog reproduces the committed file byte for byte.
//!
//! Writing is the only side effect in the pipeline. The text goes to a
//! sibling temporary file that is then renamed over the target, so the
//! previous configuration stays in place if anything fails.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::envelope::CmsConfig;
use crate::error::EmitError;

/// Project-relative path the CMS loads its configuration from.
pub const CONFIG_PATH: &str = "public/config.yml";

const HEADER: &str =
    "# Generated by `sda generate` from the WebSite catalog. Do not edit by hand.\n";

/// Render the configuration as YAML text.
pub fn serialize(config: &CmsConfig) -> Result<String, EmitError> {
    let body = serde_yaml::to_string(config)?;
    Ok(format!("{HEADER}{body}"))
}

/// Parse rendered configuration text back into a [`CmsConfig`].
pub fn parse(text: &str) -> Result<CmsConfig, EmitError> {
    Ok(serde_yaml::from_str(text)?)
}

/// Replace the file at `path` with `text`.
///
/// The parent directory must already exist; it is never created.
pub fn write_config(path: &Path, text: &str) -> Result<(), EmitError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(EmitError::MissingDirectory {
            path: parent.to_path_buf(),
        });
    }

    let tmp = temp_path(path)?;
    fs::write(&tmp, text).map_err(|source| EmitError::Io {
        path: tmp.clone(),
        source,
    })?;
    if let Err(source) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(EmitError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    tracing::info!(path = %path.display(), bytes = text.len(), "wrote CMS configuration");
    Ok(())
}

/// Whether the file on disk matches freshly rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigStatus {
    UpToDate,
    Stale,
    Missing,
}

/// Compare the file at `path` with `rendered`.
pub fn check_config(path: &Path, rendered: &str) -> Result<ConfigStatus, EmitError> {
    if !path.exists() {
        return Ok(ConfigStatus::Missing);
    }
    let current = fs::read_to_string(path).map_err(|source| EmitError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if current == rendered {
        Ok(ConfigStatus::UpToDate)
    } else {
        tracing::debug!(path = %path.display(), "configuration differs from catalog");
        Ok(ConfigStatus::Stale)
    }
}

fn temp_path(path: &Path) -> Result<PathBuf, EmitError> {
    let file_name = path.file_name().ok_or_else(|| EmitError::InvalidPath {
        path: path.to_path_buf(),
    })?;
    let mut tmp_name = OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}
