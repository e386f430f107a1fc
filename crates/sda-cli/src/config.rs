//! # Project Configuration
//!
//! Optional `sda.yaml` at the project root (or the file given with
//! `--config`). Every key is optional; missing keys take the built-in
//! defaults, unknown keys are rejected.
//!
//! ```yaml
//! site:
//!   storage_target: src/data/website/website.json
//!   media_endpoint: http://localhost:8080
//!   media_folder: public/images
//! output: public/config.yml
//! unknown_kinds: fallback   # or: reject
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use sda_cms::{SiteMeta, CONFIG_PATH};
use sda_schema::UnknownKindPolicy;

use crate::resolve_path;

/// Config file looked up at the project root when `--config` is not given.
pub const CONFIG_FILE: &str = "sda.yaml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Envelope settings.
    pub site: SiteMeta,
    /// Output file, relative to the project root.
    pub output: Option<PathBuf>,
    /// Policy for property kinds the mapper does not know.
    pub unknown_kinds: UnknownKindPolicy,
}

impl GeneratorConfig {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config: {}", path.display()))?;
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&text).with_context(|| format!("parsing config: {}", path.display()))
    }

    /// Load `explicit` if given, else `<project_root>/sda.yaml` if present,
    /// else the defaults.
    pub fn discover(explicit: Option<&Path>, project_root: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let default_path = project_root.join(CONFIG_FILE);
        if default_path.is_file() {
            tracing::debug!(path = %default_path.display(), "loading project config");
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Where the rendered configuration goes.
    pub fn output_path(&self, project_root: &Path) -> PathBuf {
        let relative = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONFIG_PATH));
        resolve_path(&relative, project_root)
    }
}
