//! # sda-cli: Command-Line Interface
//!
//! Provides the `sda` command that regenerates the CMS configuration from
//! the compiled-in WebSite catalog.
//!
//! ## Subcommands
//!
//! - `sda generate`: Write `public/config.yml` (or print it, or check it).
//! - `sda fields`: Print the mapped editor fields as JSON or YAML.
//!
//! ```bash
//! sda generate
//! sda generate --check      # exit 1 if the committed file is stale
//! sda fields --format yaml
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; mapping and rendering live in
//!   `sda-schema` and `sda-cms`.
//! - Handlers return an exit code; errors carry `anyhow` context.

pub mod config;
pub mod fields;
pub mod generate;

use std::path::{Path, PathBuf};

use sda_schema::{FieldMapper, UnknownKindPolicy};

use crate::config::GeneratorConfig;

/// The project being generated for: its root and its loaded configuration.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: GeneratorConfig,
}

impl Project {
    /// The mapper for this project. `strict` forces the reject policy.
    pub fn mapper(&self, strict: bool) -> FieldMapper {
        let policy = if strict {
            UnknownKindPolicy::Reject
        } else {
            self.config.unknown_kinds
        };
        FieldMapper::default().with_unknown_kinds(policy)
    }
}

/// Resolve a path that may be relative to the project root.
///
/// Absolute paths are returned as-is; relative paths are joined onto
/// `project_root`.
pub fn resolve_path(path: &Path, project_root: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}

/// Walk up from `start` to the first directory holding both `src/` and
/// `public/`, the layout of a static-site project.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join("src").is_dir() && dir.join("public").is_dir() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}
