//! # sda-cms: CMS Configuration Emitter
//!
//! Wraps the mapped editor fields in the envelope the CMS expects and
//! renders it to `public/config.yml`.
//!
//! ## Pipeline
//!
//! 1. [`sda_schema::FieldMapper::generate`]: catalog to fields (pure).
//! 2. [`build_envelope`]: fields plus [`SiteMeta`] to [`CmsConfig`] (pure).
//! 3. [`serialize`]: [`CmsConfig`] to YAML text (pure, deterministic).
//! 4. [`write_config`]: the single side effect.
//!
//! [`render`] runs steps 1–3, so callers can print, diff or write the result.
//!
//! ## Crate Policy
//!
//! - Only [`write_config`] touches the filesystem for writing.
//! - A rejected catalog never reaches the emitter; no partial file is written.

pub mod emitter;
pub mod envelope;
pub mod error;

pub use emitter::{check_config, parse, serialize, write_config, ConfigStatus, CONFIG_PATH};
pub use envelope::{build_envelope, CmsConfig, SiteMeta};
pub use error::{EmitError, GenerateError};

use sda_core::SchemaProperty;
use sda_schema::FieldMapper;

/// Map `catalog`, wrap it and render the configuration text.
pub fn render(
    catalog: &[SchemaProperty],
    mapper: &FieldMapper,
    site: &SiteMeta,
) -> Result<String, GenerateError> {
    let fields = mapper.generate(catalog)?;
    let config = build_envelope(fields, site);
    Ok(serialize(&config)?)
}
