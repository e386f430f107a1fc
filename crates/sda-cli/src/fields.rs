//! # Fields Subcommand
//!
//! Prints the mapped editor fields of the WebSite catalog, anchors first.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use sda_schema::{website_catalog, FieldDescriptor};

use crate::Project;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FieldsFormat {
    #[default]
    Json,
    Yaml,
}

/// Arguments for `sda fields`.
#[derive(Args, Debug)]
pub struct FieldsArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = FieldsFormat::Json)]
    pub format: FieldsFormat,

    /// Reject unrecognized property kinds instead of mapping them to objects.
    #[arg(long)]
    pub strict: bool,
}

/// Execute `sda fields`.
pub fn run_fields(args: &FieldsArgs, project: &Project) -> Result<u8> {
    let fields = project
        .mapper(args.strict)
        .generate(&website_catalog())
        .context("mapping WebSite catalog")?;
    println!("{}", render_fields(&fields, args.format)?);
    Ok(0)
}

fn render_fields(fields: &[FieldDescriptor], format: FieldsFormat) -> Result<String> {
    let text = match format {
        FieldsFormat::Json => serde_json::to_string_pretty(fields)?,
        FieldsFormat::Yaml => serde_yaml::to_string(fields)?,
    };
    Ok(text)
}
