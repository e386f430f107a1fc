//! # Generate Subcommand
//!
//! Regenerates the CMS configuration from the WebSite catalog.
//!
//! - default: write the file, replacing any previous content.
//! - `--dry-run`: print the rendered YAML, write nothing.
//! - `--check`: compare with the file on disk, exit 1 on drift.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use sda_cms::{check_config, render, write_config, ConfigStatus};
use sda_schema::website_catalog;

use crate::{resolve_path, Project};

/// Arguments for `sda generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output file. Defaults to `public/config.yml` under the project root.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Print the configuration to stdout without writing it.
    #[arg(long, conflicts_with = "check")]
    pub dry_run: bool,

    /// Verify the file on disk matches the catalog; exit 1 if not.
    #[arg(long)]
    pub check: bool,

    /// Reject unrecognized property kinds instead of mapping them to objects.
    #[arg(long)]
    pub strict: bool,

    /// Media library endpoint, overriding the config file.
    #[arg(long)]
    pub media_endpoint: Option<String>,
}

/// Execute `sda generate`.
pub fn run_generate(args: &GenerateArgs, project: &Project) -> Result<u8> {
    let mut site = project.config.site.clone();
    if let Some(endpoint) = &args.media_endpoint {
        site.media_endpoint = endpoint.clone();
    }

    let output = match &args.output {
        Some(path) => resolve_path(path, &project.root),
        None => project.config.output_path(&project.root),
    };

    let mapper = project.mapper(args.strict);
    let rendered =
        render(&website_catalog(), &mapper, &site).context("generating CMS configuration")?;

    if args.dry_run {
        print!("{rendered}");
        return Ok(0);
    }

    if args.check {
        let status = check_config(&output, &rendered)?;
        return Ok(match status {
            ConfigStatus::UpToDate => {
                println!("{} is up to date", output.display());
                0
            }
            ConfigStatus::Stale => {
                eprintln!(
                    "{} is out of date; run `sda generate` to refresh it",
                    output.display()
                );
                1
            }
            ConfigStatus::Missing => {
                eprintln!("{} does not exist; run `sda generate`", output.display());
                1
            }
        });
    }

    write_config(&output, &rendered)
        .with_context(|| format!("writing CMS configuration: {}", output.display()))?;
    println!("Wrote {}", output.display());
    Ok(0)
}
