//! # sda CLI entry point
//!
//! Parses command-line arguments, sets up logging, locates the project and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sda_cli::config::GeneratorConfig;
use sda_cli::fields::{run_fields, FieldsArgs};
use sda_cli::generate::{run_generate, GenerateArgs};
use sda_cli::{find_project_root, Project};

/// Schema-driven CMS configuration generator.
///
/// Maps the compiled-in schema.org WebSite catalog to CMS editor fields and
/// writes the CMS configuration file.
#[derive(Parser, Debug)]
#[command(name = "sda", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file. Defaults to `sda.yaml` in the project root.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Project root. Defaults to the nearest ancestor holding `src/` and `public/`.
    #[arg(long, global = true)]
    project_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Regenerate the CMS configuration file.
    Generate(GenerateArgs),

    /// Print the mapped editor fields.
    Fields(FieldsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let project_root = match cli.project_dir {
        Some(dir) => dir,
        None => resolve_project_root(),
    };
    tracing::debug!(project_root = %project_root.display(), "resolved project root");

    let config = match GeneratorConfig::discover(cli.config.as_deref(), &project_root) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };
    let project = Project {
        root: project_root,
        config,
    };

    let result = match cli.command {
        Commands::Generate(args) => run_generate(&args, &project),
        Commands::Fields(args) => run_fields(&args, &project),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn resolve_project_root() -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_project_root(&cwd).unwrap_or_else(|| {
        tracing::warn!("Could not locate project root; using current directory");
        cwd
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_generate_defaults() {
        let cli = Cli::try_parse_from(["sda", "generate"]).unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert!(!args.dry_run);
        assert!(!args.check);
        assert!(!args.strict);
        assert!(args.output.is_none());
    }

    #[test]
    fn cli_parse_generate_check_strict() {
        let cli = Cli::try_parse_from(["sda", "generate", "--check", "--strict"]).unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert!(args.check);
        assert!(args.strict);
    }

    #[test]
    fn cli_rejects_dry_run_with_check() {
        assert!(Cli::try_parse_from(["sda", "generate", "--dry-run", "--check"]).is_err());
    }

    #[test]
    fn cli_parse_fields_yaml() {
        let cli = Cli::try_parse_from(["sda", "fields", "--format", "yaml"]).unwrap();
        let Commands::Fields(args) = cli.command else {
            panic!("expected fields");
        };
        assert_eq!(args.format, sda_cli::fields::FieldsFormat::Yaml);
    }

    #[test]
    fn cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sda",
            "generate",
            "-vv",
            "--project-dir",
            "/tmp/site",
            "--config",
            "/tmp/site/sda.yaml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.project_dir, Some(PathBuf::from("/tmp/site")));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/site/sda.yaml")));
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["sda"]).is_err());
    }
}
