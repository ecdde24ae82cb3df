//! The `check` subcommand: validate one file group.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::cli::{parse_category, OutputFormat};
use crate::core::binding::FileOptions;
use crate::core::category::FileCategory;
use crate::core::group::FileGroup;

#[derive(Args)]
pub struct CheckArgs {
    /// Files to validate, in order
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// File category to validate against
    #[arg(short, long, value_parser = parse_category)]
    pub category: FileCategory,

    /// Files are expected to be gzipped and carry a .gz extension
    #[arg(long)]
    pub gzipped: bool,

    /// Empty files are acceptable
    #[arg(long)]
    pub possibly_empty: bool,
}

/// JSON report for a validated group.
#[derive(Serialize)]
struct CheckReport<'a> {
    status: &'a str,
    category: FileCategory,
    extension: &'a str,
    files: Vec<String>,
}

pub fn run(args: CheckArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let options = FileOptions {
        gzipped: args.gzipped,
        possibly_empty: args.possibly_empty,
    };

    if verbose {
        eprintln!(
            "Checking {} file(s) against category '{}'",
            args.paths.len(),
            args.category
        );
    }

    let group = FileGroup::with_options(args.paths, args.category, options)?;

    match format {
        OutputFormat::Json => {
            let report = CheckReport {
                status: "ok",
                category: group.category(),
                extension: group.resolved_extension(),
                files: group.paths().map(|p| p.display().to_string()).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!(
                "ok: {} {} file(s) ({})",
                group.len(),
                group.category(),
                group.resolved_extension()
            );
            for path in group.paths() {
                println!("  {}", path.display());
            }
        }
    }

    Ok(())
}
