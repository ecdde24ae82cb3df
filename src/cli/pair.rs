//! The `pair` subcommand: validate prefix-matched file groups.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::cli::{parse_category, OutputFormat};
use crate::core::binding::FileOptions;
use crate::core::category::FileCategory;
use crate::core::group::FileGroup;
use crate::core::matched::PrefixMatchedGroupSet;

#[derive(Args)]
pub struct PairArgs {
    /// One file group as a comma-separated path list; repeat per group
    #[arg(short, long = "group", required = true)]
    pub groups: Vec<String>,

    /// File category applied to every group
    #[arg(short, long, value_parser = parse_category, default_value = "fastq")]
    pub category: FileCategory,

    /// Files are expected to be gzipped and carry a .gz extension
    #[arg(long)]
    pub gzipped: bool,

    /// Empty files are acceptable
    #[arg(long)]
    pub possibly_empty: bool,
}

/// JSON report for a validated matched set: one row of aligned paths per
/// sample.
#[derive(Serialize)]
struct PairReport {
    status: &'static str,
    category: FileCategory,
    groups: usize,
    rows: Vec<Vec<String>>,
}

pub fn run(args: PairArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let options = FileOptions {
        gzipped: args.gzipped,
        possibly_empty: args.possibly_empty,
    };

    let groups = args
        .groups
        .iter()
        .map(|spec| {
            let paths: Vec<PathBuf> = spec
                .split(',')
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .collect();
            FileGroup::with_options(paths, args.category, options)
        })
        .collect::<Result<Vec<_>, _>>()?;

    if verbose {
        eprintln!(
            "Matching {} group(s) of category '{}'",
            groups.len(),
            args.category
        );
    }

    let set = PrefixMatchedGroupSet::new(groups)?;

    match format {
        OutputFormat::Json => {
            let report = PairReport {
                status: "ok",
                category: args.category,
                groups: set.groups().len(),
                rows: set
                    .rows()
                    .map(|row| row.iter().map(|p| p.display().to_string()).collect())
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!(
                "ok: {} group(s), {} matched row(s)",
                set.groups().len(),
                set.len()
            );
            for (i, row) in set.rows().enumerate() {
                let rendered: Vec<String> = row.iter().map(|p| p.display().to_string()).collect();
                println!("  [{i}] {}", rendered.join("  "));
            }
        }
    }

    Ok(())
}
