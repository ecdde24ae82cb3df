//! Command-line interface for biofile-check.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **check**: validate a group of files under one category
//! - **pair**: validate prefix-matched groups (e.g. R1/R2 read pairs)
//! - **categories**: list the file category table
//!
//! ## Usage
//!
//! ```text
//! # Validate a group of assemblies
//! biofile-check check --category fasta s1.fa s2.fa s3.fa
//!
//! # Gzipped reads
//! biofile-check check --category fastq --gzipped s1.fq.gz s2.fq.gz
//!
//! # Paired-end reads, one --group per mate list
//! biofile-check pair --category fastq \
//!     --group s1.R1.fastq,s2.R1.fastq \
//!     --group s1.R2.fastq,s2.R2.fastq
//!
//! # JSON output for scripting
//! biofile-check check --category bam aligned.bam --format json
//! ```

use clap::{Parser, Subcommand};

use crate::core::category::{FileCategory, ALL_CATEGORIES};

pub mod check;
pub mod pair;

#[derive(Parser)]
#[command(name = "biofile-check")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Validate references to bioinformatics files between pipeline steps")]
#[command(
    long_about = "biofile-check validates file references before they are handed to downstream analysis steps.\n\nIt catches wiring mistakes - wrong file type, wrong gzip state, mismatched sample sets - from filesystem metadata and filenames alone, without reading file contents."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a group of files under one category
    Check(check::CheckArgs),

    /// Validate prefix-matched file groups
    Pair(pair::PairArgs),

    /// List the file category table
    Categories,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// clap value parser for `--category`.
///
/// # Errors
///
/// Lists the valid tags when the input matches none of them.
pub fn parse_category(tag: &str) -> Result<FileCategory, String> {
    FileCategory::from_tag(tag).ok_or_else(|| {
        let tags: Vec<&str> = ALL_CATEGORIES.iter().map(FileCategory::tag).collect();
        format!("unknown category '{tag}' (expected one of: {})", tags.join(", "))
    })
}

/// Print the category table.
pub fn run_categories(format: OutputFormat) -> anyhow::Result<()> {
    use crate::core::category::ExtensionRule;

    match format {
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = ALL_CATEGORIES
                .iter()
                .map(|category| {
                    let extensions = match category.accepted_extensions() {
                        ExtensionRule::Any => serde_json::Value::Null,
                        ExtensionRule::OneOf(accepted) => serde_json::json!(accepted),
                    };
                    serde_json::json!({
                        "tag": category.tag(),
                        "extensions": extensions,
                        "gzip_wrapper": category.is_gzip_wrapper(),
                        "sibling_suffixes": category.sibling_suffixes(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Text => {
            for category in ALL_CATEGORIES {
                let extensions = match category.accepted_extensions() {
                    ExtensionRule::Any => "ANY".to_string(),
                    ExtensionRule::OneOf(accepted) => accepted.join(" "),
                };
                println!("{:<14} {extensions}", category.tag());
            }
        }
    }
    Ok(())
}
