//! The closed taxonomy of file categories.
//!
//! Each category describes what makes a path acceptable for one role in a
//! pipeline: which extensions it may carry and whether it is expected to be
//! gzipped. Categories are plain data; the validation algorithm in
//! [`crate::core::binding`] reads this table and never dispatches on
//! anything else.

use serde::{Deserialize, Serialize};

/// Extension acceptance rule for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionRule {
    /// Every extension is acceptable; the membership check is disabled.
    Any,
    /// The resolved extension (lowercased) must be one of these.
    OneOf(&'static [&'static str]),
}

const FASTQ_EXTENSIONS: &[&str] = &[".fastq", ".fq", ".fastq.gz", ".fq.gz"];
const FASTA_EXTENSIONS: &[&str] = &[".fasta", ".fa", ".mfa", ".fna"];

/// Sibling suffixes of a centrifuge database reference: the primary path
/// names the database prefix, the actual index lives in these files.
const CENTRIFUGE_SIBLINGS: &[&str] = &[".1.cf", ".2.cf", ".3.cf"];

/// A file category: one role a path can play in a pipeline step.
///
/// The set is closed and known at build time; new roles are added here, not
/// at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileCategory {
    /// Sequencing reads, optionally gzipped
    Fastq,
    /// Forward mates of paired reads
    FwdFastq,
    /// Reverse mates of paired reads
    RevFastq,
    /// Assemblies, references, adapter sequences
    Fasta,
    /// samtools FASTA index
    Fai,
    /// Text alignment format
    Sam,
    /// Binary alignment format
    Bam,
    /// Tab-separated tabular output (e.g. centrifuge hits)
    Tsv,
    /// Plain text reports, histograms
    Txt,
    /// HTML reports (e.g. FastQC)
    Html,
    /// Zip archives
    Zip,
    /// Any gzipped file, regardless of inner format
    Gzip,
    /// Any file that must not be gzipped
    Unzipped,
    /// Centrifuge database reference; resolves to multiple index files
    CentrifugeDb,
    /// Unconstrained
    Any,
}

/// Every category, for table-driven iteration in tests and the CLI.
pub const ALL_CATEGORIES: &[FileCategory] = &[
    FileCategory::Fastq,
    FileCategory::FwdFastq,
    FileCategory::RevFastq,
    FileCategory::Fasta,
    FileCategory::Fai,
    FileCategory::Sam,
    FileCategory::Bam,
    FileCategory::Tsv,
    FileCategory::Txt,
    FileCategory::Html,
    FileCategory::Zip,
    FileCategory::Gzip,
    FileCategory::Unzipped,
    FileCategory::CentrifugeDb,
    FileCategory::Any,
];

impl FileCategory {
    /// Stable lowercase tag, used in CLI arguments and error messages.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Fastq => "fastq",
            Self::FwdFastq => "fwd-fastq",
            Self::RevFastq => "rev-fastq",
            Self::Fasta => "fasta",
            Self::Fai => "fai",
            Self::Sam => "sam",
            Self::Bam => "bam",
            Self::Tsv => "tsv",
            Self::Txt => "txt",
            Self::Html => "html",
            Self::Zip => "zip",
            Self::Gzip => "gzip",
            Self::Unzipped => "unzipped",
            Self::CentrifugeDb => "centrifuge-db",
            Self::Any => "any",
        }
    }

    /// Look a category up by its tag (case-insensitive).
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.to_lowercase();
        ALL_CATEGORIES
            .iter()
            .copied()
            .find(|category| category.tag() == tag)
    }

    /// The extension rule for this category.
    ///
    /// The paired-read categories accept the same extensions as plain
    /// fastq: the pair marker (`.R1`/`.R2`) is a suffix segment that prefix
    /// extraction strips, so mates still align by prefix token.
    #[must_use]
    pub fn accepted_extensions(&self) -> ExtensionRule {
        match self {
            Self::Fastq | Self::FwdFastq | Self::RevFastq => {
                ExtensionRule::OneOf(FASTQ_EXTENSIONS)
            }
            Self::Fasta => ExtensionRule::OneOf(FASTA_EXTENSIONS),
            Self::Fai => ExtensionRule::OneOf(&[".fai"]),
            Self::Sam => ExtensionRule::OneOf(&[".sam"]),
            Self::Bam => ExtensionRule::OneOf(&[".bam"]),
            Self::Tsv => ExtensionRule::OneOf(&[".tsv"]),
            Self::Txt => ExtensionRule::OneOf(&[".txt"]),
            Self::Html => ExtensionRule::OneOf(&[".html"]),
            Self::Zip => ExtensionRule::OneOf(&[".zip"]),
            Self::Gzip | Self::Unzipped | Self::CentrifugeDb | Self::Any => ExtensionRule::Any,
        }
    }

    /// True if the resolved extension (already lowercased) satisfies the
    /// category's extension rule.
    #[must_use]
    pub fn accepts_extension(&self, resolved: &str) -> bool {
        match self.accepted_extensions() {
            ExtensionRule::Any => true,
            ExtensionRule::OneOf(accepted) => accepted.contains(&resolved),
        }
    }

    /// True for categories that are gzipped by definition, where the
    /// declared-flag/detected-state distinction does not apply.
    #[must_use]
    pub fn is_gzip_wrapper(&self) -> bool {
        matches!(self, Self::Gzip)
    }

    /// Suffixes of the sibling files a multi-file reference resolves to.
    /// Empty for single-file categories.
    #[must_use]
    pub fn sibling_suffixes(&self) -> &'static [&'static str] {
        match self {
            Self::CentrifugeDb => CENTRIFUGE_SIBLINGS,
            _ => &[],
        }
    }
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
