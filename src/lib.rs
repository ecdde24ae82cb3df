//! # biofile-check
//!
//! A library for validating references to bioinformatics files between
//! pipeline steps.
//!
//! Analysis pipelines spend most of their time wiring files from one tool
//! into the next, and most of the failures in practice are wiring mistakes:
//! a SAM handed to a step expecting a BAM, reads that were gzipped by an
//! unintended step, a reverse-reads list that drifted out of sync with the
//! forward one. `biofile-check` catches these before the downstream tool
//! runs, from filesystem metadata and filenames alone - it never reads file
//! contents, so format-level corruption is explicitly out of scope.
//!
//! ## Model
//!
//! - **[`FileBinding`]**: one path bound to one [`FileCategory`], validated
//!   eagerly at construction (exists, not a directory, non-empty unless
//!   allowed, gzip state matches, extension accepted)
//! - **[`FileGroup`]**: an ordered, non-empty collection of bindings of one
//!   category - one file per sample - with a single resolved extension
//!   throughout
//! - **[`PrefixMatchedGroupSet`]**: equal-length groups aligned
//!   index-for-index by filename prefix, e.g. forward/reverse read pairs
//!
//! A value of any of these types is a promise that validation passed;
//! construction is the only way to obtain one.
//!
//! ## Example
//!
//! ```rust,no_run
//! use biofile_check::{FileCategory, FileGroup, PrefixMatchedGroupSet};
//!
//! let fwd = FileGroup::new(vec!["s1.R1.fastq", "s2.R1.fastq"], FileCategory::FwdFastq)?;
//! let rev = FileGroup::new(vec!["s1.R2.fastq", "s2.R2.fastq"], FileCategory::RevFastq)?;
//!
//! let pairs = PrefixMatchedGroupSet::new(vec![fwd, rev])?;
//! for row in pairs.rows() {
//!     println!("fwd: {} rev: {}", row[0].display(), row[1].display());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`core`]: the binding/group/matched-set types and their error taxonomy
//! - [`utils`]: path helpers (suffix segmentation, prefix extraction)
//! - [`cli`]: command-line interface implementation

pub mod cli;
pub mod core;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::binding::{BindingError, FileBinding, FileOptions};
pub use core::category::{ExtensionRule, FileCategory, ALL_CATEGORIES};
pub use core::group::{FileGroup, GroupError};
pub use core::matched::{MatchedGroupError, PrefixMatchedGroupSet};
