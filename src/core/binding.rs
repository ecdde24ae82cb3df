//! A validated association between one filesystem path and one category.
//!
//! A [`FileBinding`] is the promise a pipeline step hands to the next one:
//! this path is a real, non-empty file of the declared kind, in the declared
//! gzip state. Validation runs eagerly at construction and is memoized; a
//! binding that exists is a binding that passed. Checks are filesystem
//! metadata only (existence, directory-ness, size) plus filename rules -
//! contents are never read, so format-level corruption is out of scope.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::core::category::FileCategory;
use crate::utils::paths::{exists_and_nonempty, suffix_segments, with_suffix_appended};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    #[error("Path has no filename component: {0}")]
    InvalidPath(PathBuf),

    #[error("File cannot be a directory: {0}")]
    DirectoryNotAllowed(PathBuf),

    #[error("File does not exist: {0}")]
    MissingFile(PathBuf),

    #[error("File is empty but `possibly_empty` is false: {0}")]
    EmptyFile(PathBuf),

    #[error("Gzip state of {path} does not match the gzipped flag (resolved extension: '{extension}')")]
    GzipMismatch { path: PathBuf, extension: String },

    #[error("Unsupported extension '{extension}' for category '{category}': {path}")]
    UnsupportedExtension {
        path: PathBuf,
        extension: String,
        category: FileCategory,
    },
}

/// Per-binding flags, shared by every binding of a [`crate::FileGroup`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileOptions {
    /// The file is expected to be gzipped and carry a `.gz` extension.
    /// Declared, not detected: a mismatch means an unintended (un)zip step
    /// happened somewhere in the pipeline.
    pub gzipped: bool,

    /// Empty files are acceptable and skip the emptiness check.
    pub possibly_empty: bool,
}

/// Validation outcome, set exactly once per binding.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ValidationState {
    Unvalidated,
    Valid,
    Invalid(BindingError),
}

/// One typed file reference.
///
/// Category and flags are fixed at construction; so is the validation
/// outcome. Two bindings compare equal iff their paths are equal.
#[derive(Debug, Clone)]
pub struct FileBinding {
    path: PathBuf,
    category: FileCategory,
    gzipped: bool,
    possibly_empty: bool,
    resolved_extension: String,
    /// Derived index files of a multi-file reference, in suffix order.
    /// Part of the emptiness check, not of extension resolution.
    siblings: Vec<PathBuf>,
    state: ValidationState,
}

impl FileBinding {
    /// Bind `path` to `category` with default options and validate it.
    ///
    /// # Errors
    ///
    /// Returns the first failing check, in the order: `InvalidPath`,
    /// `DirectoryNotAllowed`, `MissingFile`, `EmptyFile`, `GzipMismatch`,
    /// `UnsupportedExtension`.
    pub fn new(path: impl Into<PathBuf>, category: FileCategory) -> Result<Self, BindingError> {
        Self::with_options(path, category, FileOptions::default())
    }

    /// Bind `path` to `category` with explicit options and validate it.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`FileBinding::new`].
    pub fn with_options(
        path: impl Into<PathBuf>,
        category: FileCategory,
        options: FileOptions,
    ) -> Result<Self, BindingError> {
        let path = path.into();
        if path.file_name().is_none() {
            return Err(BindingError::InvalidPath(path));
        }

        // Gzip-wrapper categories are gzipped by definition.
        let gzipped = options.gzipped || category.is_gzip_wrapper();

        let siblings = category
            .sibling_suffixes()
            .iter()
            .map(|suffix| with_suffix_appended(&path, suffix))
            .collect();

        let mut binding = Self {
            resolved_extension: resolve_extension(&path, gzipped),
            path,
            category,
            gzipped,
            possibly_empty: options.possibly_empty,
            siblings,
            state: ValidationState::Unvalidated,
        };

        binding.state = match binding.run_checks() {
            Ok(()) => ValidationState::Valid,
            Err(e) => ValidationState::Invalid(e),
        };

        match &binding.state {
            ValidationState::Invalid(e) => Err(e.clone()),
            _ => {
                debug!(
                    path = %binding.path.display(),
                    category = binding.category.tag(),
                    extension = %binding.resolved_extension,
                    "binding validated"
                );
                Ok(binding)
            }
        }
    }

    /// Return the memoized validation outcome.
    ///
    /// Validation ran at construction; repeated calls return the stored
    /// result without touching the filesystem again.
    ///
    /// # Errors
    ///
    /// Returns the stored failure for a binding constructed in an invalid
    /// state (not reachable through the public constructors).
    pub fn validate(&self) -> Result<(), BindingError> {
        match &self.state {
            ValidationState::Valid | ValidationState::Unvalidated => Ok(()),
            ValidationState::Invalid(e) => Err(e.clone()),
        }
    }

    fn run_checks(&self) -> Result<(), BindingError> {
        self.check_not_dir()?;
        self.check_exists()?;
        self.check_not_empty()?;
        self.check_gzip()?;
        self.check_extension()
    }

    fn check_not_dir(&self) -> Result<(), BindingError> {
        if self.path.is_dir() {
            return Err(BindingError::DirectoryNotAllowed(self.path.clone()));
        }
        Ok(())
    }

    fn check_exists(&self) -> Result<(), BindingError> {
        if !self.path.exists() {
            return Err(BindingError::MissingFile(self.path.clone()));
        }
        Ok(())
    }

    /// The primary path, and every sibling of a multi-file reference, must
    /// have contents.
    fn check_not_empty(&self) -> Result<(), BindingError> {
        if self.possibly_empty {
            debug!(path = %self.path.display(), "emptiness check skipped (possibly_empty)");
            return Ok(());
        }
        for path in std::iter::once(&self.path).chain(&self.siblings) {
            if !exists_and_nonempty(path) {
                return Err(BindingError::EmptyFile(path.clone()));
            }
        }
        Ok(())
    }

    /// The declared gzip flag must agree with the resolved extension. For
    /// gzip-wrapper categories the flag is forced on, so only the positive
    /// branch can apply.
    fn check_gzip(&self) -> Result<(), BindingError> {
        let consistent = if self.gzipped {
            self.resolved_extension.contains(".gz")
        } else {
            !self.resolved_extension.contains("gz")
        };
        if !consistent {
            return Err(BindingError::GzipMismatch {
                path: self.path.clone(),
                extension: self.resolved_extension.clone(),
            });
        }
        Ok(())
    }

    fn check_extension(&self) -> Result<(), BindingError> {
        if !self.category.accepts_extension(&self.resolved_extension) {
            return Err(BindingError::UnsupportedExtension {
                path: self.path.clone(),
                extension: self.resolved_extension.clone(),
                category: self.category,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The final path component.
    #[must_use]
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn category(&self) -> FileCategory {
        self.category
    }

    #[must_use]
    pub fn gzipped(&self) -> bool {
        self.gzipped
    }

    #[must_use]
    pub fn possibly_empty(&self) -> bool {
        self.possibly_empty
    }

    /// The one- or two-segment suffix used for category matching,
    /// lowercased. `.fq.gz` for gzipped bindings, `.fq` otherwise.
    #[must_use]
    pub fn resolved_extension(&self) -> &str {
        &self.resolved_extension
    }

    /// Derived sibling paths of a multi-file reference. Empty for
    /// single-file categories.
    #[must_use]
    pub fn siblings(&self) -> &[PathBuf] {
        &self.siblings
    }
}

/// Bindings are identified by path alone; category and flags do not take
/// part in equality.
impl PartialEq for FileBinding {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for FileBinding {}

/// Resolve the extension used for category matching, before any membership
/// check runs.
///
/// Gzipped bindings resolve the last two suffix segments joined
/// (`sample.fq.gz` -> `.fq.gz`), everything else only the final segment.
/// The result is lowercased so later comparisons are plain string equality.
fn resolve_extension(path: &Path, gzipped: bool) -> String {
    let segments = suffix_segments(path);
    let extension: String = if gzipped {
        let start = segments.len().saturating_sub(2);
        segments[start..].concat()
    } else {
        segments.last().cloned().unwrap_or_default()
    };
    extension.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    /// Create a non-empty file with the given name inside `dir`.
    fn fixture(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(b">seq\nACGT\n").unwrap();
        path
    }

    fn empty_fixture(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        File::create(&path).unwrap();
        path
    }

    #[test]
    fn test_valid_binding() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir, "assembly.fa");

        let binding = FileBinding::new(&path, FileCategory::Fasta).unwrap();
        assert_eq!(binding.path(), path.as_path());
        assert_eq!(binding.name(), "assembly.fa");
        assert_eq!(binding.resolved_extension(), ".fa");
        assert!(!binding.gzipped());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir, "reads.fastq");

        let binding = FileBinding::new(&path, FileCategory::Fastq).unwrap();
        assert!(binding.validate().is_ok());
        // Memoized: still ok even if the file disappears afterwards
        std::fs::remove_file(&path).unwrap();
        assert!(binding.validate().is_ok());
    }

    #[test]
    fn test_every_category_accepts_its_own_kind() {
        use crate::core::category::{ExtensionRule, ALL_CATEGORIES};

        let dir = TempDir::new().unwrap();
        for category in ALL_CATEGORIES {
            let name = match category.accepted_extensions() {
                ExtensionRule::OneOf(accepted) => format!("sample{}", accepted[0]),
                ExtensionRule::Any if category.is_gzip_wrapper() => "sample.dat.gz".to_string(),
                ExtensionRule::Any => "sample.dat".to_string(),
            };
            let path = fixture(&dir, &name);
            for suffix in category.sibling_suffixes() {
                fixture(&dir, &format!("{name}{suffix}"));
            }

            let gzipped = name.ends_with(".gz") && !category.is_gzip_wrapper();
            let options = FileOptions {
                gzipped,
                ..FileOptions::default()
            };
            let result = FileBinding::with_options(&path, *category, options);
            assert!(result.is_ok(), "{category}: {result:?}");
        }
    }

    #[test]
    fn test_missing_file() {
        let err = FileBinding::new("/no/such/reads.fq", FileCategory::Fastq).unwrap_err();
        assert!(matches!(err, BindingError::MissingFile(_)));
    }

    #[test]
    fn test_directory_not_allowed() {
        let dir = TempDir::new().unwrap();
        let err = FileBinding::new(dir.path().join("sub.fa"), FileCategory::Fasta).unwrap_err();
        assert!(matches!(err, BindingError::MissingFile(_)));

        std::fs::create_dir(dir.path().join("sub.fa")).unwrap();
        let err = FileBinding::new(dir.path().join("sub.fa"), FileCategory::Fasta).unwrap_err();
        assert!(matches!(err, BindingError::DirectoryNotAllowed(_)));
    }

    #[test]
    fn test_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = empty_fixture(&dir, "reads.fq");

        let err = FileBinding::new(&path, FileCategory::Fastq).unwrap_err();
        assert!(matches!(err, BindingError::EmptyFile(_)));
    }

    #[test]
    fn test_possibly_empty_suppresses_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = empty_fixture(&dir, "reads.fq");

        let options = FileOptions {
            possibly_empty: true,
            ..FileOptions::default()
        };
        assert!(FileBinding::with_options(&path, FileCategory::Fastq, options).is_ok());
    }

    #[test]
    fn test_gzip_mismatch_declared_but_absent() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir, "reads.fq");

        let options = FileOptions {
            gzipped: true,
            ..FileOptions::default()
        };
        let err = FileBinding::with_options(&path, FileCategory::Fastq, options).unwrap_err();
        assert!(matches!(err, BindingError::GzipMismatch { .. }));
    }

    #[test]
    fn test_gzip_mismatch_present_but_undeclared() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir, "reads.fq.gz");

        let err = FileBinding::new(&path, FileCategory::Fastq).unwrap_err();
        assert!(matches!(err, BindingError::GzipMismatch { .. }));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir, "table.foobar");

        let err = FileBinding::new(&path, FileCategory::Tsv).unwrap_err();
        assert!(matches!(
            err,
            BindingError::UnsupportedExtension { ref extension, .. } if extension == ".foobar"
        ));
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir, "assembly.FA");

        let binding = FileBinding::new(&path, FileCategory::Fasta).unwrap();
        assert_eq!(binding.resolved_extension(), ".fa");
    }

    #[test]
    fn test_gzip_wrapper_accepts_any_inner_extension() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir, "archive.tar.gz");

        let binding = FileBinding::new(&path, FileCategory::Gzip).unwrap();
        assert!(binding.gzipped());
        assert_eq!(binding.resolved_extension(), ".tar.gz");
    }

    #[test]
    fn test_gzip_wrapper_requires_gz() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir, "archive.tar");

        let err = FileBinding::new(&path, FileCategory::Gzip).unwrap_err();
        assert!(matches!(err, BindingError::GzipMismatch { .. }));
    }

    #[test]
    fn test_invalid_path() {
        let err = FileBinding::new("", FileCategory::Any).unwrap_err();
        assert!(matches!(err, BindingError::InvalidPath(_)));
    }

    #[test]
    fn test_multi_file_reference_siblings() {
        let dir = TempDir::new().unwrap();
        let primary = fixture(&dir, "abv");
        for i in 1..=3 {
            fixture(&dir, &format!("abv.{i}.cf"));
        }

        let binding = FileBinding::new(&primary, FileCategory::CentrifugeDb).unwrap();
        assert_eq!(binding.siblings().len(), 3);
        assert_eq!(binding.siblings()[0], dir.path().join("abv.1.cf"));
    }

    #[test]
    fn test_multi_file_reference_empty_sibling() {
        let dir = TempDir::new().unwrap();
        let primary = fixture(&dir, "abv");
        fixture(&dir, "abv.1.cf");
        empty_fixture(&dir, "abv.2.cf");
        fixture(&dir, "abv.3.cf");

        let err = FileBinding::new(&primary, FileCategory::CentrifugeDb).unwrap_err();
        assert!(matches!(
            err,
            BindingError::EmptyFile(ref path) if path.ends_with("abv.2.cf")
        ));
    }

    #[test]
    fn test_equality_is_path_only() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir, "notes.txt");

        let a = FileBinding::new(&path, FileCategory::Txt).unwrap();
        let b = FileBinding::new(&path, FileCategory::Any).unwrap();
        assert_eq!(a, b);
    }
}
