//! Homogeneous, ordered collections of file bindings.
//!
//! A [`FileGroup`] holds one binding per input path, all under the same
//! category and options - typically one file per sample of a cohort. On top
//! of the per-binding checks the group requires a single resolved extension
//! throughout: `.fa` and `.fasta` are both valid fasta files, but a group
//! mixing them almost always signals a wiring mistake upstream.

use std::ops::Index;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::core::binding::{BindingError, FileBinding, FileOptions};
use crate::core::category::FileCategory;
use crate::utils::paths::all_equal;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    #[error("Cannot construct a file group from zero paths")]
    EmptyGroup,

    #[error("File extensions are not all equal: {}", format_paths(.0))]
    InconsistentExtensions(Vec<PathBuf>),

    #[error(transparent)]
    Binding(#[from] BindingError),
}

/// Render a path list for error messages.
pub(crate) fn format_paths(paths: &[PathBuf]) -> String {
    let names: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    names.join(", ")
}

/// An ordered, non-empty collection of bindings sharing one category, one
/// option set, and one resolved extension.
///
/// Constructed once from a path sequence and not mutated afterwards. A
/// single malformed path fails the whole construction; no partial group is
/// ever returned.
#[derive(Debug, Clone)]
pub struct FileGroup {
    category: FileCategory,
    options: FileOptions,
    bindings: Vec<FileBinding>,
}

impl FileGroup {
    /// Build a group with default options, one eagerly validated binding
    /// per path, in input order.
    ///
    /// # Errors
    ///
    /// `GroupError::EmptyGroup` for a zero-length path sequence,
    /// `GroupError::Binding` for the first path that fails binding
    /// validation, `GroupError::InconsistentExtensions` when the bindings
    /// resolve to more than one extension.
    pub fn new(
        paths: impl IntoIterator<Item = impl Into<PathBuf>>,
        category: FileCategory,
    ) -> Result<Self, GroupError> {
        Self::with_options(paths, category, FileOptions::default())
    }

    /// Build a group with explicit options applied to every binding.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`FileGroup::new`].
    pub fn with_options(
        paths: impl IntoIterator<Item = impl Into<PathBuf>>,
        category: FileCategory,
        options: FileOptions,
    ) -> Result<Self, GroupError> {
        let bindings = paths
            .into_iter()
            .map(|path| FileBinding::with_options(path, category, options))
            .collect::<Result<Vec<_>, _>>()?;

        if bindings.is_empty() {
            return Err(GroupError::EmptyGroup);
        }

        let group = Self {
            category,
            options,
            bindings,
        };
        group.check_extensions_consistent()?;

        debug!(
            category = category.tag(),
            files = group.len(),
            extension = group.bindings[0].resolved_extension(),
            "group validated"
        );
        Ok(group)
    }

    /// Every binding must have resolved to the identical extension.
    fn check_extensions_consistent(&self) -> Result<(), GroupError> {
        let extensions = self.bindings.iter().map(FileBinding::resolved_extension);
        if !all_equal(extensions) {
            return Err(GroupError::InconsistentExtensions(
                self.paths().map(Path::to_path_buf).collect(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Always false: construction rejects empty path sequences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    #[must_use]
    pub fn category(&self) -> FileCategory {
        self.category
    }

    #[must_use]
    pub fn options(&self) -> FileOptions {
        self.options
    }

    /// The path at `index`, or `None` past the end. Validation completed at
    /// construction, so access never touches the filesystem.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.bindings.get(index).map(FileBinding::path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.bindings.iter().map(FileBinding::path)
    }

    /// The basenames of the member files, in order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.bindings.iter().map(FileBinding::name).collect()
    }

    #[must_use]
    pub fn bindings(&self) -> &[FileBinding] {
        &self.bindings
    }

    /// The single resolved extension shared by every member.
    #[must_use]
    pub fn resolved_extension(&self) -> &str {
        self.bindings[0].resolved_extension()
    }
}

impl Index<usize> for FileGroup {
    type Output = Path;

    fn index(&self, index: usize) -> &Path {
        self.bindings[index].path()
    }
}

/// Structural equality: elementwise path equality plus equal length.
impl PartialEq for FileGroup {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.paths().eq(other.paths())
    }
}

impl Eq for FileGroup {}
