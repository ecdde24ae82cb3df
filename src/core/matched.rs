//! Sets of file groups aligned index-for-index by filename prefix.
//!
//! The canonical use case is paired-end sequencing: a forward-reads group
//! and a reverse-reads group where `set.row(3)` must return the two mates
//! of the same sample. Alignment is by prefix token - the filename portion
//! before its first extension segment - so `s1.R1.fastq` and `s1.R2.fastq`
//! line up while `s1.R1.fastq` and `xx.R2.fastq` do not. The same mechanism
//! pairs a sequence group with its index-file groups.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::core::group::{format_paths, FileGroup};
use crate::utils::paths::{all_equal, extract_prefix_token};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchedGroupError {
    #[error("Cannot construct a matched group set from zero groups")]
    EmptySet,

    #[error("Group is matched with a structurally identical group: {}", format_group_paths(.0))]
    DuplicateGroup(Vec<Vec<PathBuf>>),

    #[error("Matched groups do not have equal lengths: {}", format_group_paths(.0))]
    LengthMismatch(Vec<Vec<PathBuf>>),

    #[error("Matched groups do not share file prefixes: {}", format_group_paths(.0))]
    PrefixMismatch(Vec<Vec<PathBuf>>),
}

fn format_group_paths(groups: &[Vec<PathBuf>]) -> String {
    let rendered: Vec<String> = groups
        .iter()
        .map(|paths| format!("[{}]", format_paths(paths)))
        .collect();
    rendered.join(" ")
}

/// An ordered collection of file groups whose members align by prefix
/// token at every index.
///
/// Constructed once, never mutated. Member groups stay independently
/// usable; the set only adds the cross-group invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMatchedGroupSet {
    groups: Vec<FileGroup>,
}

impl PrefixMatchedGroupSet {
    /// Build a set from a non-empty sequence of groups, validating before
    /// returning: no two member groups may be structurally equal, all must
    /// have the same length, and at every index the prefix tokens must
    /// agree across groups.
    ///
    /// # Errors
    ///
    /// `MatchedGroupError::EmptySet`, `DuplicateGroup`, `LengthMismatch`,
    /// or `PrefixMismatch`, in that check order; each carries the
    /// implicated groups' path lists.
    pub fn new(groups: Vec<FileGroup>) -> Result<Self, MatchedGroupError> {
        if groups.is_empty() {
            return Err(MatchedGroupError::EmptySet);
        }

        let set = Self { groups };
        set.check_no_duplicate_groups()?;
        set.check_lengths_match()?;
        set.check_prefixes_match()?;

        debug!(
            groups = set.groups.len(),
            rows = set.len(),
            "matched group set validated"
        );
        Ok(set)
    }

    /// No member group may be matched with itself (structural equality).
    fn check_no_duplicate_groups(&self) -> Result<(), MatchedGroupError> {
        for (i, group_a) in self.groups.iter().enumerate() {
            for group_b in &self.groups[i + 1..] {
                if group_a == group_b {
                    return Err(MatchedGroupError::DuplicateGroup(vec![
                        owned_paths(group_a),
                        owned_paths(group_b),
                    ]));
                }
            }
        }
        Ok(())
    }

    fn check_lengths_match(&self) -> Result<(), MatchedGroupError> {
        if !all_equal(self.groups.iter().map(FileGroup::len)) {
            return Err(MatchedGroupError::LengthMismatch(self.all_paths()));
        }
        Ok(())
    }

    /// At every index, the prefix token of each group's file must be
    /// identical across groups.
    fn check_prefixes_match(&self) -> Result<(), MatchedGroupError> {
        let prefixes: Vec<Vec<String>> = self
            .groups
            .iter()
            .map(|group| group.paths().map(extract_prefix_token).collect())
            .collect();
        if !all_equal(prefixes) {
            return Err(MatchedGroupError::PrefixMismatch(self.all_paths()));
        }
        Ok(())
    }

    fn all_paths(&self) -> Vec<Vec<PathBuf>> {
        self.groups.iter().map(owned_paths).collect()
    }

    /// The common group length (validated equal across members).
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups[0].len()
    }

    /// Always false: construction rejects empty sets and empty groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() || self.groups[0].is_empty()
    }

    #[must_use]
    pub fn groups(&self) -> &[FileGroup] {
        &self.groups
    }

    /// The aligned row at `index`: one path per member group, in group
    /// order. `None` past the common length.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<Vec<&Path>> {
        self.groups
            .iter()
            .map(|group| group.get(index))
            .collect::<Option<Vec<_>>>()
    }

    /// Iterate over the aligned rows in order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Path>> {
        (0..self.len()).filter_map(|i| self.row(i))
    }
}

fn owned_paths(group: &FileGroup) -> Vec<PathBuf> {
    group.paths().map(Path::to_path_buf).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::category::FileCategory;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn fixture_group(dir: &TempDir, names: &[&str], category: FileCategory) -> FileGroup {
        let paths: Vec<PathBuf> = names
            .iter()
            .map(|name| {
                let path = dir.path().join(name);
                let mut file = File::create(&path).unwrap();
                file.write_all(b"@read\nACGT\n+\nFFFF\n").unwrap();
                path
            })
            .collect();
        FileGroup::new(paths, category).unwrap()
    }

    #[test]
    fn test_paired_reads_align_by_row() {
        let dir = TempDir::new().unwrap();
        let fwd = fixture_group(
            &dir,
            &["s1.R1.fastq", "s2.R1.fastq"],
            FileCategory::FwdFastq,
        );
        let rev = fixture_group(
            &dir,
            &["s1.R2.fastq", "s2.R2.fastq"],
            FileCategory::RevFastq,
        );

        let set = PrefixMatchedGroupSet::new(vec![fwd, rev]).unwrap();
        assert_eq!(set.len(), 2);

        let row = set.row(0).unwrap();
        assert_eq!(row[0], dir.path().join("s1.R1.fastq"));
        assert_eq!(row[1], dir.path().join("s1.R2.fastq"));

        let row = set.row(1).unwrap();
        assert_eq!(row[0], dir.path().join("s2.R1.fastq"));
        assert_eq!(row[1], dir.path().join("s2.R2.fastq"));

        assert!(set.row(2).is_none());
        assert_eq!(set.rows().count(), 2);
    }

    #[test]
    fn test_empty_set() {
        let err = PrefixMatchedGroupSet::new(Vec::new()).unwrap_err();
        assert_eq!(err, MatchedGroupError::EmptySet);
    }

    #[test]
    fn test_duplicate_group() {
        let dir = TempDir::new().unwrap();
        let reads = fixture_group(&dir, &["s1.R1.fastq", "s2.R1.fastq"], FileCategory::Fastq);

        let err = PrefixMatchedGroupSet::new(vec![reads.clone(), reads]).unwrap_err();
        assert!(matches!(err, MatchedGroupError::DuplicateGroup(_)));
    }

    #[test]
    fn test_length_mismatch() {
        let dir = TempDir::new().unwrap();
        let fwd = fixture_group(
            &dir,
            &["s1.R1.fastq", "s2.R1.fastq"],
            FileCategory::FwdFastq,
        );
        let rev = fixture_group(&dir, &["s1.R2.fastq"], FileCategory::RevFastq);

        let err = PrefixMatchedGroupSet::new(vec![fwd, rev]).unwrap_err();
        assert!(matches!(err, MatchedGroupError::LengthMismatch(ref g) if g.len() == 2));
    }

    #[test]
    fn test_prefix_mismatch() {
        let dir = TempDir::new().unwrap();
        let fwd = fixture_group(
            &dir,
            &["s1.R1.fastq", "s2.R1.fastq"],
            FileCategory::FwdFastq,
        );
        let rev = fixture_group(
            &dir,
            &["s1.R2.fastq", "xx.R2.fastq"],
            FileCategory::RevFastq,
        );

        let err = PrefixMatchedGroupSet::new(vec![fwd, rev]).unwrap_err();
        assert!(matches!(err, MatchedGroupError::PrefixMismatch(_)));
    }

    #[test]
    fn test_sequence_with_index_files() {
        let dir = TempDir::new().unwrap();
        let fasta = fixture_group(&dir, &["s1.fa", "s2.fa"], FileCategory::Fasta);
        let fai = fixture_group(&dir, &["s1.fai", "s2.fai"], FileCategory::Fai);

        let set = PrefixMatchedGroupSet::new(vec![fasta, fai]).unwrap();
        let row = set.row(1).unwrap();
        assert_eq!(row, vec![dir.path().join("s2.fa"), dir.path().join("s2.fai")]);
    }

    #[test]
    fn test_error_message_carries_paths() {
        let dir = TempDir::new().unwrap();
        let fwd = fixture_group(&dir, &["s1.R1.fastq"], FileCategory::FwdFastq);
        let rev = fixture_group(&dir, &["xx.R2.fastq"], FileCategory::RevFastq);

        let err = PrefixMatchedGroupSet::new(vec![fwd, rev]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("s1.R1.fastq"));
        assert!(message.contains("xx.R2.fastq"));
    }
}
