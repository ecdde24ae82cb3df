//! Path helper functions.
//!
//! These are the filename-level primitives the binding/group types are built
//! on: suffix segmentation, prefix extraction, sibling-path derivation, and
//! cheap filesystem metadata checks. Nothing here reads file contents.

use std::path::{Path, PathBuf};

/// Split the dot-delimited suffix segments of a path's final component.
///
/// Each returned segment includes its leading dot. A leading dot on the
/// filename itself (hidden files) does not start a segment.
///
/// # Examples
///
/// ```
/// use biofile_check::utils::paths::suffix_segments;
///
/// assert_eq!(suffix_segments("sample.fq.gz"), vec![".fq", ".gz"]);
/// assert_eq!(suffix_segments("reads.fastq"), vec![".fastq"]);
/// assert!(suffix_segments(".bashrc").is_empty());
/// assert!(suffix_segments("README").is_empty());
/// ```
#[must_use]
pub fn suffix_segments(path: impl AsRef<Path>) -> Vec<String> {
    let Some(name) = path.as_ref().file_name().and_then(|n| n.to_str()) else {
        return Vec::new();
    };

    let stem = name.trim_start_matches('.');
    stem.split('.')
        .skip(1)
        .filter(|segment| !segment.is_empty())
        .map(|segment| format!(".{segment}"))
        .collect()
}

/// Extract the prefix token of a path: the final component with every
/// suffix segment stripped.
///
/// The prefix token is the portion of the filename that identifies the
/// sample, before any processing-step or extension segments.
///
/// # Examples
///
/// ```
/// use biofile_check::utils::paths::extract_prefix_token;
///
/// assert_eq!(extract_prefix_token("data/FA_SC.trim.map.sam"), "FA_SC");
/// assert_eq!(extract_prefix_token("s1.R1.fastq"), "s1");
/// assert_eq!(extract_prefix_token("README"), "README");
/// ```
#[must_use]
pub fn extract_prefix_token(path: impl AsRef<Path>) -> String {
    let Some(name) = path.as_ref().file_name().and_then(|n| n.to_str()) else {
        return String::new();
    };

    let suffix_len: usize = suffix_segments(name).iter().map(String::len).sum();
    name[..name.len() - suffix_len].to_string()
}

/// Append a suffix to a path without replacing the existing extension.
///
/// Used to derive the sibling files of a multi-file reference, e.g.
/// `db` + `.1.cf` -> `db.1.cf`.
#[must_use]
pub fn with_suffix_appended(path: &Path, suffix: &str) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(suffix);
    PathBuf::from(os)
}

/// True if the path exists, is a regular file or symlink target with
/// queryable metadata, and has non-zero size.
#[must_use]
pub fn exists_and_nonempty(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) => meta.len() > 0,
        Err(_) => false,
    }
}

/// True if every item in the iterator compares equal to the first.
///
/// An empty iterator is trivially all-equal.
pub fn all_equal<T: PartialEq>(items: impl IntoIterator<Item = T>) -> bool {
    let mut iter = items.into_iter();
    match iter.next() {
        Some(first) => iter.all(|item| item == first),
        None => true,
    }
}
