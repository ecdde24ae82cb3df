//! Core validation types.
//!
//! The three-tier model, leaf-first:
//!
//! - [`category::FileCategory`]: the closed taxonomy of file roles - which
//!   extensions a role accepts and whether it is gzipped by definition
//! - [`binding::FileBinding`]: one path bound to one category, validated
//!   eagerly at construction
//! - [`group::FileGroup`]: an ordered, non-empty collection of bindings
//!   sharing one category and one resolved extension
//! - [`matched::PrefixMatchedGroupSet`]: groups aligned index-for-index by
//!   filename prefix (forward/reverse read pairs, sequence + index files)
//!
//! Control flows downward (sets validate groups, groups validate bindings,
//! bindings query the filesystem); data flows upward (indexing a set yields
//! the aligned row of paths for one sample).

pub mod binding;
pub mod category;
pub mod group;
pub mod matched;
