//! Path and sequence helpers shared by the validation types.

pub mod paths;
