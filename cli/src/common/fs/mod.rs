//! # SupportBot Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!

/// Contains basic file I/O operations (e.g., `read_file_to_string`).
pub mod io;
