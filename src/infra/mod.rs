//! Infrastructure layer
//!
//! Filesystem access for the repository file manager.

pub mod filesystem;
