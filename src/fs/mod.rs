//! Filesystem layer module
//!
//! Everything that touches the disk lives here: the base-directory strategy,
//! URL path resolution, and the UNIX-style operation primitives.

pub mod home;
pub mod ops;
pub mod resolver;
