//! File System Module
//!
//! The virtual file system tree and the path resolver that addresses it.

pub mod in_memory_fs;
pub mod path;
pub mod types;

pub use in_memory_fs::InMemoryFs;
pub use types::*;
