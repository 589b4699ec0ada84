//! Deduplication module.
//!
//! Provides MD5 content hashing used to skip images that were already saved
//! earlier in the same run.

pub mod hash;

pub use hash::ContentHasher;
