//! File system utilities.
//!
//! Handles:
//! - Filename generation and sanitization
//! - Output directory setup

pub mod naming;
pub mod paths;

pub use naming::{make_filename, partial_path, sanitize_filename, slugify_title};
pub use paths::{ensure_output_dir, output_path};
