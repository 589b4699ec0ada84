//! Media module for post representation, parsing and filtering.

pub mod filter;
pub mod parser;
pub mod post;

pub use filter::is_image_post;
pub use parser::parse_listing;
pub use post::Post;
