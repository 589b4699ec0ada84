//! Image post selection.

use mime_guess::mime;

use crate::media::post::Post;

/// Content hint Reddit attaches to direct image links.
const IMAGE_HINT: &str = "image";

/// Whether the post links directly to an image resource.
///
/// The URL's extension decides when it maps to a known MIME type. Otherwise
/// the post's content hint is used. Redirects are never followed.
pub fn is_image_post(post: &Post) -> bool {
    match post.url_extension().and_then(|ext| mime_guess::from_ext(&ext).first()) {
        Some(mime_type) => mime_type.type_() == mime::IMAGE,
        None => post.content_type.as_deref() == Some(IMAGE_HINT),
    }
}
