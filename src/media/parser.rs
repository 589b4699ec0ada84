//! Listing parsing utilities.

use crate::api::types::{ListingData, Thing};
use crate::config::is_valid_subreddit_name;
use crate::media::post::Post;

/// Listing kind for link posts.
const LINK_KIND: &str = "t3";

/// Convert a listing page into posts, in listing order.
///
/// Entries that are not links or carry no URL are dropped. A post whose
/// subreddit field is not a plain name gets `subreddit` instead.
pub fn parse_listing(listing: ListingData, subreddit: &str) -> Vec<Post> {
    listing
        .children
        .into_iter()
        .filter_map(|thing| parse_thing(thing, subreddit))
        .collect()
}

fn parse_thing(thing: Thing, subreddit: &str) -> Option<Post> {
    if thing.kind != LINK_KIND {
        tracing::debug!("Skipping listing entry of kind {}", thing.kind);
        return None;
    }

    let data = thing.data;
    let url = data.url.filter(|u| !u.is_empty())?;

    let content_type = if data.is_video {
        Some("hosted:video".to_string())
    } else {
        data.post_hint
    };

    Some(Post {
        id: data.id,
        title: data.title,
        subreddit: if is_valid_subreddit_name(&data.subreddit) {
            data.subreddit
        } else {
            subreddit.to_string()
        },
        url,
        created_utc: data.created_utc as i64,
        content_type,
    })
}
