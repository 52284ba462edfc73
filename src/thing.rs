//! A "thing" in the Reddit sense.
//!
//! Historically in the Reddit API and its old source code, a "Thing" was
//! any element of the Reddit system: users, posts, subreddits, etc. This
//! module encapsulates that idea and decodes the slices of the API's JSON
//! that the rest of the crate actually consumes. Everything else in the
//! payload is ignored, and anything missing or undecodable falls back to
//! a default rather than becoming an error.

use serde::Deserialize;

/// Subreddit metadata, as returned by `/r/<subreddit>/about.json`.
#[derive(Debug, Default, Deserialize)]
pub struct About {
    #[serde(default)]
    data: AboutData,
}

#[derive(Debug, Default, Deserialize)]
struct AboutData {
    #[serde(default)]
    subscribers: u64,
}

impl About {
    /// Parses a text response from the subreddit "about" endpoint.
    ///
    /// A body that cannot be decoded, or that lacks a subscriber count,
    /// yields zero subscribers.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// The number of accounts subscribed to the subreddit.
    pub fn subscribers(&self) -> u64 {
        self.data.subscribers
    }
}

/// One page of a cursor-paginated listing, as returned by
/// `/r/<subreddit>/hot.json`.
#[derive(Debug, Default, Deserialize)]
pub struct Listing {
    #[serde(default)]
    data: ListingData,
}

#[derive(Debug, Default, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Child>,
    #[serde(default)]
    after: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Child {
    #[serde(default)]
    data: Post,
}

/// A submitted post. Only the title survives decoding.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Post {
    #[serde(default)]
    title: String,
}

impl Post {
    /// The post's title, verbatim as the API returned it.
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Listing {
    /// Parses a text response from a listing endpoint.
    ///
    /// A body that cannot be decoded yields an empty page with no
    /// continuation cursor, which ends a walk gracefully.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// The page's posts, in listing order.
    pub fn posts(&self) -> impl Iterator<Item = &Post> {
        self.data.children.iter().map(|child| &child.data)
    }

    /// The continuation cursor, if the listing has more pages.
    pub fn after(&self) -> Option<&str> {
        self.data.after.as_deref()
    }
}
