// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! HTTPS connector for the Reddit API.
//!
//! Service structures in this module provide a low-level way to interact
//! with the Reddit API over HTTPS, essentially a specialized HTTPS client
//! specifically for Reddit.

use crate::http::{HTTPError, HTTPResult, HTTPService};
use log::debug;
use reqwest::Client;

/// A service for retrieving subreddit data.
///
/// Using this trait, clients can implement different ways of connecting
/// to the Reddit API, such as an actual connector for production code,
/// and a mocked connector for testing purposes.
pub trait Service {
    /// Retrieves the subreddit's metadata ("about") document as raw text.
    fn get_about(&self, subreddit: &str) -> impl Future<Output = HTTPResult<String>> + Send;

    /// Retrieves one page of the subreddit's hot listing as raw text.
    ///
    /// `limit` bounds the page size. `after` is the continuation cursor
    /// returned by the previous page, or `None` for the first page.
    fn get_hot(
        &self,
        subreddit: &str,
        limit: u32,
        after: Option<&str>,
    ) -> impl Future<Output = HTTPResult<String>> + Send;
}

/// A service that contacts the Reddit API directly to retrieve information.
pub struct RedditService {
    client: Client,
}

impl HTTPService for RedditService {}

impl Default for RedditService {
    /// Creates a new Reddit service.
    fn default() -> Self {
        Self {
            client: Self::client(),
        }
    }
}

impl RedditService {
    fn uri(&self, subreddit: &str, resource: &str) -> String {
        format!("https://www.reddit.com/r/{subreddit}/{resource}.json")
    }

    fn hot_uri(&self, subreddit: &str, limit: u32, after: Option<&str>) -> String {
        let mut uri = format!("{}?limit={limit}", self.uri(subreddit, "hot"));
        if let Some(after) = after {
            uri.push_str(&format!("&after={after}"));
        }
        uri
    }

    /// Sends a GET request to a Reddit API endpoint and returns the raw body.
    ///
    /// Any non-success status, including the redirects Reddit uses to
    /// signal unknown subreddits, is an error; the body of such a
    /// response is never returned.
    async fn get(&self, uri: &str) -> HTTPResult<String> {
        debug!("GET {uri}");
        let resp = self
            .client
            .get(uri)
            .send()
            .await
            .map_err(HTTPError::Request)?;

        if !resp.status().is_success() {
            Err(HTTPError::Http(resp.status()))
        } else {
            resp.text().await.map_err(HTTPError::Body)
        }
    }
}

impl Service for RedditService {
    async fn get_about(&self, subreddit: &str) -> HTTPResult<String> {
        let uri = self.uri(subreddit, "about");
        self.get(&uri).await
    }

    async fn get_hot(&self, subreddit: &str, limit: u32, after: Option<&str>) -> HTTPResult<String> {
        let uri = self.hot_uri(subreddit, limit, after);
        self.get(&uri).await
    }
}
