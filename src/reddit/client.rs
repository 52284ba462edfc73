// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Clients for reading data from the Reddit API.

use crate::count::KeywordCounter;
use crate::reddit::service::{RedditService, Service};
use crate::thing::{About, Listing, Post};
use log::{debug, warn};

/// The largest page size the listing endpoint will honor.
const HOT_PAGE_LIMIT: u32 = 100;

/// Page size for the top-ten view of a subreddit.
const TOP_TEN_LIMIT: u32 = 10;

/// Represents a subreddit.
///
/// Operations that can fail distinguish a no-data outcome (`None`, or 0
/// for [`subscribers`](Subreddit::subscribers)) from a legitimately empty
/// result: a subreddit with no hot posts yields an empty list, while an
/// unreachable or nonexistent one yields nothing at all.
#[derive(Debug)]
pub struct Subreddit<T: Service> {
    name: String,
    service: T,
}

impl Subreddit<RedditService> {
    /// Creates a new client for reading data about the given subreddit.
    ///
    /// `name` should be the subreddit's name, without the `/r/` prefix.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_service(name, RedditService::default())
    }
}

impl<T: Service> Subreddit<T> {
    /// Creates a new client for reading data about the given subreddit,
    /// using `service` to retrieve it.
    pub(crate) fn with_service(name: impl Into<String>, service: T) -> Self {
        Self {
            name: name.into(),
            service,
        }
    }

    /// The subreddit's name.
    pub fn name(&self) -> String {
        self.name.to_string()
    }

    // Subreddit names are restricted to ASCII alphanumerics and
    // underscores. Anything else is rejected before a request is made.
    fn has_valid_name(&self) -> bool {
        !self.name.is_empty()
            && self
                .name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    /// The number of accounts subscribed to the subreddit.
    ///
    /// Returns 0 if the subreddit does not exist, if its name is
    /// malformed, or if the request fails for any reason. A return value
    /// of 0 is therefore ambiguous: it means either "zero subscribers" or
    /// "no data", and the two cannot be told apart from the result alone.
    pub async fn subscribers(&self) -> u64 {
        if !self.has_valid_name() {
            debug!("not looking up malformed subreddit name {:?}", self.name);
            return 0;
        }

        match self.service.get_about(&self.name).await {
            Ok(body) => About::parse(&body).subscribers(),
            Err(err) => {
                warn!("could not look up r/{}: {err}", self.name);
                0
            }
        }
    }

    /// Walks every page of the subreddit's hot listing, folding each post
    /// into `acc` in listing order.
    ///
    /// Pages are fetched strictly sequentially, following the listing's
    /// continuation cursor until the endpoint stops returning one. The
    /// final accumulator is returned on success. If any page cannot be
    /// retrieved, the walk aborts and returns `None`, discarding whatever
    /// had accumulated; partial results never leak to the caller.
    pub async fn fold_hot<A, F>(&self, mut acc: A, mut fold: F) -> Option<A>
    where
        F: FnMut(&mut A, &Post),
    {
        if !self.has_valid_name() {
            debug!("not walking malformed subreddit name {:?}", self.name);
            return None;
        }

        let mut after: Option<String> = None;
        loop {
            let body = match self
                .service
                .get_hot(&self.name, HOT_PAGE_LIMIT, after.as_deref())
                .await
            {
                Ok(body) => body,
                Err(err) => {
                    warn!("aborting hot walk of r/{}: {err}", self.name);
                    return None;
                }
            };

            let listing = Listing::parse(&body);
            for post in listing.posts() {
                fold(&mut acc, post);
            }

            match listing.after() {
                Some(cursor) => after = Some(cursor.to_string()),
                None => return Some(acc),
            }
        }
    }

    /// The titles of every post in the subreddit's hot listing, in
    /// listing order.
    ///
    /// Titles are returned verbatim, as the API sent them. Returns `None`
    /// if the listing cannot be retrieved in full.
    pub async fn hot_titles(&self) -> Option<Vec<String>> {
        self.fold_hot(Vec::new(), |titles: &mut Vec<String>, post| {
            titles.push(post.title().to_string())
        })
        .await
    }

    /// The titles of the first ten posts in the subreddit's hot listing.
    ///
    /// Unlike [`hot_titles`](Subreddit::hot_titles), this issues a single
    /// request and never follows the continuation cursor. Returns `None`
    /// if the request fails.
    pub async fn top_ten(&self) -> Option<Vec<String>> {
        if !self.has_valid_name() {
            debug!("not querying malformed subreddit name {:?}", self.name);
            return None;
        }

        let body = match self
            .service
            .get_hot(&self.name, TOP_TEN_LIMIT, None)
            .await
        {
            Ok(body) => body,
            Err(err) => {
                warn!("could not retrieve hot posts for r/{}: {err}", self.name);
                return None;
            }
        };

        let listing = Listing::parse(&body);
        Some(listing.posts().map(|post| post.title().to_string()).collect())
    }

    /// Counts how often each of `keywords` appears across the titles of
    /// every post in the subreddit's hot listing.
    ///
    /// The counter is created fresh for each call and threaded through
    /// the whole walk; call [`KeywordCounter::report`] on the result for
    /// the sorted, non-zero counts. Returns `None` if the listing cannot
    /// be retrieved in full, discarding any counts from pages that had
    /// already been processed.
    pub async fn count_keywords<I>(&self, keywords: I) -> Option<KeywordCounter>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let counter = KeywordCounter::from_keywords(keywords);
        self.fold_hot(counter, |counter: &mut KeywordCounter, post| {
            counter.tally(post.title())
        })
        .await
    }
}
