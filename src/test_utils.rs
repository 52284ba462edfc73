use crate::http::{HTTPError, HTTPResult};
use crate::reddit::service::Service;
use reqwest::StatusCode;
use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn load_data(file: &str) -> String {
    fs::read_to_string(format!("tests/data/{file}.json")).expect("could not find test data")
}

/// A shared count of the requests a test service has received.
#[derive(Clone, Debug, Default)]
pub struct Fetches(Arc<AtomicUsize>);

impl Fetches {
    fn record(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }
}

/// A deterministic service that answers requests from files under
/// `tests/data/`.
///
/// The about document is served from `about_<suffix>.json`. Hot listing
/// pages are served from `hot_<suffix>_<cursor>.json`, where the first
/// page's cursor is `start` and later cursors are whatever the previous
/// page's `after` field named; a fixture ends the listing by setting
/// `after` to `null`.
pub struct TestService<'a> {
    suffix: &'a str,
    fetches: Fetches,
}

impl<'a> TestService<'a> {
    pub fn new(suffix: &'a str) -> Self {
        Self {
            suffix,
            fetches: Fetches::default(),
        }
    }

    /// A handle onto the service's request count, usable after the
    /// service has been moved into a client.
    pub fn fetches(&self) -> Fetches {
        self.fetches.clone()
    }
}

impl<'a> Service for TestService<'a> {
    async fn get_about(&self, _subreddit: &str) -> HTTPResult<String> {
        self.fetches.record();
        Ok(load_data(&format!("about_{}", self.suffix)))
    }

    async fn get_hot(&self, _subreddit: &str, _limit: u32, after: Option<&str>) -> HTTPResult<String> {
        self.fetches.record();
        let page = after.unwrap_or("start");
        Ok(load_data(&format!("hot_{}_{page}", self.suffix)))
    }
}

/// A service whose every request fails with the given status.
pub struct ErrorService {
    status: StatusCode,
}

impl ErrorService {
    pub fn new(status: StatusCode) -> Self {
        Self { status }
    }
}

impl Service for ErrorService {
    async fn get_about(&self, _subreddit: &str) -> HTTPResult<String> {
        Err(HTTPError::Http(self.status))
    }

    async fn get_hot(&self, _subreddit: &str, _limit: u32, _after: Option<&str>) -> HTTPResult<String> {
        Err(HTTPError::Http(self.status))
    }
}

/// A service that serves fixture pages like [`TestService`] until it is
/// asked for a particular cursor, at which point it fails. Used to test
/// that a walk interrupted mid-listing discards everything.
pub struct InterruptedService<'a> {
    suffix: &'a str,
    fail_on: &'a str,
}

impl<'a> InterruptedService<'a> {
    pub fn new(suffix: &'a str, fail_on: &'a str) -> Self {
        Self { suffix, fail_on }
    }
}

impl<'a> Service for InterruptedService<'a> {
    async fn get_about(&self, _subreddit: &str) -> HTTPResult<String> {
        Ok(load_data(&format!("about_{}", self.suffix)))
    }

    async fn get_hot(&self, _subreddit: &str, _limit: u32, after: Option<&str>) -> HTTPResult<String> {
        if after == Some(self.fail_on) {
            return Err(HTTPError::Http(StatusCode::SERVICE_UNAVAILABLE));
        }
        let page = after.unwrap_or("start");
        Ok(load_data(&format!("hot_{}_{page}", self.suffix)))
    }
}
