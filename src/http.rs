//! Services for communicating with APIs using HTTP.

use reqwest::{Client, ClientBuilder, redirect};
use thiserror::Error;

/// A general service for making HTTP calls.
///
/// Implementors get a preconfigured [`Client`] for free. Think of an
/// implementor as a proxy for a remote _service_, even though a _client_
/// is what actually talks to it; a service might not be remote at all,
/// such as when a deterministic implementation is used for testing.
pub trait HTTPService {
    /// Default HTTP client that can be used to make HTTP requests.
    ///
    /// Automatic redirect following is disabled: Reddit signals unknown
    /// or banned subreddits with a redirect, and following it would make
    /// a dead endpoint look like a successful response.
    fn client() -> Client {
        ClientBuilder::new()
            .user_agent(Self::user_agent())
            .redirect(redirect::Policy::none())
            .build()
            // Better error handling? According to the docs, build() only
            // fails if a TLS backend cannot be initialized, or if DNS
            // resolution cannot be initialized, and both of these seem
            // like unrecoverable errors for us.
            .expect("could not create a new HTTP client")
    }

    /// An appropriate user agent to use when making HTTP requests.
    fn user_agent() -> String {
        format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

/// The result of an HTTP request.
pub type HTTPResult<T> = Result<T, HTTPError>;

/// Indicates an error has occurred when making an HTTP call.
#[derive(Debug, Error)]
pub enum HTTPError {
    /// An error retrieving the body of a response.
    #[error("Error retrieving body of HTTP response: {0}")]
    Body(#[source] reqwest::Error),

    /// An error that occurred while making an HTTP request.
    #[error("Error while making HTTP request: {0}")]
    Request(#[source] reqwest::Error),

    /// An unsuccessful HTTP status code in an HTTP response.
    ///
    /// Redirects land here too, since redirect following is disabled.
    #[error("Request returned HTTP {0}")]
    Http(reqwest::StatusCode),
}
