use std::collections::HashMap;
use std::io::{self, Cursor};
use std::sync::Mutex;

use reqwest::StatusCode;

use crate::effects::fetcher::{ByteStream, Fetcher};
use crate::error::{FetchError, Result};

#[derive(Debug, Clone)]
enum Canned {
    Body(Vec<u8>),
    Status(StatusCode),
    Failure(String),
}

/// In-memory fetcher with canned responses, for testing update logic
/// without network access.
///
/// URLs with no canned response answer `404 Not Found`.
///
/// # Examples
///
/// ```
/// use selfupdate_fetch::{Fetcher, StaticFetcher, StatusCode};
///
/// let fetcher = StaticFetcher::new()
///     .body("http://example.test/version.json", br#"{"version":"1.2.3"}"#.to_vec())
///     .status("http://example.test/app.bin", StatusCode::FORBIDDEN);
///
/// assert!(fetcher.fetch("http://example.test/version.json").is_ok());
/// assert!(fetcher.fetch("http://example.test/app.bin").is_err());
/// assert_eq!(fetcher.requests().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct StaticFetcher {
    responses: HashMap<String, Canned>,
    requests:  Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self { Self::default() }

    /// Serve `body` with `200 OK` for `url`.
    #[must_use]
    pub fn body(mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.responses.insert(url.into(), Canned::Body(body.into()));
        self
    }

    /// Answer `url` with `status`.
    #[must_use]
    pub fn status(mut self, url: impl Into<String>, status: StatusCode) -> Self {
        self.responses.insert(url.into(), Canned::Status(status));
        self
    }

    /// Fail `url` with a transport error carrying `message`.
    #[must_use]
    pub fn failure(mut self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.responses.insert(url.into(), Canned::Failure(message.into()));
        self
    }

    /// Every URL fetched so far, in order.
    pub fn requests(&self) -> Vec<String> {
        match self.requests.lock() {
            Ok(requests) => requests.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn record(&self, url: &str) {
        match self.requests.lock() {
            Ok(mut requests) => requests.push(url.to_string()),
            Err(poisoned) => poisoned.into_inner().push(url.to_string()),
        }
    }
}

impl Fetcher for StaticFetcher {
    fn fetch(&self, url: &str) -> Result<ByteStream> {
        self.record(url);

        match self.responses.get(url) {
            Some(Canned::Body(body)) => Ok(Box::new(Cursor::new(body.clone()))),
            Some(Canned::Status(status)) => Err(FetchError::bad_status(url, *status)),
            Some(Canned::Failure(message)) => Err(FetchError::Transport(Box::new(io::Error::other(
                message.clone(),
            )))),
            None => Err(FetchError::bad_status(url, StatusCode::NOT_FOUND)),
        }
    }
}
