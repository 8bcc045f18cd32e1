//! Error types for selfupdate-fetch.

use std::io;

use reqwest::StatusCode;
use thiserror::Error;

use crate::data::StatusLine;

/// Type-erased error produced by a transport.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be built; nothing was sent.
    #[error("invalid request: {0}")]
    InvalidRequest(#[source] BoxError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] BoxError),

    /// Network-level failure, surfaced as reported by the transport.
    #[error(transparent)]
    Transport(BoxError),

    #[error("bad http status from {url}: {status}")]
    BadStatus { url: String, status: StatusLine },

    #[error("failed to read response body: {0}")]
    Body(#[source] io::Error),
}

impl FetchError {
    pub fn bad_status(url: impl Into<String>, status: impl Into<StatusLine>) -> Self {
        FetchError::BadStatus {
            url:    url.into(),
            status: status.into(),
        }
    }

    /// The status code carried by a [`FetchError::BadStatus`].
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::BadStatus { status, .. } => Some(status.code()),
            _ => None,
        }
    }

    /// The full status line carried by a [`FetchError::BadStatus`].
    pub fn status_line(&self) -> Option<&StatusLine> {
        match self {
            FetchError::BadStatus { status, .. } => Some(status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
