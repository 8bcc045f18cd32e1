//! Authenticated HTTP retrieval for self-updating programs.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable credentials and options
//! - [`core`] - Pure status decisions
//! - [`effects`] - Blocking I/O behind the [`Fetcher`] and [`HttpTransport`] traits
//!
//! # Key Features
//!
//! - **Substitutable**: update logic depends on [`Fetcher`], tests plug in [`StaticFetcher`]
//! - **Owned Bodies**: a successful fetch hands back a [`ByteStream`] whose connection is
//!   released when it is dropped
//! - **Mechanism-Only**: no retries, caching or verification; the caller owns policy
//!
//! # Example
//!
//! ```no_run
//! use selfupdate_fetch::{AuthenticatedHttpFetcher, Fetcher};
//!
//! let fetcher = AuthenticatedHttpFetcher::new("alice", "secret");
//! let manifest = fetcher.fetch_bytes("https://updates.example.com/version.json")?;
//! # Ok::<(), selfupdate_fetch::FetchError>(())
//! ```

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use data::{Credentials, FetchOptions, StatusLine};
pub use effects::{
    AuthenticatedHttpFetcher, ByteStream, Fetcher, HttpTransport, RawResponse, ReqwestTransport,
    StaticFetcher,
};
pub use error::{BoxError, FetchError, Result};

pub use reqwest::StatusCode;
