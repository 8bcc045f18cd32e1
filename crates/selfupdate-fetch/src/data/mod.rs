//! Immutable data types for authenticated fetching.
//!
//! These values are built once and then only read, so a fetcher holding them
//! can be shared across threads without synchronization.

mod credentials;
mod options;
mod status_line;

pub use credentials::Credentials;
pub use options::FetchOptions;
pub use status_line::StatusLine;
