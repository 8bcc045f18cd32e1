//! I/O operations for fetching remote content.
//!
//! Everything that touches the network lives here, behind two traits:
//! [`Fetcher`] is what update logic depends on, and [`HttpTransport`] is the
//! seam between [`AuthenticatedHttpFetcher`] and the HTTP client it drives.

mod auth;
mod fetcher;
mod http;
mod mock;

pub use auth::AuthenticatedHttpFetcher;
pub use fetcher::{ByteStream, Fetcher};
pub use http::{HttpTransport, RawResponse, ReqwestTransport};
pub use mock::StaticFetcher;
