use std::io::{self, Read, Write};
use std::sync::Arc;

use crate::error::{FetchError, Result};

/// An open response body.
///
/// The caller owns the stream. Dropping it releases the underlying
/// connection, whether the body was read fully, partially, not at all, or a
/// read failed halfway.
pub type ByteStream = Box<dyn Read + Send>;

/// Retrieval of remote content by URL.
///
/// This is the capability update logic is written against. Version checks
/// fetch a metadata document, installers fetch a binary; both can be handed
/// a [`StaticFetcher`](crate::StaticFetcher) in tests instead of a live
/// [`AuthenticatedHttpFetcher`](crate::AuthenticatedHttpFetcher).
///
/// # Implementations
///
/// - [`AuthenticatedHttpFetcher`](crate::AuthenticatedHttpFetcher): HTTP GET with Basic auth
/// - [`StaticFetcher`](crate::StaticFetcher): canned in-memory responses
pub trait Fetcher {
    /// Open `url` and return its body.
    ///
    /// The URL is not validated up front; a malformed URL is reported by the
    /// implementation as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, the transport fails,
    /// or the server answers with anything other than `200 OK`.
    fn fetch(&self, url: &str) -> Result<ByteStream>;

    /// Fetch `url` and read the whole body into memory.
    ///
    /// Meant for small documents such as version manifests.
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let mut stream = self.fetch(url)?;
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).map_err(FetchError::Body)?;
        Ok(buf)
    }

    /// Fetch `url` and stream the body into `writer`, returning the number of
    /// bytes copied.
    fn copy_to(&self, url: &str, writer: &mut dyn Write) -> Result<u64> {
        let mut stream = self.fetch(url)?;
        io::copy(&mut stream, writer).map_err(FetchError::Body)
    }
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str) -> Result<ByteStream> { (**self).fetch(url) }
}

impl<F: Fetcher + ?Sized> Fetcher for Box<F> {
    fn fetch(&self, url: &str) -> Result<ByteStream> { (**self).fetch(url) }
}

impl<F: Fetcher + ?Sized> Fetcher for Arc<F> {
    fn fetch(&self, url: &str) -> Result<ByteStream> { (**self).fetch(url) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticFetcher;

    const URL: &str = "http://example.test/app.bin";

    /// Yields one chunk, then fails.
    struct BrokenBody {
        sent: bool,
    }

    impl Read for BrokenBody {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.sent {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
            }
            self.sent = true;
            buf[..3].copy_from_slice(b"abc");
            Ok(3)
        }
    }

    struct BrokenFetcher;

    impl Fetcher for BrokenFetcher {
        fn fetch(&self, _url: &str) -> Result<ByteStream> {
            Ok(Box::new(BrokenBody { sent: false }))
        }
    }

    #[test]
    fn test_fetch_bytes() {
        let fetcher = StaticFetcher::new().body(URL, b"payload".to_vec());
        assert_eq!(fetcher.fetch_bytes(URL).unwrap(), b"payload");
    }

    #[test]
    fn test_copy_to_counts_bytes() {
        let fetcher = StaticFetcher::new().body(URL, vec![7u8; 4096]);
        let mut out = Vec::new();
        let copied = fetcher.copy_to(URL, &mut out).unwrap();
        assert_eq!(copied, 4096);
        assert_eq!(out, vec![7u8; 4096]);
    }

    #[test]
    fn test_read_failure_is_body_error() {
        let err = BrokenFetcher.fetch_bytes(URL).unwrap_err();
        assert!(matches!(err, FetchError::Body(ref e) if e.kind() == io::ErrorKind::ConnectionReset));

        let mut out = Vec::new();
        let err = BrokenFetcher.copy_to(URL, &mut out).unwrap_err();
        assert!(matches!(err, FetchError::Body(_)));
    }

    #[test]
    fn test_fetch_error_passes_through_helpers() {
        let fetcher = StaticFetcher::new();
        let err = fetcher.fetch_bytes(URL).unwrap_err();
        assert!(matches!(err, FetchError::BadStatus { .. }));
    }

    #[test]
    fn test_trait_object_and_wrappers() {
        let fetcher: Arc<dyn Fetcher + Send + Sync> =
            Arc::new(StaticFetcher::new().body(URL, b"x".to_vec()));
        assert_eq!(fetcher.fetch_bytes(URL).unwrap(), b"x");

        let boxed: Box<dyn Fetcher> = Box::new(StaticFetcher::new().body(URL, b"y".to_vec()));
        assert_eq!((&boxed).fetch_bytes(URL).unwrap(), b"y");
    }
}
