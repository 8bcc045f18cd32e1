use std::io::Read;

use hyper::ext::ReasonPhrase;
use reqwest::blocking::{Client, Response};

use crate::data::{Credentials, FetchOptions, StatusLine};
use crate::error::{FetchError, Result};

/// A response whose status has not been inspected yet.
#[derive(Debug)]
pub struct RawResponse<B> {
    pub status: StatusLine,
    pub body:   B,
}

/// Blocking HTTP client abstraction.
///
/// This trait is the minimal interface [`AuthenticatedHttpFetcher`] needs:
/// send one authenticated GET and hand back the status with the unread body.
/// Status policy stays in the fetcher, so transports return every response
/// they receive.
///
/// # Implementations
///
/// - [`ReqwestTransport`]: Production implementation using `reqwest::blocking`
/// - Test transports that record requests or observe body release
///
/// [`AuthenticatedHttpFetcher`]: crate::AuthenticatedHttpFetcher
pub trait HttpTransport: Send + Sync {
    /// Response body type. Dropping it must release the connection.
    type Body: Read + Send + 'static;

    /// Send `GET url` with Basic authentication built from `credentials`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::InvalidRequest`] if the request cannot be built
    /// - [`FetchError::Client`] if the client cannot be created
    /// - [`FetchError::Transport`] if the request fails on the wire
    fn get(&self, url: &str, credentials: &Credentials) -> Result<RawResponse<Self::Body>>;
}

/// Production transport using `reqwest::blocking`.
///
/// A new client is built for every request, so no connection state is
/// shared between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestTransport {
    options: FetchOptions,
}

impl ReqwestTransport {
    pub fn new(options: FetchOptions) -> Self { Self { options } }

    pub fn options(&self) -> &FetchOptions { &self.options }

    fn client(&self) -> Result<Client> {
        // The blocking builder defaults to a 30s timeout; `None` turns it off.
        Client::builder()
            .timeout(self.options.timeout)
            .connect_timeout(self.options.connect_timeout)
            .build()
            .map_err(|e| FetchError::Client(Box::new(e)))
    }
}

impl HttpTransport for ReqwestTransport {
    type Body = Response;

    fn get(&self, url: &str, credentials: &Credentials) -> Result<RawResponse<Response>> {
        let client = self.client()?;
        let request = client
            .get(url)
            .basic_auth(credentials.username(), Some(credentials.password()))
            .build()
            .map_err(|e| FetchError::InvalidRequest(Box::new(e)))?;

        // Scheme checks happen inside `execute`; those fail before any I/O.
        let response = client.execute(request).map_err(|e| {
            if e.is_builder() {
                FetchError::InvalidRequest(Box::new(e))
            } else {
                FetchError::Transport(Box::new(e))
            }
        })?;

        Ok(RawResponse {
            status: status_line(&response),
            body:   response,
        })
    }
}

/// hyper only records the phrase when it differs from the canonical one.
fn status_line(response: &Response) -> StatusLine {
    let status = StatusLine::new(response.status());
    match response.extensions().get::<ReasonPhrase>() {
        Some(reason) => status.with_reason(String::from_utf8_lossy(reason.as_bytes())),
        None => status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_transport_has_no_deadline() {
        let transport = ReqwestTransport::default();
        assert_eq!(transport.options().timeout, None);
        assert_eq!(transport.options().connect_timeout, None);
    }

    #[test]
    fn test_transport_keeps_options() {
        let options = FetchOptions::default().timeout(Duration::from_secs(3));
        let transport = ReqwestTransport::new(options);
        assert_eq!(transport.options(), &options);
    }

    #[test]
    fn test_malformed_url_is_invalid_request() {
        let transport = ReqwestTransport::default();
        let credentials = Credentials::new("u", "p");
        let err = transport.get("not a url", &credentials).unwrap_err();
        assert!(matches!(err, FetchError::InvalidRequest(_)), "{err:?}");
    }

    #[test]
    fn test_unsupported_scheme_is_invalid_request() {
        let transport = ReqwestTransport::default();
        let credentials = Credentials::new("u", "p");
        let err = transport.get("ftp://example.test/app.bin", &credentials).unwrap_err();
        assert!(matches!(err, FetchError::InvalidRequest(_)), "{err:?}");
    }

    #[test]
    fn test_missing_scheme_is_invalid_request() {
        let transport = ReqwestTransport::default();
        let credentials = Credentials::new("u", "p");
        let err = transport.get("example.test/version.json", &credentials).unwrap_err();
        assert!(matches!(err, FetchError::InvalidRequest(_)), "{err:?}");
    }
}
