use tracing::{debug, trace};

use crate::core::check_status;
use crate::data::{Credentials, FetchOptions};
use crate::effects::fetcher::{ByteStream, Fetcher};
use crate::effects::http::{HttpTransport, RawResponse, ReqwestTransport};
use crate::error::Result;

/// Fetcher that sends every request with HTTP Basic authentication.
///
/// Credentials are attached up front on each request, without waiting for a
/// challenge. Only a `200 OK` response yields a body; any other status is an
/// error, and the unused body is released before that error is returned.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use selfupdate_fetch::{AuthenticatedHttpFetcher, FetchOptions, Fetcher};
///
/// let fetcher = AuthenticatedHttpFetcher::new("alice", "secret")
///     .with_options(FetchOptions::default().connect_timeout(Duration::from_secs(10)));
///
/// let mut file = std::fs::File::create("app.new")?;
/// fetcher.copy_to("https://updates.example.com/app-linux-x86_64", &mut file)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct AuthenticatedHttpFetcher<T = ReqwestTransport> {
    credentials: Credentials,
    transport:   T,
}

impl AuthenticatedHttpFetcher {
    /// Create a fetcher using the default reqwest transport.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::with_transport(Credentials::new(username, password), ReqwestTransport::default())
    }

    /// Replace the options of the reqwest transport.
    #[must_use]
    pub fn with_options(self, options: FetchOptions) -> Self {
        Self {
            credentials: self.credentials,
            transport:   ReqwestTransport::new(options),
        }
    }
}

impl<T: HttpTransport> AuthenticatedHttpFetcher<T> {
    pub fn with_transport(credentials: Credentials, transport: T) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    pub fn credentials(&self) -> &Credentials { &self.credentials }

    pub fn transport(&self) -> &T { &self.transport }
}

impl<T: HttpTransport> Fetcher for AuthenticatedHttpFetcher<T> {
    #[tracing::instrument(level = "debug", skip(self))]
    fn fetch(&self, url: &str) -> Result<ByteStream> {
        let RawResponse { status, body } = self.transport.get(url, &self.credentials)?;
        debug!(%status, "received response");

        if let Err(e) = check_status(url, status) {
            drop(body);
            trace!("released unused response body");
            return Err(e);
        }

        Ok(Box::new(body))
    }
}
