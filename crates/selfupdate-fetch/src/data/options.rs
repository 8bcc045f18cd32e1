use std::time::Duration;

/// Configuration for the HTTP client built on every fetch.
///
/// Both deadlines are disabled by default: a fetch blocks for as long as the
/// server takes to answer, and the returned body can be read at any pace.
///
/// # Examples
///
/// ```
/// use selfupdate_fetch::FetchOptions;
/// use std::time::Duration;
///
/// let options = FetchOptions::default()
///     .timeout(Duration::from_secs(120))
///     .connect_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Total deadline for a request, from connect until the body is fully read.
    ///
    /// Default: None
    pub timeout: Option<Duration>,

    /// Deadline for establishing the connection only.
    ///
    /// Default: None
    pub connect_timeout: Option<Duration>,
}

impl FetchOptions {
    /// Set the total request deadline.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect deadline.
    #[must_use]
    pub fn connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = Some(connect_timeout);
        self
    }
}
