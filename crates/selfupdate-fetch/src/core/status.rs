use reqwest::StatusCode;

use crate::data::StatusLine;
use crate::error::{FetchError, Result};

/// Accepts a response only when its status is exactly `200 OK`.
///
/// Every other code is rejected with [`FetchError::BadStatus`], including other
/// 2xx codes, redirects the transport did not follow, and informational codes.
/// The error keeps the status line as received, reason phrase included.
///
/// # Examples
///
/// ```
/// use selfupdate_fetch::StatusCode;
/// use selfupdate_fetch::core::check_status;
///
/// assert!(check_status("http://example.test/", StatusCode::OK).is_ok());
/// assert!(check_status("http://example.test/", StatusCode::NO_CONTENT).is_err());
/// ```
pub fn check_status(url: &str, status: impl Into<StatusLine>) -> Result<()> {
    let status = status.into();
    if status.code() == StatusCode::OK {
        Ok(())
    } else {
        Err(FetchError::bad_status(url, status))
    }
}
