use std::fmt;

use reqwest::StatusCode;

/// Status code plus the reason phrase the server actually sent.
///
/// Displays as `{code} {reason}`. When the server sent no phrase of its own,
/// the canonical one for the code is used, and an unknown code with no
/// phrase shows the bare number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    code:   StatusCode,
    reason: Option<String>,
}

impl StatusLine {
    pub fn new(code: StatusCode) -> Self { Self { code, reason: None } }

    /// Attach the reason phrase received on the wire.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn code(&self) -> StatusCode { self.code }

    /// The phrase shown for this status, received or canonical.
    pub fn reason(&self) -> Option<&str> {
        self.reason
            .as_deref()
            .filter(|r| !r.is_empty())
            .or_else(|| self.code.canonical_reason())
    }
}

impl From<StatusCode> for StatusLine {
    fn from(code: StatusCode) -> Self { Self::new(code) }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason() {
            Some(reason) => write!(f, "{} {}", self.code.as_str(), reason),
            None => f.write_str(self.code.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_reason_fallback() {
        let line = StatusLine::new(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(line.to_string(), "503 Service Unavailable");
    }

    #[test]
    fn test_received_reason_wins() {
        let line = StatusLine::new(StatusCode::SERVICE_UNAVAILABLE).with_reason("Down For Maintenance");
        assert_eq!(line.to_string(), "503 Down For Maintenance");
        assert_eq!(line.code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_unknown_code() {
        let code = StatusCode::from_u16(599).unwrap();
        assert_eq!(StatusLine::new(code).to_string(), "599");
        assert_eq!(StatusLine::new(code).with_reason("Custom").to_string(), "599 Custom");
    }

    #[test]
    fn test_empty_reason_falls_back() {
        let line = StatusLine::new(StatusCode::NOT_FOUND).with_reason("");
        assert_eq!(line.to_string(), "404 Not Found");
    }
}
