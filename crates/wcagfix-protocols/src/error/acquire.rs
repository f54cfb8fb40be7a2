//! Document acquisition errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("{url} responded with HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to read body: {0}")]
    BodyRead(String),

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url() {
        let err = AcquireError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_http_status() {
        let err = AcquireError::HttpStatus {
            url: "https://example.com/".to_string(),
            status: 404,
        };
        let display = err.to_string();
        assert!(display.contains("example.com"));
        assert!(display.contains("404"));
    }

    #[test]
    fn test_not_found() {
        let err = AcquireError::NotFound("./test.html".to_string());
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("./test.html"));
    }

    #[test]
    fn test_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AcquireError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
        assert!(err.to_string().contains("denied"));
    }
}
