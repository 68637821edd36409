/// Error types for GeoServer interactions
use thiserror::Error;

/// Main error type for upstream requests and response handling
#[derive(Error, Debug)]
pub enum GeoError {
    /// The request never completed (DNS, refused connection, CORS, aborted)
    #[error("network request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success HTTP status
    #[error("server returned HTTP status {0}")]
    Status(u16),

    /// The response body was not the expected GeoJSON
    #[error("failed to parse GeoJSON response: {0}")]
    Parse(#[from] serde_json::Error),

    /// A feature arrived without a usable point geometry
    #[error("feature has no point geometry")]
    MissingGeometry,
}

/// Type alias for Results using GeoError
pub type Result<T> = std::result::Result<T, GeoError>;
