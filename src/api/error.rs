use thiserror::Error;

/// Failure of one query or mutation, shown to the user as a single message
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Server responded with HTTP {0}")]
    Status(u16),
    /// Validation or business-rule failure reported by the server
    #[error("{0}")]
    Graphql(String),
    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Response is missing `{0}`")]
    MissingPayload(&'static str),
    #[error("Server did not confirm {0}")]
    Rejected(&'static str),
    #[error("Cache update failed: {0}")]
    Cache(#[from] entity_cache::CacheError),
}
