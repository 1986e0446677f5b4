use thiserror::Error;

#[derive(Debug, Error)]
pub enum StudioError {
    /// User input was rejected before any external call was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The API credential is missing or was rejected by the provider.
    #[error("Credential error: {0}")]
    Credential(String),

    /// The external generation call failed as a whole. Carries the
    /// provider's human-readable cause; never retried.
    #[error("Generation failed: {0}")]
    Generation(String),

    /// A returned payload was not valid for the transport encoding.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The request could not be built or sent.
    #[error("Request error: {0}")]
    Request(String),

    /// The provider responded with something we could not interpret.
    #[error("Response error: {0}")]
    Response(String),
}

pub type Result<T> = std::result::Result<T, StudioError>;
