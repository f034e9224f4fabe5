use thiserror::Error;

/// Errors surfaced while building an OAuth signature.
///
/// Every variant is raised before any header is produced, so a caller never
/// sees a partially signed request.
#[derive(Error, Debug)]
pub enum Error {
    /// The operating system random source could not produce a nonce.
    #[error("failed to generate oauth nonce: {0}")]
    Entropy(#[from] rand::Error),

    /// A credential required for signing is absent or empty.
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),

    /// A request parameter collides with a protocol parameter.
    #[error("request parameter conflicts with oauth protocol parameter: {0}")]
    ParameterConflict(String),

    /// The request descriptor cannot be signed as given.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("failed to read credentials: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse credentials: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the error comes from the environment rather than from the
    /// caller's input.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Entropy(_) | Error::Io(_))
    }
}
