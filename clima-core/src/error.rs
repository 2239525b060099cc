use thiserror::Error;

/// Failures the aggregator reports to its caller.
#[derive(Debug, Error)]
pub enum ClimaError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl ClimaError {
    /// Text shown to the browser, matching the frontend's expectations.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "Nome vazio",
            Self::NotFound(_) => "Cidade não encontrada",
        }
    }

    /// HTTP status the error maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::NotFound(_) => 404,
        }
    }
}

/// Why an upstream call produced no data.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Upstream rate limited the request (429)")]
    RateLimited,

    #[error("Upstream rejected the request with status {0}")]
    Status(u16),

    #[error("Failed to decode upstream JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

impl FetchError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }
}
