use thiserror::Error;

/// Failure taxonomy for a single fetch attempt.
///
/// The two kinds stay distinguishable on purpose: a [`WeatherError::Decoding`]
/// means the provider's response no longer matches our schema, while a
/// [`WeatherError::Network`] covers URL construction and transport problems.
/// No variant is retried automatically.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("network error: {0}")]
    Network(String),

    #[error("failed to decode provider response: {0}")]
    Decoding(#[from] serde_json::Error),
}

impl WeatherError {
    pub fn is_network(&self) -> bool {
        matches!(self, WeatherError::Network(_))
    }

    pub fn is_decoding(&self) -> bool {
        matches!(self, WeatherError::Decoding(_))
    }
}
