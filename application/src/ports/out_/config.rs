use async_trait::async_trait;
use thiserror::Error;

use domain::PokerConfig;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("config {0} does not exist")]
    NotFound(String),

    #[error("could not access config {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config {location} is malformed: {reason}")]
    Malformed { location: String, reason: String },
}

/// Where tournament configurations are loaded from and saved to.
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    async fn load(&self) -> Result<PokerConfig, RepositoryError>;

    async fn save(
        &self,
        config: &PokerConfig,
    ) -> Result<(), RepositoryError>;

    /// Human readable location, used in messages.
    fn location(&self) -> String;
}
