use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use application::ports::out_::{ConfigRepository, RepositoryError};
use domain::PokerConfig;

/// Stores a [`PokerConfig`] as a JSON document on disk.
pub struct JsonFileConfigRepository {
    path: PathBuf,
}

impl JsonFileConfigRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(
        &self,
        source: std::io::Error,
    ) -> RepositoryError {
        RepositoryError::Io {
            location: self.location(),
            source,
        }
    }

    fn malformed(
        &self,
        err: &serde_json::Error,
    ) -> RepositoryError {
        RepositoryError::Malformed {
            location: self.location(),
            reason: err.to_string(),
        }
    }
}

#[async_trait]
impl ConfigRepository for JsonFileConfigRepository {
    async fn load(&self) -> Result<PokerConfig, RepositoryError> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(RepositoryError::NotFound(self.location()));
            }
            Err(err) => return Err(self.io_error(err)),
        };
        debug!(path = %self.path.display(), bytes = text.len(), "read config file");
        serde_json::from_str(&text).map_err(|err| self.malformed(&err))
    }

    async fn save(
        &self,
        config: &PokerConfig,
    ) -> Result<(), RepositoryError> {
        let text = serde_json::to_string_pretty(config).map_err(|err| self.malformed(&err))?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|err| self.io_error(err))?;
        }
        tokio::fs::write(&self.path, text).await.map_err(|err| self.io_error(err))?;
        debug!(path = %self.path.display(), "wrote config file");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
