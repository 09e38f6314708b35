use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::ports::out_::{ConfigRepository, RepositoryError};
use domain::schedule::{self, ScheduleCurves};
use domain::{ConfigError, ConfigField, PokerConfig, ScheduleError};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// Loads, edits and saves tournament configurations.
pub struct SettingsService {
    repository: Arc<dyn ConfigRepository>,
}

impl SettingsService {
    pub fn new(repository: Arc<dyn ConfigRepository>) -> Self {
        Self { repository }
    }

    #[must_use]
    pub fn location(&self) -> String {
        self.repository.location()
    }

    pub async fn load(&self) -> Result<PokerConfig, SettingsError> {
        let config = self.repository.load().await.inspect_err(|err| {
            warn!(location = %self.repository.location(), error = %err, "config load failed");
        })?;
        info!(
            location = %self.repository.location(),
            levels = config.level_count(),
            "config loaded"
        );
        Ok(config)
    }

    pub async fn save(
        &self,
        config: &PokerConfig,
    ) -> Result<(), SettingsError> {
        self.repository.save(config).await?;
        info!(location = %self.repository.location(), "config saved");
        Ok(())
    }

    /// Applies one field edit and regenerates the schedule. `config` is left
    /// untouched when the text does not parse or the result is invalid.
    pub fn edit(
        &self,
        config: &PokerConfig,
        field: ConfigField,
        raw: &str,
    ) -> Result<PokerConfig, SettingsError> {
        let edited = config.with_field(field, raw)?;
        info!(field = field.name(), value = raw, "config field edited");
        Ok(edited)
    }

    /// Linear and scaled-reference curves for the schedule chart. The
    /// combined curve is the stored schedule, which may have been edited by
    /// hand and differ from what the parameters generate.
    pub fn curves(
        &self,
        config: &PokerConfig,
    ) -> Result<ScheduleCurves, SettingsError> {
        let mut curves = schedule::curves(&config.schedule_params())?;
        curves.combined = config.big_blind_values().to_vec();
        Ok(curves)
    }
}
