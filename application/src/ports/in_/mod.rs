pub mod settings_service;
pub mod timer_service;

pub use settings_service::{SettingsError, SettingsService};
pub use timer_service::{TimerCommand, TimerEvent, TimerService, TimerView};
