use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use application::ports::in_::{SettingsService, TimerCommand, TimerEvent, TimerService, TimerView};
use domain::schedule::ScheduleCurves;
use domain::{ConfigField, PokerConfig, StateError};

/// How large the countdown is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayScale {
    Large,
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Timer,
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsMode {
    Browsing,
    Editing { buffer: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

pub struct App {
    pub timer: TimerService,
    pub settings: SettingsService,
    pub screen: Screen,
    pub scale: DisplayScale,
    pub controls_hidden: bool,
    pub selected_field: usize,
    pub settings_mode: SettingsMode,
    pub curves: Option<ScheduleCurves>,
    pub status: Option<Status>,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        config: Arc<PokerConfig>,
        settings: SettingsService,
        scale: DisplayScale,
    ) -> Self {
        let mut app = Self {
            timer: TimerService::new(config),
            settings,
            screen: Screen::Timer,
            scale,
            controls_hidden: false,
            selected_field: 0,
            settings_mode: SettingsMode::Browsing,
            curves: None,
            status: None,
            should_quit: false,
        };
        app.refresh_curves();
        app
    }

    pub fn view(&self) -> Result<TimerView, StateError> {
        self.timer.view()
    }

    pub fn config(&self) -> &Arc<PokerConfig> {
        self.timer.config()
    }

    pub fn command(
        &mut self,
        command: TimerCommand,
    ) {
        let events = self.timer.handle(command);
        self.note_events(&events);
    }

    pub fn advance(
        &mut self,
        elapsed: Duration,
    ) {
        let events = self.timer.advance(elapsed);
        self.note_events(&events);
    }

    /// Colon between minutes and seconds blinks while the clock runs.
    pub fn separator_visible(&self) -> bool {
        !self.timer.is_running() || self.timer.state().remaining().seconds() % 2 == 0
    }

    pub fn toggle_controls(&mut self) {
        self.controls_hidden = !self.controls_hidden;
    }

    pub fn open_settings(&mut self) {
        self.screen = Screen::Settings;
        self.settings_mode = SettingsMode::Browsing;
    }

    pub fn close_settings(&mut self) {
        self.screen = Screen::Timer;
        self.settings_mode = SettingsMode::Browsing;
    }

    pub fn selected(&self) -> ConfigField {
        ConfigField::ALL[self.selected_field]
    }

    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % ConfigField::ALL.len();
    }

    pub fn prev_field(&mut self) {
        self.selected_field = (self.selected_field + ConfigField::ALL.len() - 1) % ConfigField::ALL.len();
    }

    pub fn begin_edit(&mut self) {
        let buffer = self.selected().display(self.config());
        self.settings_mode = SettingsMode::Editing { buffer };
    }

    pub fn push_char(
        &mut self,
        c: char,
    ) {
        if let SettingsMode::Editing { buffer } = &mut self.settings_mode {
            buffer.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let SettingsMode::Editing { buffer } = &mut self.settings_mode {
            buffer.pop();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.settings_mode = SettingsMode::Browsing;
    }

    pub fn commit_edit(&mut self) {
        let SettingsMode::Editing { buffer } = &self.settings_mode else {
            return;
        };
        let field = self.selected();
        match self.settings.edit(self.config(), field, buffer) {
            Ok(config) => {
                self.apply_config(config);
                self.status = Some(Status::Info(format!("{} updated", field.name())));
                self.settings_mode = SettingsMode::Browsing;
            }
            Err(err) => {
                warn!(field = field.name(), error = %err, "rejected config edit");
                self.status = Some(Status::Error(err.to_string()));
            }
        }
    }

    pub fn apply_config(
        &mut self,
        config: PokerConfig,
    ) {
        self.command(TimerCommand::ReplaceConfig(Arc::new(config)));
        self.refresh_curves();
    }

    fn refresh_curves(&mut self) {
        match self.settings.curves(self.config()) {
            Ok(curves) => self.curves = Some(curves),
            Err(err) => {
                self.curves = None;
                self.status = Some(Status::Error(err.to_string()));
            }
        }
    }

    fn note_events(
        &mut self,
        events: &[TimerEvent],
    ) {
        for event in events {
            match event {
                TimerEvent::LevelChanged { level } => {
                    self.status = Some(Status::Info(format!("Level {level}")));
                }
                TimerEvent::LevelRestarted => {
                    self.status = Some(Status::Info("Final level restarted".to_string()));
                }
                TimerEvent::Started | TimerEvent::Paused | TimerEvent::ConfigReplaced { .. } => {}
            }
        }
    }
}

/// `HH:MM:SS`
pub fn format_hms(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

/// `MM:SS`
pub fn format_ms(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(Duration::from_secs(3725)), "01:02:05");
        assert_eq!(format_ms(Duration::from_secs(125)), "02:05");
    }
}
