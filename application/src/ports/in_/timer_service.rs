use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use domain::{GameState, LevelSnapshot, PokerConfig, StateError, TickOutcome};

const SECOND: Duration = Duration::from_secs(1);

#[derive(Clone, Debug)]
pub enum TimerCommand {
    StartStop,
    NextLevel,
    PrevLevel,
    ResetLevel,
    ReplaceConfig(Arc<PokerConfig>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    Started,
    Paused,
    LevelChanged { level: usize },
    LevelRestarted,
    ConfigReplaced { reset_timer: bool },
}

/// What the display polls on every redraw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimerView {
    pub snapshot: LevelSnapshot,
    pub running: bool,
    /// Time since the session started, paused or not.
    pub session_elapsed: Duration,
    /// Time since the clock was last paused; `None` while running or before
    /// the first pause.
    pub break_elapsed: Option<Duration>,
}

/// Drives a [`GameState`] from wall-clock steps and owns the run/pause state.
///
/// Steps are accumulated and the countdown ticks once per whole second of
/// running time.
pub struct TimerService {
    state: GameState,
    running: bool,
    pending: Duration,
    session_elapsed: Duration,
    break_elapsed: Option<Duration>,
}

impl TimerService {
    #[must_use]
    pub fn new(config: Arc<PokerConfig>) -> Self {
        Self {
            state: GameState::new(config),
            running: false,
            pending: Duration::ZERO,
            session_elapsed: Duration::ZERO,
            break_elapsed: None,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &Arc<PokerConfig> {
        self.state.config()
    }

    pub fn handle(
        &mut self,
        command: TimerCommand,
    ) -> Vec<TimerEvent> {
        match command {
            TimerCommand::StartStop => vec![self.toggle()],
            TimerCommand::NextLevel => self.state.next_level().then(|| self.level_changed()).into_iter().collect(),
            TimerCommand::PrevLevel => self.state.prev_level().then(|| self.level_changed()).into_iter().collect(),
            TimerCommand::ResetLevel => {
                self.state.reset_level();
                vec![self.level_changed()]
            }
            TimerCommand::ReplaceConfig(config) => {
                // Editing while paused restarts the level, editing live keeps the time left.
                let reset_timer = !self.running;
                self.state.update_config(config, reset_timer);
                info!(reset_timer, level = self.state.level(), "config replaced");
                vec![TimerEvent::ConfigReplaced { reset_timer }]
            }
        }
    }

    /// Feeds `elapsed` wall-clock time into the session.
    pub fn advance(
        &mut self,
        elapsed: Duration,
    ) -> Vec<TimerEvent> {
        self.session_elapsed += elapsed;

        if !self.running {
            if let Some(break_elapsed) = self.break_elapsed.as_mut() {
                *break_elapsed += elapsed;
            }
            return Vec::new();
        }

        self.pending += elapsed;
        let mut events = Vec::new();
        while self.pending >= SECOND {
            self.pending -= SECOND;
            match self.state.tick() {
                TickOutcome::Counted => {}
                TickOutcome::LevelAdvanced { level } => {
                    info!(level, "level period expired, advancing");
                    events.push(TimerEvent::LevelChanged { level });
                }
                TickOutcome::LevelRestarted => {
                    info!(level = self.state.level(), "final level period expired, restarting");
                    events.push(TimerEvent::LevelRestarted);
                }
            }
        }
        events
    }

    pub fn view(&self) -> Result<TimerView, StateError> {
        Ok(TimerView {
            snapshot: self.state.snapshot()?,
            running: self.running,
            session_elapsed: self.session_elapsed,
            break_elapsed: self.break_elapsed,
        })
    }

    fn toggle(&mut self) -> TimerEvent {
        self.running = !self.running;
        if self.running {
            self.break_elapsed = None;
            info!(level = self.state.level(), remaining = %self.state.remaining(), "clock started");
            TimerEvent::Started
        } else {
            self.break_elapsed = Some(Duration::ZERO);
            info!(level = self.state.level(), remaining = %self.state.remaining(), "clock paused");
            TimerEvent::Paused
        }
    }

    fn level_changed(&self) -> TimerEvent {
        debug!(level = self.state.level(), "level changed");
        TimerEvent::LevelChanged {
            level: self.state.level(),
        }
    }
}
