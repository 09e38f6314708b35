use std::time::Duration;

use crossterm::event::KeyEvent;

pub enum AppEvent {
    Key(KeyEvent),
    /// Wall-clock step from the tick driver.
    Tick(Duration),
}
