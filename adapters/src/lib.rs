mod json_config;
mod tick_driver;
mod tokio_timer;

pub use json_config::JsonFileConfigRepository;
pub use tick_driver::spawn_tick_driver;
pub use tokio_timer::TokioTimer;
