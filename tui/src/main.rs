use std::error::Error;
use std::fs::File;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use crossterm::{
    event::{Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use adapters::{JsonFileConfigRepository, TokioTimer, spawn_tick_driver};
use application::ports::in_::{SettingsService, TimerCommand};

mod app;
mod digits;
mod events;
mod theme;
mod ui;

use app::{App, DisplayScale, Screen, SettingsMode, Status};
use events::AppEvent;

const INPUT_POLL: Duration = Duration::from_millis(50);
const REDRAW_RATE: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Geometry {
    Uhd,
    Fhd,
    Vga,
    Qvga,
}

impl From<Geometry> for DisplayScale {
    fn from(geometry: Geometry) -> Self {
        match geometry {
            Geometry::Uhd | Geometry::Fhd => DisplayScale::Large,
            Geometry::Vga | Geometry::Qvga => DisplayScale::Compact,
        }
    }
}

#[derive(Parser)]
#[command(name = "blind-timer", about = "Poker tournament blind timer")]
struct Args {
    /// Display geometry; uhd and fhd draw the countdown in block digits
    #[arg(long, short, value_enum, default_value = "vga")]
    geometry: Geometry,

    /// Tournament configuration file
    #[arg(long, short, default_value = "configs/my_config.json")]
    config: PathBuf,

    /// Clock driver period in milliseconds
    #[arg(long, default_value_t = 10)]
    time_step_ms: u64,

    /// Write tracing output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    // The terminal owns stdout, so logs only go to a file.
    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    let repository = Arc::new(JsonFileConfigRepository::new(args.config.clone()));
    let settings = SettingsService::new(repository);
    let config = settings.load().await?;
    info!(
        config = %args.config.display(),
        levels = config.level_count(),
        step_ms = args.time_step_ms,
        "starting blind timer"
    );

    let mut app = App::new(Arc::new(config), settings, args.geometry.into());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(256);

    let input_tx = event_tx.clone();
    tokio::task::spawn_blocking(move || input_loop(input_tx));

    let step = Duration::from_millis(args.time_step_ms.max(1));
    let _driver = spawn_tick_driver(Arc::new(TokioTimer::new()), step, event_tx, AppEvent::Tick);

    let result = run(&mut terminal, &mut app, &mut event_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(result?)
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    events: &mut mpsc::Receiver<AppEvent>,
) -> io::Result<()> {
    let mut last_draw: Option<Instant> = None;

    while let Some(event) = events.recv().await {
        let force_redraw = matches!(event, AppEvent::Key(_));
        handle_event(app, event).await;

        if app.should_quit {
            info!("quit requested");
            break;
        }

        if force_redraw || last_draw.is_none_or(|at| at.elapsed() >= REDRAW_RATE) {
            terminal.draw(|frame| ui::draw(frame, app))?;
            last_draw = Some(Instant::now());
        }
    }

    Ok(())
}

fn input_loop(tx: mpsc::Sender<AppEvent>) {
    loop {
        if crossterm::event::poll(INPUT_POLL).unwrap_or(false)
            && let Ok(Event::Key(key)) = crossterm::event::read()
            && key.kind == KeyEventKind::Press
            && tx.blocking_send(AppEvent::Key(key)).is_err()
        {
            break;
        }
        if tx.is_closed() {
            break;
        }
    }
}

async fn handle_event(
    app: &mut App,
    event: AppEvent,
) {
    match event {
        AppEvent::Key(key) => match app.screen {
            Screen::Timer => handle_timer_key(app, key),
            Screen::Settings => handle_settings_key(app, key).await,
        },
        AppEvent::Tick(elapsed) => app.advance(elapsed),
    }
}

fn handle_timer_key(
    app: &mut App,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char(' ') => app.command(TimerCommand::StartStop),
        KeyCode::Char('n') | KeyCode::Right => app.command(TimerCommand::NextLevel),
        KeyCode::Char('p') | KeyCode::Left => app.command(TimerCommand::PrevLevel),
        KeyCode::Char('r') => app.command(TimerCommand::ResetLevel),
        KeyCode::Char('s') => app.open_settings(),
        KeyCode::Char('h') => app.toggle_controls(),
        _ => {}
    }
}

async fn handle_settings_key(
    app: &mut App,
    key: KeyEvent,
) {
    if let SettingsMode::Editing { .. } = app.settings_mode {
        match key.code {
            KeyCode::Enter => app.commit_edit(),
            KeyCode::Esc => app.cancel_edit(),
            KeyCode::Backspace => app.pop_char(),
            KeyCode::Char(c) => app.push_char(c),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_settings(),
        KeyCode::Up => app.prev_field(),
        KeyCode::Down => app.next_field(),
        KeyCode::Enter => app.begin_edit(),
        KeyCode::Char('w') => {
            let config = Arc::clone(app.config());
            match app.settings.save(&config).await {
                Ok(()) => app.status = Some(Status::Info(format!("Saved to {}", app.settings.location()))),
                Err(err) => {
                    error!(error = %err, "config save failed");
                    app.status = Some(Status::Error(err.to_string()));
                }
            }
        }
        KeyCode::Char('l') => match app.settings.load().await {
            Ok(config) => {
                app.apply_config(config);
                app.status = Some(Status::Info(format!("Reloaded {}", app.settings.location())));
            }
            Err(err) => app.status = Some(Status::Error(err.to_string())),
        },
        _ => {}
    }
}
