use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table},
};

use application::ports::in_::TimerView;
use domain::ConfigField;

use crate::app::{App, DisplayScale, Screen, SettingsMode, Status, format_hms, format_ms};
use crate::digits;
use crate::theme;

const TIMER_KEYS: &[(&str, &str)] = &[
    ("Space", "Start/Stop"),
    ("P", "Prev"),
    ("N", "Next"),
    ("R", "Reset"),
    ("S", "Settings"),
    ("H", "Hide"),
    ("Q", "Quit"),
];

pub fn draw(
    frame: &mut Frame,
    app: &App,
) {
    match app.screen {
        Screen::Timer => draw_timer(frame, app),
        Screen::Settings => draw_settings(frame, app),
    }
}

fn draw_timer(
    frame: &mut Frame,
    app: &App,
) {
    let area = frame.area();
    let countdown_height = match app.scale {
        DisplayScale::Large => digits::GLYPH_HEIGHT as u16 + 2,
        DisplayScale::Compact => 3,
    };
    let controls_height = if app.controls_hidden { 0 } else { 3 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Title / total time
            Constraint::Length(countdown_height), // Countdown
            Constraint::Length(3),                // Blinds
            Constraint::Length(3),                // Next blinds / level
            Constraint::Min(1),                   // Break timer
            Constraint::Length(controls_height),  // Controls
            Constraint::Length(1),                // Status
        ])
        .split(area);

    match app.view() {
        Ok(view) => {
            render_title(frame, chunks[0], &view);
            render_countdown(frame, chunks[1], app, &view);
            render_blinds(frame, chunks[2], &view);
            render_next_blinds(frame, chunks[3], app, &view);
            render_break(frame, chunks[4], &view);
        }
        Err(err) => {
            let message = Paragraph::new(format!("Configuration error: {err}"))
                .style(Style::default().fg(theme::CHIP_RED).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme::CHIP_RED)));
            frame.render_widget(message, chunks[1].union(chunks[2]).union(chunks[3]));
        }
    }

    if !app.controls_hidden {
        render_controls(frame, chunks[5]);
    }
    render_status(frame, chunks[6], app);
}

fn render_title(
    frame: &mut Frame,
    area: Rect,
    view: &TimerView,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (state_text, state_color) = if view.running {
        ("● RUNNING", theme::FELT_BRIGHT)
    } else {
        ("■ PAUSED", theme::CHIP_RED)
    };
    let state = Paragraph::new(format!(" POKER TIMER  {state_text}"))
        .style(Style::default().fg(state_color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(theme::BORDER_INACTIVE)));
    frame.render_widget(state, chunks[0]);

    let total = Paragraph::new(format!("{} ", format_hms(view.session_elapsed)))
        .style(Style::default().fg(theme::TEXT_SECONDARY))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(theme::BORDER_INACTIVE)));
    frame.render_widget(total, chunks[1]);
}

fn render_countdown(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    view: &TimerView,
) {
    let separator = if app.separator_visible() { ':' } else { ' ' };
    let text = format!("{:02}{separator}{:02}", view.snapshot.minute, view.snapshot.second);
    let color = if view.running { theme::TEXT_PRIMARY } else { theme::TEXT_SECONDARY };

    let lines: Vec<Line> = match app.scale {
        DisplayScale::Large => digits::render(&text).into_iter().map(Line::from).collect(),
        DisplayScale::Compact => vec![Line::from(text)],
    };
    let countdown = Paragraph::new(lines)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme::BORDER_ACTIVE)));
    frame.render_widget(countdown, area);
}

fn render_blinds(
    frame: &mut Frame,
    area: Rect,
    view: &TimerView,
) {
    let blinds = Paragraph::new(format!("{} / {}", view.snapshot.small_blind, view.snapshot.big_blind))
        .style(Style::default().fg(theme::CHIP_GOLD).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().title(" BLINDS ").borders(Borders::ALL).border_style(Style::default().fg(theme::BORDER_INACTIVE)));
    frame.render_widget(blinds, area);
}

fn render_next_blinds(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    view: &TimerView,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let next = match (view.snapshot.next_small_blind, view.snapshot.next_big_blind) {
        (Some(small), Some(big)) => format!("NEXT  {small} / {big}"),
        _ => "NEXT  N/A".to_string(),
    };
    let next = Paragraph::new(next)
        .style(Style::default().fg(theme::TEXT_SECONDARY))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme::BORDER_INACTIVE)));
    frame.render_widget(next, chunks[0]);

    let level = Paragraph::new(format!("LEVEL {} / {}", view.snapshot.level, app.config().final_level()))
        .style(Style::default().fg(theme::TEXT_PRIMARY).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme::BORDER_INACTIVE)));
    frame.render_widget(level, chunks[1]);
}

fn render_break(
    frame: &mut Frame,
    area: Rect,
    view: &TimerView,
) {
    if let Some(elapsed) = view.break_elapsed {
        let text = Paragraph::new(format!("BREAK {}", format_ms(elapsed)))
            .style(Style::default().fg(theme::CHIP_RED).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(text, area);
    }
}

fn render_controls(
    frame: &mut Frame,
    area: Rect,
) {
    let constraints = vec![Constraint::Ratio(1, TIMER_KEYS.len() as u32); TIMER_KEYS.len()];
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (chunk, (key, label)) in chunks.iter().zip(TIMER_KEYS) {
        render_button(frame, *chunk, key, label);
    }
}

fn render_button(
    frame: &mut Frame,
    area: Rect,
    key: &str,
    label: &str,
) {
    let line = Line::from(vec![
        Span::styled(format!("[{key}] "), Style::default().fg(theme::FELT_BRIGHT).add_modifier(Modifier::BOLD)),
        Span::styled(label.to_string(), Style::default().fg(theme::TEXT_PRIMARY)),
    ]);
    let button = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme::BORDER_INACTIVE)));
    frame.render_widget(button, area);
}

fn render_status(
    frame: &mut Frame,
    area: Rect,
    app: &App,
) {
    let text = match &app.status {
        Some(Status::Error(error)) => Paragraph::new(format!("Error: {error}")).style(Style::default().fg(theme::CHIP_RED)),
        Some(Status::Info(info)) => Paragraph::new(info.clone()).style(Style::default().fg(theme::FELT_BRIGHT)),
        None => Paragraph::new(format!("Config: {}", app.settings.location())).style(Style::default().fg(theme::TEXT_DIM)),
    };
    frame.render_widget(text.alignment(Alignment::Center), area);
}

fn draw_settings(
    frame: &mut Frame,
    app: &App,
) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Chart + form/table
            Constraint::Length(1), // Help
            Constraint::Length(1), // Status
        ])
        .split(area);

    let title = Paragraph::new("SETTINGS")
        .style(Style::default().fg(theme::FELT_BRIGHT).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_schedule_chart(frame, body[0], app);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(ConfigField::ALL.len() as u16 + 2), Constraint::Min(5)])
        .split(body[1]);
    render_field_form(frame, side[0], app);
    render_level_table(frame, side[1], app);

    let help = match app.settings_mode {
        SettingsMode::Browsing => "↑/↓ select, Enter edit, W write config, L reload config, Esc back",
        SettingsMode::Editing { .. } => "Type a value, Enter apply, Esc cancel",
    };
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(theme::TEXT_DIM)).alignment(Alignment::Center),
        chunks[2],
    );
    render_status(frame, chunks[3], app);
}

fn render_schedule_chart(
    frame: &mut Frame,
    area: Rect,
    app: &App,
) {
    let block = Block::default()
        .title(" Big blind per level ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_ACTIVE));

    let Some(curves) = &app.curves else {
        frame.render_widget(Paragraph::new("No schedule").block(block), area);
        return;
    };

    let points = |values: &[u64]| -> Vec<(f64, f64)> {
        values.iter().enumerate().map(|(i, v)| (i as f64 + 1.0, *v as f64)).collect()
    };
    let linear = points(&curves.linear);
    let scaled = points(&curves.scaled);
    let combined = points(&curves.combined);

    let levels = curves.combined.len().max(1) as f64;
    let max_value = curves
        .linear
        .iter()
        .chain(&curves.scaled)
        .chain(&curves.combined)
        .copied()
        .max()
        .unwrap_or(1) as f64;

    let datasets = vec![
        Dataset::default()
            .name("Linear")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme::FELT_BRIGHT))
            .data(&linear),
        Dataset::default()
            .name("Scaled")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme::CHIP_BLUE))
            .data(&scaled),
        Dataset::default()
            .name("Combined")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme::CHIP_GOLD))
            .data(&combined),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Level")
                .style(Style::default().fg(theme::TEXT_DIM))
                .bounds([1.0, levels])
                .labels(vec!["1".to_string(), format!("{}", levels as usize)]),
        )
        .y_axis(
            Axis::default()
                .title("BB")
                .style(Style::default().fg(theme::TEXT_DIM))
                .bounds([0.0, max_value * 1.05])
                .labels(vec!["0".to_string(), format!("{}", max_value as u64)]),
        );
    frame.render_widget(chart, area);
}

fn render_field_form(
    frame: &mut Frame,
    area: Rect,
    app: &App,
) {
    let config = app.config();
    let lines: Vec<Line> = ConfigField::ALL
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let selected = i == app.selected_field;
            let value = match (&app.settings_mode, selected) {
                (SettingsMode::Editing { buffer }, true) => format!("{buffer}_"),
                _ => field.display(config),
            };
            let name_style = if selected {
                Style::default().fg(theme::FELT_BRIGHT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::TEXT_SECONDARY)
            };
            Line::from(vec![
                Span::styled(format!("{} {:<15}", if selected { '>' } else { ' ' }, field.name()), name_style),
                Span::styled(format!("{value:<10}"), Style::default().fg(theme::TEXT_PRIMARY)),
                Span::styled(format!(" {}", field.constraint()), Style::default().fg(theme::TEXT_DIM)),
            ])
        })
        .collect();

    let form = Paragraph::new(lines).block(
        Block::default()
            .title(" Parameters ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER_ACTIVE)),
    );
    frame.render_widget(form, area);
}

fn render_level_table(
    frame: &mut Frame,
    area: Rect,
    app: &App,
) {
    let config = app.config();
    let current = app.timer.state().level();
    let period = config.level_period().to_string();

    let rows: Vec<Row> = config
        .big_blind_values()
        .iter()
        .enumerate()
        .map(|(i, bb)| {
            let level = i + 1;
            let style = if level == current {
                Style::default().fg(theme::CHIP_GOLD).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::TEXT_PRIMARY)
            };
            Row::new(vec![
                Cell::from(level.to_string()),
                Cell::from((bb / 2).to_string()),
                Cell::from(bb.to_string()),
                Cell::from(period.clone()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(8),
    ];
    let table = Table::new(rows, widths)
        .header(Row::new(vec!["Level", "SB", "BB", "Period"]).style(Style::default().fg(theme::TEXT_DIM)))
        .block(
            Block::default()
                .title(" Levels ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::BORDER_INACTIVE)),
        );
    frame.render_widget(table, area);
}
