//! A tick-mark timeline date picker for the terminal.
//!
//! Run the binary to pick a date by clicking, dragging or stepping along
//! the strip; the chosen date is printed to stdout on Enter. Run with
//! `--init-config` to write the default config file.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stderr};
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::Color,
    widgets::Paragraph,
    Terminal,
};
use tracing::debug;

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::{ActiveView, AppState},
};
use crate::core::{picker::DatePicker, strip::StripLayout};
use crate::ui::{
    layout::AppLayout,
    popup::HelpPopup,
    strip_widget::StripWidget,
    theme::{self, Theme},
};

/// Event-poll timeout, which doubles as the animation frame budget.
const TICK_RATE: Duration = Duration::from_millis(33);

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), version, about = "Tick-mark timeline date picker")]
struct Cli {
    /// Number of selectable days (default: as many as fit the terminal).
    #[arg(long)]
    days: Option<usize>,

    /// Rightmost date of the strip (defaults to today).
    #[arg(long, value_name = "YYYY-MM-DD")]
    anchor: Option<NaiveDate>,

    /// Output format for the chosen date (strftime syntax).
    #[arg(long, value_name = "FMT")]
    format: Option<String>,

    /// Disable the glide animation (targets apply immediately).
    #[arg(long)]
    no_animation: bool,

    /// Write the current config to the config file and exit.
    #[arg(long)]
    init_config: bool,
}

// ───────────────────────────────────────── date output ───────

/// Format `date` with a user-supplied strftime string. Returns `None`
/// when the string is invalid for a plain date (for example a time
/// specifier), instead of panicking at print time.
fn format_date(date: NaiveDate, format: &str) -> Option<String> {
    use std::fmt::Write as _;
    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}

/// Bottom bar: selected date, hover preview, key hints.
fn status_line(state: &AppState) -> String {
    let selected = state.picker.selected_date();
    match state.picker.hovered_date() {
        Some(hover) => format!(
            " {selected}   hover: {}   {}",
            hover.format("%b %d"),
            state.config.status_bar_hint()
        ),
        None => format!(" {selected}   {}", state.config.status_bar_hint()),
    }
}

/// Apply one event to the state.
fn dispatch(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Key(k) => handler::handle_key(state, k),
        AppEvent::Mouse(m) => handler::handle_mouse(state, m),
        AppEvent::Resize(w, h) => state.terminal_area = Rect::new(0, 0, w, h),
        AppEvent::Tick => {}
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only in debug builds / when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();
    let user_config = config::AppConfig::load();

    // ── config-bootstrap mode ─────────────────────────────────
    if cli.init_config {
        user_config.save()?;
        println!("{}", config::config_path().display());
        return Ok(());
    }

    // ── build the picker ──────────────────────────────────────
    let anchor = cli.anchor.unwrap_or_else(|| Local::now().date_naive());

    let date_format = cli
        .format
        .clone()
        .unwrap_or_else(|| user_config.date_format.clone());
    if format_date(anchor, &date_format).is_none() {
        bail!("invalid date format string: {date_format:?}");
    }

    // One-cell ticks with one-cell gaps, sized to the terminal unless
    // --days pins the count.
    let term_cols = crossterm::terminal::size().map(|(w, _)| w).unwrap_or(80);
    let fit = (usize::from(term_cols.saturating_sub(4)) / 2).max(2);
    let days = match cli.days {
        Some(days) => {
            let clamped = days.clamp(2, fit);
            if clamped != days {
                debug!(days, clamped, "clamping --days to the terminal width");
            }
            clamped
        }
        None => fit,
    };
    let layout = StripLayout::for_ticks(days, 1.0, 1.0);

    let animate = user_config.animation && !cli.no_animation;
    let picker = DatePicker::new(layout, anchor)
        .animations(animate)
        .on_change(|date| debug!(%date, "date selected"));

    let mut state = AppState::new(picker, user_config);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let mut events = spawn_event_reader(TICK_RATE);

    // ── event loop ────────────────────────────────────────────
    loop {
        // ── draw first ─────────────────────────────────────────
        // Drive any running glide, then render, so every frame shows
        // the current animation step before input is processed.
        state.picker.advance(Instant::now());

        terminal.draw(|frame| {
            state.terminal_area = frame.area();
            let strip_width = state.picker.layout().width() as u16;
            let layout = AppLayout::from_area(frame.area(), strip_width);

            let label = Paragraph::new(state.picker.label())
                .alignment(Alignment::Right)
                .style(Theme::label_style());
            frame.render_widget(label, layout.label_area);

            let accent = state
                .config
                .accent
                .map(|(r, g, b)| Color::Rgb(r, g, b))
                .unwrap_or(theme::ACCENT);
            frame.render_widget(
                StripWidget::new(&state.picker).accent(accent),
                layout.strip_area,
            );

            let status = Paragraph::new(status_line(&state)).style(Theme::status_bar_style());
            frame.render_widget(status, layout.status_area);

            if state.active_view == ActiveView::Help {
                frame.render_widget(
                    HelpPopup {
                        config: &state.config,
                        earliest: state.picker.date_at(0),
                        latest: state.picker.anchor(),
                    },
                    frame.area(),
                );
            }
        })?;

        match events.recv().await {
            Some(event) => {
                dispatch(&mut state, event);
                // Batch-drain everything queued before redrawing — mouse
                // moves arrive in bursts while dragging.
                while let Ok(queued) = events.try_recv() {
                    dispatch(&mut state, queued);
                }
            }
            // Event reader is gone; nothing more will arrive.
            None => break,
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Cancelled: exit non-zero so wrapping scripts can tell.
    if !state.confirmed {
        std::process::exit(1);
    }

    match format_date(state.picker.selected_date(), &date_format) {
        Some(formatted) => println!("{formatted}"),
        None => println!("{}", state.picker.selected_date()),
    }
    Ok(())
}
