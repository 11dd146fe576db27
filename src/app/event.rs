//! Terminal event abstraction.
//!
//! A background task forwards crossterm events over a channel so the main
//! loop can stay async. Ticks are paced against a deadline rather than the
//! poll timeout: a glide needs a frame every `tick_rate` even while mouse
//! events stream in faster than that.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

impl AppEvent {
    fn from_crossterm(ev: CtEvent) -> Option<Self> {
        match ev {
            CtEvent::Key(k) => Some(AppEvent::Key(k)),
            CtEvent::Mouse(m) => Some(AppEvent::Mouse(m)),
            CtEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        }
    }
}

/// Spawns a background task that polls the terminal and sends events
/// through the returned channel, with a `Tick` at least every `tick_rate`.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let mut next_tick = Instant::now() + tick_rate;
        loop {
            let now = Instant::now();
            if now >= next_tick {
                if tx.send(AppEvent::Tick).is_err() {
                    break;
                }
                next_tick = now + tick_rate;
            }

            // Wait for input, but never past the tick deadline.
            let wait = next_tick.saturating_duration_since(now);
            if event::poll(wait).unwrap_or(false) {
                if let Ok(ev) = event::read() {
                    let Some(app_event) = AppEvent::from_crossterm(ev) else {
                        continue;
                    };
                    if tx.send(app_event).is_err() {
                        break;
                    }
                }
            }
        }
    });

    rx
}
