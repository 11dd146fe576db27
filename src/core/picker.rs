//! The date-picker state machine.
//!
//! [`DatePicker`] owns the selection, the hover state and any in-flight
//! glide, and maps tick indices to calendar dates counted back from an
//! anchor date. It is renderer-agnostic: pointer offsets arrive in strip
//! units and every time-dependent call takes `now` from the caller, so
//! tests drive it with fabricated instants.

use std::time::Instant;

use chrono::{Duration, NaiveDate};

use super::label::relative_label;
use super::strip::StripLayout;
use super::tween::Tween;

/// Tick bar heights, in eighth-of-a-row units (24 = three full rows).
const HEIGHT_BASE: u16 = 12;
const HEIGHT_NEXT: u16 = 16;
const HEIGHT_SELECTED_IDLE: u16 = 18;
const HEIGHT_NEIGHBOR: u16 = 20;
const HEIGHT_PEAK: u16 = 24;

/// What the picker is doing right now.
///
/// Hovering only surfaces while nothing else is going on; a drag or a
/// glide suppresses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    Idle,
    Hovering,
    Dragging,
    Animating,
}

/// The one mutually-exclusive activity. A new press always replaces
/// whatever is here, so two sources can never fight over the selection.
#[derive(Debug)]
enum Activity {
    Idle,
    Dragging,
    Animating(Tween),
}

type OnChange = dyn FnMut(NaiveDate);

pub struct DatePicker {
    layout: StripLayout,
    anchor: NaiveDate,
    selected: usize,
    hovered: Option<usize>,
    activity: Activity,
    animate: bool,
    on_change: Option<Box<OnChange>>,
}

impl DatePicker {
    /// A picker over `layout` whose rightmost tick is `anchor`. Starts
    /// idle with the anchor day selected.
    pub fn new(layout: StripLayout, anchor: NaiveDate) -> Self {
        Self {
            layout,
            anchor,
            selected: layout.num_ticks() - 1,
            hovered: None,
            activity: Activity::Idle,
            animate: true,
            on_change: None,
        }
    }

    /// Register a callback fired whenever the selected date actually
    /// changes: once per tick crossed during drags and glides, never
    /// twice for the same index.
    pub fn on_change(mut self, callback: impl FnMut(NaiveDate) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Enable or disable glide animations. When disabled every target
    /// applies immediately.
    pub fn animations(mut self, enabled: bool) -> Self {
        self.animate = enabled;
        self
    }

    // ───────────────────────────────────── accessors ──────────

    pub fn layout(&self) -> &StripLayout {
        &self.layout
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.date_at(self.selected)
    }

    pub fn hovered_date(&self) -> Option<NaiveDate> {
        self.hovered.map(|i| self.date_at(i))
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.activity, Activity::Dragging)
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.activity, Activity::Animating(_))
    }

    pub fn mode(&self) -> InteractionMode {
        match self.activity {
            Activity::Dragging => InteractionMode::Dragging,
            Activity::Animating(_) => InteractionMode::Animating,
            Activity::Idle if self.hovered.is_some() => InteractionMode::Hovering,
            Activity::Idle => InteractionMode::Idle,
        }
    }

    /// Calendar date of tick `index`: the anchor minus `(N - 1 - index)`
    /// days, so index 0 is the oldest day and the last tick is the anchor.
    pub fn date_at(&self, index: usize) -> NaiveDate {
        let last = self.layout.num_ticks() - 1;
        let back = last.saturating_sub(index.min(last)) as i64;
        self.anchor - Duration::days(back)
    }

    /// Signed day offset of tick `index` from the anchor (always <= 0).
    pub fn days_from_anchor(&self, index: usize) -> i64 {
        let last = (self.layout.num_ticks() - 1) as i64;
        index.min(self.layout.num_ticks() - 1) as i64 - last
    }

    /// Header label for the current selection.
    pub fn label(&self) -> String {
        relative_label(self.selected_date(), self.days_from_anchor(self.selected))
    }

    // ──────────────────────────────────── interaction ─────────

    /// Pointer pressed at strip offset `x`.
    ///
    /// Pressing the already-selected tick becomes a drag without a jump;
    /// pressing anywhere else glides there. Either way any running glide
    /// is cancelled first and hover is cleared.
    pub fn pointer_down(&mut self, x: f64, now: Instant) {
        self.activity = Activity::Idle;
        self.hovered = None;

        let target = self.layout.index_at(x);
        if target == self.selected {
            self.activity = Activity::Dragging;
        } else {
            self.animate_to(target, now);
        }
    }

    /// Pointer moved to strip offset `x`.
    ///
    /// While dragging this retargets the selection immediately; while
    /// idle it only updates hover. Glides ignore movement entirely.
    pub fn pointer_move(&mut self, x: f64) {
        match self.activity {
            Activity::Dragging => {
                let index = self.layout.index_at(x);
                self.apply_selection(index);
            }
            Activity::Idle => self.hovered = Some(self.layout.index_at(x)),
            Activity::Animating(_) => {}
        }
    }

    /// Pointer released. Ends a drag in place; the selection stays where
    /// the drag left it.
    pub fn pointer_up(&mut self) {
        if matches!(self.activity, Activity::Dragging) {
            self.activity = Activity::Idle;
        }
    }

    /// Pointer left the strip.
    pub fn pointer_leave(&mut self) {
        self.hovered = None;
    }

    /// Begin a glide to `target`. On the current tick this is a no-op;
    /// with animations disabled the target applies immediately. A glide
    /// already in flight is replaced.
    pub fn animate_to(&mut self, target: usize, now: Instant) {
        let target = target.min(self.layout.num_ticks() - 1);
        if target == self.selected {
            return;
        }
        if !self.animate {
            self.activity = Activity::Idle;
            self.apply_selection(target);
            return;
        }
        self.activity = Activity::Animating(Tween::new(self.selected, target, now));
    }

    /// Step the selection by `delta` ticks, clamped to the strip. Steps
    /// apply instantly and interrupt any glide.
    pub fn step(&mut self, delta: i64) {
        let last = (self.layout.num_ticks() - 1) as i64;
        let target = (self.selected as i64 + delta).clamp(0, last) as usize;
        self.activity = Activity::Idle;
        self.apply_selection(target);
    }

    pub fn jump_to_earliest(&mut self, now: Instant) {
        self.animate_to(0, now);
    }

    pub fn jump_to_today(&mut self, now: Instant) {
        self.animate_to(self.layout.num_ticks() - 1, now);
    }

    /// Advance a running glide to `now`. Call once per frame; settling
    /// lands exactly on the target and returns the picker to idle.
    pub fn advance(&mut self, now: Instant) {
        let (index, settled) = match &self.activity {
            Activity::Animating(tween) => (tween.index_at(now), tween.is_settled(now)),
            _ => return,
        };
        self.apply_selection(index);
        if settled {
            self.activity = Activity::Idle;
        }
    }

    // ─────────────────────────────────────── visuals ──────────

    /// Visual height of tick `index` under the current interaction state,
    /// in eighth-of-a-row units.
    pub fn tick_height(&self, index: usize) -> u16 {
        if matches!(self.activity, Activity::Idle) {
            if self.hovered == Some(index) {
                return HEIGHT_PEAK;
            }
            return if index == self.selected {
                HEIGHT_SELECTED_IDLE
            } else {
                HEIGHT_BASE
            };
        }
        // Dragging or gliding: wave falloff around the selection.
        match self.selected.abs_diff(index) {
            0 => HEIGHT_PEAK,
            1 => HEIGHT_NEIGHBOR,
            2 => HEIGHT_NEXT,
            _ => HEIGHT_BASE,
        }
    }

    fn apply_selection(&mut self, index: usize) {
        if index == self.selected {
            return;
        }
        self.selected = index;
        let date = self.selected_date();
        if let Some(callback) = self.on_change.as_mut() {
            callback(date);
        }
    }
}
