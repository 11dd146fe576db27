//! Input handling — maps key/mouse events to state mutations.

use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::Action;
use crate::ui::layout::AppLayout;

use super::state::{ActiveView, AppState};

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    // Ctrl+c always cancels, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Picker => handle_picker_key(state, key),
        ActiveView::Help => handle_help_key(state, key),
    }
}

// ── Picker view (configurable bindings) ─────────────────────────

fn handle_picker_key(state: &mut AppState, key: KeyEvent) {
    let Some(action) = state.config.match_key(key) else {
        return;
    };

    match action {
        Action::DayBack => state.picker.step(-1),
        Action::DayForward => state.picker.step(1),
        Action::WeekBack => state.picker.step(-7),
        Action::WeekForward => state.picker.step(7),
        Action::JumpEarliest => state.picker.jump_to_earliest(Instant::now()),
        Action::JumpToday => state.picker.jump_to_today(Instant::now()),
        Action::Confirm => {
            state.confirmed = true;
            state.should_quit = true;
        }
        Action::ToggleHelp => state.active_view = ActiveView::Help,
        Action::Quit => state.should_quit = true,
    }
}

// ── Help overlay ────────────────────────────────────────────────

fn handle_help_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
            state.active_view = ActiveView::Picker;
        }
        _ => {}
    }
}

// ── Mouse ───────────────────────────────────────────────────────

/// Process a mouse event.
///
/// While a drag is live, moves and the release are routed to the picker
/// wherever the cursor is; otherwise only events inside the strip
/// rectangle reach it.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if state.active_view != ActiveView::Picker {
        // Any click closes the overlay.
        if matches!(mouse.kind, MouseEventKind::Down(_)) {
            state.active_view = ActiveView::Picker;
        }
        return;
    }

    let strip_width = state.picker.layout().width() as u16;
    let strip = AppLayout::from_area(state.terminal_area, strip_width).strip_area;
    let offset = f64::from(mouse.column) - f64::from(strip.x);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if point_in_rect(strip, mouse.column, mouse.row) {
                state.picker.pointer_down(offset, Instant::now());
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if state.picker.is_dragging() || point_in_rect(strip, mouse.column, mouse.row) {
                state.picker.pointer_move(offset);
            }
        }
        MouseEventKind::Moved => {
            if point_in_rect(strip, mouse.column, mouse.row) {
                state.picker.pointer_move(offset);
            } else {
                state.picker.pointer_leave();
            }
        }
        MouseEventKind::Up(MouseButton::Left) => state.picker.pointer_up(),
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => state.picker.step(-1),
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => state.picker.step(1),
        _ => {}
    }
}

fn point_in_rect(area: ratatui::layout::Rect, col: u16, row: u16) -> bool {
    col >= area.x
        && col < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::NaiveDate;
    use ratatui::layout::Rect;

    use crate::config::AppConfig;
    use crate::core::picker::{DatePicker, InteractionMode};
    use crate::core::strip::StripLayout;

    use super::*;

    fn test_state() -> AppState {
        let anchor = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let picker = DatePicker::new(StripLayout::for_ticks(87, 1.0, 1.0), anchor);
        let mut state = AppState::new(picker, AppConfig::default());
        state.terminal_area = Rect::new(0, 0, 200, 24);
        state
    }

    fn strip_rect(state: &AppState) -> Rect {
        let strip_width = state.picker.layout().width() as u16;
        AppLayout::from_area(state.terminal_area, strip_width).strip_area
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn click_inside_the_strip_glides_to_that_tick() {
        let mut state = test_state();
        let strip = strip_rect(&state);
        handle_mouse(
            &mut state,
            mouse(MouseEventKind::Down(MouseButton::Left), strip.x, strip.y),
        );
        assert!(state.picker.is_animating());

        state.picker.advance(Instant::now() + Duration::from_millis(500));
        assert_eq!(state.picker.selected_index(), 0);
    }

    #[test]
    fn clicks_outside_the_strip_are_ignored() {
        let mut state = test_state();
        handle_mouse(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        assert_eq!(state.picker.mode(), InteractionMode::Idle);
        assert_eq!(state.picker.selected_index(), 86);
    }

    #[test]
    fn drags_keep_tracking_outside_the_strip() {
        let mut state = test_state();
        let strip = strip_rect(&state);
        // Press the selected (rightmost) tick to start dragging.
        let right_edge = strip.x + strip.width - 1;
        handle_mouse(
            &mut state,
            mouse(MouseEventKind::Down(MouseButton::Left), right_edge, strip.y),
        );
        assert!(state.picker.is_dragging());

        // The cursor escapes far past the left edge of the strip.
        handle_mouse(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), 0, 0));
        assert_eq!(state.picker.selected_index(), 0);

        handle_mouse(&mut state, mouse(MouseEventKind::Up(MouseButton::Left), 0, 0));
        assert_eq!(state.picker.mode(), InteractionMode::Idle);
        assert_eq!(state.picker.selected_index(), 0);
    }

    #[test]
    fn moves_set_hover_inside_and_clear_it_outside() {
        let mut state = test_state();
        let strip = strip_rect(&state);
        handle_mouse(&mut state, mouse(MouseEventKind::Moved, strip.x, strip.y));
        assert_eq!(state.picker.hovered_index(), Some(0));

        handle_mouse(&mut state, mouse(MouseEventKind::Moved, 0, 0));
        assert_eq!(state.picker.hovered_index(), None);
    }

    #[test]
    fn wheel_steps_one_day_at_a_time() {
        let mut state = test_state();
        handle_mouse(&mut state, mouse(MouseEventKind::ScrollUp, 0, 0));
        assert_eq!(state.picker.selected_index(), 85);
        handle_mouse(&mut state, mouse(MouseEventKind::ScrollUp, 0, 0));
        assert_eq!(state.picker.selected_index(), 84);
        handle_mouse(&mut state, mouse(MouseEventKind::ScrollDown, 0, 0));
        assert_eq!(state.picker.selected_index(), 85);
    }

    #[test]
    fn arrow_keys_step_and_alt_jumps_a_week() {
        let mut state = test_state();
        handle_key(&mut state, key(KeyCode::Left));
        assert_eq!(state.picker.selected_index(), 85);
        handle_key(&mut state, KeyEvent::new(KeyCode::Left, KeyModifiers::ALT));
        assert_eq!(state.picker.selected_index(), 78);
        handle_key(&mut state, key(KeyCode::Right));
        assert_eq!(state.picker.selected_index(), 79);
    }

    #[test]
    fn home_glides_to_the_earliest_day() {
        let mut state = test_state();
        handle_key(&mut state, key(KeyCode::Home));
        assert!(state.picker.is_animating());
    }

    #[test]
    fn enter_confirms_and_quits() {
        let mut state = test_state();
        handle_key(&mut state, key(KeyCode::Enter));
        assert!(state.confirmed);
        assert!(state.should_quit);
    }

    #[test]
    fn q_cancels_without_confirming() {
        let mut state = test_state();
        handle_key(&mut state, key(KeyCode::Char('q')));
        assert!(!state.confirmed);
        assert!(state.should_quit);
    }

    #[test]
    fn ctrl_c_quits_even_from_the_help_view() {
        let mut state = test_state();
        state.active_view = ActiveView::Help;
        handle_key(&mut state, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(state.should_quit);
    }

    #[test]
    fn help_opens_on_question_mark_and_closes_on_esc() {
        let mut state = test_state();
        handle_key(&mut state, key(KeyCode::Char('?')));
        assert_eq!(state.active_view, ActiveView::Help);

        // Unrelated keys must not leak through to the picker.
        handle_key(&mut state, key(KeyCode::Left));
        assert_eq!(state.active_view, ActiveView::Help);
        assert_eq!(state.picker.selected_index(), 86);

        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.active_view, ActiveView::Picker);
    }

    #[test]
    fn any_click_closes_the_help_view() {
        let mut state = test_state();
        state.active_view = ActiveView::Help;
        handle_mouse(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 5, 5));
        assert_eq!(state.active_view, ActiveView::Picker);
        // The click itself is swallowed.
        assert_eq!(state.picker.mode(), InteractionMode::Idle);
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut state = test_state();
        let release = KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        handle_key(&mut state, release);
        assert!(!state.should_quit);
    }
}
