//! User configuration — keybindings, picker settings and persistence.
//!
//! Everything is stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/datestrip/config.toml` (default `~/.config/datestrip/config.toml`).

use std::collections::HashMap;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;
use tracing::warn;

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions in the picker view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    DayBack,
    DayForward,
    WeekBack,
    WeekForward,
    JumpEarliest,
    JumpToday,
    Confirm,
    ToggleHelp,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used for the help popup).
    pub const ALL: &[Action] = &[
        Action::DayBack,
        Action::DayForward,
        Action::WeekBack,
        Action::WeekForward,
        Action::JumpEarliest,
        Action::JumpToday,
        Action::Confirm,
        Action::ToggleHelp,
        Action::Quit,
    ];

    /// Human-readable label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            Action::DayBack => "Day Back",
            Action::DayForward => "Day Forward",
            Action::WeekBack => "Week Back",
            Action::WeekForward => "Week Forward",
            Action::JumpEarliest => "Earliest Day",
            Action::JumpToday => "Back To Today",
            Action::Confirm => "Confirm Date",
            Action::ToggleHelp => "Help",
            Action::Quit => "Cancel",
        }
    }

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::DayBack => "day_back",
            Action::DayForward => "day_forward",
            Action::WeekBack => "week_back",
            Action::WeekForward => "week_forward",
            Action::JumpEarliest => "jump_earliest",
            Action::JumpToday => "jump_today",
            Action::Confirm => "confirm",
            Action::ToggleHelp => "help",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        match s {
            "day_back" => Some(Action::DayBack),
            "day_forward" => Some(Action::DayForward),
            "week_back" => Some(Action::WeekBack),
            "week_forward" => Some(Action::WeekForward),
            "jump_earliest" => Some(Action::JumpEarliest),
            "jump_today" => Some(Action::JumpToday),
            "confirm" => Some(Action::Confirm),
            "help" => Some(Action::ToggleHelp),
            "quit" => Some(Action::Quit),
            _ => None,
        }
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT/SHIFT modifiers
    /// are compared (platform-specific modifiers like SUPER are ignored).
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// User-friendly display string (e.g. `"Alt+←"`, `"Ctrl+c"`, `"q"`).
    pub fn display(&self) -> String {
        self.key_string(true)
    }

    /// Serialise to config-file format (e.g. `"Alt+Left"`, `"Ctrl+c"`, `"q"`).
    fn to_config_string(&self) -> String {
        self.key_string(false)
    }

    /// Arrows and abbreviations are display-only; the config file keeps
    /// the long forms that `parse` accepts.
    fn key_string(&self, pretty: bool) -> String {
        let mut s = String::new();
        for (modifier, prefix) in [
            (KeyModifiers::CONTROL, "Ctrl+"),
            (KeyModifiers::ALT, "Alt+"),
            (KeyModifiers::SHIFT, "Shift+"),
        ] {
            if self.modifiers.contains(modifier) {
                s.push_str(prefix);
            }
        }
        s.push_str(&match (self.code, pretty) {
            (KeyCode::Char(' '), _) => "Space".into(),
            (KeyCode::Char(c), _) => c.to_string(),
            (KeyCode::Up, true) => "↑".into(),
            (KeyCode::Down, true) => "↓".into(),
            (KeyCode::Left, true) => "←".into(),
            (KeyCode::Right, true) => "→".into(),
            (KeyCode::Up, false) => "Up".into(),
            (KeyCode::Down, false) => "Down".into(),
            (KeyCode::Left, false) => "Left".into(),
            (KeyCode::Right, false) => "Right".into(),
            (KeyCode::Enter, _) => "Enter".into(),
            (KeyCode::Esc, _) => "Esc".into(),
            (KeyCode::Tab, _) => "Tab".into(),
            (KeyCode::Backspace, true) => "Bksp".into(),
            (KeyCode::Backspace, false) => "Backspace".into(),
            (KeyCode::Delete, true) => "Del".into(),
            (KeyCode::Delete, false) => "Delete".into(),
            (KeyCode::Home, _) => "Home".into(),
            (KeyCode::End, _) => "End".into(),
            (KeyCode::PageUp, true) => "PgUp".into(),
            (KeyCode::PageUp, false) => "PageUp".into(),
            (KeyCode::PageDown, true) => "PgDn".into(),
            (KeyCode::PageDown, false) => "PageDown".into(),
            (KeyCode::F(n), _) => format!("F{n}"),
            (other, _) => format!("{other:?}"),
        });
        s
    }

    /// Parse a key string like `"Ctrl+c"`, `"Alt+Left"`, `"q"`, `"Enter"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.last()?;

        for &part in &parts[..parts.len() - 1] {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backspace" | "bksp" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            s if s.starts_with('f') && s.len() > 1 => {
                let n: u8 = s[1..].parse().ok()?;
                KeyCode::F(n)
            }
            s if s.len() == 1 => KeyCode::Char(s.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── values ────────────

/// A malformed value in the config file; the key keeps its default.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid colour {0:?} (expected hex like #FF7300)")]
    InvalidColor(String),
    #[error("invalid boolean {0:?} (expected true or false)")]
    InvalidBool(String),
}

/// Parse `#RRGGBB` (leading `#` optional) into an RGB triple.
fn parse_color(s: &str) -> Result<(u8, u8, u8), ConfigError> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ConfigError::InvalidColor(s.to_string()));
    }
    let byte = |range| u8::from_str_radix(&hex[range], 16);
    match (byte(0..2), byte(2..4), byte(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => Ok((r, g, b)),
        _ => Err(ConfigError::InvalidColor(s.to_string())),
    }
}

fn parse_bool(s: &str) -> Result<bool, ConfigError> {
    match s {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidBool(s.to_string())),
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration — keybindings and picker settings.
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// strftime format for the date printed on confirm.
    pub date_format: String,
    /// Accent colour override for the selected tick, as RGB.
    pub accent: Option<(u8, u8, u8)>,
    /// Glide animation on click and jumps.
    pub animation: bool,
}

impl Default for AppConfig {
    /// Built-in defaults; no disk access.
    fn default() -> Self {
        let (date_format, accent, animation) = Self::default_settings();
        Self {
            bindings: Self::default_bindings(),
            date_format,
            accent,
            animation,
        }
    }
}

impl AppConfig {
    /// Hard-coded default keybindings.
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let alt = KeyModifiers::ALT;
        let mut m = HashMap::new();

        m.insert(DayBack, vec![KeyBind::new(Left, n), KeyBind::new(Char('h'), n)]);
        m.insert(DayForward, vec![KeyBind::new(Right, n), KeyBind::new(Char('l'), n)]);
        m.insert(WeekBack, vec![KeyBind::new(Left, alt), KeyBind::new(Char('b'), n)]);
        m.insert(WeekForward, vec![KeyBind::new(Right, alt), KeyBind::new(Char('w'), n)]);
        m.insert(JumpEarliest, vec![KeyBind::new(Home, n)]);
        m.insert(JumpToday, vec![KeyBind::new(End, n), KeyBind::new(Char('t'), n)]);
        m.insert(Confirm, vec![KeyBind::new(Enter, n)]);
        m.insert(ToggleHelp, vec![KeyBind::new(Char('?'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n), KeyBind::new(Esc, n)]);

        m
    }

    fn default_settings() -> (String, Option<(u8, u8, u8)>, bool) {
        ("%Y-%m-%d".to_string(), None, true)
    }

    /// Find the action that matches a key event.  When multiple bindings
    /// match, the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for (&action, binds) in &self.bindings {
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    /// Format the binding list for a given action (e.g. `"←/h"`).
    pub fn display_bindings(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => {
                binds.iter().map(|b| b.display()).collect::<Vec<_>>().join("/")
            }
            _ => "unbound".into(),
        }
    }

    /// Short display of the first binding only (for the status bar).
    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}/{}: day | {}/{}: week | {}: pick | {}: help",
            self.short_binding(Action::DayBack),
            self.short_binding(Action::DayForward),
            self.short_binding(Action::WeekBack),
            self.short_binding(Action::WeekForward),
            self.short_binding(Action::Confirm),
            self.short_binding(Action::ToggleHelp),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        if path.exists() {
            if let Ok(contents) = std::fs::read_to_string(&path) {
                let (bindings, date_format, accent, animation) = Self::parse_config(&contents);
                return Self {
                    bindings,
                    date_format,
                    accent,
                    animation,
                };
            }
        }
        Self::default()
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(())
    }

    fn parse_config(s: &str) -> (HashMap<Action, Vec<KeyBind>>, String, Option<(u8, u8, u8)>, bool) {
        let mut bindings = Self::default_bindings();
        let (mut date_format, mut accent, mut animation) = Self::default_settings();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            // Picker settings.
            match key {
                "date_format" => {
                    if !value.is_empty() {
                        date_format = value.to_string();
                    }
                    continue;
                }
                "accent" => {
                    match parse_color(value) {
                        Ok(rgb) => accent = Some(rgb),
                        Err(err) => warn!(%err, "ignoring config value for accent"),
                    }
                    continue;
                }
                "animation" => {
                    match parse_bool(value) {
                        Ok(v) => animation = v,
                        Err(err) => warn!(%err, "ignoring config value for animation"),
                    }
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                continue;
            };

            let mut parsed = Vec::new();
            for part in value.split(',') {
                let part = part.trim().trim_matches('"');
                if let Some(bind) = KeyBind::parse(part) {
                    parsed.push(bind);
                }
            }
            if !parsed.is_empty() {
                bindings.insert(action, parsed);
            }
        }

        (bindings, date_format, accent, animation)
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# datestrip configuration".to_string(),
            String::new(),
            "# Picker settings".to_string(),
            format!("date_format = {}", self.date_format),
            match self.accent {
                Some((r, g, b)) => format!("accent = #{r:02X}{g:02X}{b:02X}"),
                None => "# accent = #FF7300".to_string(),
            },
            format!("animation = {}", self.animation),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            "# Special keys: Up, Down, Left, Right, Enter, Esc, Tab,".to_string(),
            "#   Backspace, Delete, Home, End, PageUp, PageDown, Space, F1-F12".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/datestrip/config.toml`).
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("datestrip").join("config.toml")
}
