//! Keybinding configuration for the results pane: parse `keybinds.conf`,
//! provide defaults, and map key presses to actions.
//!
//! Keys typed while the filter input or button has focus are handled
//! directly by the update loop and never go through the keymap.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Semantic actions available while the results pane has focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Fetch the user list again.
    Reload,
    /// Move focus to the filter input.
    FocusFilter,
    /// Empty the filter input and show every user.
    ClearFilter,
    /// Cycle focus to the next control.
    FocusNext,
    /// Scroll the cards up one row.
    ScrollUp,
    /// Scroll the cards down one row.
    ScrollDown,
    /// Scroll the cards up one page.
    PageUp,
    /// Scroll the cards down one page.
    PageDown,
    /// Swallow the key.
    Ignore,
}

const ALL_ACTIONS: [KeyAction; 10] = [
    KeyAction::Quit,
    KeyAction::Reload,
    KeyAction::FocusFilter,
    KeyAction::ClearFilter,
    KeyAction::FocusNext,
    KeyAction::ScrollUp,
    KeyAction::ScrollDown,
    KeyAction::PageUp,
    KeyAction::PageDown,
    KeyAction::Ignore,
];

/// Mapping from `(KeyModifiers, KeyCode)` to [`KeyAction`].
#[derive(Clone, Debug)]
pub struct Keymap {
    bindings: HashMap<(KeyModifiers, KeyCode), KeyAction>,
}

impl Keymap {
    /// Default bindings: arrows and vim keys for scrolling, `q`, `r`, `/`, `c`.
    pub fn new_defaults() -> Self {
        use KeyCode::*;
        use KeyModifiers as M;
        let mut bindings = HashMap::new();
        bindings.insert((M::NONE, Char('q')), KeyAction::Quit);
        bindings.insert((M::CONTROL, Char('c')), KeyAction::Quit);
        bindings.insert((M::NONE, Char('r')), KeyAction::Reload);
        bindings.insert((M::NONE, Char('/')), KeyAction::FocusFilter);
        bindings.insert((M::NONE, Char('c')), KeyAction::ClearFilter);
        bindings.insert((M::NONE, Tab), KeyAction::FocusNext);
        bindings.insert((M::NONE, Esc), KeyAction::Ignore);

        bindings.insert((M::NONE, Up), KeyAction::ScrollUp);
        bindings.insert((M::NONE, Down), KeyAction::ScrollDown);
        bindings.insert((M::NONE, Char('k')), KeyAction::ScrollUp);
        bindings.insert((M::NONE, Char('j')), KeyAction::ScrollDown);
        bindings.insert((M::NONE, PageUp), KeyAction::PageUp);
        bindings.insert((M::NONE, PageDown), KeyAction::PageDown);

        Self { bindings }
    }

    /// Load `path`, or write the defaults there when it does not exist yet.
    pub fn load_or_init(path: &str) -> Self {
        if std::path::Path::new(path).exists() {
            return Self::from_file(path).unwrap_or_default();
        }
        let km = Self::default();
        if let Err(e) = km.write_file(path) {
            tracing::warn!(path, error = %e, "could not write default keybindings");
        }
        km
    }

    /// Read `Action = KeySpec` lines on top of the defaults.
    ///
    /// Comments (`#`) and blank lines are skipped, as are unknown actions or keys.
    pub fn from_file(path: &str) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        Some(Self::parse(&contents))
    }

    pub fn parse(contents: &str) -> Self {
        let mut map = Self::default();
        for raw in contents.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((lhs, rhs)) = line.split_once('=') else {
                continue;
            };
            if let (Some(action), Some(key)) = (parse_action(lhs), parse_key(rhs)) {
                map.bindings.insert(key, action);
            }
        }
        map
    }

    pub fn write_file(&self, path: &str) -> std::io::Result<()> {
        use std::fmt::Write as _;
        let mut buf = String::new();
        buf.push_str("# usercards keybindings (results pane)\n");
        buf.push_str("# Format: <Action> = <KeySpec>\n");
        buf.push_str("# KeySpec examples: q, Ctrl+q, Enter, Esc, Tab, Up, Down, PageUp, PageDown, /, j, k\n");
        let names: Vec<&str> = ALL_ACTIONS.iter().map(|a| format_action(*a)).collect();
        let _ = writeln!(&mut buf, "# Actions: {}\n", names.join(", "));

        let mut entries: Vec<(String, KeyAction)> = self
            .bindings
            .iter()
            .map(|((mods, code), action)| (Self::format_key(*mods, *code), *action))
            .collect();
        entries.sort_by(|a, b| format_action(a.1).cmp(&format_action(b.1)).then(a.0.cmp(&b.0)));
        for (key, action) in entries {
            let _ = writeln!(&mut buf, "{} = {}", format_action(action), key);
        }

        std::fs::write(path, buf)
    }

    pub fn resolve(&self, key: &KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&(key.modifiers, key.code)).copied()
    }

    /// Keys bound to `action`, formatted and sorted.
    pub fn keys_for(&self, action: KeyAction) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|((mods, code), _)| Self::format_key(*mods, *code))
            .collect();
        keys.sort();
        keys
    }

    /// Human readable key spec such as "Ctrl+q" or "PageDown".
    pub fn format_key(mods: KeyModifiers, code: KeyCode) -> String {
        use KeyCode::*;
        let base = match code {
            Enter => "Enter".to_string(),
            Esc => "Esc".to_string(),
            Tab => "Tab".to_string(),
            BackTab => "BackTab".to_string(),
            Up => "Up".to_string(),
            Down => "Down".to_string(),
            Left => "Left".to_string(),
            Right => "Right".to_string(),
            PageUp => "PageUp".to_string(),
            PageDown => "PageDown".to_string(),
            Char(c) => c.to_string(),
            _ => format!("{:?}", code),
        };
        if mods.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{}", base)
        } else {
            base
        }
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new_defaults()
    }
}

fn parse_key(spec: &str) -> Option<(KeyModifiers, KeyCode)> {
    use KeyCode::*;
    let s = spec.trim();
    let (mods, rest) = match s.strip_prefix("Ctrl+") {
        Some(after) => (KeyModifiers::CONTROL, after),
        None => (KeyModifiers::NONE, s),
    };
    let code = match rest {
        "Enter" => Enter,
        "Esc" | "Escape" => Esc,
        "Tab" => Tab,
        "BackTab" => BackTab,
        "Up" => Up,
        "Down" => Down,
        "Left" => Left,
        "Right" => Right,
        "PageUp" => PageUp,
        "PageDown" => PageDown,
        _ => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Char(c),
                _ => return None,
            }
        }
    };
    Some((mods, code))
}

fn parse_action(s: &str) -> Option<KeyAction> {
    let name = s.trim();
    ALL_ACTIONS.into_iter().find(|a| format_action(*a) == name)
}

pub fn format_action(a: KeyAction) -> &'static str {
    match a {
        KeyAction::Quit => "Quit",
        KeyAction::Reload => "Reload",
        KeyAction::FocusFilter => "FocusFilter",
        KeyAction::ClearFilter => "ClearFilter",
        KeyAction::FocusNext => "FocusNext",
        KeyAction::ScrollUp => "ScrollUp",
        KeyAction::ScrollDown => "ScrollDown",
        KeyAction::PageUp => "PageUp",
        KeyAction::PageDown => "PageDown",
        KeyAction::Ignore => "Ignore",
    }
}
