//! Application state types and entry glue.
//!
//! Defines the visible-state machine, focus handling and theme, plus the
//! state container read by the UI and mutated by the update loop
//! (re-exported as `run`).
//!
pub mod keymap;
pub mod update;

use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::store::UserStore;
use crate::view::ResultsView;

/// Which indicator the body shows.
///
/// `Loading` is only entered by a load; `Loaded` and `Failed` hold until the next one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VisibleState {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Control that receives key input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Focus {
    FilterInput,
    FilterButton,
    Results,
}

impl Focus {
    /// Tab order: input, button, results.
    pub fn next(self) -> Self {
        match self {
            Focus::FilterInput => Focus::FilterButton,
            Focus::FilterButton => Focus::Results,
            Focus::Results => Focus::FilterInput,
        }
    }
}

/// Color palette for theming the TUI.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub title: Color,
    pub border: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub accent: Color,
    pub error: Color,
    pub focus: Color,
}

impl Theme {
    /// Plain dark theme using the terminal's named colors.
    pub fn dark() -> Self {
        Self {
            text: Color::Gray,
            muted: Color::DarkGray,
            title: Color::Cyan,
            border: Color::Gray,
            header_bg: Color::Black,
            header_fg: Color::Cyan,
            status_bg: Color::DarkGray,
            status_fg: Color::Black,
            accent: Color::Blue,
            error: Color::Red,
            focus: Color::Yellow,
        }
    }

    /// Catppuccin Mocha palette; the default written to `theme.conf`.
    pub fn mocha() -> Self {
        // https://github.com/catppuccin/catppuccin
        Self {
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            muted: Color::Rgb(0x6c, 0x70, 0x86),
            title: Color::Rgb(0x89, 0xdc, 0xeb),
            border: Color::Rgb(0x58, 0x5b, 0x70),
            header_bg: Color::Rgb(0x18, 0x18, 0x25),
            header_fg: Color::Rgb(0x89, 0xb4, 0xfa),
            status_bg: Color::Rgb(0x31, 0x32, 0x44),
            status_fg: Color::Rgb(0xba, 0xc2, 0xde),
            accent: Color::Rgb(0x89, 0xb4, 0xfa),
            error: Color::Rgb(0xf3, 0x8b, 0xa8),
            focus: Color::Rgb(0xf9, 0xe2, 0xaf),
        }
    }

    /// Read `key = value` pairs on top of `mocha`. Unknown keys and bad colors are skipped.
    pub fn from_file(path: &str) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        let mut theme = Self::mocha();
        for raw in contents.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, val)) = line.split_once('=') else {
                continue;
            };
            let Some(color) = parse_color(val) else {
                continue;
            };
            match key.trim() {
                "text" => theme.text = color,
                "muted" => theme.muted = color,
                "title" => theme.title = color,
                "border" => theme.border = color,
                "header_bg" => theme.header_bg = color,
                "header_fg" => theme.header_fg = color,
                "status_bg" => theme.status_bg = color,
                "status_fg" => theme.status_fg = color,
                "accent" => theme.accent = color,
                "error" => theme.error = color,
                "focus" => theme.focus = color,
                _ => {}
            }
        }
        Some(theme)
    }

    /// Persist the theme in the format `from_file` reads.
    pub fn write_file(&self, path: &str) -> std::io::Result<()> {
        use std::fmt::Write as _;
        let mut buf = String::new();
        buf.push_str("# usercards theme configuration\n");
        buf.push_str("# Colors: hex as #RRGGBB or RRGGBB, or 'reset'\n\n");

        let mut kv = |k: &str, v: Color| {
            let _ = writeln!(&mut buf, "{} = {}", k, color_to_str(v));
        };
        kv("text", self.text);
        kv("muted", self.muted);
        kv("title", self.title);
        kv("border", self.border);
        kv("header_bg", self.header_bg);
        kv("header_fg", self.header_fg);
        kv("status_bg", self.status_bg);
        kv("status_fg", self.status_fg);
        kv("accent", self.accent);
        kv("error", self.error);
        kv("focus", self.focus);

        std::fs::write(path, buf)
    }

    /// Load `path`, or write the default theme there when it does not exist yet.
    pub fn load_or_init(path: &str) -> Self {
        if std::path::Path::new(path).exists() {
            return Self::from_file(path).unwrap_or_else(Self::mocha);
        }
        let theme = Self::mocha();
        if let Err(e) = theme.write_file(path) {
            tracing::warn!(path, error = %e, "could not write default theme");
        }
        theme
    }
}

/// Parse "#RRGGBB", "RRGGBB" or "reset".
fn parse_color(s: &str) -> Option<Color> {
    let lower = s.trim().to_ascii_lowercase();
    if lower == "reset" {
        return Some(Color::Reset);
    }
    let hex = lower.strip_prefix('#').unwrap_or(&lower);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

fn color_to_str(c: Color) -> String {
    match c {
        Color::Rgb(r, g, b) => format!("#{:02X}{:02X}{:02X}", r, g, b),
        Color::Reset => "reset".to_string(),
        // named colors: nearest hex
        Color::Black => "#000000".to_string(),
        Color::Red => "#FF0000".to_string(),
        Color::Green => "#00FF00".to_string(),
        Color::Yellow => "#FFFF00".to_string(),
        Color::Blue => "#0000FF".to_string(),
        Color::Magenta => "#FF00FF".to_string(),
        Color::Cyan => "#00FFFF".to_string(),
        Color::Gray => "#B3B3B3".to_string(),
        Color::DarkGray => "#4D4D4D".to_string(),
        Color::LightRed => "#FF6666".to_string(),
        Color::LightGreen => "#66FF66".to_string(),
        Color::LightYellow => "#FFFF66".to_string(),
        Color::LightBlue => "#6666FF".to_string(),
        Color::LightMagenta => "#FF66FF".to_string(),
        Color::LightCyan => "#66FFFF".to_string(),
        Color::White => "#FFFFFF".to_string(),
        Color::Indexed(_) => "reset".to_string(),
    }
}

/// Screen regions recorded during the last draw, used for mouse hit-testing.
#[derive(Clone, Copy, Debug, Default)]
pub struct HitAreas {
    pub filter_input: Rect,
    pub filter_button: Rect,
    pub results: Rect,
}

pub struct AppState {
    pub store: UserStore,
    pub visible: VisibleState,
    /// `None` while the results area is cleared (loading or failed).
    pub results: Option<ResultsView>,
    pub filter_input: String,
    pub focus: Focus,
    /// First card row shown in the results grid.
    pub scroll: usize,
    /// Card rows that fit the viewport, updated on draw.
    pub rows_per_page: usize,
    pub hit: HitAreas,
    pub theme: Theme,
    pub keymap: keymap::Keymap,
    pub endpoint: String,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(theme: Theme, keymap: keymap::Keymap, endpoint: impl Into<String>) -> Self {
        Self {
            store: UserStore::new(),
            visible: VisibleState::Idle,
            results: None,
            filter_input: String::new(),
            focus: Focus::FilterInput,
            scroll: 0,
            rows_per_page: 1,
            hit: HitAreas::default(),
            theme,
            keymap,
            endpoint: endpoint.into(),
            should_quit: false,
        }
    }

    /// Replace the results area with `view` and scroll back to the top.
    pub fn show_results(&mut self, view: ResultsView) {
        self.results = Some(view);
        self.scroll = 0;
    }

    pub fn clear_results(&mut self) {
        self.results = None;
        self.scroll = 0;
    }

    /// Number of cards currently displayed.
    pub fn shown_count(&self) -> usize {
        self.results.as_ref().map_or(0, |r| r.cards().len())
    }

    pub fn loading_visible(&self) -> bool {
        self.visible == VisibleState::Loading
    }

    pub fn error_visible(&self) -> bool {
        self.visible == VisibleState::Failed
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;
