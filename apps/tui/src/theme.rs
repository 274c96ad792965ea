//! Light/dark theme preference, persisted across runs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::style::Color;

/// Delay between a theme toggle and the chart recolor pass, so the new
/// palette is the one resolved when colors are rewritten.
pub const RECOLOR_DELAY_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Indicator glyph: shows what a toggle switches to.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    /// Resolved colors for this theme. The analog of reading computed
    /// style variables: callers capture a palette at construction time
    /// and must re-resolve after a toggle.
    pub const fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                text: Color::Black,
                text_secondary: Color::DarkGray,
                border: Color::Gray,
                accent: Color::Cyan,
                positive: Color::Green,
                negative: Color::Red,
                current_bubble: Color::Cyan,
                competitor_bubble: Color::Yellow,
            },
            Self::Dark => Palette {
                text: Color::White,
                text_secondary: Color::Gray,
                border: Color::DarkGray,
                accent: Color::Cyan,
                positive: Color::LightGreen,
                negative: Color::LightRed,
                current_bubble: Color::Cyan,
                competitor_bubble: Color::Yellow,
            },
        }
    }
}

/// Theme-dependent colors. Bubble series colors are fixed per series and
/// identical across themes; only text/border colors swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub text_secondary: Color,
    pub border: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub current_bubble: Color,
    pub competitor_bubble: Color,
}

/// Persists the preference in a one-line file, default `light`.
#[derive(Debug)]
pub struct ThemeStore {
    path: PathBuf,
    theme: Theme,
}

impl ThemeStore {
    /// Read the persisted preference; unreadable or unknown values fall
    /// back to light.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let theme = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or(Theme::Light);
        Self { path, theme }
    }

    pub const fn theme(&self) -> Theme {
        self.theme
    }

    pub const fn glyph(&self) -> &'static str {
        self.theme.glyph()
    }

    pub const fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Flip and persist. Returns the new theme.
    pub fn toggle(&mut self) -> io::Result<Theme> {
        self.theme = self.theme.toggled();
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, self.theme.as_str())?;
        Ok(self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::{Theme, ThemeStore};

    #[test]
    fn load_defaults_to_light() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::load(dir.path().join("theme"));
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.glyph(), "☾");
    }

    #[test]
    fn toggle_persists_preference() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme");

        let mut store = ThemeStore::load(&path);
        assert_eq!(store.toggle().unwrap(), Theme::Dark);

        let reloaded = ThemeStore::load(&path);
        assert_eq!(reloaded.theme(), Theme::Dark);
        assert_eq!(reloaded.glyph(), "☀");
    }

    #[test]
    fn double_toggle_restores_value_and_glyph() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme");

        let mut store = ThemeStore::load(&path);
        let before = (store.theme(), store.glyph());
        store.toggle().unwrap();
        store.toggle().unwrap();
        assert_eq!((store.theme(), store.glyph()), before);

        let reloaded = ThemeStore::load(&path);
        assert_eq!(reloaded.theme(), before.0);
    }

    #[test]
    fn palettes_swap_text_colors() {
        let light = Theme::Light.palette();
        let dark = Theme::Dark.palette();
        assert_ne!(light.text, dark.text);
        // Series colors are not theme-dependent.
        assert_eq!(light.current_bubble, dark.current_bubble);
    }

    #[test]
    fn unknown_persisted_value_falls_back_to_light() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme");
        std::fs::write(&path, "solarized").unwrap();
        assert_eq!(ThemeStore::load(&path).theme(), Theme::Light);
    }
}
