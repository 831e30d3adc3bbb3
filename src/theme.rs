use crate::page::{self, Page};
use crate::store::PrefStore;

pub const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    // Anything that is not exactly "light" (including nothing at all)
    // falls back to dark.
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub fn initialize(page: &Page, stored: Option<&str>, toggle_id: &str) -> Theme {
    let mode = Theme::from_stored(stored);
    apply(page, mode, toggle_id);
    mode
}

pub fn toggle(page: &Page, store: &mut dyn PrefStore, toggle_id: &str) -> anyhow::Result<Theme> {
    // The document, not the stored preference, is the source of truth.
    let current = if page.is_light() {
        Theme::Light
    } else {
        Theme::Dark
    };
    let next = current.flipped();
    apply(page, next, toggle_id);
    store.set(STORAGE_KEY, next.as_str())?;
    Ok(next)
}

fn apply(page: &Page, mode: Theme, toggle_id: &str) {
    page.set_light(mode == Theme::Light);
    if let Some(control) = page.toggle_control(toggle_id) {
        page::set_text(&control, mode.glyph());
    }
}
