//! Light/dark variants and the class palettes each one uses.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Light,
    Dark,
}

/// Class fragments for one variant of a segmented control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub container: &'static str,
    pub active: &'static str,
    pub inactive: &'static str,
}

const LIGHT: Palette = Palette {
    container: "bg-slate-100 border-slate-200",
    active: "bg-gray-200 text-gray-800 border border-gray-300",
    inactive: "text-gray-600 hover:text-gray-800 border border-transparent",
};

const DARK: Palette = Palette {
    container: "bg-black/40 border-cyan-900/50",
    active: "bg-cyan-500/20 text-cyan-300 border border-cyan-500/30",
    inactive: "text-cyan-500 hover:text-cyan-400 border border-transparent",
};

impl Variant {
    /// `dark` (any case, surrounding whitespace ignored) is `Dark`; anything else is `Light`.
    pub fn from_query(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("dark") {
            Variant::Dark
        } else {
            Variant::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Variant::Dark)
    }

    pub fn palette(&self) -> Palette {
        match self {
            Variant::Light => LIGHT,
            Variant::Dark => DARK,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Variant::Light => Variant::Dark,
            Variant::Dark => Variant::Light,
        }
    }

    /// Page background and text colors for a host app.
    pub fn page_style(&self) -> &'static str {
        match self {
            Variant::Light => "background: #ffffff; color: #1f2937;",
            Variant::Dark => "background: #0b1120; color: #a5f3fc;",
        }
    }
}
