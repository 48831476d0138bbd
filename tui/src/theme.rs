//! Color palette and glyphs for the Brochure TUI.
//!
//! A muted paper-like palette by default with an optional high-contrast
//! override, and ASCII fallbacks for every glyph.

use ratatui::style::Color;

use brochure_types::ui::UiOptions;

mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG: Color = Color::Rgb(24, 26, 27);
    pub const BG_PANEL: Color = Color::Rgb(32, 34, 37);
    pub const BG_POPUP: Color = Color::Rgb(44, 47, 51);
    pub const BORDER: Color = Color::Rgb(88, 92, 98);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(222, 218, 205);
    pub const TEXT_SECONDARY: Color = Color::Rgb(178, 174, 160);
    pub const TEXT_MUTED: Color = Color::Rgb(122, 120, 112);

    // === Accents ===
    pub const ACCENT: Color = Color::Rgb(125, 174, 163);
    pub const LINK: Color = Color::Rgb(129, 162, 218);
    pub const SUCCESS: Color = Color::Rgb(157, 188, 118);
    pub const WARNING: Color = Color::Rgb(226, 192, 120);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub bg_popup: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub link: Color,
    pub success: Color,
    pub warning: Color,
}

const DEFAULT_PALETTE: Palette = Palette {
    bg: colors::BG,
    bg_panel: colors::BG_PANEL,
    bg_popup: colors::BG_POPUP,
    border: colors::BORDER,
    text_primary: colors::TEXT_PRIMARY,
    text_secondary: colors::TEXT_SECONDARY,
    text_muted: colors::TEXT_MUTED,
    accent: colors::ACCENT,
    link: colors::LINK,
    success: colors::SUCCESS,
    warning: colors::WARNING,
};

const HIGH_CONTRAST_PALETTE: Palette = Palette {
    bg: Color::Black,
    bg_panel: Color::Black,
    bg_popup: Color::Black,
    border: Color::White,
    text_primary: Color::White,
    text_secondary: Color::Gray,
    text_muted: Color::Gray,
    accent: Color::Cyan,
    link: Color::LightBlue,
    success: Color::LightGreen,
    warning: Color::LightYellow,
};

/// Resolve the palette for the current options.
#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        HIGH_CONTRAST_PALETTE
    } else {
        DEFAULT_PALETTE
    }
}

/// Glyph set used by the UI, with ASCII fallbacks.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    /// Marker on the toggle while the menu is closed.
    pub menu_closed: &'static str,
    /// Marker on the toggle while the menu is open.
    pub menu_open: &'static str,
    /// Prefix in front of rendered links.
    pub link: &'static str,
    /// Cursor marker in the focused field.
    pub cursor: &'static str,
}

const UNICODE_GLYPHS: Glyphs = Glyphs {
    menu_closed: "▸",
    menu_open: "▾",
    link: "→",
    cursor: "▏",
};

const ASCII_GLYPHS: Glyphs = Glyphs {
    menu_closed: ">",
    menu_open: "v",
    link: "->",
    cursor: "|",
};

/// Resolve the glyph set for the current options.
#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        ASCII_GLYPHS
    } else {
        UNICODE_GLYPHS
    }
}
