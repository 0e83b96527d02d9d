//! Nordic Frost colors for the terminal report.
//!
//! Same palette as the rest of the Nord-based styling, expressed as
//! `crossterm` colors. Only used when color output is enabled.

use crossterm::style::Color;

// === Nord Frost (Accent blues/cyans) ===

/// Frost accent 2 - cyan (primary accent).
pub const NORD_FROST_2: Color = Color::Rgb {
    r: 136,
    g: 192,
    b: 208,
};

// === Nord Aurora (Status colors) ===

/// Aurora red - errors.
pub const NORD_RED: Color = Color::Rgb {
    r: 191,
    g: 97,
    b: 106,
};
/// Aurora yellow - in progress.
pub const NORD_YELLOW: Color = Color::Rgb {
    r: 235,
    g: 203,
    b: 139,
};
/// Aurora green - complete.
pub const NORD_GREEN: Color = Color::Rgb {
    r: 163,
    g: 190,
    b: 140,
};

// === Nord Polar Night ===

/// Lightest polar night shade.
pub const NORD_POLAR_NIGHT_4: Color = Color::Rgb {
    r: 76,
    g: 86,
    b: 106,
};

// === Semantic Color Aliases ===

/// Section headers.
pub const ACCENT_PRIMARY: Color = NORD_FROST_2;
/// Complete bar cells.
pub const SUCCESS: Color = NORD_GREEN;
/// In-progress bar cells.
pub const WARNING: Color = NORD_YELLOW;
/// Not-started bar cells.
pub const INACTIVE: Color = NORD_POLAR_NIGHT_4;
/// Error line on standard error.
pub const ERROR: Color = NORD_RED;
