//! Color palette for Linguasea's TUI.
//!
//! A small fixed palette grouped into background layers, text shades, and
//! accents for highlighting and semantic states.

use ratatui::style::Color;

/// Application theme palette used by rendering code.
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Darker background shade behind overlays.
    pub crust: Color,
    /// Subtle surface color for component backgrounds.
    pub surface: Color,
    /// Muted line/border color.
    pub overlay: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext: Color,
    /// Accent for selection and interactive highlights.
    pub accent: Color,
    /// Accent for emphasized headings and focused borders.
    pub heading: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
}

/// Construct a [`Color::Rgb`] from an 8-bit RGB triplet.
fn hex(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Return the application's default theme palette.
pub fn theme() -> Theme {
    Theme {
        base: hex((0x16, 0x1b, 0x22)),
        crust: hex((0x0d, 0x11, 0x17)),
        surface: hex((0x2d, 0x38, 0x45)),
        overlay: hex((0x76, 0x85, 0x96)),
        text: hex((0xd8, 0xe2, 0xec)),
        subtext: hex((0x9c, 0xab, 0xba)),
        accent: hex((0x6f, 0xd0, 0xc5)),
        heading: hex((0x82, 0xaa, 0xff)),
        green: hex((0x95, 0xd9, 0x9c)),
        yellow: hex((0xf2, 0xcc, 0x8f)),
        red: hex((0xee, 0x8a, 0x9e)),
    }
}
