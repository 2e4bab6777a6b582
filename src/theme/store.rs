use ratatui::style::Color;

use super::types::Theme;

/// Catppuccin Mocha (dark), the built-in palette.
const MOCHA: Theme = Theme {
    base: Color::Rgb(0x1e, 0x1e, 0x2e),
    mantle: Color::Rgb(0x18, 0x18, 0x25),
    crust: Color::Rgb(0x11, 0x11, 0x1b),
    surface1: Color::Rgb(0x45, 0x47, 0x5a),
    surface2: Color::Rgb(0x58, 0x5b, 0x70),
    overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
    overlay2: Color::Rgb(0x93, 0x99, 0xb2),
    text: Color::Rgb(0xcd, 0xd6, 0xf4),
    subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
    subtext1: Color::Rgb(0xba, 0xc2, 0xde),
    sapphire: Color::Rgb(0x74, 0xc7, 0xec),
    mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
    peach: Color::Rgb(0xfa, 0xb3, 0x87),
    green: Color::Rgb(0xa6, 0xe3, 0xa1),
    yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
    red: Color::Rgb(0xf3, 0x8b, 0xa8),
    lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
};

/// Palette used by every widget.
#[must_use]
pub const fn theme() -> Theme {
    MOCHA
}
