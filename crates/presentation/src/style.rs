//! Colors shared by both adapters.

use sash_types::{Fill, NeutralTone, Palette, Rgb};

/// Tint of glass panels.
pub const GLASS_TINT: Rgb = Rgb::new(0xad, 0xd8, 0xe6);
pub const HAIRLINE: Rgb = Rgb::new(0xff, 0xff, 0xff);
pub const HARDWARE: Rgb = Rgb::new(0xc0, 0xc0, 0xc0);
pub const INDICATOR: Rgb = Rgb::new(0x55, 0x55, 0x55);
/// Hairlines stay faint so the glass behind them reads through.
pub const HAIRLINE_ALPHA: f64 = 0.6;

/// Alpha of a glass panel. The resolved glazing value is a see-through
/// factor, so heavier glazing comes out more opaque.
pub fn glass_alpha(opacity: f64) -> f64 {
    (1.0 - opacity).clamp(0.05, 1.0)
}

/// Color and alpha of a fill under `palette`.
pub fn fill_color(fill: &Fill, palette: &Palette) -> (Rgb, f64) {
    match fill {
        Fill::Role { role } => (palette.rgb(*role), 1.0),
        Fill::Glass { opacity } => (GLASS_TINT, glass_alpha(*opacity)),
        Fill::Neutral { tone } => match tone {
            NeutralTone::Hairline => (HAIRLINE, HAIRLINE_ALPHA),
            NeutralTone::Hardware => (HARDWARE, 1.0),
            NeutralTone::Indicator => (INDICATOR, 1.0),
        },
    }
}

/// CSS color: hex when opaque, `rgba()` otherwise.
pub fn css_color(rgb: Rgb, alpha: f64) -> String {
    if alpha >= 1.0 {
        rgb.to_hex()
    } else {
        format!("rgba({}, {}, {}, {:.2})", rgb.r, rgb.g, rgb.b, alpha)
    }
}
