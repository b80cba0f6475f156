use serde::{Deserialize, Serialize};
use std::fmt;

/// The four independently selectable color roles of a configured product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorRole {
    /// Frame depth and side faces.
    Base,
    /// Exterior-facing surfaces.
    Outside,
    /// Interior-facing surfaces.
    Inside,
    /// Seals and gaskets.
    Rubber,
}

impl ColorRole {
    pub const ALL: [ColorRole; 4] = [
        ColorRole::Base,
        ColorRole::Outside,
        ColorRole::Inside,
        ColorRole::Rubber,
    ];

    /// The role a back-side part takes when its front counterpart uses `self`.
    pub fn mirrored(self) -> Self {
        match self {
            ColorRole::Outside => ColorRole::Inside,
            other => other,
        }
    }
}

/// Error returned when a color string is not `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color value {value:?}: expected #rrggbb")]
pub struct ParseColorError {
    pub value: String,
}

/// An opaque 8-bit RGB color. Serialized as a `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(value: &str) -> Result<Self, ParseColorError> {
        let err = || ParseColorError {
            value: value.to_string(),
        };
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| err());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear channels in `[0, 1]`.
    pub fn to_unit(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Multiply each channel by `factor`, saturating at 255.
    pub fn shade(&self, factor: f64) -> Self {
        let scale = |c: u8| (c as f64 * factor).round().clamp(0.0, 255.0) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

/// A catalog color after resolution: its id, display name and value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedColor {
    pub id: String,
    pub name: String,
    pub value: Rgb,
}

/// The resolved color for each role of one configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Palette {
    pub base: ResolvedColor,
    pub outside: ResolvedColor,
    pub inside: ResolvedColor,
    pub rubber: ResolvedColor,
}

impl Palette {
    pub fn get(&self, role: ColorRole) -> &ResolvedColor {
        match role {
            ColorRole::Base => &self.base,
            ColorRole::Outside => &self.outside,
            ColorRole::Inside => &self.inside,
            ColorRole::Rubber => &self.rubber,
        }
    }

    pub fn rgb(&self, role: ColorRole) -> Rgb {
        self.get(role).value
    }
}
