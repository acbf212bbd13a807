//! Resolving the `--color` argument into a button background.

use eframe::egui::Color32;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color value")]
    Empty,
    #[error("unknown color name `{0}`")]
    UnknownName(String),
    #[error("malformed hex color `{0}`")]
    BadHex(String),
}

const NAMED: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("blue", [0, 0, 255]),
    ("navy", [0, 0, 128]),
    ("yellow", [255, 255, 0]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
    ("magenta", [255, 0, 255]),
    ("fuchsia", [255, 0, 255]),
    ("cyan", [0, 255, 255]),
    ("aqua", [0, 255, 255]),
    ("teal", [0, 128, 128]),
    ("olive", [128, 128, 0]),
    ("maroon", [128, 0, 0]),
    ("brown", [165, 42, 42]),
    ("pink", [255, 192, 203]),
    ("silver", [192, 192, 192]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("darkgray", [169, 169, 169]),
    ("darkgrey", [169, 169, 169]),
    ("lightgray", [211, 211, 211]),
    ("lightgrey", [211, 211, 211]),
];

/// Parses a named color or a `#rgb`, `#rrggbb` or `#aarrggbb` hex value.
pub fn parse_color(value: &str) -> Result<Color32, ColorParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ColorParseError::Empty);
    }
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ColorParseError::BadHex(value.to_owned()));
    }

    let name = value.to_ascii_lowercase();
    if name == "transparent" {
        return Ok(Color32::TRANSPARENT);
    }
    NAMED
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, [r, g, b])| Color32::from_rgb(*r, *g, *b))
        .ok_or(ColorParseError::UnknownName(name))
}

fn parse_hex(hex: &str) -> Option<Color32> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => {
            let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
            Some(Color32::from_rgb(nibble(0)?, nibble(1)?, nibble(2)?))
        }
        6 => Some(Color32::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        // alpha first, the way Qt reads eight digit colors
        8 => Some(Color32::from_rgba_unmultiplied(
            byte(2)?,
            byte(4)?,
            byte(6)?,
            byte(0)?,
        )),
        _ => None,
    }
}

/// Background applied to the clock button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Background {
    /// Leave the toolkit's own button style alone.
    #[default]
    Default,
    Fill(Color32),
}

impl Background {
    /// A value that cannot be resolved is logged and leaves the default style.
    pub fn from_arg(arg: Option<&str>) -> Self {
        let Some(value) = arg else {
            return Self::Default;
        };
        match parse_color(value) {
            Ok(color) => Self::Fill(color),
            Err(err) => {
                tracing::warn!(%err, "ignoring --color, keeping default style");
                Self::Default
            }
        }
    }

    pub fn fill(&self) -> Option<Color32> {
        match self {
            Self::Default => None,
            Self::Fill(color) => Some(*color),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Default => "default".to_owned(),
            Self::Fill(c) => format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b()),
        }
    }
}
