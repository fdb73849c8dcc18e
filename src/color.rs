//! Color representation for the scene model
//!
//! Colors store normalized RGBA channels in the 0.0-1.0 range. The 0-255
//! constructors validate their input; out-of-range channels are an error
//! rather than a silent clamp.

use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// Normalized RGBA color, all channels in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const RED: Color = Color { red: 1.0, green: 0.0, blue: 0.0, alpha: 1.0 };
    pub const BLUE: Color = Color { red: 0.0, green: 0.0, blue: 1.0, alpha: 1.0 };
    pub const WHITE: Color = Color { red: 1.0, green: 1.0, blue: 1.0, alpha: 1.0 };
    pub const BLACK: Color = Color { red: 0.0, green: 0.0, blue: 0.0, alpha: 1.0 };

    /// Construct from 0-255 channel values, fully opaque
    pub fn from_rgb255(red: f64, green: f64, blue: f64) -> SceneResult<Self> {
        Self::from_rgba255(red, green, blue, 1.0)
    }

    /// Construct from 0-255 channel values and a normalized alpha
    pub fn from_rgba255(red: f64, green: f64, blue: f64, alpha: f64) -> SceneResult<Self> {
        for (name, value) in [("red", red), ("green", green), ("blue", blue)] {
            if !(0.0..=255.0).contains(&value) {
                return Err(SceneError::InvalidColor(format!(
                    "channel '{}' out of range 0-255: {}",
                    name, value
                )));
            }
        }
        if !(0.0..=1.0).contains(&alpha) {
            return Err(SceneError::InvalidColor(format!(
                "alpha out of range 0-1: {}",
                alpha
            )));
        }
        Ok(Self {
            red: red / 255.0,
            green: green / 255.0,
            blue: blue / 255.0,
            alpha,
        })
    }

    /// Parse a "#rrggbb" hex string
    pub fn from_hex(hex: &str) -> SceneResult<Self> {
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SceneError::InvalidColor(format!(
                "expected 6 hex digits: {}",
                hex
            )));
        }

        let channel = |range: std::ops::Range<usize>| -> SceneResult<f64> {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|_| SceneError::InvalidColor(format!("invalid hex color: {}", hex)))
        };

        Ok(Self {
            red: channel(0..2)?,
            green: channel(2..4)?,
            blue: channel(4..6)?,
            alpha: 1.0,
        })
    }
}

/// Parse a color from a JSON value; falls back to black on unknown shapes
pub fn parse_color(value: &serde_json::Value) -> Color {
    match value {
        serde_json::Value::String(s) if s.starts_with('#') => {
            Color::from_hex(s).unwrap_or_else(|err| {
                log::warn!("falling back to black: {}", err);
                Color::BLACK
            })
        }
        serde_json::Value::Array(arr) if arr.len() == 3 => {
            let r = arr[0].as_f64().unwrap_or(0.0);
            let g = arr[1].as_f64().unwrap_or(0.0);
            let b = arr[2].as_f64().unwrap_or(0.0);
            Color::from_rgb255(r, g, b).unwrap_or_else(|err| {
                log::warn!("falling back to black: {}", err);
                Color::BLACK
            })
        }
        _ => Color::BLACK,
    }
}
