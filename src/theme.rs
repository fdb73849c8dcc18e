//! Reading modes and their derived colors
//!
//! Each mode yields its text colors on access; nothing is stored per mode.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Display mode for reading surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadingMode {
    Day,
    Evening,
    Night,
}

const DARK_GRAY: Color = Color { red: 16.0 / 255.0, green: 16.0 / 255.0, blue: 16.0 / 255.0, alpha: 1.0 };
const MID_GRAY: Color = Color { red: 132.0 / 255.0, green: 132.0 / 255.0, blue: 132.0 / 255.0, alpha: 1.0 };
const LIGHT_GRAY: Color = Color { red: 151.0 / 255.0, green: 151.0 / 255.0, blue: 151.0 / 255.0, alpha: 1.0 };
const LINK_GRAY: Color = Color { red: 161.0 / 255.0, green: 161.0 / 255.0, blue: 161.0 / 255.0, alpha: 1.0 };

impl ReadingMode {
    pub fn headline_color(&self) -> Color {
        match self {
            ReadingMode::Night => Color::WHITE,
            ReadingMode::Day | ReadingMode::Evening => DARK_GRAY,
        }
    }

    pub fn date_color(&self) -> Color {
        match self {
            ReadingMode::Day | ReadingMode::Evening => MID_GRAY,
            ReadingMode::Night => LIGHT_GRAY,
        }
    }

    pub fn body_text_color(&self) -> Color {
        match self {
            ReadingMode::Day | ReadingMode::Evening => DARK_GRAY,
            ReadingMode::Night => LIGHT_GRAY,
        }
    }

    pub fn link_color(&self) -> Color {
        match self {
            ReadingMode::Day | ReadingMode::Evening => MID_GRAY,
            ReadingMode::Night => LINK_GRAY,
        }
    }
}
