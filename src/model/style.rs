// src/model/style.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Base stick thickness VESTA uses for a width scale of 1.
pub const BASE_LINE_WIDTH: f64 = 0.300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// Where the arrow sits relative to its site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowAnchor {
    /// Arrow is centered on the site
    #[default]
    Center,
    /// Arrow starts at the site
    Site,
}

impl ArrowAnchor {
    /// Value of the last column of a VECTT record.
    pub fn flag(self) -> u8 {
        match self {
            ArrowAnchor::Center => 1,
            ArrowAnchor::Site => 0,
        }
    }
}

impl FromStr for ArrowAnchor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_lowercase().as_str() {
            "center" => Ok(ArrowAnchor::Center),
            "site" => Ok(ArrowAnchor::Site),
            other => Err(Error::config(format!(
                "unknown arrow mode '{}', expected 'center' or 'site'",
                other
            ))),
        }
    }
}

impl fmt::Display for ArrowAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrowAnchor::Center => write!(f, "center"),
            ArrowAnchor::Site => write!(f, "site"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowStyle {
    #[serde(default = "ArrowStyle::default_color")]
    pub color: Rgb,
    #[serde(default = "ArrowStyle::default_width_scale")]
    pub width_scale: f64,
    #[serde(default)]
    pub anchor: ArrowAnchor,
}

impl ArrowStyle {
    fn default_color() -> Rgb {
        Rgb::new(0, 0, 255)
    }

    fn default_width_scale() -> f64 {
        1.0
    }

    pub fn line_width(&self) -> f64 {
        BASE_LINE_WIDTH * self.width_scale
    }
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            color: Self::default_color(),
            width_scale: Self::default_width_scale(),
            anchor: ArrowAnchor::Center,
        }
    }
}
