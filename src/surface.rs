//! Drawing surface the ornaments are painted on.
//!
//! Coordinates have their origin in the top left corner with y growing
//! downwards; positive rotations turn clockwise.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid color {0:?}, expected #RRGGBB")]
pub struct InvalidColor(pub String);

impl FromStr for Color {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Color::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = InvalidColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Fills the whole surface, ignoring the current transform.
    fn clear(&mut self, color: Color);

    /// Pushes the current transform.
    fn save(&mut self);
    /// Pops back to the transform of the matching `save`.
    fn restore(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    fn rotate(&mut self, degrees: f32);
    fn scale(&mut self, sx: f32, sy: f32);

    fn set_stroke_color(&mut self, color: Color);
    fn set_stroke_width(&mut self, width: f32);
    fn set_stroke_cap(&mut self, cap: StrokeCap);

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);
}
