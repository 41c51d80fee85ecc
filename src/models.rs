use std::fmt;
use std::str::FromStr;

use image::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Dark slate used behind the mark
    pub const BACKGROUND: Color = Color { r: 30, g: 30, b: 46 };
    /// Light blue used for the centered square
    pub const FOREGROUND: Color = Color { r: 137, g: 180, b: 250 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgb(self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }
}

impl From<Rgb<u8>> for Color {
    fn from(px: Rgb<u8>) -> Self {
        Color { r: px[0], g: px[1], b: px[2] }
    }
}

impl TryFrom<i64> for Color {
    type Error = anyhow::Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if !(0..=0xFF_FFFF).contains(&value) {
            return Err(anyhow::anyhow!("Color value out of range: {:#x}", value));
        }
        let r = ((value >> 16) & 0xFF) as u8;
        let g = ((value >> 8) & 0xFF) as u8;
        let b = (value & 0xFF) as u8;
        Ok(Color { r, g, b })
    }
}

impl From<Color> for i64 {
    fn from(color: Color) -> Self {
        ((color.r as i64) << 16) | ((color.g as i64) << 8) | (color.b as i64)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    /// Accepts `#rrggbb` or `rrggbb`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid color '{}', expected #rrggbb", s));
        }
        let value = i64::from_str_radix(hex, 16)?;
        Color::try_from(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Rectangle with inclusive corners, in canvas pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectBounds {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl RectBounds {
    /// Square inset by `size / 4` on every side: `[m, m, size - m, size - m]`.
    ///
    /// The far corner may touch or pass the last pixel for small sizes;
    /// drawing clips it to the canvas.
    pub fn centered(size: u32) -> Self {
        let margin = size / 4;
        Self {
            x0: margin,
            y0: margin,
            x1: size - margin,
            y1: size - margin,
        }
    }

    pub fn width(&self) -> u32 {
        self.x1 - self.x0 + 1
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0 + 1
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

/// Everything needed to draw one icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub background: Color,
    pub foreground: Color,
}

impl IconSpec {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            background: Color::BACKGROUND,
            foreground: Color::FOREGROUND,
        }
    }

    /// e.g. "icon128.png"
    pub fn file_name(&self) -> String {
        format!("icon{}.png", self.size)
    }
}
