//! Color parsing, compositing, and mixing for chart fills.

use serde::{Deserialize, Serialize};

/// RGBA color with values in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f32,
    /// Green component [0.0, 1.0]
    pub g: f32,
    /// Blue component [0.0, 1.0]
    pub b: f32,
    /// Alpha component [0.0, 1.0]
    pub a: f32,
}

impl Color {
    /// Create a new color, clamping values to [0.0, 1.0].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from RGB values.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create an opaque color from 8-bit RGB channels.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Parse a hex color string (e.g., "#92dfec" or "92dfec").
    ///
    /// Supports 6-character RGB and 8-character RGBA formats.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim_start_matches('#');

        match hex.len() {
            6 => {
                let r =
                    u8::from_str_radix(&hex[0..2], 16).map_err(|_| ColorParseError::InvalidHex)?;
                let g =
                    u8::from_str_radix(&hex[2..4], 16).map_err(|_| ColorParseError::InvalidHex)?;
                let b =
                    u8::from_str_radix(&hex[4..6], 16).map_err(|_| ColorParseError::InvalidHex)?;
                Ok(Self::rgb8(r, g, b))
            }
            8 => {
                let r =
                    u8::from_str_radix(&hex[0..2], 16).map_err(|_| ColorParseError::InvalidHex)?;
                let g =
                    u8::from_str_radix(&hex[2..4], 16).map_err(|_| ColorParseError::InvalidHex)?;
                let b =
                    u8::from_str_radix(&hex[4..6], 16).map_err(|_| ColorParseError::InvalidHex)?;
                let a =
                    u8::from_str_radix(&hex[6..8], 16).map_err(|_| ColorParseError::InvalidHex)?;
                Ok(Self::new(
                    f32::from(r) / 255.0,
                    f32::from(g) / 255.0,
                    f32::from(b) / 255.0,
                    f32::from(a) / 255.0,
                ))
            }
            _ => Err(ColorParseError::InvalidLength),
        }
    }

    /// Parse a CSS-style color string: hex, `rgb(r,g,b)`, or `rgba(r,g,b,a)`.
    ///
    /// RGB channels are 8-bit (0-255); alpha is fractional (0.0-1.0).
    ///
    /// # Errors
    ///
    /// Returns an error if the string matches none of the supported forms.
    pub fn from_css(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();

        let body = if let Some(rest) = input.strip_prefix("rgba(") {
            rest
        } else if let Some(rest) = input.strip_prefix("rgb(") {
            rest
        } else {
            return Self::from_hex(input);
        };

        let body = body
            .strip_suffix(')')
            .ok_or(ColorParseError::InvalidLength)?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();

        match parts.len() {
            3 | 4 => {
                let channel = |s: &str| -> Result<f32, ColorParseError> {
                    s.parse::<f32>()
                        .map(|v| v / 255.0)
                        .map_err(|_| ColorParseError::InvalidChannel)
                };
                let r = channel(parts[0])?;
                let g = channel(parts[1])?;
                let b = channel(parts[2])?;
                let a = if parts.len() == 4 {
                    parts[3]
                        .parse::<f32>()
                        .map_err(|_| ColorParseError::InvalidChannel)?
                } else {
                    1.0
                };
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(ColorParseError::InvalidChannel),
        }
    }

    /// Parse a color string, substituting the default chart color on
    /// malformed input. Bad input degrades to a drawable color instead of
    /// blocking interaction.
    #[must_use]
    pub fn parse_or_default(input: &str) -> Self {
        Self::from_css(input).unwrap_or(Self::DEFAULT_CHART)
    }

    /// Create a color from HSL components. Hue is in degrees (wraps),
    /// saturation and lightness are fractional (0.0-1.0).
    #[must_use]
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        let h = h.rem_euclid(360.0);
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        let c = (1.0 - 2.0f32.mul_add(l, -1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self::rgb(r + m, g + m, b + m)
    }

    /// Composite an opacity onto this color, leaving the RGB channels
    /// unchanged. Alpha is clamped to [0.0, 1.0].
    #[must_use]
    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Convert to hex string (RGB only).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }

    /// Convert to a CSS `rgba(r,g,b,a)` string with 8-bit channels.
    #[must_use]
    pub fn to_rgba_string(&self) -> String {
        format!(
            "rgba({},{},{},{})",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            self.a
        )
    }

    /// Per-channel linear interpolation toward another color.
    ///
    /// `weight` 0.0 returns `self`, 1.0 returns `other`; out-of-range
    /// weights are clamped rather than extrapolated.
    #[must_use]
    pub fn mix(&self, other: &Self, weight: f32) -> Self {
        let t = weight.clamp(0.0, 1.0);
        Self::new(
            (other.r - self.r).mul_add(t, self.r),
            (other.g - self.g).mul_add(t, self.g),
            (other.b - self.b).mul_add(t, self.b),
            (other.a - self.a).mul_add(t, self.a),
        )
    }

    // Common colors
    /// Black color
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    /// White color
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    /// Transparent color
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
    /// Default chart color (#92dfec), substituted for malformed input and
    /// seeded into the first layer.
    pub const DEFAULT_CHART: Self = Self {
        r: 146.0 / 255.0,
        g: 223.0 / 255.0,
        b: 236.0 / 255.0,
        a: 1.0,
    };
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Invalid hex characters
    InvalidHex,
    /// Invalid string length or shape
    InvalidLength,
    /// Invalid rgb()/rgba() channel value
    InvalidChannel,
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHex => write!(f, "invalid hex characters"),
            Self::InvalidLength => write!(f, "invalid color string shape"),
            Self::InvalidChannel => write!(f, "invalid rgb channel value"),
        }
    }
}

impl std::error::Error for ColorParseError {}
