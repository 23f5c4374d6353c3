use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Fallback for lookups of unknown muscle groups.
    pub const NEUTRAL: Color = Color::rgb(0x6b, 0x72, 0x80);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn components(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Renders the color with an alpha suffix, e.g. `#22c55e40`.
    #[must_use]
    pub fn with_alpha(self, alpha: u8) -> String {
        format!("{self}{alpha:02x}")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(digits) = s.trim().strip_prefix('#') else {
            return Err(ColorError::MissingHash);
        };

        if digits.len() != 6 {
            return Err(ColorError::InvalidLength(digits.len()));
        }

        let component = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|d| u8::from_str_radix(d, 16).ok())
                .ok_or(ColorError::InvalidDigit)
        };

        Ok(Color::rgb(component(0..2)?, component(2..4)?, component(4..6)?))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ColorError {
    #[error("Color must start with '#'")]
    MissingHash,
    #[error("Color must have 6 hex digits ({0} given)")]
    InvalidLength(usize),
    #[error("Color must consist of hex digits")]
    InvalidDigit,
}
