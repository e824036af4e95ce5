//! Hex colours and alpha tinting.
//!
//! Badges derive their background and border from a single accent colour at
//! fixed alpha levels. Terminals have no alpha channel, so the tint is blended
//! over a known surface colour instead.

use std::fmt;
use std::str::FromStr;

/// Alpha used for badge backgrounds (0x20 = 12.5%).
pub const BACKGROUND_ALPHA: u8 = 0x20;
/// Alpha used for badge borders (0x40 = 25%).
pub const BORDER_ALPHA: u8 = 0x40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("colour \"{0}\" must be #RGB or #RRGGBB")]
    Length(String),
    #[error("colour \"{0}\" contains a non-hex digit")]
    Digit(String),
}

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend `self` at `alpha`/255 over `base`.
    pub fn tint(self, alpha: u8, base: HexColor) -> HexColor {
        let mix = |fg: u8, bg: u8| -> u8 {
            let a = alpha as u32;
            ((fg as u32 * a + bg as u32 * (255 - a) + 127) / 255) as u8
        };
        HexColor {
            r: mix(self.r, base.r),
            g: mix(self.g, base.g),
            b: mix(self.b, base.b),
        }
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::Digit(s.to_string()));
        }
        let channel =
            |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| ColorError::Digit(s.to_string()));
        match digits.len() {
            6 => Ok(HexColor {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
            }),
            3 => {
                // #abc is shorthand for #aabbcc
                let expand = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                Ok(HexColor {
                    r: expand(0)?,
                    g: expand(1)?,
                    b: expand(2)?,
                })
            }
            _ => Err(ColorError::Length(s.to_string())),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        assert_eq!("#8B5CF6".parse::<HexColor>(), Ok(HexColor::rgb(0x8b, 0x5c, 0xf6)));
        assert_eq!("10b981".parse::<HexColor>(), Ok(HexColor::rgb(0x10, 0xb9, 0x81)));
    }

    #[test]
    fn test_parse_short_form() {
        assert_eq!("#fa0".parse::<HexColor>(), Ok(HexColor::rgb(0xff, 0xaa, 0x00)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "#12345".parse::<HexColor>(),
            Err(ColorError::Length("#12345".to_string()))
        );
        assert_eq!(
            "#zz0000".parse::<HexColor>(),
            Err(ColorError::Digit("#zz0000".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        let c = HexColor::rgb(1, 0xab, 0xff);
        assert_eq!(c.to_string(), "#01abff");
        assert_eq!(c.to_string().parse::<HexColor>(), Ok(c));
    }

    #[test]
    fn test_tint_extremes() {
        let accent = HexColor::rgb(200, 100, 50);
        let base = HexColor::rgb(0, 0, 0);
        assert_eq!(accent.tint(255, base), accent);
        assert_eq!(accent.tint(0, base), base);
    }

    #[test]
    fn test_tint_background_level() {
        // 0x20/255 of 255 over black rounds to 32
        let white = HexColor::rgb(255, 255, 255);
        let black = HexColor::rgb(0, 0, 0);
        assert_eq!(white.tint(BACKGROUND_ALPHA, black), HexColor::rgb(32, 32, 32));
        assert_eq!(white.tint(BORDER_ALPHA, black), HexColor::rgb(64, 64, 64));
    }
}
