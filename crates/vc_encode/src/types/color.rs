use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;
use std::sync::LazyLock;

use thiserror::Error;
use vc_utils::hash::HashMap;

use super::color_names::COLORS_BY_NAME;
use crate::Encode;
use crate::ops::EncodeRef;

/// An error raised while building a [`Color`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("value is not a valid color: `{0}` is not a recognised color name or hex value")]
    Invalid(String),
    #[error("color alpha must be between 0 and 1, got {0}")]
    AlphaOutOfRange(f32),
}

/// A color, built from a CSS name, a hex string or RGB(A) components.
///
/// Encoded as its CSS name when it has one and no alpha channel, else as
/// a `#rrggbb` (or `#rrggbbaa`) hex string. Two colors built differently
/// but with the same components encode the same way.
///
/// # Examples
///
/// ```
/// use vc_encode::types::Color;
///
/// let black: Color = "#000".parse().unwrap();
/// assert_eq!(black, Color::from((0, 0, 0)));
/// assert_eq!(black.to_string(), "black");
///
/// assert_eq!(Color::from((1, 12, 123)).to_string(), "#010c7b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    rgb: (u8, u8, u8),
    alpha: Option<f32>,
}

static NAMES_BY_VALUE: LazyLock<HashMap<(u8, u8, u8), &'static str>> = LazyLock::new(|| {
    // Later names overwrite earlier ones: `cyan` wins over `aqua`.
    COLORS_BY_NAME
        .iter()
        .map(|&(name, rgb)| (rgb, name))
        .collect()
});

impl Color {
    /// Creates an opaque color.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgb: (r, g, b),
            alpha: None,
        }
    }

    /// Creates a color with an alpha channel in `0.0..=1.0`.
    ///
    /// An alpha of `1.0` is the same as no alpha channel.
    pub fn from_rgba(r: u8, g: u8, b: u8, alpha: f32) -> Result<Self, ColorError> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(ColorError::AlphaOutOfRange(alpha));
        }
        Ok(Self {
            rgb: (r, g, b),
            alpha: normalize_alpha(alpha),
        })
    }

    #[inline]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        self.rgb
    }

    #[inline]
    pub const fn alpha(&self) -> Option<f32> {
        self.alpha
    }

    /// Returns the CSS name of this color, if it has one.
    ///
    /// Colors with an alpha channel have no name.
    pub fn as_named(&self) -> Option<&'static str> {
        match self.alpha {
            Some(_) => None,
            None => NAMES_BY_VALUE.get(&self.rgb).copied(),
        }
    }

    /// Returns `#rrggbb`, or `#rrggbbaa` with an alpha channel.
    pub fn as_hex(&self) -> String {
        let (r, g, b) = self.rgb;
        match self.alpha {
            None => format!("#{r:02x}{g:02x}{b:02x}"),
            Some(alpha) => {
                let a = (alpha * 255.0).round() as u8;
                format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
            }
        }
    }

    fn parse_hex(text: &str) -> Option<Self> {
        let digits = text
            .strip_prefix('#')
            .or_else(|| text.strip_prefix("0x"))
            .unwrap_or(text);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |index: usize, width: usize| -> Option<u8> {
            let part = digits.get(index * width..(index + 1) * width)?;
            let value = u8::from_str_radix(part, 16).ok()?;
            Some(if width == 1 { value * 17 } else { value })
        };

        let width = match digits.len() {
            3 | 4 => 1,
            6 | 8 => 2,
            _ => return None,
        };
        let rgb = (channel(0, width)?, channel(1, width)?, channel(2, width)?);
        let alpha = match digits.len() {
            4 | 8 => normalize_alpha(f32::from(channel(3, width)?) / 255.0),
            _ => None,
        };
        Some(Self { rgb, alpha })
    }
}

fn normalize_alpha(alpha: f32) -> Option<f32> {
    if (alpha - 1.0).abs() <= f32::EPSILON {
        None
    } else {
        Some(alpha)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();
        if let Ok(index) = COLORS_BY_NAME.binary_search_by(|(name, _)| (*name).cmp(text.as_str())) {
            let (r, g, b) = COLORS_BY_NAME[index].1;
            return Ok(Self::from_rgb(r, g, b));
        }
        Self::parse_hex(&text).ok_or_else(|| ColorError::Invalid(s.to_string()))
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<(u8, u8, u8)> for Color {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from_rgb(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_named() {
            Some(name) => f.write_str(name),
            None => f.write_str(&self.as_hex()),
        }
    }
}

impl Encode for Color {
    #[inline]
    fn encode_ref(&self) -> EncodeRef<'_> {
        EncodeRef::Opaque
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{Color, ColorError};

    #[test]
    fn equal_colors_from_different_sources() {
        let a: Color = "#000".parse().unwrap();
        let b = Color::from((0, 0, 0));
        let c: Color = "Black".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.to_string(), "black");
    }

    #[test]
    fn hex_when_unnamed() {
        assert_eq!(Color::from((1, 12, 123)).to_string(), "#010c7b");
        assert_eq!(Color::from((1, 12, 123)).as_named(), None);
        let c: Color = "0x010C7B".parse().unwrap();
        assert_eq!(c.rgb(), (1, 12, 123));
    }

    #[test]
    fn duplicate_names_use_the_last_one() {
        let aqua: Color = "aqua".parse().unwrap();
        assert_eq!(aqua.as_named(), Some("cyan"));
        let gray: Color = "gray".parse().unwrap();
        assert_eq!(gray.as_named(), Some("grey"));
        assert_eq!(Color::from((255, 0, 255)).as_named(), Some("magenta"));
    }

    #[test]
    fn alpha_channel() {
        let opaque: Color = "#ff0000ff".parse().unwrap();
        assert_eq!(opaque.alpha(), None);
        assert_eq!(opaque.to_string(), "red");

        let half: Color = "#f008".parse().unwrap();
        assert_eq!(half.rgb(), (255, 0, 0));
        assert_eq!(half.as_named(), None);
        assert_eq!(half.to_string(), "#ff000088");

        let faded = Color::from_rgba(0, 0, 0, 0.5).unwrap();
        assert_eq!(faded.as_hex(), "#00000080");
        assert_eq!(
            Color::from_rgba(0, 0, 0, 1.5),
            Err(ColorError::AlphaOutOfRange(1.5))
        );
    }

    #[test]
    fn invalid_inputs() {
        for text in ["", "#12", "#12345", "nope", "#ggg"] {
            assert!(
                matches!(text.parse::<Color>(), Err(ColorError::Invalid(_))),
                "{text:?}"
            );
        }
    }
}
