/// Hex color validation and RGB decomposition.
///
/// Accepted input is an optional leading `#` followed by exactly 3 or 6 hex
/// digits. Nothing is trimmed or corrected: `" #fff"` and `"#ffff"` are both
/// rejected.
use std::sync::LazyLock;

use regex::Regex;

use super::errors::ShadeError;

static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?(?:[0-9a-fA-F]{3}){1,2}$").expect("hex color pattern is valid")
});

/// An 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A color argument that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexColor {
    raw: String,
    rgb: Rgb,
}

impl HexColor {
    /// Validate `input` and decompose it into RGB.
    ///
    /// # Errors
    ///
    /// Returns `ShadeError::InvalidColor` when `input` is not a 3 or 6-digit
    /// hex color with an optional leading `#`.
    pub fn parse(input: &str) -> Result<Self, ShadeError> {
        if !HEX_PATTERN.is_match(input) {
            return Err(ShadeError::InvalidColor {
                input: input.to_owned(),
            });
        }
        let rgb = decompose(strip_hash(input)).ok_or_else(|| ShadeError::InvalidColor {
            input: input.to_owned(),
        })?;
        Ok(Self {
            raw: input.to_owned(),
            rgb,
        })
    }

    /// The argument exactly as the user typed it.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Hex digits without the leading `#`, case preserved.
    #[must_use]
    pub fn digits(&self) -> &str {
        strip_hash(&self.raw)
    }

    /// Lowercase hex digits without `#`, as used in links.
    #[must_use]
    pub fn slug(&self) -> String {
        self.digits().to_ascii_lowercase()
    }

    #[must_use]
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }
}

fn strip_hash(s: &str) -> &str {
    s.strip_prefix('#').unwrap_or(s)
}

/// Split hex digits into channels. 3-digit shorthand doubles each digit.
///
/// Returns `None` for anything that is not 3 or 6 hex digits.
fn decompose(digits: &str) -> Option<Rgb> {
    let channel = |i: usize, width: usize| -> Option<u8> {
        let part = digits.get(i * width..(i + 1) * width)?;
        if !part.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u8::from_str_radix(part, 16).ok()?;
        Some(if width == 1 { value * 17 } else { value })
    };
    let width = match digits.len() {
        3 => 1,
        6 => 2,
        _ => return None,
    };
    Some(Rgb {
        r: channel(0, width)?,
        g: channel(1, width)?,
        b: channel(2, width)?,
    })
}

/// Format an RGB triple as lowercase `#rrggbb`.
#[must_use]
pub fn to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_digit_decomposition() {
        let c = HexColor::parse("312333").unwrap();
        assert_eq!(
            c.rgb(),
            Rgb {
                r: 0x31,
                g: 0x23,
                b: 0x33
            }
        );
    }

    #[test]
    fn test_three_digit_expands() {
        let c = HexColor::parse("#aBc").unwrap();
        assert_eq!(
            c.rgb(),
            Rgb {
                r: 0xaa,
                g: 0xbb,
                b: 0xcc
            }
        );
        assert_eq!(c.digits(), "aBc");
        assert_eq!(c.slug(), "abc");
    }

    #[test]
    fn test_raw_is_preserved() {
        let c = HexColor::parse("#FF0000").unwrap();
        assert_eq!(c.raw(), "#FF0000");
        assert_eq!(c.slug(), "ff0000");
    }

    #[test]
    fn test_accepts_valid_forms() {
        for input in ["fff", "#fff", "000000", "#A1b2C3", "#123"] {
            assert!(HexColor::parse(input).is_ok(), "{input} should be valid");
        }
    }

    #[test]
    fn test_rejects_invalid_forms() {
        for input in [
            "", "#", "#zzz", "ff", "#ffff", "#fffff", "#fffffff", "##fff", " #fff", "#fff ",
            "red", "#12345g",
        ] {
            let err = HexColor::parse(input).unwrap_err();
            assert!(
                matches!(err, ShadeError::InvalidColor { .. }),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_decompose_rejects_bad_digits() {
        assert_eq!(decompose("12g"), None);
        assert_eq!(decompose("zz0000"), None);
        assert_eq!(decompose("+1+1+1"), None);
        assert_eq!(decompose("1234"), None);
        assert_eq!(
            decompose("0aF"),
            Some(Rgb {
                r: 0x00,
                g: 0xaa,
                b: 0xff
            })
        );
    }

    #[test]
    fn test_to_hex_is_lowercase() {
        assert_eq!(
            to_hex(Rgb {
                r: 0xAB,
                g: 0x01,
                b: 0xff
            }),
            "#ab01ff"
        );
    }
}
