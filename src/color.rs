//! Colors
//!
//! Colors are stored as floating point components in [0,1] with a separate,
//!   straight (not pre-multiplied) alpha.
//!
//! Paint values are resolved from
//!   - `#rrggbb` or `#rgb` hex strings
//!   - `rgb(r, g, b)` with integer (0-255) or percentage components
//!   - a fixed table of [named colors](https://developer.mozilla.org/en-US/docs/Web/CSS/named-color)
//!   - `none` and `transparent`, both fully transparent
//!

use crate::error::AttributeError;
use crate::math::clamp01;
use crate::parser::numbers;

/// Convert an f64 [0,1] component to a u8 [0,255] component
pub fn cu8(v: f64) -> u8 {
    (clamp01(v) * 255.0).round() as u8
}

fn color_u8_to_f64(x: u8) -> f64 {
    f64::from(x) / 255.0
}

/// Color as Red, Green, Blue
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// White Color (1,1,1)
    pub fn white() -> Self {
        Self::new(1.0,1.0,1.0)
    }
    /// Black Color (0,0,0)
    pub fn black() -> Self {
        Self::new(0.0,0.0,0.0)
    }
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Rgb { r, g, b }
    }
    pub fn gray(g: f64) -> Self {
        Self::new(g,g,g)
    }
    /// Color from 8-bit components
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(color_u8_to_f64(r), color_u8_to_f64(g), color_u8_to_f64(b))
    }
    /// 8-bit components, rounded
    pub fn to_u8(&self) -> [u8; 3] {
        [cu8(self.r), cu8(self.g), cu8(self.b)]
    }
    /// Components differ by no more than `eps`
    pub fn approx_eq(&self, other: &Rgb, eps: f64) -> bool {
        (self.r - other.r).abs() <= eps &&
            (self.g - other.g).abs() <= eps &&
            (self.b - other.b).abs() <= eps
    }
}

/// Color as Red, Green, Blue, and Alpha
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    /// Alpha, 0 is fully transparent
    pub a: f64,
}

impl Rgba {
    /// Create new color
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Rgba { rgb: Rgb::new(r,g,b), a: clamp01(a) }
    }
    /// Fully transparent color; drawing it is skipped
    pub fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
    /// Opaque black
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
    /// Scale the alpha by `opacity`, clamped to [0,1]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.a = clamp01(self.a * clamp01(opacity));
        self
    }
    /// Color contributes nothing when drawn
    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }
    /// Parse a paint string
    ///
    ///     use vscan::Rgba;
    ///
    ///     let red = Rgba::parse("#ff0000").unwrap();
    ///     assert_eq!(red, Rgba::new(1.0, 0.0, 0.0, 1.0));
    ///     assert!(Rgba::parse("none").unwrap().is_transparent());
    ///     assert!(Rgba::parse("#ff00").is_err());
    ///
    pub fn parse(s: &str) -> Result<Rgba, AttributeError> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| AttributeError::Color(s.to_string()));
        }
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("rgb(") && lower.ends_with(')') {
            return parse_rgb_function(&lower[4..lower.len()-1])
                .ok_or_else(|| AttributeError::Color(s.to_string()));
        }
        match lower.as_str() {
            "none" | "transparent" => Ok(Rgba::transparent()),
            name => named(name)
                .map(|(r,g,b)| Rgb::from_u8(r,g,b).into())
                .ok_or_else(|| AttributeError::Color(s.to_string())),
        }
    }
}

impl From<Rgb> for Rgba {
    fn from(c: Rgb) -> Rgba {
        Rgba { rgb: c, a: 1.0 }
    }
}
impl From<Rgba> for Rgb {
    fn from(c: Rgba) -> Rgb {
        c.rgb
    }
}

/// Resolve an optional paint attribute
///
/// A missing attribute uses `default`; `default` of `None` means no paint.
///   Unresolvable colors are logged and become fully transparent, which
///   skips the draw.
pub fn resolve_paint(value: Option<&str>, default: Option<&str>, opacity: f64) -> Rgba {
    let value = match value.or(default) {
        Some(v) => v,
        None => return Rgba::transparent(),
    };
    match Rgba::parse(value) {
        Ok(c) => c.with_opacity(opacity),
        Err(err) => {
            log::warn!("{}, treating as transparent", err);
            Rgba::transparent()
        }
    }
}

fn hex_digit(c: u8) -> Option<u8> {
    (c as char).to_digit(16).map(|v| v as u8)
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    let digits = hex.as_bytes().iter()
        .map(|&c| hex_digit(c))
        .collect::<Option<Vec<u8>>>()?;
    let (r,g,b) = match digits.len() {
        6 => (digits[0] << 4 | digits[1],
              digits[2] << 4 | digits[3],
              digits[4] << 4 | digits[5]),
        3 => (digits[0] * 17, digits[1] * 17, digits[2] * 17),
        _ => return None,
    };
    Some(Rgb::from_u8(r,g,b).into())
}

fn parse_rgb_function(args: &str) -> Option<Rgba> {
    let parts : Vec<&str> = args.split(',').map(|p| p.trim()).collect();
    if parts.len() != 3 {
        return None;
    }
    let mut v = [0.0; 3];
    for (i, part) in parts.iter().enumerate() {
        v[i] = if let Some(pct) = part.strip_suffix('%') {
            single_number(pct)? / 100.0
        } else {
            single_number(part)? / 255.0
        };
    }
    Some(Rgba::new(clamp01(v[0]), clamp01(v[1]), clamp01(v[2]), 1.0))
}

fn single_number(s: &str) -> Option<f64> {
    match numbers(s).ok()?.as_slice() {
        [v] => Some(*v),
        _ => None,
    }
}

/// Named colors, see <https://developer.mozilla.org/en-US/docs/Web/CSS/named-color>
fn named(name: &str) -> Option<(u8,u8,u8)> {
    let c = match name {
        "black"   => (0x00, 0x00, 0x00),
        "silver"  => (0xc0, 0xc0, 0xc0),
        "gray"    => (0x80, 0x80, 0x80),
        "white"   => (0xff, 0xff, 0xff),
        "maroon"  => (0x80, 0x00, 0x00),
        "red"     => (0xff, 0x00, 0x00),
        "purple"  => (0x80, 0x00, 0x80),
        "fuchsia" => (0xff, 0x00, 0xff),
        "green"   => (0x00, 0x80, 0x00),
        "lime"    => (0x00, 0xff, 0x00),
        "olive"   => (0x80, 0x80, 0x00),
        "yellow"  => (0xff, 0xff, 0x00),
        "navy"    => (0x00, 0x00, 0x80),
        "blue"    => (0x00, 0x00, 0xff),
        "teal"    => (0x00, 0x80, 0x80),
        "aqua"    => (0x00, 0xff, 0xff),
        "orange"  => (0xff, 0xa5, 0x00),
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_short_and_long() {
        assert_eq!(Rgba::parse("#f00").unwrap(), Rgba::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(Rgba::parse("#00FF00").unwrap(), Rgba::new(0.0, 1.0, 0.0, 1.0));
        assert!(Rgba::parse("#gg0000").is_err());
        assert!(Rgba::parse("#12345").is_err());
    }
    #[test]
    fn rgb_function() {
        let c = Rgba::parse("rgb(255, 0, 51)").unwrap();
        assert_eq!(c.rgb.to_u8(), [255, 0, 51]);
        let c = Rgba::parse("RGB(100%,50%,0%)").unwrap();
        assert_eq!(c.rgb.to_u8(), [255, 128, 0]);
        assert!(Rgba::parse("rgb(1,2)").is_err());
        assert!(Rgba::parse("rgb(1,2,x)").is_err());
    }
    #[test]
    fn named_and_transparent() {
        assert_eq!(Rgba::parse("orange").unwrap().rgb.to_u8(), [255, 165, 0]);
        assert_eq!(Rgba::parse("Navy").unwrap().rgb.to_u8(), [0, 0, 128]);
        assert!(Rgba::parse("transparent").unwrap().is_transparent());
        assert!(Rgba::parse("cornflowerblue").is_err());
    }
    #[test]
    fn paint_resolution() {
        assert_eq!(resolve_paint(None, Some("black"), 1.0), Rgba::black());
        assert!(resolve_paint(None, None, 1.0).is_transparent());
        assert!(resolve_paint(Some("bogus"), Some("black"), 1.0).is_transparent());
        assert_eq!(resolve_paint(Some("blue"), None, 0.5).a, 0.5);
        assert_eq!(resolve_paint(Some("blue"), None, 3.0).a, 1.0);
    }
}
