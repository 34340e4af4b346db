//! Reading colors from CSS-like text and writing them back as hex.

use rgb::{RGB8, RGBA};
use crate::error::ParseError;

mod named;

/// Parse a color given as text.
///
/// Accepted forms (case insensitive, surrounding blanks ignored):
/// * `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` (the `#` is optional);
/// * `rgb(r, g, b)`, `rgba(r, g, b, a)`, `rgb(r g b / a)` where the
///   channels are integers in \[0, 255\] or percentages and the alpha
///   is a number in \[0, 1\] or a percentage;
/// * CSS named colors such as `steelblue`.
///
/// Channels of the returned color are in \[0, 255\], alpha included.
///
/// # Example
///
/// ```
/// use color_strips::css;
/// let c = css::parse("#3498db").unwrap();
/// assert_eq!((c.r, c.g, c.b, c.a), (52., 152., 219., 255.));
/// assert_eq!(css::parse("SteelBlue").unwrap().g, 130.);
/// assert!(css::parse("#3498d").is_err());
/// ```
pub fn parse(s: &str) -> Result<RGBA<f64>, ParseError> {
    let s = s.trim().to_ascii_lowercase();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }
    if let Some(args) = s.strip_prefix("rgba(").or_else(|| s.strip_prefix("rgb(")) {
        let args = args.strip_suffix(')')
            .ok_or_else(|| ParseError::InvalidFunction(s.clone()))?;
        return parse_rgb_function(args)
            .map_err(|e| e.unwrap_or_else(|| ParseError::InvalidFunction(s.clone())));
    }
    if let Some(&RGB8 { r, g, b }) = named::NAMED_COLORS.get(s.as_str()) {
        return Ok(RGBA { r: r as f64, g: g as f64, b: b as f64, a: 255. });
    }
    let hex = s.strip_prefix('#').unwrap_or(&s);
    match parse_hex(hex) {
        Some(c) => Ok(c),
        // A bare word that is neither hex nor a known name.
        None if !s.starts_with('#') && s.chars().all(|c| c.is_ascii_alphabetic()) =>
            Err(ParseError::UnknownName(s)),
        None => Err(ParseError::InvalidHex(s)),
    }
}

fn parse_hex(hex: &str) -> Option<RGBA<f64>> {
    let nibble = |c: u8| -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            _ => None,
        }
    };
    let digits: Vec<u8> = hex.bytes().map(nibble).collect::<Option<_>>()?;
    let channels: Vec<u8> = match digits.len() {
        3 | 4 => digits.iter().map(|d| d * 17).collect(),
        6 | 8 => digits.chunks(2).map(|d| d[0] << 4 | d[1]).collect(),
        _ => return None,
    };
    let a = channels.get(3).copied().unwrap_or(255);
    Some(RGBA { r: channels[0] as f64, g: channels[1] as f64,
                b: channels[2] as f64, a: a as f64 })
}

/// `None` as error means "malformed"; the caller builds the message.
fn parse_rgb_function(args: &str) -> Result<RGBA<f64>, Option<ParseError>> {
    let (channels, alpha) = match args.split_once('/') {
        Some((c, a)) => (c, Some(a.trim())),
        None => (args, None),
    };
    let mut parts: Vec<&str> = if channels.contains(',') {
        channels.split(',').map(str::trim).collect()
    } else {
        channels.split_whitespace().collect()
    };
    let alpha = match (alpha, parts.len()) {
        (Some(a), 3) => Some(a),
        (None, 4) => parts.pop(),
        (None, 3) => None,
        _ => return Err(None),
    };
    let mut rgb = [0.; 3];
    for (x, p) in rgb.iter_mut().zip(&parts) {
        *x = channel(p, 255.)?;
    }
    let a = match alpha {
        Some(a) => 255. * channel(a, 1.)?,
        None => 255.,
    };
    Ok(RGBA { r: rgb[0], g: rgb[1], b: rgb[2], a })
}

/// Parse a number in \[0, `max`\] or a percentage of `max`.
fn channel(s: &str, max: f64) -> Result<f64, Option<ParseError>> {
    let x = match s.strip_suffix('%') {
        Some(p) => p.trim().parse::<f64>().map(|p| p / 100. * max),
        None => s.parse::<f64>(),
    };
    match x {
        Ok(x) if (0. ..=max).contains(&x) => Ok(x),
        Ok(_) => Err(Some(ParseError::OutOfRange(s.to_string()))),
        Err(_) => Err(None),
    }
}

/// Format a color as `#rrggbb` (lowercase).
///
/// ```
/// use rgb::RGB8;
/// assert_eq!(color_strips::css::to_hex(RGB8::new(52, 152, 219)), "#3498db");
/// ```
pub fn to_hex(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}
