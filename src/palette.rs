use std::ops::Index;
use rgb::{RGB8, RGBA};
use crate::{css, ColorRange, ParseError, RGBColor, Scale};

/// Number of lightness units the bright and dark anchors are away
/// from the base color.
pub const STEPS: f64 = 2.;

/// A monochromatic palette: colors ordered from the brightest to the
/// darkest.
///
/// A palette is never modified; a new base color or stop count means
/// a new palette.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<RGB8>,
}

impl Palette {
    /// Generate `stops` colors around the color given as text (see
    /// [`css::parse`] for the accepted syntaxes).
    ///
    /// # Example
    ///
    /// ```
    /// use color_strips::Palette;
    /// let p = Palette::monochrome("#3498db", 3).unwrap();
    /// assert_eq!(p.to_hex(), ["#aafbff", "#3498db", "#004079"]);
    /// assert!(Palette::monochrome("#3498d", 3).is_err());
    /// ```
    pub fn monochrome(base: &str, stops: usize) -> Result<Self, ParseError> {
        Ok(Self::from_base(css::parse(base)?, stops))
    }

    /// Generate `stops` colors from `base`: the color lightened by
    /// [`STEPS`] units, `base` itself and the color darkened by
    /// [`STEPS`] units are joined by a gradient in L\*C\*h° which is
    /// then sampled at evenly spaced positions.  A single stop is the
    /// brightest color.
    pub fn from_base<C: RGBColor>(base: C, stops: usize) -> Self {
        let base: RGBA<f64> = base.to_rgba();
        let anchors = [base.lighten(STEPS), base, base.darken(STEPS)];
        let colors = match Scale::new(&anchors) {
            Some(scale) => scale.samples(stops).map(RGB8::from_rgba).collect(),
            None => Vec::new(),
        };
        Palette { colors }
    }

    /// Returns the number of colors in the palette.
    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// Returns the colors, brightest first.
    pub fn colors(&self) -> &[RGB8] { &self.colors }

    pub fn iter(&self) -> std::slice::Iter<'_, RGB8> { self.colors.iter() }

    /// The colors as `#rrggbb` strings.
    pub fn to_hex(&self) -> Vec<String> {
        self.colors.iter().map(|&c| css::to_hex(c)).collect()
    }
}

impl Index<usize> for Palette {
    type Output = RGB8;

    fn index(&self, i: usize) -> &RGB8 { &self.colors[i] }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a RGB8;
    type IntoIter = std::slice::Iter<'a, RGB8>;

    fn into_iter(self) -> Self::IntoIter { self.colors.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_palettes() {
        let p = Palette::monochrome("#3498db", 6).unwrap();
        assert_eq!(p.to_hex(), ["#aafbff", "#6dd5f2", "#3dade4",
                                "#2b85c7", "#1762a0", "#004079"]);
        let p = Palette::monochrome("#808080", 7).unwrap();
        assert_eq!(p.to_hex(), ["#e1e1e1", "#c0c0c0", "#9f9f9f", "#808080",
                                "#626262", "#464646", "#2b2b2b"]);
        let p = Palette::monochrome("red", 3).unwrap();
        assert_eq!(p.to_hex(), ["#ff9264", "#ff0000", "#890000"]);
    }

    #[test]
    fn anchors_leave_lightness_range() {
        // The bright and dark anchors are not held within L* ∈ [0, 100];
        // only the resulting channels are clipped.
        let p = Palette::monochrome("#ffff00", 3).unwrap();
        assert_eq!(p.to_hex(), ["#ffff92", "#ffff00", "#919c00"]);
        let p = Palette::monochrome("#00ff00", 3).unwrap();
        assert_eq!(p.to_hex(), ["#b0ff8d", "#00ff00", "#009700"]);
        let p = Palette::monochrome("#330000", 3).unwrap();
        assert_eq!(p.to_hex(), ["#8f5355", "#330000", "#000000"]);
        let p = Palette::monochrome("navy", 3).unwrap();
        assert_eq!(p.to_hex(), ["#815ae4", "#000080", "#00002c"]);
        let p = Palette::monochrome("#0a0a0a", 3).unwrap();
        assert_eq!(p.to_hex(), ["#5b5b5b", "#0a0a0a", "#000000"]);
    }

    #[test]
    fn black_anchor_keeps_chroma() {
        let p = Palette::monochrome("#330000", 6).unwrap();
        assert_eq!(p.to_hex(), ["#8f5355", "#693134", "#441016",
                                "#310000", "#2d0000", "#000000"]);
        let p = Palette::monochrome("#000080", 6).unwrap();
        assert_eq!(p.to_hex(), ["#815ae4", "#5736bb", "#281393",
                                "#000870", "#000b4e", "#00002c"]);
    }

    #[test]
    fn odd_stop_count_hits_base() {
        let p = Palette::monochrome("#3498db", 7).unwrap();
        assert_eq!(p[3], RGB8::new(0x34, 0x98, 0xdb));
    }

    #[test]
    fn deterministic() {
        for n in 3..=20 {
            assert_eq!(Palette::monochrome("#3498db", n),
                       Palette::monochrome("#3498db", n));
        }
    }

    #[test]
    fn length_and_order() {
        for base in ["#3498db", "#ffffff", "#000000", "#ff0000", "#808080",
                     "#0a0a0a", "#fefefe", "yellow"] {
            for n in 3..=20 {
                let p = Palette::monochrome(base, n).unwrap();
                assert_eq!(p.len(), n);
                let first = p[0].lightness();
                let last = p[n - 1].lightness();
                assert!(first > last, "{base} ({n}): {first} ≤ {last}");
            }
        }
    }

    #[test]
    fn extremes_stay_valid() {
        let p = Palette::monochrome("#ffffff", 6).unwrap();
        assert_eq!(p.to_hex(), ["#ffffff", "#ffffff", "#ffffff",
                                "#eaeaea", "#c2c2c2", "#9b9b9b"]);
        let p = Palette::monochrome("#000000", 6).unwrap();
        assert_eq!(p.to_hex(), ["#555555", "#343434", "#161616",
                                "#000000", "#000000", "#000000"]);
        for hex in p.to_hex() {
            assert!(css::parse(&hex).is_ok());
        }
    }

    #[test]
    fn hex_round_trips() {
        let p = Palette::monochrome("#3498db", 20).unwrap();
        for (&c, hex) in p.iter().zip(p.to_hex()) {
            let back = RGB8::from_rgba(css::parse(&hex).unwrap());
            assert_eq!(back, c);
        }
    }

    #[test]
    fn single_and_empty() {
        let p = Palette::monochrome("#3498db", 1).unwrap();
        assert_eq!(p.to_hex(), ["#aafbff"]);
        assert!(Palette::monochrome("#3498db", 0).unwrap().is_empty());
    }

    #[test]
    fn invalid_base() {
        assert_eq!(Palette::monochrome("#34", 6),
                   Err(ParseError::InvalidHex("#34".into())));
    }
}
