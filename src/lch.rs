//! CIE L\*a\*b\* and its polar form L\*C\*h° relative to the D65
//! white point.
//!
//! RGB values are sRGB channels in \[0, 255\], alpha included, as
//! used throughout the crate.

use std::f64::consts::PI;
use rgb::RGBA;

/// Lightness change of one "unit" when lightening or darkening.
pub const LAB_STEP: f64 = 18.;

// D65 reference white.
const XN: f64 = 0.950470;
const YN: f64 = 1.;
const ZN: f64 = 1.088830;

const T0: f64 = 4. / 29.;
const T1: f64 = 6. / 29.;
const T2: f64 = 3. * T1 * T1;
const T3: f64 = T1 * T1 * T1;
const TWO_PI: f64 = 2. * PI;

#[inline]
fn srgb_to_linear(c: f64) -> f64 {
    let c = c / 255.;
    if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
}

#[inline]
fn linear_to_srgb(c: f64) -> f64 {
    255. * if c <= 0.00304 { 12.92 * c }
           else { 1.055 * c.powf(1. / 2.4) - 0.055 }
}

#[inline]
fn xyz_lab(t: f64) -> f64 {
    if t > T3 { t.powf(1. / 3.) } else { t / T2 + T0 }
}

#[inline]
fn lab_xyz(t: f64) -> f64 {
    if t > T1 { t * t * t } else { T2 * (t - T0) }
}

/// A color in CIE L\*a\*b\* with an alpha component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lab {
    /// The lightness in the range 0. to 100.
    pub l: f64,
    pub a: f64,
    pub b: f64,
    pub alpha: f64,
}

impl Lab {
    /// Convert sRGB channels to L\*a\*b\*.
    pub fn from_rgb(c: RGBA<f64>) -> Lab {
        let r = srgb_to_linear(c.r);
        let g = srgb_to_linear(c.g);
        let b = srgb_to_linear(c.b);
        let x = xyz_lab((0.4124564 * r + 0.3575761 * g + 0.1804375 * b) / XN);
        let y = xyz_lab((0.2126729 * r + 0.7151522 * g + 0.0721750 * b) / YN);
        let z = xyz_lab((0.0193339 * r + 0.1191920 * g + 0.9503041 * b) / ZN);
        let l = 116. * y - 16.;
        Lab { l: l.max(0.), a: 500. * (x - y), b: 200. * (y - z), alpha: c.a }
    }

    /// Convert back to sRGB.  Out of gamut channels are clipped to
    /// \[0, 255\] and no rounding takes place.
    pub fn to_rgb(&self) -> RGBA<f64> {
        let fy = (self.l + 16.) / 116.;
        let fx = fy + self.a / 500.;
        let fz = fy - self.b / 200.;
        let x = XN * lab_xyz(fx);
        let y = YN * lab_xyz(fy);
        let z = ZN * lab_xyz(fz);
        let r = linear_to_srgb(3.2404542 * x - 1.5371385 * y - 0.4985314 * z);
        let g = linear_to_srgb(-0.9692660 * x + 1.8760108 * y + 0.0415560 * z);
        let b = linear_to_srgb(0.0556434 * x - 0.2040259 * y + 1.0572252 * z);
        RGBA { r: clip(r), g: clip(g), b: clip(b), a: clip(self.alpha) }
    }

    /// Move the lightness by `dl`.  The result may leave \[0, 100\];
    /// [`Lab::to_rgb`] brings it back into the sRGB gamut.
    pub fn shift(self, dl: f64) -> Lab {
        Lab { l: self.l + dl, ..self }
    }
}

// NaN (from a NaN input) ends up as 0.
#[inline]
fn clip(x: f64) -> f64 {
    if x.is_nan() { 0. } else { x.clamp(0., 255.) }
}

/// The type for colors in the CIE L\*C\*h° color space.  This is
/// CIE L\*a\*b\* with polar coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lch {
    /// The lightness in the range 0. to 100.
    pub l: f64,
    /// The chroma, ≥ 0.
    pub c: f64,
    /// The hue in radians in \[0, 2π), `None` for achromatic colors.
    pub h: Option<f64>,
    pub alpha: f64,
}

impl Lch {
    #[inline]
    pub fn from_rgb(c: RGBA<f64>) -> Lch { Lab::from_rgb(c).into() }

    #[inline]
    pub fn to_rgb(&self) -> RGBA<f64> { Lab::from(*self).to_rgb() }
}

impl From<Lab> for Lch {
    fn from(lab: Lab) -> Lch {
        let c = lab.a.hypot(lab.b);
        // Grays have no meaningful hue.
        let h = if (c * 10_000.).round() == 0. { None }
                else { let h = lab.b.atan2(lab.a);
                       Some(if h < 0. { h + TWO_PI } else { h }) };
        Lch { l: lab.l, c, h, alpha: lab.alpha }
    }
}

impl From<Lch> for Lab {
    fn from(lch: Lch) -> Lab {
        let h = lch.h.unwrap_or(0.);
        Lab { l: lch.l, a: lch.c * h.cos(), b: lch.c * h.sin(),
              alpha: lch.alpha }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(r: f64, g: f64, b: f64) -> RGBA<f64> { RGBA { r, g, b, a: 255. } }

    #[test]
    fn white_and_black() {
        let white = Lab::from_rgb(rgba(255., 255., 255.));
        assert!((white.l - 100.).abs() < 1e-2, "{white:?}");
        assert!(white.a.abs() < 1e-2 && white.b.abs() < 1e-2);
        let black = Lab::from_rgb(rgba(0., 0., 0.));
        assert_eq!(black.l, 0.);
    }

    #[test]
    fn known_lab() {
        let lab = Lab::from_rgb(rgba(52., 152., 219.));
        assert!((lab.l - 60.157).abs() < 1e-3, "{lab:?}");
        assert!((lab.a + 6.096).abs() < 1e-3, "{lab:?}");
        assert!((lab.b + 42.230).abs() < 1e-3, "{lab:?}");
    }

    #[test]
    fn rgb_lab_rgb() {
        for c in [rgba(52., 152., 219.), rgba(255., 0., 0.),
                  rgba(12., 200., 7.), rgba(128., 128., 128.)] {
            let back = Lab::from_rgb(c).to_rgb();
            for (x, y) in [(c.r, back.r), (c.g, back.g), (c.b, back.b)] {
                assert!((x - y).abs() < 0.05, "{c:?} -> {back:?}");
            }
        }
    }

    #[test]
    fn gray_has_no_hue() {
        let lch = Lch::from_rgb(rgba(128., 128., 128.));
        assert_eq!(lch.h, None);
        let lch = Lch::from_rgb(rgba(255., 0., 0.));
        assert!(lch.h.is_some());
    }

    #[test]
    fn shift_is_clipped_on_conversion() {
        let white = Lab::from_rgb(rgba(255., 255., 255.)).shift(36.);
        assert!(white.l > 100.);
        let RGBA { r, g, b, .. } = white.to_rgb();
        assert_eq!((r, g, b), (255., 255., 255.));
        let black = Lab::from_rgb(rgba(0., 0., 0.)).shift(-36.);
        assert_eq!(black.l, -36.);
        let RGBA { r, g, b, .. } = black.to_rgb();
        assert_eq!((r, g, b), (0., 0., 0.));
        // Dark red goes all the way to black instead of stopping at L* = 0.
        let RGBA { r, g, b, .. } =
            Lab::from_rgb(rgba(51., 0., 0.)).shift(-36.).to_rgb();
        assert_eq!((r, g, b), (0., 0., 0.));
    }

    #[test]
    fn out_of_gamut_is_clipped() {
        let lab = Lab { l: 100., a: 80., b: -90., alpha: 255. };
        let RGBA { r, g, b, .. } = lab.to_rgb();
        for x in [r, g, b] {
            assert!((0. ..=255.).contains(&x));
        }
    }
}
