//! Monochromatic palettes and color strips.
//!
//! A base color is lightened and darkened in CIE L\*C\*h° space; the
//! three colors anchor a [`Scale`] that is sampled into a [`Palette`]
//! of evenly spaced stops, from bright to dark.  A palette can be
//! drawn as vertical strips with [`render::render`] and exported as
//! JPEG.
//!
//! - [`RGBColor`], [`ColorRange`]
//! - [`Gradient`], [`Scale`]
//! - [`session::Session`] for the interactive side.

use std::f64::consts::PI;
use std::marker::PhantomData;
use rgb::{RGBA, RGB8, RGBA8};

pub mod config;
pub mod css;
mod error;
pub mod lch;
mod palette;
pub mod render;
pub mod session;

pub use error::{Error, ParseError};
use lch::{Lab, Lch, LAB_STEP};
pub use palette::{Palette, STEPS};

const TWO_PI: f64 = 2. * PI;

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding `n` colors sampled at evenly
    /// spaced positions from `0.` to `1.`, both included.  A single
    /// sample is taken at `0.`.
    fn samples(self, n: usize) -> Samples<Self, Color>
    where Self: Sized {
        if n == 0 {
            Samples { range: self, color: PhantomData,
                      flast: 0., last: 0, i: 1, j: 0 } // Empty iterator
        } else {
            Samples { range: self, color: PhantomData,
                      flast: (n - 1) as f64, last: n - 1, i: 0, j: n - 1 }
        }
    }
}

/// An iterator over evenly spaced colors of a [`ColorRange`].
///
/// Created by [`ColorRange::samples`].
pub struct Samples<R, Color> {
    range: R,
    color: PhantomData<Color>,
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R, Color> Samples<R, Color> where R: ColorRange<Color> {
    /// Color at position `k` (assuming `k ∈ 0 ..= self.last`).  The
    /// end points are evaluated at exactly `0.` and `1.`.
    fn rgb(&self, k: usize) -> Color {
        if k == 0 { self.range.rgb(0.) }
        else if k == self.last { self.range.rgb(1.) }
        else { self.range.rgb(k as f64 / self.flast) }
    }
}

impl<R, Color> Iterator for Samples<R, Color>
where R: ColorRange<Color> {
    type Item = Color;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Samples<R, Color>
where R: ColorRange<Color> {
    fn len(&self) -> usize {
        if self.i <= self.j { self.j - self.i + 1 } else { 0 }
    }
}

impl<R, Color> DoubleEndedIterator for Samples<R, Color>
where R: ColorRange<Color> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// The color in CIE L\*C\*h° coordinates.
    #[inline]
    fn lch(&self) -> Lch { Lch::from_rgb(self.to_rgba()) }

    /// Perceptual lightness in \[0, 100\].
    #[inline]
    fn lightness(&self) -> f64 { Lab::from_rgb(self.to_rgba()).l }

    /// Lighten the color by `amount` units, one unit being a step of
    /// [`LAB_STEP`](lch::LAB_STEP) in L\*.  Channels falling outside
    /// the sRGB gamut are clipped, so white stays white and black stays
    /// black; a negative amount darkens.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use color_strips::RGBColor;
    /// let white = RGB8::new(255, 255, 255);
    /// assert_eq!(white.lighten(2.), white);
    /// ```
    fn lighten(&self, amount: f64) -> Self {
        let lab = Lab::from_rgb(self.to_rgba()).shift(LAB_STEP * amount);
        Self::from_rgba(lab.to_rgb())
    }

    /// Darken the color by `amount` units.  See [`RGBColor::lighten`].
    #[inline]
    fn darken(&self, amount: f64) -> Self { self.lighten(-amount) }

    /// Return a gradient from color `c0` to color `c1`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use color_strips::{RGBColor, ColorRange};
    /// let red = RGB8::new(255,0, 0);
    /// let blue = RGB8::new(0, 0, 255);
    /// let grad = red.gradient(&blue);
    /// assert_eq!(grad.rgb(0.), red);
    /// assert_eq!(grad.rgb(1.), blue);
    /// ```
    fn gradient(&self, c1: &Self) -> Gradient<Self> {
        let lch0 = self.lch();
        let lch1 = c1.lch();
        let mut dc = lch1.c - lch0.c;
        // An achromatic end takes the hue of the other one.  If it is
        // also black (or L* = 1), the chroma does not fade either.
        let hue = match (lch0.h, lch1.h) {
            (Some(h0), Some(h1)) => {
                let dh = {
                    if h1 > h0 && h1 - h0 > PI { h1 - (h0 + TWO_PI) }
                    else if h1 < h0 && h0 - h1 > PI { h1 + TWO_PI - h0 }
                    else { h1 - h0 } };
                Some((h0, dh))
            }
            (Some(h), None) | (None, Some(h)) => {
                let gray = if lch0.h.is_none() { lch0.l } else { lch1.l };
                if gray == 0. || gray == 1. { dc = 0. }
                Some((h, 0.))
            }
            (None, None) => None,
        };
        let c0 = if lch0.h.is_none() && dc == 0. { Lch { c: lch1.c, ..lch0 } }
                 else { lch0 };
        Gradient { c0,
                   dl: lch1.l - lch0.l,
                   dc,
                   start: self.to_rgba(),
                   end: c1.to_rgba(),
                   dalpha: lch1.alpha - lch0.alpha,
                   hue,
                   color: PhantomData }
    }

    /// `#rrggbb` representation of the color (alpha is dropped).
    #[inline]
    fn to_hex(&self) -> String { css::to_hex(RGB8::from_rgba(self.to_rgba())) }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

// `as u8` saturates, so only rounding is needed.
impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: c.r.round() as u8,  g: c.g.round() as u8,  b: c.b.round() as u8 }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: c.r.round() as u8,  g: c.g.round() as u8,
                b: c.b.round() as u8, a: c.a.round() as u8 }
    }
}


/// Gradient between two colors, linear in L\*C\*h° with the hue
/// going the short way around.
///
/// Created by [`RGBColor::gradient`].  See the [`ColorRange`] trait
/// for methods.
pub struct Gradient<Color> {
    c0: Lch, // first color
    start: RGBA<f64>, // end points, returned as given
    end: RGBA<f64>,
    dl: f64,
    dc: f64,
    dalpha: f64,
    hue: Option<(f64, f64)>, // start and signed sweep
    color: PhantomData<Color>,
}

impl<Color> Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\] but does
    /// not check the later condition.
    #[inline]
    fn rgb_unsafe(&self, t: f64) -> Color {
        let lch = Lch { l: self.c0.l + t * self.dl,
                        c: self.c0.c + t * self.dc,
                        h: self.hue.map(|(h0, dh)| h0 + t * dh),
                        alpha: self.c0.alpha + t * self.dalpha };
        Color::from_rgba(lch.to_rgb())
    }
}

impl<Color> ColorRange<Color> for Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\], where
    /// `t == 0.` returns the first color provided in the gradient and
    /// `t == 1.` the second.
    fn rgb(&self, t: f64) -> Color {
        if t <= 0. { Color::from_rgba(self.start) }
        else if t >= 1. { Color::from_rgba(self.end) }
        else { self.rgb_unsafe(t) }
    }
}


/// Piecewise gradient through a sequence of anchor colors placed at
/// evenly spaced positions in \[0, 1\].
pub struct Scale<Color> {
    gradients: Vec<Gradient<Color>>,
}

impl<Color> Scale<Color>
where Color: RGBColor {
    /// Build the scale going through `anchors` in order.  Return
    /// `None` if there are no anchors; a single anchor gives a
    /// constant scale.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use color_strips::{ColorRange, Scale};
    /// let anchors = [RGB8::new(255, 255, 255), RGB8::new(128, 128, 128),
    ///                RGB8::new(0, 0, 0)];
    /// let scale = Scale::new(&anchors).unwrap();
    /// assert_eq!(scale.rgb(0.5), anchors[1]);
    /// ```
    pub fn new(anchors: &[Color]) -> Option<Self> {
        let gradients = match anchors {
            [] => return None,
            [c] => vec![c.gradient(c)],
            _ => anchors.windows(2).map(|c| c[0].gradient(&c[1])).collect(),
        };
        Some(Scale { gradients })
    }
}

impl<Color> ColorRange<Color> for Scale<Color>
where Color: RGBColor {
    fn rgb(&self, t: f64) -> Color {
        let n = self.gradients.len();
        if t <= 0. { return self.gradients[0].rgb(0.) }
        if t >= 1. { return self.gradients[n-1].rgb(1.) }
        let tn = t * n as f64;
        let i = tn.trunc() as usize;
        if i < n { self.gradients[i].rgb_unsafe(tn.fract()) }
        else { self.gradients[n-1].rgb_unsafe(1.) }
    }
}
