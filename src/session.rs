//! The interactive side: user input, the current palette, copying
//! colors and exporting the strips.
//!
//! A [`Session`] keeps the last valid palette.  Input that does not
//! describe a color (typically a hex code being typed) is recorded
//! but leaves the palette untouched; numbers are brought within their
//! bounds.

use std::time::{Duration, Instant};
use image::RgbImage;
use log::{debug, warn};
use rgb::RGB8;
use crate::config::{self, Settings};
use crate::render::{self, Export};
use crate::{css, Error, Palette};

/// Where copied colors go.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), Error>;
}

/// Keeps the last copied text.
impl Clipboard for String {
    fn set_text(&mut self, text: &str) -> Result<(), Error> {
        self.clear();
        self.push_str(text);
        Ok(())
    }
}

/// One color of the preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    /// "Color 1", "Color 2",…
    pub label: String,
    pub hex: String,
    pub color: RGB8,
}

#[derive(Debug, Clone)]
struct Copied {
    hex: String,
    at: Instant,
}

#[derive(Debug, Clone)]
pub struct Session {
    settings: Settings,
    palette: Palette,
    // Base color text the current palette was computed from.
    palette_base: Option<String>,
    copied: Option<Copied>,
}

impl Default for Session {
    fn default() -> Self { Session::new(Settings::default()) }
}

impl Session {
    /// Start a session.  If the base color of `settings` is invalid,
    /// the palette starts empty.
    pub fn new(settings: Settings) -> Self {
        let mut session = Session { settings: settings.clamped(),
                                    palette: Palette::default(),
                                    palette_base: None,
                                    copied: None };
        session.regenerate();
        session
    }

    pub fn settings(&self) -> &Settings { &self.settings }

    /// Base color as last typed, valid or not.
    pub fn base_color(&self) -> &str { &self.settings.base_color }

    /// The current palette, brightest first.
    pub fn palette(&self) -> &Palette { &self.palette }

    /// Set the base color from text.  The palette is recomputed only
    /// if the text is a valid color.
    pub fn set_base_color(&mut self, text: &str) {
        self.settings.base_color = text.to_string();
        self.regenerate();
    }

    /// Set the number of stops, clamped to
    /// [`STOP_COUNT`](config::STOP_COUNT).
    pub fn set_stop_count(&mut self, n: usize) {
        let n = config::clamp_stop_count(n);
        if n != self.settings.stop_count {
            self.settings.stop_count = n;
            self.regenerate();
        }
    }

    /// Set the strip width from text (see [`config::parse_strip_width`]).
    pub fn set_strip_width(&mut self, text: &str) {
        self.settings.strip_width = config::parse_strip_width(text);
    }

    fn regenerate(&mut self) {
        let base = &self.settings.base_color;
        match Palette::monochrome(base, self.settings.stop_count) {
            Ok(palette) => {
                debug!("palette of {} stops from {base}", palette.len());
                self.palette = palette;
                self.palette_base = Some(base.clone());
            }
            Err(e) => debug!("keeping the previous palette: {e}"),
        }
    }

    /// The palette as shown on screen: darkest first, labelled from 1.
    pub fn preview(&self) -> Vec<Swatch> {
        self.palette.iter().rev().enumerate()
            .map(|(i, &color)| Swatch { label: format!("Color {}", i + 1),
                                        hex: css::to_hex(color),
                                        color })
            .collect()
    }

    /// Copy `hex` to `clipboard` and acknowledge it from `now` on.
    pub fn copy(&mut self, hex: &str, clipboard: &mut impl Clipboard, now: Instant) {
        if let Err(e) = clipboard.set_text(hex) {
            warn!("unable to copy {hex}: {e}");
        }
        self.copied = Some(Copied { hex: hex.to_string(), at: now });
    }

    /// The color whose copy is still acknowledged at `now`, if any.
    pub fn copied(&self, now: Instant) -> Option<&str> {
        let feedback: Duration = self.settings.copy_feedback();
        self.copied.as_ref()
            .filter(|c| now.saturating_duration_since(c.at) < feedback)
            .map(|c| c.hex.as_str())
    }

    /// Draw the current palette as strips, `None` if it is empty.
    pub fn render(&self) -> Option<RgbImage> {
        render::render(self.palette.colors(), self.settings.strip_width,
                       self.settings.strip_height)
    }

    /// JPEG export of the current palette, `Ok(None)` if there is no
    /// palette yet.
    pub fn export(&self) -> Result<Option<Export>, Error> {
        let Some(base) = &self.palette_base else { return Ok(None) };
        render::export(base, self.palette.colors(), self.settings.strip_width,
                       self.settings.strip_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl Clipboard for Broken {
        fn set_text(&mut self, _: &str) -> Result<(), Error> {
            Err(Error::Clipboard("no clipboard".into()))
        }
    }

    #[test]
    fn default_session() {
        let s = Session::default();
        assert_eq!(s.palette().to_hex(), ["#aafbff", "#6dd5f2", "#3dade4",
                                          "#2b85c7", "#1762a0", "#004079"]);
        let img = s.render().unwrap();
        assert_eq!(img.dimensions(), (300, 300));
        assert_eq!(img.get_pixel(0, 0).0, [0xaa, 0xfb, 0xff]);
        assert_eq!(img.get_pixel(299, 299).0, [0x00, 0x40, 0x79]);
    }

    #[test]
    fn fewer_stops_replace_palette() {
        let mut s = Session::default();
        s.set_stop_count(3);
        assert_eq!(s.palette().to_hex(), ["#aafbff", "#3498db", "#004079"]);
        assert_eq!(s.preview().len(), 3);
        assert_eq!(s.render().unwrap().dimensions(), (150, 300));
    }

    #[test]
    fn stop_count_is_clamped() {
        let mut s = Session::default();
        s.set_stop_count(100);
        assert_eq!(s.palette().len(), 20);
        s.set_stop_count(0);
        assert_eq!(s.palette().len(), 3);
    }

    #[test]
    fn typing_keeps_last_good_palette() {
        let mut s = Session::default();
        let before = s.palette().clone();
        for text in ["", "#", "#f", "#ff"] {
            s.set_base_color(text);
            assert_eq!(s.palette(), &before, "{text:?}");
        }
        s.set_base_color("#ff0");
        let yellow = s.palette().clone();
        assert_ne!(yellow, before);
        s.set_base_color("#ff00zz");
        assert_eq!(s.base_color(), "#ff00zz");
        assert_eq!(s.palette(), &yellow);
        s.set_stop_count(10);
        // Still the last valid palette, with its old length.
        assert_eq!(s.palette().len(), 6);
        assert_eq!(s.export().unwrap().unwrap().file_name, "palette-#ff0.jpeg");
        s.set_base_color("#ff0000");
        assert_eq!(s.palette().len(), 10);
    }

    #[test]
    fn invalid_start() {
        let s = Session::new(Settings { base_color: "nope".into(),
                                        ..Settings::default() });
        assert!(s.palette().is_empty());
        assert!(s.preview().is_empty());
        assert!(s.render().is_none());
        assert!(s.export().unwrap().is_none());
    }

    #[test]
    fn strip_width() {
        let mut s = Session::default();
        s.set_strip_width("100");
        assert_eq!(s.render().unwrap().dimensions(), (600, 300));
        s.set_strip_width("");
        assert_eq!(s.settings().strip_width, 50);
        s.set_strip_width("1000");
        assert_eq!(s.settings().strip_width, 200);
    }

    #[test]
    fn preview_is_reversed() {
        let s = Session::default();
        let preview = s.preview();
        assert_eq!(preview[0].label, "Color 1");
        assert_eq!(preview[0].hex, "#004079");
        assert_eq!(preview[5].label, "Color 6");
        assert_eq!(preview[5].hex, "#aafbff");
    }

    #[test]
    fn copy_feedback_expires() {
        let mut s = Session::default();
        let mut clipboard = String::new();
        let t0 = Instant::now();
        s.copy("#3dade4", &mut clipboard, t0);
        assert_eq!(clipboard, "#3dade4");
        assert_eq!(s.copied(t0), Some("#3dade4"));
        assert_eq!(s.copied(t0 + Duration::from_millis(1999)), Some("#3dade4"));
        assert_eq!(s.copied(t0 + Duration::from_secs(2)), None);

        let t1 = t0 + Duration::from_secs(5);
        s.copy("#004079", &mut Broken, t1);
        assert_eq!(s.copied(t1), Some("#004079"));
    }

    #[test]
    fn export_jpeg() {
        let s = Session::default();
        let export = s.export().unwrap().unwrap();
        assert_eq!(export.file_name, "palette-#3498db.jpeg");
        let img = image::load_from_memory(&export.bytes).unwrap();
        assert_eq!((img.width(), img.height()), (300, 300));
    }
}
