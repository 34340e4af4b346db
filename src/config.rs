//! Palette settings: defaults, bounds and loading from TOML.

use std::ops::RangeInclusive;
use std::time::Duration;
use serde::Deserialize;
use crate::Error;

/// Allowed numbers of stops.
pub const STOP_COUNT: RangeInclusive<usize> = 3 ..= 20;
/// Allowed strip widths, in pixels.
pub const STRIP_WIDTH: RangeInclusive<u32> = 20 ..= 200;

pub const DEFAULT_BASE_COLOR: &str = "#3498db";
pub const DEFAULT_STOP_COUNT: usize = 6;
pub const DEFAULT_STRIP_WIDTH: u32 = 50;
pub const DEFAULT_STRIP_HEIGHT: u32 = 300;
pub const DEFAULT_COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// Everything that determines a palette and its strips.
///
/// Missing fields take their default value.
///
/// ```
/// use color_strips::config::Settings;
/// let s = Settings::from_toml("base_color = 'teal'\nstop_count = 40").unwrap();
/// assert_eq!(s.base_color, "teal");
/// assert_eq!(s.stop_count, 20);
/// assert_eq!(s.strip_width, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base color, as typed (see [`css::parse`](crate::css::parse)).
    pub base_color: String,
    pub stop_count: usize,
    /// Width of one strip in pixels.
    pub strip_width: u32,
    /// Height of the rendered image in pixels.
    pub strip_height: u32,
    /// How long a copied color stays acknowledged, in milliseconds.
    pub copy_feedback_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_color: DEFAULT_BASE_COLOR.to_string(),
            stop_count: DEFAULT_STOP_COUNT,
            strip_width: DEFAULT_STRIP_WIDTH,
            strip_height: DEFAULT_STRIP_HEIGHT,
            copy_feedback_ms: DEFAULT_COPY_FEEDBACK.as_millis() as u64,
        }
    }
}

impl Settings {
    /// Read settings from TOML text.  Out of range numbers are
    /// brought back within bounds.
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        let settings: Settings = toml::from_str(text)?;
        Ok(settings.clamped())
    }

    /// The same settings with every number within its bounds.
    pub fn clamped(self) -> Self {
        Self {
            stop_count: clamp_stop_count(self.stop_count),
            strip_width: clamp_strip_width(self.strip_width),
            strip_height: self.strip_height.max(1),
            ..self
        }
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}

pub fn clamp_stop_count(n: usize) -> usize {
    n.clamp(*STOP_COUNT.start(), *STOP_COUNT.end())
}

pub fn clamp_strip_width(w: u32) -> u32 {
    w.clamp(*STRIP_WIDTH.start(), *STRIP_WIDTH.end())
}

/// Strip width typed as text.  Anything that is not a positive
/// integer means the default width.
pub fn parse_strip_width(text: &str) -> u32 {
    match text.trim().parse::<u32>() {
        Ok(w) if w > 0 => clamp_strip_width(w),
        _ => DEFAULT_STRIP_WIDTH,
    }
}
