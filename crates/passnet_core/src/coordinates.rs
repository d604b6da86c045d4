//! Pitch coordinates and venue orientation
//!
//! Stored positions use the 120 x 80 pitch frame:
//! - X: 0 = home goal line, 120 = away goal line (LENGTH direction)
//! - Y: 0 = touchline, 80 = touchline (WIDTH direction)
//!
//! Both passing networks are drawn on the same pitch. The away side is
//! reflected through the centre spot so the two teams render facing each
//! other instead of overlapping.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pitch length along X.
pub const PITCH_LENGTH: f64 = 120.0;
/// Pitch width along Y.
pub const PITCH_WIDTH: f64 = 80.0;
/// X coordinate of the halfway line.
pub const HALFWAY_X: f64 = PITCH_LENGTH / 2.0;

/// Home/away designation of a team within a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
    Home,
    Away,
}

impl Venue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Venue::Home => "home",
            Venue::Away => "away",
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Venue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Venue::Home),
            "away" => Ok(Venue::Away),
            other => Err(format!("unknown venue '{other}', expected 'home' or 'away'")),
        }
    }
}

/// Resolution of stored coordinates: points are held on a 1/1024 grid.
///
/// Grid values and their reflections `120 - x`, `80 - y` are all exactly
/// representable as `f64`, so the away transform round-trips bit for bit.
pub const GRID_STEPS_PER_UNIT: f64 = 1024.0;

/// Round `v` to the nearest grid value.
#[inline]
pub fn snap_to_grid(v: f64) -> f64 {
    (v * GRID_STEPS_PER_UNIT).round() / GRID_STEPS_PER_UNIT
}

fn deserialize_snapped<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    f64::deserialize(deserializer).map(snap_to_grid)
}

/// A point in the 120 x 80 pitch frame.
///
/// `new` and deserialization snap both axes to the 1/1024 grid (under a
/// millimetre at real pitch scale).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PitchPoint {
    #[serde(deserialize_with = "deserialize_snapped")]
    pub x: f64,
    #[serde(deserialize_with = "deserialize_snapped")]
    pub y: f64,
}

impl PitchPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x: snap_to_grid(x), y: snap_to_grid(y) }
    }

    /// True when the point lies in the opponent half (x >= 60).
    #[inline]
    pub fn in_attacking_half(&self) -> bool {
        self.x >= HALFWAY_X
    }
}

/// Map a stored position into display coordinates for `venue`.
///
/// Home: identity. Away: `(120 - x, 80 - y)` on the grid. For every grid
/// point (anything built by `PitchPoint::new` or deserialized) applying the
/// away transform twice returns the original point exactly. A point built
/// from a struct literal off the grid comes back snapped.
#[inline]
pub fn to_display(point: PitchPoint, venue: Venue) -> PitchPoint {
    let point = PitchPoint::new(point.x, point.y);
    match venue {
        Venue::Home => point,
        Venue::Away => PitchPoint { x: PITCH_LENGTH - point.x, y: PITCH_WIDTH - point.y },
    }
}

/// Centre spot of the pitch.
#[inline]
pub fn centre_spot() -> PitchPoint {
    PitchPoint { x: HALFWAY_X, y: PITCH_WIDTH / 2.0 }
}

/// Check if a point lies outside the pitch rectangle
pub fn is_out_of_bounds(point: PitchPoint) -> bool {
    point.x < 0.0 || point.x > PITCH_LENGTH || point.y < 0.0 || point.y > PITCH_WIDTH
}
