use std::str::FromStr;

use crate::foundation::error::{DotlineError, DotlineResult};

pub use kurbo::{BezPath, Line, Point, Rect};

/// Frame counter used by hosts that drive dots from a fixed frame rate.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Rational frame rate (`num / den` frames per second).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator, must be > 0.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a validated frame rate.
    pub fn new(num: u32, den: u32) -> DotlineResult<Self> {
        if den == 0 {
            return Err(DotlineError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(DotlineError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Wall-clock time at which `frame` is displayed.
    pub fn frame_to_secs(self, frame: FrameIndex) -> f64 {
        (frame.0 as f64) * f64::from(self.den) / f64::from(self.num)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Opaque black, the default stroke color.
    pub fn black() -> Self {
        Self::from_straight_rgba(0, 0, 0, 255)
    }

    /// Premultiply a straight-alpha color.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }
}

/// Interior-fill rule of the path geometry.
///
/// Only affects how a host fills closed or self-intersecting shapes. Dot motion does
/// not depend on it, but a change still rebuilds the cached geometry.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum FillRule {
    /// Even-odd (alternate) rule.
    #[default]
    EvenOdd,
    /// Non-zero winding rule.
    Nonzero,
}

impl TryFrom<u8> for FillRule {
    type Error = DotlineError;

    fn try_from(raw: u8) -> DotlineResult<Self> {
        match raw {
            0 => Ok(Self::EvenOdd),
            1 => Ok(Self::Nonzero),
            other => Err(DotlineError::validation(format!(
                "fill rule discriminant {other} is not EvenOdd (0) or Nonzero (1)"
            ))),
        }
    }
}

impl FromStr for FillRule {
    type Err = DotlineError;

    fn from_str(s: &str) -> DotlineResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "evenodd" | "even_odd" | "even-odd" => Ok(Self::EvenOdd),
            "nonzero" | "non_zero" | "non-zero" => Ok(Self::Nonzero),
            _ => Err(DotlineError::validation(format!(
                "unknown fill rule '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
