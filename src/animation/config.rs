use crate::foundation::{
    error::{DotlineError, DotlineResult},
    math::is_positive_finite,
};

/// Default distance between consecutive dots.
pub const DEFAULT_DOT_INTERVAL: f64 = 150.0;
/// Default dot speed in distance units per second (0.15 units per millisecond).
pub const DEFAULT_DOT_SPEED: f64 = DEFAULT_DOT_INTERVAL;
/// Default dot radius.
pub const DEFAULT_DOT_RADIUS: f64 = 5.0;
/// Upper bound on the number of dots in one schedule.
///
/// A path longer than `MAX_DOTS * dot_interval` gets exactly `MAX_DOTS` dots; the
/// stagger between them is unchanged.
pub const MAX_DOTS: usize = 10_000;

/// Dot animation parameters.
///
/// Fields are private so every mutation goes through a validating setter. A rejected
/// assignment leaves the previous value in place.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AnimationConfig {
    is_animated: bool,
    dot_interval: f64,
    dot_speed: f64,
    dot_radius: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            is_animated: true,
            dot_interval: DEFAULT_DOT_INTERVAL,
            dot_speed: DEFAULT_DOT_SPEED,
            dot_radius: DEFAULT_DOT_RADIUS,
        }
    }
}

impl AnimationConfig {
    /// Build a config, validating every numeric field.
    pub fn new(
        is_animated: bool,
        dot_interval: f64,
        dot_speed: f64,
        dot_radius: f64,
    ) -> DotlineResult<Self> {
        let mut config = Self {
            is_animated,
            ..Self::default()
        };
        config.set_dot_interval(dot_interval)?;
        config.set_dot_speed(dot_speed)?;
        config.set_dot_radius(dot_radius)?;
        Ok(config)
    }

    /// Whether dots are drawn at all.
    pub fn is_animated(&self) -> bool {
        self.is_animated
    }

    /// Distance between consecutive dots.
    pub fn dot_interval(&self) -> f64 {
        self.dot_interval
    }

    /// Dot speed in distance units per second.
    pub fn dot_speed(&self) -> f64 {
        self.dot_speed
    }

    /// Dot radius once revealed.
    pub fn dot_radius(&self) -> f64 {
        self.dot_radius
    }

    /// Time between the starts of two consecutive dots, in seconds.
    pub fn stagger_s(&self) -> f64 {
        self.dot_interval / self.dot_speed
    }

    /// Turn dot animation on or off; off makes the next schedule empty.
    pub fn set_animated(&mut self, is_animated: bool) {
        self.is_animated = is_animated;
    }

    /// Set the dot spacing; must be finite and > 0.
    pub fn set_dot_interval(&mut self, v: f64) -> DotlineResult<()> {
        self.dot_interval = checked_positive("dot_interval", v)?;
        Ok(())
    }

    /// Set the dot speed; must be finite and > 0.
    pub fn set_dot_speed(&mut self, v: f64) -> DotlineResult<()> {
        self.dot_speed = checked_positive("dot_speed", v)?;
        Ok(())
    }

    /// Set the dot radius; must be finite and > 0.
    pub fn set_dot_radius(&mut self, v: f64) -> DotlineResult<()> {
        self.dot_radius = checked_positive("dot_radius", v)?;
        Ok(())
    }
}

fn checked_positive(field: &str, v: f64) -> DotlineResult<f64> {
    if !is_positive_finite(v) {
        tracing::warn!(field, value = v, "rejected non-positive assignment");
        return Err(DotlineError::validation(format!(
            "{field} must be finite and > 0 (got {v})"
        )));
    }
    Ok(v)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/config.rs"]
mod tests;
