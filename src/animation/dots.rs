use std::time::Duration;

use crate::{
    animation::{
        config::{AnimationConfig, MAX_DOTS},
        timeline::{RepeatBehavior, Timeline},
    },
    foundation::{core::Point, math::whole_steps},
    geometry::path::{PathGeometry, Polyline},
};

/// Animation parameters for one dot.
///
/// `motion` drives the center along the path (start to end, constant speed, repeating
/// forever). `reveal` is a zero-length step that switches the radius from 0 to
/// `radius` when the dot starts moving. Both begin at the dot's stagger delay.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DotDescriptor {
    /// Position in the schedule, 0-based.
    pub index: usize,
    /// Center timeline along the path.
    pub motion: Timeline,
    /// Radius step timeline.
    pub reveal: Timeline,
    /// Center while `motion` is not yet active (the path start).
    pub origin: Point,
    /// Radius once revealed.
    pub radius: f64,
}

impl DotDescriptor {
    /// Stagger delay in seconds.
    pub fn start_delay_s(&self) -> f64 {
        self.motion.begin_s
    }

    /// One full traversal of the path, in seconds.
    pub fn cycle_s(&self) -> f64 {
        self.motion.duration_s
    }

    /// Stagger delay as a [`Duration`].
    pub fn start_delay(&self) -> Duration {
        self.motion.begin()
    }

    /// Traversal time as a [`Duration`].
    pub fn cycle_duration(&self) -> Duration {
        self.motion.duration()
    }

    /// Radius at `elapsed_s`; 0 until the dot starts moving.
    pub fn radius_at(&self, elapsed_s: f64) -> f64 {
        match self.reveal.progress(elapsed_s) {
            Some(t) => self.radius * t,
            None => 0.0,
        }
    }

    /// Center at `elapsed_s` on `path`.
    pub fn center_at(&self, path: &Polyline, elapsed_s: f64) -> Point {
        match self.motion.progress(elapsed_s) {
            Some(t) => path.point_at_progress(t),
            None => self.origin,
        }
    }

    /// Evaluated dot state at `elapsed_s`.
    pub fn sample(&self, path: &Polyline, elapsed_s: f64) -> DotSample {
        DotSample {
            index: self.index,
            center: self.center_at(path, elapsed_s),
            radius: self.radius_at(elapsed_s),
        }
    }
}

/// A dot evaluated at one clock instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DotSample {
    /// Index of the originating [`DotDescriptor`].
    pub index: usize,
    /// Dot center.
    pub center: Point,
    /// Dot radius; 0 means "not visible".
    pub radius: f64,
}

/// Stateless derivation of dot schedules from cached path data.
pub struct DotAnimator;

impl DotAnimator {
    /// Number of dots that fit on a path of `length` at spacing `interval`, at most
    /// [`MAX_DOTS`].
    ///
    /// An infinite `length` (coordinates so large the sum overflows) yields 0.
    pub fn dot_count(length: f64, interval: f64) -> usize {
        whole_steps(length, interval, MAX_DOTS)
    }

    /// Build one descriptor per dot, ordered by increasing start delay.
    ///
    /// Returns an empty list when animation is off, the geometry is empty, or the
    /// path is shorter than one dot interval.
    #[tracing::instrument(skip(geometry, config), fields(animated = config.is_animated()))]
    pub fn schedule(
        geometry: &PathGeometry,
        length: f64,
        config: &AnimationConfig,
    ) -> Vec<DotDescriptor> {
        if !config.is_animated() {
            return Vec::new();
        }
        let Some(path) = geometry.as_polyline() else {
            return Vec::new();
        };

        let count = Self::dot_count(length, config.dot_interval());
        if count == 0 {
            return Vec::new();
        }
        if count == MAX_DOTS {
            tracing::warn!(
                length,
                interval = config.dot_interval(),
                "dot count clamped to {MAX_DOTS}"
            );
        }

        let cycle_s = length / config.dot_speed();
        let stagger_s = config.stagger_s();
        let origin = path.start();

        let dots: Vec<DotDescriptor> = (0..count)
            .map(|index| {
                // An infinite stagger (vanishing speed) must not turn dot 0 into NaN.
                let begin_s = if index == 0 {
                    0.0
                } else {
                    index as f64 * stagger_s
                };
                DotDescriptor {
                    index,
                    motion: Timeline {
                        begin_s,
                        duration_s: cycle_s,
                        repeat: RepeatBehavior::Forever,
                    },
                    reveal: Timeline {
                        begin_s,
                        duration_s: 0.0,
                        repeat: RepeatBehavior::Once,
                    },
                    origin,
                    radius: config.dot_radius(),
                }
            })
            .collect();
        tracing::debug!(dots = dots.len(), cycle_s, stagger_s, "dot schedule built");
        dots
    }

    /// Evaluate every dot of `dots` at `elapsed_s`.
    pub fn sample(
        geometry: &PathGeometry,
        dots: &[DotDescriptor],
        elapsed_s: f64,
    ) -> Vec<DotSample> {
        let Some(path) = geometry.as_polyline() else {
            return Vec::new();
        };
        dots.iter().map(|d| d.sample(path, elapsed_s)).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/dots.rs"]
mod tests;
