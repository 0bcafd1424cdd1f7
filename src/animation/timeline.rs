use std::time::Duration;

use crate::foundation::math::wrap_phase;

/// What a timeline does once its duration has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RepeatBehavior {
    /// Run once, then hold the final value.
    Once,
    /// Restart from the beginning indefinitely.
    Forever,
}

/// Closed-form clock descriptor: begin offset, duration and repeat behavior.
///
/// Hosts with their own animation clock can map these fields directly; everyone else
/// calls [`Timeline::progress`] with the elapsed time since the animation started.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Delay before the timeline becomes active, in seconds.
    pub begin_s: f64,
    /// Length of one iteration in seconds; 0 means "jump to the end".
    pub duration_s: f64,
    /// Behavior after one iteration.
    pub repeat: RepeatBehavior,
}

impl Timeline {
    /// Begin offset as a [`Duration`], saturating at [`Duration::MAX`].
    pub fn begin(&self) -> Duration {
        secs_to_duration(self.begin_s)
    }

    /// Iteration length as a [`Duration`], saturating at [`Duration::MAX`].
    pub fn duration(&self) -> Duration {
        secs_to_duration(self.duration_s)
    }

    /// Normalized progress in `[0, 1]` at `elapsed_s`, or `None` while not yet active.
    pub fn progress(&self, elapsed_s: f64) -> Option<f64> {
        let local = elapsed_s - self.begin_s;
        if !(local >= 0.0) {
            return None;
        }
        if !(self.duration_s > 0.0) {
            return Some(1.0);
        }
        match self.repeat {
            RepeatBehavior::Once => Some((local / self.duration_s).min(1.0)),
            RepeatBehavior::Forever => Some(wrap_phase(local, self.duration_s) / self.duration_s),
        }
    }
}

fn secs_to_duration(secs: f64) -> Duration {
    // f64::max drops NaN, so only overflow is left to fail.
    Duration::try_from_secs_f64(secs.max(0.0)).unwrap_or(Duration::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
