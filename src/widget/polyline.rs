use crate::{
    animation::{
        config::AnimationConfig,
        dots::{DotAnimator, DotDescriptor, DotSample},
    },
    foundation::core::{FillRule, Fps, FrameIndex, Point, Rect},
    foundation::error::DotlineResult,
    geometry::{
        cache::{CacheStats, PathCache},
        path::PathGeometry,
    },
    render::backend::{ShapeRenderer, render_polyline},
    widget::spec::{Appearance, PolylineSpec, check_finite_points},
};

/// A polyline shape with dots travelling along it.
///
/// Setters validate before committing; a rejected value returns an error and leaves the
/// previous one in place. Changing the points or the fill rule rebuilds the cached
/// geometry immediately, so every read after a setter sees up-to-date geometry.
#[derive(Clone, Debug)]
pub struct AnimatedPolyline {
    points: Vec<Point>,
    fill_rule: FillRule,
    config: AnimationConfig,
    appearance: Appearance,
    cache: PathCache,
}

impl Default for AnimatedPolyline {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimatedPolyline {
    /// No points, even-odd fill, default animation and appearance.
    pub fn new() -> Self {
        let mut out = Self {
            points: Vec::new(),
            fill_rule: FillRule::default(),
            config: AnimationConfig::default(),
            appearance: Appearance::default(),
            cache: PathCache::new(),
        };
        out.rebuild();
        out
    }

    /// Build from a validated [`PolylineSpec`].
    pub fn from_spec(spec: &PolylineSpec) -> DotlineResult<Self> {
        let points = spec.vertices()?;
        let config = spec.animation()?;
        let appearance = spec.appearance()?;

        let mut out = Self {
            points,
            fill_rule: spec.fill_rule,
            config,
            appearance,
            cache: PathCache::new(),
        };
        out.rebuild();
        Ok(out)
    }

    /// Parse, validate and build from a JSON document.
    pub fn from_json(s: &str) -> DotlineResult<Self> {
        Self::from_spec(&PolylineSpec::from_json(s)?)
    }

    /// Current vertices.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Replace the vertices; rejects non-finite coordinates.
    pub fn set_points(&mut self, points: impl Into<Vec<Point>>) -> DotlineResult<()> {
        let points = points.into();
        if let Err(err) = check_finite_points(&points) {
            tracing::warn!(%err, "rejected points assignment");
            return Err(err);
        }
        self.points = points;
        self.rebuild();
        Ok(())
    }

    /// Current fill rule.
    pub fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }

    /// Set the fill rule and rebuild the geometry.
    pub fn set_fill_rule(&mut self, fill_rule: FillRule) {
        self.fill_rule = fill_rule;
        self.rebuild();
    }

    /// Set the fill rule from a raw discriminant (0 = EvenOdd, 1 = Nonzero).
    pub fn set_fill_rule_raw(&mut self, raw: u8) -> DotlineResult<()> {
        let rule = FillRule::try_from(raw).inspect_err(|err| {
            tracing::warn!(%err, "rejected fill rule assignment");
        })?;
        self.set_fill_rule(rule);
        Ok(())
    }

    /// Set the fill rule from its name (`"EvenOdd"`, `"nonzero"`, ...).
    pub fn set_fill_rule_name(&mut self, name: &str) -> DotlineResult<()> {
        let rule = name.parse::<FillRule>().inspect_err(|err| {
            tracing::warn!(%err, "rejected fill rule assignment");
        })?;
        self.set_fill_rule(rule);
        Ok(())
    }

    /// Current animation parameters.
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Turn dots on or off.
    pub fn set_animated(&mut self, is_animated: bool) {
        self.config.set_animated(is_animated);
    }

    /// See [`AnimationConfig::set_dot_interval`].
    pub fn set_dot_interval(&mut self, v: f64) -> DotlineResult<()> {
        self.config.set_dot_interval(v)
    }

    /// See [`AnimationConfig::set_dot_speed`].
    pub fn set_dot_speed(&mut self, v: f64) -> DotlineResult<()> {
        self.config.set_dot_speed(v)
    }

    /// See [`AnimationConfig::set_dot_radius`].
    pub fn set_dot_radius(&mut self, v: f64) -> DotlineResult<()> {
        self.config.set_dot_radius(v)
    }

    /// Current appearance.
    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// Replace the appearance; rejects a negative or non-finite stroke width.
    pub fn set_appearance(&mut self, appearance: Appearance) -> DotlineResult<()> {
        appearance.validate().inspect_err(|err| {
            tracing::warn!(%err, "rejected appearance assignment");
        })?;
        self.appearance = appearance;
        Ok(())
    }

    /// Cached path geometry.
    pub fn geometry(&self) -> &PathGeometry {
        self.cache.geometry()
    }

    /// Cached arc length.
    pub fn length(&self) -> f64 {
        self.cache.length()
    }

    /// Cache instrumentation counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Layout bounds: geometry bounds grown by half the stroke width.
    ///
    /// `None` when there is nothing to draw.
    pub fn bounds(&self) -> Option<Rect> {
        let half = self.appearance.stroke_width / 2.0;
        self.geometry().bounds().map(|b| b.inflate(half, half))
    }

    /// Dot schedule for the current render pass.
    pub fn schedule(&self) -> Vec<DotDescriptor> {
        DotAnimator::schedule(self.cache.geometry(), self.cache.length(), &self.config)
    }

    /// Draw the path and the scheduled dots.
    pub fn render<R: ShapeRenderer + ?Sized>(&self, renderer: &mut R) -> DotlineResult<()> {
        let dots = self.schedule();
        render_polyline(renderer, self.geometry(), &dots, &self.appearance)
    }

    /// Dot states at `elapsed_s` seconds after the animation started.
    pub fn sample_dots(&self, elapsed_s: f64) -> Vec<DotSample> {
        DotAnimator::sample(self.geometry(), &self.schedule(), elapsed_s)
    }

    /// Dot states at `frame` for a host running at `fps`.
    pub fn sample_dots_at_frame(&self, frame: FrameIndex, fps: Fps) -> Vec<DotSample> {
        self.sample_dots(fps.frame_to_secs(frame))
    }

    fn rebuild(&mut self) {
        self.cache.rebuild(&self.points, self.fill_rule);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/polyline.rs"]
mod tests;
