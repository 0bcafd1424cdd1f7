use crate::{
    animation::config::{
        AnimationConfig, DEFAULT_DOT_INTERVAL, DEFAULT_DOT_RADIUS, DEFAULT_DOT_SPEED,
    },
    foundation::core::{FillRule, Point, Rgba8Premul},
    foundation::error::{DotlineError, DotlineResult},
};

/// Stroke and fill used when drawing the shape.
///
/// Dots reuse the stroke color as their fill and are drawn without a border.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Appearance {
    /// Stroke color of the polyline and fill color of the dots.
    pub stroke: Rgba8Premul,
    /// Stroke width in distance units, >= 0.
    pub stroke_width: f64,
    /// Optional interior fill.
    pub fill: Option<Rgba8Premul>,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            stroke: Rgba8Premul::black(),
            stroke_width: 1.0,
            fill: None,
        }
    }
}

impl Appearance {
    /// Check that the stroke width is finite and non-negative.
    pub fn validate(&self) -> DotlineResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(DotlineError::validation(
                "stroke_width must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// JSON document describing an animated polyline.
///
/// Everything except `points` is optional. Colors are straight (not premultiplied)
/// RGBA8 and are premultiplied on load.
pub struct PolylineSpec {
    /// Vertices as `[x, y]` pairs, in path order.
    pub points: Vec<[f64; 2]>,
    /// Interior fill rule.
    #[serde(default)]
    pub fill_rule: FillRule,
    /// Whether dots are drawn.
    #[serde(default = "default_is_animated")]
    pub is_animated: bool,
    /// Distance between dots.
    #[serde(default = "default_dot_interval")]
    pub dot_interval: f64,
    /// Dot speed in units per second.
    #[serde(default = "default_dot_speed")]
    pub dot_speed: f64,
    /// Dot radius.
    #[serde(default = "default_dot_radius")]
    pub dot_radius: f64,
    /// Stroke color, straight RGBA8.
    #[serde(default = "default_stroke_rgba8")]
    pub stroke: [u8; 4],
    /// Stroke width.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    /// Optional fill color, straight RGBA8.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<[u8; 4]>,
}

fn default_is_animated() -> bool {
    true
}

fn default_dot_interval() -> f64 {
    DEFAULT_DOT_INTERVAL
}

fn default_dot_speed() -> f64 {
    DEFAULT_DOT_SPEED
}

fn default_dot_radius() -> f64 {
    DEFAULT_DOT_RADIUS
}

fn default_stroke_rgba8() -> [u8; 4] {
    [0, 0, 0, 255]
}

fn default_stroke_width() -> f64 {
    1.0
}

impl PolylineSpec {
    /// Parse a JSON document. Does not validate; see [`PolylineSpec::validate`].
    pub fn from_json(s: &str) -> DotlineResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Run the same checks the widget setters apply.
    pub fn validate(&self) -> DotlineResult<()> {
        self.vertices()?;
        self.animation()?;
        self.appearance()?;
        Ok(())
    }

    pub(crate) fn vertices(&self) -> DotlineResult<Vec<Point>> {
        let points: Vec<Point> = self.points.iter().map(|&[x, y]| Point::new(x, y)).collect();
        check_finite_points(&points)?;
        Ok(points)
    }

    pub(crate) fn animation(&self) -> DotlineResult<AnimationConfig> {
        AnimationConfig::new(
            self.is_animated,
            self.dot_interval,
            self.dot_speed,
            self.dot_radius,
        )
    }

    pub(crate) fn appearance(&self) -> DotlineResult<Appearance> {
        let [r, g, b, a] = self.stroke;
        let appearance = Appearance {
            stroke: Rgba8Premul::from_straight_rgba(r, g, b, a),
            stroke_width: self.stroke_width,
            fill: self
                .fill
                .map(|[r, g, b, a]| Rgba8Premul::from_straight_rgba(r, g, b, a)),
        };
        appearance.validate()?;
        Ok(appearance)
    }
}

pub(crate) fn check_finite_points(points: &[Point]) -> DotlineResult<()> {
    if let Some((idx, p)) = points
        .iter()
        .enumerate()
        .find(|(_, p)| !p.x.is_finite() || !p.y.is_finite())
    {
        return Err(DotlineError::validation(format!(
            "point {idx} ({}, {}) is not finite",
            p.x, p.y
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/widget/spec.rs"]
mod tests;
