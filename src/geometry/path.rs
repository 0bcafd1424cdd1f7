use crate::foundation::core::{BezPath, FillRule, Line, Point, Rect};

/// Cached path geometry for a point sequence.
///
/// `Empty` stands for "no shape" (fewer than two points, or all points coincide).
/// It is a regular value, not an error.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PathGeometry {
    /// No drawable shape.
    #[default]
    Empty,
    /// An open polyline through two or more points.
    Polyline(Polyline),
}

impl PathGeometry {
    /// True for the empty sentinel.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Borrow the polyline, if any.
    pub fn as_polyline(&self) -> Option<&Polyline> {
        match self {
            Self::Empty => None,
            Self::Polyline(p) => Some(p),
        }
    }

    /// Bounding box of the geometry, `None` for the empty sentinel.
    pub fn bounds(&self) -> Option<Rect> {
        self.as_polyline().map(Polyline::bounds)
    }
}

/// Open polyline with per-segment cumulative arc lengths.
///
/// Built once by [`crate::PathCache::rebuild`]; never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub(crate) start: Point,
    pub(crate) segments: Vec<Line>,
    pub(crate) cumulative: Vec<f64>, // arc length at the end of each segment
    pub(crate) fill_rule: FillRule,
    pub(crate) bounds: Rect,
}

impl Polyline {
    /// First vertex; every dot starts here.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Last vertex.
    pub fn end(&self) -> Point {
        self.segments.last().map_or(self.start, |s| s.p1)
    }

    /// Line segments between consecutive vertices, in path order.
    pub fn segments(&self) -> &[Line] {
        &self.segments
    }

    /// Fill rule the geometry was built with.
    pub fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }

    /// Axis-aligned bounding box of all vertices.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Polylines are always open.
    pub fn is_closed(&self) -> bool {
        false
    }

    /// Total arc length.
    pub fn length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Path as a `BezPath` (one move-to followed by line-tos).
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start);
        for seg in &self.segments {
            path.line_to(seg.p1);
        }
        path
    }

    /// Point at arc length `distance` from the start, clamped to the path.
    pub fn point_at_length(&self, distance: f64) -> Point {
        let total = self.length();
        if self.segments.is_empty() || !(total > 0.0) {
            return self.start;
        }
        let d = if distance.is_nan() {
            0.0
        } else {
            distance.clamp(0.0, total)
        };

        // First segment whose end lies at or past `d`.
        let idx = self
            .cumulative
            .partition_point(|&end| end < d)
            .min(self.segments.len() - 1);
        let seg = &self.segments[idx];
        let seg_start = if idx == 0 { 0.0 } else { self.cumulative[idx - 1] };
        let seg_len = self.cumulative[idx] - seg_start;
        if seg_len <= 0.0 {
            return seg.p1;
        }
        let t = ((d - seg_start) / seg_len).clamp(0.0, 1.0);
        seg.p0.lerp(seg.p1, t)
    }

    /// Point at normalized progress `t` in `[0, 1]` along the arc length.
    pub fn point_at_progress(&self, t: f64) -> Point {
        self.point_at_length(t * self.length())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path.rs"]
mod tests;
