use crate::{
    foundation::core::{FillRule, Line, Point, Rect},
    geometry::path::{PathGeometry, Polyline},
};

/// Counters exposed for instrumentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct CacheStats {
    /// Number of [`PathCache::rebuild`] calls.
    pub rebuilds: u64,
    /// Number of segment distance evaluations across all rebuilds.
    pub distance_evals: u64,
}

/// Geometry and arc length derived from the current point sequence.
///
/// Invalidation is eager: the owner calls [`PathCache::rebuild`] whenever the points or
/// the fill rule change, before anything reads the cache again.
#[derive(Clone, Debug, Default)]
pub struct PathCache {
    geometry: PathGeometry,
    length: f64,
    stats: CacheStats,
}

impl PathCache {
    /// Empty cache (no geometry, zero length).
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild geometry and arc length from `points` in one forward pass.
    #[tracing::instrument(skip(self, points), fields(n_points = points.len()))]
    pub fn rebuild(&mut self, points: &[Point], fill_rule: FillRule) -> (&PathGeometry, f64) {
        let (geometry, length) = build_geometry(points, fill_rule, &mut self.stats);
        self.stats.rebuilds += 1;
        tracing::debug!(length, empty = geometry.is_empty(), "path cache rebuilt");
        self.geometry = geometry;
        self.length = length;
        (&self.geometry, self.length)
    }

    /// Cached geometry.
    pub fn geometry(&self) -> &PathGeometry {
        &self.geometry
    }

    /// Cached arc length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Instrumentation counters.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

pub(crate) fn build_geometry(
    points: &[Point],
    fill_rule: FillRule,
    stats: &mut CacheStats,
) -> (PathGeometry, f64) {
    let [first, rest @ ..] = points else {
        return (PathGeometry::Empty, 0.0);
    };
    if rest.is_empty() {
        return (PathGeometry::Empty, 0.0);
    }

    let mut segments = Vec::with_capacity(rest.len());
    let mut cumulative = Vec::with_capacity(rest.len());
    let mut bounds = Rect::from_points(*first, *first);
    let mut length = 0.0;
    let mut prev = *first;

    for &p in rest {
        length += prev.distance(p);
        stats.distance_evals += 1;
        segments.push(Line::new(prev, p));
        cumulative.push(length);
        bounds = bounds.union_pt(p);
        prev = p;
    }

    if bounds.width() == 0.0 && bounds.height() == 0.0 {
        return (PathGeometry::Empty, length);
    }

    let polyline = Polyline {
        start: *first,
        segments,
        cumulative,
        fill_rule,
        bounds,
    };
    (PathGeometry::Polyline(polyline), length)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/cache.rs"]
mod tests;
