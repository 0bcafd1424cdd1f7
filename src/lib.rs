//! dotline draws a polyline with dots travelling along it.
//!
//! The crate is the geometry and timing half of an "animated polyline" shape. The
//! host UI or render pipeline keeps pixel drawing, layout and the frame clock.
//!
//! # Pipeline overview
//!
//! 1. **Cache**: `points + FillRule -> (PathGeometry, length)` via [`PathCache`],
//!    rebuilt eagerly whenever the points or fill rule change.
//! 2. **Schedule**: `(geometry, length, AnimationConfig) -> Vec<DotDescriptor>` via
//!    [`DotAnimator::schedule`]. One descriptor per dot, each with a periodic motion
//!    [`Timeline`] and a one-shot reveal timeline, staggered by `interval / speed`.
//! 3. **Render**: [`render_polyline`] hands the path and descriptors to a host
//!    [`ShapeRenderer`]. Hosts without an animation clock can evaluate dots
//!    themselves with [`DotAnimator::sample`].
//!
//! [`AnimatedPolyline`] ties the three steps together behind validated setters.
//!
//! The core derivations are pure and infallible; all validation happens when a value
//! is assigned, and a rejected value never replaces the previous one.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod geometry;
mod render;
mod widget;

pub use animation::config::{
    AnimationConfig, DEFAULT_DOT_INTERVAL, DEFAULT_DOT_RADIUS, DEFAULT_DOT_SPEED, MAX_DOTS,
};
pub use animation::dots::{DotAnimator, DotDescriptor, DotSample};
pub use animation::timeline::{RepeatBehavior, Timeline};
pub use foundation::core::{BezPath, FillRule, Fps, FrameIndex, Line, Point, Rect, Rgba8Premul};
pub use foundation::error::{DotlineError, DotlineResult};
pub use geometry::cache::{CacheStats, PathCache};
pub use geometry::path::{PathGeometry, Polyline};
pub use render::backend::{ShapeRenderer, render_polyline};
pub use render::record::{DrawCommand, RecordingRenderer};
pub use widget::polyline::AnimatedPolyline;
pub use widget::spec::{Appearance, PolylineSpec};
