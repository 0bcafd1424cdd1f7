use crate::{
    animation::{dots::DotDescriptor, timeline::Timeline},
    foundation::core::{FillRule, Point, Rgba8Premul},
    foundation::error::DotlineResult,
    geometry::path::Polyline,
    render::backend::ShapeRenderer,
    widget::spec::Appearance,
};

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op")]
pub enum DrawCommand {
    /// Stroked/filled polyline.
    Path {
        /// SVG path data of the open polyline.
        svg: String,
        /// Fill rule for the interior.
        fill_rule: FillRule,
        /// Stroke color.
        stroke: Rgba8Premul,
        /// Stroke width.
        stroke_width: f64,
        /// Optional interior fill.
        fill: Option<Rgba8Premul>,
    },
    /// Animated dot overlay.
    Dot {
        /// Schedule index.
        index: usize,
        /// Center before the motion timeline starts.
        origin: Point,
        /// Center timeline.
        motion: Timeline,
        /// Radius step timeline.
        reveal: Timeline,
        /// Radius once revealed.
        radius: f64,
        /// Dot fill (the stroke color).
        fill: Rgba8Premul,
    },
}

/// [`ShapeRenderer`] that records commands instead of drawing them.
///
/// Useful as a retained display list, and for inspecting what a render pass emitted.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    /// Commands in emission order.
    pub commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded dot commands.
    pub fn dot_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Dot { .. }))
            .count()
    }

    /// Drop all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl ShapeRenderer for RecordingRenderer {
    fn draw_path(&mut self, path: &Polyline, appearance: &Appearance) -> DotlineResult<()> {
        self.commands.push(DrawCommand::Path {
            svg: path.to_bez_path().to_svg(),
            fill_rule: path.fill_rule(),
            stroke: appearance.stroke,
            stroke_width: appearance.stroke_width,
            fill: appearance.fill,
        });
        Ok(())
    }

    fn draw_dot(
        &mut self,
        _path: &Polyline,
        dot: &DotDescriptor,
        fill: Rgba8Premul,
    ) -> DotlineResult<()> {
        self.commands.push(DrawCommand::Dot {
            index: dot.index,
            origin: dot.origin,
            motion: dot.motion,
            reveal: dot.reveal,
            radius: dot.radius,
            fill,
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/record.rs"]
mod tests;
