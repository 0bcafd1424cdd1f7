use crate::{
    animation::dots::DotDescriptor,
    foundation::core::Rgba8Premul,
    foundation::error::DotlineResult,
    geometry::path::{PathGeometry, Polyline},
    widget::spec::Appearance,
};

/// Drawing surface provided by the host.
///
/// The host owns rasterization and the animation clock. `draw_dot` receives the
/// closed-form descriptor; the host samples it every frame (or maps its timelines onto
/// its own animation system).
pub trait ShapeRenderer {
    /// Stroke (and optionally fill) the polyline.
    fn draw_path(&mut self, path: &Polyline, appearance: &Appearance) -> DotlineResult<()>;

    /// Draw one animated dot with the given fill and no border.
    ///
    /// Report a dot the surface cannot animate as [`crate::DotlineError::Animation`].
    fn draw_dot(
        &mut self,
        path: &Polyline,
        dot: &DotDescriptor,
        fill: Rgba8Premul,
    ) -> DotlineResult<()>;
}

/// Draw the path, then every dot in schedule order. Empty geometry draws nothing.
pub fn render_polyline<R: ShapeRenderer + ?Sized>(
    renderer: &mut R,
    geometry: &PathGeometry,
    dots: &[DotDescriptor],
    appearance: &Appearance,
) -> DotlineResult<()> {
    let Some(path) = geometry.as_polyline() else {
        return Ok(());
    };

    renderer.draw_path(path, appearance)?;
    for dot in dots {
        renderer.draw_dot(path, dot, appearance.stroke)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
