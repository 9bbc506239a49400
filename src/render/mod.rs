mod frame;
mod null_renderer;
mod path_data;
mod primitives;
mod svg_renderer;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use path_data::svg_path_data;
pub use primitives::{
    CirclePrimitive, Color, DashPattern, Fill, LinePrimitive, PathPrimitive, Stroke, TextHAlign,
    TextPrimitive,
};
pub use svg_renderer::{DEFAULT_ID_PREFIX, SvgRenderer, render_svg_document};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from chart data and hover logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
