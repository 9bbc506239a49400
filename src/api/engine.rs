use tracing::debug;

use crate::core::{ChartDataPoint, PlotLayout};
use crate::error::ChartResult;
use crate::interaction::HoverState;
use crate::render::Renderer;

use super::ChartConfig;

/// Production area chart: three smoothed series over a shared period axis,
/// with pointer-driven hover.
///
/// Geometry is recomputed from the current data on every query; the only
/// mutable state besides the data is the hover index.
pub struct ProductionChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartConfig,
    pub(super) data: Vec<ChartDataPoint>,
    pub(super) hover: HoverState,
}

impl<R: Renderer> ProductionChart<R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        debug!(
            width = config.layout.width(),
            height = config.layout.height(),
            "production chart initialized"
        );
        Ok(Self {
            renderer,
            config,
            data: Vec::new(),
            hover: HoverState::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn layout(&self) -> PlotLayout {
        self.config.layout
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame();
        debug!(
            lines = frame.lines.len(),
            paths = frame.paths.len(),
            guides = frame.guides.len(),
            circles = frame.circles.len(),
            texts = frame.texts.len(),
            "render production chart"
        );
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
