use crate::core::{PathPoint, format_number, project_all_series, y_ticks};
use crate::render::{
    CirclePrimitive, Fill, LinePrimitive, PathPrimitive, RenderFrame, Renderer, Stroke,
    TextHAlign, TextPrimitive,
};

use super::ProductionChart;

impl<R: Renderer> ProductionChart<R> {
    /// Materializes the full scene for the current data and hover state.
    ///
    /// Never fails: empty or degenerate data produces a frame with only the
    /// zero grid line.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let layout = self.config.layout;
        let grid = self.config.grid;
        let scale = self.scale();
        let mut frame = RenderFrame::new(layout.viewport());

        let grid_stroke = Stroke::new(grid.line_color, grid.line_width);
        for tick in y_ticks(scale.max_value()) {
            let y = scale.y_for_value(tick);
            frame.lines.push(
                LinePrimitive::new(
                    layout.padding_left,
                    y,
                    layout.width() - layout.padding_right,
                    y,
                    grid_stroke,
                )
                .with_dash(&grid.dash),
            );
            frame.texts.push(TextPrimitive::new(
                format_number(tick),
                layout.padding_left - grid.y_label_gap_px,
                y + grid.y_label_drop_px,
                grid.label_font_size_px,
                grid.label_color,
                TextHAlign::Right,
            ));
        }

        let label_y = layout.height() - grid.x_label_bottom_offset_px;
        for (index, point) in self.data.iter().enumerate() {
            if point.period.is_empty() {
                continue;
            }
            frame.texts.push(TextPrimitive::new(
                point.period.clone(),
                scale.x_for_index(index),
                label_y,
                grid.label_font_size_px,
                grid.label_color,
                TextHAlign::Center,
            ));
        }

        let style = self.config.series_style;
        let geometries = project_all_series(&self.data, scale);
        for (descriptor, geometry) in self.config.series.iter().zip(geometries) {
            if geometry.line.is_empty() {
                continue;
            }
            frame.paths.push(PathPrimitive::filled(
                geometry.area,
                Fill::VerticalGradient {
                    color: descriptor.color,
                    top_opacity: style.fill_top_opacity,
                    bottom_opacity: style.fill_bottom_opacity,
                },
            ));
            frame.paths.push(PathPrimitive::stroked(
                geometry.line,
                Stroke::new(descriptor.color, style.line_width),
            ));
        }

        let hovered = self
            .hover
            .index()
            .and_then(|index| self.data.get(index).map(|point| (index, point)));
        if let Some((index, point)) = hovered {
            let hover = self.config.hover;
            let x = scale.x_for_index(index);
            frame.guides.push(
                LinePrimitive::new(
                    x,
                    layout.padding_top,
                    x,
                    layout.baseline_y(),
                    Stroke::new(hover.guide_color, hover.guide_width),
                )
                .with_dash(&hover.guide_dash)
                .with_opacity(hover.guide_opacity),
            );
            for descriptor in &self.config.series {
                frame.circles.push(CirclePrimitive {
                    center: PathPoint::new(x, scale.y_for_value(descriptor.key.value_of(point))),
                    radius: hover.marker_radius,
                    fill: hover.marker_fill,
                    stroke: Stroke::new(descriptor.color, hover.marker_stroke_width),
                });
            }
        }

        frame
    }
}
