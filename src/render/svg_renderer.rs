use std::fmt::Write as _;

use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, Color, Fill, LinePrimitive, PathPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive, svg_path_data,
};

/// Gradient id prefix used by `SvgRenderer::new`.
pub const DEFAULT_ID_PREFIX: &str = "chart";

/// Serializes each frame into a standalone SVG document.
///
/// The last document is kept in `last_document`. Gradient fills get one
/// `linearGradient` definition each, referenced by `{id_prefix}-fill-{index}`.
/// Give each renderer its own prefix when several documents are inlined into
/// one HTML page.
#[derive(Debug)]
pub struct SvgRenderer {
    id_prefix: String,
    last_document: String,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::with_id_prefix(DEFAULT_ID_PREFIX)
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Characters outside `[A-Za-z0-9_-]` are replaced with `-`; an empty
    /// prefix falls back to the default.
    #[must_use]
    pub fn with_id_prefix(prefix: impl AsRef<str>) -> Self {
        let sanitized: String = prefix
            .as_ref()
            .chars()
            .map(|ch| {
                if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                    ch
                } else {
                    '-'
                }
            })
            .collect();
        Self {
            id_prefix: if sanitized.is_empty() {
                DEFAULT_ID_PREFIX.to_owned()
            } else {
                sanitized
            },
            last_document: String::new(),
        }
    }

    #[must_use]
    pub fn id_prefix(&self) -> &str {
        &self.id_prefix
    }

    #[must_use]
    pub fn last_document(&self) -> &str {
        &self.last_document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.last_document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_document = render_svg_document(frame, &self.id_prefix);
        Ok(())
    }
}

/// Renders `frame` into SVG markup without validating it. `id_prefix` is
/// written verbatim into gradient ids.
#[must_use]
pub fn render_svg_document(frame: &RenderFrame, id_prefix: &str) -> String {
    let width = frame.viewport.width;
    let height = frame.viewport.height;
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 {width} {height}' role='img'>"
    );

    let gradients: Vec<(usize, Color, f64, f64)> = frame
        .paths
        .iter()
        .enumerate()
        .filter_map(|(index, path)| match path.fill {
            Some(Fill::VerticalGradient {
                color,
                top_opacity,
                bottom_opacity,
            }) => Some((index, color, top_opacity, bottom_opacity)),
            _ => None,
        })
        .collect();
    if !gradients.is_empty() {
        let _ = writeln!(svg, "  <defs>");
        for (index, color, top, bottom) in gradients {
            let hex = color.to_hex();
            let _ = writeln!(
                svg,
                "    <linearGradient id='{id_prefix}-fill-{index}' x1='0' x2='0' y1='0' y2='1'>"
            );
            let _ = writeln!(
                svg,
                "      <stop offset='0%' stop-color='{hex}' stop-opacity='{top}'/>"
            );
            let _ = writeln!(
                svg,
                "      <stop offset='100%' stop-color='{hex}' stop-opacity='{bottom}'/>"
            );
            let _ = writeln!(svg, "    </linearGradient>");
        }
        let _ = writeln!(svg, "  </defs>");
    }

    for line in &frame.lines {
        write_line(&mut svg, line);
    }
    for (index, path) in frame.paths.iter().enumerate() {
        write_path(&mut svg, id_prefix, index, path);
    }
    for guide in &frame.guides {
        write_line(&mut svg, guide);
    }
    for circle in &frame.circles {
        write_circle(&mut svg, circle);
    }
    for text in &frame.texts {
        write_text(&mut svg, text);
    }

    let _ = writeln!(svg, "</svg>");
    svg
}

fn write_line(svg: &mut String, line: &LinePrimitive) {
    let _ = write!(
        svg,
        "  <line x1='{}' y1='{}' x2='{}' y2='{}' stroke='{}' stroke-width='{}'",
        line.x1,
        line.y1,
        line.x2,
        line.y2,
        line.stroke.color.to_hex(),
        line.stroke.width
    );
    if !line.dash.is_empty() {
        let dash: Vec<String> = line.dash.iter().map(f64::to_string).collect();
        let _ = write!(svg, " stroke-dasharray='{}'", dash.join(","));
    }
    if line.opacity < 1.0 {
        let _ = write!(svg, " opacity='{}'", line.opacity);
    }
    let _ = writeln!(svg, "/>");
}

fn write_path(svg: &mut String, id_prefix: &str, index: usize, path: &PathPrimitive) {
    let fill = match path.fill {
        None => "none".to_owned(),
        Some(Fill::VerticalGradient { .. }) => format!("url(#{id_prefix}-fill-{index})"),
    };
    let _ = write!(
        svg,
        "  <path d='{}' fill='{fill}'",
        svg_path_data(&path.commands)
    );
    if let Some(stroke) = path.stroke {
        let _ = write!(
            svg,
            " stroke='{}' stroke-width='{}'",
            stroke.color.to_hex(),
            stroke.width
        );
    }
    let _ = writeln!(svg, "/>");
}

fn write_circle(svg: &mut String, circle: &CirclePrimitive) {
    let _ = writeln!(
        svg,
        "  <circle cx='{}' cy='{}' r='{}' fill='{}' stroke='{}' stroke-width='{}'/>",
        circle.center.x,
        circle.center.y,
        circle.radius,
        circle.fill.to_hex(),
        circle.stroke.color.to_hex(),
        circle.stroke.width
    );
}

fn write_text(svg: &mut String, text: &TextPrimitive) {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let _ = writeln!(
        svg,
        "  <text x='{}' y='{}' font-size='{}' fill='{}' text-anchor='{anchor}'>{}</text>",
        text.x,
        text.y,
        text.font_size_px,
        text.color.to_hex(),
        escape_text(&text.text)
    );
}

fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
