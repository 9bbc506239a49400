use std::fmt::Write as _;

use crate::core::{PathCommand, PathPoint};

/// Serializes commands into SVG path data: `M x,y C x,y x,y x,y L x,y Z`.
///
/// Numbers use the shortest representation that round-trips. An empty slice
/// produces an empty string.
#[must_use]
pub fn svg_path_data(commands: &[PathCommand]) -> String {
    let mut out = String::with_capacity(commands.len() * 32);
    for command in commands {
        if !out.is_empty() {
            out.push(' ');
        }
        match *command {
            PathCommand::MoveTo(point) => {
                out.push_str("M ");
                push_point(&mut out, point);
            }
            PathCommand::CurveTo {
                control1,
                control2,
                end,
            } => {
                out.push_str("C ");
                push_point(&mut out, control1);
                out.push(' ');
                push_point(&mut out, control2);
                out.push(' ');
                push_point(&mut out, end);
            }
            PathCommand::LineTo(point) => {
                out.push_str("L ");
                push_point(&mut out, point);
            }
            PathCommand::ClosePath => out.push('Z'),
        }
    }
    out
}

fn push_point(out: &mut String, point: PathPoint) {
    // Writing into a `String` cannot fail.
    let _ = write!(out, "{},{}", point.x, point.y);
}
