use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PathCommand, PathPoint};
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serializes as a `#rrggbb` string; alpha does not survive serialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rrggbb` or the short `#rgb` form.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let invalid = || ChartError::InvalidColor(input.to_owned());
        let hex = input.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        let (r, g, b) = match hex.len() {
            6 => (channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?),
            3 => {
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                (r * 17, g * 17, b * 17)
            }
            _ => return Err(invalid()),
        };

        Ok(Self::rgb(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        ))
    }

    /// Lower-case `#rrggbb`; alpha is carried separately as opacity.
    #[must_use]
    pub fn to_hex(self) -> String {
        let to_byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            to_byte(self.red),
            to_byte(self.green),
            to_byte(self.blue)
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> ChartResult<Self> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Dash pattern in user units; empty means a solid stroke.
pub type DashPattern = SmallVec<[f64; 2]>;

fn validate_dash(dash: &DashPattern) -> ChartResult<()> {
    if dash.iter().any(|len| !len.is_finite() || *len < 0.0) {
        return Err(ChartError::InvalidData(
            "dash lengths must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}

fn validate_opacity(opacity: f64) -> ChartResult<()> {
    if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
        return Err(ChartError::InvalidData(
            "opacity must be finite and in [0, 1]".to_owned(),
        ));
    }
    Ok(())
}

/// Stroke settings shared by paths and circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    #[must_use]
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Fill of a closed shape: a top-to-bottom fade of one color between two
/// opacities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    VerticalGradient {
        color: Color,
        top_opacity: f64,
        bottom_opacity: f64,
    },
}

impl Fill {
    pub fn validate(self) -> ChartResult<()> {
        match self {
            Fill::VerticalGradient {
                color,
                top_opacity,
                bottom_opacity,
            } => {
                validate_opacity(top_opacity)?;
                validate_opacity(bottom_opacity)?;
                color.validate()
            }
        }
    }
}

/// Draw command for a vector path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub commands: Vec<PathCommand>,
    pub stroke: Option<Stroke>,
    pub fill: Option<Fill>,
}

impl PathPrimitive {
    #[must_use]
    pub fn stroked(commands: Vec<PathCommand>, stroke: Stroke) -> Self {
        Self {
            commands,
            stroke: Some(stroke),
            fill: None,
        }
    }

    #[must_use]
    pub fn filled(commands: Vec<PathCommand>, fill: Fill) -> Self {
        Self {
            commands,
            stroke: None,
            fill: Some(fill),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self.commands.first() {
            None => {
                return Err(ChartError::InvalidData(
                    "path primitive must not be empty".to_owned(),
                ));
            }
            Some(PathCommand::MoveTo(_)) => {}
            Some(_) => {
                return Err(ChartError::InvalidData(
                    "path primitive must start with a move command".to_owned(),
                ));
            }
        }
        if self.commands.iter().any(|command| !command.is_finite()) {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        if self.stroke.is_none() && self.fill.is_none() {
            return Err(ChartError::InvalidData(
                "path primitive needs a stroke or a fill".to_owned(),
            ));
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        Ok(())
    }
}

/// Draw command for one straight line segment in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Stroke,
    pub dash: DashPattern,
    pub opacity: f64,
}

impl LinePrimitive {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke: Stroke) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke,
            dash: DashPattern::new(),
            opacity: 1.0,
        }
    }

    #[must_use]
    pub fn with_dash(mut self, dash: &[f64]) -> Self {
        self.dash = SmallVec::from_slice(dash);
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        validate_dash(&self.dash)?;
        validate_opacity(self.opacity)?;
        self.stroke.validate()
    }
}

/// Draw command for a point marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub center: PathPoint,
    pub radius: f64,
    pub fill: Color,
    pub stroke: Stroke,
}

impl CirclePrimitive {
    pub fn validate(self) -> ChartResult<()> {
        if !self.center.x.is_finite() || !self.center.y.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        self.fill.validate()?;
        self.stroke.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
