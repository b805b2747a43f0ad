//! Drawing commands issued by the plane renderer.
//!
//! Coordinates are surface pixels with y growing downward. Colours are
//! named by role ([`Ink`]) and resolved by the host theme.

use std::fmt;

use super::geometry::Point;

/// Colour role of a drawing command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ink {
    /// Background grid.
    Grid,
    /// Axes and tick marks.
    Axis,
    /// Tick labels and the origin mark.
    AxisLabel,
    /// The plotted line.
    Line,
    /// Y-intercept marker, guide and label.
    Intercept,
    /// Slope triangle, arrow and labels.
    Slope,
    /// Hover marker fill and label background.
    Pointer,
    /// Hover marker outline and label text.
    PointerText,
}

impl Ink {
    /// Short name used in command dumps.
    pub fn name(self) -> &'static str {
        match self {
            Ink::Grid => "grid",
            Ink::Axis => "axis",
            Ink::AxisLabel => "axis-label",
            Ink::Line => "line",
            Ink::Intercept => "intercept",
            Ink::Slope => "slope",
            Ink::Pointer => "pointer",
            Ink::PointerText => "pointer-text",
        }
    }
}

/// Dash pattern: `on` pixels drawn, then `off` pixels skipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dash {
    /// Drawn length.
    pub on: f64,
    /// Gap length.
    pub off: f64,
}

/// Stroke style of a line or outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Colour role.
    pub ink: Ink,
    /// Line width in pixels.
    pub width: f64,
    /// Dash pattern, solid when `None`.
    pub dash: Option<Dash>,
}

impl Stroke {
    /// A solid stroke.
    pub const fn solid(ink: Ink, width: f64) -> Self {
        Self {
            ink,
            width,
            dash: None,
        }
    }

    /// A dashed stroke.
    pub const fn dashed(ink: Ink, width: f64, dash: Dash) -> Self {
        Self {
            ink,
            width,
            dash: Some(dash),
        }
    }
}

/// Horizontal text alignment relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Text starts at the anchor.
    Left,
    /// Text is centred on the anchor.
    Center,
    /// Text ends at the anchor.
    Right,
}

/// One primitive operation on the drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface.
    Clear,
    /// Stroke a straight segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke style.
        stroke: Stroke,
    },
    /// Fill a circle.
    FillCircle {
        /// Centre.
        center: Point,
        /// Radius in pixels.
        radius: f64,
        /// Fill colour.
        ink: Ink,
    },
    /// Outline a circle.
    StrokeCircle {
        /// Centre.
        center: Point,
        /// Radius in pixels.
        radius: f64,
        /// Stroke style.
        stroke: Stroke,
    },
    /// Fill an axis-aligned rectangle.
    FillRect {
        /// Top-left corner.
        origin: Point,
        /// Width in pixels.
        width: f64,
        /// Height in pixels.
        height: f64,
        /// Fill colour.
        ink: Ink,
    },
    /// Draw text with its baseline at the anchor.
    Text {
        /// Anchor point.
        anchor: Point,
        /// Content.
        text: String,
        /// Colour role.
        ink: Ink,
        /// Alignment relative to the anchor.
        align: TextAlign,
        /// Bold face.
        bold: bool,
    },
}

impl DrawCommand {
    /// Colour role of the command, `None` for [`DrawCommand::Clear`].
    pub fn ink(&self) -> Option<Ink> {
        match self {
            DrawCommand::Clear => None,
            DrawCommand::Line { stroke, .. } | DrawCommand::StrokeCircle { stroke, .. } => {
                Some(stroke.ink)
            },
            DrawCommand::FillCircle { ink, .. }
            | DrawCommand::FillRect { ink, .. }
            | DrawCommand::Text { ink, .. } => Some(*ink),
        }
    }

    /// Text content, if this is a text command.
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::Clear => write!(f, "clear"),
            DrawCommand::Line { from, to, stroke } => {
                write!(
                    f,
                    "line {} ({:.1}, {:.1}) -> ({:.1}, {:.1}) w={}",
                    stroke.ink.name(),
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    stroke.width
                )?;
                if let Some(dash) = stroke.dash {
                    write!(f, " dash={}/{}", dash.on, dash.off)?;
                }
                Ok(())
            },
            DrawCommand::FillCircle { center, radius, ink } => write!(
                f,
                "fill-circle {} ({:.1}, {:.1}) r={}",
                ink.name(),
                center.x,
                center.y,
                radius
            ),
            DrawCommand::StrokeCircle {
                center,
                radius,
                stroke,
            } => write!(
                f,
                "stroke-circle {} ({:.1}, {:.1}) r={} w={}",
                stroke.ink.name(),
                center.x,
                center.y,
                radius,
                stroke.width
            ),
            DrawCommand::FillRect {
                origin,
                width,
                height,
                ink,
            } => write!(
                f,
                "fill-rect {} ({:.1}, {:.1}) {:.1}x{:.1}",
                ink.name(),
                origin.x,
                origin.y,
                width,
                height
            ),
            DrawCommand::Text {
                anchor,
                text,
                ink,
                align,
                bold,
            } => write!(
                f,
                "text {} ({:.1}, {:.1}) {:?}{} \"{}\"",
                ink.name(),
                anchor.x,
                anchor.y,
                align,
                if *bold { " bold" } else { "" },
                text
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_one_line_per_command() {
        let cmd = DrawCommand::Line {
            from: Point::new(300.0, 260.0),
            to: Point::new(300.0, 300.0),
            stroke: Stroke::dashed(Ink::Intercept, 1.0, Dash { on: 5.0, off: 5.0 }),
        };
        assert_eq!(
            cmd.to_string(),
            "line intercept (300.0, 260.0) -> (300.0, 300.0) w=1 dash=5/5"
        );

        let text = DrawCommand::Text {
            anchor: Point::new(10.0, 20.0),
            text: "O".to_string(),
            ink: Ink::AxisLabel,
            align: TextAlign::Left,
            bold: false,
        };
        assert_eq!(text.to_string(), "text axis-label (10.0, 20.0) Left \"O\"");
        assert_eq!(text.text(), Some("O"));
        assert_eq!(DrawCommand::Clear.ink(), None);
    }
}
