//! Color themes for the UI.

use crate::app::Theme;
use crate::plane::Ink;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Main background.
    pub bg0: Color,
    /// Status bar background.
    pub bg1: Color,
    /// Borders.
    pub bg2: Color,
    /// Primary text color.
    pub fg0: Color,
    /// Secondary text color.
    pub fg1: Color,
    /// Heading text color.
    pub heading: Color,
    /// Label text color.
    pub label: Color,
    /// Value text color.
    pub value: Color,
    /// Plane grid.
    pub grid: Color,
    /// Plane axes and ticks.
    pub axis: Color,
    /// Tick labels.
    pub axis_label: Color,
    /// The plotted line.
    pub line: Color,
    /// Intercept marker.
    pub intercept: Color,
    /// Slope triangle.
    pub slope: Color,
    /// Hover marker.
    pub pointer: Color,
    /// Hover label text and outline.
    pub pointer_text: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg0: Color::Rgb(40, 40, 40),
                bg1: Color::Rgb(60, 56, 54),
                bg2: Color::Rgb(102, 92, 84),
                fg0: Color::Rgb(235, 219, 178),
                fg1: Color::Rgb(168, 153, 132),
                heading: Color::Rgb(251, 184, 108),
                label: Color::Rgb(184, 187, 38),
                value: Color::Rgb(142, 192, 124),
                grid: Color::Rgb(60, 56, 54),
                axis: Color::Rgb(213, 196, 161),
                axis_label: Color::Rgb(168, 153, 132),
                line: Color::Rgb(131, 165, 152),
                intercept: Color::Rgb(251, 73, 52),
                slope: Color::Rgb(254, 128, 25),
                pointer: Color::Rgb(184, 187, 38),
                pointer_text: Color::Rgb(251, 241, 199),
            },
            Theme::Classroom => Self {
                bg0: Color::Rgb(255, 255, 255),
                bg1: Color::Rgb(235, 235, 245),
                bg2: Color::Rgb(200, 200, 210),
                fg0: Color::Rgb(33, 33, 33),
                fg1: Color::Rgb(102, 102, 102),
                heading: Color::Rgb(102, 126, 234),
                label: Color::Rgb(118, 75, 162),
                value: Color::Rgb(245, 87, 108),
                grid: Color::Rgb(224, 224, 224),
                axis: Color::Rgb(0, 0, 0),
                axis_label: Color::Rgb(102, 102, 102),
                line: Color::Rgb(102, 126, 234),
                intercept: Color::Rgb(245, 87, 108),
                slope: Color::Rgb(255, 152, 0),
                pointer: Color::Rgb(76, 175, 80),
                pointer_text: Color::Rgb(255, 255, 255),
            },
        }
    }

    /// Resolve a drawing ink to a terminal color.
    pub fn ink(&self, ink: Ink) -> Color {
        match ink {
            Ink::Grid => self.grid,
            Ink::Axis => self.axis,
            Ink::AxisLabel => self.axis_label,
            Ink::Line => self.line,
            Ink::Intercept => self.intercept,
            Ink::Slope => self.slope,
            Ink::Pointer => self.pointer,
            Ink::PointerText => self.pointer_text,
        }
    }
}
