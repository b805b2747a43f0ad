//! Application state and logic.

use std::str::FromStr;

use ratatui::layout::Rect;

use crate::config::{ControlConfig, LayoutConfig, PlaneConfig};
use crate::controls::Controls;
use crate::explain::Language;
use crate::plane::{LineParameters, PlaneRenderer, Point};
use crate::util::formatters::format_value;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    GruvboxDark,
    /// Light theme with the classroom colors.
    Classroom,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::Classroom,
            Theme::Classroom => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::Classroom => "Classroom",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" | "gruvbox" => Ok(Theme::GruvboxDark),
            "light" | "classroom" => Ok(Theme::Classroom),
            other => Err(format!("unknown theme '{}' (expected dark or light)", other)),
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Plane state and current frame.
    pub plane: PlaneRenderer,
    /// Slider state and actions.
    pub controls: Controls,
    /// Terminal layout settings.
    pub layout: LayoutConfig,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Screen area of the plane canvas from the last draw.
    pub plane_area: Option<Rect>,
}

impl App {
    /// Create a new application instance.
    pub fn new(
        plane: PlaneConfig,
        controls: &ControlConfig,
        language: Language,
        theme: Theme,
    ) -> Self {
        let controls = Controls::new(controls);
        let (k, b) = controls.values();
        Self {
            plane: PlaneRenderer::new(plane, LineParameters { k, b }, language),
            controls,
            layout: LayoutConfig::default(),
            status: "Ready".to_string(),
            theme,
            plane_area: None,
        }
    }

    /// Push slider values into the plane.
    fn apply_controls(&mut self) {
        let (k, b) = self.controls.values();
        self.plane.set_parameters(k, b);
        self.status = format!("y = {}x + {}", format_value(k), format_value(b));
    }

    /// Step the slope slider.
    pub fn step_k(&mut self, up: bool) {
        if up {
            self.controls.k.step_up();
        } else {
            self.controls.k.step_down();
        }
        self.apply_controls();
    }

    /// Step the intercept slider.
    pub fn step_b(&mut self, up: bool) {
        if up {
            self.controls.b.step_up();
        } else {
            self.controls.b.step_down();
        }
        self.apply_controls();
    }

    /// Reset to k = 1, b = 0.
    pub fn reset(&mut self) {
        self.controls.reset();
        self.apply_controls();
        tracing::info!("reset");
        self.status = format!("Reset: {}", self.status);
    }

    /// Random integer slope and intercept.
    pub fn randomize(&mut self) {
        let (k, b) = self.controls.randomize();
        tracing::info!(k, b, "randomized");
        self.apply_controls();
        self.status = format!("Random: {}", self.status);
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Cycle the explanation language.
    pub fn cycle_language(&mut self) {
        let language = self.plane.language().next();
        self.plane.set_language(language);
        self.status = format!("Language: {}", language.name());
    }

    /// Show key help in the status bar.
    pub fn show_help(&mut self) {
        self.status =
            "Help: ←/→ k, ↓/↑ b, r reset, space random, L language, T theme, q quit".to_string();
    }

    /// Handle a mouse move to a terminal cell.
    pub fn pointer_moved(&mut self, column: u16, row: u16) {
        let hit = self
            .plane_area
            .and_then(|area| cell_to_surface(area, column, row, self.plane.config()));
        match hit {
            Some(p) => self.plane.set_pointer(p.x, p.y),
            None if self.plane.pointer().is_some() => self.plane.clear_pointer(),
            None => {}
        }
    }

    /// Handle the pointer leaving the terminal.
    pub fn pointer_left(&mut self) {
        self.plane.clear_pointer();
    }
}

/// Map the centre of a terminal cell inside `area` to surface pixels.
pub fn cell_to_surface(area: Rect, column: u16, row: u16, config: &PlaneConfig) -> Option<Point> {
    if area.width == 0
        || area.height == 0
        || column < area.x
        || row < area.y
        || column >= area.x + area.width
        || row >= area.y + area.height
    {
        return None;
    }
    let fx = (f64::from(column - area.x) + 0.5) / f64::from(area.width);
    let fy = (f64::from(row - area.y) + 0.5) / f64::from(area.height);
    Some(Point::new(fx * config.width, fy * config.height))
}
