//! The Cartesian plane: state, geometry and scene composition.
//!
//! [`PlaneRenderer`] owns the line parameters and the pointer position and
//! keeps a rendered [`Scene`] and [`Explanation`] in step with them. Every
//! mutation re-renders the whole frame, so nothing stale survives a change.

pub mod commands;
pub mod geometry;
pub mod scene;
pub mod transform;
pub mod ui;

use crate::config::PlaneConfig;
use crate::explain::{explain, Explanation, Language};
use crate::util::formatters::format_point;

pub use commands::{Dash, DrawCommand, Ink, Stroke, TextAlign};
pub use geometry::{nearest_point_on_line, Point};
pub use scene::{render, PointerStatus, Scene};
pub use transform::ViewTransform;

/// Slope and intercept of y = kx + b.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineParameters {
    /// Slope.
    pub k: f64,
    /// Intercept.
    pub b: f64,
}

impl Default for LineParameters {
    fn default() -> Self {
        Self { k: 1.0, b: 0.0 }
    }
}

/// Owns the plane state and its current frame.
#[derive(Debug, Clone)]
pub struct PlaneRenderer {
    config: PlaneConfig,
    view: ViewTransform,
    params: LineParameters,
    pointer: Option<Point>,
    language: Language,
    scene: Scene,
    explanation: Explanation,
}

impl PlaneRenderer {
    /// Create a renderer and draw the first frame.
    pub fn new(config: PlaneConfig, params: LineParameters, language: Language) -> Self {
        let view = ViewTransform::new(config.width, config.height, config.scale);
        let scene = render(params, None, &view, &config);
        let explanation = explain(params.k, params.b, language);
        Self {
            config,
            view,
            params,
            pointer: None,
            language,
            scene,
            explanation,
        }
    }

    /// Store new parameters, redraw and regenerate the explanation.
    pub fn set_parameters(&mut self, k: f64, b: f64) {
        self.params = LineParameters { k, b };
        tracing::debug!(k, b, "parameters changed");
        self.explanation = explain(k, b, self.language);
        self.redraw();
    }

    /// Record the pointer position in surface pixels and redraw.
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Some(Point::new(x, y));
        self.redraw();
    }

    /// Forget the pointer (it left the surface) and redraw.
    pub fn clear_pointer(&mut self) {
        if self.pointer.take().is_some() {
            tracing::debug!("pointer left the plane");
        }
        self.redraw();
    }

    /// Switch the explanation language.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.explanation = explain(self.params.k, self.params.b, language);
    }

    /// Compose a fresh frame from the current state.
    pub fn render(&self) -> Scene {
        render(self.params, self.pointer, &self.view, &self.config)
    }

    fn redraw(&mut self) {
        self.scene = self.render();
        tracing::trace!(commands = self.scene.commands.len(), "redrawn");
    }

    /// Current parameters.
    pub fn parameters(&self) -> LineParameters {
        self.params
    }

    /// Current pointer position in surface pixels.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Last rendered frame.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Explanation for the current parameters.
    pub fn explanation(&self) -> &Explanation {
        &self.explanation
    }

    /// Current explanation language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Surface configuration.
    pub fn config(&self) -> &PlaneConfig {
        &self.config
    }

    /// View transform.
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// Status line for the value display: coordinates or a hint.
    pub fn pointer_status(&self) -> String {
        match self.scene.pointer {
            PointerStatus::OnLine(p) => format_point(p.x, p.y, 2),
            PointerStatus::OffLine | PointerStatus::Inactive => {
                self.language.pointer_hint().to_string()
            },
        }
    }
}
