//! Scene composition: parameters, pointer and view to drawing commands.

use unicode_width::UnicodeWidthStr;

use super::commands::{Dash, DrawCommand, Ink, Stroke, TextAlign};
use super::geometry::{
    arrow_barbs, line_y, nearest_point_on_line, Point, SlopeTriangle, SLOPE_RUN,
};
use super::transform::ViewTransform;
use super::LineParameters;
use crate::config::PlaneConfig;
use crate::util::formatters::{format_fixed, format_point, format_value};

const GRID_WIDTH: f64 = 0.5;
const AXIS_WIDTH: f64 = 2.0;
const LINE_WIDTH: f64 = 3.0;
const SLOPE_WIDTH: f64 = 2.0;
const TICK_HALF: f64 = 5.0;
const INTERCEPT_RADIUS: f64 = 6.0;
const INTERCEPT_DASH: Dash = Dash { on: 5.0, off: 5.0 };
const ARROW_HEAD: f64 = 10.0;
const HOVER_RADIUS: f64 = 8.0;
const HOVER_OUTLINE: f64 = 2.0;
const HOVER_OFFSET: f64 = 15.0;
const LABEL_PADDING: f64 = 5.0;
const LABEL_HEIGHT: f64 = 20.0;
/// Estimated advance of one label character in pixels.
const LABEL_CHAR_WIDTH: f64 = 8.0;

/// Where the pointer stands relative to the line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerStatus {
    /// No pointer over the surface.
    Inactive,
    /// Pointer present but too far from the line.
    OffLine,
    /// Pointer close to the line; nearest point in math space.
    OnLine(Point),
}

/// One rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Drawing commands in paint order.
    pub commands: Vec<DrawCommand>,
    /// Hover result.
    pub pointer: PointerStatus,
}

impl Scene {
    /// Whether any command uses the given ink.
    pub fn uses(&self, ink: Ink) -> bool {
        self.commands.iter().any(|c| c.ink() == Some(ink))
    }

    /// Text commands of the given ink, in paint order.
    pub fn texts(&self, ink: Ink) -> impl Iterator<Item = &str> + '_ {
        self.commands
            .iter()
            .filter(move |c| c.ink() == Some(ink))
            .filter_map(DrawCommand::text)
    }
}

/// Compose the full frame for the current state.
pub fn render(
    params: LineParameters,
    pointer: Option<Point>,
    view: &ViewTransform,
    config: &PlaneConfig,
) -> Scene {
    let mut painter = Painter::default();
    painter.commands.push(DrawCommand::Clear);
    painter.grid(view, config);
    painter.axes(view, config);
    painter.plot_line(params, view, config);
    painter.intercept(params, view);
    if let Some(triangle) = SlopeTriangle::new(params.k, params.b) {
        painter.slope_triangle(params.k, &triangle, view);
    }
    let status = match pointer {
        Some(p) => painter.pointer(params, p, view, config),
        None => PointerStatus::Inactive,
    };

    Scene {
        commands: painter.commands,
        pointer: status,
    }
}

/// Accumulates commands for one frame.
#[derive(Default)]
struct Painter {
    commands: Vec<DrawCommand>,
}

impl Painter {
    fn segment(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn text(
        &mut self,
        anchor: Point,
        text: impl Into<String>,
        ink: Ink,
        align: TextAlign,
        bold: bool,
    ) {
        self.commands.push(DrawCommand::Text {
            anchor,
            text: text.into(),
            ink,
            align,
            bold,
        });
    }

    fn grid(&mut self, view: &ViewTransform, config: &PlaneConfig) {
        let stroke = Stroke::solid(Ink::Grid, GRID_WIDTH);
        let step = view.scale();

        let mut x = view.center_x() % step;
        while x < config.width {
            self.segment(Point::new(x, 0.0), Point::new(x, config.height), stroke);
            x += step;
        }

        let mut y = view.center_y() % step;
        while y < config.height {
            self.segment(Point::new(0.0, y), Point::new(config.width, y), stroke);
            y += step;
        }
    }

    fn axes(&mut self, view: &ViewTransform, config: &PlaneConfig) {
        let stroke = Stroke::solid(Ink::Axis, AXIS_WIDTH);
        let (cx, cy) = (view.center_x(), view.center_y());

        self.segment(Point::new(0.0, cy), Point::new(config.width, cy), stroke);
        self.segment(Point::new(cx, 0.0), Point::new(cx, config.height), stroke);

        let ticks = (-config.tick_range..=config.tick_range).filter(|&i| i != 0);

        for i in ticks.clone() {
            let x = view.to_surface(Point::new(f64::from(i), 0.0)).x;
            self.segment(Point::new(x, cy - TICK_HALF), Point::new(x, cy + TICK_HALF), stroke);
            self.text(
                Point::new(x, cy + 20.0),
                i.to_string(),
                Ink::AxisLabel,
                TextAlign::Center,
                false,
            );
        }

        for i in ticks {
            let y = view.to_surface(Point::new(0.0, f64::from(i))).y;
            self.segment(Point::new(cx - TICK_HALF, y), Point::new(cx + TICK_HALF, y), stroke);
            self.text(
                Point::new(cx - 10.0, y + 5.0),
                i.to_string(),
                Ink::AxisLabel,
                TextAlign::Right,
                false,
            );
        }

        self.text(Point::new(cx + 10.0, cy + 20.0), "O", Ink::AxisLabel, TextAlign::Left, false);
        self.text(
            Point::new(config.width - 20.0, cy + 20.0),
            "x",
            Ink::AxisLabel,
            TextAlign::Left,
            true,
        );
        self.text(Point::new(cx + 10.0, 20.0), "y", Ink::AxisLabel, TextAlign::Left, true);
    }

    fn plot_line(&mut self, params: LineParameters, view: &ViewTransform, config: &PlaneConfig) {
        let x1 = -config.line_extent;
        let x2 = config.line_extent;
        let from = view.to_surface(Point::new(x1, line_y(params.k, params.b, x1)));
        let to = view.to_surface(Point::new(x2, line_y(params.k, params.b, x2)));
        self.segment(from, to, Stroke::solid(Ink::Line, LINE_WIDTH));
    }

    fn intercept(&mut self, params: LineParameters, view: &ViewTransform) {
        let marker = view.to_surface(Point::new(0.0, params.b));

        self.commands.push(DrawCommand::FillCircle {
            center: marker,
            radius: INTERCEPT_RADIUS,
            ink: Ink::Intercept,
        });
        self.segment(
            marker,
            Point::new(marker.x, view.center_y()),
            Stroke::dashed(Ink::Intercept, 1.0, INTERCEPT_DASH),
        );
        self.text(
            Point::new(marker.x + 10.0, marker.y - 10.0),
            format!("(0, {})", format_value(params.b)),
            Ink::Intercept,
            TextAlign::Left,
            true,
        );
    }

    fn slope_triangle(&mut self, k: f64, triangle: &SlopeTriangle, view: &ViewTransform) {
        let stroke = Stroke::solid(Ink::Slope, SLOPE_WIDTH);
        let start = view.to_surface(triangle.start);
        let corner = view.to_surface(triangle.corner);
        let end = view.to_surface(triangle.end);

        self.segment(start, corner, stroke);
        self.segment(corner, end, stroke);

        self.text(
            Point::new((start.x + corner.x) / 2.0, corner.y + 20.0),
            format!("Δx = {}", format_value(SLOPE_RUN)),
            Ink::Slope,
            TextAlign::Center,
            true,
        );
        self.text(
            Point::new(corner.x - 10.0, (end.y + corner.y) / 2.0),
            format!("Δy = {}", format_fixed(k * SLOPE_RUN, 1)),
            Ink::Slope,
            TextAlign::Right,
            true,
        );

        // Corner to end: up for a rising line, down for a falling one.
        self.segment(corner, end, stroke);
        for barb in arrow_barbs(corner, end, ARROW_HEAD) {
            self.segment(end, barb, stroke);
        }
    }

    fn pointer(
        &mut self,
        params: LineParameters,
        pointer: Point,
        view: &ViewTransform,
        config: &PlaneConfig,
    ) -> PointerStatus {
        let nearest = nearest_point_on_line(params.k, params.b, view.to_math(pointer));
        let marker = view.to_surface(nearest);

        if pointer.distance(marker) >= config.hover_threshold {
            return PointerStatus::OffLine;
        }

        self.commands.push(DrawCommand::FillCircle {
            center: marker,
            radius: HOVER_RADIUS,
            ink: Ink::Pointer,
        });
        self.commands.push(DrawCommand::StrokeCircle {
            center: marker,
            radius: HOVER_RADIUS,
            stroke: Stroke::solid(Ink::PointerText, HOVER_OUTLINE),
        });

        let label = format_point(nearest.x, nearest.y, 1);
        let anchor = Point::new(marker.x + HOVER_OFFSET, marker.y - HOVER_OFFSET);
        self.commands.push(DrawCommand::FillRect {
            origin: Point::new(anchor.x - LABEL_PADDING, anchor.y - 15.0),
            width: label.width() as f64 * LABEL_CHAR_WIDTH + LABEL_PADDING * 2.0,
            height: LABEL_HEIGHT,
            ink: Ink::Pointer,
        });
        self.text(anchor, label, Ink::PointerText, TextAlign::Left, true);

        PointerStatus::OnLine(nearest)
    }
}
