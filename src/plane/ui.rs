//! Plane pane - rasterizes a scene onto a terminal canvas.

use super::commands::{DrawCommand, Ink, Stroke, TextAlign};
use super::geometry::Point;
use super::PlaneRenderer;
use crate::config::LayoutConfig;
use crate::ui::ThemeColors;
use crate::util::formatters::format_value;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Circle, Context, Line as CanvasLine, Points},
        Block, Borders,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Size of one canvas dot and one character cell in surface pixels.
#[derive(Debug, Clone, Copy)]
struct Resolution {
    dot_w: f64,
    dot_h: f64,
    char_w: f64,
    surface_h: f64,
}

/// Draw the plane pane. Returns the screen area of the canvas.
pub fn draw_plane(
    f: &mut Frame<'_>,
    area: Rect,
    plane: &PlaneRenderer,
    colors: &ThemeColors,
    layout: &LayoutConfig,
) -> Rect {
    let params = plane.parameters();
    let block = Block::default()
        .title(format!(
            " y = {}x + {} ",
            format_value(params.k),
            format_value(params.b)
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .style(Style::default().bg(colors.bg0));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let config = plane.config();
    let canvas_area = fit_aspect(inner, config.width / config.height, layout.cell_aspect);
    if canvas_area.width == 0 || canvas_area.height == 0 {
        return canvas_area;
    }

    let res = Resolution {
        dot_w: config.width / (f64::from(canvas_area.width) * 2.0),
        dot_h: config.height / (f64::from(canvas_area.height) * 4.0),
        char_w: config.width / f64::from(canvas_area.width),
        surface_h: config.height,
    };
    let commands = &plane.scene().commands;

    let canvas = Canvas::default()
        .x_bounds([0.0, config.width])
        .y_bounds([0.0, config.height])
        .marker(Marker::Braille)
        .background_color(colors.bg0)
        .paint(|ctx| paint_commands(ctx, commands, colors, res));

    f.render_widget(canvas, canvas_area);
    canvas_area
}

/// Largest centred rect inside `area` with the surface aspect ratio.
///
/// `cell_aspect` is the height of a terminal cell divided by its width.
pub fn fit_aspect(area: Rect, surface_aspect: f64, cell_aspect: f64) -> Rect {
    if area.width == 0 || area.height == 0 {
        return area;
    }
    // Columns per row that keep pixels square.
    let target = surface_aspect * cell_aspect;
    let current = f64::from(area.width) / f64::from(area.height);

    if current > target {
        let width = ((f64::from(area.height) * target).round() as u16).clamp(1, area.width);
        Rect {
            x: area.x + (area.width - width) / 2,
            width,
            ..area
        }
    } else {
        let height = ((f64::from(area.width) / target).round() as u16).clamp(1, area.height);
        Rect {
            y: area.y + (area.height - height) / 2,
            height,
            ..area
        }
    }
}

fn paint_commands(
    ctx: &mut Context<'_>,
    commands: &[DrawCommand],
    colors: &ThemeColors,
    res: Resolution,
) {
    let mut last_ink: Option<Ink> = None;

    for command in commands {
        // New ink, new layer: later commands paint over earlier ones.
        if let Some(ink) = command.ink() {
            if last_ink.is_some_and(|last| last != ink) {
                ctx.layer();
            }
            last_ink = Some(ink);
        }

        let flip = |p: Point| (p.x, res.surface_h - p.y);

        match command {
            DrawCommand::Clear => {}
            DrawCommand::Line { from, to, stroke } => {
                paint_segment(ctx, *from, *to, stroke, colors, res);
            },
            DrawCommand::FillCircle { center, radius, ink } => {
                let color = colors.ink(*ink);
                let (x, y) = flip(*center);
                let step = res.dot_w.min(res.dot_h);
                let mut r = *radius;
                while r > 0.0 {
                    ctx.draw(&Circle { x, y, radius: r, color });
                    r -= step;
                }
                ctx.draw(&Points {
                    coords: &[(x, y)],
                    color,
                });
            },
            DrawCommand::StrokeCircle {
                center,
                radius,
                stroke,
            } => {
                let (x, y) = flip(*center);
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: *radius,
                    color: colors.ink(stroke.ink),
                });
            },
            DrawCommand::FillRect {
                origin,
                width,
                height,
                ink,
            } => {
                let color = colors.ink(*ink);
                let mut row = origin.y;
                while row <= origin.y + height {
                    let (x1, y) = flip(Point::new(origin.x, row));
                    ctx.draw(&CanvasLine::new(x1, y, x1 + width, y, color));
                    row += res.dot_h;
                }
            },
            DrawCommand::Text {
                anchor,
                text,
                ink,
                align,
                bold,
            } => {
                let width = text.width() as f64 * res.char_w;
                let x = match align {
                    TextAlign::Left => anchor.x,
                    TextAlign::Center => anchor.x - width / 2.0,
                    TextAlign::Right => anchor.x - width,
                };
                let mut style = Style::default().fg(colors.ink(*ink));
                if *bold {
                    style = style.add_modifier(Modifier::BOLD);
                }
                let (_, y) = flip(*anchor);
                ctx.print(x, y, Span::styled(text.clone(), style));
            },
        }
    }
}

fn paint_segment(
    ctx: &mut Context<'_>,
    from: Point,
    to: Point,
    stroke: &Stroke,
    colors: &ThemeColors,
    res: Resolution,
) {
    let color = colors.ink(stroke.ink);
    for (a, b) in dash_segments(from, to, stroke) {
        ctx.draw(&CanvasLine::new(
            a.x,
            res.surface_h - a.y,
            b.x,
            res.surface_h - b.y,
            color,
        ));
    }
}

/// Split a stroked segment into its visible pieces.
pub fn dash_segments(from: Point, to: Point, stroke: &Stroke) -> Vec<(Point, Point)> {
    let Some(dash) = stroke.dash else {
        return vec![(from, to)];
    };
    let length = from.distance(to);
    let period = dash.on + dash.off;
    if length == 0.0 || period <= 0.0 || dash.on <= 0.0 {
        return vec![(from, to)];
    }

    let at = |t: f64| {
        Point::new(
            from.x + (to.x - from.x) * t / length,
            from.y + (to.y - from.y) * t / length,
        )
    };

    let mut pieces = Vec::new();
    let mut start = 0.0;
    while start < length {
        let end = (start + dash.on).min(length);
        pieces.push((at(start), at(end)));
        start += period;
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plane::commands::Dash;

    #[test]
    fn fit_keeps_square_surface_square() {
        // 2:1 cells: a square surface needs twice as many columns as rows.
        let r = fit_aspect(Rect::new(0, 0, 100, 30), 1.0, 2.0);
        assert_eq!((r.width, r.height), (60, 30));
        assert_eq!(r.x, 20);

        let r = fit_aspect(Rect::new(0, 0, 40, 30), 1.0, 2.0);
        assert_eq!((r.width, r.height), (40, 20));
        assert_eq!(r.y, 5);
    }

    #[test]
    fn dashes_alternate() {
        let stroke = Stroke::dashed(Ink::Intercept, 1.0, Dash { on: 5.0, off: 5.0 });
        let pieces = dash_segments(Point::new(0.0, 0.0), Point::new(0.0, 23.0), &stroke);
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces[1], (Point::new(0.0, 10.0), Point::new(0.0, 15.0)));
        assert_eq!(pieces[2].1, Point::new(0.0, 23.0));
    }

    #[test]
    fn solid_stroke_is_one_piece() {
        let stroke = Stroke::solid(Ink::Line, 3.0);
        let pieces = dash_segments(Point::new(0.0, 0.0), Point::new(3.0, 4.0), &stroke);
        assert_eq!(pieces, vec![(Point::new(0.0, 0.0), Point::new(3.0, 4.0))]);
    }
}
