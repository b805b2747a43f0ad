//! User interface rendering.

mod keymap_bar;
mod panel;
mod status_bar;
mod theme;

use crate::app::App;
use crate::plane::ui::draw_plane;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Plane + panel
            Constraint::Length(1), // Status
            Constraint::Length(1), // Keymap
        ])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(app.layout.panel_width),
        ])
        .split(rows[0]);

    let canvas_area = draw_plane(f, columns[0], &app.plane, &colors, &app.layout);
    app.plane_area = Some(canvas_area);

    panel::draw_panel(f, columns[1], app, &colors);
    status_bar::draw_status(f, rows[1], &app.status, &colors);
    keymap_bar::draw_keymap(f, rows[2], &colors);
}
