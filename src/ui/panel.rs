//! Side panel: sliders, explanation and pointer readout.

use crate::app::App;
use crate::controls::RangeControl;
use crate::explain::Explanation;
use crate::ui::ThemeColors;
use crate::util::formatters::format_value;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the side panel.
pub(super) fn draw_panel(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .style(Style::default().bg(colors.bg0));

    let mut lines = vec![
        slider_line("k", &app.controls.k, app.layout.slider_width, colors),
        slider_line("b", &app.controls.b, app.layout.slider_width, colors),
        Line::from(""),
    ];
    lines.extend(explanation_lines(app.plane.explanation(), colors));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Nearest point",
        Style::default()
            .fg(colors.heading)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        app.plane.pointer_status(),
        Style::default().fg(colors.value),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

/// One slider row: name, track with knob, value.
fn slider_line(
    name: &'static str,
    control: &RangeControl,
    width: usize,
    colors: &ThemeColors,
) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{} ", name),
            Style::default()
                .fg(colors.label)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(slider_track(control.fraction(), width), Style::default().fg(colors.fg1)),
        Span::styled(
            format!(" {}", format_value(control.value())),
            Style::default().fg(colors.value),
        ),
    ])
}

/// Text track of `width` cells with a knob at `fraction`.
pub(super) fn slider_track(fraction: f64, width: usize) -> String {
    if width < 3 {
        return "●".to_string();
    }
    let inner = width - 2;
    let knob = (fraction.clamp(0.0, 1.0) * (inner - 1) as f64).round() as usize;
    let mut track = String::with_capacity(width * 3);
    track.push('├');
    for i in 0..inner {
        track.push(if i == knob { '●' } else { '─' });
    }
    track.push('┤');
    track
}

fn explanation_lines(explanation: &Explanation, colors: &ThemeColors) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "How k and b shape the line",
        Style::default()
            .fg(colors.heading)
            .add_modifier(Modifier::BOLD),
    ))];

    for (i, paragraph) in explanation.paragraphs().into_iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        for text in paragraph.lines() {
            lines.push(Line::from(Span::styled(
                text.to_string(),
                Style::default().fg(colors.fg0),
            )));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knob_tracks_fraction() {
        assert_eq!(slider_track(0.0, 7), "├●────┤");
        assert_eq!(slider_track(0.5, 7), "├──●──┤");
        assert_eq!(slider_track(1.0, 7), "├────●┤");
        assert_eq!(slider_track(2.0, 7), "├────●┤");
        assert_eq!(slider_track(0.5, 2), "●");
    }
}
