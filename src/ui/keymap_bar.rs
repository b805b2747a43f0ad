//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Keys shown in the help bar.
const KEYMAP_TEXT: &str =
    "q:quit | ←→/hl:k | ↓↑/jk:b | r:reset | space/n:random | L:language | T:theme | ?:help";

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph =
        Paragraph::new(KEYMAP_TEXT).style(Style::default().fg(colors.fg1).bg(colors.bg0));

    f.render_widget(paragraph, area);
}
