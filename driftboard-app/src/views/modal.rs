//! Blocking alert dialog

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Draw a centered blocking alert over whatever is underneath.
///
/// The dialog carries no field-level detail; it asks for re-entry and is
/// dismissed by any key.
pub fn render_alert(frame: &mut Frame, message: &str) {
    let rect = centered_rect(frame.area(), 46, 7);
    frame.render_widget(Clear, rect);

    let block = Block::bordered()
        .title("Invalid input")
        .border_style(Style::new().fg(Color::Red));
    let lines = vec![
        Line::raw(message.to_string()),
        Line::raw(""),
        Line::styled(
            "press any key to continue",
            Style::new().fg(Color::DarkGray),
        ),
    ];
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        rect,
    );
}

/// Center a fixed-size rectangle inside `area`, clamped to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
