pub mod countdown;
pub mod menu;
pub mod results;
pub mod screen;
pub mod typing;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Paragraph, Widget},
};

pub const TITLE: &str = "--- TerminalTyper ---";
const HORIZONTAL_MARGIN: u16 = 1;

pub fn header_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn dim_style() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

/// Paint the centered title on the first row of `area`
pub fn render_header(area: Rect, buf: &mut Buffer) {
    if area.height == 0 {
        return;
    }

    let row = Rect::new(area.x, area.y, area.width, 1);
    Paragraph::new(Span::styled(TITLE, header_style()))
        .alignment(Alignment::Center)
        .render(row, buf);
}

/// Row `offset` lines away from the vertical middle of `area`, clipped to it
pub(crate) fn centered_row(area: Rect, offset: i32) -> Option<Rect> {
    let y = area.y as i32 + area.height as i32 / 2 + offset;
    if y < area.y as i32 || y >= (area.y + area.height) as i32 {
        return None;
    }
    Some(Rect::new(area.x, y as u16, area.width, 1))
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area();
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
