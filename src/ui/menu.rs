use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Paragraph, Widget},
};

use super::{centered_row, render_header};
use crate::menu::Menu;

impl Widget for &Menu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_header(area, buf);

        let selected_style = Style::default().fg(Color::Green);
        let first = -(self.options().len() as i32 / 2);

        for (idx, option) in self.options().iter().enumerate() {
            let Some(row) = centered_row(area, first + idx as i32) else {
                continue;
            };

            let span = if idx == self.selected() {
                Span::styled(format!("> {option} <"), selected_style)
            } else {
                Span::raw(option.to_string())
            };

            Paragraph::new(span)
                .alignment(Alignment::Center)
                .render(row, buf);
        }
    }
}
