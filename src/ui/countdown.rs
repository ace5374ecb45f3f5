use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Paragraph, Widget},
};

use super::{centered_row, render_header};

/// "Starting in N..." splash shown before a test
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    pub remaining: u32,
}

impl Widget for Countdown {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_header(area, buf);

        if let Some(row) = centered_row(area, 0) {
            Paragraph::new(format!("Starting in {}...", self.remaining))
                .alignment(Alignment::Center)
                .render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_text;

    #[test]
    fn test_countdown_renders_remaining() {
        let area = Rect::new(0, 0, 40, 10);
        let mut buffer = Buffer::empty(area);

        Countdown { remaining: 2 }.render(area, &mut buffer);

        let rendered = buffer_text(&buffer);
        assert!(rendered.contains("Starting in 2..."));
        assert!(rendered.contains("--- TerminalTyper ---"));
    }
}
