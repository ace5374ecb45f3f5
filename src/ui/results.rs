use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Paragraph, Widget},
};

use super::{centered_row, dim_style, render_header};
use crate::session::SessionResult;

pub const CONTINUE_HINT: &str = "Press any key to continue...";

impl Widget for &SessionResult {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_header(area, buf);

        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let rows = [
            (-3, Span::styled("--- Results ---", bold_style)),
            (-1, Span::raw(format!("WPM: {:.2}", self.wpm))),
            (0, Span::raw(format!("Accuracy: {:.2}%", self.accuracy))),
            (1, Span::raw(format!("Time: {:.2}s", self.elapsed_secs))),
            (3, Span::styled(CONTINUE_HINT, dim_style())),
        ];

        for (offset, span) in rows {
            if let Some(row) = centered_row(area, offset) {
                Paragraph::new(span)
                    .alignment(Alignment::Center)
                    .render(row, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_text;

    #[test]
    fn test_results_render() {
        let result = SessionResult {
            wpm: 14.0,
            accuracy: 100.0,
            elapsed_secs: 6.0,
        };
        let area = Rect::new(0, 0, 40, 12);
        let mut buffer = Buffer::empty(area);

        (&result).render(area, &mut buffer);

        let rendered = buffer_text(&buffer);
        assert!(rendered.contains("--- Results ---"));
        assert!(rendered.contains("WPM: 14.00"));
        assert!(rendered.contains("Accuracy: 100.00%"));
        assert!(rendered.contains("Time: 6.00s"));
        assert!(rendered.contains(CONTINUE_HINT));
    }

    #[test]
    fn test_results_tiny_area() {
        let result = SessionResult {
            wpm: 1.0,
            accuracy: 50.0,
            elapsed_secs: 1.0,
        };
        let area = Rect::new(0, 0, 12, 2);
        let mut buffer = Buffer::empty(area);

        (&result).render(area, &mut buffer);
        assert_eq!(*buffer.area(), area);
    }
}
