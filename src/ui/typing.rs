use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthChar;

use super::{dim_style, render_header, HORIZONTAL_MARGIN};
use crate::session::{CharClass, PromptCell, SessionFrame};

fn cell_style(class: CharClass) -> Style {
    match class {
        CharClass::Untyped => Style::default().fg(Color::White),
        CharClass::Correct => Style::default().fg(Color::Green),
        CharClass::Incorrect => Style::default().fg(Color::Red),
        CharClass::Cursor => Style::default().fg(Color::Black).bg(Color::White),
    }
}

fn cell_span(cell: &PromptCell) -> Span<'static> {
    let symbol = match (cell.class, cell.ch) {
        // a red space is invisible
        (CharClass::Incorrect, ' ') => "·".to_owned(),
        (_, c) => c.to_string(),
    };
    Span::styled(symbol, cell_style(cell.class))
}

/// Rows needed to show the prompt at `width` columns
fn prompt_lines(cells: &[PromptCell], width: u16) -> u16 {
    let prompt_width: usize = cells
        .iter()
        .map(|cell| cell.ch.width().unwrap_or(0))
        .sum();

    if width == 0 || prompt_width <= width as usize {
        return 1;
    }

    // word wrapping can spill one line past the raw estimate
    ((prompt_width as f64 / width as f64).ceil() + 1.0) as u16
}

impl Widget for &SessionFrame {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner_width = area.width.saturating_sub(HORIZONTAL_MARGIN * 2);
        let prompt_height = prompt_lines(&self.cells, inner_width);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Length(1),
                Constraint::Length(1), // stats
                Constraint::Length(2),
                Constraint::Length(prompt_height),
                Constraint::Length(1),
                Constraint::Length(1), // instructions
                Constraint::Min(0),
            ])
            .split(area);

        render_header(area, buf);

        Paragraph::new(format!(
            "WPM: {:.2} | Accuracy: {:.2}%",
            self.metrics.wpm, self.metrics.accuracy
        ))
        .render(chunks[2], buf);

        let spans: Vec<Span> = self.cells.iter().map(cell_span).collect();
        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: false })
            .render(chunks[4], buf);

        Paragraph::new(Span::styled(
            self.instructions,
            dim_style().add_modifier(Modifier::ITALIC),
        ))
        .render(chunks[6], buf);
    }
}
