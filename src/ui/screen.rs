use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::countdown::Countdown;
use crate::{
    menu::Menu,
    session::{SessionFrame, SessionResult},
};

/// Whatever the app is currently showing
#[derive(Clone, Copy, Debug)]
pub enum Screen<'a> {
    Menu(&'a Menu),
    Countdown(u32),
    Typing(&'a SessionFrame),
    Results(&'a SessionResult),
}

impl Widget for Screen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self {
            Screen::Menu(menu) => menu.render(area, buf),
            Screen::Countdown(remaining) => Countdown { remaining }.render(area, buf),
            Screen::Typing(frame) => frame.render(area, buf),
            Screen::Results(result) => result.render(area, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use crate::ui::buffer_text;

    fn render(screen: Screen) -> String {
        let area = Rect::new(0, 0, 50, 14);
        let mut buffer = Buffer::empty(area);
        screen.render(area, &mut buffer);
        buffer_text(&buffer)
    }

    #[test]
    fn every_screen_has_header() {
        let menu = Menu::default();
        let frame = Session::new("abc".to_string()).frame();
        let result = SessionResult {
            wpm: 10.0,
            accuracy: 90.0,
            elapsed_secs: 3.0,
        };

        for screen in [
            Screen::Menu(&menu),
            Screen::Countdown(3),
            Screen::Typing(&frame),
            Screen::Results(&result),
        ] {
            assert!(render(screen).contains("--- TerminalTyper ---"));
        }
    }

    #[test]
    fn dispatches_to_countdown() {
        assert!(render(Screen::Countdown(1)).contains("Starting in 1..."));
    }
}
