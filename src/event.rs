use crossterm::event::{
    self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::{direction::Direction, view::ButtonBar};

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Walk the given way from the next tick on.
    Steer(Direction),
    /// The terminal changed and needs repainting.
    Redraw,
    Quit,
}

impl Input {
    /// Maps a terminal event to an input. Clicks count only when they land on a button of
    /// `buttons`. Key releases are ignored, and so are repeats of anything but steering keys.
    pub fn from_crossterm_event(event: event::Event, buttons: &ButtonBar) -> Option<Self> {
        match event {
            event::Event::Key(key) => Self::from_key(key),
            event::Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => buttons.hit(column, row).map(Input::Steer),
            event::Event::Resize(..) | event::Event::FocusGained => Some(Input::Redraw),
            _ => None,
        }
    }

    fn from_key(key: KeyEvent) -> Option<Self> {
        let input = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Input::Quit)
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Input::Quit),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                Some(Input::Steer(Direction::Right))
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                Some(Input::Steer(Direction::Left))
            }
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                Some(Input::Steer(Direction::Up))
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                Some(Input::Steer(Direction::Down))
            }
            _ => None,
        };
        match key.kind {
            KeyEventKind::Release => None,
            KeyEventKind::Repeat => input.filter(|i| matches!(i, Input::Steer(_))),
            KeyEventKind::Press => input,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyEventState};

    use super::*;
    use crate::view::{BUTTON_ROW, CANVAS_TOP};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn steering_keys() {
        let bar = ButtonBar::new();
        let cases = [
            (KeyCode::Right, Direction::Right),
            (KeyCode::Char('a'), Direction::Left),
            (KeyCode::Char('W'), Direction::Up),
            (KeyCode::Down, Direction::Down),
        ];
        for (code, direction) in cases {
            assert_eq!(
                Input::from_crossterm_event(key(code), &bar),
                Some(Input::Steer(direction))
            );
        }
    }

    #[test]
    fn quitting() {
        let bar = ButtonBar::new();
        assert_eq!(Input::from_crossterm_event(key(KeyCode::Esc), &bar), Some(Input::Quit));
        assert_eq!(
            Input::from_crossterm_event(key(KeyCode::Char('q')), &bar),
            Some(Input::Quit)
        );
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(Input::from_crossterm_event(ctrl_c, &bar), Some(Input::Quit));
        assert_eq!(Input::from_crossterm_event(key(KeyCode::Char('c')), &bar), None);
    }

    fn key_of_kind(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn releases_are_ignored() {
        let bar = ButtonBar::new();
        let release = key_of_kind(KeyCode::Left, KeyEventKind::Release);
        assert_eq!(Input::from_crossterm_event(release, &bar), None);
    }

    #[test]
    fn held_keys_only_repeat_steering() {
        let bar = ButtonBar::new();
        assert_eq!(
            Input::from_crossterm_event(key_of_kind(KeyCode::Up, KeyEventKind::Repeat), &bar),
            Some(Input::Steer(Direction::Up))
        );
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            assert_eq!(
                Input::from_crossterm_event(key_of_kind(code, KeyEventKind::Repeat), &bar),
                None
            );
        }
    }

    #[test]
    fn clicks() {
        let bar = ButtonBar::new();
        assert_eq!(
            Input::from_crossterm_event(click(2, BUTTON_ROW), &bar),
            Some(Input::Steer(Direction::Left))
        );
        assert_eq!(
            Input::from_crossterm_event(click(29, BUTTON_ROW), &bar),
            Some(Input::Steer(Direction::Down))
        );
        assert_eq!(Input::from_crossterm_event(click(2, CANVAS_TOP), &bar), None);
        assert_eq!(
            Input::from_crossterm_event(Event::Resize(80, 24), &bar),
            Some(Input::Redraw)
        );
    }
}
