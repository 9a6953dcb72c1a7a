// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
                       MouseButton, MouseEvent, MouseEventKind};

/// Terminal size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub col_width: u16,
    pub row_height: u16,
}

/// Convenience constructor for [`Size`].
#[must_use]
pub fn size(col_width: u16, row_height: u16) -> Size { Size { col_width, row_height } }

/// The subset of terminal input the list view reacts to. Key releases and repeats,
/// focus changes, and paste events are filtered out before they get here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Keyboard(KeyPress),
    /// Left button press at `(col, row)`, zero based screen coordinates.
    Click { col: u16, row: u16 },
    ScrollUp,
    ScrollDown,
    Resize(Size),
}

/// A key press, stripped down to what the app binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Char(char),
    Ctrl(char),
    Enter,
    Esc,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
}

impl InputEvent {
    /// Converts a raw crossterm [`Event`]. Returns `None` for events the app ignores.
    #[must_use]
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key_event) => KeyPress::from_key_event(key_event).map(Self::Keyboard),
            Event::Mouse(mouse_event) => Self::from_mouse_event(mouse_event),
            Event::Resize(col_width, row_height) => Some(Self::Resize(size(col_width, row_height))),
            _ => None,
        }
    }

    fn from_mouse_event(mouse_event: MouseEvent) -> Option<Self> {
        match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Self::Click {
                col: mouse_event.column,
                row: mouse_event.row,
            }),
            MouseEventKind::ScrollUp => Some(Self::ScrollUp),
            MouseEventKind::ScrollDown => Some(Self::ScrollDown),
            _ => None,
        }
    }
}

impl KeyPress {
    #[must_use]
    pub fn from_key_event(key_event: KeyEvent) -> Option<Self> {
        if key_event.kind != KeyEventKind::Press {
            return None;
        }
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        Some(match key_event.code {
            KeyCode::Char(ch) if ctrl => Self::Ctrl(ch),
            KeyCode::Char(ch) => Self::Char(ch),
            KeyCode::Enter => Self::Enter,
            KeyCode::Esc => Self::Esc,
            KeyCode::Up => Self::Up,
            KeyCode::Down => Self::Down,
            KeyCode::PageUp => Self::PageUp,
            KeyCode::PageDown => Self::PageDown,
            KeyCode::Home => Self::Home,
            KeyCode::End => Self::End,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use pretty_assertions::assert_eq;

    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_left_click_is_converted() {
        let it = InputEvent::from_crossterm(mouse(MouseEventKind::Down(MouseButton::Left), 7, 3));
        assert_eq!(it, Some(InputEvent::Click { col: 7, row: 3 }));
    }

    #[test]
    fn test_other_buttons_and_moves_are_ignored() {
        assert_eq!(
            InputEvent::from_crossterm(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)),
            None
        );
        assert_eq!(
            InputEvent::from_crossterm(mouse(MouseEventKind::Moved, 1, 1)),
            None
        );
        assert_eq!(
            InputEvent::from_crossterm(mouse(MouseEventKind::Up(MouseButton::Left), 1, 1)),
            None
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(InputEvent::from_crossterm(release), None);
    }

    #[test]
    fn test_ctrl_char() {
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(
            InputEvent::from_crossterm(ctrl_c),
            Some(InputEvent::Keyboard(KeyPress::Ctrl('c')))
        );
    }

    #[test]
    fn test_resize() {
        assert_eq!(
            InputEvent::from_crossterm(Event::Resize(80, 24)),
            Some(InputEvent::Resize(size(80, 24)))
        );
    }
}
