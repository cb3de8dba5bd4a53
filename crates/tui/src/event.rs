//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. The same key means different things depending
//! on what is open, so mapping is done per [`InputMode`].

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use tracker_protocol::Message;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Which key map is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Board navigation and card actions.
    #[default]
    Board,
    /// The add/edit card form has focus.
    Form,
    /// The import path prompt has focus.
    Prompt,
    /// A yes/no confirmation is pending.
    Confirm,
}

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
///
/// Returns `None` if the event is not handled in `mode`.
#[must_use]
pub fn event_to_message(event: &Event, mode: InputMode) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => match mode {
            InputMode::Board => key_to_message(*key),
            InputMode::Form => key_to_form_message(*key),
            InputMode::Prompt => key_to_prompt_message(*key),
            InputMode::Confirm => key_to_confirm_message(*key),
        },
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// Only the left button is handled. A press on a card, drag events while
/// the button is held, and a release over another column make a drag.
#[must_use]
fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::PressAt {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::Drag(MouseButton::Left) => Some(Message::DragTo {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::Up(MouseButton::Left) => Some(Message::ReleaseAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

fn is_ctrl(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}

/// Converts a key event on the board to an application message.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Clear selection |
/// | `←` `→` `↑` `↓` | Navigate |
/// | `Shift+←` `Shift+→` | Move card to adjacent column |
/// | `Enter` or `Space` | Edit selected card |
/// | `n` | New card |
/// | `d` or `Delete` | Delete selected card |
/// | `f` | Cycle project filter |
/// | `e` | Export |
/// | `i` | Import |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl(key, 'c') {
        return Some(Message::Quit);
    }

    if key.modifiers.contains(KeyModifiers::SHIFT) {
        match key.code {
            KeyCode::Left => return Some(Message::MoveCardLeft),
            KeyCode::Right => return Some(Message::MoveCardRight),
            _ => {}
        }
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Select),

        KeyCode::Char('n') => Some(Message::NewCard),
        KeyCode::Char('d') | KeyCode::Delete => Some(Message::DeleteCard),
        KeyCode::Char('f') => Some(Message::CycleFilter),
        KeyCode::Char('e') => Some(Message::Export),
        KeyCode::Char('i') => Some(Message::StartImport),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a key event to a card form message.
///
/// # Key Bindings (Form Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Tab` / `Down` | Next field (Tab completes the project first) |
/// | `Shift+Tab` / `Up` | Previous field |
/// | `←` `→` | Move cursor, or change status |
/// | `Enter` | Save |
/// | `Esc` or `Ctrl+Q` | Cancel |
/// | `Ctrl+D` | Delete the card being edited |
/// | Any char | Input |
#[must_use]
pub fn key_to_form_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl(key, 'c') {
        return Some(Message::Quit);
    }
    if is_ctrl(key, 'q') {
        return Some(Message::Cancel);
    }
    if is_ctrl(key, 'd') {
        return Some(Message::DeleteCard);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Cancel),
        KeyCode::Enter => Some(Message::Submit),
        KeyCode::Tab | KeyCode::Down => Some(Message::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(Message::PrevField),
        KeyCode::Left => Some(Message::FieldLeft),
        KeyCode::Right => Some(Message::FieldRight),
        KeyCode::Backspace => Some(Message::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Message::Input { ch })
        }
        _ => None,
    }
}

/// Converts a key event to an import prompt message.
#[must_use]
pub fn key_to_prompt_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl(key, 'c') {
        return Some(Message::Quit);
    }
    if is_ctrl(key, 'q') {
        return Some(Message::Cancel);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Cancel),
        KeyCode::Enter => Some(Message::Submit),
        KeyCode::Left => Some(Message::FieldLeft),
        KeyCode::Right => Some(Message::FieldRight),
        KeyCode::Backspace => Some(Message::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Message::Input { ch })
        }
        _ => None,
    }
}

/// Converts a key event to a confirmation message.
///
/// `y` or `Enter` confirms; `n` or `Esc` declines.
#[must_use]
pub fn key_to_confirm_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl(key, 'c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Message::Confirm),
        KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Message::Deny),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn make_mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn quit_works_in_every_mode() {
        let ctrl_c = make_key_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_message(ctrl_c), Some(Message::Quit));
        assert_eq!(key_to_form_message(ctrl_c), Some(Message::Quit));
        assert_eq!(key_to_prompt_message(ctrl_c), Some(Message::Quit));
        assert_eq!(key_to_confirm_message(ctrl_c), Some(Message::Quit));
    }

    #[test]
    fn plain_q_does_not_quit() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('q'))), None);
    }

    #[test]
    fn board_navigation_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Left)),
            Some(Message::NavigateLeft)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Right)),
            Some(Message::NavigateRight)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Up)),
            Some(Message::NavigateUp)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Down)),
            Some(Message::NavigateDown)
        );
    }

    #[test]
    fn board_move_keys() {
        assert_eq!(
            key_to_message(make_key_with_modifiers(KeyCode::Left, KeyModifiers::SHIFT)),
            Some(Message::MoveCardLeft)
        );
        assert_eq!(
            key_to_message(make_key_with_modifiers(KeyCode::Right, KeyModifiers::SHIFT)),
            Some(Message::MoveCardRight)
        );
    }

    #[test]
    fn board_action_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('n'))),
            Some(Message::NewCard)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('d'))),
            Some(Message::DeleteCard)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('f'))),
            Some(Message::CycleFilter)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('e'))),
            Some(Message::Export)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('i'))),
            Some(Message::StartImport)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Enter)),
            Some(Message::Select)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('?'))),
            Some(Message::ToggleHelp)
        );
        assert_eq!(key_to_message(make_key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn form_keys() {
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Char('n'))),
            Some(Message::Input { ch: 'n' })
        );
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Tab)),
            Some(Message::NextField)
        );
        assert_eq!(
            key_to_form_message(make_key(KeyCode::BackTab)),
            Some(Message::PrevField)
        );
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Enter)),
            Some(Message::Submit)
        );
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Esc)),
            Some(Message::Cancel)
        );
        assert_eq!(
            key_to_form_message(make_key_with_modifiers(
                KeyCode::Char('q'),
                KeyModifiers::CONTROL
            )),
            Some(Message::Cancel)
        );
        assert_eq!(
            key_to_form_message(make_key_with_modifiers(
                KeyCode::Char('d'),
                KeyModifiers::CONTROL
            )),
            Some(Message::DeleteCard)
        );
        assert_eq!(
            key_to_form_message(make_key_with_modifiers(
                KeyCode::Char('x'),
                KeyModifiers::CONTROL
            )),
            None
        );
    }

    #[test]
    fn prompt_keys() {
        assert_eq!(
            key_to_prompt_message(make_key(KeyCode::Char('/'))),
            Some(Message::Input { ch: '/' })
        );
        assert_eq!(
            key_to_prompt_message(make_key(KeyCode::Enter)),
            Some(Message::Submit)
        );
        assert_eq!(key_to_prompt_message(make_key(KeyCode::Tab)), None);
    }

    #[test]
    fn confirm_keys() {
        assert_eq!(
            key_to_confirm_message(make_key(KeyCode::Char('y'))),
            Some(Message::Confirm)
        );
        assert_eq!(
            key_to_confirm_message(make_key(KeyCode::Char('n'))),
            Some(Message::Deny)
        );
        assert_eq!(
            key_to_confirm_message(make_key(KeyCode::Esc)),
            Some(Message::Deny)
        );
        assert_eq!(key_to_confirm_message(make_key(KeyCode::Char('d'))), None);
    }

    #[test]
    fn mouse_press_and_release() {
        assert_eq!(
            mouse_to_message(&make_mouse(MouseEventKind::Down(MouseButton::Left), 10, 5)),
            Some(Message::PressAt { column: 10, row: 5 })
        );
        assert_eq!(
            mouse_to_message(&make_mouse(MouseEventKind::Up(MouseButton::Left), 30, 6)),
            Some(Message::ReleaseAt { column: 30, row: 6 })
        );
        assert_eq!(
            mouse_to_message(&make_mouse(MouseEventKind::Drag(MouseButton::Left), 20, 7)),
            Some(Message::DragTo { column: 20, row: 7 })
        );
        assert_eq!(
            mouse_to_message(&make_mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)),
            None
        );
        assert_eq!(
            mouse_to_message(&make_mouse(MouseEventKind::Moved, 1, 1)),
            None
        );
    }

    #[test]
    fn event_to_message_uses_mode() {
        let event = Event::Key(make_key(KeyCode::Char('n')));
        assert_eq!(
            event_to_message(&event, InputMode::Board),
            Some(Message::NewCard)
        );
        assert_eq!(
            event_to_message(&event, InputMode::Form),
            Some(Message::Input { ch: 'n' })
        );
        assert_eq!(
            event_to_message(&event, InputMode::Confirm),
            Some(Message::Deny)
        );
    }

    #[test]
    fn event_to_message_ignores_key_release_and_resize() {
        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char('n'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(event_to_message(&release, InputMode::Board), None);
        assert_eq!(event_to_message(&Event::Resize(80, 24), InputMode::Board), None);
    }
}
