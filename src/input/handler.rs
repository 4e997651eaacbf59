use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::{Direction, Intent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Intent(Intent),
    Restart,
    Quit,
    None,
}

/// Game-intent bindings, evaluated in order with the first match winning.
/// One key event yields at most one intent.
const BINDINGS: &[(KeyCode, Intent)] = &[
    (KeyCode::Left, Intent::Turn(Direction::Left)),
    (KeyCode::Right, Intent::Turn(Direction::Right)),
    (KeyCode::Up, Intent::Turn(Direction::Up)),
    (KeyCode::Down, Intent::Turn(Direction::Down)),
    (KeyCode::Char('a'), Intent::Turn(Direction::Left)),
    (KeyCode::Char('d'), Intent::Turn(Direction::Right)),
    (KeyCode::Char('w'), Intent::Turn(Direction::Up)),
    (KeyCode::Char('s'), Intent::Turn(Direction::Down)),
    (KeyCode::Char(' '), Intent::Grow),
];

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        // Session controls sit outside the rules and outside the table.
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => return KeyAction::Restart,
            _ => {}
        }

        let code = normalize(key.code);
        if let Some(&(_, intent)) = BINDINGS.iter().find(|&&(bound, _)| bound == code) {
            // Held direction keys auto-repeat into extra events, which is
            // wanted; growth must stay a one-shot per press.
            if intent == Intent::Grow && key.kind == KeyEventKind::Repeat {
                return KeyAction::None;
            }
            return KeyAction::Intent(intent);
        }

        KeyAction::None
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold letters to lowercase so WASD works with shift or caps lock held
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn repeat(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Repeat)
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Up)),
            KeyAction::Intent(Intent::Turn(Direction::Up))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Down)),
            KeyAction::Intent(Intent::Turn(Direction::Down))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Left)),
            KeyAction::Intent(Intent::Turn(Direction::Left))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Right)),
            KeyAction::Intent(Intent::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('w'))),
            KeyAction::Intent(Intent::Turn(Direction::Up))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('a'))),
            KeyAction::Intent(Intent::Turn(Direction::Left))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('s'))),
            KeyAction::Intent(Intent::Turn(Direction::Down))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('d'))),
            KeyAction::Intent(Intent::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_uppercase() {
        let handler = InputHandler::new();

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(w_upper),
            KeyAction::Intent(Intent::Turn(Direction::Up))
        );
    }

    #[test]
    fn test_held_direction_repeats() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(repeat(KeyCode::Right)),
            KeyAction::Intent(Intent::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_grow_is_edge_triggered() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char(' '))),
            KeyAction::Intent(Intent::Grow)
        );
        // Holding space must not keep growing.
        assert_eq!(
            handler.handle_key_event(repeat(KeyCode::Char(' '))),
            KeyAction::None
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Char('q'))), KeyAction::Quit);
        let q_upper = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(q_upper), KeyAction::Quit);
        assert_eq!(handler.handle_key_event(press(KeyCode::Esc)), KeyAction::Quit);
    }

    #[test]
    fn test_restart_key() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('r'))),
            KeyAction::Restart
        );
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Char('x'))), KeyAction::None);
    }

    #[test]
    fn test_binding_order_puts_directions_first() {
        // First-match-wins: the four directions outrank the grow binding.
        let grow_index = BINDINGS
            .iter()
            .position(|(_, intent)| *intent == Intent::Grow)
            .unwrap();
        assert_eq!(grow_index, BINDINGS.len() - 1);
    }
}
