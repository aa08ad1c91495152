use blockfall_engine::{GameEvent, Phase};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::view::widgets::KeyBinding;

/// What a key press asks the game loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Game(GameEvent),
    Quit,
}

/// Translates a key press into an action.
///
/// Enter and Space mean "start" on the menu and "play again" after game over. The
/// engine decides whether the resulting event applies in the current phase.
pub(crate) fn action_for_key(key: &KeyEvent, phase: Phase) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit);
    }
    let event = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Left | KeyCode::Char('a') => GameEvent::MoveLeft,
        KeyCode::Right | KeyCode::Char('d') => GameEvent::MoveRight,
        KeyCode::Down | KeyCode::Char('s') => GameEvent::SoftDrop,
        KeyCode::Up | KeyCode::Char('w') => GameEvent::RotateCw,
        KeyCode::Enter | KeyCode::Char(' ') => match phase {
            Phase::Menu => GameEvent::Start,
            Phase::GameOver => GameEvent::Restart,
            Phase::Playing => return None,
        },
        _ => return None,
    };
    Some(Action::Game(event))
}

pub(crate) const MENU_BINDINGS: &[KeyBinding] = &[(&["Enter", "Space"], "Start"), (&["Q"], "Quit")];

pub(crate) const PLAYING_BINDINGS: &[KeyBinding] = &[
    (&["←", "A"], "Left"),
    (&["→", "D"], "Right"),
    (&["↓", "S"], "Drop"),
    (&["↑", "W"], "Rotate"),
    (&["Q"], "Quit"),
];

pub(crate) const GAME_OVER_BINDINGS: &[KeyBinding] =
    &[(&["Enter", "Space"], "Play again"), (&["Q"], "Quit")];

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_movement_keys() {
        let cases = [
            (KeyCode::Left, GameEvent::MoveLeft),
            (KeyCode::Char('a'), GameEvent::MoveLeft),
            (KeyCode::Right, GameEvent::MoveRight),
            (KeyCode::Char('d'), GameEvent::MoveRight),
            (KeyCode::Down, GameEvent::SoftDrop),
            (KeyCode::Char('s'), GameEvent::SoftDrop),
            (KeyCode::Up, GameEvent::RotateCw),
            (KeyCode::Char('w'), GameEvent::RotateCw),
        ];
        for (code, event) in cases {
            assert_eq!(
                action_for_key(&press(code), Phase::Playing),
                Some(Action::Game(event)),
                "{code:?}"
            );
        }
    }

    #[test]
    fn test_confirm_depends_on_phase() {
        for code in [KeyCode::Enter, KeyCode::Char(' ')] {
            assert_eq!(
                action_for_key(&press(code), Phase::Menu),
                Some(Action::Game(GameEvent::Start))
            );
            assert_eq!(
                action_for_key(&press(code), Phase::GameOver),
                Some(Action::Game(GameEvent::Restart))
            );
            assert_eq!(action_for_key(&press(code), Phase::Playing), None);
        }
    }

    #[test]
    fn test_quit_keys() {
        for phase in [Phase::Menu, Phase::Playing, Phase::GameOver] {
            for code in [KeyCode::Char('q'), KeyCode::Esc] {
                assert_eq!(action_for_key(&press(code), phase), Some(Action::Quit));
            }
            let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert_eq!(action_for_key(&ctrl_c, phase), Some(Action::Quit));
        }
    }

    #[test]
    fn test_ignored_keys() {
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(&ctrl_a, Phase::Playing), None);
        assert_eq!(action_for_key(&press(KeyCode::Char('x')), Phase::Playing), None);

        let mut release = press(KeyCode::Left);
        release.kind = KeyEventKind::Release;
        assert_eq!(action_for_key(&release, Phase::Playing), None);
    }
}
