use std::{cell::Cell, time::Duration};

use blockfall_engine::{Game, GameEvent, Phase};
use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Position, Rect},
};
use tracing::{debug, info};

use crate::{
    command::play::keymap::{self, Action},
    tui::{App, RenderMode, Tui},
    view::screens::{GameOverScreen, MenuScreen, PlayingScreen},
};

/// Connects the terminal runtime to a [`Game`].
///
/// Key presses and button clicks become engine events, and gravity ticks become
/// [`GameEvent::Tick`] while a game is in progress.
#[derive(Debug)]
pub(crate) struct PlayApp {
    game: Game,
    gravity: Duration,
    frame_interval: Duration,
    is_exiting: bool,
    // Size of the last drawn frame, for mapping clicks onto buttons.
    screen_area: Cell<Rect>,
}

impl PlayApp {
    pub(crate) fn new(game: Game, gravity: Duration, frame_interval: Duration) -> Self {
        Self {
            game,
            gravity,
            frame_interval,
            is_exiting: false,
            screen_area: Cell::new(Rect::ZERO),
        }
    }

    pub(crate) fn game(&self) -> &Game {
        &self.game
    }

    fn apply(&mut self, tui: &mut Tui, event: GameEvent) {
        let phase = self.game.phase();
        if let Err(err) = self.game.handle_event(event) {
            debug!(%err, "event had no effect");
            return;
        }
        if matches!(event, GameEvent::Start | GameEvent::Restart) {
            // A fresh piece gets a full gravity interval.
            tui.reset_tick_timer();
        }
        self.log_phase_change(phase);
    }

    fn log_phase_change(&self, before: Phase) {
        let after = self.game.phase();
        if before != after {
            info!(%before, %after, score = self.game.score(), "phase changed");
        }
    }

    fn handle_click(&mut self, tui: &mut Tui, mouse: &MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let area = self.screen_area.get();
        let (button, event) = match self.game.phase() {
            Phase::Menu => (MenuScreen::start_button(area), GameEvent::Start),
            Phase::GameOver => (GameOverScreen::play_again_button(area), GameEvent::Restart),
            Phase::Playing => return,
        };
        if button.contains(Position::new(mouse.column, mouse.row)) {
            self.apply(tui, event);
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_interval(Some(self.gravity));
        tui.set_render_mode(RenderMode::Throttled(self.frame_interval));
        tui.set_mouse_capture(true);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, tui: &mut Tui, event: Event) {
        match event {
            Event::Key(key) => match keymap::action_for_key(&key, self.game.phase()) {
                Some(Action::Game(event)) => self.apply(tui, event),
                Some(Action::Quit) => self.is_exiting = true,
                None => {}
            },
            Event::Mouse(mouse) => self.handle_click(tui, &mouse),
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        self.screen_area.set(area);
        match self.game.phase() {
            Phase::Menu => frame.render_widget(MenuScreen::new(keymap::MENU_BINDINGS), area),
            Phase::Playing => frame.render_widget(
                PlayingScreen::new(&self.game, keymap::PLAYING_BINDINGS),
                area,
            ),
            Phase::GameOver => frame.render_widget(
                GameOverScreen::new(self.game.score(), keymap::GAME_OVER_BINDINGS),
                area,
            ),
        }
    }

    fn update(&mut self, _tui: &mut Tui) {
        if !self.game.phase().is_playing() {
            return;
        }
        let phase = self.game.phase();
        // Ticks only fail outside the playing phase.
        _ = self.game.tick();
        self.log_phase_change(phase);
    }
}
