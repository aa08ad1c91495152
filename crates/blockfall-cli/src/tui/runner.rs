use std::{
    io::{self, Write as _},
    time::Duration,
};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use ratatui::DefaultTerminal;

use crate::tui::{
    App,
    event::TuiEvent,
    event_loop::{EventLoop, RenderMode},
};

/// Terminal runtime.
///
/// Owns the event loop and feeds an [`App`] ticks, redraws and terminal events until it
/// asks to exit.
#[derive(Default, Debug)]
pub struct Tui {
    events: EventLoop,
    mouse_capture: bool,
}

impl Tui {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the gravity tick interval. `None` stops ticking.
    pub fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.events.set_tick_interval(interval);
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.events.set_render_mode(mode);
    }

    /// Restarts the tick timer so the next tick is a full interval away.
    pub fn reset_tick_timer(&mut self) {
        self.events.reset_tick();
    }

    /// Whether mouse events are reported. Takes effect when [`Self::run`] starts.
    pub fn set_mouse_capture(&mut self, enabled: bool) {
        self.mouse_capture = enabled;
    }

    /// Runs `app` on the alternate screen until [`App::should_exit`] returns true.
    ///
    /// The terminal is restored on return, including on error.
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            let mouse_capture = self.mouse_capture;
            if mouse_capture {
                execute!(io::stdout(), EnableMouseCapture)?;
            }
            let result = self.event_loop(terminal, app);
            if mouse_capture {
                execute!(io::stdout(), DisableMouseCapture)?;
                io::stdout().flush()?;
            }
            result
        })
    }

    fn event_loop<A>(&mut self, terminal: &mut DefaultTerminal, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        while !app.should_exit() {
            match self.events.next()? {
                TuiEvent::Tick => app.update(self),
                TuiEvent::Render => {
                    terminal.draw(|f| app.draw(f))?;
                }
                TuiEvent::Terminal(event) => app.handle_event(self, event),
            }
        }
        Ok(())
    }
}
