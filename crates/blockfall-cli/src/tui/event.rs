use crossterm::event::Event as CrosstermEvent;

/// What the event loop hands to the runner next.
#[derive(Debug, Clone, derive_more::From)]
pub(super) enum TuiEvent {
    /// The gravity interval elapsed.
    Tick,
    /// The screen should be redrawn.
    Render,
    /// Key press, mouse event, resize and so on.
    Terminal(CrosstermEvent),
}
