//! Minimal terminal runtime: a timed event loop driving an [`App`].

pub use self::{app::App, event_loop::RenderMode, runner::Tui};

mod app;
mod event;
mod event_loop;
mod runner;
