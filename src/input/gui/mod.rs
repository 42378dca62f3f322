//! Windowed host for interactive exploration.
//!
//! winit drives the window and event loop, pixels owns the framebuffer and
//! egui draws the HUD on top of it. Window events are translated into
//! explorer input messages; frames are rendered off the UI thread.

mod app;
pub mod commands;
pub mod events;
mod mapping;

pub use app::ports::presenter::GuiPresenterPort;
pub use commands::ports::presenter_factory::GuiPresenterFactoryPort;
pub use commands::run_gui::{GuiError, RunGuiCommand};
pub use events::GuiEvent;
