//! Embedding the explorer in a host-owned drawing surface.
//!
//! [`launch`] is the single entry point a host calls with its [`RenderTarget`];
//! frames are rendered synchronously on the caller's thread and presented
//! before the next event is handled.

mod launch;
pub mod ports;
mod session;

pub use launch::{LaunchError, launch, launch_with_config};
pub use ports::render_target::{OverlayError, RenderTarget};
pub use session::SurfaceSession;
