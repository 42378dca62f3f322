//! Background rendering for interactive exploration.
//!
//! Render requests are queued for a single worker thread which renders only
//! the newest one. Older in-flight work is cancelled and never reported.
//! Completed frames and failures go to an [`InteractiveControllerPresenterPort`].

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use errors::render::RenderError;
pub use events::render::RenderEvent;
pub use ports::presenter::InteractiveControllerPresenterPort;
pub use ports::renderer::InteractiveControllerRendererPort;
