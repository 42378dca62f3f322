//! Interaction state machine for exploring the set.
//!
//! The controller owns the live [`ViewState`](crate::core::data::view_state::ViewState),
//! consumes [`InputEvent`] messages one at a time and asks a [`FrameRequestPort`]
//! for a new frame whenever the view changes.

mod controller;
mod input;
pub mod ports;

pub use controller::ExplorerController;
pub use input::{InputEvent, PointerPosition, WheelDirection};
pub use ports::frame_request::FrameRequestPort;
