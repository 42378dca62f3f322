use std::sync::Arc;
use std::time::Duration;

use egui::Context as EguiContext;

use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::view_state::ViewState;

pub trait GuiPresenterPort {
    /// Takes the newest finished frame or error from the background renderer.
    fn poll_render_event(&mut self);

    /// Draws the frame on screen, then the egui output on top.
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;

    /// Port the background renderer delivers frames through.
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;

    fn resize(&mut self, width: u32, height: u32);

    fn last_render_duration(&self) -> Option<Duration>;

    fn last_error_message(&self) -> Option<&str>;

    /// View of the frame on screen.
    fn presented_view(&self) -> Option<ViewState>;
}
