use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::controllers::explorer::{ExplorerController, InputEvent, PointerPosition};
use crate::controllers::interactive::InteractiveController;
use crate::controllers::surface::LaunchError;
use crate::core::data::surface::SurfaceSize;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::mandelbrot::frame_renderer::FrameRenderer;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::mapping::{is_capturable, map_window_event, pointer_position};

const CONTROLS: [(&str, &str); 4] = [
    ("Drag", "pan"),
    ("Wheel", "zoom toward cursor"),
    ("+ / -", "more / fewer iterations"),
    ("R", "reset view"),
];

pub struct GuiApp<T: GuiPresenterPort> {
    pub scale_factor: f64,
    presenter: T,
    pub explorer: ExplorerController<InteractiveController>,
    cursor: PointerPosition,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        config: &MandelbrotConfig,
    ) -> Result<Self, LaunchError> {
        let size = window.inner_size();
        let surface = SurfaceSize::new(size.width, size.height)?;
        let renderer = FrameRenderer::from_config(config)?;
        let view = ViewState::from_config(config)?;

        let controller = InteractiveController::new(renderer, presenter.share_adapter());
        let mut explorer = ExplorerController::new(view, surface, controller)
            .with_zoom_factors(config.zoom_in_factor, config.zoom_out_factor);
        explorer.refresh();

        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        Ok(Self {
            scale_factor,
            presenter,
            explorer,
            cursor: PointerPosition::new(0.0, 0.0),
            egui_ctx,
            egui_state,
        })
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        match SurfaceSize::new(width, height) {
            Ok(surface) => {
                self.presenter.resize(width, height);
                self.explorer.handle_event(InputEvent::Resized(surface));
            }
            Err(err) => log::debug!("not rendering while minimised: {err}"),
        }
    }

    pub fn shutdown(&mut self) {
        log::info!("shutting down render worker");
        self.explorer.frames_mut().shutdown();
    }

    /// Routes a window event to egui, then to the explorer unless egui claimed it.
    /// Returns whether a redraw is needed.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(window, event);

        if let WindowEvent::Resized(size) = event {
            self.resize(size.width, size.height);
            return true;
        }

        if let WindowEvent::CursorMoved { position, .. } = event {
            self.cursor = pointer_position(*position);
        }

        let Some(input) = map_window_event(event, self.cursor) else {
            return response.repaint;
        };

        if response.consumed && is_capturable(&input) {
            return response.repaint;
        }

        self.explorer.handle_event(input) || response.repaint
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        self.presenter.poll_render_event();

        let raw_input = self.egui_state.take_egui_input(window);
        let overlay = self
            .presenter
            .presented_view()
            .unwrap_or(*self.explorer.view())
            .overlay_text();
        let render_duration = self.presenter.last_render_duration();
        let error_message = self.presenter.last_error_message().map(str::to_owned);
        let mut pressed_keys = Vec::new();

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Mandelbrot Explorer")
                .default_pos([10.0, 10.0])
                .resizable(false)
                .show(ctx, |ui| {
                    for line in overlay.lines() {
                        ui.monospace(line);
                    }

                    if let Some(duration) = render_duration {
                        ui.label(format!("Last render: {} ms", duration.as_millis()));
                    }

                    if let Some(message) = &error_message {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }

                    ui.separator();
                    ui.horizontal(|ui| {
                        if ui.button("-").clicked() {
                            pressed_keys.push('-');
                        }
                        if ui.button("+").clicked() {
                            pressed_keys.push('+');
                        }
                        if ui.button("Reset view").clicked() {
                            pressed_keys.push('r');
                        }
                    });

                    ui.collapsing("Controls", |ui| {
                        egui::Grid::new("controls").show(ui, |ui| {
                            for (input, action) in CONTROLS {
                                ui.strong(input);
                                ui.label(action);
                                ui.end_row();
                            }
                        });
                    });
                });
        });

        for key in pressed_keys {
            self.explorer.handle_event(InputEvent::Key(key));
        }

        output
    }
}
