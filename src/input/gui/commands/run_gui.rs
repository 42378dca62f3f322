use std::marker::PhantomData;

use thiserror::Error;
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoopBuilder;
use winit::window::{Window, WindowBuilder};

use crate::controllers::surface::LaunchError;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH, MandelbrotConfig,
};
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::events::GuiEvent;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] OsError),
    #[error("failed to create pixels surface: {0}")]
    Pixels(#[from] pixels::Error),
    #[error(transparent)]
    Launch(#[from] LaunchError),
}

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: MandelbrotConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            config: MandelbrotConfig::default(),
            _phantom: PhantomData,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: MandelbrotConfig) -> Self {
        self.config = config;
        self
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), GuiError> {
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Explorer")
                .with_inner_size(LogicalSize::new(
                    f64::from(DEFAULT_SURFACE_WIDTH),
                    f64::from(DEFAULT_SURFACE_HEIGHT),
                ))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window, event_loop_proxy)?;
        let mut app = GuiApp::new(window, &event_loop, presenter, &self.config)?;
        let mut redraw_pending = true;

        log::info!(
            "window open at {}x{}",
            window.inner_size().width,
            window.inner_size().height
        );

        event_loop.run(|event, elwt| match event {
            Event::UserEvent(GuiEvent::Wake) => {
                redraw_pending = true;
            }
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                if app.handle_window_event(window, event) {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        app.shutdown();
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        let egui_output = app.update_ui(window);

                        app.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        if egui_output
                            .viewport_output
                            .values()
                            .any(|v| v.repaint_delay.is_zero())
                        {
                            redraw_pending = true;
                        }

                        if let Err(err) = app.render(egui_output) {
                            log::error!("render error: {err}");
                            app.shutdown();
                            elwt.exit();
                        }
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.scale_factor = *scale_factor;
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        app.resize(size.width, size.height);
                        redraw_pending = true;
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}
