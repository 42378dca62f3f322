use crate::controllers::explorer::input::{InputEvent, PointerPosition, WheelDirection};
use crate::controllers::explorer::ports::frame_request::FrameRequestPort;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::surface::SurfaceSize;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::mandelbrot::mandelbrot_config::{ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};

#[derive(Debug, Copy, Clone, PartialEq)]
enum DragState {
    Idle,
    Dragging { last: PointerPosition },
}

pub struct ExplorerController<R: FrameRequestPort> {
    view: ViewState,
    surface: SurfaceSize,
    drag: DragState,
    zoom_in_factor: f64,
    zoom_out_factor: f64,
    frames: R,
}

impl<R: FrameRequestPort> ExplorerController<R> {
    pub fn new(view: ViewState, surface: SurfaceSize, frames: R) -> Self {
        Self {
            view,
            surface,
            drag: DragState::Idle,
            zoom_in_factor: ZOOM_IN_FACTOR,
            zoom_out_factor: ZOOM_OUT_FACTOR,
            frames,
        }
    }

    #[must_use]
    pub fn with_zoom_factors(mut self, zoom_in_factor: f64, zoom_out_factor: f64) -> Self {
        self.zoom_in_factor = zoom_in_factor;
        self.zoom_out_factor = zoom_out_factor;
        self
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    #[must_use]
    pub fn frames(&self) -> &R {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut R {
        &mut self.frames
    }

    /// Requests a frame of the current view without changing it.
    pub fn refresh(&mut self) {
        self.frames
            .request_frame(RenderRequest::new(self.view, self.surface));
    }

    /// Applies one input event. Returns `true` if a new frame was requested.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        log::trace!("input event: {event:?}");

        match event {
            InputEvent::PointerPressed(position) => {
                self.drag = DragState::Dragging { last: position };
                false
            }
            InputEvent::PointerMoved(position) => match self.drag {
                DragState::Dragging { last } => {
                    self.drag = DragState::Dragging { last: position };
                    self.view.pan(position.x - last.x, position.y - last.y);
                    self.refresh();
                    true
                }
                DragState::Idle => false,
            },
            InputEvent::PointerReleased => {
                self.drag = DragState::Idle;
                false
            }
            InputEvent::Wheel {
                position,
                direction,
            } => {
                let factor = match direction {
                    WheelDirection::In => self.zoom_in_factor,
                    WheelDirection::Out => self.zoom_out_factor,
                };

                self.view
                    .zoom_toward_point(position.x, position.y, self.surface, factor);
                self.refresh();
                true
            }
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Resized(surface) => {
                self.surface = surface;
                self.refresh();
                true
            }
        }
    }

    fn handle_key(&mut self, key: char) -> bool {
        match key {
            '+' | '=' => self.view.increase_iterations(),
            '-' => self.view.decrease_iterations(),
            'r' => {
                log::info!("resetting view");
                self.view.reset();
            }
            _ => return false,
        }

        self.refresh();
        true
    }
}
