use std::sync::Arc;
use std::time::Duration;

use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, PixelsContext, SurfaceTexture};
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::view_state::ViewState;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;
use crate::presenters::pixels::frame_filter::FrameFilter;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    width: u32,
    height: u32,
    has_frame: bool,
    filter: FrameFilter,
    last_error_message: Option<String>,
    last_render_duration: Option<Duration>,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            width: size.width,
            height: size.height,
            has_frame: false,
            filter: FrameFilter::default(),
            last_error_message: None,
            last_render_duration: None,
        })
    }

    fn clear(&mut self) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }
    }

    fn take_render_event(&mut self) {
        let Some(event) = self.adapter.render_event() else {
            return;
        };

        match event {
            RenderEvent::Frame(frame) => {
                if self.filter.accept_frame(&frame, (self.width, self.height)) {
                    self.copy_frame(&frame);
                    self.last_render_duration = Some(frame.render_duration);
                    self.last_error_message = None;
                } else {
                    log::trace!("dropping stale frame {}", frame.generation);
                }
            }
            RenderEvent::Error(error) => {
                if self.filter.accept_error(error.generation) {
                    self.last_error_message = Some(error.to_string());
                }
            }
        }
    }

    fn copy_frame(&mut self, frame: &FrameData) {
        let src = frame.pixel_buffer.buffer();
        let dest = self.pixels.frame_mut();

        if dest.len() != src.len() {
            log::warn!(
                "frame {} is {} bytes, framebuffer is {}",
                frame.generation,
                src.len(),
                dest.len()
            );
            return;
        }

        dest.copy_from_slice(src);
        self.has_frame = true;
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn poll_render_event(&mut self) {
        self.take_render_event();
    }

    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn InteractiveControllerPresenterPort>
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        if !self.has_frame {
            self.clear();
        }

        let pixels_per_point = egui_ctx.pixels_per_point();
        let primitives = egui_ctx.tessellate(egui_output.shapes, pixels_per_point);
        let textures = egui_output.textures_delta;
        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.width, self.height],
            pixels_per_point,
        };
        let egui_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);
            draw_hud(
                egui_renderer,
                encoder,
                render_target,
                context,
                HudFrame {
                    primitives: &primitives,
                    textures: &textures,
                    screen: &screen,
                },
            );
            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.has_frame = false;

        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("failed to resize surface to {width}x{height}: {err}");
        }

        if let Err(err) = self.pixels.resize_buffer(width, height) {
            log::error!("failed to resize buffer to {width}x{height}: {err}");
        }
    }

    fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }

    fn presented_view(&self) -> Option<ViewState> {
        self.filter.presented_view()
    }
}

struct HudFrame<'a> {
    primitives: &'a [egui::ClippedPrimitive],
    textures: &'a egui::TexturesDelta,
    screen: &'a egui_wgpu::ScreenDescriptor,
}

/// Paints egui output over the already scaled fractal frame.
fn draw_hud(
    renderer: &mut EguiRenderer,
    encoder: &mut wgpu::CommandEncoder,
    render_target: &wgpu::TextureView,
    context: &PixelsContext,
    hud: HudFrame<'_>,
) {
    let HudFrame {
        primitives,
        textures,
        screen,
    } = hud;

    for (id, delta) in &textures.set {
        renderer.update_texture(&context.device, &context.queue, *id, delta);
    }

    renderer.update_buffers(&context.device, &context.queue, encoder, primitives, screen);

    {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("hud"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: render_target,
                resolve_target: None,
                ops: wgpu::Operations {
                    // keep the fractal underneath
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            ..Default::default()
        });

        renderer.render(&mut pass, primitives, screen);
    }

    for id in &textures.free {
        renderer.free_texture(id);
    }
}
