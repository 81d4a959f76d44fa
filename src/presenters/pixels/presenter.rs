use std::sync::Arc;
use std::time::Duration;

use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::PhysicalPosition;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::point::Point;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;

/// Draws rendered frames into a `pixels` framebuffer sized to the canvas,
/// scaled onto the window surface with the egui overlay on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    canvas: CanvasSize,
    surface_width: u32,
    surface_height: u32,
    last_presented_generation: u64,
    last_error_message: Option<String>,
    last_render_duration: Option<Duration>,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        canvas: CanvasSize,
    ) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let mut pixels = Pixels::new(canvas.width(), canvas.height(), surface_texture)?;
        fill_opaque_black(pixels.frame_mut());

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None,
            1,
        );

        log::debug!(
            "pixels surface {}x{} for a {}x{} canvas",
            size.width,
            size.height,
            canvas.width(),
            canvas.height()
        );

        Ok(Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            canvas,
            surface_width: size.width,
            surface_height: size.height,
            last_presented_generation: 0,
            last_error_message: None,
            last_render_duration: None,
        })
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn InteractiveControllerPresenterPort>
    }

    fn poll_render_event(&mut self) -> bool {
        let Some(event) = self.adapter.take_render_event() else {
            return false;
        };

        match event {
            RenderEvent::Frame(frame) => {
                if frame.generation <= self.last_presented_generation {
                    return false;
                }

                if !copy_rgba_frame(frame.pixel_buffer.buffer(), self.pixels.frame_mut()) {
                    log::warn!(
                        "dropping frame {}: {} bytes does not fit a {}x{} framebuffer",
                        frame.generation,
                        frame.pixel_buffer.buffer_size(),
                        self.canvas.width(),
                        self.canvas.height()
                    );
                    return false;
                }

                self.last_presented_generation = frame.generation;
                self.last_render_duration = Some(frame.render_duration);
                self.last_error_message = None;
                true
            }
            RenderEvent::Error(error) => {
                if error.generation < self.last_presented_generation {
                    return false;
                }

                log::error!("render {} failed: {}", error.generation, error.message);
                self.last_error_message = Some(error.message);
                true
            }
        }
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), GuiError> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        let surface_size = [self.surface_width, self.surface_height];
        let egui_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: surface_size,
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })?;

        Ok(())
    }

    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.surface_width = width;
        self.surface_height = height;
        self.pixels.resize_surface(width, height)?;
        Ok(())
    }

    fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    fn cursor_to_pixel(&self, position: PhysicalPosition<f64>) -> Point {
        let (x, y) = self
            .pixels
            .window_pos_to_pixel((position.x as f32, position.y as f32))
            .unwrap_or_else(|outside| self.pixels.clamp_pixel_pos(outside));

        Point {
            x: x as i32,
            y: y as i32,
        }
    }

    fn last_presented_generation(&self) -> u64 {
        self.last_presented_generation
    }

    fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }
}

fn fill_opaque_black(frame: &mut [u8]) {
    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&[0, 0, 0, 0xFF]);
    }
}

/// Copies an RGBA buffer into the framebuffer. Returns false, leaving the
/// framebuffer untouched, when the lengths differ.
fn copy_rgba_frame(src: &[u8], dest: &mut [u8]) -> bool {
    if src.len() != dest.len() {
        return false;
    }

    dest.copy_from_slice(src);
    true
}
