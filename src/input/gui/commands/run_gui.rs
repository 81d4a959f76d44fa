use std::marker::PhantomData;

use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoopBuilder;
use winit::window::{Window, WindowBuilder};

use crate::controllers::interactive::InteractiveController;
use crate::core::fractals::burning_ship::colour_map::GrayscaleBands;
use crate::core::fractals::burning_ship::config::BurningShipConfig;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
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
            _phantom: PhantomData,
        }
    }

    /// Opens the window and runs the event loop until it is closed.
    pub fn execute(&self) -> Result<(), GuiError> {
        let config = BurningShipConfig::default();
        let canvas = config.canvas;

        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Burning Ship Explorer")
                .with_inner_size(LogicalSize::new(
                    f64::from(canvas.width()),
                    f64::from(canvas.height()),
                ))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter: P = self
            .presenter_factory
            .build(window, event_loop_proxy, canvas)?;
        let controller = InteractiveController::new(
            config,
            Box::new(GrayscaleBands::new(config.max_iterations)),
            presenter.share_adapter(),
        )?;
        let mut app = GuiApp::new(window, &event_loop, presenter, controller);
        let mut redraw_pending = true;
        let mut failure: Option<GuiError> = None;

        log::info!(
            "Window open: {}x{} canvas, {} iterations",
            canvas.width(),
            canvas.height(),
            config.max_iterations
        );

        event_loop.run(|event, elwt| match event {
            Event::UserEvent(GuiEvent::RenderReady) => {
                if app.on_render_ready() {
                    redraw_pending = true;
                }
            }
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);

                if egui_repaint {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        app.controller.shutdown();
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        let egui_output = app.update_ui(window);
                        app.submit_render_request_if_needed();

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
                            failure = Some(err);
                            app.controller.shutdown();
                            elwt.exit();
                        }
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        app.on_cursor_moved(*position);
                    }
                    WindowEvent::MouseWheel { delta, .. } if !egui_consumed => {
                        if app.on_mouse_wheel(*delta) {
                            redraw_pending = true;
                        }
                    }
                    WindowEvent::KeyboardInput { event, .. } if !egui_consumed => {
                        if app.on_key(event) {
                            redraw_pending = true;
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(err) = app.resize(size.width, size.height) {
                            log::error!("resize error: {err}");
                            failure = Some(err);
                            app.controller.shutdown();
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.scale_factor = *scale_factor;
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        if let Err(err) = app.resize(size.width, size.height) {
                            log::error!("resize error: {err}");
                            failure = Some(err);
                            app.controller.shutdown();
                            elwt.exit();
                        }
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

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
