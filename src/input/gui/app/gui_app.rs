use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::Key;
use winit::window::Window;

use crate::controllers::interactive::InteractiveController;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::GuiAppState;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;

pub struct GuiApp<T: GuiPresenterPort> {
    pub scale_factor: f64,
    presenter: T,
    pub controller: InteractiveController,
    ui_state: GuiAppState,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: InteractiveController,
    ) -> Self {
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        let ui_state = GuiAppState::new(presenter.canvas());

        Self {
            scale_factor,
            presenter,
            controller,
            ui_state,
            egui_ctx,
            egui_state,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), GuiError> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.presenter.resize_surface(width, height)
    }

    /// Returns true when a newly delivered frame or error needs drawing.
    pub fn on_render_ready(&mut self) -> bool {
        self.presenter.poll_render_event()
    }

    pub fn submit_render_request_if_needed(&mut self) {
        if self.ui_state.should_submit() {
            let view = self.ui_state.view;
            let generation = self.controller.submit_request(view);
            self.ui_state.record_submission(view, generation);
        }
    }

    pub fn on_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        let pixel = self.presenter.cursor_to_pixel(position);
        self.ui_state.move_cursor(pixel);
    }

    /// Returns true when the view changed.
    pub fn on_mouse_wheel(&mut self, delta: MouseScrollDelta) -> bool {
        let deflection = match delta {
            MouseScrollDelta::LineDelta(_, y) => f64::from(y),
            MouseScrollDelta::PixelDelta(position) => position.y,
        };

        match self.ui_state.apply_wheel(deflection, self.presenter.canvas()) {
            Ok(changed) => changed,
            Err(err) => {
                log::warn!("ignoring wheel event: {err}");
                false
            }
        }
    }

    /// Returns true when the key press changed the view.
    pub fn on_key(&mut self, event: &KeyEvent) -> bool {
        if event.state != ElementState::Pressed {
            return false;
        }

        match &event.logical_key {
            Key::Character(c) if c.as_str().eq_ignore_ascii_case("r") => {
                self.ui_state.reset_view();
                true
            }
            _ => false,
        }
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let config = self.controller.config();

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Status")
                .default_pos([10.0, 10.0])
                .default_size([240.0, 180.0])
                .show(ctx, |ui| {
                    ui.heading("Burning Ship Explorer");
                    ui.separator();

                    let view = self.ui_state.view;
                    ui.label(format!("Zoom: {:.4}", view.zoom.value()));
                    ui.label(format!(
                        "Origin: {:.6} {:+.6}i",
                        view.origin.real, view.origin.imag
                    ));
                    ui.label(format!("Max iterations: {}", config.max_iterations));

                    if ui.button("Reset view").clicked() {
                        self.ui_state.reset_view();
                    }

                    ui.separator();
                    ui.label(format!(
                        "Canvas: {}x{}",
                        config.canvas.width(),
                        config.canvas.height()
                    ));
                    ui.label(format!(
                        "Generation: {} / {}",
                        self.presenter.last_presented_generation(),
                        self.ui_state.latest_submitted_generation
                    ));
                    if let Some(render_duration) = self.presenter.last_render_duration() {
                        ui.label(format!("Last render: {} ms", render_duration.as_millis()));
                    }
                    if let Some(message) = self.presenter.last_error_message() {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }

                    ui.separator();
                    ui.small("Scroll to zoom at the cursor, R to reset.");
                });
        })
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}
