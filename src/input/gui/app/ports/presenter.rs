use std::sync::Arc;
use std::time::Duration;

use egui::Context as EguiContext;
use winit::dpi::PhysicalPosition;

use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::point::Point;
use crate::input::gui::errors::GuiError;

pub trait GuiPresenterPort {
    /// Port handed to the interactive controller's worker thread.
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;

    /// Pulls the latest render event, if any. Returns true when the window
    /// needs a redraw.
    fn poll_render_event(&mut self) -> bool;

    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext)
    -> Result<(), GuiError>;

    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), GuiError>;

    fn canvas(&self) -> CanvasSize;

    /// Canvas pixel under a window position, clamped to the canvas.
    fn cursor_to_pixel(&self, position: PhysicalPosition<f64>) -> Point;

    fn last_presented_generation(&self) -> u64;

    fn last_render_duration(&self) -> Option<Duration>;

    fn last_error_message(&self) -> Option<&str>;
}
