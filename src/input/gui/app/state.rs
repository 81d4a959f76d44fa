use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::point::Point;
use crate::core::viewport::errors::ViewportError;
use crate::core::viewport::view_state::ViewState;

/// Window-independent state of the GUI: the current view, the cursor and
/// what was last sent to the render worker.
pub struct GuiAppState {
    pub view: ViewState,
    pub cursor: Point,
    last_submitted_view: Option<ViewState>,
    pub latest_submitted_generation: u64,
}

impl GuiAppState {
    #[must_use]
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            view: ViewState::default(),
            cursor: Point {
                x: (canvas.width() / 2) as i32,
                y: (canvas.height() / 2) as i32,
            },
            last_submitted_view: None,
            latest_submitted_generation: 0,
        }
    }

    #[must_use]
    pub fn should_submit(&self) -> bool {
        self.last_submitted_view != Some(self.view)
    }

    pub fn record_submission(&mut self, view: ViewState, generation: u64) {
        self.last_submitted_view = Some(view);
        self.latest_submitted_generation = generation;
    }

    pub fn move_cursor(&mut self, cursor: Point) {
        log::trace!("cursor at ({}, {})", cursor.x, cursor.y);
        self.cursor = cursor;
    }

    /// Zooms about the last known cursor position. Returns whether the view
    /// changed.
    pub fn apply_wheel(
        &mut self,
        deflection: f64,
        canvas: CanvasSize,
    ) -> Result<bool, ViewportError> {
        self.view.apply_wheel(deflection, self.cursor, canvas)
    }

    pub fn reset_view(&mut self) {
        log::info!("view reset");
        self.view.reset();
    }
}
