/// User events delivered to the winit event loop from other threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiEvent {
    /// The render worker published a frame or an error for the presenter.
    /// The loop still has to ask the presenter whether anything new is
    /// worth a redraw.
    RenderReady,
}
