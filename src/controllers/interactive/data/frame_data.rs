use std::time::Duration;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::viewport::view_state::ViewState;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub view: ViewState,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}
