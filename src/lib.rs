mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use crate::controllers::headless::HeadlessController;
pub use crate::controllers::interactive::InteractiveController;
pub use crate::controllers::interactive::data::frame_data::FrameData;
pub use crate::controllers::interactive::events::render::RenderEvent;
pub use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
pub use crate::core::data::canvas_size::CanvasSize;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::point::Point;
pub use crate::core::fractals::burning_ship::colour_map::GrayscaleBands;
pub use crate::core::fractals::burning_ship::config::BurningShipConfig;
pub use crate::core::fractals::burning_ship::engine::FractalEngine;
pub use crate::core::viewport::view_state::ViewState;
pub use crate::core::viewport::zoom::Zoom;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
