pub mod canvas_size;
pub mod colour;
pub mod complex;
pub mod complex_bounds;
pub mod pixel_buffer;
pub mod point;
