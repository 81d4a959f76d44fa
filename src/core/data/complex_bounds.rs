/// Axis-aligned region of the complex plane shown on the canvas.
///
/// `top` is the greatest imaginary part and maps to pixel row 0.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexBounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}
