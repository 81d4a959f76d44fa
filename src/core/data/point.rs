/// A pixel position. Signed so that cursor positions outside the canvas can
/// be represented and rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
