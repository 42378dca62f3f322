/// Integer pixel coordinate on a surface, origin at the top-left corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
