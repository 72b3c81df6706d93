pub mod mesh;
pub mod oval;
pub mod point;
pub mod primitives;
pub mod rotation;
pub mod triangles;
pub mod vector;

/// Geometric precision
pub const EPS: f64 = 1e-13;

/// Approximate scalar comparison for f64.
pub trait IsClose {
    fn is_close(&self, other: f64) -> bool;
}

impl IsClose for f64 {
    fn is_close(&self, other: f64) -> bool {
        (self - other).abs() < EPS
    }
}
