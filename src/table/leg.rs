//! Table leg shapes.
//!
//! A single leg acts as a template: the assembly step repositions it with
//! [`Leg::set_center`] for every placement and generates one mesh per copy.

use crate::Point;
use crate::geom::mesh::Mesh;
use crate::geom::primitives::{box_mesh, cylinder};
use crate::table::Shape;

/// Rectangular (or square) leg post.
#[derive(Debug, Clone)]
pub struct RectLeg {
    width: f64,
    length: f64,
    height: f64,
    center: Point,
}

impl RectLeg {
    pub fn new(width: f64, length: f64, height: f64, center: Option<Point>) -> Self {
        Self {
            width,
            length,
            height,
            center: center.unwrap_or(Point::origin()),
        }
    }

    /// Square leg: equal width and length.
    pub fn square(width: f64, height: f64, center: Option<Point>) -> Self {
        Self::new(width, width, height, center)
    }
}

/// Cylindrical leg post.
#[derive(Debug, Clone)]
pub struct CircleLeg {
    radius: f64,
    height: f64,
    center: Point,
}

impl CircleLeg {
    pub fn new(radius: f64, height: f64, center: Option<Point>) -> Self {
        Self {
            radius,
            height,
            center: center.unwrap_or(Point::origin()),
        }
    }
}

/// A leg of one of the supported shapes.
#[derive(Debug, Clone)]
pub enum Leg {
    Rect(RectLeg),
    Circle(CircleLeg),
}

impl Leg {
    pub fn shape(&self) -> Shape {
        match self {
            Leg::Rect(_) => Shape::Rectangle,
            Leg::Circle(_) => Shape::Circle,
        }
    }

    pub fn height(&self) -> f64 {
        match self {
            Leg::Rect(l) => l.height,
            Leg::Circle(l) => l.height,
        }
    }

    pub fn center(&self) -> Point {
        match self {
            Leg::Rect(l) => l.center,
            Leg::Circle(l) => l.center,
        }
    }

    /// Half of the largest planar extent, used as the placement clearance
    /// contribution of the leg itself.
    pub fn max_dist(&self) -> f64 {
        match self {
            Leg::Rect(l) => (l.width / 2.).max(l.length / 2.),
            Leg::Circle(l) => l.radius,
        }
    }

    /// Repositions the leg template.
    pub fn set_center(&mut self, center: Point) {
        match self {
            Leg::Rect(l) => l.center = center,
            Leg::Circle(l) => l.center = center,
        }
    }

    /// Generates the leg mesh at its current center.
    pub fn mesh(&self) -> Mesh {
        match self {
            Leg::Rect(l) => box_mesh(l.width, l.length, l.height, l.center),
            Leg::Circle(l) => cylinder(l.radius, l.height, l.center),
        }
    }
}
