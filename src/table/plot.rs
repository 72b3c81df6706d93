//! Tabletop (plot) shapes.

use crate::Point;
use crate::geom::mesh::Mesh;
use crate::geom::oval::{clamp_width, oval_extrusion};
use crate::geom::primitives::box_mesh;
use crate::table::Shape;
use anyhow::Result;

/// Rectangular tabletop.
#[derive(Debug, Clone)]
pub struct RectPlot {
    width: f64,
    length: f64,
    height: f64,
    center: Point,
}

impl RectPlot {
    pub fn new(width: f64, length: f64, height: f64, center: Option<Point>) -> Self {
        Self {
            width,
            length,
            height,
            center: center.unwrap_or(Point::origin()),
        }
    }
}

/// Oval tabletop.
///
/// The width is clamped to `1.3 × length` at construction; wider ovals
/// would break the tangent-arc outline.
#[derive(Debug, Clone)]
pub struct OvalPlot {
    width: f64,
    length: f64,
    height: f64,
    center: Point,
}

impl OvalPlot {
    pub fn new(width: f64, length: f64, height: f64, center: Option<Point>) -> Self {
        Self {
            width: clamp_width(width, length),
            length,
            height,
            center: center.unwrap_or(Point::origin()),
        }
    }
}

/// A tabletop of one of the supported shapes.
///
/// Only rectangular and oval plots exist; the variant set is the input
/// contract of the assembly step.
#[derive(Debug, Clone)]
pub enum Plot {
    Rect(RectPlot),
    Oval(OvalPlot),
}

impl Plot {
    pub fn shape(&self) -> Shape {
        match self {
            Plot::Rect(_) => Shape::Rectangle,
            Plot::Oval(_) => Shape::Oval,
        }
    }

    pub fn width(&self) -> f64 {
        match self {
            Plot::Rect(p) => p.width,
            Plot::Oval(p) => p.width,
        }
    }

    pub fn length(&self) -> f64 {
        match self {
            Plot::Rect(p) => p.length,
            Plot::Oval(p) => p.length,
        }
    }

    pub fn height(&self) -> f64 {
        match self {
            Plot::Rect(p) => p.height,
            Plot::Oval(p) => p.height,
        }
    }

    pub fn center(&self) -> Point {
        match self {
            Plot::Rect(p) => p.center,
            Plot::Oval(p) => p.center,
        }
    }

    /// Generates the tabletop mesh.
    pub fn mesh(&self) -> Result<Mesh> {
        match self {
            Plot::Rect(p) => Ok(box_mesh(p.width, p.length, p.height, p.center)),
            Plot::Oval(p) => oval_extrusion(p.width, p.length, p.height, p.center),
        }
    }
}
