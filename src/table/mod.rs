//! Table assembly: a plot (tabletop) and a leg template placed under it.

pub mod leg;
pub mod plot;

pub use leg::{CircleLeg, Leg, RectLeg};
pub use plot::{OvalPlot, Plot, RectPlot};

use crate::HasMesh;
use crate::HasName;
use crate::Point;
use crate::geom::mesh::Mesh;
use crate::random_id;
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum clearance between a leg's outer edge and the plot edge (cm).
pub const LEG_CLEARANCE: f64 = 5.0;

/// Shape selector for plots and legs.
///
/// `Triangle` is reserved: it parses but no plot or leg constructor accepts
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle,
    Oval,
    Circle,
    Triangle,
    Square,
}

impl FromStr for Shape {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "rectangle" | "rect" | "0" => Ok(Shape::Rectangle),
            "oval" | "1" => Ok(Shape::Oval),
            "circle" | "2" => Ok(Shape::Circle),
            "triangle" | "3" => Ok(Shape::Triangle),
            "square" | "4" => Ok(Shape::Square),
            _ => Err(anyhow!("Unknown shape: {}", s)),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Rectangle => "RECTANGLE",
            Shape::Oval => "OVAL",
            Shape::Circle => "CIRCLE",
            Shape::Triangle => "TRIANGLE",
            Shape::Square => "SQUARE",
        };
        write!(f, "{}", name)
    }
}

/// A single named part of the assembled table.
#[derive(Debug, Clone)]
pub struct Part {
    pub name: String,
    pub uid: String,
    pub mesh: Mesh,
}

impl Part {
    pub fn new(name: &str, mesh: Mesh) -> Self {
        Self {
            name: name.to_string(),
            uid: random_id(),
            mesh,
        }
    }
}

impl HasMesh for Part {
    fn get_mesh(&self) -> Mesh {
        self.mesh.clone()
    }
}

impl HasName for Part {
    fn get_name(&self) -> &str {
        &self.name
    }
}

/// A table: one plot and one leg template.
///
/// The assembly owns the templates; each emitted leg part is an
/// independently positioned copy of the template.
#[derive(Debug, Clone)]
pub struct Table {
    pub plot: Plot,
    pub leg: Leg,
}

impl Table {
    pub fn new(plot: Plot, leg: Leg) -> Self {
        Self { plot, leg }
    }

    /// Computes the leg placement positions.
    ///
    /// The planar clearance from the plot edge is `5 cm + leg.max_dist()`.
    /// Rectangular plots get 4 legs, one per quadrant corner; oval plots get
    /// 3 legs: one near the small end of the oval and two on the y axis.
    pub fn leg_positions(&self) -> Vec<Point> {
        let offset = LEG_CLEARANCE + self.leg.max_dist();
        let w = self.plot.width();
        let l = self.plot.length();
        let z = -self.plot.height() / 2. - self.leg.height() / 2.;

        match self.plot {
            Plot::Rect(_) => vec![
                Point::new(w / 2. - offset, l / 2. - offset, z),
                Point::new(-w / 2. + offset, l / 2. - offset, z),
                Point::new(w / 2. - offset, -l / 2. + offset, z),
                Point::new(-w / 2. + offset, -l / 2. + offset, z),
            ],
            Plot::Oval(_) => vec![
                Point::new(w - l / 2. - offset, 0., z),
                Point::new(0., l / 2. - offset, z),
                Point::new(0., -l / 2. + offset, z),
            ],
        }
    }

    /// Emits the full part list: the plot followed by one part per leg.
    pub fn parts(&self) -> Result<Vec<Part>> {
        let mut parts: Vec<Part> = Vec::new();
        parts.push(Part::new("plot", self.plot.mesh()?));

        let mut leg = self.leg.clone();
        for (i, pos) in self.leg_positions().iter().enumerate() {
            leg.set_center(*pos);
            parts.push(Part::new(&format!("leg_{}", i), leg.mesh()));
        }

        Ok(parts)
    }
}
