pub mod draw;
pub mod geom;
mod id;
pub mod input;
mod name;
pub mod table;

// Prelude
pub use geom::mesh::{HasMesh, Mesh};
pub use geom::point::Point;
pub use geom::triangles::TriangleIndex;
pub use geom::vector::Vector;
pub use name::HasName;
pub use table::{Leg, Plot, Shape, Table};
use id::random_id;
