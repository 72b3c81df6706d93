//! Visualization of table parts through a Rerun recording stream.

mod rerun;

pub use self::rerun::{draw_edges, draw_faces, draw_points, start_session};
