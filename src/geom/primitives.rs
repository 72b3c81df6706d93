//! Parametric mesh primitives: box, circular sector, quad panel, cylinder.
//!
//! All generators are pure and return a [`Mesh`]; submission to the viewer
//! is a separate step (see the `draw` module).

use crate::Point;
use crate::Vector;
use crate::geom::mesh::Mesh;
use crate::geom::rotation::rotate_points_around_vector;
use crate::geom::triangles::TriangleIndex;
use std::f64::consts::PI;

/// Number of boundary segments used for circular sectors.
pub const SECTOR_SEGMENTS: usize = 100;

/// Fixed face table of an axis-aligned box: 2 triangles per face, 6 faces.
const BOX_FACES: [(usize, usize, usize); 12] = [
    (0, 1, 2), // front
    (1, 2, 3),
    (4, 5, 6), // back
    (5, 6, 7),
    (0, 1, 4), // bottom
    (1, 4, 5),
    (2, 3, 6), // top
    (3, 6, 7),
    (0, 2, 4), // left
    (2, 4, 6),
    (1, 3, 5), // right
    (3, 5, 7),
];

/// Axis-aligned box centered at `center`: 8 vertices, 12 triangles.
///
/// Winding is not consistent across faces; the viewer does not cull
/// back faces.
pub fn box_mesh(width: f64, length: f64, height: f64, center: Point) -> Mesh {
    let (x, y, z) = (width / 2., length / 2., height / 2.);
    let corners = [
        (-x, -y, -z),
        (x, -y, -z),
        (-x, y, -z),
        (x, y, -z),
        (-x, -y, z),
        (x, -y, z),
        (-x, y, z),
        (x, y, z),
    ];
    let vertices: Vec<Point> = corners
        .iter()
        .map(|&(dx, dy, dz)| center + Vector::new(dx, dy, dz))
        .collect();
    let faces: Vec<TriangleIndex> = BOX_FACES
        .iter()
        .map(|&(a, b, c)| TriangleIndex(a, b, c))
        .collect();

    Mesh::new(vertices, faces)
}

/// Boundary ring of a circular sector: 100 points around the z axis.
///
/// The first point lies at `start_angle`; each subsequent point is the
/// previous one rotated by `sweep_angle / 100`. The ring therefore stops one
/// step short of `start_angle + sweep_angle`.
pub fn sector_boundary(
    radius: f64,
    center: Point,
    sweep_angle: f64,
    start_angle: f64,
) -> Vec<Point> {
    let axis = Vector::new(0., 0., 1.);
    let step = sweep_angle / SECTOR_SEGMENTS as f64;
    let offset = Vector::from_points(Point::origin(), center);

    let mut p = Point::new(radius * start_angle.cos(), radius * start_angle.sin(), 0.);
    let mut pts: Vec<Point> = Vec::with_capacity(SECTOR_SEGMENTS);
    pts.push(p);
    for _ in 1..SECTOR_SEGMENTS {
        p = rotate_points_around_vector(&[p], &axis, step)[0];
        pts.push(p);
    }

    pts.into_iter().map(|q| q + offset).collect()
}

/// Circular sector as a triangle fan: center vertex plus 100 boundary
/// points, 100 triangles.
///
/// The final triangle always connects boundary point 100 back to boundary
/// point 1, even when `sweep_angle` is less than a full turn. For partial
/// sectors this visibly joins the two open ends.
pub fn sector(radius: f64, center: Point, sweep_angle: f64, start_angle: f64) -> Mesh {
    let mut vertices: Vec<Point> = Vec::with_capacity(SECTOR_SEGMENTS + 1);
    vertices.push(center);
    vertices.extend(sector_boundary(radius, center, sweep_angle, start_angle));

    let mut faces: Vec<TriangleIndex> = Vec::with_capacity(SECTOR_SEGMENTS);
    for i in 1..SECTOR_SEGMENTS {
        faces.push(TriangleIndex(0, i, i + 1));
    }
    faces.push(TriangleIndex(0, SECTOR_SEGMENTS, 1));

    Mesh::new(vertices, faces)
}

/// Full disk: a sector sweeping 2π from angle 0.
pub fn sector_full(radius: f64, center: Point) -> Mesh {
    sector(radius, center, 2. * PI, 0.)
}

/// Two-triangle panel spanning four points: {p1,p2,p3} and {p2,p3,p4}.
///
/// Used to stitch two parallel boundary curves into a side wall.
pub fn quad(p1: Point, p2: Point, p3: Point, p4: Point) -> Mesh {
    Mesh::new(
        vec![p1, p2, p3, p4],
        vec![TriangleIndex(0, 1, 2), TriangleIndex(1, 2, 3)],
    )
}

/// Cylinder: two full disks at `center.z ± height/2` joined by quad panels.
///
/// Panels connect boundary pairs (i, i+1) only; the wrap-around pair
/// (last, first) is not stitched. The oval extrusion does stitch its
/// wrap-around pair, see [`crate::geom::oval::oval_extrusion`].
pub fn cylinder(radius: f64, height: f64, center: Point) -> Mesh {
    let half = Vector::new(0., 0., height / 2.);
    let top = sector_full(radius, center + half);
    let bottom = sector_full(radius, center + half * -1.);

    // Boundary rings exclude the fan center at vertex 0
    let top_ring: Vec<Point> = top.vertices[1..].to_vec();
    let bottom_ring: Vec<Point> = bottom.vertices[1..].to_vec();

    let mut mesh = top;
    mesh.merge(bottom);
    for i in 0..SECTOR_SEGMENTS - 1 {
        mesh.merge(quad(
            top_ring[i],
            top_ring[i + 1],
            bottom_ring[i],
            bottom_ring[i + 1],
        ));
    }

    mesh
}
