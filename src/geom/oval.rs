//! Four-center oval: a drafting approximation of an ellipse built from two
//! full circles of different radii joined by two tangent arcs.

use crate::Point;
use crate::Vector;
use crate::geom::EPS;
use crate::geom::mesh::Mesh;
use crate::geom::primitives::{quad, sector, sector_boundary, sector_full};
use anyhow::{Result, anyhow};

/// Maximum oval width relative to its length.
///
/// Wider ovals are flattened to this ratio so that the tangent-arc
/// construction stays valid.
pub const MAX_WIDTH_RATIO: f64 = 1.3;

/// Clamps the oval width to `1.3 × length`.
pub fn clamp_width(width: f64, length: f64) -> f64 {
    if width > MAX_WIDTH_RATIO * length {
        MAX_WIDTH_RATIO * length
    } else {
        width
    }
}

/// Parameters of the four arcs making up the oval outline.
///
/// `big_r` is the radius of the dominant circle at the oval center, `small_r`
/// the radius of the circle shifted by `a` along x. The tangent arcs have
/// radius `rho` and centers shifted by `±d` along y; their span follows from
/// the triangle formed by the three circle centers.
#[derive(Debug, Clone, Copy)]
struct OvalArcs {
    big_r: f64,
    small_r: f64,
    a: f64,
    d: f64,
    rho: f64,
    sweep: f64,
    start: f64,
}

fn oval_arcs(width: f64, length: f64) -> Result<OvalArcs> {
    let width = clamp_width(width, length);
    let big_r = length / 2.;
    let small_r = big_r / 2.;
    let a = width - big_r - small_r;

    if (big_r - small_r).abs() < EPS {
        return Err(anyhow!(
            "Oval with width={width} and length={length} is degenerate: \
             the two main circles have equal radii"
        ));
    }

    let d = (a.powi(2) - (big_r - small_r).powi(2)) / (2. * (big_r - small_r));
    let rho = (big_r.powi(2) - small_r.powi(2) + a.powi(2)) / (2. * (big_r - small_r));
    let sweep = (a / d).atan();
    let start = (d / a).atan();

    Ok(OvalArcs {
        big_r,
        small_r,
        a,
        d,
        rho,
        sweep,
        start,
    })
}

/// Closed oval outline: the concatenated boundary rings of the four arcs,
/// 400 points in total.
///
/// Rings are kept in arc order and are not deduplicated at the tangent
/// junctions.
pub fn oval_outline(width: f64, length: f64, center: Point) -> Result<Vec<Point>> {
    let arcs = oval_arcs(width, length)?;
    let two_pi = 2. * std::f64::consts::PI;

    let mut pts = sector_boundary(arcs.big_r, center, two_pi, 0.);
    pts.extend(sector_boundary(
        arcs.small_r,
        center + Vector::new(arcs.a, 0., 0.),
        two_pi,
        0.,
    ));
    pts.extend(sector_boundary(
        arcs.rho,
        center + Vector::new(0., -arcs.d, 0.),
        arcs.sweep,
        arcs.start,
    ));
    pts.extend(sector_boundary(
        arcs.rho,
        center + Vector::new(0., arcs.d, 0.),
        -arcs.sweep,
        -arcs.start,
    ));

    Ok(pts)
}

/// Oval face mesh: the four arc sectors merged into one triangle-fan mesh.
pub fn oval(width: f64, length: f64, center: Point) -> Result<Mesh> {
    let arcs = oval_arcs(width, length)?;

    let mut mesh = sector_full(arcs.big_r, center);
    mesh.merge(sector_full(
        arcs.small_r,
        center + Vector::new(arcs.a, 0., 0.),
    ));
    mesh.merge(sector(
        arcs.rho,
        center + Vector::new(0., -arcs.d, 0.),
        arcs.sweep,
        arcs.start,
    ));
    mesh.merge(sector(
        arcs.rho,
        center + Vector::new(0., arcs.d, 0.),
        -arcs.sweep,
        -arcs.start,
    ));

    Ok(mesh)
}

/// Oval slab: two oval faces at `center.z ± height/2` with quad side panels.
///
/// Every adjacent outline pair is stitched, including the wrap-around pair
/// (last, first). The cylinder leaves its wrap-around pair open, see
/// [`crate::geom::primitives::cylinder`].
pub fn oval_extrusion(width: f64, length: f64, height: f64, center: Point) -> Result<Mesh> {
    let half = Vector::new(0., 0., height / 2.);
    let top_outline = oval_outline(width, length, center + half)?;
    let bottom_outline = oval_outline(width, length, center + half * -1.)?;

    let mut mesh = oval(width, length, center + half)?;
    mesh.merge(oval(width, length, center + half * -1.)?);

    let n = top_outline.len();
    for i in 0..n {
        let j = (i + 1) % n;
        mesh.merge(quad(
            top_outline[i],
            top_outline[j],
            bottom_outline[i],
            bottom_outline[j],
        ));
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::primitives::SECTOR_SEGMENTS;

    // width=120, length=100 gives R=50, r=25, a=45, d=28, rho=78.
    const WIDTH: f64 = 120.;
    const LENGTH: f64 = 100.;

    #[test]
    fn test_arc_parameters() -> Result<()> {
        let arcs = oval_arcs(WIDTH, LENGTH)?;
        assert!((arcs.big_r - 50.).abs() < EPS);
        assert!((arcs.small_r - 25.).abs() < EPS);
        assert!((arcs.a - 45.).abs() < EPS);
        assert!((arcs.d - 28.).abs() < EPS);
        assert!((arcs.rho - 78.).abs() < EPS);
        Ok(())
    }

    #[test]
    fn test_outline_length() -> Result<()> {
        let pts = oval_outline(WIDTH, LENGTH, Point::origin())?;
        assert_eq!(pts.len(), 4 * SECTOR_SEGMENTS);
        Ok(())
    }

    #[test]
    fn test_tangent_arc_touches_small_circle() -> Result<()> {
        let arcs = oval_arcs(WIDTH, LENGTH)?;
        let pts = oval_outline(WIDTH, LENGTH, Point::origin())?;
        // First point of arc 3 is the tangency point on the small circle.
        let start3 = pts[2 * SECTOR_SEGMENTS];
        let small_center = Point::new(arcs.a, 0., 0.);
        assert!((start3.distance(&small_center) - arcs.small_r).abs() < 1e-9);
        // Mirrored for arc 4.
        let start4 = pts[3 * SECTOR_SEGMENTS];
        assert!((start4.distance(&small_center) - arcs.small_r).abs() < 1e-9);
        assert!((start4.y + start3.y).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_tangent_arc_touches_big_circle() -> Result<()> {
        let arcs = oval_arcs(WIDTH, LENGTH)?;
        // The tangent circle passes through the top of the big circle:
        // rho = d + R, so (0, R) lies on the circle centered at (0, -d).
        let arc_center = Point::new(0., -arcs.d, 0.);
        let big_top = Point::new(0., arcs.big_r, 0.);
        assert!((arc_center.distance(&big_top) - arcs.rho).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_tangent_arc_points_on_radius() -> Result<()> {
        let arcs = oval_arcs(WIDTH, LENGTH)?;
        let pts = oval_outline(WIDTH, LENGTH, Point::origin())?;
        let arc_center = Point::new(0., -arcs.d, 0.);
        for p in pts[2 * SECTOR_SEGMENTS..3 * SECTOR_SEGMENTS].iter() {
            assert!((p.distance(&arc_center) - arcs.rho).abs() < 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_clamp_width() {
        assert_eq!(clamp_width(200., 100.), 130.);
        assert_eq!(clamp_width(120., 100.), 120.);
    }

    #[test]
    fn test_equal_width_and_length_allowed() -> Result<()> {
        // width == length puts the tangent-arc centers on the x axis (d = 0);
        // the tangent arcs become exact quarter arcs of the big circle.
        let arcs = oval_arcs(100., 100.)?;
        assert!(arcs.d.abs() < EPS);
        assert!((arcs.rho - arcs.big_r).abs() < EPS);
        assert!((arcs.sweep - std::f64::consts::FRAC_PI_2).abs() < EPS);
        assert!(arcs.start.abs() < EPS);

        let pts = oval_outline(100., 100., Point::origin())?;
        assert_eq!(pts.len(), 4 * SECTOR_SEGMENTS);
        for p in pts[2 * SECTOR_SEGMENTS..].iter() {
            assert!((p.distance(&Point::origin()) - arcs.big_r).abs() < 1e-9);
            assert!(p.x > -1e-9); // both quarter arcs stay in the right half
        }
        Ok(())
    }

    #[test]
    fn test_degenerate_radii_rejected() {
        // length 0 collapses both main circles to the same radius
        assert!(oval_outline(10., 0., Point::origin()).is_err());
        assert!(oval(10., 0., Point::origin()).is_err());
        assert!(oval_extrusion(10., 0., 3., Point::origin()).is_err());
    }

    #[test]
    fn test_oval_face_counts() -> Result<()> {
        let mesh = oval(WIDTH, LENGTH, Point::origin())?;
        assert_eq!(mesh.vertex_count(), 4 * (SECTOR_SEGMENTS + 1));
        assert_eq!(mesh.face_count(), 4 * SECTOR_SEGMENTS);
        assert!(mesh.max_index().unwrap() < mesh.vertex_count());
        Ok(())
    }

    #[test]
    fn test_extrusion_counts() -> Result<()> {
        let mesh = oval_extrusion(WIDTH, LENGTH, 3., Point::origin())?;
        let outline = 4 * SECTOR_SEGMENTS;
        let face = 4 * (SECTOR_SEGMENTS + 1);
        // Two faces plus one quad per outline pair, wrap-around included.
        assert_eq!(mesh.vertex_count(), 2 * face + 4 * outline);
        assert_eq!(mesh.face_count(), 2 * 4 * SECTOR_SEGMENTS + 2 * outline);
        assert!(mesh.max_index().unwrap() < mesh.vertex_count());
        Ok(())
    }

    #[test]
    fn test_extrusion_z_offsets() -> Result<()> {
        let mesh = oval_extrusion(WIDTH, LENGTH, 3., Point::origin())?;
        // First vertex is the top big-circle fan center.
        assert!(mesh.vertices[0].is_close(&Point::new(0., 0., 1.5)));
        Ok(())
    }
}
