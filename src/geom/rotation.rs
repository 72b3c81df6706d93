use crate::Point;
use crate::Vector;
use crate::geom::IsClose;
use ndarray as nd;

/// Calculate rotation matrix for a unit vector `u` and angle `phi`.
///
/// Uses the Rodrigues form, which is numerically stable:
/// https://en.wikipedia.org/wiki/Rodrigues%27_rotation_formula
///
/// # Panics
/// Panics if `u` is not a unit vector.
pub fn rotation_matrix(u: &Vector, phi: f64) -> nd::Array2<f64> {
    if !u.length().is_close(1.) {
        panic!("rotation_matrix() requires u to be a unit vector");
    }

    let w: nd::Array2<f64> = nd::arr2(&[[0., -u.dz, u.dy], [u.dz, 0., -u.dx], [-u.dy, u.dx, 0.]]);

    nd::Array::eye(3) + phi.sin() * &w + (2. * (phi / 2.).sin().powi(2)) * w.dot(&w)
}

/// Rotate points using the rotation matrix `rot`
pub fn rotate_points(pts: &[Point], rot: &nd::ArrayView2<f64>) -> Vec<Point> {
    let pts = points_to_array(pts);
    let pts = pts.dot(rot);

    array_to_points(pts)
}

/// Rotate points around the unit vector `u` with the angle `phi` (radians).
pub fn rotate_points_around_vector(pts: &[Point], u: &Vector, phi: f64) -> Vec<Point> {
    if u.length().is_close(0.) || phi.abs().is_close(0.) {
        // No need to rotate
        return pts.to_vec();
    }
    let rot = rotation_matrix(u, phi);

    rotate_points(pts, &rot.t())
}

fn points_to_array(pts: &[Point]) -> nd::Array2<f64> {
    let mut arr = nd::Array2::zeros((pts.len(), 3));
    for (i, p) in pts.iter().enumerate() {
        arr[[i, 0]] = p.x;
        arr[[i, 1]] = p.y;
        arr[[i, 2]] = p.z;
    }
    arr
}

fn array_to_points(arr: nd::Array2<f64>) -> Vec<Point> {
    arr.rows()
        .into_iter()
        .map(|row| Point::new(row[0], row[1], row[2]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_points_around_vector() {
        let p0 = Point::new(1.0, 0.0, 0.0);
        let p1 = Point::new(0.0, 1.0, 0.0);
        let p2 = Point::new(0.0, 0.0, 0.0);
        let u = Vector::new(0., 1., 0.);
        let phi = -std::f64::consts::PI / 2.;

        let rotated_points = rotate_points_around_vector(&[p0, p1, p2], &u, phi);

        assert!(rotated_points[0].is_close(&Point::new(0.0, 0.0, 1.0)));
        assert!(rotated_points[1].is_close(&Point::new(0.0, 1.0, 0.0)));
        assert!(rotated_points[2].is_close(&Point::new(0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_rotate_around_z() {
        let p = Point::new(1., 0., 0.);
        let u = Vector::new(0., 0., 1.);
        let phi = std::f64::consts::PI / 2.;
        let rotated = rotate_points_around_vector(&[p], &u, phi);
        assert!(rotated[0].is_close(&Point::new(0., 1., 0.)));
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let p = Point::new(3., -2., 7.);
        let u = Vector::new(0., 0., 1.);
        let rotated = rotate_points_around_vector(&[p], &u, 0.);
        assert!(rotated[0].is_close(&p));
    }
}
