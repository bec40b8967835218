use crate::math;
use crate::vector::Vector3;

/// Wrap `position` across the faces of the origin-centered box with
/// half-extents `bounds`.
///
/// Each axis is handled independently: a coordinate below `-b` moves to `+b`
/// and one above `+b` moves to `-b`. Returns `true` if any axis wrapped.
pub fn wrap(position: &mut Vector3, bounds: Vector3) -> bool {
    let mut wrapped = false;
    for axis in 0..3 {
        wrapped |= wrap_axis(position.axis_mut(axis), bounds.axis(axis));
    }
    wrapped
}

fn wrap_axis(value: &mut f32, half_extent: f32) -> bool {
    let half_extent = math::abs(half_extent);
    if *value < -half_extent {
        *value = half_extent;
        true
    } else if *value > half_extent {
        *value = -half_extent;
        true
    } else {
        false
    }
}

/// Whether `position` lies inside (or on) the box.
pub fn contains(position: &Vector3, bounds: Vector3) -> bool {
    (0..3).all(|axis| {
        let half_extent = math::abs(bounds.axis(axis));
        let value = position.axis(axis);
        value >= -half_extent && value <= half_extent
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Vector3 = Vector3::new(5.0, 3.0, 1.0);

    #[test]
    fn test_inside_is_untouched() {
        let mut p = Vector3::new(4.9, -2.9, 0.5);
        assert!(!wrap(&mut p, BOUNDS));
        assert_eq!(p, Vector3::new(4.9, -2.9, 0.5));
    }

    #[test]
    fn test_faces_are_inclusive() {
        let mut p = Vector3::new(5.0, -3.0, 1.0);
        assert!(!wrap(&mut p, BOUNDS));
    }

    #[test]
    fn test_wrap_each_axis() {
        let mut p = Vector3::new(5.1, 0.0, 0.0);
        assert!(wrap(&mut p, BOUNDS));
        assert_eq!(p.x, -5.0);

        let mut p = Vector3::new(0.0, -3.2, 0.0);
        assert!(wrap(&mut p, BOUNDS));
        assert_eq!(p.y, 3.0);

        let mut p = Vector3::new(0.0, 0.0, 1.5);
        assert!(wrap(&mut p, BOUNDS));
        assert_eq!(p.z, -1.0);
    }

    #[test]
    fn test_wrap_several_axes_at_once() {
        let mut p = Vector3::new(-6.0, 4.0, -2.0);
        assert!(wrap(&mut p, BOUNDS));
        assert_eq!(p, Vector3::new(5.0, -3.0, 1.0));
    }

    #[test]
    fn test_flat_axis() {
        let flat = Vector3::new(5.0, 3.0, 0.0);
        let mut p = Vector3::new(0.0, 0.0, 0.0);
        assert!(!wrap(&mut p, flat));
        assert!(contains(&p, flat));

        let mut p = Vector3::new(0.0, 0.0, 0.01);
        assert!(wrap(&mut p, flat));
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn test_contains() {
        assert!(contains(&Vector3::new(1.0, 1.0, 1.0), BOUNDS));
        assert!(!contains(&Vector3::new(1.0, 3.5, 0.0), BOUNDS));
    }
}
