use crate::math;

/// A 3D vector used for position, velocity and acceleration
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    pub fn magnitude_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn magnitude(&self) -> f32 {
        math::sqrt(self.magnitude_squared())
    }

    /// Unit vector in the same direction, or zero for a zero-length vector.
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            Self {
                x: self.x / mag,
                y: self.y / mag,
                z: self.z / mag,
            }
        } else {
            Self::zero()
        }
    }

    pub fn limit(&self, max: f32) -> Self {
        let mag = self.magnitude();
        if mag > max {
            self.normalize() * max
        } else {
            *self
        }
    }

    pub fn distance(&self, other: &Vector3) -> f32 {
        (*self - *other).magnitude()
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Component by axis index (0 = x, 1 = y, 2 = z).
    pub fn axis(&self, axis: usize) -> f32 {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    pub fn axis_mut(&mut self, axis: usize) -> &mut f32 {
        match axis {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => &mut self.z,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl core::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl core::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl core::ops::Mul<f32> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl core::ops::Div<f32> for Vector3 {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl core::ops::AddAssign for Vector3 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl core::ops::MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector3_magnitude() {
        let v = Vector3::new(2.0, 3.0, 6.0);
        assert_eq!(v.magnitude(), 7.0);
    }

    #[test]
    fn test_vector3_normalize() {
        let v = Vector3::new(3.0, 4.0, 12.0);
        assert!((v.normalize().magnitude() - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        assert_eq!(Vector3::zero().normalize(), Vector3::zero());
    }

    #[test]
    fn test_limit_only_shrinks() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        assert_eq!(v.limit(10.0), v);
        assert!((v.limit(1.0).magnitude() - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_vector3_operations() {
        let v1 = Vector3::new(1.0, 2.0, 3.0);
        let v2 = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(v1 + v2, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(v2 - v1, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(v1 * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(v2 / 2.0, Vector3::new(2.0, 2.5, 3.0));
    }

    #[test]
    fn test_axis_access() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        *v.axis_mut(2) = -3.0;
        assert_eq!(v.axis(0), 1.0);
        assert_eq!(v.axis(1), 2.0);
        assert_eq!(v.axis(2), -3.0);
    }
}
