//! Two-dimensional vectors in world coordinates
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Tolerance used by [`Vector2D::approx_eq()`]
const EPSILON: f64 = 1e-6;

/// A 2-D vector of `f64` components.
///
/// World coordinates follow the terminal's orientation: `x` grows rightwards
/// and `y` grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Vector2D {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl Vector2D {
    pub(crate) const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub(crate) const fn new(x: f64, y: f64) -> Vector2D {
        Vector2D { x, y }
    }

    pub(crate) fn dot(self, other: Vector2D) -> f64 {
        self.x.mul_add(other.x, self.y * other.y)
    }

    pub(crate) fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub(crate) fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Return a unit vector pointing the same way as `self`.  The zero vector
    /// is returned unchanged.
    pub(crate) fn normalize(self) -> Vector2D {
        let len_sq = self.length_squared();
        if len_sq == 0.0 {
            self
        } else {
            self * len_sq.sqrt().recip()
        }
    }

    /// Rotate the vector counter-clockwise by `angle` radians
    pub(crate) fn rotate(self, angle: f64) -> Vector2D {
        let (sin, cos) = angle.sin_cos();
        Vector2D {
            x: self.x.mul_add(cos, -(self.y * sin)),
            y: self.x.mul_add(sin, self.y * cos),
        }
    }

    /// Return the unsigned angle between `self` and `other` in radians.
    ///
    /// The cosine is clamped to `[-1, 1]` so that rounding error on parallel
    /// vectors cannot produce NaN.  If either vector has zero length, the
    /// result is `0.0`.
    pub(crate) fn angle_between(self, other: Vector2D) -> f64 {
        let denom = self.length() * other.length();
        if denom == 0.0 {
            return 0.0;
        }
        (self.dot(other) / denom).clamp(-1.0, 1.0).acos()
    }

    /// Compare two vectors component-wise within a relative tolerance
    pub(crate) fn approx_eq(self, other: Vector2D) -> bool {
        nearly_equal(self.x, other.x) && nearly_equal(self.y, other.y)
    }
}

#[allow(clippy::float_cmp)]
fn nearly_equal(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    // Smallest positive subnormal
    let tiny = f64::from_bits(1);
    let diff = (a - b).abs();
    if a == 0.0 || b == 0.0 || diff < tiny {
        // Relative error is meaningless this close to zero.
        return diff < EPSILON * tiny;
    }
    diff / (a.abs() + b.abs()).min(f64::MAX) < EPSILON
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Vector2D) {
        *self = *self + rhs;
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Component-wise product
impl Mul for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: f64) -> Vector2D {
        Vector2D::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}; {:.3})", self.x, self.y)
    }
}
