use crate::vec3::{Point3, Vec3};

/// A ray beginning at `origin` and extending along `direction`, the
/// parametric line P(t) = origin + t * direction.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    origin: Point3,
    direction: Vec3,
}

impl Ray {
    /// Both inputs are copied in as given: the direction is not normalized
    /// and nothing is validated, the zero direction included.
    pub const fn new(origin: Point3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// The point at parameter `t`. Positive values of `t` lie forward from
    /// the origin, negative values behind it.
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}
