use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub};

use thiserror::Error;

/// The single failure of this crate: indexed component access outside
/// {0, 1, 2}. Every numeric edge case (division by zero, zero-length
/// normalization, non-finite inputs) stays IEEE-754 and is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("vector index out of bounds: {index} (index must be 0, 1, or 2)")]
pub struct IndexOutOfRange {
    pub index: usize,
}

/// A three-component `f64` vector. Doubles as a position (`Point3`) and an
/// RGB intensity (`Color`) depending on context.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3([f64; 3]);

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Vec3 {
        Vec3([x, y, z])
    }
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    pub fn x(&self) -> f64 {
        self.0[0]
    }
    pub fn y(&self) -> f64 {
        self.0[1]
    }
    pub fn z(&self) -> f64 {
        self.0[2]
    }

    pub fn set_x(&mut self, x: f64) {
        self.0[0] = x;
    }
    pub fn set_y(&mut self, y: f64) {
        self.0[1] = y;
    }
    pub fn set_z(&mut self, z: f64) {
        self.0[2] = z;
    }

    /// Component at `index`, or `IndexOutOfRange` if `index` is not 0, 1,
    /// or 2.
    pub fn get(&self, index: usize) -> Result<f64, IndexOutOfRange> {
        check_index(index)?;
        Ok(self.0[index])
    }

    /// Mutable slot at `index`, under the same bounds check as `get`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut f64, IndexOutOfRange> {
        check_index(index)?;
        Ok(&mut self.0[index])
    }

    pub fn dot(&self, other: Vec3) -> f64 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    pub fn cross(&self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }

    pub fn length_squared(&self) -> f64 {
        self.x() * self.x() + self.y() * self.y() + self.z() * self.z()
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// `self / self.length()`. A zero-length vector divides by zero here
    /// and the result carries infinite or NaN components; callers who care
    /// must check the length first.
    pub fn unit_vector(&self) -> Vec3 {
        *self / self.length()
    }
}

fn check_index(index: usize) -> Result<(), IndexOutOfRange> {
    if index > 2 {
        Err(IndexOutOfRange { index })
    } else {
        Ok(())
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x(), -self.y(), -self.z())
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
        )
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.x() - other.x(),
            self.y() - other.y(),
            self.z() - other.z(),
        )
    }
}

// componentwise (Hadamard) product; the dot product is the `dot` method
impl Mul for Vec3 {
    type Output = Vec3;
    fn mul(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.x() * other.x(),
            self.y() * other.y(),
            self.z() * other.z(),
        )
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, t: f64) -> Vec3 {
        Vec3::new(self.x() * t, self.y() * t, self.z() * t)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, other: Vec3) -> Vec3 {
        other * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;
    fn div(self, t: f64) -> Vec3 {
        Vec3::new(self.x() / t, self.y() / t, self.z() / t)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Vec3) {
        self.0[0] += other.x();
        self.0[1] += other.y();
        self.0[2] += other.z();
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, t: f64) {
        self.0[0] *= t;
        self.0[1] *= t;
        self.0[2] *= t;
    }
}

impl DivAssign<f64> for Vec3 {
    // multiplies by the reciprocal; 1.0 / 0.0 is Infinity and propagates
    fn div_assign(&mut self, t: f64) {
        *self *= t.recip();
    }
}

// `v[i]` sugar over the same bounds check as `get`/`get_mut`; panics with
// the `IndexOutOfRange` message instead of returning it
impl Index<usize> for Vec3 {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        match check_index(index) {
            Ok(()) => &self.0[index],
            Err(e) => panic!("{}", e),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match check_index(index) {
            Ok(()) => &mut self.0[index],
            Err(e) => panic!("{}", e),
        }
    }
}

impl Sum for Vec3 {
    fn sum<I: Iterator<Item = Vec3>>(iter: I) -> Vec3 {
        iter.fold(Vec3::ZERO, Vec3::add)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x(), self.y(), self.z())
    }
}

impl From<f64> for Vec3 {
    fn from(s: f64) -> Vec3 {
        Vec3::new(s, s, s)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(e: [f64; 3]) -> Vec3 {
        Vec3(e)
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> [f64; 3] {
        v.0
    }
}

// Aliases
pub type Point3 = Vec3; // a position in space
pub type Color = Vec3; // an RGB intensity
