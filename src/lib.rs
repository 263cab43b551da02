//! Minimal 3D vector algebra and the parametric ray built on it: the
//! geometric foundation for a ray-tracing renderer.

mod ray;
mod vec3;

#[cfg(test)]
mod props;

pub use crate::ray::Ray;
pub use crate::vec3::{Color, IndexOutOfRange, Point3, Vec3};
