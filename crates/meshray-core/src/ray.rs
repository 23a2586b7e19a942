//! Rays and ray transforms.

use glam::{Mat4, Vec3};

/// A ray with an origin and a (not necessarily unit-length) direction.
///
/// Intersection distances `t` are multiples of `dir`'s length. Callers that
/// want world-space distances should normalize the direction first, e.g. via
/// [`Ray::normalized`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Vec3,
    /// Direction the ray travels in.
    pub dir: Vec3,
}

impl Ray {
    /// Creates a ray from an origin and direction.
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }

    /// The point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// The same ray with a unit-length direction.
    pub fn normalized(&self) -> Self {
        Self {
            origin: self.origin,
            dir: self.dir.normalize(),
        }
    }

    /// Applies `m` to the ray: the origin as a point, the direction as a
    /// vector (no translation). Used to move a pick ray from view space into
    /// a mesh's local space.
    pub fn transform(&self, m: &Mat4) -> Self {
        Self {
            origin: m.transform_point3(self.origin),
            dir: m.transform_vector3(self.dir),
        }
    }
}
