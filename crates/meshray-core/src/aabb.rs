//! Axis-aligned bounding boxes.

use glam::Vec3;

use crate::octant::Octant;
use crate::ray::Ray;

/// Direction components smaller than this are treated as parallel to the
/// slab in the ray test.
const PARALLEL_EPS: f32 = 1e-8;

/// An axis-aligned box described by its center and half-extents.
///
/// Half-extents are non-negative. A zero-extent box is valid and arises from
/// degenerate input (a single point, or no points at all).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Center point of the box.
    pub center: Vec3,
    /// Half the box's span along each axis.
    pub half_extents: Vec3,
}

impl Aabb {
    /// Creates a box from its center and half-extents.
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        debug_assert!(
            half_extents.cmpge(Vec3::ZERO).all(),
            "half-extents must be non-negative"
        );
        Self {
            center,
            half_extents,
        }
    }

    /// Creates a box from its minimum and maximum corners.
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self::new(0.5 * (min + max), 0.5 * (max - min))
    }

    /// The minimal box covering a set of points.
    ///
    /// A single point yields a zero-extent box at that point; no points at
    /// all yield a zero-extent box at the origin. Neither is an error.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        let mut any = false;
        for p in points {
            min = min.min(p);
            max = max.max(p);
            any = true;
        }
        if any {
            Self::from_min_max(min, max)
        } else {
            Self::new(Vec3::ZERO, Vec3::ZERO)
        }
    }

    /// The minimum corner of the box.
    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    /// The maximum corner of the box.
    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }

    /// Whether `point` lies inside or on the boundary of the box.
    pub fn contains_point(&self, point: Vec3) -> bool {
        let d = (point - self.center).abs();
        d.cmple(self.half_extents).all()
    }

    /// Splits the box into its eight equal octants, in [`Octant`] slot order.
    ///
    /// Each child has half the parent's extents and a center offset by
    /// ±half of the child extents along each axis.
    pub fn subdivide(&self) -> [Aabb; 8] {
        let child_extents = 0.5 * self.half_extents;
        Octant::ALL
            .map(|octant| Aabb::new(self.center + octant.offset_sign() * child_extents, child_extents))
    }

    /// Slab test of a ray against the box.
    ///
    /// Returns the entry distance along the ray, clamped to zero when the
    /// origin is inside, or `None` if the ray misses the box or the box lies
    /// entirely behind the origin. Directions with a zero component are
    /// handled by requiring the origin to lie within that slab; nothing is
    /// ever divided by zero.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;

        for axis in 0..3 {
            let o = ray.origin[axis] - self.center[axis];
            let d = ray.dir[axis];
            let e = self.half_extents[axis];

            if d.abs() < PARALLEL_EPS {
                // Parallel to this slab: either always inside it or never.
                if o.abs() > e {
                    return None;
                }
            } else {
                let inv = 1.0 / d;
                let mut t0 = (-e - o) * inv;
                let mut t1 = (e - o) * inv;
                if t0 > t1 {
                    std::mem::swap(&mut t0, &mut t1);
                }
                t_min = t_min.max(t0);
                t_max = t_max.min(t1);
                if t_min > t_max {
                    return None;
                }
            }
        }

        if t_max < 0.0 {
            return None;
        }
        Some(t_min.max(0.0))
    }
}
