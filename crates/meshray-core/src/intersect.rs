//! Ray/triangle and triangle/box intersection kernels.

use glam::Vec3;

use crate::aabb::Aabb;
use crate::ray::Ray;

/// Determinants below this are treated as a ray parallel to the triangle.
const DET_EPS: f32 = 1e-8;

/// Möller–Trumbore ray/triangle intersection.
///
/// Returns the parametric distance at which the ray crosses the triangle, or
/// `None` for a miss. Triangles are double-sided. Rays nearly parallel to the
/// triangle plane and crossings behind the origin (`t < 0`) report `None`
/// rather than propagating a near-zero division.
pub fn ray_triangle(ray: &Ray, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<f32> {
    let e1 = v1 - v0;
    let e2 = v2 - v0;

    let pvec = ray.dir.cross(e2);
    let det = e1.dot(pvec);
    if det.abs() < DET_EPS {
        return None;
    }
    let inv_det = 1.0 / det;

    let tvec = ray.origin - v0;
    let u = tvec.dot(pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(e1);
    let v = ray.dir.dot(qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = e2.dot(qvec) * inv_det;
    if t < 0.0 {
        return None;
    }
    Some(t)
}

/// Separating-axis triangle/box overlap test.
///
/// Tests the three box face normals, the triangle plane, and the nine edge
/// cross-product axes. Conservative: separation requires a strict gap, so a
/// triangle that merely touches a box face or edge counts as intersecting.
/// The octree build relies on that to never drop a triangle from an octant
/// it grazes.
pub fn triangle_aabb(v0: Vec3, v1: Vec3, v2: Vec3, aabb: &Aabb) -> bool {
    // Work in box-local space.
    let v0 = v0 - aabb.center;
    let v1 = v1 - aabb.center;
    let v2 = v2 - aabb.center;
    let e = aabb.half_extents;

    // Box face normals: the coordinate axes.
    for axis in 0..3 {
        let min = v0[axis].min(v1[axis]).min(v2[axis]);
        let max = v0[axis].max(v1[axis]).max(v2[axis]);
        if min > e[axis] || max < -e[axis] {
            return false;
        }
    }

    let f0 = v1 - v0;
    let f1 = v2 - v1;
    let f2 = v0 - v2;

    // Triangle plane.
    let normal = f0.cross(f1);
    let dist = normal.dot(v0);
    let radius = e.dot(normal.abs());
    if dist.abs() > radius {
        return false;
    }

    // Nine cross products of box axes and triangle edges.
    let axes = [
        Vec3::X.cross(f0),
        Vec3::X.cross(f1),
        Vec3::X.cross(f2),
        Vec3::Y.cross(f0),
        Vec3::Y.cross(f1),
        Vec3::Y.cross(f2),
        Vec3::Z.cross(f0),
        Vec3::Z.cross(f1),
        Vec3::Z.cross(f2),
    ];
    for axis in axes {
        let p0 = v0.dot(axis);
        let p1 = v1.dot(axis);
        let p2 = v2.dot(axis);
        let min = p0.min(p1).min(p2);
        let max = p0.max(p1).max(p2);
        let radius = e.dot(axis.abs());
        if min > radius || max < -radius {
            return false;
        }
    }

    true
}
