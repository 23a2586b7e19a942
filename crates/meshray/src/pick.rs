//! Cursor picking against an octree.
//!
//! Converts a cursor position into a mesh-local ray and asks the octree for
//! the nearest triangle along it. The screen-to-ray conversion needs nothing
//! but the projection, view and world matrices, so it stays independent of
//! any rendering backend.

use glam::{Mat4, Vec2, Vec3};
use meshray_core::{ray_triangle, Ray, TriangleMesh};
use meshray_octree::Octree;

/// Nearest triangle hit by a pick ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickResult {
    /// Id of the picked triangle.
    pub triangle: u32,
    /// Parametric distance to the hit along the pick ray.
    pub t: f32,
    /// Hit position, in the space the ray was expressed in.
    pub position: Vec3,
}

/// Builds a mesh-local pick ray from a cursor position.
///
/// `screen` is the cursor in pixels with the origin at the top-left corner;
/// `viewport` is the viewport size in pixels. The cursor is first mapped to a
/// ray through the eye in view space — the projection matrix's `[0][0]` and
/// `[1][1]` terms undo the perspective scaling — and then carried into the
/// mesh's local space through the inverted `view` and `world` matrices. The
/// returned direction is unit length, so hit distances are mesh-local units.
///
/// Assumes a left-handed, +z-forward view space (`Mat4::perspective_lh` /
/// `Mat4::look_at_lh`).
pub fn pick_ray(screen: Vec2, viewport: Vec2, proj: &Mat4, view: &Mat4, world: &Mat4) -> Ray {
    let vx = (2.0 * screen.x / viewport.x - 1.0) / proj.x_axis.x;
    let vy = (-2.0 * screen.y / viewport.y + 1.0) / proj.y_axis.y;

    let view_ray = Ray::new(Vec3::ZERO, Vec3::new(vx, vy, 1.0));

    let to_local = world.inverse() * view.inverse();
    view_ray.transform(&to_local).normalized()
}

/// Picks the nearest mesh triangle hit by `ray`.
pub fn pick(octree: &Octree, ray: &Ray) -> Option<PickResult> {
    octree.nearest_hit(ray).map(|hit| PickResult {
        triangle: hit.triangle,
        t: hit.t,
        position: ray.at(hit.t),
    })
}

/// Linear-scan reference picker.
///
/// Scans every triangle of `mesh` for the nearest hit, with the same
/// tie-breaking as the octree path (lower triangle id wins at equal `t`).
/// Slower than [`pick`] on anything but tiny meshes; kept as the oracle the
/// octree path is validated against.
pub fn pick_brute_force(mesh: &TriangleMesh, ray: &Ray) -> Option<PickResult> {
    let mut best: Option<PickResult> = None;
    for id in 0..mesh.num_triangles() {
        let [v0, v1, v2] = mesh.triangle(id);
        if let Some(t) = ray_triangle(ray, v0, v1, v2) {
            if best.map_or(true, |b| t < b.t) {
                #[allow(clippy::cast_possible_truncation)]
                let triangle = id as u32;
                best = Some(PickResult {
                    triangle,
                    t,
                    position: ray.at(t),
                });
            }
        }
    }
    best
}
