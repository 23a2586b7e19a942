//! Octant enumeration for box subdivision.
//!
//! Child ordering is fixed once, here: slot `index = x + 2*y + 4*z`, where a
//! set bit selects the positive half of that axis. [`Aabb::subdivide`] emits
//! children in this order and the octree indexes its child slots with it, so
//! the two can never disagree.
//!
//! [`Aabb::subdivide`]: crate::Aabb::subdivide

use glam::Vec3;

/// One of the eight octants of a subdivided box.
///
/// Naming: left/right is the x axis, bottom/top is y, back/front is z, with
/// "right", "top" and "front" on the positive halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Octant {
    /// -x, -y, -z
    LeftBottomBack = 0,
    /// +x, -y, -z
    RightBottomBack = 1,
    /// -x, +y, -z
    LeftTopBack = 2,
    /// +x, +y, -z
    RightTopBack = 3,
    /// -x, -y, +z
    LeftBottomFront = 4,
    /// +x, -y, +z
    RightBottomFront = 5,
    /// -x, +y, +z
    LeftTopFront = 6,
    /// +x, +y, +z
    RightTopFront = 7,
}

impl Octant {
    /// All eight octants in child-slot order.
    pub const ALL: [Octant; 8] = [
        Octant::LeftBottomBack,
        Octant::RightBottomBack,
        Octant::LeftTopBack,
        Octant::RightTopBack,
        Octant::LeftBottomFront,
        Octant::RightBottomFront,
        Octant::LeftTopFront,
        Octant::RightTopFront,
    ];

    /// Child-slot index of this octant.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The octant occupying a child slot.
    ///
    /// # Panics
    /// Panics if `index >= 8`.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }

    /// Per-axis sign (±1) of this octant's center offset from the parent
    /// center.
    pub fn offset_sign(self) -> Vec3 {
        let i = self as usize;
        Vec3::new(
            if i & 1 == 0 { -1.0 } else { 1.0 },
            if i & 2 == 0 { -1.0 } else { 1.0 },
            if i & 4 == 0 { -1.0 } else { 1.0 },
        )
    }
}
