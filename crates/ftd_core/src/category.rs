//! Collision categories
//!
//! Physics bodies are tagged with a category bitmask in the scene asset. The
//! chase controller never interprets individual bits; it only compares the
//! categories of the bodies it bound at load time against the categories
//! reported in contact notifications.

use bitflags::bitflags;

bitflags! {
    /// Collision category bitmask of a physics body
    ///
    /// The named constants match the layout of the bundled scene asset.
    /// Scene files may use any other bits; unknown bits are retained.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct CollisionCategory: u32 {
        /// The player sprite
        const PLAYER = 1 << 0;
        /// Zombie sprites
        const ZOMBIE = 1 << 1;
        /// The goal sprite
        const GOAL = 1 << 2;
        /// Walls and other static obstacles
        const WALL = 1 << 3;
        /// Contact with everything
        const ALL = 0xFFFFFFFF;
    }
}

impl CollisionCategory {
    /// Build a category from raw scene-file bits, keeping unknown bits
    #[inline]
    pub fn from_raw(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }

    /// Whether a body with this contact mask reports contacts with `other`
    #[inline]
    pub fn detects(&self, other: CollisionCategory) -> bool {
        self.intersects(other)
    }
}
