//! Hex board geometry with axial coordinates

use std::fmt;

use serde::{Deserialize, Serialize};

/// Axial hex coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hex {
    pub q: i8,
    pub r: i8,
}

/// Direction vectors in axial coordinates (dq, dr).
/// The order is fixed: move enumeration and tie-breaking depend on it.
pub const DIRECTIONS: [(i8, i8); 6] = [
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
];

impl Hex {
    pub const fn new(q: i8, r: i8) -> Self {
        Self { q, r }
    }

    /// The six (neighbor, jump target) pairs in direction order.
    /// The jump target lies two cells beyond the neighbor.
    pub fn neighbor_jump_pairs(self) -> [(Hex, Hex); 6] {
        let mut pairs = [(self, self); 6];
        for (pair, &(dq, dr)) in pairs.iter_mut().zip(DIRECTIONS.iter()) {
            *pair = (
                Hex::new(self.q + dq, self.r + dr),
                Hex::new(self.q + 2 * dq, self.r + 2 * dr),
            );
        }
        pairs
    }

    /// Euclidean distance to another hex. A heuristic signal only,
    /// never a legality rule.
    pub fn distance_to(self, other: Hex) -> f32 {
        let dq = (other.q - self.q) as f32;
        let dr = (other.r - self.r) as f32;
        (dq * dq + dr * dr).sqrt()
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}
