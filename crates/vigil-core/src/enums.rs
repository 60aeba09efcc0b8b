//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Alertness state of a sentinel. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertState {
    /// Patrolling the route, scanning for intruders.
    #[default]
    Guard,
    /// Halted while a candidate threat is being confirmed.
    Danger,
    /// Engaging a confirmed target.
    Attack,
}

impl AlertState {
    /// Display label for the presentation layer.
    pub fn label(self) -> &'static str {
        match self {
            AlertState::Guard => "Patrol",
            AlertState::Danger => "Danger",
            AlertState::Attack => "Attack",
        }
    }
}

/// Faction/category tag carried by every simulated body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Sentinel,
    Intruder,
}

impl Category {
    /// Single-bit mask for this category.
    pub fn mask(self) -> CategoryMask {
        match self {
            Category::Sentinel => CategoryMask::SENTINEL,
            Category::Intruder => CategoryMask::INTRUDER,
        }
    }
}

/// Bit set of categories used to filter spatial queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryMask(pub u32);

impl CategoryMask {
    pub const NONE: CategoryMask = CategoryMask(0);
    pub const SENTINEL: CategoryMask = CategoryMask(1 << 0);
    pub const INTRUDER: CategoryMask = CategoryMask(1 << 1);
    pub const ALL: CategoryMask = CategoryMask(u32::MAX);

    pub fn contains(self, category: Category) -> bool {
        self.0 & category.mask().0 != 0
    }

    pub fn union(self, other: CategoryMask) -> CategoryMask {
        CategoryMask(self.0 | other.0)
    }
}
