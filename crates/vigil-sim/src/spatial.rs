//! Spatial query service over the ECS world.
//!
//! Brute-force radius queries filtered by category, and line-of-sight
//! against the occlusion grid. Systems depend on the [`SpatialQuery`]
//! trait only.

use std::cmp::Ordering;

use hecs::{Entity, World};

use vigil_core::components::{Health, Vitality};
use vigil_core::enums::{Category, CategoryMask};
use vigil_core::types::Position;
use vigil_terrain::{has_line_of_sight, OcclusionGrid};

/// Radius overlap and occlusion queries.
pub trait SpatialQuery {
    /// All entities whose category is in `mask` within `radius` of
    /// `center`, paired with their positions. Result order is unspecified.
    fn query_radius(&self, center: &Position, radius: f64, mask: CategoryMask) -> Vec<(Entity, Position)>;

    /// True if no blocking geometry lies between the two points.
    fn line_of_sight_clear(&self, from: &Position, to: &Position) -> bool;
}

/// Entity handle ordered by its bit representation, for deterministic
/// tie-breaking in selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityKey(pub Entity);

impl Ord for EntityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.to_bits().cmp(&other.0.to_bits())
    }
}

impl PartialOrd for EntityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Spatial queries answered directly from the world and grid.
pub struct WorldSpatial<'a> {
    world: &'a World,
    grid: &'a OcclusionGrid,
}

impl<'a> WorldSpatial<'a> {
    pub fn new(world: &'a World, grid: &'a OcclusionGrid) -> Self {
        Self { world, grid }
    }
}

impl SpatialQuery for WorldSpatial<'_> {
    fn query_radius(&self, center: &Position, radius: f64, mask: CategoryMask) -> Vec<(Entity, Position)> {
        let mut query = self.world.query::<(&Position, &Category)>();
        query
            .iter()
            .filter(|(_, (pos, category))| mask.contains(**category) && center.range_to(pos) <= radius)
            .map(|(entity, (pos, _))| (entity, *pos))
            .collect()
    }

    fn line_of_sight_clear(&self, from: &Position, to: &Position) -> bool {
        has_line_of_sight(self.grid, from, to)
    }
}

/// Current position of an entity, or None if it no longer exists.
pub fn position_of(world: &World, entity: Entity) -> Option<Position> {
    world.get::<&Position>(entity).ok().map(|pos| *pos)
}

/// True if the entity exists and its vitality reports it alive. An entity
/// without a `Health` component is never a valid hostile.
pub fn is_alive(world: &World, entity: Entity) -> bool {
    world
        .get::<&Health>(entity)
        .map(|health| health.is_alive())
        .unwrap_or(false)
}
