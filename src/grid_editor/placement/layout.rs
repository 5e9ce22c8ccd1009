//! Placed tiles and the changes made to them

use bevy::math::Vec3;

/// Default absolute tolerance for position comparisons
pub const DEFAULT_EPSILON: f32 = f32::EPSILON * 8.0;

/// Compare two floats the way the engine does: relative to their magnitude,
/// with an absolute floor of `epsilon`.
pub fn approximately(a: f32, b: f32, epsilon: f32) -> bool {
    (b - a).abs() < (1e-6 * a.abs().max(b.abs())).max(epsilon)
}

fn same_position(a: Vec3, b: Vec3, epsilon: f32) -> bool {
    approximately(a.x, b.x, epsilon) && approximately(a.y, b.y, epsilon) && approximately(a.z, b.z, epsilon)
}

/// Stable identity of a placed tile, preserved across undo and redo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u64);

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub id: TileId,
    pub position: Vec3,
}

/// A single mutation of the tile layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TileChange {
    Created { id: TileId, position: Vec3 },
    Deleted { id: TileId, position: Vec3 },
    Moved { id: TileId, from: Vec3, to: Vec3 },
}

impl TileChange {
    /// The change that undoes this one
    pub fn inverse(&self) -> TileChange {
        match *self {
            TileChange::Created { id, position } => TileChange::Deleted { id, position },
            TileChange::Deleted { id, position } => TileChange::Created { id, position },
            TileChange::Moved { id, from, to } => TileChange::Moved { id, from: to, to: from },
        }
    }
}

/// Ordered collection of placed tiles.
///
/// Order is insertion order; lookups that return "the first match" follow it.
#[derive(Debug, Clone)]
pub struct TileLayout {
    tiles: Vec<Tile>,
    next_id: u64,
}

impl Default for TileLayout {
    fn default() -> Self {
        Self {
            tiles: Vec::new(),
            next_id: 1,
        }
    }
}

impl TileLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.id == id)
    }

    pub fn position(&self, id: TileId) -> Option<Vec3> {
        self.get(id).map(|tile| tile.position)
    }

    /// Add a new tile with a fresh id
    pub fn insert(&mut self, position: Vec3) -> TileId {
        let id = TileId(self.next_id);
        self.next_id += 1;
        self.tiles.push(Tile { id, position });
        id
    }

    /// Re-insert a tile under a known id, e.g. when undoing a delete.
    /// Returns false if a tile with that id already exists.
    pub fn restore(&mut self, id: TileId, position: Vec3) -> bool {
        if self.get(id).is_some() {
            return false;
        }
        self.next_id = self.next_id.max(id.0 + 1);
        self.tiles.push(Tile { id, position });
        true
    }

    pub fn remove(&mut self, id: TileId) -> Option<Tile> {
        let index = self.tiles.iter().position(|tile| tile.id == id)?;
        Some(self.tiles.remove(index))
    }

    /// Move a tile, returning its previous position
    pub fn set_position(&mut self, id: TileId, position: Vec3) -> Option<Vec3> {
        let tile = self.tiles.iter_mut().find(|tile| tile.id == id)?;
        Some(std::mem::replace(&mut tile.position, position))
    }

    /// All tiles whose position approximately equals `position` on every axis
    pub fn find_at(&self, position: Vec3, epsilon: f32) -> Vec<TileId> {
        self.tiles
            .iter()
            .filter(|tile| same_position(tile.position, position, epsilon))
            .map(|tile| tile.id)
            .collect()
    }

    pub fn count_at(&self, position: Vec3, epsilon: f32) -> usize {
        self.tiles
            .iter()
            .filter(|tile| same_position(tile.position, position, epsilon))
            .count()
    }

    /// Apply a change recorded earlier. Returns false when it no longer fits
    /// the layout (the tile is missing, or already exists for a create).
    pub fn apply(&mut self, change: &TileChange) -> bool {
        match *change {
            TileChange::Created { id, position } => self.restore(id, position),
            TileChange::Deleted { id, .. } => self.remove(id).is_some(),
            TileChange::Moved { id, to, .. } => self.set_position(id, to).is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approximately_tracks_magnitude() {
        assert!(approximately(1000.0, 1000.0005, DEFAULT_EPSILON));
        assert!(!approximately(1.0, 1.001, DEFAULT_EPSILON));
        assert!(approximately(0.0, 0.0, DEFAULT_EPSILON));
        assert!(!approximately(0.0, 1e-4, DEFAULT_EPSILON));
        assert!(approximately(0.0, 1e-4, 1e-3));
    }

    #[test]
    fn find_at_returns_every_match_in_order() {
        let mut layout = TileLayout::new();
        let a = layout.insert(Vec3::new(0.5, 0.0, 0.5));
        layout.insert(Vec3::new(1.5, 0.0, 0.5));
        let c = layout.insert(Vec3::new(0.5, 0.0, 0.5));

        assert_eq!(layout.find_at(Vec3::new(0.5, 0.0, 0.5), DEFAULT_EPSILON), vec![a, c]);
        assert_eq!(layout.count_at(Vec3::new(2.5, 0.0, 0.5), DEFAULT_EPSILON), 0);
    }

    #[test]
    fn restore_keeps_ids_unique() {
        let mut layout = TileLayout::new();
        let a = layout.insert(Vec3::ZERO);
        let removed = layout.remove(a);
        assert_eq!(removed.map(|tile| tile.id), Some(a));

        assert!(layout.restore(a, Vec3::ZERO));
        assert!(!layout.restore(a, Vec3::ONE));

        let b = layout.insert(Vec3::X);
        assert_ne!(a, b);
    }

    #[test]
    fn restore_advances_id_allocator() {
        let mut layout = TileLayout::new();
        assert!(layout.restore(TileId(41), Vec3::ZERO));
        assert_eq!(layout.insert(Vec3::X), TileId(42));
    }

    #[test]
    fn change_and_inverse_cancel_out() {
        let mut layout = TileLayout::new();
        let a = layout.insert(Vec3::ZERO);
        let change = TileChange::Moved {
            id: a,
            from: Vec3::ZERO,
            to: Vec3::new(2.0, 0.0, 2.0),
        };

        assert!(layout.apply(&change));
        assert_eq!(layout.position(a), Some(Vec3::new(2.0, 0.0, 2.0)));
        assert!(layout.apply(&change.inverse()));
        assert_eq!(layout.position(a), Some(Vec3::ZERO));

        let deleted = TileChange::Deleted { id: a, position: Vec3::ZERO };
        assert!(layout.apply(&deleted));
        assert!(layout.is_empty());
        assert!(!layout.apply(&deleted));
        assert!(layout.apply(&deleted.inverse()));
        assert_eq!(layout.len(), 1);
    }
}
