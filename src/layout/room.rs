use std::collections::HashMap;

use crate::error::{LayoutError, Result};
use crate::walls::{WallChainBuilder, WallSegmentGeometry, WallSpec};

/// Reference to a wall by position or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WallRef {
    Index(usize),
    Name(String),
}

/// A section's width: fixed, or filling the remaining wall run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SectionWidth {
    Fixed(f64),
    Fill,
}

/// One cabinet section to place against a room wall.
///
/// A section with no wall reference goes on wall 0.
#[derive(Debug, Clone)]
pub struct SectionSpec {
    pub width: SectionWidth,
    pub depth: f64,
    pub wall: Option<WallRef>,
}

impl SectionSpec {
    /// Creates a section spec.
    #[must_use]
    pub fn new(width: SectionWidth, depth: f64, wall: Option<WallRef>) -> Self {
        Self { width, depth, wall }
    }
}

/// A room's wall chain with name lookups for section placement.
///
/// Built once from wall specs; wall names (when given) resolve
/// [`WallRef::Name`] references.
pub struct RoomModel {
    walls: Vec<WallSegmentGeometry>,
    names: HashMap<String, usize>,
}

impl RoomModel {
    /// Builds the room's wall chain and name registry from specs.
    #[must_use]
    pub fn from_specs(specs: &[WallSpec]) -> Self {
        let walls = WallChainBuilder::new(specs).build();
        let names = specs
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.name().map(|n| (n.to_owned(), i)))
            .collect();
        Self { walls, names }
    }

    /// Returns the room's wall chain.
    #[must_use]
    pub fn walls(&self) -> &[WallSegmentGeometry] {
        &self.walls
    }

    /// Returns the number of walls.
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Resolves a section's wall reference to a plain index.
    ///
    /// A missing reference resolves to wall 0.
    ///
    /// # Errors
    ///
    /// Returns an error for an out-of-range index or an unknown name.
    pub fn resolve(&self, wall: Option<&WallRef>) -> Result<usize> {
        let index = match wall {
            None => 0,
            Some(WallRef::Index(i)) => *i,
            Some(WallRef::Name(name)) => *self
                .names
                .get(name)
                .ok_or_else(|| LayoutError::UnknownWallName(name.clone()))?,
        };
        if index >= self.walls.len() {
            return Err(LayoutError::WallIndexOutOfRange {
                index,
                wall_count: self.walls.len(),
            }
            .into());
        }
        Ok(index)
    }
}
