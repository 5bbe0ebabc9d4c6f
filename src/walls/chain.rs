use crate::math::Point2;

use super::WallSpec;

/// Derived absolute geometry for one wall segment in a chain.
///
/// Positions live in a shared 2D plane; `angle` is the wall's absolute
/// direction in degrees. Instances are immutable snapshots, recomputed
/// whenever the wall specs change.
#[derive(Debug, Clone)]
pub struct WallSegmentGeometry {
    /// Position of this wall in the chain, starting at 0.
    pub index: usize,
    /// Start point of the wall segment.
    pub start: Point2,
    /// End point of the wall segment.
    pub end: Point2,
    /// Wall length.
    pub length: f64,
    /// Absolute direction in degrees.
    pub angle: f64,
    /// Arithmetic mean of start and end.
    pub midpoint: Point2,
}

/// Walks an ordered list of wall specs into absolute positions.
///
/// Wall 0 starts at the origin. A wall with an explicit angle uses it
/// directly as its absolute direction; a wall without one turns by the
/// symmetric exterior angle `180 - 360/n` from the previous direction,
/// where `n` is the total wall count. Each wall starts where the previous
/// one ends, so the chain is connected by construction.
pub struct WallChainBuilder<'a> {
    specs: &'a [WallSpec],
}

impl<'a> WallChainBuilder<'a> {
    /// Creates a new `WallChainBuilder` over the given specs.
    #[must_use]
    pub fn new(specs: &'a [WallSpec]) -> Self {
        Self { specs }
    }

    /// Builds the absolute geometry for every wall in the chain.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn build(&self) -> Vec<WallSegmentGeometry> {
        let n = self.specs.len();
        let symmetric_turn = if n == 0 {
            0.0
        } else {
            180.0 - 360.0 / n as f64
        };

        let mut walls = Vec::with_capacity(n);
        let mut cursor = Point2::origin();
        let mut direction = 0.0;

        for (index, spec) in self.specs.iter().enumerate() {
            direction = match spec.angle() {
                Some(a) => a,
                None if index == 0 => 0.0,
                None => direction + symmetric_turn,
            };

            let rad = direction.to_radians();
            let end = Point2::new(
                cursor.x + spec.length() * rad.cos(),
                cursor.y + spec.length() * rad.sin(),
            );
            let midpoint = Point2::new((cursor.x + end.x) / 2.0, (cursor.y + end.y) / 2.0);

            walls.push(WallSegmentGeometry {
                index,
                start: cursor,
                end,
                length: spec.length(),
                angle: direction,
                midpoint,
            });
            cursor = end;
        }

        walls
    }
}

/// Returns the total run length of a wall chain.
#[must_use]
pub fn total_run(walls: &[WallSegmentGeometry]) -> f64 {
    walls.iter().map(|w| w.length).sum()
}
