/// A position in room/world space.
///
/// Placed geometry keeps all components non-negative; that invariant is
/// enforced by the transform mapper's clamping step, not by this type, so
/// intermediate coordinates stay inspectable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// An axis-aligned box with its origin at the minimum corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox3D {
    pub origin: Position3D,
    pub size_x: f64,
    pub size_y: f64,
    pub size_z: f64,
}

impl BoundingBox3D {
    /// Creates a box from its minimum corner and sizes.
    #[must_use]
    pub fn new(origin: Position3D, size_x: f64, size_y: f64, size_z: f64) -> Self {
        Self {
            origin,
            size_x,
            size_y,
            size_z,
        }
    }
}

/// The local-space panel and shelf boxes of one generated cabinet.
#[derive(Debug, Clone, Default)]
pub struct CabinetBoxes {
    pub boxes: Vec<BoundingBox3D>,
}

impl CabinetBoxes {
    /// Creates a cabinet box list.
    #[must_use]
    pub fn new(boxes: Vec<BoundingBox3D>) -> Self {
        Self { boxes }
    }
}
