use crate::error::{LayoutError, Result};
use crate::layout::SectionTransform;

use super::{BoundingBox3D, CabinetBoxes, Position3D};

/// Applies section placement transforms to cabinet panel boxes, producing
/// world-space axis-aligned boxes.
pub struct SpatialTransformMapper<'a> {
    cabinets: &'a [CabinetBoxes],
    transforms: &'a [SectionTransform],
}

impl<'a> SpatialTransformMapper<'a> {
    /// Creates a mapper over paired cabinets and transforms.
    #[must_use]
    pub fn new(cabinets: &'a [CabinetBoxes], transforms: &'a [SectionTransform]) -> Self {
        Self {
            cabinets,
            transforms,
        }
    }

    /// Maps every cabinet's local boxes into world space through its
    /// paired transform.
    ///
    /// # Errors
    ///
    /// Returns an error if the cabinet and transform lists differ in
    /// length.
    pub fn execute(&self) -> Result<Vec<Vec<BoundingBox3D>>> {
        if self.cabinets.len() != self.transforms.len() {
            return Err(LayoutError::CountMismatch {
                cabinets: self.cabinets.len(),
                transforms: self.transforms.len(),
            }
            .into());
        }
        Ok(self
            .cabinets
            .iter()
            .zip(self.transforms)
            .map(|(cabinet, transform)| {
                cabinet
                    .boxes
                    .iter()
                    .map(|bb| apply_transform(bb, transform))
                    .collect()
            })
            .collect())
    }
}

/// Returns the planar footprint `(min_x, min_y, max_x, max_y)` of a box
/// rotated about the world origin, before any translation or clamping.
///
/// The rotation is planar, so a non-multiple-of-90-degree angle enlarges
/// the axis-aligned footprint (a square grows by up to sqrt(2)); exact
/// quarter turns only swap or preserve the sizes.
#[must_use]
pub fn rotated_footprint(bb: &BoundingBox3D, degrees: f64) -> (f64, f64, f64, f64) {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let corners = [
        (bb.origin.x, bb.origin.y),
        (bb.origin.x + bb.size_x, bb.origin.y),
        (bb.origin.x, bb.origin.y + bb.size_y),
        (bb.origin.x + bb.size_x, bb.origin.y + bb.size_y),
    ];

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for (x, y) in corners {
        let rx = x * cos - y * sin;
        let ry = x * sin + y * cos;
        min_x = min_x.min(rx);
        min_y = min_y.min(ry);
        max_x = max_x.max(rx);
        max_y = max_y.max(ry);
    }
    (min_x, min_y, max_x, max_y)
}

/// Rotates, translates, and clamps one box into world space.
///
/// Clamping is a deliberate post-step: both footprint corners are clamped
/// to zero independently, so geometry a caller pushes across the origin is
/// clipped rather than shifted. Callers choose translations large enough
/// that meaningful geometry stays clear of zero.
fn apply_transform(bb: &BoundingBox3D, transform: &SectionTransform) -> BoundingBox3D {
    let (min_x, min_y, max_x, max_y) = rotated_footprint(bb, transform.rotation_z);

    let min_x = (min_x + transform.position.x).max(0.0);
    let min_y = (min_y + transform.position.y).max(0.0);
    let max_x = (max_x + transform.position.x).max(0.0);
    let max_y = (max_y + transform.position.y).max(0.0);
    let min_z = (bb.origin.z + transform.position.z).max(0.0);
    let max_z = (bb.origin.z + bb.size_z + transform.position.z).max(0.0);

    BoundingBox3D {
        origin: Position3D {
            x: min_x,
            y: min_y,
            z: min_z,
        },
        size_x: max_x - min_x,
        size_y: max_y - min_y,
        size_z: max_z - min_z,
    }
}
