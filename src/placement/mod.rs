mod boxes;
mod mapper;

pub use boxes::{BoundingBox3D, CabinetBoxes, Position3D};
pub use mapper::{rotated_footprint, SpatialTransformMapper};
