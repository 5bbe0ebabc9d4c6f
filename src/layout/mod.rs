mod fit;
mod planner;
mod room;

pub use fit::{FitError, FitErrorKind};
pub use planner::{RoomSectionLayoutPlanner, SectionTransform, WallSectionAssignment};
pub use room::{RoomModel, SectionSpec, SectionWidth, WallRef};
