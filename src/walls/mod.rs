mod chain;
mod spec;

pub use chain::{total_run, WallChainBuilder, WallSegmentGeometry};
pub use spec::WallSpec;
