mod apex;
mod solver;

pub use apex::{ApexConfig, ApexPoint, CeilingConfig, WindowSpec};
pub use solver::{ApexCeilingSolver, CeilingFacet, RadialCeilingGeometry};

/// Vertical rise of an auto-computed apex above the ceiling edge height.
///
/// A typical raised-ceiling reveal; treated as a convention constant, not a
/// structural requirement.
pub const APEX_RISE: f64 = 12.0;

/// Default clearance kept between a window sill and the cabinet top.
pub const DEFAULT_SILL_CLEARANCE: f64 = 2.0;
