mod generator;
mod metadata;

pub use generator::PanelCutMetadataGenerator;
pub use metadata::{
    AngleCut, PanelAngleSpec, PanelCutMetadata, PanelEdge, PanelRole, PanelTaperSpec,
    TaperDirection,
};

/// Junction angles at or below this threshold (degrees) produce no cut.
pub const ANGLE_THRESHOLD: f64 = 0.5;

/// Ceiling drops at or below this threshold (inches) produce no taper.
pub const TAPER_THRESHOLD: f64 = 0.5;
