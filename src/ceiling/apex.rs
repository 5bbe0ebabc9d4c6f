use std::collections::HashMap;

use crate::error::{GeometryError, Result};
use crate::math::Point2;

use super::DEFAULT_SILL_CLEARANCE;

/// The single elevated point that all ceiling facets connect to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApexPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ApexPoint {
    /// Creates an apex point.
    ///
    /// # Errors
    ///
    /// Returns an error if `z` is not positive.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        if z <= 0.0 {
            return Err(GeometryError::NonPositiveHeight(z).into());
        }
        Ok(Self { x, y, z })
    }

    /// Returns the planar (x, y) projection of the apex.
    #[must_use]
    pub fn planar(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// How the ceiling apex is determined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ApexConfig {
    /// Apex derived from the centroid of the wall midpoints.
    Auto,
    /// Apex pinned to an explicit point.
    Explicit(ApexPoint),
    /// Flat ceiling with no apex.
    Flat,
}

/// A window opening on one wall.
///
/// Cabinets under a window stop below the sill regardless of the ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSpec {
    sill_height: f64,
    head_height: f64,
}

impl WindowSpec {
    /// Creates a window spec.
    ///
    /// # Errors
    ///
    /// Returns an error if either height is not positive or the head sits
    /// at or below the sill.
    pub fn new(sill_height: f64, head_height: f64) -> Result<Self> {
        if sill_height <= 0.0 {
            return Err(GeometryError::NonPositiveHeight(sill_height).into());
        }
        if head_height <= sill_height {
            return Err(GeometryError::NonPositiveHeight(head_height - sill_height).into());
        }
        Ok(Self {
            sill_height,
            head_height,
        })
    }

    /// Returns the sill height.
    #[must_use]
    pub fn sill_height(&self) -> f64 {
        self.sill_height
    }

    /// Returns the head height.
    #[must_use]
    pub fn head_height(&self) -> f64 {
        self.head_height
    }
}

/// Ceiling configuration for one enclosure.
#[derive(Debug, Clone)]
pub struct CeilingConfig {
    apex: ApexConfig,
    edge_height: f64,
    sill_clearance: f64,
    windows: HashMap<usize, WindowSpec>,
}

impl CeilingConfig {
    /// Creates a ceiling configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `edge_height` is not positive.
    pub fn new(apex: ApexConfig, edge_height: f64) -> Result<Self> {
        if edge_height <= 0.0 {
            return Err(GeometryError::NonPositiveHeight(edge_height).into());
        }
        Ok(Self {
            apex,
            edge_height,
            sill_clearance: DEFAULT_SILL_CLEARANCE,
            windows: HashMap::new(),
        })
    }

    /// Registers a window on the given wall, replacing any existing one.
    #[must_use]
    pub fn with_window(mut self, wall_index: usize, window: WindowSpec) -> Self {
        self.windows.insert(wall_index, window);
        self
    }

    /// Overrides the sill clearance.
    #[must_use]
    pub fn with_sill_clearance(mut self, clearance: f64) -> Self {
        self.sill_clearance = clearance;
        self
    }

    /// Returns the apex configuration.
    #[must_use]
    pub fn apex(&self) -> ApexConfig {
        self.apex
    }

    /// Returns the ceiling height at the wall edges.
    #[must_use]
    pub fn edge_height(&self) -> f64 {
        self.edge_height
    }

    /// Returns the sill clearance.
    #[must_use]
    pub fn sill_clearance(&self) -> f64 {
        self.sill_clearance
    }

    /// Returns the window on the given wall, if any.
    #[must_use]
    pub fn window_for(&self, wall_index: usize) -> Option<&WindowSpec> {
        self.windows.get(&wall_index)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn apex_point_rejects_non_positive_z() {
        assert!(ApexPoint::new(0.0, 0.0, 0.0).is_err());
        assert!(ApexPoint::new(0.0, 0.0, -5.0).is_err());
        assert!(ApexPoint::new(0.0, 0.0, 108.0).is_ok());
    }

    #[test]
    fn window_rejects_inverted_heights() {
        assert!(WindowSpec::new(36.0, 36.0).is_err());
        assert!(WindowSpec::new(36.0, 30.0).is_err());
        assert!(WindowSpec::new(36.0, 72.0).is_ok());
    }

    #[test]
    fn config_rejects_non_positive_edge_height() {
        assert!(CeilingConfig::new(ApexConfig::Auto, 0.0).is_err());
        assert!(CeilingConfig::new(ApexConfig::Auto, 96.0).is_ok());
    }

    #[test]
    fn config_tracks_windows_per_wall() {
        let window = WindowSpec::new(36.0, 72.0).unwrap();
        let config = CeilingConfig::new(ApexConfig::Auto, 96.0)
            .unwrap()
            .with_window(1, window);
        assert!(config.window_for(0).is_none());
        assert!((config.window_for(1).unwrap().sill_height() - 36.0).abs() < 1e-10);
    }
}
