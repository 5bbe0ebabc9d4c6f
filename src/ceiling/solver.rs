use crate::error::{GeometryError, Result};
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::{lerp, Point2, TOLERANCE};
use crate::walls::WallSegmentGeometry;

use super::{ApexConfig, ApexPoint, CeilingConfig, APEX_RISE};

/// One triangular ceiling panel spanning a wall's top edge to the apex.
#[derive(Debug, Clone, PartialEq)]
pub struct CeilingFacet {
    /// Index of the wall whose top edge this facet spans.
    pub wall_index: usize,
    /// Start of the facet's edge, at `edge_height`.
    pub edge_start: Point2,
    /// End of the facet's edge, at `edge_height`.
    pub edge_end: Point2,
    /// Height of the facet edge above the floor.
    pub edge_height: f64,
    /// The shared apex; identical across all facets of one geometry.
    pub apex: ApexPoint,
}

impl CeilingFacet {
    /// Returns the center of the facet's edge segment.
    #[must_use]
    pub fn edge_center(&self) -> Point2 {
        Point2::new(
            (self.edge_start.x + self.edge_end.x) / 2.0,
            (self.edge_start.y + self.edge_end.y) / 2.0,
        )
    }

    /// Returns the facet's incline from the horizontal, in degrees.
    #[must_use]
    pub fn slope_degrees(&self) -> f64 {
        let rise = self.apex.z - self.edge_height;
        let run = (self.edge_center() - self.apex.planar()).norm();
        rise.atan2(run).to_degrees()
    }
}

/// A fan of ceiling facets radiating from a single apex.
#[derive(Debug, Clone)]
pub struct RadialCeilingGeometry {
    pub apex: ApexPoint,
    pub facets: Vec<CeilingFacet>,
    pub edge_height: f64,
}

impl RadialCeilingGeometry {
    /// Returns the ceiling height at a planar point, interpolating along
    /// the facet nearest to it.
    #[must_use]
    pub fn height_at(&self, x: f64, y: f64) -> f64 {
        let edges: Vec<(Point2, Point2)> = self
            .facets
            .iter()
            .map(|f| (f.edge_start, f.edge_end))
            .collect();
        interpolated_height(&self.apex, self.edge_height, &edges, &Point2::new(x, y))
    }
}

/// Computes the apex point and ceiling facet fan for a wall chain, and
/// answers ceiling-height and cabinet-height queries.
pub struct ApexCeilingSolver {
    walls: Vec<WallSegmentGeometry>,
    config: CeilingConfig,
}

impl ApexCeilingSolver {
    /// Creates a solver over a wall chain and ceiling configuration.
    #[must_use]
    pub fn new(walls: Vec<WallSegmentGeometry>, config: CeilingConfig) -> Self {
        Self { walls, config }
    }

    /// Returns the wall chain this solver works over.
    #[must_use]
    pub fn walls(&self) -> &[WallSegmentGeometry] {
        &self.walls
    }

    /// Returns the ceiling configuration.
    #[must_use]
    pub fn config(&self) -> &CeilingConfig {
        &self.config
    }

    /// Computes the apex point, or `None` for a flat ceiling.
    ///
    /// An explicit apex is returned unchanged. An auto apex sits at the
    /// unweighted centroid of the wall midpoints, raised [`APEX_RISE`]
    /// above the edge height.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute_apex_point(&self) -> Option<ApexPoint> {
        match self.config.apex() {
            ApexConfig::Explicit(apex) => Some(apex),
            ApexConfig::Flat => None,
            ApexConfig::Auto => {
                let n = self.walls.len().max(1) as f64;
                let (sx, sy) = self
                    .walls
                    .iter()
                    .fold((0.0, 0.0), |(sx, sy), w| (sx + w.midpoint.x, sy + w.midpoint.y));
                Some(ApexPoint {
                    x: sx / n,
                    y: sy / n,
                    z: self.config.edge_height() + APEX_RISE,
                })
            }
        }
    }

    /// Builds one ceiling facet per wall, all sharing the given apex.
    ///
    /// # Errors
    ///
    /// Returns an error if the chain has fewer than 3 walls.
    pub fn compute_ceiling_facets(&self, apex: &ApexPoint) -> Result<RadialCeilingGeometry> {
        if self.walls.len() < 3 {
            return Err(GeometryError::TooFewWalls {
                count: self.walls.len(),
            }
            .into());
        }
        let edge_height = self.config.edge_height();
        let facets = self
            .walls
            .iter()
            .map(|w| CeilingFacet {
                wall_index: w.index,
                edge_start: w.start,
                edge_end: w.end,
                edge_height,
                apex: *apex,
            })
            .collect();
        Ok(RadialCeilingGeometry {
            apex: *apex,
            facets,
            edge_height,
        })
    }

    /// Returns the ceiling height at a planar point.
    ///
    /// Interpolates linearly from the apex height down to the edge height
    /// along the facet nearest the query point; a flat ceiling returns the
    /// edge height everywhere.
    #[must_use]
    pub fn ceiling_height_at(&self, x: f64, y: f64) -> f64 {
        let Some(apex) = self.compute_apex_point() else {
            return self.config.edge_height();
        };
        let edges: Vec<(Point2, Point2)> =
            self.walls.iter().map(|w| (w.start, w.end)).collect();
        interpolated_height(&apex, self.config.edge_height(), &edges, &Point2::new(x, y))
    }

    /// Returns the maximum cabinet height against the given wall.
    ///
    /// A wall with a window caps the cabinet below the sill (sill height
    /// minus the configured clearance) regardless of the ceiling; otherwise
    /// the ceiling height at the wall's midpoint applies.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall index is out of range.
    pub fn cabinet_height_for_wall(&self, wall_index: usize) -> Result<f64> {
        let wall = self.walls.get(wall_index).ok_or(GeometryError::WallIndexOutOfRange {
            index: wall_index,
            wall_count: self.walls.len(),
        })?;
        if let Some(window) = self.config.window_for(wall_index) {
            return Ok(window.sill_height() - self.config.sill_clearance());
        }
        Ok(self.ceiling_height_at(wall.midpoint.x, wall.midpoint.y))
    }
}

/// Interpolates the ceiling height at `q` against the nearest edge.
///
/// `t` is the ratio of the apex-to-query distance over the apex-to-edge-
/// center distance, clamped to [0, 1]; the height never rises above the
/// apex or falls below the edge height.
fn interpolated_height(
    apex: &ApexPoint,
    edge_height: f64,
    edges: &[(Point2, Point2)],
    q: &Point2,
) -> f64 {
    let mut nearest: Option<(f64, Point2)> = None;
    for (start, end) in edges {
        let dist = point_to_segment_dist(q, start, end);
        let center = Point2::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0);
        match nearest {
            Some((best, _)) if best <= dist => {}
            _ => nearest = Some((dist, center)),
        }
    }
    let Some((_, edge_center)) = nearest else {
        return edge_height;
    };

    let d_apex = (q - apex.planar()).norm();
    let d_edge = (edge_center - apex.planar()).norm();
    let t = if d_edge < TOLERANCE {
        1.0
    } else {
        (d_apex / d_edge).clamp(0.0, 1.0)
    };
    lerp(apex.z, edge_height, t)
}
