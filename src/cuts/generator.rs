use crate::ceiling::ApexCeilingSolver;
use crate::math::{direction_difference, TOLERANCE};
use crate::walls::WallSegmentGeometry;

use super::{
    AngleCut, PanelAngleSpec, PanelCutMetadata, PanelEdge, PanelRole, PanelTaperSpec,
    TaperDirection, ANGLE_THRESHOLD, TAPER_THRESHOLD,
};

/// Derives per-wall junction miters and ceiling tapers, and dispatches
/// per-panel cut metadata.
///
/// Angle and taper specs are each computed once and memoized; the caches
/// are cleared wholesale by [`invalidate_cache`](Self::invalidate_cache),
/// never partially updated. Geometry inputs are immutable, so invalidation
/// only matters when the underlying solver is replaced in place.
pub struct PanelCutMetadataGenerator {
    solver: ApexCeilingSolver,
    panel_depth: f64,
    angle_cache: Option<Vec<PanelAngleSpec>>,
    taper_cache: Option<Vec<PanelTaperSpec>>,
}

impl PanelCutMetadataGenerator {
    /// Creates a generator over the given solver.
    ///
    /// `panel_depth` is how far a cabinet's front face sits from its wall;
    /// taper fronts are sampled at that depth toward the apex.
    #[must_use]
    pub fn new(solver: ApexCeilingSolver, panel_depth: f64) -> Self {
        Self {
            solver,
            panel_depth,
            angle_cache: None,
            taper_cache: None,
        }
    }

    /// Returns the junction miter spec for every wall, computing and
    /// caching the list on first access.
    ///
    /// Each angle is half the absolute-direction difference to the
    /// adjacent wall, wrapping around the chain ends.
    pub fn junction_angles(&mut self) -> &[PanelAngleSpec] {
        if self.angle_cache.is_none() {
            let tapered = self.tapered_wall_flags();
            let specs = junction_specs(self.solver.walls(), &tapered);
            self.angle_cache = Some(specs);
        }
        self.angle_cache.as_deref().unwrap_or_default()
    }

    /// Returns the taper spec for every wall whose ceiling drop exceeds
    /// [`TAPER_THRESHOLD`], computing and caching the list on first access.
    pub fn ceiling_tapers(&mut self) -> &[PanelTaperSpec] {
        if self.taper_cache.is_none() {
            self.taper_cache = Some(self.compute_tapers());
        }
        self.taper_cache.as_deref().unwrap_or_default()
    }

    /// Returns the cut bundle for one (wall, panel role) pair, or `None`
    /// when there is nothing to cut.
    ///
    /// Side panels get a miter on their junction edge, top panels get the
    /// wall's taper. Back and bottom panels, negligible angles, and
    /// out-of-range wall indices all yield `None`; callers may probe
    /// arbitrary combinations while building exports.
    pub fn panel_cut_metadata(
        &mut self,
        wall_index: usize,
        role: PanelRole,
    ) -> Option<PanelCutMetadata> {
        if wall_index >= self.solver.walls().len() {
            return None;
        }
        match role {
            PanelRole::LeftSide | PanelRole::RightSide => {
                let spec = self
                    .junction_angles()
                    .iter()
                    .find(|s| s.wall_index == wall_index)
                    .copied()?;
                let (edge, angle) = if role == PanelRole::LeftSide {
                    (PanelEdge::Left, spec.left_angle)
                } else {
                    (PanelEdge::Right, spec.right_angle)
                };
                if angle <= ANGLE_THRESHOLD {
                    return None;
                }
                Some(PanelCutMetadata {
                    angle_cuts: vec![AngleCut {
                        edge,
                        angle,
                        bevel: false,
                    }],
                    taper: None,
                })
            }
            PanelRole::Top => {
                let taper = self
                    .ceiling_tapers()
                    .iter()
                    .find(|t| t.wall_index == wall_index)
                    .copied()?;
                Some(PanelCutMetadata {
                    angle_cuts: vec![],
                    taper: Some(taper),
                })
            }
            PanelRole::Bottom | PanelRole::Back => None,
        }
    }

    /// Renders a short human-readable note for one (wall, panel role)
    /// pair, or the empty string when there is nothing to cut.
    pub fn cut_notes(&mut self, wall_index: usize, role: PanelRole) -> String {
        let Some(meta) = self.panel_cut_metadata(wall_index, role) else {
            return String::new();
        };
        let mut parts = Vec::new();
        for cut in &meta.angle_cuts {
            let kind = if cut.bevel { "bevel" } else { "miter" };
            parts.push(format!(
                "{:.1} deg {kind}, {} edge",
                cut.angle,
                cut.edge.label()
            ));
        }
        if let Some(taper) = meta.taper {
            parts.push(format!(
                "taper {:.1} -> {:.1} front to back",
                taper.front_height, taper.back_height
            ));
        }
        parts.join("; ")
    }

    /// Returns the sorted wall indices needing a compound cut: a
    /// significant junction miter and a ceiling taper at once.
    pub fn compound_cut_walls(&mut self) -> Vec<usize> {
        self.junction_angles()
            .iter()
            .filter(|s| s.is_compound)
            .map(|s| s.wall_index)
            .collect()
    }

    /// Clears both memo caches, forcing recomputation on next access.
    pub fn invalidate_cache(&mut self) {
        self.angle_cache = None;
        self.taper_cache = None;
    }

    /// Per-wall flags marking which walls carry a taper.
    fn tapered_wall_flags(&mut self) -> Vec<bool> {
        let wall_count = self.solver.walls().len();
        let mut flags = vec![false; wall_count];
        for taper in self.ceiling_tapers() {
            if let Some(flag) = flags.get_mut(taper.wall_index) {
                *flag = true;
            }
        }
        flags
    }

    fn compute_tapers(&self) -> Vec<PanelTaperSpec> {
        let back_height = self.solver.config().edge_height();
        let Some(apex) = self.solver.compute_apex_point() else {
            return Vec::new();
        };

        let mut tapers = Vec::new();
        for wall in self.solver.walls() {
            // Sample the ceiling at the panel's front face, panel_depth in
            // from the wall toward the apex.
            let toward_apex = apex.planar() - wall.midpoint;
            let reach = toward_apex.norm();
            let front_point = if reach < TOLERANCE {
                wall.midpoint
            } else {
                wall.midpoint + toward_apex * (self.panel_depth.min(reach) / reach)
            };
            let front_height = self.solver.ceiling_height_at(front_point.x, front_point.y);

            if front_height - back_height > TAPER_THRESHOLD {
                tapers.push(PanelTaperSpec {
                    wall_index: wall.index,
                    front_height,
                    back_height,
                    direction: TaperDirection::FrontToBack,
                });
            }
        }
        tapers
    }
}

/// Builds junction miter specs by bisecting the turn at each wall end.
fn junction_specs(walls: &[WallSegmentGeometry], tapered: &[bool]) -> Vec<PanelAngleSpec> {
    let n = walls.len();
    if n == 0 {
        return Vec::new();
    }
    walls
        .iter()
        .enumerate()
        .map(|(i, wall)| {
            let pred = &walls[(i + n - 1) % n];
            let succ = &walls[(i + 1) % n];
            let left_angle = direction_difference(wall.angle, pred.angle) / 2.0;
            let right_angle = direction_difference(succ.angle, wall.angle) / 2.0;
            let significant = left_angle > ANGLE_THRESHOLD || right_angle > ANGLE_THRESHOLD;
            PanelAngleSpec {
                wall_index: i,
                left_angle,
                right_angle,
                is_compound: significant && tapered.get(i).copied().unwrap_or(false),
            }
        })
        .collect()
}
