use crate::error::{LayoutError, Result};
use crate::math::{normalize_degrees, Vector2, TOLERANCE};
use crate::placement::Position3D;

use super::{FitError, FitErrorKind, RoomModel, SectionSpec, SectionWidth, WallRef};

/// Placement of one section on a wall, measured from the wall's start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSectionAssignment {
    pub section_index: usize,
    pub wall_index: usize,
    pub offset_along_wall: f64,
}

/// The 3D translation and Z-rotation placing one section into room space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionTransform {
    pub section_index: usize,
    pub wall_index: usize,
    pub position: Position3D,
    /// Rotation about the vertical axis, degrees in `[0, 360)`.
    pub rotation_z: f64,
}

/// Places cabinet sections onto a room's wall chain.
///
/// Production flows call [`validate_fit`](Self::validate_fit) first; the
/// assignment and transform steps treat the same conditions as fatal.
pub struct RoomSectionLayoutPlanner<'a> {
    room: &'a RoomModel,
}

impl<'a> RoomSectionLayoutPlanner<'a> {
    /// Creates a planner over the given room.
    #[must_use]
    pub fn new(room: &'a RoomModel) -> Self {
        Self { room }
    }

    /// Checks that every wall can hold the sections assigned to it.
    ///
    /// All problems are collected and returned; this never fails, so a
    /// report layer can surface every mismatch at once.
    #[must_use]
    pub fn validate_fit(&self, specs: &[SectionSpec]) -> Vec<FitError> {
        let wall_count = self.room.wall_count();
        let mut errors = Vec::new();
        let mut fixed_sums = vec![0.0; wall_count];
        let mut fill_counts = vec![0_usize; wall_count];

        for (i, spec) in specs.iter().enumerate() {
            match self.room.resolve(spec.wall.as_ref()) {
                Ok(w) => match spec.width {
                    SectionWidth::Fixed(width) => fixed_sums[w] += width,
                    SectionWidth::Fill => fill_counts[w] += 1,
                },
                Err(e) => errors.push(FitError {
                    wall_index: match &spec.wall {
                        Some(WallRef::Index(idx)) => Some(*idx),
                        _ => None,
                    },
                    kind: FitErrorKind::InvalidWallReference,
                    message: format!("section {i}: {e}"),
                }),
            }
        }

        for (w, wall) in self.room.walls().iter().enumerate() {
            if fixed_sums[w] > wall.length {
                errors.push(FitError {
                    wall_index: Some(w),
                    kind: FitErrorKind::ExceedsLength,
                    message: format!(
                        "sections totaling {:.1} exceed wall {w} length {:.1}",
                        fixed_sums[w], wall.length
                    ),
                });
            } else if fill_counts[w] > 0 && wall.length - fixed_sums[w] <= TOLERANCE {
                errors.push(FitError {
                    wall_index: Some(w),
                    kind: FitErrorKind::ExceedsLength,
                    message: format!(
                        "fill section on wall {w} would get zero width \
                         (fixed total {:.1}, wall length {:.1})",
                        fixed_sums[w], wall.length
                    ),
                });
            }
        }
        errors
    }

    /// Replaces every fill width with an equal share of its wall's
    /// remaining run, leaving fixed widths untouched.
    ///
    /// # Errors
    ///
    /// Returns an error for an unresolvable wall reference, or when a
    /// fill section lands on a wall with no remaining length.
    #[allow(clippy::cast_precision_loss)]
    pub fn resolve_fill_widths(&self, specs: &[SectionSpec]) -> Result<Vec<SectionSpec>> {
        let wall_count = self.room.wall_count();
        let mut fixed_sums = vec![0.0; wall_count];
        let mut fill_counts = vec![0_usize; wall_count];

        for spec in specs {
            let w = self.room.resolve(spec.wall.as_ref())?;
            match spec.width {
                SectionWidth::Fixed(width) => fixed_sums[w] += width,
                SectionWidth::Fill => fill_counts[w] += 1,
            }
        }

        let mut resolved = Vec::with_capacity(specs.len());
        for spec in specs {
            let w = self.room.resolve(spec.wall.as_ref())?;
            let width = match spec.width {
                SectionWidth::Fixed(width) => width,
                SectionWidth::Fill => {
                    let remaining = self.room.walls()[w].length - fixed_sums[w];
                    if remaining <= TOLERANCE {
                        return Err(LayoutError::NoFillCapacity { wall_index: w }.into());
                    }
                    remaining / fill_counts[w] as f64
                }
            };
            resolved.push(SectionSpec {
                width: SectionWidth::Fixed(width),
                depth: spec.depth,
                wall: spec.wall.clone(),
            });
        }
        Ok(resolved)
    }

    /// Assigns each section to its wall with a running along-wall offset.
    ///
    /// Sections keep their original order; the offset on a wall is the sum
    /// of the widths already placed on that wall. Fill widths must be
    /// resolved first.
    ///
    /// # Errors
    ///
    /// Returns an error for an unresolvable wall reference or a section
    /// whose width is still a fill.
    pub fn assign_sections_to_walls(
        &self,
        specs: &[SectionSpec],
    ) -> Result<Vec<WallSectionAssignment>> {
        let mut offsets = vec![0.0; self.room.wall_count()];
        let mut assignments = Vec::with_capacity(specs.len());

        for (i, spec) in specs.iter().enumerate() {
            let w = self.room.resolve(spec.wall.as_ref())?;
            let width = match spec.width {
                SectionWidth::Fixed(width) => width,
                SectionWidth::Fill => {
                    return Err(LayoutError::UnresolvedFillWidth { section_index: i }.into())
                }
            };
            assignments.push(WallSectionAssignment {
                section_index: i,
                wall_index: w,
                offset_along_wall: offsets[w],
            });
            offsets[w] += width;
        }
        Ok(assignments)
    }

    /// Computes the placement transform for each assignment.
    ///
    /// The position is the wall start moved along the wall by the offset,
    /// plus half the section depth along the wall's left normal so the
    /// cabinet front sits flush with the wall; the rotation is the wall's
    /// absolute direction. Position components are clamped to zero, the
    /// same non-negativity post-step the transform mapper applies.
    ///
    /// # Errors
    ///
    /// Returns an error if an assignment references a wall the room does
    /// not have.
    pub fn compute_section_transforms(
        &self,
        assignments: &[WallSectionAssignment],
        specs: &[SectionSpec],
    ) -> Result<Vec<SectionTransform>> {
        let mut transforms = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            let wall = self.room.walls().get(assignment.wall_index).ok_or(
                LayoutError::WallIndexOutOfRange {
                    index: assignment.wall_index,
                    wall_count: self.room.wall_count(),
                },
            )?;
            let depth = specs
                .get(assignment.section_index)
                .map_or(0.0, |s| s.depth);

            let rad = wall.angle.to_radians();
            let dir = Vector2::new(rad.cos(), rad.sin());
            let normal = Vector2::new(-dir.y, dir.x);
            let planar =
                wall.start + dir * assignment.offset_along_wall + normal * (depth / 2.0);

            transforms.push(SectionTransform {
                section_index: assignment.section_index,
                wall_index: assignment.wall_index,
                position: Position3D {
                    x: planar.x.max(0.0),
                    y: planar.y.max(0.0),
                    z: 0.0,
                },
                rotation_z: normalize_degrees(wall.angle),
            });
        }
        Ok(transforms)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::walls::WallSpec;

    const TOL: f64 = 1e-9;

    fn room() -> RoomModel {
        let specs = vec![
            WallSpec::with_name(120.0, None, "back").unwrap(),
            WallSpec::with_name(60.0, None, "left").unwrap(),
        ];
        RoomModel::from_specs(&specs)
    }

    fn fixed(width: f64, wall: Option<WallRef>) -> SectionSpec {
        SectionSpec::new(SectionWidth::Fixed(width), 24.0, wall)
    }

    #[test]
    fn overfull_wall_reports_one_error_with_totals() {
        let room = room();
        let planner = RoomSectionLayoutPlanner::new(&room);
        let specs = vec![fixed(100.0, None), fixed(50.0, None)];
        let errors = planner.validate_fit(&specs);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, FitErrorKind::ExceedsLength);
        assert_eq!(errors[0].wall_index, Some(0));
        assert!(errors[0].message.contains("150"), "{}", errors[0].message);
        assert!(errors[0].message.contains("120"), "{}", errors[0].message);
    }

    #[test]
    fn fill_on_packed_wall_reported() {
        let room = room();
        let planner = RoomSectionLayoutPlanner::new(&room);
        let specs = vec![
            fixed(120.0, None),
            SectionSpec::new(SectionWidth::Fill, 24.0, None),
        ];
        let errors = planner.validate_fit(&specs);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, FitErrorKind::ExceedsLength);
    }

    #[test]
    fn bad_references_collected_not_raised() {
        let room = room();
        let planner = RoomSectionLayoutPlanner::new(&room);
        let specs = vec![
            fixed(30.0, Some(WallRef::Index(7))),
            fixed(30.0, Some(WallRef::Name("front".into()))),
        ];
        let errors = planner.validate_fit(&specs);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].kind, FitErrorKind::InvalidWallReference);
        assert_eq!(errors[0].wall_index, Some(7));
        assert_eq!(errors[1].wall_index, None);
        assert!(errors[1].message.contains("front"));
    }

    #[test]
    fn clean_layout_validates_empty() {
        let room = room();
        let planner = RoomSectionLayoutPlanner::new(&room);
        let specs = vec![fixed(60.0, None), fixed(30.0, Some(WallRef::Index(1)))];
        assert!(planner.validate_fit(&specs).is_empty());
    }

    #[test]
    fn fill_widths_share_remaining_run() {
        let room = room();
        let planner = RoomSectionLayoutPlanner::new(&room);
        let specs = vec![
            fixed(40.0, None),
            SectionSpec::new(SectionWidth::Fill, 24.0, None),
            SectionSpec::new(SectionWidth::Fill, 24.0, None),
        ];
        let resolved = planner.resolve_fill_widths(&specs).unwrap();
        // Wall 0 is 120 long; 80 remains, split across two fills.
        assert_eq!(resolved[1].width, SectionWidth::Fixed(40.0));
        assert_eq!(resolved[2].width, SectionWidth::Fixed(40.0));
    }

    #[test]
    fn fill_with_no_capacity_is_fatal() {
        let room = room();
        let planner = RoomSectionLayoutPlanner::new(&room);
        let specs = vec![
            fixed(120.0, None),
            SectionSpec::new(SectionWidth::Fill, 24.0, None),
        ];
        assert!(planner.resolve_fill_widths(&specs).is_err());
    }

    #[test]
    fn offsets_accumulate_per_wall_in_section_order() {
        let room = room();
        let planner = RoomSectionLayoutPlanner::new(&room);
        let specs = vec![
            fixed(30.0, None),
            fixed(20.0, Some(WallRef::Name("left".into()))),
            fixed(40.0, None),
        ];
        let assignments = planner.assign_sections_to_walls(&specs).unwrap();
        assert_eq!(assignments.len(), 3);
        // Output follows original section order, not wall order.
        assert_eq!(assignments[0].section_index, 0);
        assert_eq!(assignments[1].section_index, 1);
        assert_eq!(assignments[2].section_index, 2);
        assert!(assignments[0].offset_along_wall.abs() < TOL);
        assert!(assignments[1].offset_along_wall.abs() < TOL);
        assert!((assignments[2].offset_along_wall - 30.0).abs() < TOL);
        assert_eq!(assignments[2].wall_index, 0);
    }

    #[test]
    fn unresolved_fill_is_fatal_in_assignment() {
        let room = room();
        let planner = RoomSectionLayoutPlanner::new(&room);
        let specs = vec![SectionSpec::new(SectionWidth::Fill, 24.0, None)];
        assert!(planner.assign_sections_to_walls(&specs).is_err());
    }

    #[test]
    fn unknown_name_is_fatal_in_assignment() {
        let room = room();
        let planner = RoomSectionLayoutPlanner::new(&room);
        let specs = vec![fixed(30.0, Some(WallRef::Name("front".into())))];
        assert!(planner.assign_sections_to_walls(&specs).is_err());
    }

    #[test]
    fn transform_offsets_along_wall_and_into_room() {
        let room = room();
        let planner = RoomSectionLayoutPlanner::new(&room);
        let specs = vec![fixed(30.0, None), fixed(40.0, None)];
        let assignments = planner.assign_sections_to_walls(&specs).unwrap();
        let transforms = planner
            .compute_section_transforms(&assignments, &specs)
            .unwrap();

        // Wall 0 runs along +X from the origin; depth 24 pushes the
        // cabinet center 12 along the left normal (+Y).
        assert!(transforms[0].position.x.abs() < TOL);
        assert!((transforms[0].position.y - 12.0).abs() < TOL);
        assert!((transforms[1].position.x - 30.0).abs() < TOL);
        assert!(transforms[0].rotation_z.abs() < TOL);
    }

    #[test]
    fn positions_clamp_to_zero_on_descending_walls() {
        // A wall pinned to -90 degrees runs toward negative y; raw
        // placement puts the second section at y = -10.
        let wall_specs = vec![WallSpec::new(40.0, Some(-90.0)).unwrap()];
        let room = RoomModel::from_specs(&wall_specs);
        let planner = RoomSectionLayoutPlanner::new(&room);
        let specs = vec![fixed(10.0, None), fixed(10.0, None)];
        let assignments = planner.assign_sections_to_walls(&specs).unwrap();
        let transforms = planner
            .compute_section_transforms(&assignments, &specs)
            .unwrap();
        for t in &transforms {
            assert!(t.position.x >= 0.0, "x={}", t.position.x);
            assert!(t.position.y >= 0.0, "y={}", t.position.y);
            assert!(t.position.z >= 0.0, "z={}", t.position.z);
        }
        assert!(transforms[1].position.y.abs() < TOL);
        // The normal offset (+X for a -90 degree wall) is unaffected.
        assert!((transforms[1].position.x - 12.0).abs() < TOL);
    }

    #[test]
    fn rotation_is_normalized_into_one_turn() {
        let wall_specs = vec![
            WallSpec::new(40.0, Some(-90.0)).unwrap(),
            WallSpec::new(40.0, Some(0.0)).unwrap(),
            WallSpec::new(40.0, Some(90.0)).unwrap(),
        ];
        let room = RoomModel::from_specs(&wall_specs);
        let planner = RoomSectionLayoutPlanner::new(&room);
        let specs = vec![fixed(20.0, Some(WallRef::Index(0)))];
        let assignments = planner.assign_sections_to_walls(&specs).unwrap();
        let transforms = planner
            .compute_section_transforms(&assignments, &specs)
            .unwrap();
        assert!((transforms[0].rotation_z - 270.0).abs() < TOL);
    }
}
