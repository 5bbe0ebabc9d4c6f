/// Why a set of sections does not fit a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitErrorKind {
    /// Fixed section widths exceed the wall, or a fill section would get
    /// zero width on a fully packed wall.
    ExceedsLength,
    /// A section references a wall index or name the room does not have.
    InvalidWallReference,
}

impl FitErrorKind {
    /// Returns the kind as a stable snake-case label for reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ExceedsLength => "exceeds_length",
            Self::InvalidWallReference => "invalid_wall_reference",
        }
    }
}

/// One collected fit problem.
///
/// Fit errors are reported as data, never raised: a report layer can show
/// every problem at once so the user fixes them in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitError {
    /// The wall involved; `None` when the reference itself is an unknown
    /// name with no index to report.
    pub wall_index: Option<usize>,
    pub kind: FitErrorKind,
    pub message: String,
}
