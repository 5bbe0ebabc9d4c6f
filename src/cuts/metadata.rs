/// Which vertical edge of a panel a cut applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEdge {
    Left,
    Right,
}

impl PanelEdge {
    /// Returns the edge name as used in cut notes.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// The role a panel plays in a cabinet carcass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelRole {
    LeftSide,
    RightSide,
    Top,
    Bottom,
    Back,
}

/// Direction a sloped top panel tapers in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaperDirection {
    /// Taller at the front (nearer the apex), shorter at the back wall.
    FrontToBack,
}

/// A single angled cut on a panel edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleCut {
    /// Edge the cut applies to.
    pub edge: PanelEdge,
    /// Cut angle in degrees.
    pub angle: f64,
    /// True for a bevel (through-thickness) cut, false for a miter.
    pub bevel: bool,
}

/// Junction miter angles for one wall's side panels.
///
/// Each angle is half the turning angle at that junction, so the two
/// adjoining panels meet flush.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelAngleSpec {
    pub wall_index: usize,
    /// Half-turn at the junction with the preceding wall, degrees.
    pub left_angle: f64,
    /// Half-turn at the junction with the following wall, degrees.
    pub right_angle: f64,
    /// True when the wall needs a miter and a ceiling taper at once.
    pub is_compound: bool,
}

/// Front/back height pair describing a sloped top panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelTaperSpec {
    pub wall_index: usize,
    /// Height at the panel front, nearer the apex.
    pub front_height: f64,
    /// Height at the panel back, against the wall.
    pub back_height: f64,
    pub direction: TaperDirection,
}

/// Manufacturing cut bundle for one (wall, panel role) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelCutMetadata {
    pub angle_cuts: Vec<AngleCut>,
    pub taper: Option<PanelTaperSpec>,
}
