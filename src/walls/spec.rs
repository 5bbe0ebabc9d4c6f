use crate::error::{GeometryError, Result};

/// Input specification for one wall segment: a length and an optional
/// explicit absolute direction in degrees.
///
/// A wall with no explicit angle takes the symmetric turn for the chain it
/// belongs to (see [`super::WallChainBuilder`]). The optional name is used
/// by the layout layer to reference walls by name.
#[derive(Debug, Clone)]
pub struct WallSpec {
    length: f64,
    angle: Option<f64>,
    name: Option<String>,
}

impl WallSpec {
    /// Creates a wall spec from a length and an optional explicit angle.
    ///
    /// # Errors
    ///
    /// Returns an error if the length is not positive or the explicit angle
    /// falls outside `[-180, 180]` degrees.
    pub fn new(length: f64, angle: Option<f64>) -> Result<Self> {
        if length <= 0.0 {
            return Err(GeometryError::InvalidWallLength(length).into());
        }
        if let Some(a) = angle {
            if !(-180.0..=180.0).contains(&a) {
                return Err(GeometryError::AngleOutOfRange(a).into());
            }
        }
        Ok(Self {
            length,
            angle,
            name: None,
        })
    }

    /// Creates a named wall spec.
    ///
    /// # Errors
    ///
    /// Same validation as [`WallSpec::new`].
    pub fn with_name(length: f64, angle: Option<f64>, name: impl Into<String>) -> Result<Self> {
        let mut spec = Self::new(length, angle)?;
        spec.name = Some(name.into());
        Ok(spec)
    }

    /// Returns the wall length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the explicit absolute direction, if one was supplied.
    #[must_use]
    pub fn angle(&self) -> Option<f64> {
        self.angle
    }

    /// Returns the wall name, if one was supplied.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
