/// The condition held at one end of the rod.
///
/// Boundary points are never touched by the interior stencil. Instead, the
/// solver resets them from their [`Boundary`] after every interior update.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Boundary {
    /// Fixed temperature at the boundary point.
    Dirichlet(f64),

    /// Fixed temperature gradient `dT/dx` at the boundary, along `+x`.
    ///
    /// Applied with a first-order one-sided difference against the nearest
    /// interior point.
    Neumann(f64),

    /// No heat flow through the end of the rod (zero gradient).
    Insulated,
}

impl Boundary {
    /// Returns the boundary temperature for the left end (index 0).
    ///
    /// `neighbor` is the temperature at index 1.
    #[must_use]
    pub fn left_value(self, neighbor: f64, spacing: f64) -> f64 {
        match self {
            Self::Dirichlet(value) => value,
            Self::Neumann(gradient) => neighbor - gradient * spacing,
            Self::Insulated => neighbor,
        }
    }

    /// Returns the boundary temperature for the right end (index `n - 1`).
    ///
    /// `neighbor` is the temperature at index `n - 2`.
    #[must_use]
    pub fn right_value(self, neighbor: f64, spacing: f64) -> f64 {
        match self {
            Self::Dirichlet(value) => value,
            Self::Neumann(gradient) => neighbor + gradient * spacing,
            Self::Insulated => neighbor,
        }
    }

    /// Returns `true` if every value carried by this boundary is finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        match self {
            Self::Dirichlet(v) | Self::Neumann(v) => v.is_finite(),
            Self::Insulated => true,
        }
    }
}

impl From<f64> for Boundary {
    fn from(value: f64) -> Self {
        Self::Dirichlet(value)
    }
}
