//! Homogeneous 4×4 transform value type.
//!
//! The transform exists to cross the command boundary, not to do linear
//! algebra; the host environment owns all geometry. Cells are row-major
//! `f64` values, matching the wire shape of a `!Transform4x4` fragment.

/// A spatial transform as a 4×4 row-major homogeneous matrix.
///
/// # Example
///
/// ```
/// use scenelink_codec::Transform;
///
/// let transform = Transform::IDENTITY;
/// assert_eq!(transform.rows()[0], [1.0, 0.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    cells: [[f64; 4]; 4],
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        cells: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a transform from row-major cells.
    #[must_use]
    pub const fn new(cells: [[f64; 4]; 4]) -> Self {
        Self { cells }
    }

    /// Returns the row-major cells.
    #[must_use]
    pub const fn rows(&self) -> &[[f64; 4]; 4] {
        &self.cells
    }
}

impl From<[[f64; 4]; 4]> for Transform {
    fn from(cells: [[f64; 4]; 4]) -> Self {
        Self::new(cells)
    }
}
