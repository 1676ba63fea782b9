//! Cubic curve bases.
//!
//! Every basis is evaluated in matrix form: the four segment inputs form a
//! geometry matrix `G`, the basis contributes a 4×4 blending matrix `M`, and a
//! point on the segment is `G · M · (t³, t², t, 1)`.
//!
//! Matrices are stored column-major, so each column holds the coefficients of
//! one power of `t` (column 0 multiplies `t³`, column 3 multiplies `1`).

use glam::{Mat4, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::errors::AnimationError;

/// Standard cubic Bézier blending matrix.
pub const BEZIER_MATRIX: Mat4 = Mat4::from_cols_array(&[
    -1.0, 3.0, -3.0, 1.0, //
    3.0, -6.0, 3.0, 0.0, //
    -3.0, 3.0, 0.0, 0.0, //
    1.0, 0.0, 0.0, 0.0,
]);

/// Catmull-Rom blending matrix without its 1/2 factor.
///
/// The factor is applied to the evaluated point instead, see [`CATMULL_ROM_SCALE`].
pub const CATMULL_ROM_MATRIX: Mat4 = Mat4::from_cols_array(&[
    -1.0, 3.0, -3.0, 1.0, //
    2.0, -5.0, 4.0, -1.0, //
    -1.0, 0.0, 1.0, 0.0, //
    0.0, 2.0, 0.0, 0.0,
]);

/// Normalization applied to every Catmull-Rom point.
pub const CATMULL_ROM_SCALE: f32 = 0.5;

/// Hermite blending matrix for the geometry `(P0, P1, T0, T1)`.
pub const HERMITE_MATRIX: Mat4 = Mat4::from_cols_array(&[
    2.0, -2.0, 1.0, 1.0, //
    -3.0, 3.0, -2.0, -1.0, //
    0.0, 0.0, 1.0, 0.0, //
    1.0, 0.0, 0.0, 0.0,
]);

/// Interpolation family used to turn control points into a curve.
///
/// Scene files encode the basis as an integer (`0`, `1`, `2`); conversion
/// from any other code fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum BasisKind {
    #[default]
    Bezier,
    CatmullRom,
    Hermite,
}

impl BasisKind {
    pub const ALL: [BasisKind; 3] = [Self::Bezier, Self::CatmullRom, Self::Hermite];

    /// The blending matrix of this basis.
    #[inline]
    #[must_use]
    pub const fn matrix(self) -> Mat4 {
        match self {
            Self::Bezier => BEZIER_MATRIX,
            Self::CatmullRom => CATMULL_ROM_MATRIX,
            Self::Hermite => HERMITE_MATRIX,
        }
    }

    /// Integer code used by scene files.
    #[inline]
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Bezier => 0,
            Self::CatmullRom => 1,
            Self::Hermite => 2,
        }
    }

    /// Builds the geometry matrix columns for one 4-point window.
    ///
    /// Bézier and Catmull-Rom use the points as-is. Hermite reads the window as
    /// `[start, start handle, end handle, end]` and turns the handles into
    /// tangents relative to their endpoint.
    #[inline]
    #[must_use]
    pub fn geometry(self, points: &[Vec3; 4]) -> [Vec3; 4] {
        match self {
            Self::Bezier | Self::CatmullRom => *points,
            Self::Hermite => {
                let p0 = points[0];
                let p1 = points[3];
                [p0, p1, points[1] - p0, points[2] - p1]
            }
        }
    }

    /// Evaluates the segment defined by `points` at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn evaluate(self, points: &[Vec3; 4], t: f32) -> Vec3 {
        let [g0, g1, g2, g3] = self.geometry(points);
        let weights = self.matrix() * power_basis(t);

        let p = g0 * weights.x + g1 * weights.y + g2 * weights.z + g3 * weights.w;

        match self {
            Self::CatmullRom => p * CATMULL_ROM_SCALE,
            Self::Bezier | Self::Hermite => p,
        }
    }
}

/// `(t³, t², t, 1)`
#[inline]
fn power_basis(t: f32) -> Vec4 {
    let t2 = t * t;
    Vec4::new(t2 * t, t2, t, 1.0)
}

impl TryFrom<i64> for BasisKind {
    type Error = AnimationError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Bezier),
            1 => Ok(Self::CatmullRom),
            2 => Ok(Self::Hermite),
            other => Err(AnimationError::UnknownBasis(other)),
        }
    }
}

impl From<BasisKind> for i64 {
    fn from(kind: BasisKind) -> Self {
        kind.code()
    }
}
