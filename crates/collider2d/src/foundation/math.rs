//! Math utilities and types
//!
//! Provides the 2D math types used by the collision shapes. Vectors come from
//! nalgebra; [`Rotation`] wraps an angle that can be read in either unit.

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

pub use nalgebra::{Rotation2, Vector2};

/// 2D vector type (positions, offsets and axes)
pub type Vec2 = Vector2<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec2};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Clamp a value between min and max
    ///
    /// Unlike [`f32::clamp`] this never panics: when `min > max` (a shape with
    /// negative extent) the value is pinned to `min`.
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min { min } else if value > max { max } else { value }
    }

    /// Counter-clockwise perpendicular of a vector
    pub fn perpendicular(v: Vec2) -> Vec2 {
        Vec2::new(-v.y, v.x)
    }

    /// Unit vector in the direction of `v`, or the zero vector if `v` has no length
    pub fn normalize_or_zero(v: Vec2) -> Vec2 {
        v.try_normalize(0.0).unwrap_or_else(Vec2::zeros)
    }
}

/// An immutable planar rotation, readable in degrees or radians
///
/// Both views are fixed at construction, so a rotation built from degrees
/// reports exactly the degrees it was given. Saving writes the unit it was
/// built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RotationRepr", into = "RotationRepr")]
pub struct Rotation {
    degrees: f32,
    radians: f32,
    unit: AngleUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AngleUnit {
    Degrees,
    Radians,
}

/// On-disk form: `{ degrees = 45.0 }` or `{ radians = 0.785 }`
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RotationRepr {
    Degrees(f32),
    Radians(f32),
}

impl From<RotationRepr> for Rotation {
    fn from(repr: RotationRepr) -> Self {
        match repr {
            RotationRepr::Degrees(degrees) => Self::from_degrees(degrees),
            RotationRepr::Radians(radians) => Self::from_radians(radians),
        }
    }
}

impl From<Rotation> for RotationRepr {
    fn from(rotation: Rotation) -> Self {
        match rotation.unit {
            AngleUnit::Degrees => Self::Degrees(rotation.degrees),
            AngleUnit::Radians => Self::Radians(rotation.radians),
        }
    }
}

impl Rotation {
    /// No rotation
    pub const ZERO: Self = Self { degrees: 0.0, radians: 0.0, unit: AngleUnit::Degrees };

    /// Create a rotation from an angle in degrees
    pub fn from_degrees(degrees: f32) -> Self {
        Self { degrees, radians: utils::deg_to_rad(degrees), unit: AngleUnit::Degrees }
    }

    /// Create a rotation from an angle in radians
    pub fn from_radians(radians: f32) -> Self {
        Self { degrees: utils::rad_to_deg(radians), radians, unit: AngleUnit::Radians }
    }

    /// Angle in degrees
    pub fn degrees(&self) -> f32 {
        self.degrees
    }

    /// Angle in radians
    pub fn radians(&self) -> f32 {
        self.radians
    }

    /// The opposite rotation
    pub fn inverse(&self) -> Self {
        Self { degrees: -self.degrees, radians: -self.radians, unit: self.unit }
    }

    /// Rotate a vector counter-clockwise around the origin
    pub fn rotate(&self, v: Vec2) -> Vec2 {
        Rotation2::new(self.radians) * v
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::ZERO
    }
}

impl AbsDiffEq for Rotation {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.radians.abs_diff_eq(&other.radians, epsilon)
    }
}

impl RelativeEq for Rotation {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.radians.relative_eq(&other.radians, epsilon, max_relative)
    }
}
