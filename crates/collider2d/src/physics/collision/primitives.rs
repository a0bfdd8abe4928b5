//! Primitive collision shapes and projection helpers
//!
//! Leaf geometry is stored without a position. Every query supplies the
//! world-space center, so one shape value can be tested at any location.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{utils, Rotation, Vec2};

/// Interval produced by projecting a shape onto an axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Lowest projected value
    pub min: f32,
    /// Highest projected value
    pub max: f32,
}

impl Projection {
    /// Creates a new projection interval
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Projects a point set onto `axis`
    pub fn of_points(points: &[Vec2], axis: Vec2) -> Self {
        points.iter().map(|p| p.dot(&axis)).fold(
            Self::new(f32::INFINITY, f32::NEG_INFINITY),
            |acc, d| Self::new(acc.min.min(d), acc.max.max(d)),
        )
    }

    /// Strict interval overlap: touching end points do not overlap
    pub fn overlaps(&self, other: &Projection) -> bool {
        self.max > other.min && other.max > self.min
    }
}

/// Axis-aligned box, centered on its position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxShape {
    /// Full extent along X
    pub width: f32,
    /// Full extent along Y
    pub height: f32,
}

impl BoxShape {
    /// Creates a new box
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero-extent box, used as a point
    pub fn point() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Half width and half height
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Corner (min) and opposite corner (min + size) when centered at `center`
    pub fn bounds(&self, center: Vec2) -> (Vec2, Vec2) {
        let corner = center - self.half_extents();
        (corner, corner + Vec2::new(self.width, self.height))
    }

    /// Support-function projection onto an arbitrary axis
    pub fn project(&self, center: Vec2, axis: Vec2) -> Projection {
        let center_projection = center.dot(&axis);
        let radius_projection = (self.width / 2.0) * axis.x.abs() + (self.height / 2.0) * axis.y.abs();
        Projection::new(center_projection - radius_projection, center_projection + radius_projection)
    }
}

/// Circle around its position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleShape {
    /// Circle radius
    pub radius: f32,
}

impl CircleShape {
    /// Creates a new circle
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

/// Box rotated around its center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotatedBoxShape {
    /// Full extent along the local X axis
    pub width: f32,
    /// Full extent along the local Y axis
    pub height: f32,
    /// Counter-clockwise rotation
    #[serde(default)]
    pub rotation: Rotation,
}

impl RotatedBoxShape {
    /// Creates a new rotated box
    pub fn new(width: f32, height: f32, rotation: Rotation) -> Self {
        Self { width, height, rotation }
    }

    /// Corners before rotation, in winding order
    fn local_corners(&self) -> [Vec2; 4] {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        [
            Vec2::new(-half_w, -half_h),
            Vec2::new(half_w, -half_h),
            Vec2::new(half_w, half_h),
            Vec2::new(-half_w, half_h),
        ]
    }

    /// World-space corners when centered at `center`
    pub fn vertices(&self, center: Vec2) -> [Vec2; 4] {
        self.local_corners().map(|corner| self.rotation.rotate(corner) + center)
    }

    /// The two edge normals of this box in world space
    ///
    /// Opposite edges are parallel, so two adjacent edges cover all four.
    /// A zero-length edge yields a zero axis.
    pub fn axes(&self, vertices: &[Vec2; 4]) -> [Vec2; 2] {
        [
            utils::perpendicular(utils::normalize_or_zero(vertices[1] - vertices[0])),
            utils::perpendicular(utils::normalize_or_zero(vertices[2] - vertices[1])),
        ]
    }

    /// Projection of the box centered at `center` onto `axis`
    pub fn project(&self, center: Vec2, axis: Vec2) -> Projection {
        Projection::of_points(&self.vertices(center), axis)
    }

    /// Moves a world point into this box's unrotated local frame
    pub fn to_local(&self, center: Vec2, point: Vec2) -> Vec2 {
        self.rotation.inverse().rotate(point - center)
    }
}

impl From<BoxShape> for RotatedBoxShape {
    fn from(shape: BoxShape) -> Self {
        Self::new(shape.width, shape.height, Rotation::ZERO)
    }
}
