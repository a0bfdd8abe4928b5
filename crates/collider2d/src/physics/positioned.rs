//! Shapes bound to a live world position
//!
//! The owning entity rewrites the position once per frame, before any query
//! that frame. Each collider owns its geometry, so resizing one never affects
//! another.

use crate::foundation::math::Vec2;
use crate::physics::collision::ShapeDescriptor;

/// A collider shape placed in the world
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedCollider {
    shape: ShapeDescriptor,
    position: Vec2,
}

impl PositionedCollider {
    /// Bind a shape to a position
    pub fn new(shape: ShapeDescriptor, position: Vec2) -> Self {
        Self { shape, position }
    }

    /// Bind a shape at the origin
    pub fn at_origin(shape: ShapeDescriptor) -> Self {
        Self::new(shape, Vec2::zeros())
    }

    /// Current world position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Move to a new world position
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Move by a delta
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// The shape being positioned
    pub fn shape(&self) -> &ShapeDescriptor {
        &self.shape
    }

    /// Mutable access to the geometry (e.g. resizing on rotation)
    pub fn shape_mut(&mut self) -> &mut ShapeDescriptor {
        &mut self.shape
    }

    /// Give up the position and return the shape
    pub fn into_shape(self) -> ShapeDescriptor {
        self.shape
    }

    /// Whether this collider overlaps `other` at their current positions
    pub fn collides(&self, other: &PositionedCollider) -> bool {
        self.shape.collides(self.position, &other.shape, other.position)
    }
}

impl From<ShapeDescriptor> for PositionedCollider {
    fn from(shape: ShapeDescriptor) -> Self {
        Self::at_origin(shape)
    }
}
