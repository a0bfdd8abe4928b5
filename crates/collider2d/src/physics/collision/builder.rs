//! Builder for composite collider shapes
//!
//! Accumulates "any" and "required" children, plain or inverted, and freezes
//! them into one [`ShapeDescriptor::Poly`].

use crate::foundation::logging::debug;
use super::shape::ShapeDescriptor;

/// Builder for composite collider shapes
///
/// Every method takes the builder by value and [`build`](Self::build) consumes
/// it, so a builder cannot be touched again once built.
///
/// # Examples
/// ```
/// use collider2d::prelude::*;
///
/// // A platform you can stand on, except for a hole in the middle
/// let platform = ColliderBuilder::new()
///     .add_any(ShapeDescriptor::box_shape(10.0, 1.0))
///     .add_inverted_required(ShapeDescriptor::box_shape(2.0, 1.0))
///     .build();
///
/// let feet = ShapeDescriptor::point();
/// assert!(platform.collides(Vec2::zeros(), &feet, Vec2::new(3.0, 0.0)));
/// assert!(!platform.collides(Vec2::zeros(), &feet, Vec2::new(0.5, 0.0)));
/// ```
///
/// Reuse after building does not compile:
/// ```compile_fail
/// use collider2d::prelude::*;
///
/// let builder = ColliderBuilder::new().add_any(ShapeDescriptor::circle(1.0));
/// let first = builder.build();
/// let second = builder.build();
/// ```
#[derive(Debug, Default)]
#[must_use = "a collider builder does nothing until `build` is called"]
pub struct ColliderBuilder {
    any: Vec<ShapeDescriptor>,
    required: Vec<ShapeDescriptor>,
    inverted_any: Vec<ShapeDescriptor>,
    inverted_required: Vec<ShapeDescriptor>,
}

impl ColliderBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a shape from a closure that configures a fresh builder
    ///
    /// ```
    /// use collider2d::prelude::*;
    ///
    /// let shape = ColliderBuilder::compose(|b| {
    ///     b.add_any(ShapeDescriptor::circle(2.0))
    ///         .add_any_with(|nested| nested.add_any(ShapeDescriptor::box_shape(1.0, 1.0)))
    /// });
    /// assert!(matches!(shape, ShapeDescriptor::Poly { .. }));
    /// ```
    pub fn compose(f: impl FnOnce(ColliderBuilder) -> ColliderBuilder) -> ShapeDescriptor {
        f(Self::new()).build()
    }

    /// Add a shape to the union
    pub fn add_any(mut self, shape: impl Into<ShapeDescriptor>) -> Self {
        self.any.push(shape.into());
        self
    }

    /// Add a shape every hit must also overlap
    pub fn add_required(mut self, shape: impl Into<ShapeDescriptor>) -> Self {
        self.required.push(shape.into());
        self
    }

    /// Add the outside of a shape to the union
    pub fn add_inverted_any(mut self, shape: impl Into<ShapeDescriptor>) -> Self {
        self.inverted_any.push(shape.into());
        self
    }

    /// Add a shape every hit must avoid
    pub fn add_inverted_required(mut self, shape: impl Into<ShapeDescriptor>) -> Self {
        self.inverted_required.push(shape.into());
        self
    }

    /// [`add_any`](Self::add_any) with a nested builder
    pub fn add_any_with(self, f: impl FnOnce(ColliderBuilder) -> ColliderBuilder) -> Self {
        self.add_any(Self::compose(f))
    }

    /// [`add_required`](Self::add_required) with a nested builder
    pub fn add_required_with(self, f: impl FnOnce(ColliderBuilder) -> ColliderBuilder) -> Self {
        self.add_required(Self::compose(f))
    }

    /// [`add_inverted_any`](Self::add_inverted_any) with a nested builder
    pub fn add_inverted_any_with(self, f: impl FnOnce(ColliderBuilder) -> ColliderBuilder) -> Self {
        self.add_inverted_any(Self::compose(f))
    }

    /// [`add_inverted_required`](Self::add_inverted_required) with a nested builder
    pub fn add_inverted_required_with(self, f: impl FnOnce(ColliderBuilder) -> ColliderBuilder) -> Self {
        self.add_inverted_required(Self::compose(f))
    }

    /// Freeze into a single poly shape
    ///
    /// Inverted entries are wrapped and appended after the plain entries of
    /// the same list.
    pub fn build(self) -> ShapeDescriptor {
        debug!(
            "building collider: {} any ({} inverted), {} required ({} inverted)",
            self.any.len() + self.inverted_any.len(),
            self.inverted_any.len(),
            self.required.len() + self.inverted_required.len(),
            self.inverted_required.len(),
        );

        let any = self.any.into_iter()
            .chain(self.inverted_any.into_iter().map(ShapeDescriptor::inverted))
            .collect();
        let required = self.required.into_iter()
            .chain(self.inverted_required.into_iter().map(ShapeDescriptor::inverted))
            .collect();

        ShapeDescriptor::Poly { any, required }
    }
}

impl From<ColliderBuilder> for ShapeDescriptor {
    fn from(builder: ColliderBuilder) -> Self {
        builder.build()
    }
}
