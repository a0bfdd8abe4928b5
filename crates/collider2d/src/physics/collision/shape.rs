//! Collider shape descriptors and the collision resolver
//!
//! A [`ShapeDescriptor`] is position-independent geometry. Leaf kinds carry
//! raw dimensions; combinator kinds (displaced, inverted, poly, empty) are
//! built from other descriptors and nest arbitrarily.
//!
//! [`resolve`] answers "do these two descriptors overlap at these positions"
//! for any pair of kinds in either order. Combinators are unwrapped one layer
//! at a time, left operand first, until both sides are leaves; the leaf pair
//! is then handed to exactly one function in [`super::narrow_phase`].

use std::fmt;
use std::ops::Not;

use serde::{Deserialize, Serialize};

use crate::foundation::logging::trace;
use crate::foundation::math::{Rotation, Vec2};
use super::narrow_phase;
use super::primitives::{BoxShape, CircleShape, RotatedBoxShape};

/// Geometry of a collider, independent of where it is placed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeDescriptor {
    /// Axis-aligned box
    Box(BoxShape),
    /// Circle
    Circle(CircleShape),
    /// Box rotated around its center
    RotatedBox(RotatedBoxShape),
    /// `child` translated by `offset` from the owner's position
    Displaced {
        /// Shape being moved
        child: Box<ShapeDescriptor>,
        /// Translation applied to the owner's position
        offset: Vec2,
    },
    /// Logical NOT of `child`
    Inverted {
        /// Shape being negated
        child: Box<ShapeDescriptor>,
    },
    /// Collides when any of `any` collides and all of `required` collide
    Poly {
        /// Union members; an empty list never collides
        #[serde(default)]
        any: Vec<ShapeDescriptor>,
        /// Intersection members; an empty list is vacuously satisfied
        #[serde(default)]
        required: Vec<ShapeDescriptor>,
    },
    /// Never collides
    Empty,
}

/// Fieldless discriminant of [`ShapeDescriptor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// [`ShapeDescriptor::Box`]
    Box,
    /// [`ShapeDescriptor::Circle`]
    Circle,
    /// [`ShapeDescriptor::RotatedBox`]
    RotatedBox,
    /// [`ShapeDescriptor::Displaced`]
    Displaced,
    /// [`ShapeDescriptor::Inverted`]
    Inverted,
    /// [`ShapeDescriptor::Poly`]
    Poly,
    /// [`ShapeDescriptor::Empty`]
    Empty,
}

impl ShapeKind {
    /// Whether this is a primitive geometric kind
    pub fn is_leaf(self) -> bool {
        matches!(self, Self::Box | Self::Circle | Self::RotatedBox)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl ShapeDescriptor {
    /// Axis-aligned box of the given size
    pub fn box_shape(width: f32, height: f32) -> Self {
        Self::Box(BoxShape::new(width, height))
    }

    /// Circle of the given radius
    pub fn circle(radius: f32) -> Self {
        Self::Circle(CircleShape::new(radius))
    }

    /// Box of the given size, rotated around its center
    pub fn rotated_box(width: f32, height: f32, rotation: Rotation) -> Self {
        Self::RotatedBox(RotatedBoxShape::new(width, height, rotation))
    }

    /// Zero-extent box, the same as `box_shape(0.0, 0.0)`
    pub fn point() -> Self {
        Self::Box(BoxShape::point())
    }

    /// `child` translated by `offset`
    pub fn displaced(child: ShapeDescriptor, offset: Vec2) -> Self {
        Self::Displaced { child: Box::new(child), offset }
    }

    /// Everything outside `child`
    pub fn inverted(child: ShapeDescriptor) -> Self {
        Self::Inverted { child: Box::new(child) }
    }

    /// Union of `any` intersected with every member of `required`
    pub fn poly(any: Vec<ShapeDescriptor>, required: Vec<ShapeDescriptor>) -> Self {
        Self::Poly { any, required }
    }

    /// Shape that never collides
    pub fn empty() -> Self {
        Self::Empty
    }

    /// Fluent form of [`ShapeDescriptor::displaced`]
    ///
    /// ```
    /// use collider2d::prelude::*;
    ///
    /// let sword = ShapeDescriptor::box_shape(4.0, 1.0).offset(Vec2::new(3.0, 0.0));
    /// let target = ShapeDescriptor::point();
    /// assert!(sword.collides(Vec2::zeros(), &target, Vec2::new(4.5, 0.0)));
    /// ```
    pub fn offset(self, offset: Vec2) -> Self {
        Self::displaced(self, offset)
    }

    /// Rotatable copy: a box becomes an unrotated rotated box
    ///
    /// Other kinds are returned unchanged.
    pub fn as_rotated(&self) -> Self {
        match self {
            Self::Box(shape) => Self::RotatedBox(RotatedBoxShape::from(*shape)),
            other => other.clone(),
        }
    }

    /// The kind of this descriptor
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Box(_) => ShapeKind::Box,
            Self::Circle(_) => ShapeKind::Circle,
            Self::RotatedBox(_) => ShapeKind::RotatedBox,
            Self::Displaced { .. } => ShapeKind::Displaced,
            Self::Inverted { .. } => ShapeKind::Inverted,
            Self::Poly { .. } => ShapeKind::Poly,
            Self::Empty => ShapeKind::Empty,
        }
    }

    /// Whether this is a primitive geometric shape
    pub fn is_leaf(&self) -> bool {
        self.kind().is_leaf()
    }

    /// Test this shape placed at `my_pos` against `other` placed at `other_pos`
    pub fn collides(&self, my_pos: Vec2, other: &ShapeDescriptor, other_pos: Vec2) -> bool {
        resolve(self, my_pos, other, other_pos)
    }
}

impl Default for ShapeDescriptor {
    fn default() -> Self {
        Self::Empty
    }
}

impl Not for ShapeDescriptor {
    type Output = ShapeDescriptor;

    fn not(self) -> Self::Output {
        Self::inverted(self)
    }
}

impl From<BoxShape> for ShapeDescriptor {
    fn from(shape: BoxShape) -> Self {
        Self::Box(shape)
    }
}

impl From<CircleShape> for ShapeDescriptor {
    fn from(shape: CircleShape) -> Self {
        Self::Circle(shape)
    }
}

impl From<RotatedBoxShape> for ShapeDescriptor {
    fn from(shape: RotatedBoxShape) -> Self {
        Self::RotatedBox(shape)
    }
}

/// Decide whether `a` at `a_pos` collides with `b` at `b_pos`
///
/// Total over every combination of kinds. Leaf pairs are commutative;
/// combinator pairs are evaluated with the left operand's combinator
/// outermost.
pub fn resolve(a: &ShapeDescriptor, a_pos: Vec2, b: &ShapeDescriptor, b_pos: Vec2) -> bool {
    use ShapeDescriptor as S;

    match (a, b) {
        (S::Empty, _) => false,
        (S::Displaced { child, offset }, _) => resolve(child, a_pos + *offset, b, b_pos),
        (S::Inverted { child }, _) => !resolve(child, a_pos, b, b_pos),
        (S::Poly { any, required }, _) => {
            any.iter().any(|sub| resolve(sub, a_pos, b, b_pos))
                && required.iter().all(|sub| resolve(sub, a_pos, b, b_pos))
        }

        // Left is a leaf: let the right-hand combinator drive
        (_, S::Empty | S::Displaced { .. } | S::Inverted { .. } | S::Poly { .. }) => {
            trace!("swapping {} / {} to unwrap combinator", a.kind(), b.kind());
            resolve(b, b_pos, a, a_pos)
        }

        (S::Box(x), S::Box(y)) => leaf_result(a, b, narrow_phase::box_box(x, a_pos, y, b_pos)),
        (S::Circle(x), S::Circle(y)) => leaf_result(a, b, narrow_phase::circle_circle(x, a_pos, y, b_pos)),
        (S::Circle(x), S::Box(y)) => leaf_result(a, b, narrow_phase::circle_box(x, a_pos, y, b_pos)),
        (S::Box(x), S::Circle(y)) => leaf_result(a, b, narrow_phase::circle_box(y, b_pos, x, a_pos)),
        (S::RotatedBox(x), S::RotatedBox(y)) => {
            leaf_result(a, b, narrow_phase::rotated_box_rotated_box(x, a_pos, y, b_pos))
        }
        (S::RotatedBox(x), S::Box(y)) => leaf_result(a, b, narrow_phase::rotated_box_box(x, a_pos, y, b_pos)),
        (S::Box(x), S::RotatedBox(y)) => leaf_result(a, b, narrow_phase::rotated_box_box(y, b_pos, x, a_pos)),
        (S::RotatedBox(x), S::Circle(y)) => {
            leaf_result(a, b, narrow_phase::rotated_box_circle(x, a_pos, y, b_pos))
        }
        (S::Circle(x), S::RotatedBox(y)) => {
            leaf_result(a, b, narrow_phase::rotated_box_circle(y, b_pos, x, a_pos))
        }
    }
}

fn leaf_result(a: &ShapeDescriptor, b: &ShapeDescriptor, hit: bool) -> bool {
    trace!("{} vs {} -> {}", a.kind(), b.kind(), hit);
    hit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    fn unit_box() -> ShapeDescriptor {
        ShapeDescriptor::box_shape(2.0, 2.0)
    }

    #[test]
    fn test_leaf_dispatch_matches_narrow_phase() {
        let circle = ShapeDescriptor::circle(1.0);
        let shape = unit_box();
        assert!(!circle.collides(v(2.0, 0.0), &shape, v(0.0, 0.0)));
        assert!(!shape.collides(v(0.0, 0.0), &circle, v(2.0, 0.0)));
        assert!(circle.collides(v(1.5, 0.0), &shape, v(0.0, 0.0)));
        assert!(shape.collides(v(0.0, 0.0), &circle, v(1.5, 0.0)));

        let diamond = ShapeDescriptor::rotated_box(2.0, 2.0, Rotation::from_degrees(45.0));
        assert!(!diamond.collides(v(0.0, 0.0), &shape, v(4.0, 0.0)));
        assert!(!shape.collides(v(4.0, 0.0), &diamond, v(0.0, 0.0)));
    }

    #[test]
    fn test_poly_any_and_required() {
        let left = ShapeDescriptor::box_shape(2.0, 2.0).offset(v(-2.0, 0.0));
        let right = ShapeDescriptor::box_shape(2.0, 2.0).offset(v(2.0, 0.0));
        let upper = ShapeDescriptor::box_shape(10.0, 2.0).offset(v(0.0, 2.0));
        let probe = ShapeDescriptor::point();

        let both = ShapeDescriptor::poly(vec![left.clone()], vec![upper.clone()]);
        // Inside left only
        assert!(!both.collides(v(0.0, 0.0), &probe, v(-2.0, -0.5)));
        // Inside left and upper
        assert!(both.collides(v(0.0, 0.0), &probe, v(-2.0, 1.0)));
        // Inside upper only
        assert!(!both.collides(v(0.0, 0.0), &probe, v(0.0, 2.5)));

        let union = ShapeDescriptor::poly(vec![left, right], vec![]);
        assert!(union.collides(v(0.0, 0.0), &probe, v(2.0, 0.0)));
        assert!(union.collides(v(0.0, 0.0), &probe, v(-2.0, 0.0)));
        assert!(!union.collides(v(0.0, 0.0), &probe, v(0.0, 5.0)));
    }

    #[test]
    fn test_poly_with_only_required_is_an_intersection() {
        let probe = ShapeDescriptor::point();
        let required = ShapeDescriptor::poly(vec![], vec![unit_box()]);
        // No any-members: never collides even when the required member does
        assert!(!required.collides(v(0.0, 0.0), &probe, v(0.0, 0.0)));

        let intersection = ShapeDescriptor::poly(vec![!ShapeDescriptor::empty()], vec![unit_box()]);
        assert!(intersection.collides(v(0.0, 0.0), &probe, v(0.0, 0.0)));
        assert!(!intersection.collides(v(0.0, 0.0), &probe, v(5.0, 0.0)));
    }

    #[test]
    fn test_empty_poly_never_collides() {
        let poly = ShapeDescriptor::poly(vec![], vec![]);
        assert!(!poly.collides(v(0.0, 0.0), &unit_box(), v(0.0, 0.0)));
        assert!(!unit_box().collides(v(0.0, 0.0), &poly, v(0.0, 0.0)));
    }

    #[test]
    fn test_empty_never_collides() {
        let empty = ShapeDescriptor::empty();
        assert!(!empty.collides(v(0.0, 0.0), &unit_box(), v(0.0, 0.0)));
        assert!(!unit_box().collides(v(0.0, 0.0), &empty, v(0.0, 0.0)));
        assert!(!empty.collides(v(0.0, 0.0), &empty, v(0.0, 0.0)));
    }

    #[test]
    fn test_inverted_empty_always_collides() {
        let everything = !ShapeDescriptor::empty();
        let others = [
            unit_box(),
            ShapeDescriptor::circle(0.1),
            ShapeDescriptor::rotated_box(1.0, 3.0, Rotation::from_degrees(12.0)),
            ShapeDescriptor::point(),
            ShapeDescriptor::empty(),
            ShapeDescriptor::poly(vec![], vec![]),
        ];
        for other in &others {
            assert!(everything.collides(v(100.0, -3.0), other, v(-50.0, 7.0)), "vs {:?}", other.kind());
        }
    }

    #[test]
    fn test_inverted_excludes_child() {
        let outside = ShapeDescriptor::inverted(ShapeDescriptor::circle(5.0));
        let probe = ShapeDescriptor::point();
        assert!(!outside.collides(v(0.0, 0.0), &probe, v(1.0, 1.0)));
        assert!(outside.collides(v(0.0, 0.0), &probe, v(6.0, 0.0)));
        // Inverted on the right-hand side is honoured too
        assert!(probe.collides(v(6.0, 0.0), &outside, v(0.0, 0.0)));
    }

    #[test]
    fn test_displaced_moves_child() {
        let displaced = ShapeDescriptor::displaced(ShapeDescriptor::circle(1.0), v(10.0, 0.0));
        let probe = ShapeDescriptor::point();
        assert!(displaced.collides(v(0.0, 0.0), &probe, v(10.5, 0.0)));
        assert!(!displaced.collides(v(0.0, 0.0), &probe, v(0.5, 0.0)));
        assert!(probe.collides(v(10.5, 0.0), &displaced, v(0.0, 0.0)));
    }

    #[test]
    fn test_combinators_on_both_sides() {
        let a = ShapeDescriptor::circle(1.0).offset(v(5.0, 0.0));
        let b = ShapeDescriptor::poly(vec![ShapeDescriptor::box_shape(1.0, 1.0).offset(v(-5.0, 0.0))], vec![]);
        assert!(a.collides(v(0.0, 0.0), &b, v(10.0, 0.0)));
        assert!(b.collides(v(10.0, 0.0), &a, v(0.0, 0.0)));
        assert!(!a.collides(v(0.0, 0.0), &b, v(0.0, 0.0)));
    }

    #[test]
    fn test_combinator_pairs_unwrap_left_first() {
        let circle = ShapeDescriptor::circle(1.0);
        let pair = ShapeDescriptor::poly(vec![circle.clone(), circle.clone().offset(v(10.0, 0.0))], vec![]);
        let outside = !circle;

        // The far member lies outside the circle, but NOT of the union does not
        assert!(pair.collides(v(0.0, 0.0), &outside, v(0.0, 0.0)));
        assert!(!outside.collides(v(0.0, 0.0), &pair, v(0.0, 0.0)));

        let empty = ShapeDescriptor::empty();
        let everything = !ShapeDescriptor::empty();
        assert!(!empty.collides(v(0.0, 0.0), &everything, v(0.0, 0.0)));
        assert!(everything.collides(v(0.0, 0.0), &empty, v(0.0, 0.0)));
    }

    #[test]
    fn test_as_rotated() {
        let rotated = unit_box().as_rotated();
        assert_eq!(rotated, ShapeDescriptor::rotated_box(2.0, 2.0, Rotation::ZERO));
        let circle = ShapeDescriptor::circle(1.0);
        assert_eq!(circle.as_rotated(), circle);
    }

    #[test]
    fn test_kind_and_leafness() {
        assert_eq!(unit_box().kind(), ShapeKind::Box);
        assert!(unit_box().is_leaf());
        assert_eq!((!unit_box()).kind(), ShapeKind::Inverted);
        assert!(!ShapeDescriptor::empty().is_leaf());
        assert_eq!(ShapeDescriptor::default(), ShapeDescriptor::Empty);
        assert_eq!(ShapeDescriptor::point(), ShapeDescriptor::box_shape(0.0, 0.0));
    }

    #[test]
    fn test_geometry_mutation_in_place() {
        let mut shape = unit_box();
        let probe = ShapeDescriptor::point();
        assert!(!shape.collides(v(0.0, 0.0), &probe, v(3.0, 0.0)));
        if let ShapeDescriptor::Box(inner) = &mut shape {
            inner.width = 8.0;
        }
        assert!(shape.collides(v(0.0, 0.0), &probe, v(3.0, 0.0)));
    }
}
