//! Pairwise narrow-phase tests between leaf shapes
//!
//! Exactly one function per unordered pair of leaf kinds. Each is a symmetric
//! predicate, so the resolver in [`super::shape`] swaps operands to reach the
//! implemented argument order instead of duplicating logic.
//!
//! Boundary conventions differ between tests and are kept on purpose:
//! - Box–Box and Circle–Circle count exact contact as a collision.
//! - Circle–Box, RotatedBox–Circle and every SAT test count exact contact as
//!   separation.

use crate::foundation::math::{utils, Vec2};
use super::primitives::{BoxShape, CircleShape, Projection, RotatedBoxShape};

/// Axis-aligned box against axis-aligned box
pub fn box_box(a: &BoxShape, a_pos: Vec2, b: &BoxShape, b_pos: Vec2) -> bool {
    if (a_pos.x - b_pos.x).abs() > (a.width + b.width) / 2.0 {
        return false;
    }
    if (a_pos.y - b_pos.y).abs() > (a.height + b.height) / 2.0 {
        return false;
    }
    true
}

/// Circle against circle
pub fn circle_circle(a: &CircleShape, a_pos: Vec2, b: &CircleShape, b_pos: Vec2) -> bool {
    let distance_squared = (a_pos - b_pos).norm_squared();
    let radius_sum = a.radius + b.radius;
    distance_squared <= radius_sum * radius_sum
}

/// Circle against axis-aligned box
///
/// Clamps the circle center into the box to find the closest point.
pub fn circle_box(circle: &CircleShape, circle_pos: Vec2, shape: &BoxShape, box_pos: Vec2) -> bool {
    let (min, max) = shape.bounds(box_pos);
    let closest_point = Vec2::new(
        utils::clamp(circle_pos.x, min.x, max.x),
        utils::clamp(circle_pos.y, min.y, max.y),
    );
    (circle_pos - closest_point).norm_squared() < circle.radius * circle.radius
}

/// Rotated box against rotated box (Separating Axis Theorem)
///
/// Candidate axes are both boxes' edge normals; any axis where the projections
/// fail to overlap separates the shapes.
pub fn rotated_box_rotated_box(a: &RotatedBoxShape, a_pos: Vec2, b: &RotatedBoxShape, b_pos: Vec2) -> bool {
    let a_vertices = a.vertices(a_pos);
    let b_vertices = b.vertices(b_pos);
    let a_axes = a.axes(&a_vertices);
    let b_axes = b.axes(&b_vertices);

    a_axes.iter().chain(b_axes.iter()).all(|&axis| {
        Projection::of_points(&a_vertices, axis).overlaps(&Projection::of_points(&b_vertices, axis))
    })
}

/// Rotated box against axis-aligned box (Separating Axis Theorem)
///
/// The axis-aligned box contributes the world X and Y axes as its normals.
pub fn rotated_box_box(a: &RotatedBoxShape, a_pos: Vec2, b: &BoxShape, b_pos: Vec2) -> bool {
    let a_vertices = a.vertices(a_pos);
    let a_axes = a.axes(&a_vertices);

    a_axes.iter().chain([Vec2::x(), Vec2::y()].iter()).all(|&axis| {
        Projection::of_points(&a_vertices, axis).overlaps(&b.project(b_pos, axis))
    })
}

/// Rotated box against circle
///
/// The circle center is moved into the box's local frame, where the box is
/// axis-aligned, and clamped into the half extents.
pub fn rotated_box_circle(a: &RotatedBoxShape, a_pos: Vec2, circle: &CircleShape, circle_pos: Vec2) -> bool {
    let local_center = a.to_local(a_pos, circle_pos);
    let half_w = a.width / 2.0;
    let half_h = a.height / 2.0;
    let closest_point = Vec2::new(
        utils::clamp(local_center.x, -half_w, half_w),
        utils::clamp(local_center.y, -half_h, half_h),
    );
    (local_center - closest_point).norm_squared() < circle.radius * circle.radius
}
