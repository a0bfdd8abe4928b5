//! Physics module for collision detection
//!
//! Provides exact overlap tests between composable 2D collider shapes and the
//! binding of those shapes to live world positions. There is no broad phase:
//! callers pick which pairs to test.

pub mod collision;
pub mod positioned;

#[cfg(test)]
mod tests;

pub use collision::{
    ColliderBuilder,
    ShapeDescriptor,
    ShapeKind,
    ShapeLibrary,
    ShapeLibraryError,
};
pub use positioned::PositionedCollider;
