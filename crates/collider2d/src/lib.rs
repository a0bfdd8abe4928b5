//! # Collider2D
//!
//! Narrow-phase 2D collision detection with composable collider shapes.
//!
//! ## Features
//!
//! - **Leaf Shapes**: Axis-aligned boxes, circles, rotated boxes and points
//! - **Shape Algebra**: Displace, invert, and union/intersect shapes to any depth
//! - **Order-Independent Dispatch**: Any two shapes can be tested in either order
//! - **Builder**: Single-use [`ColliderBuilder`](physics::ColliderBuilder) for composite hitboxes
//! - **Data-Driven**: Named shape libraries loaded from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust
//! use collider2d::prelude::*;
//!
//! // A ship with a round hull and a forward ram
//! let ship = ColliderBuilder::new()
//!     .add_any(ShapeDescriptor::circle(1.0))
//!     .add_any(ShapeDescriptor::rotated_box(2.0, 0.5, Rotation::from_degrees(0.0)).offset(Vec2::new(1.5, 0.0)))
//!     .build();
//!
//! let mut player = PositionedCollider::at_origin(ship);
//! let asteroid = PositionedCollider::new(ShapeDescriptor::circle(0.5), Vec2::new(4.0, 0.0));
//!
//! // Once per frame the owner moves the collider, then queries it
//! player.set_position(Vec2::new(1.5, 0.0));
//! assert!(player.collides(&asteroid));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod physics;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        foundation::math::{Rotation, Vec2},
        physics::{
            ColliderBuilder,
            PositionedCollider,
            ShapeDescriptor,
            ShapeKind,
            ShapeLibrary,
        },
        config::Config,
    };
}
