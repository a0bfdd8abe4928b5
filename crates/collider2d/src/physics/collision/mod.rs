//! Narrow-phase collision detection for 2D shapes
//!
//! # Module Organization
//!
//! - [`primitives`] - Leaf geometry (boxes, circles, rotated boxes) and SAT projections
//! - [`narrow_phase`] - One exact test per unordered pair of leaf kinds
//! - [`shape`] - The [`ShapeDescriptor`] algebra and the resolver that dispatches pairs
//! - [`builder`] - [`ColliderBuilder`] for composite shapes
//! - [`library`] - Named shapes loaded from TOML/RON
//!
//! Shapes are stored without a position; the position of each operand is
//! supplied per query.

pub mod primitives;
pub mod narrow_phase;
pub mod shape;
pub mod builder;
pub mod library;

// Re-export commonly used types
pub use primitives::{BoxShape, CircleShape, RotatedBoxShape, Projection};
pub use shape::{resolve, ShapeDescriptor, ShapeKind};
pub use builder::ColliderBuilder;
pub use library::{ShapeLibrary, ShapeLibraryError};
