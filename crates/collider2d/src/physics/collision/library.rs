//! Named collider shapes loaded from data files
//!
//! Level and tile-type configuration can declare hitboxes by name instead of
//! building them in code:
//!
//! ```toml
//! [shapes]
//! coin = { Circle = { radius = 4.0 } }
//! wall = { Box = { width = 16.0, height = 16.0 } }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};
use crate::foundation::logging::{debug, warn};
use crate::foundation::math::Vec2;
use crate::physics::positioned::PositionedCollider;
use super::shape::ShapeDescriptor;

/// Shape library errors
#[derive(thiserror::Error, Debug)]
pub enum ShapeLibraryError {
    /// No shape with that name
    #[error("Unknown shape: {0}")]
    UnknownShape(String),

    /// Loading or saving failed
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Named collection of shape descriptors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeLibrary {
    #[serde(default)]
    shapes: BTreeMap<String, ShapeDescriptor>,
}

impl Config for ShapeLibrary {}

impl ShapeLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a library from a `.toml` or `.ron` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ShapeLibraryError> {
        let path = path.as_ref();
        let library = Self::load_from_file(path)?;
        debug!("loaded {} collider shapes from {}", library.len(), path.display());
        Ok(library)
    }

    /// Save this library to a `.toml` or `.ron` file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ShapeLibraryError> {
        let path = path.as_ref();
        self.save_to_file(path)?;
        debug!("saved {} collider shapes to {}", self.len(), path.display());
        Ok(())
    }

    /// Add a shape, returning the one it replaced
    pub fn insert(&mut self, name: impl Into<String>, shape: ShapeDescriptor) -> Option<ShapeDescriptor> {
        let name = name.into();
        let previous = self.shapes.insert(name.clone(), shape);
        if previous.is_some() {
            warn!("collider shape '{}' was redefined", name);
        }
        previous
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, name: impl Into<String>, shape: ShapeDescriptor) -> Self {
        self.insert(name, shape);
        self
    }

    /// Look up a shape by name
    pub fn get(&self, name: &str) -> Option<&ShapeDescriptor> {
        self.shapes.get(name)
    }

    /// Mutable lookup, for adjusting a template before instantiating
    pub fn get_mut(&mut self, name: &str) -> Option<&mut ShapeDescriptor> {
        self.shapes.get_mut(name)
    }

    /// Create a collider with its own copy of the named shape
    pub fn instantiate(&self, name: &str, position: Vec2) -> Result<PositionedCollider, ShapeLibraryError> {
        self.get(name)
            .cloned()
            .map(|shape| PositionedCollider::new(shape, position))
            .ok_or_else(|| ShapeLibraryError::UnknownShape(name.to_string()))
    }

    /// Shape names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.shapes.keys().map(String::as_str)
    }

    /// Number of shapes
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the library has no shapes
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
