//! Prototype registry
//!
//! The process-wide read-only table of part and craft templates, built once
//! at startup and passed by reference to whatever assembles spacecraft.
//! Missing identifiers fail here, at assembly time, never at first use.

use std::collections::HashMap;

use thiserror::Error;

use crate::entity::{Stats, StatsError};
use crate::foundation::math::{Point2f, Vec2};
use crate::geometry::Shape;
use crate::spacecraft::part::Part;
use crate::spacecraft::{AssemblyError, Spacecraft};

/// A named part template: shapes and stats, placed per craft
#[derive(Debug, Clone)]
pub struct PartPrototype {
    /// Registry identifier
    pub name: String,
    /// Part-local shapes
    pub shapes: Vec<Shape>,
    /// Stats contribution
    pub stats: Stats,
}

/// One part placement inside a craft template
#[derive(Debug, Clone)]
pub struct PartPlacement {
    /// Name of the part prototype to instantiate
    pub part: String,
    /// Craft-local offset
    pub offset: Vec2,
    /// Craft-local rotation in radians
    pub rotation: f32,
}

/// A named craft template: an ordered list of part placements
#[derive(Debug, Clone)]
pub struct CraftPrototype {
    /// Registry identifier
    pub name: String,
    /// Part placements, in part order
    pub parts: Vec<PartPlacement>,
}

/// Prototype lookup or assembly failure
#[derive(Debug, Error)]
pub enum PrototypeError {
    /// No part registered under this name
    #[error("unknown part prototype `{0}`")]
    PartNotFound(String),

    /// No craft registered under this name
    #[error("unknown craft prototype `{0}`")]
    CraftNotFound(String),

    /// A part prototype carried invalid stats
    #[error("part prototype `{name}` is invalid")]
    InvalidPart {
        /// Offending prototype name
        name: String,
        /// Validation failure
        #[source]
        source: StatsError,
    },

    /// The craft template assembled into an invalid spacecraft
    #[error("craft `{name}` failed to assemble")]
    Assembly {
        /// Offending craft name
        name: String,
        /// Construction failure
        #[source]
        source: AssemblyError,
    },
}

/// Registry of part and craft prototypes
#[derive(Debug, Default)]
pub struct PrototypeRegistry {
    parts: HashMap<String, PartPrototype>,
    crafts: HashMap<String, CraftPrototype>,
}

impl PrototypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a part prototype, validating its stats up front
    pub fn register_part(&mut self, prototype: PartPrototype) -> Result<(), PrototypeError> {
        prototype
            .stats
            .validate()
            .map_err(|source| PrototypeError::InvalidPart {
                name: prototype.name.clone(),
                source,
            })?;
        self.parts.insert(prototype.name.clone(), prototype);
        Ok(())
    }

    /// Register a craft prototype
    pub fn register_craft(&mut self, prototype: CraftPrototype) {
        self.crafts.insert(prototype.name.clone(), prototype);
    }

    /// Look up a part prototype
    pub fn part(&self, name: &str) -> Result<&PartPrototype, PrototypeError> {
        self.parts
            .get(name)
            .ok_or_else(|| PrototypeError::PartNotFound(name.to_string()))
    }

    /// Look up a craft prototype
    pub fn craft(&self, name: &str) -> Result<&CraftPrototype, PrototypeError> {
        self.crafts
            .get(name)
            .ok_or_else(|| PrototypeError::CraftNotFound(name.to_string()))
    }

    /// Assemble a new spacecraft from a craft template
    ///
    /// Deep-copies every placed part, so the new craft shares nothing with
    /// the registry or with previously assembled siblings.
    pub fn assemble(
        &self,
        craft: &str,
        position: Point2f,
        rotation: f32,
    ) -> Result<Spacecraft, PrototypeError> {
        let template = self.craft(craft)?;
        let mut parts = Vec::with_capacity(template.parts.len());
        for placement in &template.parts {
            let prototype = self.part(&placement.part)?;
            parts.push(Part::from_prototype(
                prototype,
                placement.offset,
                placement.rotation,
            ));
        }
        Spacecraft::new(position, rotation, parts).map_err(|source| PrototypeError::Assembly {
            name: template.name.clone(),
            source,
        })
    }
}
