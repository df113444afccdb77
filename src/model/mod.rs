//! Read-only mesh model consumed by the exporters.
//!
//! A model exposes vertices, volume elements grouped in [`Block`]s and
//! boundary elements grouped in [`Domain`]s. Every collection is enumerated
//! lazily, in a stable order, and stays owned by the model for the duration
//! of an export.

pub mod in_memory;

pub use in_memory::InMemoryMesh;

use crate::topology::cell_type::CellType;
use serde::{Deserialize, Serialize};

/// Spatial dimensionality of a mesh model.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Dimension {
    /// Planar mesh, vertices carry `(x, y)`.
    #[serde(rename = "2d")]
    Two,
    /// Volume mesh, vertices carry `(x, y, z)`.
    #[serde(rename = "3d")]
    Three,
}

impl Dimension {
    /// Number of coordinate components per vertex.
    pub fn components(self) -> usize {
        match self {
            Dimension::Two => 2,
            Dimension::Three => 3,
        }
    }
}

/// Floating precision requested for coordinate output.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// 8 significant digits.
    Single,
    /// 16 significant digits.
    #[default]
    Double,
}

impl Precision {
    /// Significant digits written per coordinate.
    pub fn significant_digits(self) -> usize {
        match self {
            Precision::Single => 8,
            Precision::Double => 16,
        }
    }
}

/// A mesh vertex with its stable, 0-based identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    /// Identity index, stable for the whole model.
    pub index: usize,
    /// Coordinates; `z` is ignored by 2D models.
    pub coords: [f64; 3],
}

/// A mesh element: a shape plus its ordered vertex indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    /// Element shape.
    pub shape: CellType,
    /// Vertex indices in the model's natural order for `shape`.
    pub vertices: Vec<usize>,
}

impl Element {
    /// Create an element from a shape and its vertex indices.
    pub fn new(shape: CellType, vertices: impl Into<Vec<usize>>) -> Self {
        Self {
            shape,
            vertices: vertices.into(),
        }
    }
}

/// Boundary condition record attached to a [`Domain`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Human-readable marker name.
    pub name: String,
}

impl Condition {
    /// Condition record carrying `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Named collection of volume elements.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Block {
    /// Block name.
    pub name: String,
    /// Volume elements in enumeration order.
    pub elements: Vec<Element>,
}

/// Named collection of boundary elements plus its condition record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Domain {
    /// Domain name.
    pub name: String,
    /// Condition carrying the marker name.
    pub condition: Condition,
    /// Boundary elements in enumeration order.
    pub elements: Vec<Element>,
}

/// A named, enumerable group of elements.
pub trait ElementGroup {
    /// Group name.
    fn name(&self) -> &str;
    /// Number of elements [`elements`](Self::elements) yields.
    fn element_count(&self) -> usize;
    /// Elements in stable enumeration order.
    fn elements(&self) -> impl Iterator<Item = &Element>;
}

/// An element group that forms part of the mesh boundary.
pub trait BoundaryGroup: ElementGroup {
    /// Condition record whose name becomes the marker tag.
    fn condition(&self) -> &Condition;
}

/// Read-only source of mesh entities.
///
/// Enumeration order must be deterministic: exporters rely on it for the
/// global element numbering.
pub trait MeshModel {
    /// Volume element group type.
    type Block: ElementGroup;
    /// Boundary element group type.
    type Domain: BoundaryGroup;

    /// Configured dimensionality; `None` when unset.
    fn dimension(&self) -> Option<Dimension>;
    /// Floating precision for coordinate output.
    fn precision(&self) -> Precision;

    /// Number of vertices [`vertices`](Self::vertices) yields.
    fn vertex_count(&self) -> usize;
    /// Vertices in stable enumeration order.
    fn vertices(&self) -> impl Iterator<Item = &Vertex>;

    /// Number of blocks.
    fn block_count(&self) -> usize;
    /// Blocks in stable enumeration order.
    fn blocks(&self) -> impl Iterator<Item = &Self::Block>;

    /// Number of domains.
    fn domain_count(&self) -> usize;
    /// Domains in stable enumeration order.
    fn domains(&self) -> impl Iterator<Item = &Self::Domain>;

    /// Total volume element count over all blocks.
    fn volume_element_count(&self) -> usize {
        self.blocks().map(|block| block.element_count()).sum()
    }
}

impl ElementGroup for Block {
    fn name(&self) -> &str {
        &self.name
    }

    fn element_count(&self) -> usize {
        self.elements.len()
    }

    fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }
}

impl ElementGroup for Domain {
    fn name(&self) -> &str {
        &self.name
    }

    fn element_count(&self) -> usize {
        self.elements.len()
    }

    fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }
}

impl BoundaryGroup for Domain {
    fn condition(&self) -> &Condition {
        &self.condition
    }
}
