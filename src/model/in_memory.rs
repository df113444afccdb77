//! Owned, vector-backed [`MeshModel`].

use super::{Block, Condition, Dimension, Domain, Element, MeshModel, Precision, Vertex};

/// Mesh model holding all entities in memory.
///
/// Vertices receive their identity index in insertion order; blocks and
/// domains enumerate in insertion order.
#[derive(Clone, Debug, Default)]
pub struct InMemoryMesh {
    dimension: Option<Dimension>,
    precision: Precision,
    vertices: Vec<Vertex>,
    blocks: Vec<Block>,
    domains: Vec<Domain>,
}

impl InMemoryMesh {
    /// Empty mesh with the given dimensionality and double precision.
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension: Some(dimension),
            ..Self::default()
        }
    }

    /// Builder-style precision setter.
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Replace the configured dimensionality (`None` leaves it unset).
    pub fn set_dimension(&mut self, dimension: Option<Dimension>) {
        self.dimension = dimension;
    }

    /// Append a vertex and return its identity index.
    pub fn add_vertex(&mut self, coords: [f64; 3]) -> usize {
        let index = self.vertices.len();
        self.vertices.push(Vertex { index, coords });
        index
    }

    /// Append a block of volume elements.
    pub fn add_block(
        &mut self,
        name: impl Into<String>,
        elements: impl IntoIterator<Item = Element>,
    ) -> &mut Block {
        self.blocks.push(Block {
            name: name.into(),
            elements: elements.into_iter().collect(),
        });
        let last = self.blocks.len() - 1;
        &mut self.blocks[last]
    }

    /// Append a boundary domain whose marker is `condition`.
    pub fn add_domain(
        &mut self,
        name: impl Into<String>,
        condition: Condition,
        elements: impl IntoIterator<Item = Element>,
    ) -> &mut Domain {
        self.domains.push(Domain {
            name: name.into(),
            condition,
            elements: elements.into_iter().collect(),
        });
        let last = self.domains.len() - 1;
        &mut self.domains[last]
    }
}

impl MeshModel for InMemoryMesh {
    type Block = Block;
    type Domain = Domain;

    fn dimension(&self) -> Option<Dimension> {
        self.dimension
    }

    fn precision(&self) -> Precision {
        self.precision
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    fn block_count(&self) -> usize {
        self.blocks.len()
    }

    fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    fn domain_count(&self) -> usize {
        self.domains.len()
    }

    fn domains(&self) -> impl Iterator<Item = &Domain> {
        self.domains.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoundaryGroup, ElementGroup};
    use crate::topology::cell_type::CellType;

    #[test]
    fn vertices_are_numbered_in_insertion_order() {
        let mut mesh = InMemoryMesh::new(Dimension::Two);
        assert_eq!(mesh.add_vertex([0.0, 0.0, 0.0]), 0);
        assert_eq!(mesh.add_vertex([1.0, 0.0, 0.0]), 1);
        let ids: Vec<_> = mesh.vertices().map(|v| v.index).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(mesh.vertex_count(), 2);
    }

    #[test]
    fn volume_count_sums_blocks() {
        let mut mesh = InMemoryMesh::new(Dimension::Three);
        mesh.add_block("a", [Element::new(CellType::Tetrahedron, [0, 1, 2, 3])]);
        mesh.add_block("empty", Vec::<Element>::new());
        mesh.add_block(
            "b",
            [
                Element::new(CellType::Tetrahedron, [0, 1, 2, 3]),
                Element::new(CellType::Pyramid, [0, 1, 2, 3, 4]),
            ],
        );
        assert_eq!(mesh.block_count(), 3);
        assert_eq!(mesh.volume_element_count(), 3);
    }

    #[test]
    fn domains_keep_their_condition() {
        let mut mesh = InMemoryMesh::new(Dimension::Two);
        mesh.add_domain(
            "bottom",
            Condition::named("wall"),
            [Element::new(CellType::Segment, [0, 1])],
        );
        let dom = mesh.domains().next().expect("one domain");
        assert_eq!(dom.name(), "bottom");
        assert_eq!(dom.condition().name, "wall");
        assert_eq!(dom.element_count(), 1);
    }

    #[test]
    fn default_precision_is_double() {
        let mesh = InMemoryMesh::new(Dimension::Three);
        assert_eq!(mesh.precision(), Precision::Double);
        let single = mesh.with_precision(Precision::Single);
        assert_eq!(single.precision().significant_digits(), 8);
    }
}
