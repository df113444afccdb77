#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-su2
//!
//! mesh-su2 exports in-memory unstructured meshes to the SU2 native mesh
//! format read by the SU2 CFD solver. A mesh is made of vertices, volume
//! elements grouped in blocks and boundary elements grouped in domains; the
//! exporter streams them section by section with a running global element
//! numbering, reporting progress and honoring cancellation along the way.
//!
//! ## Features
//! - [`MeshModel`](model::MeshModel) trait for read-only, lazily enumerated
//!   mesh sources, plus the owned [`InMemoryMesh`](model::InMemoryMesh)
//! - SU2 writer with canonical element ordering (including the prism cap swap)
//! - Cooperative cancellation through the [`Progress`](progress::Progress) trait
//! - `log`-based diagnostics; no logger is installed by the library
//!
//! ## Usage
//!
//! ```
//! use mesh_su2::prelude::*;
//!
//! let mut mesh = InMemoryMesh::new(Dimension::Three);
//! for xyz in [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]] {
//!     mesh.add_vertex(xyz);
//! }
//! mesh.add_block("fluid", [Element::new(CellType::Tetrahedron, [0, 1, 2, 3])]);
//!
//! let mut out = Vec::new();
//! Su2Writer::new().write(&mut out, &mesh, NullProgress).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("NELEM= 1"));
//! ```

pub mod io;
pub mod mesh_error;
pub mod model;
pub mod progress;
pub mod topology;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::io::MeshWriter;
    pub use crate::io::su2::{Su2WriteOptions, Su2Writer, UnsupportedShapePolicy};
    pub use crate::mesh_error::MeshExportError;
    pub use crate::model::{
        BoundaryGroup, Condition, Dimension, Element, ElementGroup, InMemoryMesh, MeshModel,
        Precision, Vertex,
    };
    pub use crate::progress::{LogProgress, NullProgress, Progress};
    pub use crate::topology::cell_type::CellType;
}
