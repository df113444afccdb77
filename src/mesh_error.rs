//! MeshExportError: Unified error type for mesh-su2 public APIs
//!
//! Every fallible export operation returns this error so that callers get
//! non-panicking handling for write failures, cancellation and data defects.

use crate::topology::cell_type::CellType;
use thiserror::Error;

/// Unified error type for mesh export operations.
#[derive(Debug, Error)]
pub enum MeshExportError {
    /// The output stream rejected a write (disk full, closed pipe, ...).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The progress collaborator asked the export to stop.
    #[error("export cancelled by progress handler")]
    Cancelled,
    /// The element shape has no SU2 element type code.
    #[error("unsupported element shape {shape:?} (no SU2 element type)")]
    UnsupportedShape {
        /// Offending shape.
        shape: CellType,
    },
    /// A canonical element carries the wrong number of vertex indices.
    #[error("{shape:?} element expects {expected} vertex indices, found {found}")]
    ConnectivityLength {
        /// Shape of the element.
        shape: CellType,
        /// Vertex count required by the shape.
        expected: usize,
        /// Vertex count present on the element.
        found: usize,
    },
    /// A count header disagrees with the records the mesh actually enumerated.
    #[error("{key} declared {declared} records but {written} were written")]
    CountMismatch {
        /// Header key (`NELEM`, `NPOIN`, `NMARK`, `MARKER_ELEMS`), or `blocks`
        /// when the block count disagrees with the block enumeration.
        key: &'static str,
        /// Value written in the header.
        declared: usize,
        /// Records produced by the enumeration.
        written: usize,
    },
}

impl MeshExportError {
    /// True when the export stopped because the caller requested it.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, MeshExportError::Cancelled)
    }
}
