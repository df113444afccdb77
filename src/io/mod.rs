//! Mesh export to solver input formats.
//!
//! Writers consume any [`MeshModel`] and stream the target format to a
//! [`Write`] sink. The model is only read; all bookkeeping (running element
//! numbering, progress brackets) lives inside one `write` call.

pub mod su2;

use crate::mesh_error::MeshExportError;
use crate::model::MeshModel;
use std::io::Write;

/// Trait for mesh writers that serialize a mesh model.
pub trait MeshWriter {
    /// Write `model` to `writer` without progress reporting.
    fn write_mesh<W: Write, M: MeshModel>(
        &self,
        writer: W,
        model: &M,
    ) -> Result<(), MeshExportError>;
}
