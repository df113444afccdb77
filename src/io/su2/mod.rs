//! SU2 native mesh (`.su2`) writer.
//!
//! # Layout
//! Four sections, in this order, each preceded by a `%` comment banner:
//! - `NDIME=` problem dimension.
//! - `NELEM=` volume element connectivity; every line ends with the element's
//!   0-based global index, assigned block by block.
//! - `NPOIN=` vertex coordinates followed by the vertex index.
//! - `NMARK=` boundary markers, each as `MARKER_TAG=`/`MARKER_ELEMS=` plus
//!   connectivity lines without a global index.
//!
//! # Limitations
//! - Only linear elements (bar, triangle, quad, tet, hex, prism, pyramid).
//! - Prisms are written with their triangular caps swapped to match SU2's
//!   face orientation.
//! - Reading `.su2` files is not supported.

pub mod connectivity;
pub mod element_type;
pub mod format;
mod sections;

pub use connectivity::{ConnectivityEncoder, GlobalElementIndex};
pub use element_type::{Su2ElementType, map_shape};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::io::MeshWriter;
use crate::mesh_error::MeshExportError;
use crate::model::{Dimension, MeshModel, Precision};
use crate::progress::{NullProgress, Progress, proceed};
use sections::SectionWriter;

/// What to do with elements whose shape has no SU2 type.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedShapePolicy {
    /// Fail the export before anything is written for the element.
    #[default]
    Reject,
    /// Write type code 0 with the raw vertex order and log a warning.
    WriteInvalid,
}

/// Options for [`Su2Writer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Su2WriteOptions {
    /// Overrides the model's dimensionality.
    pub dimension: Option<Dimension>,
    /// Overrides the model's floating precision.
    pub precision: Option<Precision>,
    /// Handling of shapes SU2 cannot represent.
    pub unsupported_shapes: UnsupportedShapePolicy,
}

/// SU2 `.su2` writer.
#[derive(Debug, Default, Clone)]
pub struct Su2Writer {
    options: Su2WriteOptions,
}

impl Su2Writer {
    /// Writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writer with explicit options.
    pub fn with_options(options: Su2WriteOptions) -> Self {
        Self { options }
    }

    /// Options in effect.
    pub fn options(&self) -> &Su2WriteOptions {
        &self.options
    }

    /// Export `model` to `out`, reporting to `progress`.
    ///
    /// The progress sink sees `init(blocks + domains + 1)` first and
    /// `end(success)` exactly once at the end, whether the export succeeded,
    /// failed on a write, or was cancelled. Output already written when a
    /// failure occurs is left as is.
    pub fn write<W, M, P>(&self, mut out: W, model: &M, mut progress: P) -> Result<(), MeshExportError>
    where
        W: Write,
        M: MeshModel,
        P: Progress,
    {
        let major_steps = model.block_count() + model.domain_count() + 1;
        let result = self.run(&mut out, model, &mut progress, major_steps);
        if let Err(err) = &result {
            log::debug!("SU2 export failed: {err}");
        }
        progress.end(result.is_ok());
        result
    }

    /// Export `model` to a new file at `path`.
    pub fn write_file<M, P>(
        &self,
        path: impl AsRef<Path>,
        model: &M,
        progress: P,
    ) -> Result<(), MeshExportError>
    where
        M: MeshModel,
        P: Progress,
    {
        let file = File::create(path.as_ref())?;
        log::info!("writing SU2 mesh to {}", path.as_ref().display());
        self.write(BufWriter::new(file), model, progress)
    }

    fn run<W, M, P>(
        &self,
        out: &mut W,
        model: &M,
        progress: &mut P,
        major_steps: usize,
    ) -> Result<(), MeshExportError>
    where
        W: Write,
        M: MeshModel,
        P: Progress,
    {
        proceed(progress.init(major_steps))?;
        let mut sections = SectionWriter {
            out,
            progress,
            encoder: ConnectivityEncoder::new(self.options.unsupported_shapes),
            dimension: self.options.dimension.or(model.dimension()),
            precision: self.options.precision.unwrap_or(model.precision()),
        };
        sections.write_dimension()?;
        let global = sections.write_elements(model)?;
        sections.write_nodes(model)?;
        sections.write_boundaries(model)?;
        sections.out.flush()?;
        log::debug!(
            "SU2 export wrote {} volume elements, {} vertices, {} markers",
            global.get(),
            model.vertex_count(),
            model.domain_count()
        );
        Ok(())
    }
}

impl MeshWriter for Su2Writer {
    fn write_mesh<W: Write, M: MeshModel>(&self, writer: W, model: &M) -> Result<(), MeshExportError> {
        self.write(writer, model, NullProgress)
    }
}
