//! The four SU2 sections: dimension, elements, nodes, boundaries.
//!
//! Every section starts with a three-line comment banner and a `KEY= value`
//! count record, followed by its body.

use std::io::Write;

use super::connectivity::{ConnectivityEncoder, GlobalElementIndex};
use super::format::{float_width, format_g_alt, write_banner, write_key_value};
use crate::mesh_error::MeshExportError;
use crate::model::{BoundaryGroup, Dimension, ElementGroup, MeshModel, Precision, Vertex};
use crate::progress::{Progress, proceed};

/// Section writer bound to one output stream and one progress sink.
pub(crate) struct SectionWriter<'a, W, P> {
    pub(crate) out: &'a mut W,
    pub(crate) progress: &'a mut P,
    pub(crate) encoder: ConnectivityEncoder,
    pub(crate) dimension: Option<Dimension>,
    pub(crate) precision: Precision,
}

fn check_count(key: &'static str, declared: usize, written: usize) -> Result<(), MeshExportError> {
    if declared == written {
        Ok(())
    } else {
        Err(MeshExportError::CountMismatch {
            key,
            declared,
            written,
        })
    }
}

impl<W: Write, P: Progress> SectionWriter<'_, W, P> {
    /// Run `body` inside a `begin_step`/`end_step` bracket.
    ///
    /// `end_step` is called even when `begin_step` or `body` fails; the first
    /// failure wins.
    fn bracketed<T>(
        &mut self,
        units: usize,
        body: impl FnOnce(&mut Self) -> Result<T, MeshExportError>,
    ) -> Result<T, MeshExportError> {
        let result = proceed(self.progress.begin_step(units)).and_then(|()| body(self));
        let closed = proceed(self.progress.end_step());
        let value = result?;
        closed?;
        Ok(value)
    }

    /// `NDIME= 2|3`; 0 when the dimensionality is unset.
    pub(crate) fn write_dimension(&mut self) -> Result<(), MeshExportError> {
        let ndime = match self.dimension {
            Some(dim) => dim.components(),
            None => {
                log::warn!("mesh dimensionality is unset; writing NDIME= 0");
                0
            }
        };
        write_banner(self.out, "Problem dimension")?;
        write_key_value(self.out, "NDIME", ndime)
    }

    /// `NELEM=` followed by every volume element, block by block, each line
    /// carrying its global index. Returns the final counter.
    pub(crate) fn write_elements<M: MeshModel>(
        &mut self,
        model: &M,
    ) -> Result<GlobalElementIndex, MeshExportError> {
        let declared = model.volume_element_count();
        write_banner(self.out, "Inner element connectivity")?;
        write_key_value(self.out, "NELEM", declared)?;

        let mut global = GlobalElementIndex::new();
        let mut blocks_written = 0usize;
        for block in model.blocks() {
            log::debug!(
                "block `{}`: {} elements from global index {}",
                block.name(),
                block.element_count(),
                global.get()
            );
            self.bracketed(block.element_count(), |w| {
                for element in block.elements() {
                    w.encoder.encode(w.out, element, Some(&mut global))?;
                    proceed(w.progress.increment())?;
                }
                Ok(())
            })?;
            blocks_written += 1;
        }
        check_count("NELEM", declared, global.get())?;
        // block_count() sizes the progress init; it must agree with blocks()
        check_count("blocks", model.block_count(), blocks_written)?;
        Ok(global)
    }

    fn write_vertex(&mut self, vertex: &Vertex) -> Result<(), MeshExportError> {
        let digits = self.precision.significant_digits();
        let width = float_width(digits);
        let [x, y, z] = vertex.coords.map(|c| format_g_alt(c, digits));
        if self.dimension == Some(Dimension::Three) {
            writeln!(
                self.out,
                "{x:>width$} {y:>width$} {z:>width$} {:4}",
                vertex.index
            )?;
        } else {
            writeln!(self.out, "{x:>width$} {y:>width$} {:4}", vertex.index)?;
        }
        Ok(())
    }

    /// `NPOIN=` followed by one coordinate line per vertex, ending with the
    /// vertex's own index.
    pub(crate) fn write_nodes<M: MeshModel>(&mut self, model: &M) -> Result<(), MeshExportError> {
        let declared = model.vertex_count();
        self.bracketed(declared, |w| {
            write_banner(w.out, "Node coordinates")?;
            write_key_value(w.out, "NPOIN", declared)?;
            let mut written = 0usize;
            for vertex in model.vertices() {
                w.write_vertex(vertex)?;
                written += 1;
                proceed(w.progress.increment())?;
            }
            check_count("NPOIN", declared, written)
        })
    }

    fn write_marker<D: BoundaryGroup>(&mut self, domain: &D) -> Result<(), MeshExportError> {
        let declared = domain.element_count();
        self.bracketed(declared, |w| {
            write_key_value(w.out, "MARKER_TAG", &domain.condition().name)?;
            write_key_value(w.out, "MARKER_ELEMS", declared)?;
            let mut written = 0usize;
            for element in domain.elements() {
                w.encoder.encode(w.out, element, None)?;
                written += 1;
                proceed(w.progress.increment())?;
            }
            check_count("MARKER_ELEMS", declared, written)
        })
    }

    /// `NMARK=` followed by one marker block per domain.
    pub(crate) fn write_boundaries<M: MeshModel>(
        &mut self,
        model: &M,
    ) -> Result<(), MeshExportError> {
        let declared = model.domain_count();
        write_banner(self.out, "Boundary elements")?;
        write_key_value(self.out, "NMARK", declared)?;
        let mut written = 0usize;
        for domain in model.domains() {
            log::debug!(
                "domain `{}` -> marker `{}`",
                domain.name(),
                domain.condition().name
            );
            self.write_marker(domain)?;
            written += 1;
        }
        check_count("NMARK", declared, written)
    }
}
