//! Element connectivity records: `<type> <idx>...<idx>[ <global index>]`.

use std::io::Write;

use super::UnsupportedShapePolicy;
use super::element_type::{INVALID_CODE, Su2ElementType};
use crate::mesh_error::MeshExportError;
use crate::model::Element;

/// Running 0-based index over all volume elements of one export.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GlobalElementIndex(usize);

impl GlobalElementIndex {
    /// Counter starting at 0.
    pub fn new() -> Self {
        Self(0)
    }

    /// Index the next volume element will receive; after an export, the
    /// number of volume elements written.
    pub fn get(self) -> usize {
        self.0
    }

    /// Hand out the current index and advance.
    pub fn next_index(&mut self) -> usize {
        let current = self.0;
        self.0 += 1;
        current
    }
}

/// Writes one element per line in SU2 connectivity layout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConnectivityEncoder {
    policy: UnsupportedShapePolicy,
}

impl ConnectivityEncoder {
    /// Encoder applying `policy` to shapes SU2 cannot represent.
    pub fn new(policy: UnsupportedShapePolicy) -> Self {
        Self { policy }
    }

    /// Write `element` as one line.
    ///
    /// Volume elements pass the running `global` index, which is appended and
    /// then advanced; boundary elements pass `None` and end the line after
    /// the vertex list.
    pub fn encode<W: Write>(
        &self,
        out: &mut W,
        element: &Element,
        global: Option<&mut GlobalElementIndex>,
    ) -> Result<(), MeshExportError> {
        match Su2ElementType::from_cell_type(element.shape) {
            Some(ty) => {
                let order = ty.node_order();
                if element.vertices.len() != order.len() {
                    return Err(MeshExportError::ConnectivityLength {
                        shape: element.shape,
                        expected: order.len(),
                        found: element.vertices.len(),
                    });
                }
                write!(out, "{:2} ", ty.code())?;
                for &pos in order {
                    write!(out, " {:4}", element.vertices[pos])?;
                }
            }
            None => match self.policy {
                UnsupportedShapePolicy::Reject => {
                    return Err(MeshExportError::UnsupportedShape {
                        shape: element.shape,
                    });
                }
                UnsupportedShapePolicy::WriteInvalid => {
                    log::warn!(
                        "writing {:?} element with invalid SU2 type {INVALID_CODE}",
                        element.shape
                    );
                    write!(out, "{INVALID_CODE:2} ")?;
                    for vertex in &element.vertices {
                        write!(out, " {vertex:4}")?;
                    }
                }
            },
        }
        match global {
            Some(index) => writeln!(out, " {:4}", index.next_index())?,
            None => writeln!(out)?,
        }
        Ok(())
    }
}
