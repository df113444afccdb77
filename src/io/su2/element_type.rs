//! SU2 element type codes and per-type node ordering.

use crate::topology::cell_type::CellType;

/// Code written for shapes SU2 has no element type for.
pub const INVALID_CODE: u8 = 0;

/// SU2 (VTK-numbered) element types.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Su2ElementType {
    Line = 3,
    Triangle = 5,
    Quadrilateral = 9,
    Tetrahedron = 10,
    Hexahedron = 12,
    Prism = 13,
    Pyramid = 14,
}

/// Output position `i` takes the element's vertex `ORDER[i]`.
const LINE_ORDER: [usize; 2] = [0, 1];
const TRIANGLE_ORDER: [usize; 3] = [0, 1, 2];
const QUAD_ORDER: [usize; 4] = [0, 1, 2, 3];
const TET_ORDER: [usize; 4] = [0, 1, 2, 3];
const PYRAMID_ORDER: [usize; 5] = [0, 1, 2, 3, 4];
const HEX_ORDER: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 7];
// SU2 orients the normal of face (3,4,5) towards face (0,1,2), the opposite
// of the source convention, so the two triangular caps trade places.
const PRISM_ORDER: [usize; 6] = [3, 4, 5, 0, 1, 2];

impl Su2ElementType {
    /// SU2 element type for a cell shape, `None` when SU2 cannot represent it.
    pub fn from_cell_type(shape: CellType) -> Option<Self> {
        match shape {
            CellType::Segment => Some(Self::Line),
            CellType::Triangle => Some(Self::Triangle),
            CellType::Quadrilateral => Some(Self::Quadrilateral),
            CellType::Tetrahedron => Some(Self::Tetrahedron),
            CellType::Hexahedron => Some(Self::Hexahedron),
            CellType::Prism => Some(Self::Prism),
            CellType::Pyramid => Some(Self::Pyramid),
            CellType::Vertex | CellType::Polygon(_) | CellType::Polyhedron => None,
        }
    }

    /// Integer code written in the element section.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Source vertex position for each output position.
    pub fn node_order(self) -> &'static [usize] {
        match self {
            Self::Line => &LINE_ORDER,
            Self::Triangle => &TRIANGLE_ORDER,
            Self::Quadrilateral => &QUAD_ORDER,
            Self::Tetrahedron => &TET_ORDER,
            Self::Hexahedron => &HEX_ORDER,
            Self::Prism => &PRISM_ORDER,
            Self::Pyramid => &PYRAMID_ORDER,
        }
    }
}

/// Map a shape to `(code, supported)`; unsupported shapes get [`INVALID_CODE`].
pub fn map_shape(shape: CellType) -> (u8, bool) {
    match Su2ElementType::from_cell_type(shape) {
        Some(ty) => (ty.code(), true),
        None => (INVALID_CODE, false),
    }
}
