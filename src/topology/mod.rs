//! Mesh topology metadata.
//!
//! Element shapes and their fixed properties, shared by the mesh model and
//! the format writers.

pub mod cell_type;

pub use cell_type::CellType;
