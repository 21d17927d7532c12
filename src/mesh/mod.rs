//! # Mesh Information
//!
//! A mesh is made of two independent pieces. The [`Grid`] holds the node
//! coordinates of a uniform lattice over the rectangle, stored row-major so
//! that the node at column `i` and row `j` has the 1-based id `j * nx + i + 1`.
//! The element list, produced by [`number_elements`], references those ids
//! only; it never looks at coordinates.
//!
//! ## Element ordering
//!
//! Elements share one continuous, 1-based numbering:
//!
//! 1. line elements along the west side (bottom to top)
//! 2. line elements along the east side (bottom to top)
//! 3. line elements along the south side (left to right)
//! 4. line elements along the north side (left to right)
//! 5. interior quadrilaterals, row by row
//!
//! Quadrilaterals are listed counter-clockwise starting at their bottom-left
//! node. Each side of the rectangle has its own [`Side`] physical group, and
//! the quadrilaterals belong to [`PhysicalGroup::FLUID`].
//!
//! ## Degenerate lattices
//!
//! Lattices with fewer than two nodes along an axis have no edges along
//! that axis. The affected sides (and the interior) are simply empty; no
//! error is raised at this level. [`Resolution`](crate::Resolution) is the
//! place where degenerate sizes are rejected.

mod grid;
mod groups;
mod numbering;

pub use grid::{linspace, Grid, Point};
pub use groups::{PhysicalGroup, Side};
pub use numbering::{
    boundary_elements, interior_elements, number_elements, Connectivity, Element, ElementCounts,
    Numbering,
};
