use crate::mesh::{number_elements, ElementCounts, PhysicalGroup};
use crate::prelude::*;

#[derive(Debug, Clone, PartialEq)]
/// Container for everything written to a msh file.
///
/// `RectMesh` holds the node lattice, the numbered element list and the
/// physical group table. It is built in one step from a
/// [`Rectangle`](crate::Rectangle) and a [`Resolution`](crate::Resolution)
/// and is not modified afterwards. Write it with
/// [write_msh](`crate::write_msh()`) or [write_to_dir](`crate::write_to_dir()`).
pub struct RectMesh {
    pub grid: Grid,
    pub elements: Vec<Element>,
    pub groups: Vec<PhysicalGroup>,
}

impl RectMesh {
    /// Mesh `domain` with `resolution` cells along each axis.
    pub fn generate(domain: &Rectangle, resolution: &Resolution) -> RectMesh {
        let (nx, ny) = resolution.node_counts();
        Self::from_node_counts(domain, nx, ny)
    }

    /// Mesh `domain` with a lattice of `nx` by `ny` nodes. Node counts below
    /// two produce empty sides instead of an error.
    pub fn from_node_counts(domain: &Rectangle, nx: usize, ny: usize) -> RectMesh {
        let grid = Grid::new(domain, nx, ny);
        let elements = number_elements(nx, ny);

        log::debug!(
            "generated {} nodes and {} elements over [{}, {}] x [{}, {}]",
            grid.len(),
            elements.len(),
            domain.x0,
            domain.x_end(),
            domain.y0,
            domain.y_end()
        );

        RectMesh {
            grid,
            elements,
            groups: PhysicalGroup::table(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.grid.len()
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// per-category element counts of this lattice
    pub fn counts(&self) -> ElementCounts {
        ElementCounts::from_nodes(self.grid.nx(), self.grid.ny())
    }
}
