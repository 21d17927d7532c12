use super::groups::{PhysicalGroup, Side};

/// Node ids (1-based) of a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// 2-node boundary edge
    Line([usize; 2]),
    /// 4-node cell, counter-clockwise from the bottom-left node
    Quad([usize; 4]),
}

impl Connectivity {
    /// msh element type code
    pub fn type_code(&self) -> usize {
        match self {
            Connectivity::Line(_) => 1,
            Connectivity::Quad(_) => 3,
        }
    }

    pub fn nodes(&self) -> &[usize] {
        match self {
            Connectivity::Line(nodes) => nodes,
            Connectivity::Quad(nodes) => nodes,
        }
    }
}

/// A numbered mesh element with its two tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: usize,
    pub physical: usize,
    pub elementary: usize,
    pub connectivity: Connectivity,
}

impl Element {
    fn line(id: usize, side: Side, nodes: [usize; 2]) -> Self {
        Self {
            id,
            physical: side.physical_group(),
            elementary: side.elementary_tag(),
            connectivity: Connectivity::Line(nodes),
        }
    }

    fn quad(id: usize, nodes: [usize; 4]) -> Self {
        Self {
            id,
            physical: PhysicalGroup::FLUID,
            elementary: PhysicalGroup::FLUID_ELEMENTARY,
            connectivity: Connectivity::Quad(nodes),
        }
    }

    pub fn nodes(&self) -> &[usize] {
        self.connectivity.nodes()
    }

    /// side of the rectangle a line element lies on; `None` for quads
    pub fn side(&self) -> Option<Side> {
        match self.connectivity {
            Connectivity::Line(_) => Side::from_physical_group(self.physical),
            Connectivity::Quad(_) => None,
        }
    }
}

/// Running element id shared by the boundary and interior passes.
#[derive(Debug, Clone, Default)]
pub struct Numbering {
    last: usize,
}

impl Numbering {
    pub fn new() -> Self {
        Self::default()
    }

    /// continue numbering after `last`
    pub fn starting_after(last: usize) -> Self {
        Self { last }
    }

    pub fn next_id(&mut self) -> usize {
        self.last += 1;
        self.last
    }

    /// the most recently assigned id, 0 if none was assigned
    pub fn last(&self) -> usize {
        self.last
    }
}

/// How many elements a `nx` by `ny` node lattice produces, per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementCounts {
    pub west: usize,
    pub east: usize,
    pub south: usize,
    pub north: usize,
    pub quads: usize,
}

impl ElementCounts {
    pub fn from_nodes(nx: usize, ny: usize) -> Self {
        // an empty lattice has no sides at all
        let (x_edges, y_edges) = if nx == 0 || ny == 0 {
            (0, 0)
        } else {
            (nx - 1, ny - 1)
        };

        Self {
            west: y_edges,
            east: y_edges,
            south: x_edges,
            north: x_edges,
            quads: x_edges * y_edges,
        }
    }

    pub fn side(&self, side: Side) -> usize {
        match side {
            Side::West => self.west,
            Side::East => self.east,
            Side::South => self.south,
            Side::North => self.north,
        }
    }

    pub fn lines(&self) -> usize {
        self.west + self.east + self.south + self.north
    }

    pub fn total(&self) -> usize {
        self.lines() + self.quads
    }
}

/// Line elements of all four sides in west, east, south, north order.
pub fn boundary_elements(nx: usize, ny: usize, numbering: &mut Numbering) -> Vec<Element> {
    let counts = ElementCounts::from_nodes(nx, ny);
    let mut elements = Vec::with_capacity(counts.lines());

    for side in Side::ALL {
        for i in 0..counts.side(side) {
            let nodes = match side {
                Side::West => [i * nx + 1, (i + 1) * nx + 1],
                Side::East => [(i + 1) * nx, (i + 2) * nx],
                Side::South => [i + 1, i + 2],
                Side::North => [(ny - 1) * nx + i + 1, (ny - 1) * nx + i + 2],
            };

            elements.push(Element::line(numbering.next_id(), side, nodes));
        }
    }

    elements
}

/// Quadrilaterals covering the lattice, row by row.
pub fn interior_elements(nx: usize, ny: usize, numbering: &mut Numbering) -> Vec<Element> {
    let counts = ElementCounts::from_nodes(nx, ny);
    let mut elements = Vec::with_capacity(counts.quads);

    for j in 0..ny.saturating_sub(1) {
        for i in 0..nx.saturating_sub(1) {
            let bottom_left = j * nx + i + 1;
            let top_left = (j + 1) * nx + i + 1;

            let nodes = [bottom_left, bottom_left + 1, top_left + 1, top_left];
            elements.push(Element::quad(numbering.next_id(), nodes));
        }
    }

    elements
}

/// Every element of a `nx` by `ny` node lattice, numbered from 1.
pub fn number_elements(nx: usize, ny: usize) -> Vec<Element> {
    let mut numbering = Numbering::new();

    let mut elements = boundary_elements(nx, ny, &mut numbering);
    elements.extend(interior_elements(nx, ny, &mut numbering));

    log::debug!(
        "numbered {} elements for a {}x{} node lattice",
        numbering.last(),
        nx,
        ny
    );

    elements
}
