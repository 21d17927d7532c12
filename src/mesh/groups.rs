use crate::prelude::*;

/// A named physical group as it appears in the `$PhysicalNames` section.
#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct PhysicalGroup {
    /// topological dimension of the tagged elements
    pub dimension: usize,
    pub id: usize,
    pub name: String,
}

impl PhysicalGroup {
    /// physical group id of the interior quadrilaterals
    pub const FLUID: usize = 1;

    /// elementary tag of the interior quadrilaterals
    pub const FLUID_ELEMENTARY: usize = 1;

    /// The fixed table written to every file: one periodic label per side,
    /// then the fluid surface.
    pub fn table() -> Vec<PhysicalGroup> {
        let mut groups: Vec<_> = [Side::West, Side::South, Side::East, Side::North]
            .into_iter()
            .map(|side| Self::new(1, side.physical_group(), side.label().to_string()))
            .collect();

        groups.push(Self::new(2, Self::FLUID, "fluid".to_string()));
        groups
    }
}

/// The four sides of the rectangle, in the order their line elements are
/// numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Side {
    #[display(fmt = "west")]
    West,
    #[display(fmt = "east")]
    East,
    #[display(fmt = "south")]
    South,
    #[display(fmt = "north")]
    North,
}

impl Side {
    /// numbering order of the boundary pass
    pub const ALL: [Side; 4] = [Side::West, Side::East, Side::South, Side::North];

    pub fn physical_group(&self) -> usize {
        match self {
            Side::West => 2,
            Side::South => 3,
            Side::East => 4,
            Side::North => 5,
        }
    }

    /// elementary (geometric) tag of the side's line elements
    pub fn elementary_tag(&self) -> usize {
        match self {
            Side::West => 1,
            Side::South => 2,
            Side::East => 3,
            Side::North => 4,
        }
    }

    /// periodic boundary label. `_0_` pairs west with east, `_1_` pairs
    /// south with north.
    pub fn label(&self) -> &'static str {
        match self {
            Side::West => "periodic_0_l",
            Side::South => "periodic_1_l",
            Side::East => "periodic_0_r",
            Side::North => "periodic_1_r",
        }
    }

    pub fn from_physical_group(id: usize) -> Option<Side> {
        Side::ALL.into_iter().find(|side| side.physical_group() == id)
    }
}
