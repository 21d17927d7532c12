use crate::prelude::*;

/// Extent and anchor of the meshed rectangle.
///
/// The extents are not checked: zero or negative widths produce collapsed
/// or mirrored lattices, which is left to the caller to avoid.
#[derive(Debug, Clone, PartialEq, Constructor)]
pub struct Rectangle {
    pub lx: f64,
    pub ly: f64,
    pub x0: f64,
    pub y0: f64,
}

impl Rectangle {
    /// `[0, 1] x [0, 1]`
    pub fn unit() -> Self {
        Self::new(1., 1., 0., 0.)
    }

    pub fn x_end(&self) -> f64 {
        self.x0 + self.lx
    }

    pub fn y_end(&self) -> f64 {
        self.y0 + self.ly
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::unit()
    }
}

/// Number of quadrilateral cells along each axis.
///
/// The lattice handed to the grid generator has one more node than
/// cells in each direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    nx: usize,
    ny: usize,
}

impl Resolution {
    /// Both cell counts must be at least 1, and the lattice node count
    /// `(nx + 1) * (ny + 1)` must fit in a `usize`.
    pub fn new(nx: usize, ny: usize) -> Result<Self, Error> {
        let nodes = nx
            .checked_add(1)
            .zip(ny.checked_add(1))
            .and_then(|(x, y)| x.checked_mul(y));

        if nx == 0 || ny == 0 || nodes.is_none() {
            return Err(Error::InvalidResolution { nx, ny });
        }

        Ok(Self { nx, ny })
    }

    pub fn nx_cells(&self) -> usize {
        self.nx
    }

    pub fn ny_cells(&self) -> usize {
        self.ny
    }

    /// node counts `(nx + 1, ny + 1)` of the lattice
    pub fn node_counts(&self) -> (usize, usize) {
        (self.nx + 1, self.ny + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_cells_rejected() {
        assert!(matches!(
            Resolution::new(0, 3),
            Err(Error::InvalidResolution { nx: 0, ny: 3 })
        ));
        assert!(Resolution::new(3, 0).is_err());
    }

    #[test]
    fn oversized_counts_rejected() {
        assert!(matches!(
            Resolution::new(usize::MAX, 1),
            Err(Error::InvalidResolution { .. })
        ));
        assert!(Resolution::new(1, usize::MAX).is_err());
        assert!(Resolution::new(usize::MAX / 2, 3).is_err());
    }

    #[test]
    fn node_counts_add_one() {
        let res = Resolution::new(4, 7).unwrap();
        assert_eq!(res.node_counts(), (5, 8));
        assert_eq!(res.nx_cells(), 4);
        assert_eq!(res.ny_cells(), 7);
    }

    #[test]
    fn rectangle_ends() {
        let rect = Rectangle::new(2., -1., 0.5, 3.);
        assert_eq!(rect.x_end(), 2.5);
        assert_eq!(rect.y_end(), 2.);
        assert_eq!(Rectangle::default(), Rectangle::unit());
    }
}
