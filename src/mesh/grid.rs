use crate::prelude::*;

/// A single mesh node. `z` is always zero for the planar meshes produced here.
#[derive(Debug, Clone, Copy, PartialEq, Constructor)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    /// point in the `z = 0` plane
    pub fn planar(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.)
    }
}

/// `n` evenly spaced values over `[start, end]`, both ends included.
///
/// With `n == 1` the only value is `start`. The last value is exactly `end`
/// rather than the accumulated `start + (n - 1) * step`.
pub fn linspace(start: f64, end: f64, n: usize) -> Array1<f64> {
    let mut values = Array1::linspace(start, end, n);
    if n > 1 {
        values[n - 1] = end;
    }
    values
}

/// Node coordinates of a uniform `nx` by `ny` lattice.
///
/// Points are stored row-major: index `j * nx + i` holds the node in column
/// `i` and row `j`, which is written to file with id `j * nx + i + 1`.
#[derive(Debug, Clone, PartialEq, Deref)]
pub struct Grid {
    nx: usize,
    ny: usize,
    #[deref]
    points: Vec<Point>,
}

impl Grid {
    /// Lattice of `nx` by `ny` nodes spanning `domain`.
    pub fn new(domain: &Rectangle, nx: usize, ny: usize) -> Self {
        let rx = linspace(domain.x0, domain.x_end(), nx);
        let ry = linspace(domain.y0, domain.y_end(), ny);

        let mut points = Vec::with_capacity(nx * ny);

        for y in ry.iter() {
            for x in rx.iter() {
                points.push(Point::planar(*x, *y));
            }
        }

        Self { nx, ny, points }
    }

    /// number of nodes along x
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// number of nodes along y
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// 1-based id of the node in column `i`, row `j`
    pub fn node_id(&self, i: usize, j: usize) -> usize {
        j * self.nx + i + 1
    }

    /// look up a node by its 1-based id
    pub fn node(&self, id: usize) -> Option<&Point> {
        id.checked_sub(1).and_then(|idx| self.points.get(idx))
    }
}
