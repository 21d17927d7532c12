//! # rectmsh
//!
//! Structured quadrilateral meshes over a rectangle, written in the legacy
//! Gmsh 2.2 ASCII format. The four sides of the rectangle are emitted as
//! line elements tagged with periodic boundary physical groups, and the
//! interior is covered with 4-node quadrilaterals tagged `"fluid"`.
//!
//! ```no_run
//! use rectmsh::{Rectangle, Resolution};
//!
//! let domain = Rectangle::unit();
//! let resolution = Resolution::new(16, 8).unwrap();
//! let mesh = rectmsh::RectMesh::generate(&domain, &resolution);
//!
//! let path = rectmsh::write_to_dir(&mesh, &resolution, ".").unwrap();
//! println!("wrote {}", path.display());
//! ```

mod data;
mod domain;
pub mod mesh;
pub mod output;
pub mod parse;
pub mod prelude;
mod traits;
mod utils;
mod write_msh;

pub use data::RectMesh;
pub use domain::{Rectangle, Resolution};

pub use mesh::{Connectivity, Element, ElementCounts, Grid, PhysicalGroup, Point, Side};

pub use traits::Section;

pub use output::{file_name, write_to_dir};
pub use write_msh::{write_msh, write_section};
pub use write_msh::{to_msh_string, Elements, MeshFormat, Nodes, PhysicalNames};

pub use parse::{read_msh, read_msh_file, MshFile, ParseError};

/// general purpose error enumeration for possible causes of failure.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("An io error occured: `{0}`")]
    Io(#[from] std::io::Error),
    #[error("Error while parsing msh file: {0}")]
    Parse(#[from] parse::ParseError),
    #[error("Invalid mesh resolution {nx}x{ny}: each axis needs at least one cell and the node count must fit in usize")]
    InvalidResolution { nx: usize, ny: usize },
}
