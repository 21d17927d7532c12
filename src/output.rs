//! Writing finished meshes to disk.

use crate::prelude::*;
use crate::write_msh::write_msh;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// `rect_<nx>x<ny>.msh`, named after the cell counts (not node counts)
pub fn file_name(resolution: &Resolution) -> String {
    format!(
        "rect_{}x{}.msh",
        resolution.nx_cells(),
        resolution.ny_cells()
    )
}

/// Write `mesh` to [`file_name`] inside `dir` and return the full path.
///
/// An existing file of the same name is overwritten. The write is not atomic.
pub fn write_to_dir<P: AsRef<Path>>(
    mesh: &RectMesh,
    resolution: &Resolution,
    dir: P,
) -> Result<PathBuf, Error> {
    let path = dir.as_ref().join(file_name(resolution));
    write_to_path(mesh, &path)?;
    Ok(path)
}

/// Write `mesh` to an explicit path.
pub fn write_to_path<P: AsRef<Path>>(mesh: &RectMesh, path: P) -> Result<(), Error> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write_msh(&mut writer, mesh)?;

    log::info!(
        "wrote {} nodes and {} elements to {}",
        mesh.node_count(),
        mesh.element_count(),
        path.display()
    );

    Ok(())
}
