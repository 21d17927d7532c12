use crate::data::RectMesh;
use crate::mesh::PhysicalGroup;
use crate::prelude::*;
use crate::utils::float_to_str;

/// format version written to `$MeshFormat`
pub const FORMAT_VERSION: &str = "2.2";
/// ascii file type flag
const FILE_TYPE: usize = 0;
/// size of a `double` on the platforms that consume the file
const DATA_SIZE: usize = 8;
/// every element carries a physical and an elementary tag
const NUM_TAGS: usize = 2;

/// Write a complete mesh to a `Writer`
///
/// The document is an empty line followed by `$MeshFormat`, `$PhysicalNames`,
/// `$Nodes` and `$Elements`, in that order. Output only depends on `mesh`, so
/// repeated calls produce identical bytes.
pub fn write_msh<W: Write>(writer: &mut W, mesh: &RectMesh) -> Result<(), Error> {
    writeln!(writer)?;
    write_section(writer, &MeshFormat)?;
    write_section(writer, &PhysicalNames(&mesh.groups))?;
    write_section(writer, &Nodes(&mesh.grid))?;
    write_section(writer, &Elements(&mesh.elements))?;

    writer.flush()?;

    Ok(())
}

/// render a mesh into an in-memory string
pub fn to_msh_string(mesh: &RectMesh) -> Result<String, Error> {
    let mut buffer = Vec::new();
    write_msh(&mut buffer, mesh)?;

    // every field written is ascii
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// write `$NAME`, the section body and `$EndNAME`
pub fn write_section<W: Write, S: Section>(writer: &mut W, section: &S) -> Result<(), Error> {
    writeln!(writer, "${}", S::NAME)?;

    if let Some(count) = section.record_count() {
        writeln!(writer, "{}", count)?;
    }

    section.write_body(writer)?;
    writeln!(writer, "$End{}", S::NAME)?;

    Ok(())
}

/// the `2.2 0 8` header section
#[derive(Debug, Clone, Copy)]
pub struct MeshFormat;

impl Section for MeshFormat {
    const NAME: &'static str = "MeshFormat";

    fn write_body<W: Write>(&self, writer: &mut W) -> Result<(), Error> {
        writeln!(writer, "{} {} {}", FORMAT_VERSION, FILE_TYPE, DATA_SIZE)?;
        Ok(())
    }
}

/// `<dim> <id> "<name>"` per group
#[derive(Debug, Clone, Copy)]
pub struct PhysicalNames<'a>(pub &'a [PhysicalGroup]);

impl Section for PhysicalNames<'_> {
    const NAME: &'static str = "PhysicalNames";

    fn record_count(&self) -> Option<usize> {
        Some(self.0.len())
    }

    fn write_body<W: Write>(&self, writer: &mut W) -> Result<(), Error> {
        for group in self.0 {
            writeln!(writer, "{} {} \"{}\"", group.dimension, group.id, group.name)?;
        }
        Ok(())
    }
}

/// `<id> <x> <y> <z>` per node, ids from 1
#[derive(Debug, Clone, Copy)]
pub struct Nodes<'a>(pub &'a [Point]);

impl Section for Nodes<'_> {
    const NAME: &'static str = "Nodes";

    fn record_count(&self) -> Option<usize> {
        Some(self.0.len())
    }

    fn write_body<W: Write>(&self, writer: &mut W) -> Result<(), Error> {
        for (idx, point) in self.0.iter().enumerate() {
            writeln!(
                writer,
                "{} {} {} {}",
                idx + 1,
                float_to_str(point.x),
                float_to_str(point.y),
                float_to_str(point.z)
            )?;
        }
        Ok(())
    }
}

/// `<id> <type> <num-tags> <physical> <elementary> <node ids...>` per element
#[derive(Debug, Clone, Copy)]
pub struct Elements<'a>(pub &'a [Element]);

impl Section for Elements<'_> {
    const NAME: &'static str = "Elements";

    fn record_count(&self) -> Option<usize> {
        Some(self.0.len())
    }

    fn write_body<W: Write>(&self, writer: &mut W) -> Result<(), Error> {
        for element in self.0 {
            write!(
                writer,
                "{} {} {} {} {}",
                element.id,
                element.connectivity.type_code(),
                NUM_TAGS,
                element.physical,
                element.elementary
            )?;

            for node in element.nodes() {
                write!(writer, " {}", node)?;
            }

            writeln!(writer)?;
        }
        Ok(())
    }
}
