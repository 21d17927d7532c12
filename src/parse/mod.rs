//! Reading msh 2.2 ascii files
//!
//! The reader understands the subset of the format that this crate writes:
//! `$MeshFormat`, `$PhysicalNames`, `$Nodes` and `$Elements` sections with
//! 2-node line (type 1) and 4-node quadrilateral (type 3) elements. Other
//! sections are skipped. Node ids must run from 1 without gaps.
//!
//! ```no_run
//! let file = rectmsh::read_msh_file("rect_2x2.msh").unwrap();
//! assert_eq!(file.nodes.len(), 9);
//! ```

mod error;

pub use error::{
    CountMismatch, MalformedLine, MissingSection, UnexpectedEof, UnsupportedElement,
    UnsupportedVersion,
};
pub use error::ParseError;

use crate::mesh::PhysicalGroup;
use crate::prelude::*;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

/// upper bound on records reserved up front; the count line is untrusted
const PREALLOC_LIMIT: usize = 1 << 16;

/// Contents of a parsed msh file
#[derive(Debug, Clone, PartialEq)]
pub struct MshFile {
    /// version string from `$MeshFormat`, e.g. `"2.2"`
    pub version: String,
    pub groups: Vec<PhysicalGroup>,
    pub nodes: Vec<Point>,
    pub elements: Vec<Element>,
}

/// read a msh file from disk
pub fn read_msh_file<P: AsRef<Path>>(path: P) -> Result<MshFile, ParseError> {
    let file = File::open(path)?;
    read_msh(BufReader::new(file))
}

/// read a msh document from any buffered reader
pub fn read_msh<R: BufRead>(reader: R) -> Result<MshFile, ParseError> {
    let mut lines = NumberedLines::new(reader);

    let mut version = None;
    let mut groups = Vec::new();
    let mut nodes = None;
    let mut elements = None;

    while let Some((number, line)) = lines.next_line()? {
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        match line {
            "$MeshFormat" => version = Some(parse_mesh_format(&mut lines)?),
            "$PhysicalNames" => groups = parse_physical_names(&mut lines)?,
            "$Nodes" => nodes = Some(parse_nodes(&mut lines)?),
            "$Elements" => elements = Some(parse_elements(&mut lines)?),
            other if other.starts_with('$') => skip_section(&mut lines, &other[1..])?,
            other => {
                return Err(MalformedLine::new(
                    number,
                    "top level",
                    other.to_string(),
                    "text outside of any section".to_string(),
                )
                .into())
            }
        }
    }

    let version = version.ok_or(MissingSection::new("MeshFormat"))?;
    let nodes = nodes.ok_or(MissingSection::new("Nodes"))?;
    let elements = elements.ok_or(MissingSection::new("Elements"))?;

    Ok(MshFile {
        version,
        groups,
        nodes,
        elements,
    })
}

/// line reader that remembers 1-based line numbers for error messages
struct NumberedLines<R> {
    lines: std::io::Lines<R>,
    number: usize,
}

impl<R: BufRead> NumberedLines<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            number: 0,
        }
    }

    fn next_line(&mut self) -> Result<Option<(usize, String)>, ParseError> {
        match self.lines.next() {
            Some(line) => {
                self.number += 1;
                Ok(Some((self.number, line?)))
            }
            None => Ok(None),
        }
    }

    /// next line inside `section`; running out of input is an error
    fn section_line(&mut self, section: &'static str) -> Result<(usize, String), ParseError> {
        self.next_line()?
            .ok_or_else(|| UnexpectedEof::new(section).into())
    }

    fn expect_end(&mut self, section: &'static str) -> Result<(), ParseError> {
        let (number, line) = self.section_line(section)?;
        let line = line.trim();

        if line.strip_prefix("$End") == Some(section) {
            Ok(())
        } else {
            Err(MalformedLine::new(
                number,
                section,
                line.to_string(),
                format!("expected $End{}", section),
            )
            .into())
        }
    }

    /// the count line that opens `$PhysicalNames`, `$Nodes` and `$Elements`
    fn record_count(&mut self, section: &'static str) -> Result<usize, ParseError> {
        let (number, line) = self.section_line(section)?;
        parse_field(line.trim(), number, section, &line)
    }

    /// a record line; a marker line here means the count line lied
    fn record(
        &mut self,
        section: &'static str,
        expected: usize,
        actual: usize,
    ) -> Result<(usize, String), ParseError> {
        let (number, line) = self.section_line(section)?;

        if line.trim_start().starts_with('$') {
            return Err(CountMismatch::new(section, expected, actual).into());
        }

        Ok((number, line))
    }
}

fn parse_field<T: FromStr>(
    field: &str,
    number: usize,
    section: &'static str,
    line: &str,
) -> Result<T, ParseError> {
    field.parse().map_err(|_| {
        MalformedLine::new(
            number,
            section,
            line.to_string(),
            format!("could not parse `{}`", field),
        )
        .into()
    })
}

fn parse_mesh_format<R: BufRead>(lines: &mut NumberedLines<R>) -> Result<String, ParseError> {
    const SECTION: &str = "MeshFormat";

    let (number, line) = lines.section_line(SECTION)?;
    let fields: Vec<&str> = line.split_whitespace().collect();

    let version = match fields.as_slice() {
        [version, file_type, _data_size] => {
            if *file_type != "0" {
                return Err(MalformedLine::new(
                    number,
                    SECTION,
                    line.clone(),
                    "only ascii (file type 0) files are supported".to_string(),
                )
                .into());
            }
            version.to_string()
        }
        _ => {
            return Err(MalformedLine::new(
                number,
                SECTION,
                line.clone(),
                "expected `<version> <file-type> <data-size>`".to_string(),
            )
            .into())
        }
    };

    if !version.starts_with("2.") {
        return Err(UnsupportedVersion::new(version).into());
    }

    lines.expect_end(SECTION)?;
    Ok(version)
}

fn parse_physical_names<R: BufRead>(
    lines: &mut NumberedLines<R>,
) -> Result<Vec<PhysicalGroup>, ParseError> {
    const SECTION: &str = "PhysicalNames";

    let count = lines.record_count(SECTION)?;
    let mut groups = Vec::with_capacity(count.min(PREALLOC_LIMIT));

    for read in 0..count {
        let (number, line) = lines.record(SECTION, count, read)?;
        let malformed = |reason: &str| -> ParseError {
            MalformedLine::new(number, SECTION, line.clone(), reason.to_string()).into()
        };

        let mut fields = line.trim().splitn(3, char::is_whitespace);
        let (dimension, id, name) = match (fields.next(), fields.next(), fields.next()) {
            (Some(dimension), Some(id), Some(name)) => (dimension, id, name),
            _ => return Err(malformed("expected `<dim> <id> \"<name>\"`")),
        };

        let name = name
            .trim()
            .strip_prefix('"')
            .and_then(|name| name.strip_suffix('"'))
            .ok_or_else(|| malformed("group name is not quoted"))?;

        groups.push(PhysicalGroup::new(
            parse_field(dimension, number, SECTION, &line)?,
            parse_field(id, number, SECTION, &line)?,
            name.to_string(),
        ));
    }

    lines.expect_end(SECTION)?;
    Ok(groups)
}

fn parse_nodes<R: BufRead>(lines: &mut NumberedLines<R>) -> Result<Vec<Point>, ParseError> {
    const SECTION: &str = "Nodes";

    let count = lines.record_count(SECTION)?;
    let mut nodes = Vec::with_capacity(count.min(PREALLOC_LIMIT));

    for read in 0..count {
        let (number, line) = lines.record(SECTION, count, read)?;
        let fields: Vec<&str> = line.split_whitespace().collect();

        let [id, x, y, z] = fields.as_slice() else {
            return Err(MalformedLine::new(
                number,
                SECTION,
                line.clone(),
                "expected `<id> <x> <y> <z>`".to_string(),
            )
            .into());
        };

        let id: usize = parse_field(id, number, SECTION, &line)?;
        if id != read + 1 {
            return Err(MalformedLine::new(
                number,
                SECTION,
                line.clone(),
                format!("expected node id {}", read + 1),
            )
            .into());
        }

        nodes.push(Point::new(
            parse_field(x, number, SECTION, &line)?,
            parse_field(y, number, SECTION, &line)?,
            parse_field(z, number, SECTION, &line)?,
        ));
    }

    lines.expect_end(SECTION)?;
    Ok(nodes)
}

fn parse_elements<R: BufRead>(lines: &mut NumberedLines<R>) -> Result<Vec<Element>, ParseError> {
    const SECTION: &str = "Elements";

    let count = lines.record_count(SECTION)?;
    let mut elements = Vec::with_capacity(count.min(PREALLOC_LIMIT));

    for read in 0..count {
        let (number, line) = lines.record(SECTION, count, read)?;
        let malformed = |reason: String| -> ParseError {
            MalformedLine::new(number, SECTION, line.clone(), reason).into()
        };

        let fields = line
            .split_whitespace()
            .map(|field| parse_field::<usize>(field, number, SECTION, &line))
            .collect::<Result<Vec<_>, _>>()?;

        if fields.len() < 3 {
            return Err(malformed("expected `<id> <type> <num-tags> ...`".to_string()));
        }

        let (id, type_code, num_tags) = (fields[0], fields[1], fields[2]);
        let num_nodes = match type_code {
            1 => 2,
            3 => 4,
            _ => return Err(UnsupportedElement::new(number, type_code).into()),
        };

        let expected = 3usize
            .checked_add(num_tags)
            .and_then(|n| n.checked_add(num_nodes))
            .ok_or_else(|| malformed(format!("tag count {} is out of range", num_tags)))?;

        if fields.len() != expected {
            return Err(malformed(format!(
                "element type {} with {} tags needs {} fields, found {}",
                type_code,
                num_tags,
                expected,
                fields.len()
            )));
        }

        let tags = &fields[3..3 + num_tags];
        let nodes = &fields[3 + num_tags..];

        let connectivity = match *nodes {
            [a, b] => Connectivity::Line([a, b]),
            [a, b, c, d] => Connectivity::Quad([a, b, c, d]),
            _ => unreachable!("node count checked against the element type"),
        };

        elements.push(Element {
            id,
            physical: tags.first().copied().unwrap_or(0),
            elementary: tags.get(1).copied().unwrap_or(0),
            connectivity,
        });
    }

    lines.expect_end(SECTION)?;
    Ok(elements)
}

/// skip over a section this reader does not interpret
fn skip_section<R: BufRead>(lines: &mut NumberedLines<R>, name: &str) -> Result<(), ParseError> {
    let end = format!("$End{}", name);

    while let Some((_, line)) = lines.next_line()? {
        if line.trim() == end {
            return Ok(());
        }
    }

    Err(UnexpectedEof::new("unknown").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT_QUAD: &str = "$MeshFormat
2.2 0 8
$EndMeshFormat
$PhysicalNames
2
1 2 \"periodic_0_l\"
2 1 \"fluid\"
$EndPhysicalNames
$Nodes
4
1 0.0 0.0 0.0
2 1.0 0.0 0.0
3 0.0 1.0 0.0
4 1.0 1.0 0.0
$EndNodes
$Elements
2
1 1 2 2 1 1 3
2 3 2 1 1 1 2 4 3
$EndElements
";

    #[test]
    fn reads_unit_quad() {
        let file = read_msh(UNIT_QUAD.as_bytes()).unwrap();

        assert_eq!(file.version, "2.2");
        assert_eq!(
            file.groups,
            vec![
                PhysicalGroup::new(1, 2, "periodic_0_l".to_string()),
                PhysicalGroup::new(2, 1, "fluid".to_string()),
            ]
        );
        assert_eq!(file.nodes.len(), 4);
        assert_eq!(file.nodes[3], Point::new(1., 1., 0.));

        assert_eq!(file.elements[0].connectivity, Connectivity::Line([1, 3]));
        assert_eq!(file.elements[0].side(), Some(Side::West));
        assert_eq!(file.elements[1].connectivity, Connectivity::Quad([1, 2, 4, 3]));
        assert_eq!(file.elements[1].physical, 1);
    }

    #[test]
    fn skips_unknown_sections_and_blank_lines() {
        let text = format!("\n$Comments\nanything\n$EndComments\n{}", UNIT_QUAD);
        let file = read_msh(text.as_bytes()).unwrap();
        assert_eq!(file.elements.len(), 2);
    }

    #[test]
    fn rejects_version_four() {
        let text = UNIT_QUAD.replace("2.2 0 8", "4.1 0 8");
        let err = read_msh(text.as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedVersion(_)));
    }

    #[test]
    fn rejects_triangles() {
        let text = UNIT_QUAD.replace("2 3 2 1 1 1 2 4 3", "2 2 2 1 1 1 2 4");
        let err = read_msh(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnsupportedElement(UnsupportedElement { line: 19, type_code: 2 })
        ));
    }

    #[test]
    fn short_element_section() {
        let text = UNIT_QUAD.replace("$Elements\n2\n", "$Elements\n3\n");
        let err = read_msh(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::CountMismatch(CountMismatch {
                expected: 3,
                actual: 2,
                ..
            })
        ));
    }

    #[test]
    fn gap_in_node_ids() {
        let text = UNIT_QUAD.replace("3 0.0 1.0 0.0", "5 0.0 1.0 0.0");
        let err = read_msh(text.as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::MalformedLine(_)));
        assert!(err.to_string().contains("line 13"));
    }

    #[test]
    fn truncated_file() {
        let text = &UNIT_QUAD[..UNIT_QUAD.find("$EndNodes").unwrap()];
        let err = read_msh(text.as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof(_)));
    }

    #[test]
    fn huge_record_count_is_not_preallocated() {
        let text = "$MeshFormat\n2.2 0 8\n$EndMeshFormat\n$Nodes\n1000000000000000000\n1 0.0 0.0 0.0\n$EndNodes\n";
        let err = read_msh(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::CountMismatch(CountMismatch {
                section: "Nodes",
                actual: 1,
                ..
            })
        ));
    }

    #[test]
    fn overflowing_tag_count() {
        let text = UNIT_QUAD.replace("1 1 2 2 1 1 3", "1 1 18446744073709551615 1");
        let err = read_msh(text.as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::MalformedLine(_)));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn tag_count_larger_than_line() {
        let text = UNIT_QUAD.replace("1 1 2 2 1 1 3", "1 1 9 2 1 1 3");
        let err = read_msh(text.as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::MalformedLine(_)));
    }

    #[test]
    fn missing_elements_section() {
        let text = &UNIT_QUAD[..UNIT_QUAD.find("$Elements").unwrap()];
        let err = read_msh(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingSection(MissingSection { section: "Elements" })
        ));
    }
}
