use crate::prelude::*;

#[derive(Debug, thiserror::Error, From)]
pub enum ParseError {
    #[error("An io error occured while reading msh data: {0}")]
    Io(std::io::Error),
    #[error("{0}")]
    MalformedLine(MalformedLine),
    #[error("{0}")]
    UnsupportedVersion(UnsupportedVersion),
    #[error("{0}")]
    UnsupportedElement(UnsupportedElement),
    #[error("{0}")]
    UnexpectedEof(UnexpectedEof),
    #[error("{0}")]
    MissingSection(MissingSection),
    #[error("{0}")]
    CountMismatch(CountMismatch),
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "malformed line {} in ${} section: {} (`{}`)", line, section, reason, content)]
pub struct MalformedLine {
    pub(crate) line: usize,
    pub(crate) section: &'static str,
    pub(crate) content: String,
    pub(crate) reason: String,
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "unsupported msh format version `{}`, only 2.x ascii files can be read", version)]
pub struct UnsupportedVersion {
    pub(crate) version: String,
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "unsupported element type {} on line {}", type_code, line)]
pub struct UnsupportedElement {
    pub(crate) line: usize,
    pub(crate) type_code: usize,
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "file ended inside the ${} section", section)]
pub struct UnexpectedEof {
    pub(crate) section: &'static str,
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "missing required ${} section", section)]
pub struct MissingSection {
    pub(crate) section: &'static str,
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "${} section announced {} records but {} were found", section, expected, actual)]
pub struct CountMismatch {
    pub(crate) section: &'static str,
    pub(crate) expected: usize,
    pub(crate) actual: usize,
}
