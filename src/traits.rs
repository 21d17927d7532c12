//! # Traits
//!
//! A msh 2.2 document is a sequence of sections, each delimited by a pair of
//! `$Name` / `$EndName` marker lines. Any type implementing [`Section`] can be
//! written into a document with [`write_section`](crate::write_section).
//!

use crate::Error;
use std::io::Write;

/// describes how to write one section of a msh file
///
/// Implementors only write the body of the section. The opening and closing
/// marker lines are derived from [`Section::NAME`]:
///
/// ```ignore
/// struct Comment(String);
///
/// impl rectmsh::Section for Comment {
///     const NAME: &'static str = "Comments";
///
///     fn write_body<W: Write>(&self, writer: &mut W) -> Result<(), rectmsh::Error> {
///         writeln!(writer, "{}", self.0)?;
///         Ok(())
///     }
/// }
/// ```
///
/// will be written as
///
/// ```ignore
/// $Comments
/// some text
/// $EndComments
/// ```
pub trait Section {
    /// section name without the leading `$`
    const NAME: &'static str;

    /// Write every line between the marker lines. Each line must be
    /// terminated by `\n`.
    fn write_body<W: Write>(&self, writer: &mut W) -> Result<(), Error>;

    /// number of records announced on the first body line, if the section
    /// has one
    fn record_count(&self) -> Option<usize> {
        None
    }
}
