//! Output formats for character tables.

pub mod png;

use std::fmt::{self, Display, Formatter};
use std::io::{Read, Write};
use std::str::FromStr;

use crate::character::{CharacterTable, Matrix};
use crate::error::Result;

/// Nested brace literals, one row per line: `{{1,-1},\n{1,1}}`.
pub struct Braces<'a>(pub &'a Matrix);

impl Display for Braces<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f, ",")?;
            }
            write!(f, "{{")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{value}")?;
            }
            write!(f, "}}")?;
        }
        write!(f, "}}")
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Braces,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, String> {
        match s.to_ascii_lowercase().as_str() {
            "braces" => Ok(OutputFormat::Braces),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format {other:?}, expected braces or json")),
        }
    }
}

pub fn write_table<W: Write>(out: &mut W, table: &CharacterTable, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Braces => writeln!(out, "{}", Braces(&table.values))?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, table)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Reads a table previously written with [`OutputFormat::Json`].
pub fn read_table<R: Read>(reader: R) -> Result<CharacterTable> {
    Ok(serde_json::from_reader(reader)?)
}
