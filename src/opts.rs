//! Option structs for CLI parsing.

use std::path::PathBuf;

use gumdrop::Options;
use hyperoctahedral::render::OutputFormat;

#[derive(Debug, Options)]
pub enum Opts {
    #[options(help = "print a character table, e.g. `table S5` or `table H3`")]
    Table(TableOpts),
    #[options(help = "generate a table and check that its rows are orthogonal")]
    Check(CheckOpts),
    #[options(help = "list the irreducible characters with their diagrams")]
    Show(ShowOpts),
    #[options(help = "render a JSON table as a PNG image")]
    Draw(DrawOpts),
}

#[derive(Debug, Options)]
pub struct TableOpts {
    #[options(help = "print help message")]
    pub help: bool,

    #[options(free)]
    pub request: String,

    #[options(help = "output format: braces (default) or json")]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Options)]
pub struct CheckOpts {
    #[options(help = "print help message")]
    pub help: bool,

    #[options(free)]
    pub request: String,
}

#[derive(Debug, Options)]
pub struct ShowOpts {
    #[options(help = "print help message")]
    pub help: bool,

    #[options(free)]
    pub request: String,
}

#[derive(Debug, Options)]
pub struct DrawOpts {
    #[options(help = "print help message")]
    pub help: bool,

    #[options(free)]
    pub in_path: PathBuf,

    #[options(free)]
    pub out_path: PathBuf,
}
