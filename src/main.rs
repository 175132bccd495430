use std::{
    fs::File,
    io::{self, BufReader, Write},
    process,
};

use gumdrop::Options;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hyperoctahedral::{
    render::{self, png},
    verify, CharacterTable, Diagram, GroupKind, Result, SignedDiagram, TableRequest,
};

mod opts;

use opts::{CheckOpts, DrawOpts, Opts, ShowOpts, TableOpts};

fn show(request: TableRequest) -> Result<()> {
    let mut out = io::stdout().lock();
    match request.kind {
        GroupKind::Symmetric => {
            for diagram in Diagram::all(request.n) {
                writeln!(out, "\x1b[36m{}\x1b[m", diagram.partition())?;
                writeln!(out, "{diagram}")?;
            }
        }
        GroupKind::Hyperoctahedral => {
            for diagram in SignedDiagram::all(request.n) {
                writeln!(
                    out,
                    "\x1b[36m({},{})\x1b[m",
                    diagram.positive().partition(),
                    diagram.negative().partition()
                )?;
                writeln!(out, "{diagram}")?;
            }
        }
    }
    Ok(())
}

fn run(opts: Opts) -> Result<()> {
    match opts {
        Opts::Table(TableOpts {
            request, format, ..
        }) => {
            let table = CharacterTable::generate(request.parse()?);
            render::write_table(&mut io::stdout().lock(), &table, format.unwrap_or_default())?;
        }
        Opts::Check(CheckOpts { request, .. }) => {
            let request: TableRequest = request.parse()?;
            let table = CharacterTable::generate(request);
            verify::check_orthogonality(&table)?;
            println!("{request}: {} classes, rows orthogonal", table.len());
        }
        Opts::Show(ShowOpts { request, .. }) => {
            show(request.parse()?)?;
        }
        Opts::Draw(DrawOpts {
            in_path, out_path, ..
        }) => {
            let table = render::read_table(BufReader::new(File::open(&in_path)?))?;
            png::render_table(&table.values).save(&out_path)?;
            info!(
                table = %table.request(),
                out = %out_path.display(),
                "rendered table"
            );
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let opts = Opts::parse_args_default_or_exit();

    if let Err(e) = run(opts) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
