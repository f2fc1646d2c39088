//! rdm-csl - project repository record JSON into CSL-JSON
//!
//! Reads a record, an array of records, or a search result from a file (or
//! stdin) and prints CSL-JSON to stdout. Resource types and funders are read
//! from JSON vocabulary dumps.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rdm_csl::{
    parse_records, serialize_record, serialize_records, CslConfig, CslProjector, InMemoryFunders,
    InMemoryVocabulary,
};

#[derive(Parser)]
#[command(
    name = "rdm-csl",
    version,
    about = "Convert repository records to CSL-JSON"
)]
struct Cli {
    /// Record JSON file (single record, array, or search result). Reads stdin if omitted.
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Resource-type vocabulary: JSON array of {"id", "props": {"csl"}} entries.
    #[arg(long, value_name = "PATH")]
    vocabulary: PathBuf,

    /// Funders vocabulary: JSON array of {"id", "name", "identifiers"} entries.
    #[arg(long, value_name = "PATH")]
    funders: Option<PathBuf>,

    /// Config file (default: <config dir>/rdm-csl/config.toml if present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Always print a JSON array, even for a single record.
    #[arg(long)]
    array: bool,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup logging (stderr, RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = CslConfig::load_or_default(cli.config.as_deref())?;
    let vocabulary = InMemoryVocabulary::from_json(&read_file(&cli.vocabulary)?)?;
    let funders = match &cli.funders {
        Some(path) => InMemoryFunders::from_json(&read_file(path)?)?,
        None => InMemoryFunders::default(),
    };
    tracing::info!(
        resource_types = vocabulary.len(),
        funders = funders.len(),
        "Loaded vocabularies"
    );

    let input = match &cli.input {
        Some(path) => read_file(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let records = parse_records(&input)?;
    tracing::info!(records = records.len(), "Projecting records");

    let projector = CslProjector::new(config, &vocabulary, &funders);
    let output = match records.as_slice() {
        [record] if !cli.array => serialize_record(&projector, record, cli.pretty)?,
        _ => serialize_records(&projector, &records, cli.pretty)?,
    };
    println!("{}", output);

    Ok(())
}

fn read_file(path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
    })
}
