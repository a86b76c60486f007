//! Dissects a hex dump and prints the resulting tree.
//!
//! ```text
//! cargo run --example dissect -- docsis "08 03 00 00 0C 0A 01 05"
//! RUST_LOG=tlvdf=trace cargo run --example dissect -- xiri 300c8103040002a205a203810102
//! ```

use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tlvdf::docsis::DocsisVsif;
use tlvdf::lix2::{Iri, Xiri};
use tlvdf::{ByteView, DissectorOptions, FieldRegistry, Protocol, RecordingTree};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Proto {
    /// DOCSIS vendor specific encodings
    Docsis,
    /// 3GPP X2 xIRI payload
    Xiri,
    /// 3GPP HI2 IRI payload
    Iri,
}

#[derive(Parser, Debug)]
#[command(about = "Dissect a hex encoded buffer", long_about = None)]
struct Cli {
    #[arg(value_enum)]
    protocol: Proto,

    /// Bytes to dissect. Whitespace and colons are ignored.
    hex: String,

    /// Dissector options as JSON, e.g. '{"max_depth": 8}'
    #[arg(long)]
    options: Option<String>,

    /// Overrides max_depth from --options
    #[arg(long)]
    max_depth: Option<usize>,

    /// Print the registered fields instead of dissecting
    #[arg(long)]
    fields: bool,
}

fn run<P: Protocol>(cli: &Cli, data: &[u8], opts: &DissectorOptions) {
    if cli.fields {
        let registry = FieldRegistry::for_protocol::<P>();
        for (idx, field) in registry.iter().enumerate() {
            println!("{idx:4} {:<60} {}", field.abbrev, field.name);
        }
        return;
    }

    let tree: RecordingTree = tlvdf::dissect::<P>(ByteView::new(data), opts);
    print!("{}", tree.render());
    let count = tree.diagnostics().count();
    if count > 0 {
        eprintln!("{count} problem(s) found");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut opts: DissectorOptions = match &cli.options {
        Some(json) => serde_json::from_str(json)?,
        None => DissectorOptions::default(),
    };
    if let Some(max_depth) = cli.max_depth {
        opts.max_depth = max_depth;
    }

    let cleaned: String = cli
        .hex
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    let data = hex::decode(cleaned)?;

    match cli.protocol {
        Proto::Docsis => run::<DocsisVsif>(&cli, &data, &opts),
        Proto::Xiri => run::<Xiri>(&cli, &data, &opts),
        Proto::Iri => run::<Iri>(&cli, &data, &opts),
    }
    Ok(())
}
