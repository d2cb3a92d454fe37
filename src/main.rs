//! tx-illustration CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;

use tx_illustration::labels::truncate_middle;
use tx_illustration::renderers::Format;
use tx_illustration::resolve::{MemorySource, resolve_transaction};
use tx_illustration::{
    RenderConfig, TransactionData, TransactionIllustrationConfig, create_transaction_illustration,
};

/// Draw a CKB transaction's inputs and outputs as mirrored trees.
#[derive(Parser, Debug)]
#[command(
    name = "tx-illustration",
    version = env!("TX_ILLUSTRATION_VERSION"),
    about = "Draw a CKB transaction's inputs and outputs as mirrored trees"
)]
struct Cli {
    /// Transaction JSON ({inputs, outputs, txHash}); reads stdin if not provided
    input: Option<String>,

    /// Output format (svg, json)
    #[arg(short = 'f', long = "format", default_value = "svg")]
    format: Format,

    /// Canvas width
    #[arg(short = 'w', long = "width", default_value_t = 960.0)]
    width: f64,

    /// Shorten hashes and lock args in labels
    #[arg(long = "truncate")]
    truncate: bool,

    /// Draw the inputs on both sides instead of the real outputs
    #[arg(long = "mirror-inputs")]
    mirror_inputs: bool,

    /// JSON array of raw transactions to resolve --tx-hash from
    #[arg(long = "store", requires = "tx_hash")]
    store: Option<String>,

    /// Transaction to resolve from --store
    #[arg(long = "tx-hash", requires = "store")]
    tx_hash: Option<String>,

    /// Skip inputs that cannot be resolved instead of failing
    #[arg(long = "partial", requires = "store")]
    partial: bool,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn read_source(path: Option<&str>) -> String {
    match path {
        Some(path) => fs::read_to_string(path)
            .unwrap_or_else(|e| fail(format!("cannot read '{}': {}", path, e))),
        None => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                fail(format!("cannot read stdin: {}", e));
            }
            buf
        }
    }
}

fn load_data(cli: &Cli) -> TransactionData {
    let (Some(store), Some(tx_hash)) = (&cli.store, &cli.tx_hash) else {
        let text = read_source(cli.input.as_deref());
        return TransactionData::from_json(&text).unwrap_or_else(|e| fail(e));
    };

    let source = MemorySource::from_json(&read_source(Some(store))).unwrap_or_else(|e| fail(e));
    log::info!("loaded {} transaction(s) from {}", source.len(), store);
    let resolved = futures::executor::block_on(resolve_transaction(&source, tx_hash))
        .unwrap_or_else(|e| fail(e));

    if cli.partial {
        let (data, failures) = resolved.into_partial();
        if !failures.is_empty() {
            log::warn!("{} input(s) left out of the diagram", failures.len());
        }
        data
    } else {
        resolved.into_complete().unwrap_or_else(|e| {
            if let tx_illustration::ResolveError::UnresolvedInputs { failures, .. } = &e {
                for failure in failures {
                    eprintln!("  {}", failure);
                }
            }
            fail(e)
        })
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let data = load_data(&cli);
    let render = RenderConfig {
        width: cli.width,
        mirror_inputs: cli.mirror_inputs,
        ..RenderConfig::default()
    };
    let mut config = TransactionIllustrationConfig::new(data).with_render_config(render);
    if cli.truncate {
        config = config
            .with_transaction_label(|hash| truncate_middle(hash, 6, 6))
            .with_cell_label(|cell| truncate_middle(&cell.lock.args, 6, 4));
    }

    let scene = create_transaction_illustration(&config).unwrap_or_else(|e| fail(e));
    let rendered = cli
        .format
        .renderer()
        .render(&scene)
        .unwrap_or_else(|e| fail(e));

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            fail(format!("cannot write '{}': {}", path, e));
        }
    } else {
        println!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            fail(format!("cannot flush stdout: {}", e));
        }
    }
}
