use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payauth::processor::PaymentProcessor;
use payauth::reader::RequestReader;
use payauth::writer::ResultWriter;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payment requests CSV file
    input: PathBuf,

    /// Emit results as JSON lines instead of CSV
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let processor = PaymentProcessor::new();

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = RequestReader::new(file);

    // Unreadable rows are reported and skipped; everything that parses
    // goes through the batch pipeline with per-item fault isolation.
    let mut requests = Vec::new();
    for request_result in reader.requests() {
        match request_result {
            Ok(request) => requests.push(request),
            Err(e) => log::warn!("Error reading request: {e}"),
        }
    }

    let results = processor.bulk_process(&requests);

    let stdout = io::stdout();
    if cli.json {
        let mut out = stdout.lock();
        for result in &results {
            let line = serde_json::to_string(result).into_diagnostic()?;
            writeln!(out, "{line}").into_diagnostic()?;
        }
    } else {
        let mut writer = ResultWriter::new(stdout.lock());
        writer.write_results(results).into_diagnostic()?;
    }

    Ok(())
}
