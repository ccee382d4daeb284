use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use inversion_counter::{
    count::is_sorted,
    reader::read_integers,
    report::Report,
    writer::{ReportFormat, ReportWriter},
    Strategy,
};

/// Count the inversions in a file of integers, one per line
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// File to read the integers from
    #[arg(default_value = "IntegerArray.txt")]
    input: PathBuf,
    #[arg(long, value_enum, default_value_t = Strategy::Recursive)]
    strategy: Strategy,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
    /// Check that the sorted output really is sorted
    #[arg(long)]
    verify: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let values = read_integers(&args.input)?;
    log::info!(
        "Read {} integers from {}",
        values.len(),
        args.input.display()
    );

    let (sorted, inversions) = args.strategy.sort_and_count(&values);
    log::info!("{:?} strategy found {inversions} inversions", args.strategy);

    if args.verify {
        if sorted.len() != values.len() || !is_sorted(&sorted) {
            bail!("sorted output failed verification");
        }
        log::info!("Sorted output verified");
    }

    let format = if args.json {
        ReportFormat::Json
    } else {
        ReportFormat::Text
    };
    let mut writer = ReportWriter::new(std::io::stdout().lock(), format);
    writer.send(&Report {
        inversions,
        len: values.len(),
    })?;
    Ok(())
}
