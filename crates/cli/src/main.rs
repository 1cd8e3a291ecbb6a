use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::io::{BufWriter, Write};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;
use triples::{
    generate_triples, render_listing, Candidates, NumberFormat, Params, Triple, TripleRecord,
};

const USAGE: &str = "usage: angled-lego [maxX stepX maxY stepY [threshold]]";

#[derive(Parser)]
#[command(name = "angled-lego", version = triples::VERSION)]
#[command(about = "List near-Pythagorean triples sorted by angle")]
struct Cmd {
    /// Raise log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Latex)]
    format: Format,

    /// maxX stepX maxY stepY [threshold]; every token is read as a real number
    #[arg(value_name = "VALUES", allow_hyphen_values = true, trailing_var_arg = true)]
    values: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One LaTeX-friendly line per triple, then a count line
    Latex,
    /// A single JSON document with params, triples and count
    Json,
}

#[derive(Serialize)]
struct Report {
    params: Params,
    triples: Vec<TripleRecord>,
    count: usize,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let params = Params::from_args(cmd.values.as_slice()).context(USAGE)?;
    tracing::info!(
        max_x = params.max_x,
        step_x = params.step_x,
        max_y = params.max_y,
        step_y = params.step_y,
        threshold = params.threshold,
        "params"
    );

    let triples = generate_triples(&params);
    tracing::debug!(
        candidates = Candidates::new(&params).count(),
        accepted = triples.len(),
        "filtered"
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cmd.format {
        Format::Latex => write_latex(&mut out, &triples)?,
        Format::Json => write_json(&mut out, params, &triples)?,
    }
    out.flush().context("flushing stdout")?;
    Ok(())
}

fn write_latex<W: Write>(out: &mut W, triples: &[Triple]) -> Result<()> {
    for line in render_listing(triples, &NumberFormat::default()) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, params: Params, triples: &[Triple]) -> Result<()> {
    let report = Report {
        params,
        triples: triples.iter().map(Triple::record).collect(),
        count: triples.len(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
