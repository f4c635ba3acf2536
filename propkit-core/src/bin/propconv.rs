//! Property Conversion Tool
//!
//! Runs the propkit pipeline over a file or stdin and prints the result.
//!
//! ## Usage
//!
//! ```bash
//! # Show the candidate blocks of a selection
//! propconv split selection.cs
//!
//! # Show what each block was recognized as
//! propconv classify selection.cs
//!
//! # Convert every block to a target form
//! propconv auto selection.cs
//! propconv full --body-indent 2 < selection.cs
//! propconv observable --keep-initial --dedupe selection.cs
//!
//! # Rewrite command constructions
//! propconv commands view_model.cs
//!
//! # Measure classification throughput
//! propconv bench selection.cs
//! ```
//!
//! When nothing could be converted a warning goes to stderr and the exit
//! status is 1. Set `RUST_LOG=debug` to see which rule matched each block.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use propkit_core::{rewrite_commands, Converter};
use propkit_types::{ConvertConfig, EmissionSkipped, Target};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Print each candidate block
    Split,
    /// Print the descriptor of each candidate block
    Classify,
    /// Convert to auto-properties
    Auto,
    /// Convert to full properties with backing fields
    Full,
    /// Convert to [ObservableProperty] fields
    Observable,
    /// Rewrite command constructions
    Commands,
    /// Measure classification throughput
    Bench,
}

#[derive(Debug, Parser)]
#[command(name = "propconv", version, about = "Recognize and rewrite property declarations")]
struct Args {
    /// What to do with the input
    #[arg(value_enum)]
    mode: Mode,

    /// Input file; reads stdin when omitted
    path: Option<PathBuf>,

    /// Keep only the first occurrence of each dependent property
    #[arg(long)]
    dedupe: bool,

    /// Carry field initializers into the converted output
    #[arg(long)]
    keep_initial: bool,

    /// Spaces before accessor lines of emitted full properties
    #[arg(long, default_value_t = 4)]
    body_indent: u8,
}

impl Args {
    fn config(&self) -> ConvertConfig {
        ConvertConfig {
            dedupe_dependents: self.dedupe,
            keep_initial_values: self.keep_initial,
            body_indent: self.body_indent,
        }
    }
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let input = read_input(args.path.as_ref())?;
    let converter = Converter::new(args.config());

    let outcome = match args.mode {
        Mode::Split => {
            for (i, block) in converter.split(&input).enumerate() {
                println!("--- block {} ---\n{}", i, block);
            }
            Ok(())
        }
        Mode::Classify => {
            for (i, block) in converter.split(&input).enumerate() {
                println!("{:>3}: {}", i, converter.classify(block));
            }
            Ok(())
        }
        Mode::Auto => convert(&converter, Target::Auto, &input),
        Mode::Full => convert(&converter, Target::Full, &input),
        Mode::Observable => convert(&converter, Target::Observable, &input),
        Mode::Commands => rewrite_commands(&input).map(|out| println!("{}", out)),
        Mode::Bench => {
            bench_classify(&converter, &input);
            Ok(())
        }
    };

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(skipped) => {
            warn!(%skipped, "conversion skipped");
            eprintln!("propconv: {}", skipped);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn convert(converter: &Converter, target: Target, input: &str) -> Result<(), EmissionSkipped> {
    let out = converter.emit_batch(target, input)?;
    println!("{}", out);
    Ok(())
}

fn bench_classify(converter: &Converter, input: &str) {
    println!("Input size: {}", fmt_bytes(input.len() as u64));
    println!("=== Classify ===");

    warmup(|| {
        let mut sink = 0u64;
        for block in converter.split(input) {
            sink += converter.classify(block).is_match() as u64;
        }
        std::hint::black_box(sink);
    });

    let mut blocks = 0u64;
    let elapsed = measure(|| {
        let mut local = 0u64;
        for block in converter.split(input) {
            std::hint::black_box(converter.classify(block));
            local += 1;
        }
        blocks = local;
    });

    print_perf("Classify", input.len(), elapsed, blocks);
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, blocks: u64) {
    let secs = elapsed.as_secs_f64().max(f64::MIN_POSITIVE);
    let mib = input_bytes as f64 / (1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.6} s", secs);
    println!("Throughput  : {:.3} MiB/s", mib / secs);

    if blocks > 0 {
        println!("Blocks      : {}", fmt_count(blocks));
        println!("Blocks/sec  : {}", fmt_count((blocks as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
