//! `eca` — Runs a one-dimensional elementary automaton and prints each generation.
//!
//! **Usage:**
//! ```text
//! eca [--width <N>]... [--generations <G>] [--rule <name>] [--threads <T>] [--numbered] [--verbose]
//! ```
//!
//! With a single width the row is stepped and printed line by line. With
//! several widths each run is evolved on its own worker and the histories are
//! printed in the order the widths were given.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use elementary_automata::automaton::{run_batch, BatchJob};
use elementary_automata::{Rule, State};

/// Print successive generations of a 1D cellular automaton.
#[derive(Parser)]
#[command(name = "eca", about = "Print successive generations of a 1D cellular automaton")]
struct Args {
    /// Number of cells in the row. Repeat to run several rows.
    #[arg(long = "width", default_value = "50")]
    widths: Vec<usize>,

    /// Number of generations to step after the seed row.
    #[arg(long, default_value_t = 50)]
    generations: u64,

    /// Transition rule: rule184 (three-cell parity) or rule2neighbor.
    #[arg(long, default_value = "rule184")]
    rule: Rule,

    /// Worker threads used when several widths are given.
    #[arg(long, default_value_t = 1)]
    threads: u8,

    /// Prefix each line with its generation number.
    #[arg(long)]
    numbered: bool,

    /// Print a per-run summary to stderr.
    #[arg(long)]
    verbose: bool,
}

fn write_line(
    out: &mut impl Write,
    numbered: bool,
    generation: u64,
    line: &str,
) -> io::Result<()> {
    if numbered {
        writeln!(out, "{:>5} |{}|", generation, line)
    } else {
        writeln!(out, "{}", line)
    }
}

fn run_single(args: &Args, width: usize, rule: Rule, out: &mut impl Write) -> Result<()> {
    let mut state =
        State::new(width).with_context(|| format!("cannot build a row of width {}", width))?;

    write_line(out, args.numbered, state.generation(), &state.render())?;
    for _ in 0..args.generations {
        state.step(rule);
        write_line(out, args.numbered, state.generation(), &state.render())?;
    }

    if args.verbose {
        eprintln!(
            "width {} rule {} generations {} live {}",
            width,
            rule,
            state.generation(),
            state.live_count()
        );
    }
    Ok(())
}

fn run_many(args: &Args, rule: Rule, out: &mut impl Write) -> Result<()> {
    let jobs: Vec<BatchJob> = args
        .widths
        .iter()
        .map(|&width| BatchJob {
            width,
            generations: args.generations,
            rule,
        })
        .collect();

    let outcomes = run_batch(&jobs, args.threads).context("batch run failed")?;

    for (i, outcome) in outcomes.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "# width {} rule {}", outcome.job.width, outcome.job.rule)?;
        for (generation, line) in outcome.lines.iter().enumerate() {
            write_line(out, args.numbered, generation as u64, line)?;
        }

        if args.verbose {
            eprintln!(
                "width {} rule {} generations {} live {}",
                outcome.job.width,
                outcome.job.rule,
                outcome.job.generations,
                outcome.final_live_count
            );
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let rule = args.rule;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match args.widths.as_slice() {
        [width] => run_single(&args, *width, rule, &mut out)?,
        _ => run_many(&args, rule, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
