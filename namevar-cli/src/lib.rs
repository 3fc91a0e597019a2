//! namevar CLI (made by FontLab https://www.fontlab.com/)

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, info};

use namevar_core::name::CanonicalName;
use namevar_core::output::{write_json_pretty, write_ndjson, CandidateVerdict, VariantReport};
use namevar_core::variants::VariantSet;

pub mod logging;

/// CLI entrypoint for namevar.
#[derive(Debug, Parser)]
#[command(
    name = "namevar",
    about = "Name-variant matching and enumeration (made by FontLab https://www.fontlab.com/)"
)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check candidates against a name, or list every variant when none are given
    Check(CheckArgs),
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Canonical full name; the last word is the family name
    #[arg(value_hint = ValueHint::Other)]
    name: String,

    /// Candidate spellings to test (`-` reads candidates from STDIN)
    #[arg(value_hint = ValueHint::Other)]
    candidates: Vec<String>,

    /// Read newline-delimited candidates from STDIN
    #[arg(long = "stdin", action = ArgAction::SetTrue)]
    stdin: bool,

    /// Read newline-delimited candidates from a file
    #[arg(short = 'f', long = "candidates-file", value_hint = ValueHint::FilePath)]
    candidates_file: Option<PathBuf>,

    /// Emit a single JSON document
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "ndjson")]
    json: bool,

    /// Emit newline-delimited JSON
    #[arg(long = "ndjson", action = ArgAction::SetTrue)]
    ndjson: bool,

    /// Format verdicts as padded columns
    #[arg(long = "columns", action = ArgAction::SetTrue)]
    columns: bool,

    /// Control colorized output (auto|always|never)
    #[arg(long = "color", default_value_t = ColorChoice::Auto, value_enum)]
    color: ColorChoice,

    /// Worker threads for checking candidates (defaults to all cores)
    #[arg(short = 'j', long = "jobs")]
    jobs: Option<usize>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum OutputFormat {
    Plain,
    Columns,
    Json,
    Ndjson,
}

/// Parse CLI args and execute the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    match cli.command {
        Command::Check(args) => run_check(args),
    }
}

fn run_check(args: CheckArgs) -> Result<()> {
    let name = CanonicalName::parse(&args.name)?;

    let stdin = io::stdin();
    let candidates = gather_candidates(
        &args.candidates,
        args.stdin,
        args.candidates_file.as_deref(),
        stdin.lock(),
    )?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let use_color = match args.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => handle.is_terminal(),
    };
    let format = output_format(&args);

    if candidates.is_empty() {
        let variants = name.variants();
        info!(name = %name, variants = variants.len(), "listing variants");
        write_variants(&name, &variants, format, &mut handle, use_color)
    } else {
        let verdicts = check_candidates(&name, candidates, args.jobs)?;
        let matched = verdicts.iter().filter(|v| v.matched).count();
        info!(
            name = %name,
            candidates = verdicts.len(),
            matched,
            "checked candidates"
        );
        write_verdicts(&verdicts, format, &mut handle, use_color)
    }
}

fn output_format(args: &CheckArgs) -> OutputFormat {
    if args.ndjson {
        OutputFormat::Ndjson
    } else if args.json {
        OutputFormat::Json
    } else if args.columns {
        OutputFormat::Columns
    } else {
        OutputFormat::Plain
    }
}

fn check_candidates(
    name: &CanonicalName,
    candidates: Vec<String>,
    jobs: Option<usize>,
) -> Result<Vec<CandidateVerdict>> {
    let run_checks = || -> Vec<CandidateVerdict> {
        candidates
            .into_par_iter()
            .map(|candidate| {
                let matched = name.accepts(&candidate);
                CandidateVerdict { candidate, matched }
            })
            .collect()
    };

    if let Some(jobs) = jobs {
        debug!(jobs, "using dedicated thread pool");
        let pool = ThreadPoolBuilder::new().num_threads(jobs).build()?;
        Ok(pool.install(run_checks))
    } else {
        Ok(run_checks())
    }
}

fn gather_candidates(
    raw: &[String],
    read_stdin: bool,
    file: Option<&Path>,
    mut stdin: impl BufRead,
) -> Result<Vec<String>> {
    let mut candidates = Vec::new();

    if read_stdin {
        candidates.extend(read_candidates_from(&mut stdin).context("reading STDIN")?);
    }

    if let Some(path) = file {
        let handle = File::open(path)
            .with_context(|| format!("opening candidates file {}", path.display()))?;
        let mut reader = BufReader::new(handle);
        candidates.extend(
            read_candidates_from(&mut reader)
                .with_context(|| format!("reading candidates file {}", path.display()))?,
        );
    }

    for candidate in raw {
        if candidate == "-" {
            candidates.extend(read_candidates_from(&mut stdin).context("reading STDIN")?);
        } else {
            candidates.push(candidate.trim().to_string());
        }
    }

    debug!(count = candidates.len(), "gathered candidates");
    Ok(candidates)
}

fn read_candidates_from(reader: &mut impl BufRead) -> Result<Vec<String>> {
    let mut buf = String::new();
    let mut candidates = Vec::new();

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }

        let trimmed = buf.trim();
        if !trimmed.is_empty() {
            candidates.push(trimmed.to_string());
        }
    }

    Ok(candidates)
}

fn write_variants(
    name: &CanonicalName,
    variants: &VariantSet,
    format: OutputFormat,
    mut w: impl Write,
    color: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let report = VariantReport {
                name: name.to_string(),
                variants: variants.clone(),
            };
            write_json_pretty(&report, w)
        }
        OutputFormat::Ndjson => write_ndjson(variants, w),
        OutputFormat::Plain | OutputFormat::Columns => {
            for variant in variants {
                writeln!(w, "{}", apply_color(variant, color, AnsiColor::Cyan))?;
            }
            Ok(())
        }
    }
}

fn write_verdicts(
    verdicts: &[CandidateVerdict],
    format: OutputFormat,
    w: impl Write,
    color: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json_pretty(verdicts, w),
        OutputFormat::Ndjson => write_ndjson(verdicts, w),
        OutputFormat::Columns => write_columns(verdicts, w, color),
        OutputFormat::Plain => write_plain(verdicts, w, color),
    }
}

fn write_plain(verdicts: &[CandidateVerdict], mut w: impl Write, color: bool) -> Result<()> {
    for item in verdicts {
        writeln!(w, "{}\t{}", item.candidate, render_verdict(item.matched, color))?;
    }
    Ok(())
}

fn write_columns(verdicts: &[CandidateVerdict], mut w: impl Write, color: bool) -> Result<()> {
    let width = verdicts
        .iter()
        .map(|v| v.candidate.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(0, 80);

    for item in verdicts {
        let padded = format!("{:<width$}", item.candidate);
        let rendered = apply_color(&padded, color, AnsiColor::Yellow);
        writeln!(w, "{rendered}  {}", render_verdict(item.matched, color))?;
    }

    Ok(())
}

#[derive(Copy, Clone)]
enum AnsiColor {
    Cyan,
    Yellow,
    Green,
    Red,
}

fn apply_color(text: &str, color: bool, code: AnsiColor) -> String {
    if !color {
        return text.to_string();
    }

    let code_str = match code {
        AnsiColor::Cyan => "36",
        AnsiColor::Yellow => "33",
        AnsiColor::Green => "32",
        AnsiColor::Red => "31",
    };

    format!("\u{1b}[{}m{}\u{1b}[0m", code_str, text)
}

fn render_verdict(matched: bool, color: bool) -> String {
    if matched {
        apply_color("true", color, AnsiColor::Green)
    } else {
        apply_color("false", color, AnsiColor::Red)
    }
}

#[cfg(test)]
mod tests;
