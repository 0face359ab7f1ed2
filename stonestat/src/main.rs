//! # stonestat
//!
//! A CLI tool for stone-count statistics over Othello board dumps.
//!
//! ## Overview
//!
//! stonestat is built on top of stonestatlib. Board files hold one board per
//! line written with `O`, `X` and `-`. stonestat reports how many stones the
//! boards carry and compares several files side by side.
//!
//! ## Usage
//!
//! ```bash
//! # Average and distribution of one file (or stdin)
//! stonestat stats boards.txt
//! cat boards.txt | stonestat stats
//!
//! # Also list the boards with exactly 12 stones
//! stonestat stats boards.txt --stones 12
//!
//! # Markdown table comparing files, columns in argument order
//! stonestat table run1.txt run2.txt -o report/stones.md --title "# Runs 1-2"
//!
//! # Summarize a CNF counts file
//! stonestat cnf result/cnf_counts.txt
//!
//! # Any command as JSON
//! stonestat --format json stats boards.txt
//! ```

mod render;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use stonestatlib::{
    load_cnf_points, load_datasets, resolve_inputs, summarize, summarize_path, DistributionReport,
    InputSource, ReportOptions, SummaryOptions, DEFAULT_TITLE,
};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use render::{render_cnf, render_stats, to_json, OutputMode};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("stonestat")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Stone-count statistics and distribution tables for Othello board dumps")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("format")
                .long("format")
                .global(true)
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Log more (repeat for debug and trace)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Only log errors"),
        )
        .subcommand(
            Command::new("stats")
                .about("Average stone count and distribution of one board file")
                .arg(
                    Arg::new("path")
                        .value_parser(value_parser!(PathBuf))
                        .help("Board file (reads stdin when omitted)"),
                )
                .arg(
                    Arg::new("stones")
                        .long("stones")
                        .value_name("N")
                        .value_parser(value_parser!(usize))
                        .help("List the boards with exactly N stones"),
                ),
        )
        .subcommand(
            Command::new("table")
                .about("Markdown table of stone-count distributions across files")
                .arg(
                    Arg::new("inputs")
                        .value_name("FILE")
                        .required(true)
                        .num_args(1..)
                        .value_parser(value_parser!(PathBuf))
                        .help("Board files; columns follow argument order"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(value_parser!(PathBuf))
                        .help("Write the table here instead of stdout"),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .default_value(DEFAULT_TITLE)
                        .help("First line of the document"),
                ),
        )
        .subcommand(
            Command::new("cnf")
                .about("Group CNF size records by SAT answer")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("cnf_counts.txt file"),
                ),
        )
}

/// Initializes the tracing subscriber. Logs go to stderr.
/// Default level is WARN; each -v raises it, -q drops to errors only.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    for target in ["stonestat", "stonestatlib"] {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Handler for stats command
fn stats_handler(matches: &ArgMatches, mode: OutputMode) -> anyhow::Result<String> {
    let source = InputSource::from_arg(matches.get_one::<PathBuf>("path").cloned());
    let target = matches.get_one::<usize>("stones").copied();
    let options = SummaryOptions { target };

    let summary = match &source {
        InputSource::Stdin => summarize(io::stdin().lock(), options)?,
        InputSource::Path(path) => {
            resolve_inputs(&[path])?;
            summarize_path(path, options)?
        }
    };
    info!(source = %source, boards = summary.board_count, "summarized boards");

    Ok(render_stats(&summary, target, mode)?)
}

/// Handler for table command
fn table_handler(matches: &ArgMatches, mode: OutputMode) -> anyhow::Result<String> {
    let inputs: Vec<PathBuf> = matches
        .get_many::<PathBuf>("inputs")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();
    let options = matches
        .get_one::<String>("title")
        .map(|title| ReportOptions::new().title(title))
        .unwrap_or_default();

    let datasets = load_datasets(inputs.as_slice())?;
    let report = DistributionReport::with_options(&datasets, &options);
    info!(
        datasets = datasets.len(),
        rows = report.rows.len(),
        "built distribution report"
    );

    let document = if mode.is_structured() {
        to_json(&report)?
    } else {
        report.to_markdown()
    };

    let Some(output) = matches.get_one::<PathBuf>("output") else {
        return Ok(document);
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    fs::write(output, document)
        .with_context(|| format!("failed to write '{}'", output.display()))?;
    info!(path = %output.display(), "wrote report");

    Ok(String::new())
}

/// Handler for cnf command
fn cnf_handler(matches: &ArgMatches, mode: OutputMode) -> anyhow::Result<String> {
    let input = matches
        .get_one::<PathBuf>("input")
        .context("missing input file")?;
    resolve_inputs(&[input])?;
    let points = load_cnf_points(input)?;
    Ok(render_cnf(&points, mode)?)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    let Some((name, sub)) = matches.subcommand() else {
        return ExitCode::FAILURE;
    };

    init_logging(sub.get_count("verbose"), sub.get_flag("quiet"));
    let mode = OutputMode::from_flag(sub.get_one::<String>("format").map(|s| s.as_str()));

    let result = match name {
        "stats" => stats_handler(sub, mode),
        "table" => table_handler(sub, mode),
        "cnf" => cnf_handler(sub, mode),
        other => Err(anyhow::anyhow!("unknown command '{}'", other)),
    };

    match result {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
