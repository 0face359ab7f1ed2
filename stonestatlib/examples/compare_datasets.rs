//! Print a Markdown stone-count comparison of the board files given as arguments.

use stonestatlib::{load_datasets, DistributionReport, DEFAULT_TITLE};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: compare_datasets FILE...");
        return ExitCode::FAILURE;
    }

    let datasets = match load_datasets(paths.as_slice()) {
        Ok(datasets) => datasets,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    for dataset in &datasets {
        match dataset.distribution.average() {
            Some(avg) => eprintln!(
                "{}: {} boards, {:.3} stones on average",
                dataset.name, dataset.board_count, avg
            ),
            None => eprintln!("{}: no boards", dataset.name),
        }
    }

    print!("{}", DistributionReport::build(&datasets, DEFAULT_TITLE).to_markdown());
    ExitCode::SUCCESS
}
