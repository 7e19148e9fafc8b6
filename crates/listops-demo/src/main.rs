//! listops-demo - A worked example of the listops helpers
//!
//! Prints three results:
//! - the even numbers of a list (default `1..=10`)
//! - the character length of every word
//! - the words grouped by their first character
//!
//! Run with: cargo run --bin listops-demo -- --output json

mod logging;
mod report;

use anyhow::Context;
use clap::Parser;
use log::info;

use crate::report::{OutputMode, Report};

const DEFAULT_NUMBERS: [i64; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
const DEFAULT_LENGTH_WORDS: [&str; 3] = ["яблоко", "банан", "черешня"];
const DEFAULT_GROUP_WORDS: [&str; 5] = ["яблоко", "банан", "черешня", "арбуз", "ананас"];

/// Filter, transform and group sample lists with listops
#[derive(Debug, Parser)]
#[command(name = "listops-demo")]
#[command(version)]
struct Cli {
    /// Numbers to filter down to the even ones
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = DEFAULT_NUMBERS
    )]
    numbers: Vec<i64>,

    /// Words to measure and group by first character
    #[arg(long, value_delimiter = ',')]
    words: Option<Vec<String>>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputMode::Text)]
    output: OutputMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Returns the words to measure and the words to group.
    ///
    /// `--words` feeds both steps; without it each step gets its own
    /// default list.
    fn word_lists(&self) -> (Vec<String>, Vec<String>) {
        match &self.words {
            Some(words) => (words.clone(), words.clone()),
            None => (
                DEFAULT_LENGTH_WORDS.map(String::from).to_vec(),
                DEFAULT_GROUP_WORDS.map(String::from).to_vec(),
            ),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let (length_words, group_words) = cli.word_lists();
    info!(
        "running demo over {} numbers, measuring {} words, grouping {} words",
        cli.numbers.len(),
        length_words.len(),
        group_words.len()
    );

    let report = Report::build(cli.numbers, length_words, group_words)
        .context("failed to group words by first character")?;
    print!("{}", report.render(cli.output)?);

    Ok(())
}
