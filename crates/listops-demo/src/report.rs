//! The demo report and its renderers.
//!
//! [`Report::build`] runs the three list operations over the demo inputs;
//! [`Report::render`] formats the result for the selected [`OutputMode`].

use std::fmt::Display;

use anyhow::Context;
use clap::ValueEnum;
use listops::selectors::{char_count, first_char, is_even};
use listops::{Groups, ListOps};
use log::debug;
use serde::Serialize;

/// Controls how the report is printed.
///
/// This is the user-facing enum for the `--output` CLI flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// One labelled line per operation
    #[default]
    Text,
    /// The whole report as pretty-printed JSON
    Json,
}

/// Results of running each list operation over the demo inputs.
#[derive(Debug, Serialize)]
pub struct Report {
    pub even_numbers: Vec<i64>,
    pub word_lengths: Vec<usize>,
    pub words_by_first_char: Groups<char, String>,
}

impl Report {
    /// Filters `numbers` down to the even ones, measures every word in
    /// `length_words`, and groups `group_words` by their first character.
    ///
    /// Fails if any grouped word is empty, since it has no first character.
    pub fn build(
        numbers: Vec<i64>,
        length_words: Vec<String>,
        group_words: Vec<String>,
    ) -> listops::Result<Self> {
        let even_numbers = numbers.filter_list(is_even);
        debug!("kept {} even numbers", even_numbers.len());

        let word_lengths = length_words.transform_list(|w| char_count(&w));

        let words_by_first_char = group_words.try_group_by_key(first_char)?;
        debug!(
            "grouped {} words into {} buckets",
            words_by_first_char.total_len(),
            words_by_first_char.len()
        );

        Ok(Report {
            even_numbers,
            word_lengths,
            words_by_first_char,
        })
    }

    /// Renders the report in the given mode.
    pub fn render(&self, mode: OutputMode) -> anyhow::Result<String> {
        match mode {
            OutputMode::Text => Ok(self.render_text()),
            OutputMode::Json => {
                let json =
                    serde_json::to_string_pretty(self).context("failed to serialize report")?;
                Ok(format!("{json}\n"))
            }
        }
    }

    fn render_text(&self) -> String {
        let groups = self
            .words_by_first_char
            .iter()
            .map(|(key, bucket)| format!("{key}: [{}]", bucket.join(", ")))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Even numbers: [{}]\nWord lengths: [{}]\nWords by first letter: {{{groups}}}\n",
            join(&self.even_numbers),
            join(&self.word_lengths),
        )
    }
}

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
