use std::path::PathBuf;

use clap::Parser;

use crate::engine::constants::{DEFAULT_MIN_WORD_LEN, MIN_WORD_LEN_LOWER, MIN_WORD_LEN_UPPER};

/// Extract content from files and display duplicate words.
#[derive(Parser, Debug, Clone)]
#[command(name = "repfinder", version)]
pub struct Args {
    /// Path to the input file (.txt, .pdf, .docx).
    pub file_path: PathBuf,

    /// Minimum word length to be considered, {1-100} (default is 1).
    #[arg(
        short = 'l',
        long = "min_word_len",
        visible_alias = "min-word-len",
        value_name = "LEN",
        default_value_t = DEFAULT_MIN_WORD_LEN,
        value_parser = clap::value_parser!(u8).range(MIN_WORD_LEN_LOWER..=MIN_WORD_LEN_UPPER),
    )]
    pub min_word_len: u8,

    /// Print the extracted content before showing repetitions.
    #[arg(short = 'p', long = "print_content", visible_alias = "print-content")]
    pub print_content: bool,
}
