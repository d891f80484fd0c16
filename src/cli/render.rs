use std::io::{self, Write};

use crate::engine::{analyzer::Repetitions, constants::CONTENT_BANNER_WIDTH};

pub fn write_content(out: &mut impl Write, content: &str) -> io::Result<()> {
    let banner = "-".repeat(CONTENT_BANNER_WIDTH);

    write!(out, "\nExtracted Content:\n{banner}\n{content}\n{banner}\n\n")
}

pub fn repetitions_header(min_word_len: u8, default_min_word_len: u8) -> String {
    if min_word_len == default_min_word_len {
        "Repetitions:".to_string()
    } else {
        format!("Repetitions of min length {}:", min_word_len)
    }
}

pub fn write_repetitions(
    out: &mut impl Write,
    repetitions: &Repetitions,
    min_word_len: u8,
    default_min_word_len: u8,
) -> io::Result<()> {
    if repetitions.is_empty() {
        return writeln!(out, "No repetitions found.");
    }

    writeln!(out, "{}", repetitions_header(min_word_len, default_min_word_len))?;
    for (word, count) in repetitions.iter() {
        writeln!(out, "{}: {}", word, count)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::analyzer::analyze;

    fn render(repetitions: &Repetitions, min_word_len: u8) -> String {
        let mut out = Vec::new();
        write_repetitions(&mut out, repetitions, min_word_len, 1).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn default_header() {
        let output = render(&analyze("a a b b b", 1), 1);

        assert_eq!(output, "Repetitions:\nb: 3\na: 2\n");
    }

    #[test]
    fn header_mentions_non_default_length() {
        let output = render(&analyze("word word other other x x", 4), 4);

        assert_eq!(output, "Repetitions of min length 4:\nword: 2\nother: 2\n");
    }

    #[test]
    fn nothing_to_report() {
        assert_eq!(render(&analyze("", 1), 1), "No repetitions found.\n");
    }

    #[test]
    fn content_banner() {
        let mut out = Vec::new();
        write_content(&mut out, "body").unwrap();
        let output = String::from_utf8(out).unwrap();

        let banner = "-".repeat(CONTENT_BANNER_WIDTH);
        assert_eq!(output, format!("\nExtracted Content:\n{banner}\nbody\n{banner}\n\n"));
    }
}
