pub mod args;
pub mod render;

use std::io::Write;

use tracing::info;

use crate::{
    RepFinderError,
    cli::args::Args,
    engine::{
        analyzer::analyze,
        constants::DEFAULT_MIN_WORD_LEN,
        extractor::Extractor,
    },
    entities::document::Document,
};

const LOG_TARGET: &str = "cli";

/// Runs the whole pipeline for one file and writes the report to `out`.
///
/// Nothing is written when the file is missing, has an unsupported
/// extension, or cannot be extracted.
pub fn run(args: &Args, out: &mut impl Write) -> Result<(), RepFinderError> {
    let document = Document::from_path(&args.file_path);

    if !document.exists() {
        return Err(RepFinderError::FileNotFound(
            document.get_path().display().to_string(),
        ));
    }

    let extractor = Extractor::new();

    if !extractor.supports(document.get_format_type()) {
        return Err(RepFinderError::UnsupportedFileType(
            document.get_extension_display(),
        ));
    }

    info!(target: LOG_TARGET, filename = document.get_filename(), "Processing document: {}", document);

    let content = extractor
        .extract(&document)
        .map_err(|source| RepFinderError::Extraction {
            path: document.get_path().display().to_string(),
            source,
        })?;

    if args.print_content {
        render::write_content(out, &content)?;
    }

    let repetitions = analyze(&content, usize::from(args.min_word_len));

    info!(target: LOG_TARGET, repeated = repetitions.len(), "Rendering report");

    render::write_repetitions(out, &repetitions, args.min_word_len, DEFAULT_MIN_WORD_LEN)?;
    out.flush()?;

    Ok(())
}
