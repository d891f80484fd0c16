pub mod formats;

use std::collections::HashMap;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::{
    engine::extractor::formats::{FileExtractor, FormatType},
    entities::document::Document,
};

const LOG_TARGET: &str = "extractor";

#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("invalid document container: {0}")]
    Docx(#[from] zip::result::ZipError),

    #[error("malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Dispatches a document to the extractor registered for its format.
pub struct Extractor {
    extractors_map: HashMap<FormatType, Box<dyn FileExtractor>>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    pub fn new() -> Self {
        let mut extractors_map: HashMap<FormatType, Box<dyn FileExtractor>> = HashMap::new();

        extractors_map.insert(FormatType::Text, Box::new(formats::text::TextExtractor));
        extractors_map.insert(FormatType::Pdf, Box::new(formats::pdf::PdfExtractor));
        extractors_map.insert(
            FormatType::Docx,
            Box::new(formats::microsoft::docx::DocxExtractor),
        );

        Extractor { extractors_map }
    }

    pub fn supports(&self, format: FormatType) -> bool {
        self.extractors_map.contains_key(&format)
    }

    pub fn extract(&self, document: &Document) -> Result<String, ExtractorError> {
        let document_format = document.get_format_type();

        let Some(extractor) = self.extractors_map.get(&document_format) else {
            error!(target: LOG_TARGET, "No extractor found for document format: {:?}", document_format);
            return Err(ExtractorError::UnsupportedFormat(
                document.get_extension_display(),
            ));
        };

        info!(target: LOG_TARGET, format = ?document_format, "Extracting {}", document.get_path().display());

        let text = extractor.extract(document).inspect_err(|e| {
            warn!(target: LOG_TARGET, "Failed to extract text: {:?} ({})", e, document.get_path().display());
        })?;

        info!(target: LOG_TARGET, "Extracted text, length: {}", text.len());

        Ok(text)
    }
}
