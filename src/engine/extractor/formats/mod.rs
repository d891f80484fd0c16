use crate::{engine::extractor::ExtractorError, entities::document::Document};

pub mod microsoft;
pub mod pdf;
pub mod text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatType {
    Pdf,
    Docx,
    Text,
    Unknown,
}

impl FormatType {
    pub fn get_by_extension(extension: &str) -> FormatType {
        match extension.to_lowercase().as_str() {
            "pdf" => FormatType::Pdf,
            "docx" => FormatType::Docx,
            "txt" => FormatType::Text,
            _ => FormatType::Unknown,
        }
    }
}

/// Produces the full text content of a document, or fails.
pub trait FileExtractor {
    fn extract(&self, document: &Document) -> Result<String, ExtractorError>;
}
