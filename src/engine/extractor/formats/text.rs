use std::fs;

use crate::{
    engine::extractor::{ExtractorError, formats::FileExtractor},
    entities::document::Document,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextExtractor;

impl FileExtractor for TextExtractor {
    fn extract(&self, document: &Document) -> Result<String, ExtractorError> {
        Ok(fs::read_to_string(document.get_path())?)
    }
}
