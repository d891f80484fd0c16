use lopdf::Document as PdfDocument;
use tracing::{debug, warn};

use crate::{
    engine::extractor::{ExtractorError, formats::FileExtractor},
    entities::document::Document,
};

const LOG_TARGET: &str = "extractor_pdf";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PdfExtractor;

impl FileExtractor for PdfExtractor {
    // Pages are concatenated as-is, so the last word of a page can run into the
    // first word of the next one.
    fn extract(&self, document: &Document) -> Result<String, ExtractorError> {
        let pdf = PdfDocument::load(document.get_path())?;
        let pages = pdf.get_pages();

        debug!(target: LOG_TARGET, pages = pages.len(), "Loaded {}", document.get_path().display());

        let mut text = String::new();

        for page_number in pages.keys() {
            match pdf.extract_text(&[*page_number]) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => {
                    warn!(target: LOG_TARGET, page = page_number, "No extractable text: {}", e);
                }
            }
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use lopdf::{
        Object, Stream,
        content::{Content, Operation},
        dictionary,
    };

    use super::*;
    use crate::engine::analyzer::analyze;

    fn build_pdf(pages_text: &[&str]) -> Vec<u8> {
        let mut doc = PdfDocument::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = vec![];
        for page_text in pages_text {
            let operations = if page_text.is_empty() {
                vec![]
            } else {
                vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*page_text)]),
                    Operation::new("ET", vec![]),
                ]
            };
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn extracts_pages_in_order() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(&build_pdf(&["alpha page", "omega page"])).unwrap();

        let document = Document::from_path(file.path());
        let text = PdfExtractor.extract(&document).unwrap();

        let alpha = text.find("alpha").expect("first page text");
        let omega = text.find("omega").expect("second page text");
        assert!(alpha < omega);
    }

    #[test]
    fn blank_page_adds_nothing_and_pages_are_not_separated() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(&build_pdf(&["one two", "", "two three"])).unwrap();

        let document = Document::from_path(file.path());
        let text = PdfExtractor.extract(&document).unwrap();

        assert_eq!(text, "one two\ntwo three\n");
        assert_eq!(analyze(&text, 1).into_vec(), vec![("two".to_string(), 2)]);
    }

    #[test]
    fn garbage_is_a_format_error() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"this is not a pdf at all").unwrap();

        let document = Document::from_path(file.path());

        assert!(matches!(
            PdfExtractor.extract(&document),
            Err(ExtractorError::Pdf(_))
        ));
    }
}
