use crate::engine::extractor::{ExtractorError, formats::FileExtractor};
use crate::entities::document::Document;

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};
use std::fs::File;
use std::io::Read;
use tracing::debug;
use zip::ZipArchive;

const LOG_TARGET: &str = "extractor_docx";

const DOCUMENT_PART: &str = "word/document.xml";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocxExtractor;

impl FileExtractor for DocxExtractor {
    fn extract(&self, document: &Document) -> Result<String, ExtractorError> {
        let file = File::open(document.get_path())?;
        let mut zip = ZipArchive::new(file)?;

        let mut xml = String::new();
        zip.by_name(DOCUMENT_PART)?.read_to_string(&mut xml)?;

        let paragraphs = read_paragraphs(&xml)?;

        debug!(target: LOG_TARGET, paragraphs = paragraphs.len(), "Read {}", document.get_path().display());

        Ok(paragraphs.join("\n"))
    }
}

/// Tracks where the reader is inside the body so only top-level paragraphs
/// are collected. Paragraphs inside tables or text boxes are skipped.
#[derive(Debug, Default)]
struct ParagraphCollector {
    paragraphs: Vec<String>,
    current: String,
    paragraph_depth: usize,
    table_depth: usize,
    run_depth: usize,
    in_text: bool,
}

impl ParagraphCollector {
    fn collecting(&self) -> bool {
        self.table_depth == 0 && self.paragraph_depth == 1
    }

    fn in_run(&self) -> bool {
        self.collecting() && self.run_depth > 0
    }

    fn start(&mut self, element: &BytesStart) {
        match element.name().as_ref() {
            b"w:tbl" => self.table_depth += 1,
            b"w:p" => {
                self.paragraph_depth += 1;
                if self.collecting() {
                    self.current.clear();
                }
            }
            b"w:r" => self.run_depth += 1,
            b"w:t" => self.in_text = true,
            _ => {}
        }
    }

    fn empty(&mut self, element: &BytesStart) {
        match element.name().as_ref() {
            b"w:p" if self.table_depth == 0 && self.paragraph_depth == 0 => {
                self.paragraphs.push(String::new());
            }
            b"w:tab" | b"w:ptab" if self.in_run() => self.current.push('\t'),
            b"w:br" | b"w:cr" if self.in_run() => self.current.push('\n'),
            b"w:noBreakHyphen" if self.in_run() => self.current.push('-'),
            _ => {}
        }
    }

    fn end(&mut self, name: &[u8]) {
        match name {
            b"w:tbl" => self.table_depth = self.table_depth.saturating_sub(1),
            b"w:p" => {
                if self.collecting() {
                    self.paragraphs.push(std::mem::take(&mut self.current));
                }
                self.paragraph_depth = self.paragraph_depth.saturating_sub(1);
            }
            b"w:r" => self.run_depth = self.run_depth.saturating_sub(1),
            b"w:t" => self.in_text = false,
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.in_text && self.in_run() {
            self.current.push_str(text);
        }
    }
}

fn read_paragraphs(xml: &str) -> Result<Vec<String>, ExtractorError> {
    let mut reader = Reader::from_str(xml);
    let mut collector = ParagraphCollector::default();

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => collector.start(e),
            Event::Empty(ref e) => collector.empty(e),
            Event::End(ref e) => collector.end(e.name().as_ref()),
            Event::Text(ref e) => collector.text(&String::from_utf8_lossy(e.as_ref())),
            Event::CData(ref e) => collector.text(&String::from_utf8_lossy(e.as_ref())),
            // entity references arrive as their own events
            Event::GeneralRef(ref e) => {
                if let Some(ch) = e.resolve_char_ref().ok().flatten() {
                    collector.text(ch.encode_utf8(&mut [0; 4]));
                } else {
                    let name = String::from_utf8_lossy(e.as_ref());
                    if let Some(resolved) = resolve_predefined_entity(&name) {
                        collector.text(resolved);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(collector.paragraphs)
}
