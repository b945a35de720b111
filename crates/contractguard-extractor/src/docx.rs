//! DOCX backend
//!
//! A `.docx` file is a zip archive. The body lives in `word/document.xml`
//! as `w:p` paragraphs made of `w:r` runs whose text sits in `w:t`
//! elements. Body paragraphs are joined with `\n`; paragraphs nested in
//! tables are not part of the body and are skipped.

use crate::error::ExtractError;
use crate::limits::{read_document, DEFAULT_MAX_BYTES};
use contractguard_domain::traits::TextSource;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use std::path::Path;
use tracing::debug;

const DOCUMENT_PART: &str = "word/document.xml";

/// Reads `.docx` documents
#[derive(Debug, Clone)]
pub struct DocxExtractor {
    max_bytes: u64,
}

impl DocxExtractor {
    /// Create an extractor with the default size limit
    pub fn new() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }

    /// Change the size limit
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSource for DocxExtractor {
    type Error = ExtractError;

    fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        let bytes = read_document(path, self.max_bytes)?;
        let xml = document_xml(bytes)?;
        let paragraphs = body_paragraphs(&xml)?;
        debug!("{} body paragraphs in {}", paragraphs.len(), path.display());
        Ok(paragraphs.join("\n"))
    }
}

fn document_xml(bytes: Vec<u8>) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::Backend(format!("Not a DOCX archive: {}", e)))?;
    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractError::Backend(format!("Missing {}: {}", DOCUMENT_PART, e)))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| ExtractError::Backend(format!("Unreadable {}: {}", DOCUMENT_PART, e)))?;
    Ok(xml)
}

/// Text of each body paragraph in document order
fn body_paragraphs(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut table_depth = 0usize;
    let mut in_paragraph = false;
    let mut in_run = false;
    let mut in_text = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ExtractError::Backend(format!("Malformed {}: {}", DOCUMENT_PART, e)))?;

        match event {
            Event::Start(e) => match e.local_name().as_ref() {
                b"tbl" => table_depth += 1,
                b"p" if table_depth == 0 => {
                    in_paragraph = true;
                    current.clear();
                }
                b"r" => in_run = true,
                b"t" if in_run => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"tbl" => table_depth = table_depth.saturating_sub(1),
                b"p" if table_depth == 0 && in_paragraph => {
                    paragraphs.push(std::mem::take(&mut current));
                    in_paragraph = false;
                }
                b"r" => in_run = false,
                b"t" => in_text = false,
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"p" if table_depth == 0 => paragraphs.push(String::new()),
                b"tab" if in_run && in_paragraph => current.push('\t'),
                b"br" | b"cr" if in_run && in_paragraph => current.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text && in_paragraph => {
                let text = t
                    .unescape()
                    .map_err(|e| ExtractError::Backend(format!("Malformed {}: {}", DOCUMENT_PART, e)))?;
                current.push_str(&text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    const NS: &str = r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#;

    fn docx_with_body(body: &str) -> tempfile::NamedTempFile {
        let xml = format!(r#"<?xml version="1.0" encoding="UTF-8"?><w:document {}><w:body>{}</w:body></w:document>"#, NS, body);

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("[Content_Types].xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<Types/>").unwrap();
        writer
            .start_file(DOCUMENT_PART, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        file.write_all(&bytes).unwrap();
        file
    }

    #[test]
    fn test_paragraphs_joined_with_newline() {
        let file = docx_with_body(
            "<w:p><w:r><w:t>The Client shall </w:t></w:r><w:r><w:t>indemnify the Vendor.</w:t></w:r></w:p>\
             <w:p/>\
             <w:p><w:r><w:t>Fees &amp; costs are due monthly.</w:t></w:r></w:p>",
        );

        let text = DocxExtractor::new().extract(file.path()).unwrap();
        assert_eq!(
            text,
            "The Client shall indemnify the Vendor.\n\nFees & costs are due monthly."
        );
    }

    #[test]
    fn test_table_paragraphs_are_skipped() {
        let file = docx_with_body(
            "<w:p><w:r><w:t>Intro.</w:t></w:r></w:p>\
             <w:tbl><w:tr><w:tc><w:p><w:r><w:t>Cell penalty.</w:t></w:r></w:p></w:tc></w:tr></w:tbl>\
             <w:p><w:r><w:t>Outro.</w:t></w:r></w:p>",
        );

        let text = DocxExtractor::new().extract(file.path()).unwrap();
        assert_eq!(text, "Intro.\nOutro.");
    }

    #[test]
    fn test_run_tabs_and_breaks() {
        let file = docx_with_body(
            "<w:p><w:pPr><w:tabs><w:tab w:val=\"left\" w:pos=\"720\"/></w:tabs></w:pPr>\
             <w:r><w:t>Term</w:t><w:tab/><w:t>12 months</w:t><w:br/><w:t>Renewal</w:t></w:r></w:p>",
        );

        let text = DocxExtractor::new().extract(file.path()).unwrap();
        assert_eq!(text, "Term\t12 months\nRenewal");
    }

    #[test]
    fn test_not_a_zip_is_backend_error() {
        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        file.write_all(b"plain bytes, not an archive").unwrap();

        let result = DocxExtractor::new().extract(file.path());
        assert!(matches!(result, Err(ExtractError::Backend(_))));
    }

    #[test]
    fn test_size_limit() {
        let file = docx_with_body("<w:p><w:r><w:t>Short.</w:t></w:r></w:p>");
        let result = DocxExtractor::new().with_max_bytes(8).extract(file.path());
        assert!(matches!(result, Err(ExtractError::TooLarge { limit: 8, .. })));
    }
}
