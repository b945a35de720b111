//! Integration tests: extraction feeding the analyzer

use contractguard_analyzer::{Analyzer, AnalysisOutcome};
use contractguard_domain::RiskTier;
use contractguard_extractor::{DocumentKind, ExtractError, ExtractorRegistry};
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn test_txt_document_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "contract.txt",
        b"The Vendor may terminate this agreement without notice. Governing law shall be Delaware.",
    );

    let registry = ExtractorRegistry::with_defaults();
    let extracted = registry.extract(&path).unwrap();
    assert_eq!(extracted.kind, DocumentKind::Txt);

    let analysis = Analyzer::builtin().analyze(&extracted.text);
    let tiers: Vec<RiskTier> = analysis.records().iter().map(|r| r.tier()).collect();
    assert_eq!(tiers, vec![RiskTier::High, RiskTier::Medium]);
}

#[test]
fn test_blank_document_is_nothing_to_analyze() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "blank.txt", b"  \n\n  ");

    let extracted = ExtractorRegistry::with_defaults().extract(&path).unwrap();
    assert!(extracted.is_blank());

    let analysis = Analyzer::builtin().analyze(&extracted.text);
    assert_eq!(analysis.outcome(), AnalysisOutcome::NothingToAnalyze);
}

#[test]
fn test_invalid_utf8_does_not_fail() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "latin1.TXT", b"Late fee \xe9 applies.");

    let extracted = ExtractorRegistry::with_defaults().extract(&path).unwrap();
    assert_eq!(extracted.text, "Late fee  applies.");

    let analysis = Analyzer::builtin().analyze(&extracted.text);
    assert_eq!(analysis.records()[0].keyword(), Some("late fee"));
}

#[test]
fn test_unsupported_file_is_an_extraction_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "contract.rtf", b"{\\rtf1 indemnify}");

    let result = ExtractorRegistry::with_defaults().extract(&path);
    assert!(matches!(result, Err(ExtractError::UnsupportedExtension(_))));
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gone.txt");

    let err = ExtractorRegistry::with_defaults().extract(&path).unwrap_err();
    assert!(err.to_string().contains("gone.txt"));
}

#[test]
fn test_docx_document_end_to_end() {
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>
<w:p><w:r><w:t>The Vendor may terminate this agreement without notice.</w:t></w:r></w:p>
<w:p><w:r><w:t>Governing law shall be Delaware.</w:t></w:r></w:p>
</w:body></w:document>"#;

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    let bytes = writer.finish().unwrap().into_inner();

    let dir = TempDir::new().unwrap();
    let path = write(&dir, "lease.docx", &bytes);

    let extracted = ExtractorRegistry::with_defaults().extract(&path).unwrap();
    assert_eq!(extracted.kind, DocumentKind::Docx);
    assert_eq!(
        extracted.text,
        "The Vendor may terminate this agreement without notice.\nGoverning law shall be Delaware."
    );

    let analysis = Analyzer::builtin().analyze(&extracted.text);
    let tiers: Vec<RiskTier> = analysis.records().iter().map(|r| r.tier()).collect();
    assert_eq!(tiers, vec![RiskTier::High, RiskTier::Medium]);
}

#[test]
fn test_corrupt_pdf_is_a_backend_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "scan.pdf", b"not a pdf at all");

    let result = ExtractorRegistry::with_defaults().extract(&path);
    assert!(matches!(result, Err(ExtractError::Backend(_))));
}
