use formguard_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// ACCEPTED UPLOADS
// ============================================================================

#[rstest]
#[case(&[FileType::Pdf], "application/pdf")]
#[case(&[FileType::Pdf], "APPLICATION/PDF")]
#[case(&[FileType::Jpeg], "image/pjpeg")]
#[case(&[FileType::Jpg, FileType::Png], "image/PNG")]
#[case(&[FileType::Zip], "application/x-zip-compressed")]
#[case(&[FileType::Docx], "application/vnd.openxmlformats-officedocument.wordprocessingml.document")]
fn accepts_declared_type(#[case] allowed: &[FileType], #[case] content_type: &str) {
    let file = FormFile::new("upload", content_type, 10);
    assert!(validate_file_type(Some(&file), allowed, "Attachment").is_ok());
}

// ============================================================================
// REJECTED UPLOADS
// ============================================================================

#[rstest]
#[case(&[FileType::Pdf], "image/png", "Attachment should be in PDF format.")]
#[case(&[FileType::Pdf, FileType::Doc], "image/png", "Attachment should be in PDF,DOC formats.")]
#[case(&[FileType::Png], "image/png; charset=binary", "Attachment should be in PNG format.")]
#[case(&[FileType::Jpg], "image/pjpeg", "Attachment should be in JPG format.")]
fn rejects_declared_type(
    #[case] allowed: &[FileType],
    #[case] content_type: &str,
    #[case] expected: &str,
) {
    let file = FormFile::new("upload", content_type, 10);
    let err = validate_file_type(Some(&file), allowed, "Attachment").unwrap_err();
    assert!(err.is(ErrorCode::UnsupportedFileType));
    assert_eq!(err.message, expected);
}

#[rstest]
#[case(&[])]
#[case(&[FileType::Pdf])]
#[case(&[FileType::Png, FileType::Gif, FileType::Bmp])]
fn empty_upload_always_fails(#[case] allowed: &[FileType]) {
    let file = FormFile::from_bytes("blank.pdf", "application/pdf", &[]);
    let err = validate_file_type(Some(&file), allowed, "Attachment").unwrap_err();
    assert!(err.is(ErrorCode::EmptyFile));
    assert_eq!(err.message, "Selected file is empty.");
}

#[test]
fn missing_upload_passes() {
    assert!(validate_file_type(None, &[FileType::Pdf], "Attachment").is_ok());
}

// ============================================================================
// COMBINATORS
// ============================================================================

#[test]
fn custom_message_keeps_code() {
    let rule = FileTypes::new([FileType::Csv]).with_message("Export the sheet as CSV first");
    let err = rule
        .validate(&FormFile::new("sheet.xlsx", "application/vnd.ms-excel", 1))
        .unwrap_err();
    assert_eq!(err.message, "Export the sheet as CSV first");
    assert!(err.is(ErrorCode::UnsupportedFileType));
    assert_eq!(err.nested[0].message, "File should be in CSV format.");
}

#[test]
fn shared_across_threads() {
    let rule = std::sync::Arc::new(FileTypes::new([FileType::Png]));
    let handles: Vec<_> = ["image/png", "image/gif"]
        .into_iter()
        .map(|content_type| {
            let rule = std::sync::Arc::clone(&rule);
            std::thread::spawn(move || {
                rule.validate(&FormFile::new("x", content_type, 1)).is_ok()
            })
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![true, false]);
}
