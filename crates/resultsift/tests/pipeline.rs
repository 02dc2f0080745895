//! End-to-end pipeline tests over a synthetic result PDF.
//!
//! Builds a minimal single-font PDF with `lopdf`, then runs the full
//! extract -> parse -> filter -> serialize chain the `export` command drives.

use std::io::Cursor;

use calamine::{Reader, Xlsx};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use resultsift_core::{filter_records, parse_records, xlsx, Error, Mode};

/// Build a one-page PDF whose content stream prints one table row per line.
fn result_pdf(rows: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 11.into()]),
        Operation::new("Td", vec![40.into(), 760.into()]),
    ];
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            operations.push(Operation::new("Td", vec![0.into(), (-14).into()]));
        }
        operations.push(Operation::new("Tj", vec![Object::string_literal(*row)]));
    }
    operations.push(Operation::new("ET", vec![]));

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
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

/// Build a two-page PDF: page one prints `rows`, page two is blank.
fn result_pdf_with_blank_page(rows: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 11.into()]),
        Operation::new("Td", vec![40.into(), 760.into()]),
    ];
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            operations.push(Operation::new("Td", vec![0.into(), (-14).into()]));
        }
        operations.push(Operation::new("Tj", vec![Object::string_literal(*row)]));
    }
    operations.push(Operation::new("ET", vec![]));

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let first_page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    });

    let blank_content_id = doc.add_object(Stream::new(
        dictionary! {},
        Content { operations: vec![] }.encode().unwrap(),
    ));
    let blank_page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => blank_content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![first_page_id.into(), blank_page_id.into()],
        "Count" => 2,
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

const ROWS: [&str; 3] = [
    "1 220012345 AMIT KUMAR 350 0095(A/45), 0102(B/20) RL",
    "2 220012346 NEHA RANI 310 0095(B/20) RL",
    "3 220012347 PRIYA SHARMA 298 0102(C/31) PASS",
];

#[test]
fn extracted_text_reproduces_the_table_lines() {
    let bytes = result_pdf(&ROWS);
    let text = pdftext::extract_text(&bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, ROWS);
}

#[test]
fn reappear_export_selects_only_failing_students() {
    let bytes = result_pdf(&ROWS);
    let text = pdftext::extract_text(&bytes).unwrap();
    let records = parse_records(&text).unwrap();
    assert_eq!(records.len(), 3);

    // 0095: AMIT has 45 (pass), NEHA has 20 (below the pass mark).
    let filtered = filter_records(&records, "0095", Mode::Reappear).unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].registration_number, "220012346");
    assert_eq!(filtered[0].name, "NEHA RANI");

    // The exported sheet must hold a header plus exactly the filtered rows.
    let data = xlsx::to_xlsx(&filtered).unwrap();
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(data)).unwrap();
    let range = workbook.worksheet_range(xlsx::SHEET_NAME).unwrap();
    assert_eq!(range.get_size(), (2, 5));
    assert_eq!(
        range.get_value((1, 1)).unwrap().to_string(),
        "220012346"
    );
    assert_eq!(range.get_value((1, 2)).unwrap().to_string(), "NEHA RANI");
    assert_eq!(range.get_value((1, 4)).unwrap().to_string(), "RL");
}

#[test]
fn pass_export_selects_only_clearing_students() {
    let bytes = result_pdf(&ROWS);
    let text = pdftext::extract_text(&bytes).unwrap();
    let records = parse_records(&text).unwrap();

    // 0102: NEHA is absent, AMIT has 20, PRIYA has 31.
    let filtered = filter_records(&records, "0102", Mode::Pass).unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].registration_number, "220012347");
}

#[test]
fn unknown_subject_code_aborts_before_export() {
    let bytes = result_pdf(&ROWS);
    let text = pdftext::extract_text(&bytes).unwrap();
    let records = parse_records(&text).unwrap();

    let err = filter_records(&records, "9999", Mode::Reappear).unwrap_err();
    assert!(matches!(err, Error::NoMatches { .. }));
    assert!(err.to_string().contains("'9999'"));
}

#[test]
fn header_and_footer_lines_do_not_become_records() {
    let bytes = result_pdf(&[
        "UNIVERSITY SEMESTER RESULT DECEMBER 2024",
        ROWS[0],
        ROWS[1],
        "Page 1 of 1",
    ]);
    let text = pdftext::extract_text(&bytes).unwrap();
    let records = parse_records(&text).unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn pages_without_text_are_skipped() {
    let bytes = result_pdf_with_blank_page(&[ROWS[0], ROWS[1]]);
    let text = pdftext::extract_text(&bytes).unwrap();
    // The blank page contributes nothing, not even a trailing newline.
    assert_eq!(text.lines().count(), 2);
    assert!(!text.ends_with('\n'));
}

#[test]
fn text_only_title_page_parses_to_integrity_error() {
    let bytes = result_pdf(&["UNIVERSITY SEMESTER RESULT", "DECEMBER 2024"]);
    let text = pdftext::extract_text(&bytes).unwrap();
    assert!(matches!(parse_records(&text), Err(Error::NoRowsParsed)));
}
