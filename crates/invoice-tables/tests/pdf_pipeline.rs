//! PDF → raw tables → normalized tables → workbook, on generated PDFs.

mod common;

use std::io::Cursor;

use common::{INVOICE_ROWS, grid_content, invoice_table_pdf, pdf_with_pages, text_content};
use invoice_tables::*;

fn stream_settings() -> TableSettings {
    TableSettings {
        strategy: Strategy::Stream,
        ..TableSettings::default()
    }
}

fn cell(text: &str) -> Option<String> {
    Some(text.to_string())
}

#[test]
fn detected_table_becomes_raw_table_tagged_with_page() {
    let source = PdfSource::open(&invoice_table_pdf(), None)
        .unwrap()
        .with_settings(stream_settings());
    assert_eq!(source.page_count(), 1);

    let raw = source.raw_tables().unwrap();
    assert!(!raw.is_empty(), "stream detection found no table");

    let table = &raw[0];
    assert_eq!(table.page, Some(1));
    assert!(table.rows.len() >= 2, "expected header + data, got {:?}", table.rows);
    assert!(table.header().contains(&cell("Name")), "header: {:?}", table.header());
    assert!(table.header().contains(&cell("Age")), "header: {:?}", table.header());
}

#[test]
fn detected_table_normalizes_with_header_labels() {
    let source = PdfSource::open(&invoice_table_pdf(), None)
        .unwrap()
        .with_settings(stream_settings());
    let conversion = Converter::default().extract(&source).unwrap();

    assert!(conversion.raw_count >= 1);
    let table = conversion.tables.first().expect("no normalized table");
    assert_eq!(table.page(), Some(1));
    assert!(table.column_index("Name").is_some(), "labels: {:?}", table.labels());
    assert!(table.row_count() >= 1);
    for row in table.rows() {
        assert_eq!(row.len(), table.column_count());
    }
}

#[test]
fn text_only_pdf_has_no_tables() {
    let bytes = pdf_with_pages(&[text_content("Thank you for your business")]);
    let source = PdfSource::open(&bytes, None).unwrap();
    let conversion = Converter::default().extract(&source).unwrap();
    assert!(conversion.is_empty());
    assert_eq!(conversion.raw_count, 0);
}

#[test]
fn page_selection_limits_extraction() {
    let bytes = pdf_with_pages(&[
        text_content("Cover letter"),
        grid_content(INVOICE_ROWS),
    ]);
    let source = PdfSource::open(&bytes, None)
        .unwrap()
        .with_pages("1")
        .unwrap();
    assert!(source.raw_tables().unwrap().is_empty());

    let source = PdfSource::open(&bytes, None)
        .unwrap()
        .with_settings(stream_settings())
        .with_pages("2")
        .unwrap();
    let raw = source.raw_tables().unwrap();
    assert!(!raw.is_empty());
    assert!(raw.iter().all(|t| t.page == Some(2)));
}

#[test]
fn page_selection_beyond_document_is_an_error() {
    let bytes = pdf_with_pages(&[text_content("only page")]);
    let result = PdfSource::open(&bytes, None).unwrap().with_pages("3");
    assert!(matches!(
        result,
        Err(Error::Pages(PageRangeError::OutOfRange {
            page: 3,
            page_count: 1
        }))
    ));
}

#[test]
fn corrupt_pdf_is_reported_not_swallowed() {
    let result = PdfSource::open(b"%PDF-1.5\nthis is not a real document", None);
    assert!(result.is_err());
}

#[test]
fn open_source_dispatches_on_kind() {
    let json = br#"[[["Item", "Qty"], ["Pen", "5"]]]"#;
    let source = open_source(json, InputKind::Json, &SourceOptions::default()).unwrap();
    let conversion = Converter::default().extract(source.as_ref()).unwrap();
    assert_eq!(conversion.tables.len(), 1);

    let options = SourceOptions {
        pages: Some("1".to_string()),
        settings: stream_settings(),
        ..SourceOptions::default()
    };
    let source = open_source(&invoice_table_pdf(), InputKind::Pdf, &options).unwrap();
    assert!(!source.raw_tables().unwrap().is_empty());
}

#[test]
fn json_to_workbook_end_to_end() {
    let json = br#"[
        {"page": 1, "rows": [["Item", "", "Item"], ["Pen", "5", "Book"]]},
        {"page": 2, "rows": [["Qty"]]},
        {"page": 2, "rows": [["Total", "Amount"], ["Sum", "17.50"]]}
    ]"#;
    let source = JsonSource::parse(json).unwrap();
    let conversion = Converter::default().extract(&source).unwrap();
    assert_eq!(conversion.tables.len(), 2);
    assert_eq!(conversion.skipped.len(), 1);
    assert_eq!(conversion.tables[0].labels(), ["Item", "Column_1", "Item_1"]);

    let bytes = to_xlsx_bytes(&conversion.tables, &WorkbookOptions::default()).unwrap();
    let book = umya_spreadsheet::reader::xlsx::read_reader(Cursor::new(bytes), true).unwrap();
    assert_eq!(book.get_sheet_count(), 2);
    let first = book.get_sheet_by_name("Table_1").unwrap();
    assert_eq!(first.get_value((2, 1)), "Column_1");
    assert_eq!(first.get_value((3, 2)), "Book");
}
