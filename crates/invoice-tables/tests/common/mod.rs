//! PDF fixtures built in memory with lopdf.

#![allow(dead_code)]

use lopdf::{Document, Object, Stream, dictionary};

/// Header and rows of the invoice-style table drawn by [`invoice_table_pdf`].
pub const INVOICE_ROWS: &[&[&str]] = &[
    &["Name", "Age", "City"],
    &["Alice", "30", "NYC"],
    &["Bob", "25", "London"],
];

/// Content stream drawing a ruled grid with one text string per cell.
///
/// The table starts at (72, 722) in PDF user space; columns are 100pt wide
/// and rows 30pt tall. Text sits 5pt right of the cell edge and 20pt below
/// the row top. An empty string leaves the cell blank.
pub fn grid_content(rows: &[&[&str]]) -> Vec<u8> {
    let cols = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    let (x0, y_top, col_w, row_h) = (72.0_f64, 722.0_f64, 100.0_f64, 30.0_f64);
    let x1 = x0 + col_w * cols as f64;
    let y_bottom = y_top - row_h * rows.len() as f64;

    let mut cs = String::from("1 w\n");
    for r in 0..=rows.len() {
        let y = y_top - row_h * r as f64;
        cs.push_str(&format!("{x0} {y} m {x1} {y} l S\n"));
    }
    for c in 0..=cols {
        let x = x0 + col_w * c as f64;
        cs.push_str(&format!("{x} {y_top} m {x} {y_bottom} l S\n"));
    }
    for (r, row) in rows.iter().enumerate() {
        for (c, text) in row.iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            let tx = x0 + col_w * c as f64 + 5.0;
            let ty = y_top - row_h * r as f64 - 20.0;
            cs.push_str(&format!("BT /F1 10 Tf {tx} {ty} Td ({text}) Tj ET\n"));
        }
    }
    cs.into_bytes()
}

/// Content stream with a single line of text and no ruling.
pub fn text_content(text: &str) -> Vec<u8> {
    format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET").into_bytes()
}

/// Single-page PDF holding the [`INVOICE_ROWS`] table.
pub fn invoice_table_pdf() -> Vec<u8> {
    pdf_with_pages(&[grid_content(INVOICE_ROWS)])
}

/// Assemble a US Letter PDF with one page per content stream.
pub fn pdf_with_pages(contents: &[Vec<u8>]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut kids = Vec::with_capacity(contents.len());
    for content in contents {
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.clone()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! {
                    "F1" => font_id,
                },
            },
        });
        kids.push(Object::from(page_id));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => contents.len() as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}
