//! Workbook fixtures shared by the integration tests

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

/// Cell content for fixture sheets
#[derive(Clone, Copy)]
pub enum Cell<'a> {
    Text(&'a str),
    Num(f64),
    Blank,
}

/// Write one workbook with the given (sheet name, rows) pairs
pub fn write_workbook(path: &Path, sheets: &[(&str, Vec<Vec<Cell>>)]) {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Text(s) => {
                        worksheet.write_string(r as u32, c as u16, *s).unwrap();
                    }
                    Cell::Num(n) => {
                        worksheet.write_number(r as u32, c as u16, *n).unwrap();
                    }
                    Cell::Blank => {}
                }
            }
        }
    }
    workbook.save(path).unwrap();
}

/// Factory-grid matrix: colors `red`, `blue`; codes 3, 12; two sizes
pub fn factory_matrix(dir: &Path) -> PathBuf {
    let path = dir.join("multi_source.xlsx");
    write_workbook(
        &path,
        &[(
            "Sheet1",
            vec![
                vec![Cell::Blank, Cell::Text("red"), Cell::Text("blue")],
                vec![Cell::Blank, Cell::Num(3.0), Cell::Text("12")],
                vec![Cell::Text("iPhone 14")],
                vec![Cell::Text("iPhone 14 Pro")],
            ],
        )],
    );
    path
}

/// Simple-grid matrix: colors `red`, `blue`; two sizes
pub fn simple_matrix(dir: &Path) -> PathBuf {
    let path = dir.join("city_source.xlsx");
    write_workbook(
        &path,
        &[(
            "Sheet1",
            vec![
                vec![Cell::Text("Model"), Cell::Text("red"), Cell::Text("blue")],
                vec![Cell::Text("iPhone 14")],
                vec![Cell::Text("iPhone 14 Pro")],
            ],
        )],
    );
    path
}

/// Columns used by the fixture template's header row
pub const TEMPLATE_COLUMNS: &[&str] = &[
    "feed_product_type",
    "item_sku",
    "brand_name",
    "item_name",
    "parent_child",
    "parent_sku",
    "standard_price",
    "sale_from_date",
    "sale_end_date",
    "item_height",
    "external_product_id",
];

/// Template workbook: an `Instructions` sheet, the `Template` sheet with
/// two metadata rows and the header at row 2, and a `Valid Values` sheet.
pub fn template_workbook(dir: &Path) -> PathBuf {
    let path = dir.join("amazon_template.xlsx");
    let header: Vec<Cell> = TEMPLATE_COLUMNS.iter().map(|c| Cell::Text(c)).collect();
    write_workbook(
        &path,
        &[
            (
                "Instructions",
                vec![vec![Cell::Text("Read me first")], vec![Cell::Num(42.0)]],
            ),
            (
                "Template",
                vec![
                    vec![Cell::Text("TemplateType=fptcustom"), Cell::Text("Version=2023")],
                    vec![Cell::Text("Product Type"), Cell::Text("Seller SKU")],
                    header,
                ],
            ),
            (
                "Valid Values",
                vec![
                    vec![Cell::Text("parent_child")],
                    vec![Cell::Text("Parent")],
                    vec![Cell::Text("Child")],
                ],
            ),
        ],
    );
    path
}
