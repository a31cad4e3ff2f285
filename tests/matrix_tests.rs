//! Vendor matrix reading tests

mod common;

use chrono::NaiveDate;
use common::{factory_matrix, simple_matrix, write_workbook, Cell};
use pretty_assertions::assert_eq;
use sku_forge::clock::FixedClock;
use sku_forge::config::load_profile;
use sku_forge::matrix::{read_matrix, MatrixShape};
use sku_forge::synth::RecordSynthesizer;
use sku_forge::{FieldValue, ListingError};
use tempfile::TempDir;

#[test]
fn test_read_factory_grid() {
    let dir = TempDir::new().unwrap();
    let path = factory_matrix(dir.path());

    let matrix = read_matrix(&path, MatrixShape::FactoryGrid).unwrap();
    assert_eq!(matrix.colors, vec!["Red", "Blue"]);
    assert_eq!(matrix.sizes, vec!["iPhone 14", "iPhone 14 Pro"]);
    assert_eq!(matrix.factory_code("Red"), Some("03"));
    assert_eq!(matrix.factory_code("Blue"), Some("12"));
}

#[test]
fn test_read_simple_grid() {
    let dir = TempDir::new().unwrap();
    let path = simple_matrix(dir.path());

    let matrix = read_matrix(&path, MatrixShape::SimpleGrid).unwrap();
    assert_eq!(matrix.colors, vec!["Red", "Blue"]);
    assert_eq!(matrix.sizes, vec!["iPhone 14", "iPhone 14 Pro"]);
    assert!(matrix.factory_codes.is_none());
}

#[test]
fn test_blank_color_cell_is_skipped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gaps.xlsx");
    write_workbook(
        &path,
        &[(
            "Sheet1",
            vec![
                vec![Cell::Text("Model"), Cell::Text("Red"), Cell::Blank, Cell::Text("Blue")],
                vec![Cell::Text("iPhone 14")],
                vec![Cell::Blank],
                vec![Cell::Text("iPhone 15")],
            ],
        )],
    );

    let matrix = read_matrix(&path, MatrixShape::SimpleGrid).unwrap();
    assert_eq!(matrix.colors, vec!["Red", "Blue"]);
    assert_eq!(matrix.sizes, vec!["iPhone 14", "iPhone 15"]);
}

#[test]
fn test_factory_code_follows_its_column_past_blank_colors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("codes.xlsx");
    write_workbook(
        &path,
        &[(
            "Sheet1",
            vec![
                vec![Cell::Blank, Cell::Blank, Cell::Text("green")],
                vec![Cell::Blank, Cell::Num(1.0), Cell::Num(7.0)],
                vec![Cell::Text("iPhone 13")],
            ],
        )],
    );

    let matrix = read_matrix(&path, MatrixShape::FactoryGrid).unwrap();
    assert_eq!(matrix.colors, vec!["Green"]);
    assert_eq!(matrix.factory_code("Green"), Some("07"));
}

#[test]
fn test_blank_factory_code_cell_means_no_code() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("uncoded.xlsx");
    write_workbook(
        &path,
        &[(
            "Sheet1",
            vec![
                vec![Cell::Blank, Cell::Text("red"), Cell::Text("blue")],
                vec![Cell::Blank, Cell::Blank, Cell::Num(5.0)],
                vec![Cell::Text("iPhone 14")],
            ],
        )],
    );

    let matrix = read_matrix(&path, MatrixShape::FactoryGrid).unwrap();
    assert_eq!(matrix.colors, vec!["Red", "Blue"]);
    assert_eq!(matrix.factory_code("Red"), None);
    assert_eq!(matrix.factory_code("Blue"), Some("05"));

    let profile = load_profile("multi").unwrap();
    let clock = FixedClock(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    let records = RecordSynthesizer::new(&profile, &clock).synthesize(&matrix);

    assert_eq!(records.len(), 3);
    assert_eq!(
        records[1].get("item_name"),
        Some(&FieldValue::from("Phone Case - Multi - Red - IP14"))
    );
    assert_eq!(
        records[2].get("item_name"),
        Some(&FieldValue::from("Phone Case - 05 - Multi - Blue - IP14"))
    );
}

#[test]
fn test_duplicates_are_kept() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dups.xlsx");
    write_workbook(
        &path,
        &[(
            "Sheet1",
            vec![
                vec![Cell::Text("Model"), Cell::Text("red"), Cell::Text("RED")],
                vec![Cell::Text("iPhone 14")],
                vec![Cell::Text("iPhone 14")],
            ],
        )],
    );

    let matrix = read_matrix(&path, MatrixShape::SimpleGrid).unwrap();
    assert_eq!(matrix.colors, vec!["Red", "Red"]);
    assert_eq!(matrix.sizes.len(), 2);
}

#[test]
fn test_missing_file_is_input_format_error() {
    let dir = TempDir::new().unwrap();
    let result = read_matrix(&dir.path().join("nope.xlsx"), MatrixShape::SimpleGrid);
    assert!(matches!(result, Err(ListingError::InputFormat(_))));
}

#[test]
fn test_empty_workbook_is_input_format_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.xlsx");
    write_workbook(&path, &[("Sheet1", vec![])]);

    let result = read_matrix(&path, MatrixShape::FactoryGrid);
    assert!(matches!(result, Err(ListingError::InputFormat(_))));
}
