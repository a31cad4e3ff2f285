//! Profile loading tests

use sku_forge::config::{builtin_profile_names, load_profile, SaleWindow};
use sku_forge::matrix::MatrixShape;
use sku_forge::ListingError;
use tempfile::TempDir;

const CUSTOM: &str = r#"
name: garden
title: Garden Party Cases
theme: Garden
input_shape: factory_grid
child_name_prefix: Floral Case
pricing:
  standard_price: 19
  sale_price: 14.5
  list_price: ~
sale_window:
  starts_days_before: 0
  ends_days_after: 30
parent_fields:
  brand_name: Bloom
child_fields:
  brand_name: Bloom
dimensions: ~
"#;

#[test]
fn test_builtin_names() {
    assert_eq!(builtin_profile_names(), vec!["multi", "city"]);
}

#[test]
fn test_load_custom_profile_from_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("garden.yaml");
    std::fs::write(&path, CUSTOM).unwrap();

    let profile = load_profile(path.to_str().unwrap()).unwrap();
    assert_eq!(profile.name, "garden");
    assert_eq!(profile.input_shape, MatrixShape::FactoryGrid);
    assert_eq!(profile.child_name_prefix, "Floral Case");
    assert_eq!(profile.pricing.standard_price, 19.0);
    assert_eq!(profile.pricing.list_price, None);
    assert_eq!(
        profile.sale_window,
        SaleWindow {
            starts_days_before: 0,
            ends_days_after: 30
        }
    );
    assert!(profile.dimensions.is_none());
    assert!(profile.input_file.is_none());
}

#[test]
fn test_missing_profile_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.yaml");

    let result = load_profile(path.to_str().unwrap());
    assert!(matches!(result, Err(ListingError::Config(_))));
}

#[test]
fn test_profile_missing_required_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.yml");
    std::fs::write(&path, "name: broken\ntheme: B\n").unwrap();

    let err = load_profile(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, ListingError::Config(_)));
    assert!(err.to_string().contains("validation failed"));
}

#[test]
fn test_profile_rejects_nested_field_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested.yaml");
    let yaml = CUSTOM.replace("  brand_name: Bloom\ndimensions", "  brand_name: [a, b]\ndimensions");
    std::fs::write(&path, yaml).unwrap();

    assert!(load_profile(path.to_str().unwrap()).is_err());
}
