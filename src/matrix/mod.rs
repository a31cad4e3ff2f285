//! Vendor matrix parsing
//!
//! A matrix workbook lists color labels across the top row and size labels
//! down the first column. Two layouts exist:
//!
//! - `factory_grid`: colors in row 0, a factory code per color in row 1,
//!   sizes from row 2 down.
//! - `simple_grid`: colors in row 0, sizes from row 1 down, no factory codes.
//!
//! The layout comes from the profile; it is never guessed from the data.

use crate::error::{ListingError, ListingResult};
use crate::excel::{cell_text, ExcelImporter, SheetGrid};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Layout of the vendor matrix sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixShape {
    /// Colors, factory codes, then sizes
    FactoryGrid,
    /// Colors header, then sizes
    SimpleGrid,
}

impl MatrixShape {
    /// Zero-indexed row of the first size label
    pub fn first_size_row(&self) -> usize {
        match self {
            MatrixShape::FactoryGrid => 2,
            MatrixShape::SimpleGrid => 1,
        }
    }

    pub fn has_factory_codes(&self) -> bool {
        matches!(self, MatrixShape::FactoryGrid)
    }
}

/// Colors, sizes and factory codes extracted from a vendor matrix
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductMatrix {
    /// Title-cased color labels in column order, duplicates kept
    pub colors: Vec<String>,
    /// Size labels in row order, original case, duplicates kept
    pub sizes: Vec<String>,
    /// Two-character factory code per color (factory grid only)
    pub factory_codes: Option<HashMap<String, String>>,
}

impl ProductMatrix {
    pub fn new(colors: Vec<String>, sizes: Vec<String>) -> Self {
        Self {
            colors,
            sizes,
            factory_codes: None,
        }
    }

    pub fn with_factory_codes(mut self, codes: HashMap<String, String>) -> Self {
        self.factory_codes = Some(codes);
        self
    }

    pub fn factory_code(&self, color: &str) -> Option<&str> {
        self.factory_codes
            .as_ref()
            .and_then(|codes| codes.get(color))
            .map(String::as_str)
    }

    /// Number of child variants the matrix expands to
    pub fn variant_count(&self) -> usize {
        self.colors.len() * self.sizes.len()
    }
}

/// Read the first worksheet of `path` as a matrix of the given shape.
pub fn read_matrix(path: &Path, shape: MatrixShape) -> ListingResult<ProductMatrix> {
    let sheets = ExcelImporter::new(path).import()?;

    let sheet = sheets.into_iter().next().ok_or_else(|| {
        ListingError::InputFormat(format!("{} contains no worksheets", path.display()))
    })?;

    info!(sheet = %sheet.name, ?shape, "reading vendor matrix");
    parse_matrix(&sheet, shape)
}

/// Extract colors, sizes and factory codes from a sheet grid.
pub fn parse_matrix(sheet: &SheetGrid, shape: MatrixShape) -> ListingResult<ProductMatrix> {
    if sheet.is_empty() {
        return Err(ListingError::InputFormat(format!(
            "matrix sheet '{}' is empty",
            sheet.name
        )));
    }

    debug!(row = ?sheet.rows.first(), "raw color row");
    if shape.has_factory_codes() {
        debug!(row = ?sheet.rows.get(1), "raw factory code row");
    }

    let mut colors = Vec::new();
    let mut factory_codes = HashMap::new();

    for col in 1..sheet.width() {
        let Some(label) = cell_text(sheet.cell(0, col)) else {
            continue;
        };
        let color = title_case(label.trim());

        if shape.has_factory_codes() {
            if let Some(code) = cell_text(sheet.cell(1, col)) {
                factory_codes.insert(color.clone(), pad_factory_code(code.trim()));
            }
        }

        colors.push(color);
    }

    let sizes: Vec<String> = (shape.first_size_row()..sheet.height())
        .filter_map(|row| cell_text(sheet.cell(row, 0)))
        .collect();

    if colors.is_empty() || sizes.is_empty() {
        warn!(
            colors = colors.len(),
            sizes = sizes.len(),
            "matrix has no variants; only the parent record will be produced"
        );
    }

    let matrix = ProductMatrix::new(colors, sizes);
    Ok(if shape.has_factory_codes() {
        matrix.with_factory_codes(factory_codes)
    } else {
        matrix
    })
}

/// Left-pad a single ASCII digit to two characters (`7` → `07`)
pub fn pad_factory_code(code: &str) -> String {
    if code.len() == 1 && code.bytes().all(|b| b.is_ascii_digit()) {
        format!("0{}", code)
    } else {
        code.to_string()
    }
}

/// Capitalise the first letter of every word and lowercase the rest.
///
/// A word starts at any character not preceded by a cased letter, so
/// `"o'neil"` becomes `"O'Neil"`, `"3d blue"` becomes `"3D Blue"` and
/// `"黑色black"` becomes `"黑色Black"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_cased = false;

    for ch in text.chars() {
        if prev_is_cased {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        prev_is_cased = ch.is_lowercase() || ch.is_uppercase();
    }

    out
}
