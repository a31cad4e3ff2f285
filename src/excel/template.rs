//! Marketplace template loading and record projection

use super::importer::{cell_text, ExcelImporter, SheetGrid};
use crate::error::{ListingError, ListingResult};
use crate::types::SkuRecord;
use calamine::Data;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

/// Sheet holding the upload grid
pub const TEMPLATE_SHEET: &str = "Template";

/// Zero-indexed row holding the column names; rows above it are template metadata
pub const HEADER_ROW: usize = 2;

/// A marketplace template workbook with every sheet loaded as values
#[derive(Debug, Clone)]
pub struct TemplateWorkbook {
    sheets: Vec<SheetGrid>,
    template_index: usize,
}

impl TemplateWorkbook {
    /// Load a template workbook. A missing file or a workbook without a
    /// `Template` sheet is a `TemplateMissing` error.
    pub fn load(path: &Path) -> ListingResult<Self> {
        if !path.exists() {
            return Err(ListingError::TemplateMissing(format!(
                "template file not found: {}",
                path.display()
            )));
        }

        let sheets = ExcelImporter::new(path).import().map_err(|err| match err {
            ListingError::InputFormat(msg) => ListingError::TemplateMissing(msg),
            other => other,
        })?;
        info!(path = %path.display(), sheets = sheets.len(), "loaded template workbook");
        Self::from_sheets(sheets)
    }

    pub fn from_sheets(sheets: Vec<SheetGrid>) -> ListingResult<Self> {
        let template_index = sheets
            .iter()
            .position(|s| s.name == TEMPLATE_SHEET)
            .ok_or_else(|| {
                ListingError::TemplateMissing(format!(
                    "workbook has no '{}' sheet",
                    TEMPLATE_SHEET
                ))
            })?;

        Ok(Self {
            sheets,
            template_index,
        })
    }

    /// All sheets in workbook order
    pub fn sheets(&self) -> &[SheetGrid] {
        &self.sheets
    }

    pub fn template_sheet(&self) -> &SheetGrid {
        &self.sheets[self.template_index]
    }

    /// Column names from the header row; blank header cells yield `""`
    pub fn columns(&self) -> Vec<String> {
        let sheet = self.template_sheet();
        (0..sheet.width())
            .map(|col| cell_text(sheet.cell(HEADER_ROW, col)).unwrap_or_default())
            .collect()
    }

    /// Rows below the header
    pub fn data_rows(&self) -> &[Vec<Data>] {
        self.template_sheet()
            .rows
            .get(HEADER_ROW + 1..)
            .unwrap_or(&[])
    }

    /// Write records into the template grid.
    ///
    /// Only columns named both in the header and on at least one record take
    /// part. Within those, a record row holds the record's value or is left
    /// blank, whatever the template had there before. When the template has
    /// fewer data rows than records, its rows are discarded and exactly one
    /// blank row per record is allocated.
    pub fn project(&self, records: &[SkuRecord]) -> ProjectedTemplate {
        let columns = self.columns();
        let width = columns.len();

        let record_fields: HashSet<&str> =
            records.iter().flat_map(SkuRecord::field_names).collect();

        let mut column_index: HashMap<&str, usize> = HashMap::new();
        for (idx, name) in columns.iter().enumerate() {
            if !name.is_empty() && record_fields.contains(name.as_str()) {
                column_index.entry(name.as_str()).or_insert(idx);
            }
        }

        let existing = self.data_rows();
        let mut rows: Vec<Vec<Data>> = if existing.len() < records.len() {
            vec![vec![Data::Empty; width]; records.len()]
        } else {
            existing
                .iter()
                .map(|row| {
                    let mut row = row.clone();
                    if row.len() < width {
                        row.resize(width, Data::Empty);
                    }
                    row
                })
                .collect()
        };

        for (row, record) in rows.iter_mut().zip(records) {
            for (&name, &col) in &column_index {
                row[col] = record
                    .get(name)
                    .map_or(Data::Empty, |value| Data::String(value.render()));
            }
        }

        let common_columns: BTreeSet<String> =
            column_index.keys().map(|name| name.to_string()).collect();
        debug!(common = ?common_columns, "template columns matched by records");

        ProjectedTemplate {
            columns,
            rows,
            common_columns,
        }
    }
}

/// The `Template` sheet after projection, header first
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedTemplate {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Data>>,
    pub common_columns: BTreeSet<String>,
}

impl ProjectedTemplate {
    /// Cell text of (data row, column name), `None` when blank
    pub fn value(&self, row: usize, column: &str) -> Option<String> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row).and_then(|r| r.get(col)).and_then(cell_text)
    }
}
