//! Excel exporter implementation

use super::importer::SheetGrid;
use super::template::{ProjectedTemplate, TemplateWorkbook, TEMPLATE_SHEET};
use crate::error::{ListingError, ListingResult};
use crate::types::SkuRecord;
use calamine::Data;
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;

/// Sheet name of the debug dump
pub const DEBUG_SHEET: &str = "SKUs";

fn write_error(e: rust_xlsxwriter::XlsxError) -> ListingError {
    ListingError::WriteFailure(e.to_string())
}

/// Builds output workbooks in memory; nothing touches disk until `save`
pub struct ExcelExporter;

impl ExcelExporter {
    /// Rebuild the template workbook with the projected `Template` sheet.
    ///
    /// Sheet order follows the source. Every other sheet is copied as values.
    pub fn upload_workbook(
        template: &TemplateWorkbook,
        projected: &ProjectedTemplate,
    ) -> ListingResult<Workbook> {
        let mut workbook = Workbook::new();

        for sheet in template.sheets() {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&sheet.name).map_err(write_error)?;

            if sheet.name == TEMPLATE_SHEET {
                Self::write_projected(worksheet, projected)?;
            } else {
                Self::write_grid(worksheet, sheet)?;
            }
        }

        Ok(workbook)
    }

    /// Flat dump of every record: header is the union of field names in
    /// first-seen order, values are written as text.
    pub fn debug_workbook(records: &[SkuRecord]) -> ListingResult<Workbook> {
        let mut columns: Vec<&str> = Vec::new();
        for record in records {
            for name in record.field_names() {
                if !columns.contains(&name) {
                    columns.push(name);
                }
            }
        }

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(DEBUG_SHEET).map_err(write_error)?;

        for (col_idx, name) in columns.iter().enumerate() {
            worksheet
                .write_string(0, col_idx as u16, *name)
                .map_err(write_error)?;
        }

        for (row_idx, record) in records.iter().enumerate() {
            let row = (row_idx + 1) as u32;
            for (col_idx, name) in columns.iter().enumerate() {
                if let Some(value) = record.get(name) {
                    let text = value.render();
                    if !text.is_empty() {
                        worksheet
                            .write_string(row, col_idx as u16, &text)
                            .map_err(write_error)?;
                    }
                }
            }
        }

        Ok(workbook)
    }

    /// Save a built workbook
    pub fn save(workbook: &mut Workbook, path: &Path) -> ListingResult<()> {
        workbook.save(path).map_err(|e| {
            ListingError::WriteFailure(format!("Failed to save {}: {}", path.display(), e))
        })
    }

    /// Header at row 0, data rows from row 1
    fn write_projected(worksheet: &mut Worksheet, projected: &ProjectedTemplate) -> ListingResult<()> {
        for (col_idx, name) in projected.columns.iter().enumerate() {
            if !name.is_empty() {
                worksheet
                    .write_string(0, col_idx as u16, name)
                    .map_err(write_error)?;
            }
        }

        for (row_idx, row) in projected.rows.iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                Self::write_cell(worksheet, (row_idx + 1) as u32, col_idx as u16, cell)?;
            }
        }

        Ok(())
    }

    fn write_grid(worksheet: &mut Worksheet, sheet: &SheetGrid) -> ListingResult<()> {
        for (row_idx, row) in sheet.rows.iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                Self::write_cell(worksheet, row_idx as u32, col_idx as u16, cell)?;
            }
        }
        Ok(())
    }

    /// Write a single cell value based on its type. Blank cells and empty
    /// strings are left unwritten.
    fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: &Data) -> ListingResult<()> {
        match cell {
            Data::Empty | Data::Error(_) => {}
            Data::String(s) if s.is_empty() => {}
            Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
                worksheet.write_string(row, col, s).map_err(write_error)?;
            }
            Data::Float(f) => {
                worksheet.write_number(row, col, *f).map_err(write_error)?;
            }
            Data::Int(i) => {
                worksheet
                    .write_number(row, col, *i as f64)
                    .map_err(write_error)?;
            }
            Data::Bool(b) => {
                worksheet.write_boolean(row, col, *b).map_err(write_error)?;
            }
            Data::DateTime(dt) => {
                worksheet
                    .write_number(row, col, dt.as_f64())
                    .map_err(write_error)?;
            }
        }
        Ok(())
    }
}
