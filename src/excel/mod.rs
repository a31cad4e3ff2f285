//! Excel import/export module
//!
//! - Import: any workbook → in-memory sheet grids (values only)
//! - Template: marketplace template loading and record projection
//! - Export: upload workbook and debug dump (.xlsx)

mod exporter;
mod importer;
mod template;

pub use exporter::{ExcelExporter, DEBUG_SHEET};
pub use importer::{cell_text, ExcelImporter, SheetGrid};
pub use template::{ProjectedTemplate, TemplateWorkbook, HEADER_ROW, TEMPLATE_SHEET};
