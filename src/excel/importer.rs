//! Excel importer implementation - workbook → in-memory sheet grids

use crate::error::{ListingError, ListingResult};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::{Path, PathBuf};

static EMPTY: Data = Data::Empty;

/// Values of one worksheet, addressed by absolute (row, col) from A1
#[derive(Debug, Clone, PartialEq)]
pub struct SheetGrid {
    pub name: String,
    pub rows: Vec<Vec<Data>>,
}

impl SheetGrid {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Data>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Build a grid from a calamine range.
    ///
    /// calamine ranges start at the first used cell; leading blank rows and
    /// columns are restored so indices match the sheet as a user sees it.
    pub fn from_range(name: impl Into<String>, range: &Range<Data>) -> Self {
        let (Some(start), Some(end)) = (range.start(), range.end()) else {
            return Self::new(name, Vec::new());
        };

        let height = end.0 as usize + 1;
        let width = end.1 as usize + 1;
        let mut rows = vec![vec![Data::Empty; width]; height];

        for (r, row) in range.rows().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                rows[start.0 as usize + r][start.1 as usize + c] = cell.clone();
            }
        }

        Self::new(name, rows)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows
            .iter()
            .all(|row| row.iter().all(|cell| matches!(cell, Data::Empty)))
    }

    /// Cell at (row, col); out-of-bounds cells read as empty
    pub fn cell(&self, row: usize, col: usize) -> &Data {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }
}

/// Excel importer reading every worksheet of a workbook as plain values
pub struct ExcelImporter {
    path: PathBuf,
}

impl ExcelImporter {
    /// Create a new Excel importer
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all worksheets in workbook order.
    ///
    /// An unreadable workbook is an `InputFormat` error; callers loading
    /// something other than a vendor matrix remap it.
    pub fn import(&self) -> ListingResult<Vec<SheetGrid>> {
        let mut workbook = open_workbook_auto(&self.path).map_err(|e| {
            ListingError::InputFormat(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let sheet_names = workbook.sheet_names().to_vec();
        let mut sheets = Vec::with_capacity(sheet_names.len());

        for sheet_name in sheet_names {
            let range = workbook
                .worksheet_range(&sheet_name)
                .map_err(|e| {
                    ListingError::InputFormat(format!(
                        "Failed to read sheet '{}': {}",
                        sheet_name, e
                    ))
                })?;
            sheets.push(SheetGrid::from_range(sheet_name, &range));
        }

        Ok(sheets)
    }
}

/// Text of a cell, or `None` when the cell is blank.
///
/// Whitespace-only strings and error cells count as blank. Whole floats
/// render without a fractional part (`14.0` → `14`).
pub fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => {
            if s.trim().is_empty() {
                None
            } else {
                Some(s.clone())
            }
        }
        Data::Float(f) => {
            if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
                Some(format!("{}", *f as i64))
            } else {
                Some(f.to_string())
            }
        }
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
        other => Some(other.to_string()),
    }
}
