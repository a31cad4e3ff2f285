//! End-to-end conversion: matrix → records → template workbook
//!
//! All inputs are read and every workbook is built in memory before the
//! first file is written, so a failed run leaves no partial output.

use crate::clock::Clock;
use crate::config::Profile;
use crate::error::ListingResult;
use crate::excel::{ExcelExporter, TemplateWorkbook};
use crate::matrix::read_matrix;
use crate::synth::RecordSynthesizer;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::info;

/// Everything one conversion run needs
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub profile: Profile,
    pub input: PathBuf,
    pub template: PathBuf,
    pub output_dir: PathBuf,
    pub write_debug: bool,
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub records: usize,
    pub colors: usize,
    pub sizes: usize,
    pub common_columns: BTreeSet<String>,
    pub output_path: PathBuf,
    pub debug_path: Option<PathBuf>,
}

/// Upload and debug file paths derived from the input file name
pub fn output_paths(input: &Path, output_dir: &Path) -> (PathBuf, PathBuf) {
    let base_name = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "input".to_string());

    (
        output_dir.join(format!("generated_amazon_upload_{}.xlsx", base_name)),
        output_dir.join(format!("generated_skus_{}.xlsx", base_name)),
    )
}

/// Run a full conversion
pub fn run_conversion(
    request: &ConversionRequest,
    clock: &dyn Clock,
) -> ListingResult<ConversionReport> {
    let profile = &request.profile;

    let matrix = read_matrix(&request.input, profile.input_shape)?;
    info!(
        colors = matrix.colors.len(),
        sizes = matrix.sizes.len(),
        "parsed vendor matrix"
    );

    let template = TemplateWorkbook::load(&request.template)?;

    let records = RecordSynthesizer::new(profile, clock).synthesize(&matrix);
    let projected = template.project(&records);
    info!(
        records = records.len(),
        common_columns = projected.common_columns.len(),
        "projected records onto template"
    );

    let mut upload = ExcelExporter::upload_workbook(&template, &projected)?;
    let mut debug = if request.write_debug {
        Some(ExcelExporter::debug_workbook(&records)?)
    } else {
        None
    };

    let (output_path, debug_path) = output_paths(&request.input, &request.output_dir);

    let debug_path = match debug.as_mut() {
        Some(workbook) => {
            ExcelExporter::save(workbook, &debug_path)?;
            info!(path = %debug_path.display(), "wrote debug workbook");
            Some(debug_path)
        }
        None => None,
    };

    ExcelExporter::save(&mut upload, &output_path)?;
    info!(path = %output_path.display(), "wrote upload workbook");

    Ok(ConversionReport {
        records: records.len(),
        colors: matrix.colors.len(),
        sizes: matrix.sizes.len(),
        common_columns: projected.common_columns,
        output_path,
        debug_path,
    })
}
