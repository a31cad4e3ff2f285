use crate::clock::{Clock, SystemClock};
use crate::config::{self, Profile, DEFAULT_TEMPLATE_FILE};
use crate::error::{ListingError, ListingResult};
use crate::matrix::read_matrix;
use crate::pipeline::{run_conversion, ConversionRequest};
use crate::synth::RecordSynthesizer;
use crate::types::{RecordKind, SkuRecord};
use colored::Colorize;
use std::path::PathBuf;

/// Input path from the command line, else the profile's default
fn resolve_input(profile: &Profile, input: Option<PathBuf>) -> ListingResult<PathBuf> {
    input.or_else(|| profile.input_file.clone()).ok_or_else(|| {
        ListingError::Config(format!(
            "Profile '{}' has no input_file; pass --input",
            profile.name
        ))
    })
}

/// Execute the convert command
pub fn convert(
    profile: String,
    input: Option<PathBuf>,
    template: Option<PathBuf>,
    output_dir: PathBuf,
    no_debug: bool,
) -> ListingResult<()> {
    convert_with_clock(profile, input, template, output_dir, no_debug, &SystemClock)
}

/// `convert` with an explicit time source
pub fn convert_with_clock(
    profile: String,
    input: Option<PathBuf>,
    template: Option<PathBuf>,
    output_dir: PathBuf,
    no_debug: bool,
    clock: &dyn Clock,
) -> ListingResult<()> {
    let profile = config::load_profile(&profile)?;
    let input = resolve_input(&profile, input)?;
    let template = template.unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_FILE));

    println!("{}", "🔥 SKU Forge - Building upload workbook".bold().green());
    println!("   Profile:  {}", profile.name.bright_blue().bold());
    println!("   Input:    {}", input.display());
    println!("   Template: {}", template.display());
    println!();

    let request = ConversionRequest {
        profile,
        input,
        template,
        output_dir,
        write_debug: !no_debug,
    };

    let report = run_conversion(&request, clock)?;

    println!("{}", "✅ Conversion complete".bold().green());
    println!(
        "   {} colors × {} sizes → {} records",
        report.colors, report.sizes, report.records
    );
    println!(
        "   {} template columns filled",
        report.common_columns.len().to_string().cyan()
    );
    println!("   Upload file: {}", report.output_path.display().to_string().bold());
    if let Some(debug_path) = &report.debug_path {
        println!("   SKU dump:    {}", debug_path.display());
    }

    Ok(())
}

/// Execute the preview command - synthesize records without touching the template
pub fn preview(profile: String, input: Option<PathBuf>, json: bool) -> ListingResult<()> {
    let profile = config::load_profile(&profile)?;
    let input = resolve_input(&profile, input)?;

    let matrix = read_matrix(&input, profile.input_shape)?;
    let records = RecordSynthesizer::new(&profile, &SystemClock).synthesize(&matrix);

    if json {
        let rows: Vec<serde_json::Value> = records.iter().map(record_to_json).collect();
        let text = serde_json::to_string_pretty(&rows)
            .map_err(|e| ListingError::Config(format!("Failed to encode preview: {}", e)))?;
        println!("{}", text);
        return Ok(());
    }

    println!("{}", "🔍 SKU Forge - Preview".bold().green());
    println!("   Profile: {}", profile.name.bright_blue().bold());
    println!("   Input:   {}\n", input.display());

    for record in &records {
        let sku = record.sku().unwrap_or("?");
        let name = record
            .get("item_name")
            .map(|v| v.render())
            .unwrap_or_default();
        match record.kind() {
            RecordKind::Parent => println!("   📦 {}  {}", sku.bright_blue().bold(), name),
            RecordKind::Child => println!("      {}  {}", sku.cyan(), name),
        }
    }

    println!(
        "\n   {} records ({} children)",
        records.len(),
        records.len().saturating_sub(1)
    );
    Ok(())
}

fn record_to_json(record: &SkuRecord) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = record
        .fields()
        .iter()
        .map(|(name, value)| (name.clone(), serde_json::Value::String(value.render())))
        .collect();
    serde_json::Value::Object(map)
}

/// Execute the profiles command - list built-ins or print one
pub fn profiles(show: Option<String>) -> ListingResult<()> {
    if let Some(name) = show {
        let source = config::builtin_profile_source(&name).ok_or_else(|| {
            ListingError::Config(format!(
                "Unknown profile '{}'. Built-in profiles: {}",
                name,
                config::builtin_profile_names().join(", ")
            ))
        })?;
        print!("{}", source);
        return Ok(());
    }

    println!("{}", "📋 Built-in profiles".bold().green());
    for name in config::builtin_profile_names() {
        let profile = config::load_profile(name)?;
        println!(
            "   {:<8} theme={:<8} shape={:?}",
            name.bright_blue().bold(),
            profile.theme,
            profile.input_shape
        );
    }
    Ok(())
}
