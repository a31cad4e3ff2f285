//! Record synthesis: product matrix × profile → parent and child SKU records
//!
//! Pure and deterministic for a given clock. One parent record is emitted
//! first, followed by one child per (color, size) pair in color-major order.

use crate::clock::Clock;
use crate::config::{FieldSet, Profile};
use crate::matrix::ProductMatrix;
use crate::types::{FieldValue, RecordKind, SkuRecord};
use chrono::{Days, NaiveDate};
use tracing::debug;

/// Variation theme shared by every record
pub const VARIATION_THEME: &str = "SizeName-ColorName";

/// Literal replacements applied, in order, to whitespace-free size labels.
/// `ProMax` must precede `Pro`.
const SIZE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("iPhone", "IP"),
    ("ProMax", "PM"),
    ("Pro", "P"),
    ("Plus", "+"),
];

/// Shorten a size label: drop all whitespace, then abbreviate model tokens.
///
/// ```
/// use sku_forge::synth::simplify_size;
///
/// assert_eq!(simplify_size("iPhone 14 Pro Max"), "IP14PM");
/// assert_eq!(simplify_size("iPhone 15 Plus"), "IP15+");
/// ```
pub fn simplify_size(label: &str) -> String {
    let compact: String = label.chars().filter(|c| !c.is_whitespace()).collect();
    SIZE_ABBREVIATIONS
        .iter()
        .fold(compact, |acc, (full, short)| acc.replace(full, short))
}

/// Identity key of the parent record
pub fn base_sku(theme: &str) -> String {
    format!("{}-BASE", theme)
}

/// Identity key of a child record; contains no spaces
pub fn child_sku(theme: &str, color: &str, simplified_size: &str) -> String {
    format!("{}-{}-{}", theme, color, simplified_size).replace(' ', "")
}

/// Expands a product matrix into upload records for one profile
pub struct RecordSynthesizer<'a> {
    profile: &'a Profile,
    clock: &'a dyn Clock,
}

impl<'a> RecordSynthesizer<'a> {
    pub fn new(profile: &'a Profile, clock: &'a dyn Clock) -> Self {
        Self { profile, clock }
    }

    /// Parent first, then children color-major, size-minor.
    /// Always `1 + colors × sizes` records.
    pub fn synthesize(&self, matrix: &ProductMatrix) -> Vec<SkuRecord> {
        let (sale_from, sale_end) = self.sale_window();
        let mut records = Vec::with_capacity(1 + matrix.variant_count());
        records.push(self.parent_record());

        for color in &matrix.colors {
            let factory_code = matrix.factory_code(color);
            for size in &matrix.sizes {
                records.push(self.child_record(color, size, factory_code, sale_from, sale_end));
            }
        }

        debug!(
            profile = %self.profile.name,
            records = records.len(),
            "synthesized records"
        );
        records
    }

    /// The single listing-family record. Carries shared constants only.
    pub fn parent_record(&self) -> SkuRecord {
        let profile = self.profile;
        let mut record = SkuRecord::new(RecordKind::Parent);

        let item_name = if profile.parent_name_includes_theme {
            format!("{} - {}", profile.title, profile.theme)
        } else {
            profile.title.clone()
        };

        record.set("item_name", Some(item_name.into()));
        record.set("item_sku", Some(base_sku(&profile.theme).into()));
        record.set("parent_child", Some(RecordKind::Parent.as_str().into()));
        apply_constants(&mut record, &profile.parent_fields);
        record.set("variation_theme", Some(VARIATION_THEME.into()));
        record
    }

    /// One purchasable variant
    pub fn child_record(
        &self,
        color: &str,
        size: &str,
        factory_code: Option<&str>,
        sale_from: NaiveDate,
        sale_end: NaiveDate,
    ) -> SkuRecord {
        let profile = self.profile;
        let simplified = simplify_size(size);
        let mut record = SkuRecord::new(RecordKind::Child);

        record.set(
            "item_sku",
            Some(child_sku(&profile.theme, color, &simplified).into()),
        );
        record.set("parent_child", Some(RecordKind::Child.as_str().into()));
        record.set("parent_sku", Some(base_sku(&profile.theme).into()));
        record.set(
            "item_name",
            Some(self.child_name(color, &simplified, factory_code).into()),
        );
        record.set("color_name", Some(color.into()));
        record.set("color_map", Some(color.into()));
        record.set("size_name", Some(simplified.as_str().into()));
        record.set("compatible_phone_models1", Some(size.into()));
        record.set("theme", Some(profile.theme.as_str().into()));
        record.set(
            "standard_price",
            Some(profile.pricing.standard_price.into()),
        );
        record.set("sale_price", Some(profile.pricing.sale_price.into()));
        record.set("list_price", profile.pricing.list_price.map(FieldValue::from));
        record.set("sale_from_date", Some(sale_from.into()));
        record.set("sale_end_date", Some(sale_end.into()));
        record.set("variation_theme", Some(VARIATION_THEME.into()));

        apply_constants(&mut record, &profile.child_fields);
        if let Some(dimensions) = &profile.dimensions {
            apply_constants(&mut record, dimensions);
        }

        record
    }

    /// `"{prefix} - [{code} - ]{theme} - {color} - {size}"`
    fn child_name(&self, color: &str, simplified_size: &str, factory_code: Option<&str>) -> String {
        let profile = self.profile;
        match factory_code {
            Some(code) => format!(
                "{} - {} - {} - {} - {}",
                profile.child_name_prefix, code, profile.theme, color, simplified_size
            ),
            None => format!(
                "{} - {} - {} - {}",
                profile.child_name_prefix, profile.theme, color, simplified_size
            ),
        }
    }

    /// First and last day of the sale, relative to the clock's today
    pub fn sale_window(&self) -> (NaiveDate, NaiveDate) {
        let today = self.clock.today();
        let window = self.profile.sale_window;
        let from = today
            .checked_sub_days(Days::new(window.starts_days_before.into()))
            .unwrap_or(NaiveDate::MIN);
        let end = today
            .checked_add_days(Days::new(window.ends_days_after.into()))
            .unwrap_or(NaiveDate::MAX);
        (from, end)
    }
}

/// Copy profile constants onto a record. Synthesized fields take precedence
/// and absent constants are skipped.
fn apply_constants(record: &mut SkuRecord, fields: &FieldSet) {
    for (name, value) in fields.iter() {
        record.set_if_absent(name, value.cloned());
    }
}
