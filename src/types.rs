use chrono::NaiveDate;
use std::fmt;

//==============================================================================
// Field Values
//==============================================================================

/// A single value stored on a SKU record
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Date(NaiveDate),
}

impl FieldValue {
    /// Render the value the way it appears in a spreadsheet cell.
    ///
    /// Integral numbers keep one decimal place (`13.0`), other numbers use the
    /// shortest round-trip form (`16.9`), dates are `YYYY-MM-DD`.
    pub fn render(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => format_number(*n),
            FieldValue::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        format!("{:.1}", n)
    } else {
        n.to_string()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}

//==============================================================================
// SKU Records
//==============================================================================

/// Whether a record is the listing family or a purchasable variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Parent,
    Child,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Parent => "Parent",
            RecordKind::Child => "Child",
        }
    }
}

/// One row of the bulk upload: an ordered set of named fields.
///
/// Absent values are never stored, so `contains` reflects exactly the fields
/// the record defines.
#[derive(Debug, Clone, PartialEq)]
pub struct SkuRecord {
    kind: RecordKind,
    fields: Vec<(String, FieldValue)>,
}

impl SkuRecord {
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            fields: Vec::new(),
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Set a field, replacing any previous value under the same name.
    /// `None` leaves the record untouched.
    pub fn set(&mut self, name: &str, value: Option<FieldValue>) {
        let Some(value) = value else {
            return;
        };
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    /// Set a field only if the record does not define it yet.
    pub fn set_if_absent(&mut self, name: &str, value: Option<FieldValue>) {
        if !self.contains(name) {
            self.set(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Field names in insertion order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The record's `item_sku`, if set
    pub fn sku(&self) -> Option<&str> {
        self.get("item_sku").and_then(FieldValue::as_text)
    }
}
