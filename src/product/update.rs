// Field update commands and the reducer that applies them

use std::str::FromStr;

use crate::address::{AddressField, Side};
use crate::product::errors::FieldPathError;
use crate::product::types::{Category, DimensionRecord, ProductRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopField {
    Name,
    OrderNumber,
    Price,
    Category,
    Brand,
    Sku,
    Quantity,
}

impl TopField {
    pub const ALL: [TopField; 7] = [
        TopField::Name,
        TopField::OrderNumber,
        TopField::Price,
        TopField::Category,
        TopField::Brand,
        TopField::Sku,
        TopField::Quantity,
    ];

    pub fn key(self) -> &'static str {
        match self {
            TopField::Name => "name",
            TopField::OrderNumber => "orderNumber",
            TopField::Price => "price",
            TopField::Category => "category",
            TopField::Brand => "brand",
            TopField::Sku => "sku",
            TopField::Quantity => "quantity",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, TopField::Price | TopField::Quantity)
    }
}

impl FromStr for TopField {
    type Err = FieldPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TopField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| FieldPathError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionField {
    Length,
    Width,
    Height,
    Weight,
    Unit,
    WeightUnit,
}

impl DimensionField {
    pub const ALL: [DimensionField; 6] = [
        DimensionField::Length,
        DimensionField::Width,
        DimensionField::Height,
        DimensionField::Weight,
        DimensionField::Unit,
        DimensionField::WeightUnit,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DimensionField::Length => "length",
            DimensionField::Width => "width",
            DimensionField::Height => "height",
            DimensionField::Weight => "weight",
            DimensionField::Unit => "unit",
            DimensionField::WeightUnit => "weightUnit",
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, DimensionField::Unit | DimensionField::WeightUnit)
    }
}

impl FromStr for DimensionField {
    type Err = FieldPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DimensionField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| FieldPathError::UnknownField(s.to_string()))
    }
}

/// One edit to the product record, carrying the raw input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    SetTopLevel(TopField, String),
    SetDimension(DimensionField, String),
    SetAddress(Side, AddressField, String),
}

impl FieldUpdate {
    /// Resolve a dotted path such as `dimensions.weight` or `toAddress.city`.
    pub fn from_path(path: &str, value: impl Into<String>) -> Result<Self, FieldPathError> {
        let value = value.into();
        match path.split_once('.') {
            None => Ok(FieldUpdate::SetTopLevel(path.parse()?, value)),
            Some(("dimensions", field)) => Ok(FieldUpdate::SetDimension(field.parse()?, value)),
            Some((prefix, field)) => match Side::from_key(prefix) {
                Some(side) => Ok(FieldUpdate::SetAddress(side, field.parse()?, value)),
                None => Err(FieldPathError::UnknownPath(path.to_string())),
            },
        }
    }

    /// Parse a `path=value` assignment as typed on the command line.
    pub fn parse_assignment(assignment: &str) -> Result<Self, FieldPathError> {
        let (path, value) = assignment
            .split_once('=')
            .ok_or_else(|| FieldPathError::MalformedAssignment(assignment.to_string()))?;
        Self::from_path(path.trim(), value)
    }

    /// Dotted path of the edited field, the same key validation errors use.
    pub fn path(&self) -> String {
        match self {
            FieldUpdate::SetTopLevel(field, _) => field.key().to_string(),
            FieldUpdate::SetDimension(field, _) => format!("dimensions.{}", field.key()),
            FieldUpdate::SetAddress(side, field, _) => format!("{}.{}", side.key(), field.key()),
        }
    }

    pub fn raw_value(&self) -> &str {
        match self {
            FieldUpdate::SetTopLevel(_, value)
            | FieldUpdate::SetDimension(_, value)
            | FieldUpdate::SetAddress(_, _, value) => value,
        }
    }
}

/// Apply one update and return the next record.
pub fn reduce(mut record: ProductRecord, update: &FieldUpdate) -> ProductRecord {
    match update {
        FieldUpdate::SetTopLevel(field, raw) => set_top_level(&mut record, *field, raw),
        FieldUpdate::SetDimension(field, raw) => set_dimension(&mut record.dimensions, *field, raw),
        FieldUpdate::SetAddress(side, field, raw) => {
            let next = record.address(*side).with_field(*field, raw.as_str());
            *record.address_mut(*side) = next;
        }
    }
    record
}

fn set_top_level(record: &mut ProductRecord, field: TopField, raw: &str) {
    match field {
        TopField::Name => record.name = raw.to_string(),
        TopField::OrderNumber => record.order_number = raw.to_string(),
        TopField::Price => record.price = coerce_number(raw),
        // An unrecognised selection is the same as "Select category"
        TopField::Category => record.category = raw.parse::<Category>().ok(),
        TopField::Brand => record.brand = raw.to_string(),
        TopField::Sku => record.sku = raw.to_string(),
        TopField::Quantity => record.quantity = coerce_number(raw),
    }
}

fn set_dimension(dimensions: &mut DimensionRecord, field: DimensionField, raw: &str) {
    match field {
        DimensionField::Length => dimensions.length = coerce_number(raw),
        DimensionField::Width => dimensions.width = coerce_number(raw),
        DimensionField::Height => dimensions.height = coerce_number(raw),
        DimensionField::Weight => dimensions.weight = coerce_number(raw),
        DimensionField::Unit => match raw.parse() {
            Ok(unit) => dimensions.unit = unit,
            Err(e) => tracing::debug!("Ignoring length unit edit: {}", e),
        },
        DimensionField::WeightUnit => match raw.parse() {
            Ok(unit) => dimensions.weight_unit = unit,
            Err(e) => tracing::debug!("Ignoring weight unit edit: {}", e),
        },
    }
}

/// Lenient number parsing for keystroke input.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"12abc"` reads as 12. Anything without a numeric prefix becomes 0.
/// Values that overflow to infinity (e.g. `"1e999"`) also become 0, so a
/// record never holds a non-finite number.
pub fn coerce_number(raw: &str) -> f64 {
    let text = raw.trim_start();
    let end = numeric_prefix_len(text.as_bytes());
    match text[..end].parse::<f64>() {
        Ok(value) if value.is_finite() && value != 0.0 => value,
        _ => 0.0,
    }
}

fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    // exponent only counts when at least one digit follows it
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}
